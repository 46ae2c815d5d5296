//! Project detail modal.

use folio_core::content::Project;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Render the project modal over the page.
pub fn render_modal(frame: &mut Frame, project: &Project, theme: &ColorTheme) {
    let area = centered_rect(70, 60, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(project.title.clone(), theme.heading_style()),
            Span::styled(format!("  [{}]", project.category), theme.muted_style()),
        ]),
        Line::raw(""),
    ];
    lines.push(Line::styled(project.description.clone(), theme.text_style()));
    lines.push(Line::raw(""));
    if !project.tech.is_empty() {
        lines.push(Line::styled(
            format!("Tech: {}", project.tech.join(", ")),
            theme.typing_style(),
        ));
    }
    if !project.github.is_empty() && project.github != "#" {
        lines.push(Line::styled(
            format!("Code: {}", project.github),
            theme.muted_style(),
        ));
    }
    if !project.live.is_empty() && project.live != "#" {
        lines.push(Line::styled(
            format!("Live: {}", project.live),
            theme.muted_style(),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.heading_style())
        .title(" Project ");
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

/// A rect centered in `area` taking the given percentages of it.
///
/// The multiply is widened to `u32` so wide terminals do not overflow
/// `u16` arithmetic.
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let scale = |dim: u16, percent: u16| {
        u16::try_from(u32::from(dim) * u32::from(percent) / 100)
            .unwrap_or(dim)
            .min(dim)
    };
    let width = scale(area.width, percent_x);
    let height = scale(area.height, percent_y);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
