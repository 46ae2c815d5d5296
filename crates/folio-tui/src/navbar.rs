//! Fixed navigation bar.

use folio_core::PortfolioEngine;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Render the navbar: brand, one link per section, scroll indicator.
pub fn render_navbar(frame: &mut Frame, area: Rect, engine: &PortfolioEngine, theme: &ColorTheme) {
    let active = engine.view().active_section();
    let mut spans = vec![
        Span::styled(engine.content().name.clone(), theme.heading_style()),
        Span::raw("   "),
    ];

    for (i, section) in engine.content().sections.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" · ", theme.muted_style()));
        }
        let style = if active == Some(section.id.as_str()) {
            theme.active_nav_style()
        } else {
            theme.text_style()
        };
        spans.push(Span::styled(format!("[{}] {}", i + 1, section.title), style));
    }

    if engine.view().back_to_top_visible() {
        spans.push(Span::styled("   ↑ top (Home)", theme.muted_style()));
    }

    // The border doubles as the "scrolled" elevation cue.
    let border_style = if engine.view().navbar_scrolled() {
        theme.heading_style()
    } else {
        theme.muted_style()
    };
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(vec![Line::from(spans)]).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::default_engine;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn navbar_renders_brand_and_links() {
        let engine = default_engine();
        let theme = ColorTheme::default();
        let backend = TestBackend::new(120, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_navbar(frame, frame.area(), &engine, &theme))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let content: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("Nimesh"));
        assert!(content.contains("Projects"));
    }
}
