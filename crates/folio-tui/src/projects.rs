//! Projects section lines: filter bar and selectable project grid.

use folio_core::{PortfolioEngine, ProjectFilter};
use ratatui::text::{Line, Span};

use crate::about::{body_style, heading};
use crate::page::PageDocument;
use crate::styles::ColorTheme;

/// Build the projects section. `selected` indexes into the filtered
/// list and is clamped by the caller.
pub fn lines(
    engine: &PortfolioEngine,
    theme: &ColorTheme,
    width: u16,
    selected: usize,
    revealed: bool,
) -> Vec<Line<'static>> {
    let body = body_style(theme, revealed);
    let catalog = engine.catalog();
    let mut out = vec![heading(engine, "projects", theme)];

    // Filter bar: All | Web Application | AI/ML | ...
    let mut filter_spans = vec![Span::styled("  Filter: ".to_string(), body)];
    let mut labels = vec!["All".to_string()];
    labels.extend(catalog.categories().iter().map(ToString::to_string));
    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            filter_spans.push(Span::styled(" | ".to_string(), theme.muted_style()));
        }
        let active = match catalog.filter() {
            ProjectFilter::All => i == 0,
            ProjectFilter::Category(cat) => label == cat,
        };
        let style = if active { theme.active_nav_style() } else { body };
        filter_spans.push(Span::styled(label.clone(), style));
    }
    out.push(Line::from(filter_spans));
    out.push(Line::raw(""));

    let filtered = catalog.filtered();
    if filtered.is_empty() {
        out.push(Line::styled(
            "  (no projects in this category)".to_string(),
            theme.muted_style(),
        ));
    }
    for (i, project) in filtered.iter().enumerate() {
        let marker = if i == selected { "▶" } else { " " };
        out.push(Line::from(vec![
            Span::styled(format!("  {marker} "), theme.typing_style()),
            Span::styled(project.title.clone(), if i == selected {
                theme.heading_style()
            } else {
                body
            }),
            Span::styled(format!("  [{}]", project.category), theme.muted_style()),
        ]));
        let summary = first_wrapped(&project.description, usize::from(width).saturating_sub(6));
        out.push(Line::styled(format!("      {summary}"), theme.muted_style()));
    }

    out
}

fn first_wrapped(text: &str, width: usize) -> String {
    PageDocument::wrap(text, width)
        .into_iter()
        .next()
        .unwrap_or_default()
}
