//! About section lines: bio text and animated stat counters.

use folio_core::PortfolioEngine;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::page::PageDocument;
use crate::styles::ColorTheme;

/// Build the about section. Unrevealed content renders muted.
pub fn lines(
    engine: &PortfolioEngine,
    theme: &ColorTheme,
    width: u16,
    revealed: bool,
) -> Vec<Line<'static>> {
    let content = engine.content();
    let body_style = body_style(theme, revealed);
    let mut out = Vec::new();

    out.push(heading(engine, "about", theme));
    for wrapped in PageDocument::wrap(&content.about, usize::from(width).saturating_sub(4)) {
        out.push(Line::styled(format!("  {wrapped}"), body_style));
    }
    out.push(Line::raw(""));

    for (stat, counter) in content.stats.iter().zip(engine.counters()) {
        out.push(Line::from(vec![
            Span::styled(format!("  {:<22}", stat.label), body_style),
            Span::styled(
                format!("{}{}", counter.current(), stat.suffix),
                if revealed {
                    theme.heading_style()
                } else {
                    theme.muted_style()
                },
            ),
        ]));
    }

    out
}

pub(crate) fn heading(
    engine: &PortfolioEngine,
    id: &str,
    theme: &ColorTheme,
) -> Line<'static> {
    let title = engine.content().section_title(id).unwrap_or(id).to_string();
    Line::styled(format!("  ── {title} ──"), theme.heading_style())
}

pub(crate) fn body_style(theme: &ColorTheme, revealed: bool) -> Style {
    if revealed {
        theme.text_style()
    } else {
        theme.muted_style()
    }
}
