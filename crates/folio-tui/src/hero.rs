//! Hero section lines: name, tagline, typing effect.

use folio_core::PortfolioEngine;
use ratatui::text::{Line, Span};

use crate::page::PageDocument;
use crate::styles::ColorTheme;

/// Build the hero section.
pub fn lines(engine: &PortfolioEngine, theme: &ColorTheme, width: u16) -> Vec<Line<'static>> {
    let content = engine.content();
    let mut out = Vec::new();

    out.push(Line::raw(""));
    out.push(Line::styled(
        format!("  Hi, I'm {}", content.name),
        theme.heading_style(),
    ));

    let typed = engine.typing_text();
    out.push(Line::from(vec![
        Span::raw("  I'm a "),
        Span::styled(typed, theme.typing_style()),
        Span::styled("▌", theme.muted_style()),
    ]));

    out.push(Line::raw(""));
    for wrapped in PageDocument::wrap(&content.tagline, usize::from(width).saturating_sub(4)) {
        out.push(Line::styled(format!("  {wrapped}"), theme.muted_style()));
    }

    out
}
