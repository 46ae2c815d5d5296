//! Contact section lines: intro, form fields, submission state.

use folio_core::{Field, PortfolioEngine};
use ratatui::text::{Line, Span};

use crate::about::{body_style, heading};
use crate::page::PageDocument;
use crate::styles::ColorTheme;

/// Build the contact section.
pub fn lines(
    engine: &PortfolioEngine,
    theme: &ColorTheme,
    width: u16,
    revealed: bool,
) -> Vec<Line<'static>> {
    let body = body_style(theme, revealed);
    let form = engine.form();
    let mut out = vec![heading(engine, "contact", theme)];

    for wrapped in PageDocument::wrap(
        &engine.content().contact_intro,
        usize::from(width).saturating_sub(4),
    ) {
        out.push(Line::styled(format!("  {wrapped}"), body));
    }
    out.push(Line::raw(""));

    for field in Field::ALL {
        let focused = form.focus() == field;
        let marker = if focused { ">" } else { " " };
        let label_style = if focused { theme.heading_style() } else { body };
        let value = form.value(field);
        let cursor = if focused && !form.is_submitting() { "▌" } else { "" };
        let mut spans = vec![
            Span::styled(format!("  {marker} {:<9}", field.label()), label_style),
            Span::styled(format!("{value}{cursor}"), theme.text_style()),
        ];
        if let Some(error) = form.field_error(field) {
            spans.push(Span::styled(
                format!("  ⚠ {error}"),
                theme.toast_style(folio_core::NotificationKind::Error),
            ));
        }
        out.push(Line::from(spans));
    }

    out.push(Line::raw(""));
    if form.is_submitting() {
        out.push(Line::styled(
            "  Sending...".to_string(),
            theme.typing_style(),
        ));
    } else {
        out.push(Line::styled(
            "  [e] edit  [Tab] next field  [Enter] send".to_string(),
            theme.muted_style(),
        ));
    }

    out
}
