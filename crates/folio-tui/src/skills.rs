//! Skills section lines: grouped proficiency bars.

use folio_core::PortfolioEngine;
use ratatui::text::{Line, Span};

use crate::about::{body_style, heading};
use crate::styles::ColorTheme;

const BAR_WIDTH: usize = 20;

/// Build the skills section.
pub fn lines(engine: &PortfolioEngine, theme: &ColorTheme, revealed: bool) -> Vec<Line<'static>> {
    let body = body_style(theme, revealed);
    let mut out = vec![heading(engine, "skills", theme)];

    for group in &engine.content().skill_groups {
        out.push(Line::styled(format!("  {}", group.name), theme.heading_style()));
        for skill in &group.skills {
            // Bars fill only once the section is revealed.
            let filled = if revealed {
                BAR_WIDTH * usize::from(skill.level) / 100
            } else {
                0
            };
            let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled));
            out.push(Line::from(vec![
                Span::styled(format!("    {:<14}", skill.name), body),
                Span::styled(bar, theme.typing_style()),
                Span::styled(format!(" {:>3}%", skill.level), body),
            ]));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::default_engine;

    fn text_of(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn bars_are_empty_until_revealed() {
        let engine = default_engine();
        let theme = ColorTheme::default();

        let hidden = text_of(&lines(&engine, &theme, false));
        assert!(!hidden.contains('█'));

        let shown = text_of(&lines(&engine, &theme, true));
        assert!(shown.contains('█'));
        assert!(shown.contains("React"));
    }

    #[test]
    fn line_count_is_stable_across_reveal() {
        let engine = default_engine();
        let theme = ColorTheme::default();
        assert_eq!(lines(&engine, &theme, false).len(), lines(&engine, &theme, true).len());
    }
}
