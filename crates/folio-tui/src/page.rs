//! Virtual page document.
//!
//! The whole portfolio is built as one tall column of lines; the view
//! scrolls a window over it. Section geometry is measured while the
//! lines are built, so the engine always sees the layout that is
//! actually on screen.

use folio_core::{LayoutProvider, PortfolioEngine, SectionLayout};
use ratatui::text::Line;

use crate::about;
use crate::contact;
use crate::hero;
use crate::projects;
use crate::skills;
use crate::styles::ColorTheme;

/// The built page: lines plus the geometry measured during the build.
pub struct PageDocument {
    pub lines: Vec<Line<'static>>,
    sections: Vec<SectionLayout>,
}

impl PageDocument {
    /// Build the document for the current engine state and width.
    #[must_use]
    pub fn build(
        engine: &PortfolioEngine,
        theme: &ColorTheme,
        width: u16,
        selected_project: usize,
    ) -> Self {
        let mut lines: Vec<Line<'static>> = Vec::new();
        let mut sections = Vec::new();

        for section in &engine.content().sections {
            let top = u32::try_from(lines.len()).unwrap_or(u32::MAX);
            let revealed = engine.reveals().is_revealed(&section.id);
            let mut body = match section.id.as_str() {
                "home" => hero::lines(engine, theme, width),
                "about" => about::lines(engine, theme, width, revealed),
                "skills" => skills::lines(engine, theme, revealed),
                "projects" => projects::lines(engine, theme, width, selected_project, revealed),
                "contact" => contact::lines(engine, theme, width, revealed),
                // Unknown section ids render as a bare heading.
                _ => vec![Line::styled(
                    format!("  {}", section.title),
                    theme.heading_style(),
                )],
            };
            body.push(Line::raw(""));
            let height = u32::try_from(body.len()).unwrap_or(u32::MAX);
            lines.append(&mut body);
            sections.push(SectionLayout::new(section.id.clone(), top, height));
        }

        Self { lines, sections }
    }

    /// Word-wrap plain text to a width, preserving paragraph breaks.
    #[must_use]
    pub fn wrap(text: &str, width: usize) -> Vec<String> {
        let width = width.max(10);
        let mut out = Vec::new();
        for paragraph in text.split('\n') {
            let mut current = String::new();
            for word in paragraph.split_whitespace() {
                if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width
                {
                    out.push(std::mem::take(&mut current));
                }
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
            }
            out.push(current);
        }
        out
    }
}

impl LayoutProvider for PageDocument {
    fn section_layouts(&self) -> Vec<SectionLayout> {
        self.sections.clone()
    }

    fn document_height(&self) -> u32 {
        u32::try_from(self.lines.len()).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::default_engine;

    #[test]
    fn document_covers_every_section_contiguously() {
        let engine = default_engine();
        let doc = PageDocument::build(&engine, &ColorTheme::default(), 80, 0);

        let sections = doc.section_layouts();
        assert_eq!(sections.len(), 5);
        assert_eq!(sections[0].id, "home");
        assert_eq!(sections[0].top, 0);
        for pair in sections.windows(2) {
            assert_eq!(pair[0].bottom(), pair[1].top);
        }
        assert_eq!(doc.document_height(), sections[4].bottom());
    }

    #[test]
    fn reveal_does_not_change_geometry() {
        use folio_core::{PortfolioEngine, SiteContent, ViewPolicy};

        let mut engine =
            PortfolioEngine::new(SiteContent::embedded(), ViewPolicy::terminal(), false);
        let theme = ColorTheme::default();
        let before = PageDocument::build(&engine, &theme, 80, 0).section_layouts();

        let t0 = std::time::Instant::now();
        engine.start(t0);
        let doc = PageDocument::build(&engine, &theme, 80, 0);
        engine.set_scroll(1);
        engine.tick(t0, &doc, 40);
        assert!(engine.reveals().is_revealed("home"));

        let after = PageDocument::build(&engine, &theme, 80, 0).section_layouts();
        assert_eq!(before, after);
    }

    #[test]
    fn wrap_respects_width() {
        let lines = PageDocument::wrap("one two three four five six seven", 12);
        assert!(lines.iter().all(|l| l.chars().count() <= 12));
        assert_eq!(lines.join(" "), "one two three four five six seven");
    }

    #[test]
    fn wrap_keeps_empty_paragraphs() {
        let lines = PageDocument::wrap("a\n\nb", 20);
        assert_eq!(lines, vec!["a", "", "b"]);
    }
}
