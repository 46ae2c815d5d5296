//! Live page layout queries.
//!
//! Offsets and heights are read from the rendering shell each time they
//! are needed; nothing here is cached across resizes.

/// Measured geometry of one section in the virtual document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionLayout {
    /// Section identifier, matching `SectionContent::id`.
    pub id: String,
    /// Top offset of the section in document rows.
    pub top: u32,
    /// Height of the section in rows.
    pub height: u32,
}

impl SectionLayout {
    /// Create a section layout.
    #[must_use]
    pub fn new(id: impl Into<String>, top: u32, height: u32) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Bottom offset (exclusive).
    #[must_use]
    pub fn bottom(&self) -> u32 {
        self.top.saturating_add(self.height)
    }
}

/// Source of live layout measurements.
///
/// Implemented by the rendering shell against the current terminal size,
/// and by fixed fakes in tests.
pub trait LayoutProvider {
    /// Geometry of every section, in document order.
    fn section_layouts(&self) -> Vec<SectionLayout>;

    /// Total height of the virtual document in rows.
    fn document_height(&self) -> u32;
}

/// A fixed layout, useful for tests and headless runs.
#[derive(Debug, Clone, Default)]
pub struct FixedLayout {
    sections: Vec<SectionLayout>,
}

impl FixedLayout {
    /// Create a fixed layout from explicit section geometry.
    #[must_use]
    pub fn new(sections: Vec<SectionLayout>) -> Self {
        Self { sections }
    }
}

impl LayoutProvider for FixedLayout {
    fn section_layouts(&self) -> Vec<SectionLayout> {
        self.sections.clone()
    }

    fn document_height(&self) -> u32 {
        self.sections.iter().map(SectionLayout::bottom).max().unwrap_or(0)
    }
}
