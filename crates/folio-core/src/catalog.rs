//! Project catalog, modal selection, and category filter.

use crate::content::Project;

/// Category filter over the project grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    /// Show everything.
    #[default]
    All,
    /// Show only projects whose category matches exactly.
    Category(String),
}

impl ProjectFilter {
    /// Whether a project passes the filter.
    #[must_use]
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Category(cat) => project.category == *cat,
        }
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            ProjectFilter::All => "All",
            ProjectFilter::Category(cat) => cat,
        }
    }
}

/// The project catalog with its active filter and modal selection.
#[derive(Debug, Clone)]
pub struct ProjectCatalog {
    projects: Vec<Project>,
    default_id: String,
    filter: ProjectFilter,
    open_project: Option<String>,
}

impl ProjectCatalog {
    /// Create a catalog. `default_id` is the fallback for unknown
    /// lookups; content validation guarantees it exists when the
    /// catalog is non-empty.
    #[must_use]
    pub fn new(projects: Vec<Project>, default_id: impl Into<String>) -> Self {
        Self {
            projects,
            default_id: default_id.into(),
            filter: ProjectFilter::All,
            open_project: None,
        }
    }

    /// All projects, unfiltered.
    #[must_use]
    pub fn all(&self) -> &[Project] {
        &self.projects
    }

    /// Projects passing the active filter, in catalog order.
    #[must_use]
    pub fn filtered(&self) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| self.filter.matches(p))
            .collect()
    }

    /// Distinct categories in catalog order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for project in &self.projects {
            if !seen.contains(&project.category.as_str()) {
                seen.push(project.category.as_str());
            }
        }
        seen
    }

    /// The active filter.
    #[must_use]
    pub fn filter(&self) -> &ProjectFilter {
        &self.filter
    }

    /// Replace the active filter.
    pub fn set_filter(&mut self, filter: ProjectFilter) {
        self.filter = filter;
    }

    /// Advance to the next filter in the cycle All, cat1, cat2, ...
    pub fn cycle_filter(&mut self) {
        let categories = self.categories();
        let next = match &self.filter {
            ProjectFilter::All => categories.first().map(ToString::to_string),
            ProjectFilter::Category(current) => categories
                .iter()
                .position(|c| *c == current.as_str())
                .and_then(|i| categories.get(i + 1))
                .map(ToString::to_string),
        };
        self.filter = match next {
            Some(cat) => ProjectFilter::Category(cat),
            None => ProjectFilter::All,
        };
    }

    /// Look up a project by id, falling back to the default entry for
    /// unknown ids. None only when the catalog is empty.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects
            .iter()
            .find(|p| p.id == id)
            .or_else(|| self.projects.iter().find(|p| p.id == self.default_id))
    }

    /// Open the modal for a project id (fallback applies).
    /// No-op when the catalog is empty.
    pub fn open(&mut self, id: &str) {
        if let Some(project) = self.get(id) {
            self.open_project = Some(project.id.clone());
        }
    }

    /// Close the modal. Idempotent.
    pub fn close(&mut self) {
        self.open_project = None;
    }

    /// The project shown in the modal, if one is open.
    #[must_use]
    pub fn open_project(&self) -> Option<&Project> {
        let id = self.open_project.as_deref()?;
        self.projects.iter().find(|p| p.id == id)
    }
}
