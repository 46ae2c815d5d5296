//! Site content model.
//!
//! All entities are derived from static content at startup and persist
//! for the lifetime of the page view; nothing is created or destroyed
//! dynamically.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::FolioError;

/// Embedded default site content.
const DEFAULT_CONTENT: &str = include_str!("../assets/default.json");

/// A named region of the page. Layout (offset/height) is measured live
/// by the rendering shell, never stored here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionContent {
    /// Stable identifier, referenced by nav links.
    pub id: String,
    /// Display title.
    pub title: String,
}

/// A statistic animated from 0 to `target` on first reveal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatContent {
    pub label: String,
    pub target: u64,
    #[serde(default)]
    pub suffix: String,
}

/// A single skill with a proficiency level in percent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

/// A named group of skills.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub name: String,
    pub skills: Vec<Skill>,
}

/// A portfolio project entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub image: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub live: String,
}

/// Complete site content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteContent {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub typing_phrases: Vec<String>,
    #[serde(default)]
    pub sections: Vec<SectionContent>,
    #[serde(default)]
    pub about: String,
    /// Section whose reveal triggers the stat count-ups.
    #[serde(default = "default_stats_section")]
    pub stats_section: String,
    #[serde(default)]
    pub stats: Vec<StatContent>,
    #[serde(default)]
    pub skill_groups: Vec<SkillGroup>,
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Fallback project id for unknown lookups.
    #[serde(default)]
    pub default_project: String,
    #[serde(default)]
    pub contact_intro: String,
}

fn default_stats_section() -> String {
    "about".to_string()
}

impl SiteContent {
    /// Load the embedded default content.
    ///
    /// # Panics
    /// Never in practice; the embedded asset is validated by tests.
    #[must_use]
    pub fn embedded() -> Self {
        serde_json::from_str(DEFAULT_CONTENT).expect("embedded content is valid JSON")
    }

    /// Parse content from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, FolioError> {
        let content: Self =
            serde_json::from_str(json).map_err(|e| FolioError::Content(e.to_string()))?;
        content.validate()?;
        Ok(content)
    }

    /// Load and validate content from a file.
    pub fn from_path(path: &Path) -> Result<Self, FolioError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Validate structural invariants of the content.
    pub fn validate(&self) -> Result<(), FolioError> {
        if self.name.trim().is_empty() {
            return Err(FolioError::Content("name must not be empty".to_string()));
        }

        let mut seen = std::collections::HashSet::new();
        for section in &self.sections {
            if !seen.insert(section.id.as_str()) {
                return Err(FolioError::Content(format!(
                    "duplicate section id: {}",
                    section.id
                )));
            }
        }

        if !self.projects.is_empty()
            && !self.projects.iter().any(|p| p.id == self.default_project)
        {
            return Err(FolioError::Content(format!(
                "default_project \"{}\" is not in the catalog",
                self.default_project
            )));
        }

        for group in &self.skill_groups {
            for skill in &group.skills {
                if skill.level > 100 {
                    return Err(FolioError::Content(format!(
                        "skill \"{}\" has level {} (max 100)",
                        skill.name, skill.level
                    )));
                }
            }
        }

        Ok(())
    }

    /// Look up a section's title by id.
    #[must_use]
    pub fn section_title(&self, id: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.title.as_str())
    }
}
