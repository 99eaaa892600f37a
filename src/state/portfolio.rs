//! Portfolio page content

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Content shipped with the binary
const BUNDLED_PORTFOLIO: &str = include_str!("../../assets/portfolio.json");

/// Page owner, shown in the hero section and the splash screen
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Owner {
    pub name: String,
    pub title: String,
    pub tagline: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub details: String,
}

/// Skill proficiency shown as a progress bar
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Proficiency {
    pub name: String,
    /// Percentage, clamped to 100 when rendered
    pub level: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SkillCategory {
    pub name: String,
    pub items: Vec<String>,
    pub progress: Vec<Proficiency>,
}

/// Experience timeline entry
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TimelineItem {
    pub role: String,
    pub organization: String,
    pub period: String,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProjectCard {
    pub name: String,
    pub description: String,
    pub tech: Vec<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Achievement {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ContactLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub links: Vec<ContactLink>,
    /// Whether the contact form is shown
    pub form: bool,
}

impl Default for Contact {
    fn default() -> Self {
        Self {
            email: None,
            phone: None,
            location: None,
            links: Vec::new(),
            form: true,
        }
    }
}

/// Everything rendered on the page. Empty sections are left out of the page
/// and the navigation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Portfolio {
    pub owner: Owner,
    pub about: Vec<String>,
    pub education: Vec<Education>,
    pub skills: Vec<SkillCategory>,
    pub experience: Vec<TimelineItem>,
    pub projects: Vec<ProjectCard>,
    pub achievements: Vec<Achievement>,
    pub contact: Option<Contact>,
}

impl Portfolio {
    /// Content compiled into the binary
    pub fn bundled() -> Result<Self> {
        serde_json::from_str(BUNDLED_PORTFOLIO).context("Bundled portfolio content is malformed")
    }

    /// Load content from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read portfolio from {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse portfolio from {}", path.display()))
    }

    /// Load user content if configured, falling back to the bundled page
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            match Self::from_file(path) {
                Ok(portfolio) => {
                    tracing::info!(path = %path.display(), "Loaded portfolio content");
                    return Ok(portfolio);
                }
                Err(err) => {
                    tracing::warn!("{err:#}; using bundled content");
                }
            }
        }
        Self::bundled()
    }

    /// Contact email, if the page has one
    pub fn contact_email(&self) -> Option<&str> {
        self.contact.as_ref().and_then(|c| c.email.as_deref())
    }

    /// Whether the contact form is part of the page
    pub fn has_contact_form(&self) -> bool {
        self.contact.as_ref().is_some_and(|c| c.form)
    }
}
