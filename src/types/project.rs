use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{AdminError, Result};

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9][a-z0-9_-]{0,63}$").expect("tag pattern is valid")
});

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub endpoints: Vec<String>,
    #[serde(default)]
    pub tag: String,
}

impl Project {
    /// Match by exact id or case-insensitive name.
    pub fn matches(&self, key: &str) -> bool {
        self.id == key || self.name.eq_ignore_ascii_case(key)
    }
}

/// Changes requested for a single project.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectEdit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoints: Option<Vec<String>>,
}

impl ProjectEdit {
    pub fn is_empty(&self) -> bool {
        self.tag.is_none() && self.endpoints.is_none()
    }

    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(AdminError::EmptyEdit);
        }

        if let Some(tag) = &self.tag {
            if !TAG_RE.is_match(tag) {
                return Err(AdminError::InvalidTag(tag.clone()));
            }
        }

        Ok(())
    }

    /// Apply the change set to a local copy, as the directory would.
    #[cfg(test)]
    pub fn apply_to(&self, project: &Project) -> Project {
        let mut updated = project.clone();
        if let Some(tag) = &self.tag {
            updated.tag = tag.clone();
        }
        if let Some(endpoints) = &self.endpoints {
            updated.endpoints = endpoints.clone();
        }
        updated
    }
}
