//! Portfolio copy: profile, stats, skills, projects.
//!
//! Kept as an embedded JSON document so editing the page text never touches
//! component code. The document is parsed once per render of the home page.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use serde::Deserialize;

const CONTENT_JSON: &str = include_str!("content.json");

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Portfolio {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub email: String,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub socials: Vec<Social>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Stat {
    pub label: String,
    /// Display value, e.g. `"50+"`. Numeric values count up on reveal.
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SkillGroup {
    pub name: String,
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub link: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Social {
    pub label: String,
    pub url: String,
}

impl Portfolio {
    /// Parse the embedded document.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when the document is malformed.
    pub fn load() -> Result<Self, serde_json::Error> {
        Self::parse(CONTENT_JSON)
    }

    /// # Errors
    ///
    /// Returns the `serde_json` error when `raw` is malformed.
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    #[must_use]
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// Every skill tag in display order, flattened across groups.
    #[must_use]
    pub fn skill_tags(&self) -> Vec<&str> {
        self.skills.iter().flat_map(|g| g.tags.iter().map(String::as_str)).collect()
    }
}
