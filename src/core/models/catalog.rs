//! Role catalog model
//!
//! The catalog maps a skill name to the roles it can lead to, each with the
//! minimum proficiency a student needs to qualify. A catalog is built once
//! and then only read; every accessor takes `&self`.

use crate::core::error::DataError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

/// Embedded reference catalog (Python, JavaScript, Java, C++)
const REFERENCE_CATALOG: &str = include_str!("../../../assets/DefaultRoleCatalog.toml");

/// A candidate role listed under one skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCatalogEntry {
    /// Role title
    pub role: String,
    /// Hiring company
    pub company: String,
    /// Minimum proficiency (inclusive) needed to qualify, in `1..=100`
    pub min_score: u8,
}

impl RoleCatalogEntry {
    /// Create a new catalog entry
    #[must_use]
    pub fn new(role: impl Into<String>, company: impl Into<String>, min_score: u8) -> Self {
        Self {
            role: role.into(),
            company: company.into(),
            min_score,
        }
    }
}

/// On-disk layout: an ordered list of skills, each with its roles.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    skills: Vec<SkillSection>,
}

#[derive(Debug, Deserialize)]
struct SkillSection {
    skill: String,
    #[serde(default)]
    roles: Vec<RoleCatalogEntry>,
}

/// Immutable skill → roles lookup table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleCatalog {
    roles: HashMap<String, Vec<RoleCatalogEntry>>,
    /// Skill keys in declaration order, for display
    order: Vec<String>,
}

impl RoleCatalog {
    /// Build the reference catalog shipped with the crate.
    ///
    /// # Panics
    /// Panics if the embedded catalog asset is invalid. The asset is compiled
    /// in and covered by tests.
    #[must_use]
    pub fn reference() -> Self {
        Self::from_toml(REFERENCE_CATALOG).expect("Failed to parse compiled-in role catalog")
    }

    /// Build a catalog from `(skill, entries)` pairs.
    ///
    /// # Errors
    /// Returns an error if a skill appears twice or an entry is invalid.
    pub fn from_entries<I, S>(skills: I) -> Result<Self, DataError>
    where
        I: IntoIterator<Item = (S, Vec<RoleCatalogEntry>)>,
        S: Into<String>,
    {
        let mut catalog = Self::default();
        for (skill, entries) in skills {
            catalog.insert(skill.into(), entries)?;
        }
        Ok(catalog)
    }

    /// Parse a catalog from TOML text.
    ///
    /// ```toml
    /// [[skills]]
    /// skill = "Python"
    /// roles = [{ role = "Backend Developer", company = "TechStack Inc", min_score = 80 }]
    /// ```
    ///
    /// # Errors
    /// Returns an error if the TOML is malformed or violates catalog rules.
    pub fn from_toml(toml_str: &str) -> Result<Self, DataError> {
        let file: CatalogFile = toml::from_str(toml_str)?;
        Self::from_entries(file.skills.into_iter().map(|s| (s.skill, s.roles)))
    }

    /// Load a catalog from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DataError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| DataError::io(path, e))?;
        let catalog = Self::from_toml(&content)?;
        crate::debug!(
            "Loaded role catalog from {} ({} skills, {} roles)",
            path.display(),
            catalog.skill_count(),
            catalog.role_count()
        );
        Ok(catalog)
    }

    fn insert(&mut self, skill: String, entries: Vec<RoleCatalogEntry>) -> Result<(), DataError> {
        if skill.trim().is_empty() {
            return Err(DataError::Invalid("catalog skill name is empty".to_string()));
        }
        if self.roles.contains_key(&skill) {
            return Err(DataError::Invalid(format!(
                "skill '{skill}' is listed more than once"
            )));
        }
        for entry in &entries {
            if entry.role.trim().is_empty() || entry.company.trim().is_empty() {
                return Err(DataError::Invalid(format!(
                    "role under '{skill}' is missing a title or company"
                )));
            }
            if !(1..=100).contains(&entry.min_score) {
                return Err(DataError::Invalid(format!(
                    "min_score for '{}' under '{skill}' must be between 1 and 100, got {}",
                    entry.role, entry.min_score
                )));
            }
        }
        self.order.push(skill.clone());
        self.roles.insert(skill, entries);
        Ok(())
    }

    /// Roles listed under `skill`; empty when the skill is not a catalog key.
    #[must_use]
    pub fn roles_for(&self, skill: &str) -> &[RoleCatalogEntry] {
        self.roles.get(skill).map(Vec::as_slice).unwrap_or_default()
    }

    /// Whether `skill` is a catalog key
    #[must_use]
    pub fn contains(&self, skill: &str) -> bool {
        self.roles.contains_key(skill)
    }

    /// Skill keys in declaration order
    pub fn skills(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Number of skill keys
    #[must_use]
    pub fn skill_count(&self) -> usize {
        self.order.len()
    }

    /// Total number of role entries across all skills
    #[must_use]
    pub fn role_count(&self) -> usize {
        self.roles.values().map(Vec::len).sum()
    }
}

impl fmt::Display for RoleCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for skill in &self.order {
            writeln!(f, "{skill}")?;
            for entry in self.roles_for(skill) {
                writeln!(
                    f,
                    "  {} @ {} (min {})",
                    entry.role, entry.company, entry.min_score
                )?;
            }
        }
        Ok(())
    }
}
