//! TOML configuration for custom transformation profiles.
//!
//! ```toml
//! [[profile]]
//! name = "first-to-second-formal"
//! source = ["i", "me", "my", "mine", "myself", "we", "us", "our", "ours", "ourselves"]
//! target = ["you", "you", "your", "yours", "yourself", "you", "you", "your", "yours", "yourselves"]
//!
//! [profile.singular]
//! source_tag = "VBP"
//! target_tag = "VBP"
//! main_form = 1
//! conjunct_form = 1
//! contractions = { "'m" = "'re" }
//! ```
//!
//! A profile without a `plural` table reuses its `singular` agreement.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::profile::{Agreement, Direction, TransformationProfile};
use crate::ProfileError;

/// Serialized form of a single profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub name: String,
    pub source: Vec<String>,
    pub target: Vec<String>,
    pub singular: Agreement,
    #[serde(default)]
    pub plural: Option<Agreement>,
}

impl ProfileConfig {
    pub fn into_profile(self) -> Result<TransformationProfile, ProfileError> {
        let plural = self.plural.unwrap_or_else(|| self.singular.clone());
        TransformationProfile::new(self.name, self.source, self.target, self.singular, plural)
    }
}

#[derive(Debug, Default, Deserialize)]
struct ProfileFile {
    #[serde(default)]
    profile: Vec<ProfileConfig>,
}

impl TransformationProfile {
    /// Parse a single profile from a TOML document (top-level keys, no `[[profile]]`).
    pub fn from_toml_str(content: &str) -> Result<Self, ProfileError> {
        let config: ProfileConfig = toml::from_str(content)?;
        config.into_profile()
    }
}

/// A named collection of profiles, looked up by name.
#[derive(Debug, Clone, Default)]
pub struct ProfileSet {
    profiles: Vec<TransformationProfile>,
}

impl ProfileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A set holding a copy of every built-in direction.
    pub fn built_in() -> Self {
        Self {
            profiles: Direction::ALL
                .iter()
                .map(|direction| direction.profile().clone())
                .collect(),
        }
    }

    /// Parse every `[[profile]]` table of a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ProfileError> {
        let file: ProfileFile = toml::from_str(content)?;
        let profiles = file
            .profile
            .into_iter()
            .map(ProfileConfig::into_profile)
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("loaded {} transformation profile(s)", profiles.len());
        Ok(Self { profiles })
    }

    /// Load a profile file from disk.
    pub fn load(path: &Path) -> Result<Self, ProfileError> {
        let content = fs::read_to_string(path).map_err(|source| ProfileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Add profiles, replacing any existing profile with the same name.
    pub fn extend(&mut self, other: ProfileSet) {
        for profile in other.profiles {
            self.insert(profile);
        }
    }

    pub fn insert(&mut self, profile: TransformationProfile) {
        match self.profiles.iter_mut().find(|p| p.name() == profile.name()) {
            Some(existing) => *existing = profile,
            None => self.profiles.push(profile),
        }
    }

    pub fn get(&self, name: &str) -> Option<&TransformationProfile> {
        self.profiles.iter().find(|p| p.name() == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.profiles.iter().map(|p| p.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
