use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::alphabet::Alphabet;
use crate::errors::{AlphabetNotFoundError, find_closest_alphabet};

/// Configuration for a single named alphabet loaded from TOML.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AlphabetConfig {
    /// The symbols, in digit order
    pub chars: String,
}

/// Collection of named alphabets loaded from TOML files.
#[derive(Debug, Deserialize, Default)]
pub struct AlphabetsConfig {
    #[serde(default)]
    pub alphabets: HashMap<String, AlphabetConfig>,
}

impl AlphabetsConfig {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in alphabets.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../alphabets.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Load configuration from custom file path
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Load configuration with user overrides from standard locations
    /// 1. Start with built-in alphabets
    /// 2. Override with ~/.config/base-x/alphabets.toml if it exists
    /// 3. Override with ./alphabets.toml if it exists in current directory
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("base-x").join("alphabets.toml");
            config.merge_optional(&user_config_path, "user");
        }

        config.merge_optional(Path::new("alphabets.toml"), "local");

        Ok(config)
    }

    /// Merges the file at `path` if present; a broken file is reported and skipped.
    fn merge_optional(&mut self, path: &Path, label: &str) {
        if !path.exists() {
            return;
        }
        match Self::load_from_file(path) {
            Ok(other) => self.merge(other),
            Err(e) => {
                eprintln!(
                    "Warning: Failed to load {} config from {:?}: {}",
                    label, path, e
                );
            }
        }
    }

    /// Merge another config into this one, overriding existing alphabets
    pub fn merge(&mut self, other: AlphabetsConfig) {
        self.alphabets.extend(other.alphabets);
    }

    pub fn get_alphabet(&self, name: &str) -> Option<&AlphabetConfig> {
        self.alphabets.get(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.alphabets.keys().cloned().collect();
        names.sort();
        names
    }

    /// Builds the named alphabet.
    ///
    /// # Errors
    ///
    /// Returns [`AlphabetNotFoundError`] (with a spelling suggestion) for an
    /// unknown name, or an [`AlphabetError`](crate::AlphabetError) if the
    /// configured symbols are malformed.
    pub fn alphabet(&self, name: &str) -> Result<Alphabet, Box<dyn std::error::Error>> {
        let alphabet_config = self.get_alphabet(name).ok_or_else(|| {
            let suggestion = find_closest_alphabet(name, &self.names());
            AlphabetNotFoundError::new(name, suggestion)
        })?;

        Ok(Alphabet::new(&alphabet_config.chars)?)
    }
}
