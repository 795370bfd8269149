//! Assistant configuration
//!
//! Defaults, optionally overridden by a JSON file, then by environment
//! variables.

use crate::core::types::{Platform, Relationship};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Credential for a translation backend. Accepted, not used by the
    /// phrase-table translator.
    pub translate_api_key: Option<String>,
    /// Credential for a completion backend. Accepted, not used by the
    /// template reply generator.
    pub completion_api_key: Option<String>,
    pub default_platform: Platform,
    pub default_relationship: Relationship,
    /// Cap on the history handed to the reply generator; `None` means all.
    pub history_window: Option<usize>,
    /// Fixed seed for reproducible template draws.
    pub rng_seed: Option<u64>,
    /// Where the session snapshot is loaded from and saved to.
    pub session_path: Option<PathBuf>,
    pub log_level: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            translate_api_key: None,
            completion_api_key: None,
            default_platform: Platform::WhatsApp,
            default_relationship: Relationship::Friend,
            history_window: None,
            rng_seed: None,
            session_path: None,
            log_level: "info".to_string(),
        }
    }
}

// Keys stay out of logs.
impl fmt::Debug for AssistantConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |key: &Option<String>| key.as_ref().map(|_| "<redacted>");
        f.debug_struct("AssistantConfig")
            .field("translate_api_key", &redact(&self.translate_api_key))
            .field("completion_api_key", &redact(&self.completion_api_key))
            .field("default_platform", &self.default_platform)
            .field("default_relationship", &self.default_relationship)
            .field("history_window", &self.history_window)
            .field("rng_seed", &self.rng_seed)
            .field("session_path", &self.session_path)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl AssistantConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Defaults, then `path` if given, then the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_vars(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Applies overrides from a variable source. The first name in each
    /// group that is set wins.
    pub fn apply_vars<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let first = |names: &[&str]| {
            names
                .iter()
                .find_map(|name| lookup(name).filter(|v| !v.trim().is_empty()))
        };

        if let Some(key) = first(&["TALKMATE_TRANSLATE_API_KEY", "GOOGLE_TRANSLATE_API_KEY"]) {
            self.translate_api_key = Some(key);
        }
        if let Some(key) = first(&["TALKMATE_COMPLETION_API_KEY", "OPENAI_API_KEY"]) {
            self.completion_api_key = Some(key);
        }
        if let Some(platform) = first(&["TALKMATE_PLATFORM"]) {
            self.default_platform = Platform::parse(&platform);
        }
        if let Some(value) = first(&["TALKMATE_RELATIONSHIP"]) {
            self.default_relationship = Relationship::parse(&value).ok_or(Error::InvalidSetting {
                key: "TALKMATE_RELATIONSHIP",
                value,
            })?;
        }
        if let Some(value) = first(&["TALKMATE_SEED"]) {
            let seed = value.trim().parse().map_err(|_| Error::InvalidSetting {
                key: "TALKMATE_SEED",
                value: value.clone(),
            })?;
            self.rng_seed = Some(seed);
        }
        if let Some(path) = first(&["TALKMATE_SESSION"]) {
            self.session_path = Some(PathBuf::from(path));
        }
        if let Some(level) = first(&["TALKMATE_LOG"]) {
            self.log_level = level;
        }
        Ok(())
    }

    pub fn has_translation_backend(&self) -> bool {
        self.translate_api_key.is_some()
    }

    pub fn has_completion_backend(&self) -> bool {
        self.completion_api_key.is_some()
    }
}
