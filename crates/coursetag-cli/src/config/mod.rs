//! Configuration loading for coursetag.
//! Reads coursetag.toml from --config, the COURSETAG_CONFIG env var, or the
//! current directory. Every section is optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use coursetag_classify::{FuzzySettings, Rule};
use coursetag_common::CoursetagError;

pub const CONFIG_ENV: &str = "COURSETAG_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "coursetag.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fuzzy: FuzzyConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub ai: TopicConfig,
    #[serde(default)]
    pub ethics: TopicConfig,
    #[serde(default)]
    pub candidates: TopicConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuzzyConfig {
    #[serde(default = "default_fuzzy_enabled")]
    pub enabled: bool,
    #[serde(default = "default_threshold")]
    pub threshold: u32,
}

fn default_fuzzy_enabled() -> bool { true }
fn default_threshold()     -> u32  { 85 }

impl Default for FuzzyConfig {
    fn default() -> Self {
        Self { enabled: default_fuzzy_enabled(), threshold: default_threshold() }
    }
}

/// File names written under `--output-dir` by `analyze`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_raw_file")]
    pub raw: String,
    #[serde(default = "default_unique_file")]
    pub unique: String,
    #[serde(default = "default_ai_subset_file")]
    pub ai_subset: String,
    #[serde(default = "default_ethics_subset_file")]
    pub ethics_subset: String,
}

fn default_raw_file()           -> String { "courses_with_flag.csv".to_string() }
fn default_unique_file()        -> String { "unique_courses_with_flag.csv".to_string() }
fn default_ai_subset_file()     -> String { "courses_ai_subset.csv".to_string() }
fn default_ethics_subset_file() -> String { "courses_ethics_subset.csv".to_string() }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            raw: default_raw_file(),
            unique: default_unique_file(),
            ai_subset: default_ai_subset_file(),
            ethics_subset: default_ethics_subset_file(),
        }
    }
}

/// Per-topic additions to the built-in catalogue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopicConfig {
    /// Appended after the built-in rules.
    #[serde(default)]
    pub extra_rules: Vec<Rule>,
    /// Replaces the built-in phrase list when set.
    pub fuzzy_phrases: Option<Vec<String>>,
}

impl TopicConfig {
    pub fn rules(&self, builtin: Vec<Rule>) -> Vec<Rule> {
        builtin.into_iter().chain(self.extra_rules.iter().cloned()).collect()
    }

    pub fn phrases(&self, builtin: &[&str]) -> Vec<String> {
        match &self.fuzzy_phrases {
            Some(phrases) => phrases.clone(),
            None => builtin.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl Config {
    /// Load configuration. An explicit path must exist; otherwise
    /// COURSETAG_CONFIG then ./coursetag.toml are tried, and a missing file
    /// means defaults.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let (path, required) = match explicit {
            Some(p) => (p.to_path_buf(), true),
            None => match std::env::var(CONFIG_ENV) {
                Ok(p) => (PathBuf::from(p), true),
                Err(_) => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
            },
        };

        if !path.exists() {
            if required {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            tracing::debug!("No {} found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config = Self::from_toml(&content)
            .map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))?;
        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, CoursetagError> {
        let config: Config =
            toml::from_str(content).map_err(|e| CoursetagError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CoursetagError> {
        check_threshold(self.fuzzy.threshold)?;
        for (name, topic) in [("ai", &self.ai), ("ethics", &self.ethics), ("candidates", &self.candidates)] {
            if topic.fuzzy_phrases.as_ref().is_some_and(|p| p.is_empty()) && self.fuzzy.enabled {
                tracing::warn!("[{name}] fuzzy_phrases is empty; fuzzy matching is off for this topic");
            }
        }
        Ok(())
    }

    /// Fuzzy settings after command-line overrides.
    pub fn fuzzy_settings(
        &self,
        threshold: Option<u32>,
        disable: bool,
    ) -> Result<FuzzySettings, CoursetagError> {
        let threshold = check_threshold(threshold.unwrap_or(self.fuzzy.threshold))?;
        Ok(FuzzySettings { enabled: self.fuzzy.enabled && !disable, threshold })
    }
}

fn check_threshold(threshold: u32) -> Result<u8, CoursetagError> {
    u8::try_from(threshold)
        .ok()
        .filter(|t| *t <= 100)
        .ok_or_else(|| {
            CoursetagError::Config(format!("fuzzy threshold must be between 0 and 100, got {threshold}"))
        })
}
