//! Configuration loading for Harmony.
//!
//! Layered config: defaults -> config file -> env vars -> CLI flags.
//! The default config file lives at ~/.config/harmony/config.toml.

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::HarmonyError;

/// Keyword weights used by the topic classifier.
///
/// Each weight is added at most once per keyword per field: a keyword found
/// in both the title and the content contributes both amounts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Primary keyword found in the title
    #[serde(default = "default_title_primary")]
    pub title_primary: f64,

    /// Primary keyword found in the content
    #[serde(default = "default_content_primary")]
    pub content_primary: f64,

    /// Secondary keyword found in the title
    #[serde(default = "default_title_secondary")]
    pub title_secondary: f64,

    /// Secondary keyword found in the content
    #[serde(default = "default_content_secondary")]
    pub content_secondary: f64,
}

fn default_title_primary() -> f64 {
    3.0
}
fn default_content_primary() -> f64 {
    2.0
}
fn default_title_secondary() -> f64 {
    1.5
}
fn default_content_secondary() -> f64 {
    1.0
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            title_primary: default_title_primary(),
            content_primary: default_content_primary(),
            title_secondary: default_title_secondary(),
            content_secondary: default_content_secondary(),
        }
    }
}

impl ScoringWeights {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        let weights = [
            ("title_primary", self.title_primary),
            ("content_primary", self.content_primary),
            ("title_secondary", self.title_secondary),
            ("content_secondary", self.content_secondary),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{name} must be a finite value >= 0, got {value}"));
            }
        }
        Ok(())
    }
}

/// Engagement contribution of a single post when ranking topics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngagementWeights {
    /// Contribution of a top-level post
    #[serde(default = "default_post_weight")]
    pub post: f64,

    /// Contribution of a reply (a post with a parent)
    #[serde(default = "default_reply_weight")]
    pub reply: f64,
}

fn default_post_weight() -> f64 {
    1.0
}
fn default_reply_weight() -> f64 {
    0.5
}

impl Default for EngagementWeights {
    fn default() -> Self {
        Self {
            post: default_post_weight(),
            reply: default_reply_weight(),
        }
    }
}

impl EngagementWeights {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if !self.post.is_finite() || self.post < 0.0 {
            return Err(format!("post weight must be >= 0, got {}", self.post));
        }
        if !self.reply.is_finite() || self.reply < 0.0 {
            return Err(format!("reply weight must be >= 0, got {}", self.reply));
        }
        Ok(())
    }
}

/// Topic classification and ranking settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicsConfig {
    /// Classifier keyword weights
    #[serde(default)]
    pub scoring: ScoringWeights,

    /// Aggregator engagement weights
    #[serde(default)]
    pub engagement: EngagementWeights,

    /// Number of topics shown in short listings (sidebar, `rank --limit`)
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_top_n() -> usize {
    10
}

impl Default for TopicsConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringWeights::default(),
            engagement: EngagementWeights::default(),
            top_n: default_top_n(),
        }
    }
}

impl TopicsConfig {
    /// Validate every nested section.
    pub fn validate(&self) -> Result<(), String> {
        self.scoring.validate()?;
        self.engagement.validate()?;
        if self.top_n == 0 {
            return Err("top_n must be > 0".to_string());
        }
        Ok(())
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Topic subsystem settings
    #[serde(default)]
    pub topics: TopicsConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            topics: TopicsConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings with layered precedence:
    /// 1. Built-in defaults
    /// 2. Config file (~/.config/harmony/config.toml)
    /// 3. CLI-specified config file (optional)
    /// 4. Environment variables (HARMONY_*)
    ///
    /// CLI flags should be applied by the caller after this returns.
    pub fn load(cli_config_path: Option<&str>) -> Result<Self, HarmonyError> {
        let config_dir = ProjectDirs::from("", "", "harmony")
            .map(|p| p.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        let default_config_path = config_dir.join("config");

        let mut builder = Config::builder()
            .set_default("log_level", default_log_level())
            .map_err(|e| HarmonyError::Config(e.to_string()))?
            .set_default("topics.top_n", default_top_n() as i64)
            .map_err(|e| HarmonyError::Config(e.to_string()))?
            .add_source(File::with_name(&default_config_path.to_string_lossy()).required(false));

        if let Some(path) = cli_config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // HARMONY_LOG_LEVEL, HARMONY_TOPICS__TOP_N, HARMONY_TOPICS__SCORING__TITLE_PRIMARY, ...
        builder = builder.add_source(
            Environment::with_prefix("HARMONY")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| HarmonyError::Config(e.to_string()))?;

        let settings: Settings = config
            .try_deserialize()
            .map_err(|e| HarmonyError::Config(e.to_string()))?;

        settings.topics.validate().map_err(HarmonyError::Config)?;
        Ok(settings)
    }
}
