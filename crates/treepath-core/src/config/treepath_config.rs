//! Top-level treepath configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ExtractionConfig, PathStyle, TreeStyle};
use crate::errors::ConfigError;

/// Top-level configuration.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`TREEPATH_*`)
/// 3. Project config (`treepath.toml` in the project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct TreepathConfig {
    pub extraction: ExtractionConfig,
}

/// Caller-supplied overrides, e.g. from command-line flags.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub tree_style: Option<TreeStyle>,
    pub path_style: Option<PathStyle>,
    pub seed: Option<u64>,
}

impl TreepathConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join("treepath.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config)?;

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;
        ::tracing::debug!(
            tree_style = %config.extraction.effective_tree_style(),
            path_style = %config.extraction.effective_path_style(),
            seed = ?config.extraction.seed,
            "configuration resolved"
        );
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &TreepathConfig) -> Result<(), ConfigError> {
        let extraction = &config.extraction;
        for (field, value) in [
            ("extraction.root_path_threshold", extraction.root_path_threshold),
            ("extraction.leaf_path_threshold", extraction.leaf_path_threshold),
            ("extraction.path_length_threshold", extraction.path_length_threshold),
            ("extraction.lcrs_depth_limit", extraction.lcrs_depth_limit),
        ] {
            if value == Some(0) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        // prefix + LCA + suffix needs at least three slots
        if let Some(length) = extraction.path_length_threshold {
            if length < 3 {
                return Err(ConfigError::ValidationFailed {
                    field: "extraction.path_length_threshold".to_string(),
                    message: "must be at least 3".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    fn merge_toml_file(config: &mut TreepathConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: TreepathConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` win.
    fn merge(base: &mut TreepathConfig, other: &TreepathConfig) {
        let (base, other) = (&mut base.extraction, &other.extraction);
        if other.tree_style.is_some() {
            base.tree_style = other.tree_style;
        }
        if other.path_style.is_some() {
            base.path_style = other.path_style;
        }
        if other.root_path_threshold.is_some() {
            base.root_path_threshold = other.root_path_threshold;
        }
        if other.leaf_path_threshold.is_some() {
            base.leaf_path_threshold = other.leaf_path_threshold;
        }
        if other.path_width_threshold.is_some() {
            base.path_width_threshold = other.path_width_threshold;
        }
        if other.path_length_threshold.is_some() {
            base.path_length_threshold = other.path_length_threshold;
        }
        if other.lcrs_depth_limit.is_some() {
            base.lcrs_depth_limit = other.lcrs_depth_limit;
        }
        if other.seed.is_some() {
            base.seed = other.seed;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `TREEPATH_TREE_STYLE`, `TREEPATH_PATH_STYLE`, `TREEPATH_SEED`,
    /// `TREEPATH_LCRS_DEPTH_LIMIT`.
    fn apply_env_overrides(config: &mut TreepathConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("TREEPATH_TREE_STYLE") {
            config.extraction.tree_style = Some(val.parse()?);
        }
        if let Ok(val) = std::env::var("TREEPATH_PATH_STYLE") {
            config.extraction.path_style = Some(val.parse()?);
        }
        if let Ok(val) = std::env::var("TREEPATH_SEED") {
            config.extraction.seed = Some(parse_env("TREEPATH_SEED", "extraction.seed", &val)?);
        }
        if let Ok(val) = std::env::var("TREEPATH_LCRS_DEPTH_LIMIT") {
            config.extraction.lcrs_depth_limit = Some(parse_env(
                "TREEPATH_LCRS_DEPTH_LIMIT",
                "extraction.lcrs_depth_limit",
                &val,
            )?);
        }
        Ok(())
    }

    /// Apply explicit overrides (highest priority).
    fn apply_overrides(config: &mut TreepathConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.tree_style {
            config.extraction.tree_style = Some(v);
        }
        if let Some(v) = overrides.path_style {
            config.extraction.path_style = Some(v);
        }
        if let Some(v) = overrides.seed {
            config.extraction.seed = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Parse a numeric environment override, rejecting malformed values.
fn parse_env<T: std::str::FromStr>(var: &str, field: &str, val: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    val.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        field: field.to_string(),
        message: format!("{var}=`{val}`: {e}"),
    })
}
