//! Path extraction configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Which labels a root path is built from, and whether hierarchy truncation applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TreeStyle {
    /// Abstract syntax tree: ancestor kinds.
    #[serde(rename = "AST")]
    Ast,
    /// Simplified parse tree: ancestor values.
    #[default]
    #[serde(rename = "SPT")]
    Spt,
    /// Hierarchy syntax tree: kinds, truncated at the enclosing expression statement.
    #[serde(rename = "HST")]
    Hst,
    /// Hierarchy parse tree: values, truncated at the enclosing expression statement.
    #[serde(rename = "HPT")]
    Hpt,
}

impl TreeStyle {
    /// Ancestors contribute their kind rather than their value.
    pub fn uses_type_labels(&self) -> bool {
        matches!(self, Self::Ast | Self::Hst)
    }

    /// Root paths restart above the nearest `expression_statement`.
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::Hst | Self::Hpt)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Ast => "AST",
            Self::Spt => "SPT",
            Self::Hst => "HST",
            Self::Hpt => "HPT",
        }
    }
}

impl FromStr for TreeStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AST" => Ok(Self::Ast),
            "SPT" => Ok(Self::Spt),
            "HST" => Ok(Self::Hst),
            "HPT" => Ok(Self::Hpt),
            other => Err(ConfigError::InvalidValue {
                field: "extraction.tree_style".to_string(),
                message: format!("unknown tree style `{other}`, expected AST, SPT, HST or HPT"),
            }),
        }
    }
}

impl fmt::Display for TreeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How the middle segment of a leaf path is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PathStyle {
    /// Every label from source to target, LCA included.
    #[default]
    #[serde(rename = "L2L")]
    L2L,
    /// Only up/down moves, one `U` or `D` per hop.
    #[serde(rename = "UD")]
    Ud,
    /// Labels interleaved with `U`/`D` markers.
    #[serde(rename = "U2D")]
    U2d,
}

impl PathStyle {
    pub fn name(&self) -> &'static str {
        match self {
            Self::L2L => "L2L",
            Self::Ud => "UD",
            Self::U2d => "U2D",
        }
    }
}

impl FromStr for PathStyle {
    type Err = ConfigError;

    /// Anything other than `L2L` or `UD` selects the marker-interleaved style.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_uppercase().as_str() {
            "L2L" => Self::L2L,
            "UD" => Self::Ud,
            _ => Self::U2d,
        })
    }
}

impl fmt::Display for PathStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration for root/leaf path extraction and serialization.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Tree labelling style. Default: SPT.
    pub tree_style: Option<TreeStyle>,
    /// Leaf-path middle rendering. Default: L2L.
    pub path_style: Option<PathStyle>,
    /// Maximum number of sampled root paths. Default: 20.
    pub root_path_threshold: Option<usize>,
    /// Maximum number of sampled leaf paths. Default: 20.
    pub leaf_path_threshold: Option<usize>,
    /// Maximum difference between the up and down legs of a leaf path. Default: 2.
    pub path_width_threshold: Option<usize>,
    /// Maximum leaf-path length, LCA included. Default: 8.
    pub path_length_threshold: Option<usize>,
    /// Recursion budget for left-child/right-sibling rendering. Default: 1000.
    pub lcrs_depth_limit: Option<usize>,
    /// Seed for subsampling. Unset means entropy-seeded, non-reproducible runs.
    pub seed: Option<u64>,
}

impl ExtractionConfig {
    pub fn effective_tree_style(&self) -> TreeStyle {
        self.tree_style.unwrap_or_default()
    }

    pub fn effective_path_style(&self) -> PathStyle {
        self.path_style.unwrap_or_default()
    }

    /// Returns the effective root-path quota, defaulting to 20.
    pub fn effective_root_path_threshold(&self) -> usize {
        self.root_path_threshold.unwrap_or(20)
    }

    /// Returns the effective leaf-path quota, defaulting to 20.
    pub fn effective_leaf_path_threshold(&self) -> usize {
        self.leaf_path_threshold.unwrap_or(20)
    }

    /// Returns the effective width tolerance, defaulting to 2.
    pub fn effective_path_width_threshold(&self) -> usize {
        self.path_width_threshold.unwrap_or(2)
    }

    /// Returns the effective maximum path length, defaulting to 8.
    pub fn effective_path_length_threshold(&self) -> usize {
        self.path_length_threshold.unwrap_or(8)
    }

    /// Returns the effective LC-RS recursion budget, defaulting to 1000.
    pub fn effective_lcrs_depth_limit(&self) -> usize {
        self.lcrs_depth_limit.unwrap_or(1000)
    }
}
