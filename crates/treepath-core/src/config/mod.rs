//! Configuration system for treepath.
//! TOML-based, layered resolution: overrides > env > project file > defaults.

pub mod extraction_config;
pub mod treepath_config;

pub use extraction_config::{ExtractionConfig, PathStyle, TreeStyle};
pub use treepath_config::{ConfigOverrides, TreepathConfig};
