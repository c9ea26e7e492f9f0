//! Brickworld configuration
//!
//! JSON file with every section optional; missing fields take the
//! defaults below.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::builder::BrickTemplate;
use crate::core::error::ConfigError;
use crate::core::types::Dimensions;

/// Fewest bricks an auto build may be asked for
pub const MIN_AUTO_BUILD_COUNT: u32 = 2;
/// Shortest pause between two auto build steps
pub const MIN_AUTO_BUILD_INTERVAL_MS: u64 = 100;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Full configuration for a building session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrickworldConfig {
    /// World size.
    pub world: WorldConfig,
    /// Auto builder parameters.
    pub auto_build: AutoBuildConfig,
    /// Initial box contents.
    pub bricks: Vec<BoxEntryConfig>,
    /// Colors offered when creating bricks.
    pub palette: Vec<String>,
}

impl Default for BrickworldConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            auto_build: AutoBuildConfig::default(),
            bricks: vec![BoxEntryConfig::default()],
            palette: vec![
                "#a8e6cf".into(),
                "#dcedc1".into(),
                "#ffd3b6".into(),
                "#ffaaa5".into(),
                "#ff8b94".into(),
            ],
        }
    }
}

impl BrickworldConfig {
    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.world.validate()?;
        self.auto_build.validate()?;
        for (i, entry) in self.bricks.iter().enumerate() {
            entry.validate().map_err(|e| match e {
                ConfigError::Invalid(msg) => ConfigError::Invalid(format!("bricks[{i}]: {msg}")),
                other => other,
            })?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// World size in cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// [x, y, z]; z is vertical.
    pub size: [u32; 3],
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self { size: [20, 20, 20] }
    }
}

impl WorldConfig {
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::from_array(self.size)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.size.contains(&0) {
            return Err(ConfigError::Invalid(format!("world size {:?} has an empty axis", self.size)));
        }
        Ok(())
    }
}

/// Auto builder parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoBuildConfig {
    /// Bricks to place per run. At least 2.
    pub count: u32,
    /// Pause between steps in milliseconds. At least 100.
    pub interval_ms: u64,
    /// RNG seed for brick and position choice.
    pub seed: u64,
}

impl Default for AutoBuildConfig {
    fn default() -> Self {
        Self {
            count: 5,
            interval_ms: 1000,
            seed: 0,
        }
    }
}

impl AutoBuildConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.count < MIN_AUTO_BUILD_COUNT {
            return Err(ConfigError::Invalid(format!(
                "auto_build.count must be at least {MIN_AUTO_BUILD_COUNT}, got {}", self.count
            )));
        }
        if self.interval_ms < MIN_AUTO_BUILD_INTERVAL_MS {
            return Err(ConfigError::Invalid(format!(
                "auto_build.interval_ms must be at least {MIN_AUTO_BUILD_INTERVAL_MS}, got {}", self.interval_ms
            )));
        }
        Ok(())
    }
}

/// One kind of brick in the box and how many of it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxEntryConfig {
    /// Extent along x
    pub length: u32,
    /// Extent along y
    pub width: u32,
    /// Extent along z
    pub height: u32,
    pub color: String,
    pub amount: u32,
}

impl Default for BoxEntryConfig {
    fn default() -> Self {
        Self {
            length: 2,
            width: 2,
            height: 2,
            color: "#a8e6cf".into(),
            amount: 10,
        }
    }
}

impl BoxEntryConfig {
    pub fn template(&self) -> BrickTemplate {
        BrickTemplate::new(Dimensions::new(self.length, self.width, self.height), self.color.clone())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.length < 2 || self.width < 2 || self.height < 2 {
            return Err(ConfigError::Invalid(format!(
                "brick {}x{}x{} must be at least 2x2x2", self.length, self.width, self.height
            )));
        }
        Ok(())
    }
}
