//! Downmix configuration file format and operations.

use serde::{Deserialize, Serialize};
use std::path::Path;

use iamix_core::weight::is_valid_index;
use iamix_core::{DownmixRenderer, HeightPolicy, Layout, is_valid_mode, validate_pair};

use crate::error::ConfigError;

/// Height handling as written in a configuration file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeightPolicySetting {
    /// Height channels may be folded into a layout without height.
    #[default]
    Strip,
    /// A height-capable input must keep height in the output.
    Preserve,
}

impl From<HeightPolicySetting> for HeightPolicy {
    fn from(setting: HeightPolicySetting) -> Self {
        match setting {
            HeightPolicySetting::Strip => HeightPolicy::Strip,
            HeightPolicySetting::Preserve => HeightPolicy::Preserve,
        }
    }
}

impl From<HeightPolicy> for HeightPolicySetting {
    fn from(policy: HeightPolicy) -> Self {
        match policy {
            HeightPolicy::Strip => HeightPolicySetting::Strip,
            HeightPolicy::Preserve => HeightPolicySetting::Preserve,
        }
    }
}

/// Renderer configuration.
///
/// Names a layout pair, the height policy, and optionally the demixing mode
/// and weight index applied before the first frame.
///
/// # TOML Format
///
/// ```toml
/// input = "7.1.4"
/// output = "stereo"
/// height_policy = "strip"
/// mode = 1
/// default_weight = 3
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DownmixConfig {
    /// Input layout name.
    pub input: String,

    /// Output layout name.
    pub output: String,

    /// Height handling (defaults to `strip`).
    #[serde(default)]
    pub height_policy: HeightPolicySetting,

    /// Initial demixing mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<u8>,

    /// Initial weight index. Only applied together with `mode`; without it
    /// the first update advances from the start of the curve.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_weight: Option<i32>,
}

impl DownmixConfig {
    /// Create a configuration for a layout pair.
    pub fn new(input: Layout, output: Layout) -> Self {
        Self {
            input: input.name().to_string(),
            output: output.name().to_string(),
            height_policy: HeightPolicySetting::default(),
            mode: None,
            default_weight: None,
        }
    }

    /// Set the height policy.
    pub fn with_height_policy(mut self, policy: HeightPolicy) -> Self {
        self.height_policy = policy.into();
        self
    }

    /// Set the initial demixing mode.
    pub fn with_mode(mut self, mode: u8) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Set the initial weight index.
    pub fn with_default_weight(mut self, index: i32) -> Self {
        self.default_weight = Some(index);
        self
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml(&content)
    }

    /// Load a configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the configuration to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the configuration to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Parsed input layout.
    pub fn input_layout(&self) -> Result<Layout, ConfigError> {
        parse_layout(&self.input)
    }

    /// Parsed output layout.
    pub fn output_layout(&self) -> Result<Layout, ConfigError> {
        parse_layout(&self.output)
    }

    /// Check every field without opening a renderer.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let input = self.input_layout()?;
        let output = self.output_layout()?;
        validate_pair(input, output, self.height_policy.into())?;

        if let Some(mode) = self.mode
            && !is_valid_mode(mode)
        {
            return Err(ConfigError::InvalidMode(mode));
        }
        if let Some(index) = self.default_weight
            && !is_valid_index(index)
        {
            return Err(ConfigError::InvalidWeightIndex(index));
        }
        Ok(())
    }

    /// Open a renderer and apply the initial mode and weight, if any.
    pub fn build(&self) -> Result<DownmixRenderer, ConfigError> {
        self.validate()?;
        let mut renderer = DownmixRenderer::open_with_policy(
            self.input_layout()?,
            self.output_layout()?,
            self.height_policy.into(),
        )?;
        if let Some(mode) = self.mode {
            renderer.set_mode_and_weight(mode, self.default_weight.unwrap_or(-1))?;
        }
        Ok(renderer)
    }
}

fn parse_layout(name: &str) -> Result<Layout, ConfigError> {
    name.parse()
        .map_err(|_| ConfigError::UnknownLayout(name.to_string()))
}
