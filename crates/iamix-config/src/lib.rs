//! TOML configuration for iamix downmix renderers.
//!
//! A [`DownmixConfig`] names the input and output layouts, the height policy,
//! and optionally the demixing mode and weight index to apply before the
//! first frame. Configurations load from and save to TOML files and build a
//! ready-to-use [`DownmixRenderer`](iamix_core::DownmixRenderer).
//!
//! # Example
//!
//! ```rust,no_run
//! use iamix_config::DownmixConfig;
//! use iamix_core::Layout;
//!
//! // Load from file
//! let config = DownmixConfig::load("downmix.toml").unwrap();
//! let renderer = config.build().unwrap();
//!
//! // Or create programmatically and save
//! let config = DownmixConfig::new(Layout::Surround7_1_4, Layout::Stereo).with_mode(1);
//! config.save("stereo.toml").unwrap();
//! ```

mod config;
mod error;

pub use config::{DownmixConfig, HeightPolicySetting};
pub use error::ConfigError;
