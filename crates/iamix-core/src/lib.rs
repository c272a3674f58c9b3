//! iamix Core - immersive audio downmix renderer
//!
//! Renders a lower-capability loudspeaker layout (7.1.4 → 3.1.2, 5.1.2 →
//! stereo, ...) from a higher one. Derived channels are weighted sums of
//! other channels, described by a small fixed dependency graph; the weights
//! follow the demixing mode and a smoothed weight index signalled per frame.
//!
//! # Core Abstractions
//!
//! ## Catalogue
//!
//! - [`Channel`] - Every loudspeaker channel the renderer knows
//! - [`ChannelMap`] - Dense per-channel table
//! - [`Layout`] - Loudspeaker layouts with surround/height ranks
//!
//! ## Mixing State
//!
//! - [`MixMode`] / [`MixFactors`] - Demixing modes and their coefficients
//! - [`WeightState`] / [`WeightUpdate`] - Smoothed top-channel weight
//!
//! ## Rendering
//!
//! - [`graph::DependencyGraph`] - Acyclic derivation table
//! - [`DownmixRenderer`] - Validated renderer for one layout pair
//!
//! # no_std Support
//!
//! The crate never allocates and is `no_std` compatible. Disable the default
//! `std` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! iamix-core = { version = "0.1", default-features = false }
//! ```
//!
//! Enable the `tracing` feature for debug logs of state changes and
//! derivation walks.
//!
//! # Example
//!
//! ```rust
//! use iamix_core::{DownmixRenderer, Layout};
//!
//! let mut dmr = DownmixRenderer::open(Layout::Surround7_1_4, Layout::Surround3_1_2)?;
//!
//! let stride = 960;
//! let input = vec![0.0f32; Layout::Surround7_1_4.channel_count() * stride];
//! let mut output = vec![0.0f32; Layout::Surround3_1_2.channel_count() * stride];
//!
//! // Once per frame: signalled mode and weight, then render.
//! dmr.set_mode_and_weight(1, -1)?;
//! dmr.downmix(&input, &mut output, 0, stride, stride)?;
//! # Ok::<(), iamix_core::DownmixError>(())
//! ```
//!
//! # Design Principles
//!
//! - **Real-time safe**: No allocations when opening, updating or rendering
//! - **Acyclic by construction**: Graph edits that would form a cycle are refused
//! - **One walk**: Rendering and diagnostics share a single recursive traversal

#![cfg_attr(not(feature = "std"), no_std)]

pub mod channel;
pub mod error;
pub mod graph;
pub mod layout;
pub mod mix;
pub mod renderer;
pub mod weight;

// Re-export main types at crate root
pub use channel::{Channel, ChannelMap};
pub use error::{DownmixError, ErrorKind};
pub use graph::{Dependency, DependencyGraph, GraphError, Visitor, WeightSource};
pub use layout::{Layout, LayoutInfo, MAX_LAYOUT_CHANNELS, UnknownLayout};
pub use mix::{CoefficientSlot, InvalidMixMode, MixFactors, MixMode, is_valid_mode};
pub use renderer::{DownmixRenderer, HeightPolicy, TraceSummary, is_valid_pair, validate_pair};
pub use weight::{WEIGHT_TABLE, WeightState, WeightUpdate, weight_value};
