//! Channel dependency graph for the downmix renderer.
//!
//! The downmix topology is a small hand-authored DAG: each derived channel
//! lists the channels it is computed from and the weight of each edge.
//! Evaluation walks that DAG per output channel, per sample, bottom-up.
//!
//! # Architecture
//!
//! - [`DependencyGraph`] - fixed-size table of [`DependencyList`]s indexed by
//!   [`Channel`](crate::Channel). Leaves have no list. Edits go through
//!   [`insert()`](DependencyGraph::insert), which rejects cycles, so the walk
//!   needs no cycle guard.
//! - [`WeightSource`] - an edge weight is either a literal or a
//!   [`CoefficientSlot`](crate::CoefficientSlot) resolved against the active
//!   mix factors when the edge is read.
//! - [`Visitor`] - the single recursive walk is parameterised by what it
//!   produces: sample sums for rendering, log lines for diagnostics.
//!
//! # Example
//!
//! ```rust
//! use iamix_core::{Channel, graph::DependencyGraph};
//!
//! let graph = DependencyGraph::standard();
//! let order = graph.topological_order().unwrap();
//! let pos = |ch| order.iter().position(|&c| c == ch).unwrap();
//! assert!(pos(Channel::L3) < pos(Channel::L2));
//! assert!(pos(Channel::L2) < pos(Channel::Mono));
//! ```

pub mod edge;
pub mod topology;
pub mod walk;

pub use edge::{Dependency, DependencyList, MAX_SOURCES, WeightSource};
pub use topology::{DependencyGraph, GraphError};
pub use walk::Visitor;
