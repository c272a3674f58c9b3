//! Dependency edges.
//!
//! An edge says "add `source`, scaled by `weight`, into the target channel".
//! The weight is either a literal or a named slot of the renderer's active
//! [`MixFactors`], read at evaluation time.

use crate::channel::Channel;
use crate::mix::{CoefficientSlot, MixFactors};

use super::topology::GraphError;

/// Maximum number of sources a derived channel may depend on.
///
/// Fixed-size storage keeps the whole graph inline in the renderer.
pub const MAX_SOURCES: usize = 4;

/// Where an edge's weight comes from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WeightSource {
    /// A fixed value. Also used for values the renderer rewrites on update.
    Literal(f32),
    /// A coefficient of the active mix factors.
    Slot(CoefficientSlot),
}

impl WeightSource {
    /// Resolves the weight against the current mix factors.
    #[inline]
    pub fn resolve(self, factors: &MixFactors) -> f32 {
        match self {
            Self::Literal(value) => value,
            Self::Slot(slot) => factors.get(slot),
        }
    }
}

/// One weighted source of a derived channel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dependency {
    /// Channel whose value is added.
    pub source: Channel,
    /// Scale applied to the source value.
    pub weight: WeightSource,
}

impl Dependency {
    /// Edge with a literal weight.
    pub const fn literal(source: Channel, weight: f32) -> Self {
        Self {
            source,
            weight: WeightSource::Literal(weight),
        }
    }

    /// Edge weighted by a mix-factor slot.
    pub const fn slot(source: Channel, slot: CoefficientSlot) -> Self {
        Self {
            source,
            weight: WeightSource::Slot(slot),
        }
    }
}

/// Ordered dependency list of one derived channel, stored inline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DependencyList {
    sources: [Dependency; MAX_SOURCES],
    len: usize,
}

impl DependencyList {
    const UNUSED: Dependency = Dependency::literal(Channel::Mono, 0.0);

    /// Builds a list for `target` from the given edges, in order.
    ///
    /// # Errors
    ///
    /// [`GraphError::TooManySources`] if more than [`MAX_SOURCES`] edges are given.
    pub fn new(target: Channel, deps: &[Dependency]) -> Result<Self, GraphError> {
        if deps.len() > MAX_SOURCES {
            return Err(GraphError::TooManySources {
                target,
                count: deps.len(),
            });
        }
        let mut sources = [Self::UNUSED; MAX_SOURCES];
        sources[..deps.len()].copy_from_slice(deps);
        Ok(Self {
            sources,
            len: deps.len(),
        })
    }

    /// The edges, in evaluation order.
    #[inline]
    pub fn as_slice(&self) -> &[Dependency] {
        &self.sources[..self.len]
    }

    /// Number of edges.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list has no edges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Dependency] {
        &mut self.sources[..self.len]
    }
}
