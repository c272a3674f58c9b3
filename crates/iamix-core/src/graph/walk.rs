//! Recursive traversal of the dependency graph.
//!
//! [`DependencyGraph::walk`] is the one place that knows how a channel is
//! resolved: a bound channel yields its own value, a leaf without data is
//! unresolved, and a derived channel folds over its sources in list order.
//! What a "value" is depends on the [`Visitor`]: the renderer reads samples
//! with one, and prints the derivation tree with another.

use crate::channel::Channel;
use crate::mix::MixFactors;

use super::topology::DependencyGraph;

/// Action applied at each step of a graph walk.
pub trait Visitor {
    /// Value produced for each channel.
    type Value;

    /// Value of `channel` if it is bound to input data.
    fn bound(&mut self, channel: Channel) -> Option<Self::Value>;

    /// Value of a channel that is neither bound nor derivable.
    fn unresolved(&mut self, channel: Channel) -> Self::Value;

    /// Initial accumulator for a derived channel.
    fn begin(&mut self, target: Channel) -> Self::Value;

    /// Called before descending into `source`.
    fn edge(&mut self, _target: Channel, _source: Channel, _weight: f32) {}

    /// Folds one weighted source value into the accumulator.
    fn accumulate(&mut self, sum: Self::Value, value: Self::Value, weight: f32) -> Self::Value;
}

impl DependencyGraph {
    /// Resolves `channel` by walking its derivation tree.
    ///
    /// Slot weights are read from `factors` at call time. Shared
    /// sub-channels are visited once per path, not memoised.
    pub fn walk<V: Visitor + ?Sized>(
        &self,
        channel: Channel,
        factors: &MixFactors,
        visitor: &mut V,
    ) -> V::Value {
        if let Some(value) = visitor.bound(channel) {
            return value;
        }
        let Some(deps) = self.entry(channel) else {
            return visitor.unresolved(channel);
        };

        let mut sum = visitor.begin(channel);
        for dep in deps {
            let weight = dep.weight.resolve(factors);
            visitor.edge(channel, dep.source, weight);
            let value = self.walk(dep.source, factors, visitor);
            sum = visitor.accumulate(sum, value, weight);
        }
        sum
    }
}
