//! Channel dependency graph: the downmix topology, cycle checks and
//! topological ordering.
//!
//! [`DependencyGraph`] holds at most one [`DependencyList`] per channel. A
//! channel without a list is a leaf: it either carries input samples or
//! evaluates to silence. The evaluator has no cycle guard, so every mutation
//! path refuses to introduce a cycle.

use core::fmt;

use crate::channel::{Channel, ChannelMap};
use crate::mix::CoefficientSlot;

use super::edge::{Dependency, DependencyList, MAX_SOURCES, WeightSource};

/// Errors that can occur while editing the dependency graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// The edit would make the channel depend on itself.
    CycleDetected(Channel),
    /// A dependency list exceeds [`MAX_SOURCES`].
    TooManySources {
        /// Channel the list was meant for.
        target: Channel,
        /// Number of edges supplied.
        count: usize,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CycleDetected(ch) => write!(f, "dependency cycle through channel {ch}"),
            Self::TooManySources { target, count } => {
                write!(f, "channel {target} has {count} sources, more than allowed")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GraphError {}

/// Per-channel dependency table.
///
/// # Example
///
/// ```rust
/// use iamix_core::{Channel, graph::{Dependency, DependencyGraph}};
///
/// let mut graph = DependencyGraph::standard();
/// assert!(!graph.is_leaf(Channel::L2));
///
/// // C may not be derived from L2: L2 already depends on C.
/// assert!(graph.insert(Channel::C, &[Dependency::literal(Channel::L2, 1.0)]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DependencyGraph {
    entries: ChannelMap<Option<DependencyList>>,
}

impl DependencyGraph {
    /// A graph where every channel is a leaf.
    pub const fn empty() -> Self {
        Self {
            entries: ChannelMap::filled(None),
        }
    }

    /// The fixed downmix topology.
    ///
    /// | derived | sources |
    /// |---|---|
    /// | Mono | R2 · 0.5, L2 · 0.5 |
    /// | L2 / R2 | L3 / R3 · 1, C · 0.707 |
    /// | L3 / R3 | L5 / R5 · 1, SL5 / SR5 · delta |
    /// | SL5 / SR5 | SL7 / SR7 · alpha, BL7 / BR7 · beta |
    /// | TL / TR | HL / HR · 1, SL5 / SR5 · gamma·w |
    /// | HL / HR | HFL / HFR · 1, HBL / HBR · gamma |
    ///
    /// The `gamma·w` edges start at zero; the renderer rewrites them on every
    /// mode or weight change.
    pub fn standard() -> Self {
        use Channel::{
            Bl7, Br7, C, Hbl, Hbr, Hfl, Hfr, Hl, Hr, L2, L3, L5, Mono, R2, R3, R5, Sl5, Sl7, Sr5,
            Sr7, Tl, Tr,
        };
        use CoefficientSlot::{Alpha, Beta, Delta, Gamma};

        const TOPOLOGY: [(Channel, [Dependency; 2]); 11] = [
            (Mono, [Dependency::literal(R2, 0.5), Dependency::literal(L2, 0.5)]),
            (L2, [Dependency::literal(L3, 1.0), Dependency::literal(C, 0.707)]),
            (R2, [Dependency::literal(R3, 1.0), Dependency::literal(C, 0.707)]),
            (Tl, [Dependency::literal(Hl, 1.0), Dependency::literal(Sl5, 0.0)]),
            (Tr, [Dependency::literal(Hr, 1.0), Dependency::literal(Sr5, 0.0)]),
            (L3, [Dependency::literal(L5, 1.0), Dependency::slot(Sl5, Delta)]),
            (R3, [Dependency::literal(R5, 1.0), Dependency::slot(Sr5, Delta)]),
            (Sl5, [Dependency::slot(Sl7, Alpha), Dependency::slot(Bl7, Beta)]),
            (Sr5, [Dependency::slot(Sr7, Alpha), Dependency::slot(Br7, Beta)]),
            (Hl, [Dependency::literal(Hfl, 1.0), Dependency::slot(Hbl, Gamma)]),
            (Hr, [Dependency::literal(Hfr, 1.0), Dependency::slot(Hbr, Gamma)]),
        ];

        let mut graph = Self::empty();
        for (target, deps) in &TOPOLOGY {
            // Two edges always fit; the table is acyclic by construction.
            if let Ok(list) = DependencyList::new(*target, deps) {
                graph.entries[*target] = Some(list);
            }
        }
        graph
    }

    /// Dependency list of `channel`, or `None` if it is a leaf.
    #[inline]
    pub fn entry(&self, channel: Channel) -> Option<&[Dependency]> {
        self.entries[channel].as_ref().map(DependencyList::as_slice)
    }

    /// Returns `true` if `channel` has no dependency list.
    #[inline]
    pub fn is_leaf(&self, channel: Channel) -> bool {
        self.entries[channel].is_none()
    }

    /// Number of derived (non-leaf) channels.
    pub fn derived_count(&self) -> usize {
        self.entries.iter().filter(|(_, e)| e.is_some()).count()
    }

    /// Replaces the dependency list of `target`.
    ///
    /// Returns the previous list, if any. The graph is unchanged on error.
    ///
    /// # Errors
    ///
    /// - [`GraphError::TooManySources`] if `deps` is longer than
    ///   [`MAX_SOURCES`]
    /// - [`GraphError::CycleDetected`] if any source already depends on
    ///   `target`, or is `target` itself
    pub fn insert(
        &mut self,
        target: Channel,
        deps: &[Dependency],
    ) -> Result<Option<DependencyList>, GraphError> {
        let list = DependencyList::new(target, deps)?;
        if deps.iter().any(|dep| self.can_reach(dep.source, target)) {
            return Err(GraphError::CycleDetected(target));
        }
        #[cfg(feature = "tracing")]
        tracing::debug!("graph_insert: {target} <- {} sources", list.len());
        Ok(self.entries[target].replace(list))
    }

    /// Turns `channel` into a leaf, returning its previous list.
    pub fn detach(&mut self, channel: Channel) -> Option<DependencyList> {
        self.entries[channel].take()
    }

    /// Overwrites the weight of the `target` ← `source` edge with a literal.
    ///
    /// Returns `false` if `target` is a leaf or has no edge from `source`.
    pub fn set_literal(&mut self, target: Channel, source: Channel, value: f32) -> bool {
        let Some(list) = self.entries[target].as_mut() else {
            return false;
        };
        match list.as_mut_slice().iter_mut().find(|d| d.source == source) {
            Some(dep) => {
                dep.weight = WeightSource::Literal(value);
                true
            }
            None => false,
        }
    }

    /// Orders every channel so that sources come before the channels derived
    /// from them (Kahn's algorithm).
    ///
    /// # Errors
    ///
    /// [`GraphError::CycleDetected`] naming a channel left on a cycle.
    pub fn topological_order(&self) -> Result<[Channel; Channel::COUNT], GraphError> {
        // In-degree counts one per edge into the derived channel.
        let mut in_degree = ChannelMap::filled(0usize);
        for (target, entry) in self.entries.iter() {
            if let Some(list) = entry {
                in_degree[target] = list.len();
            }
        }

        let mut order = [Channel::Mono; Channel::COUNT];
        let mut head = 0;
        let mut tail = 0;
        for ch in Channel::ALL {
            if in_degree[ch] == 0 {
                order[tail] = ch;
                tail += 1;
            }
        }

        while head < tail {
            let done = order[head];
            head += 1;
            for (target, entry) in self.entries.iter() {
                let Some(list) = entry else { continue };
                for dep in list.as_slice() {
                    if dep.source == done {
                        in_degree[target] -= 1;
                        if in_degree[target] == 0 {
                            order[tail] = target;
                            tail += 1;
                        }
                    }
                }
            }
        }

        if tail != Channel::COUNT {
            let stuck = Channel::ALL
                .into_iter()
                .find(|&ch| in_degree[ch] > 0)
                .unwrap_or(Channel::Mono);
            return Err(GraphError::CycleDetected(stuck));
        }
        Ok(order)
    }

    /// DFS over dependency edges: does evaluating `from` ever read `to`?
    fn can_reach(&self, from: Channel, to: Channel) -> bool {
        let mut visited = ChannelMap::filled(false);
        let mut stack = [Channel::Mono; Channel::COUNT * MAX_SOURCES + 1];
        let mut depth = 1;
        stack[0] = from;

        while depth > 0 {
            depth -= 1;
            let current = stack[depth];
            if current == to {
                return true;
            }
            if visited[current] {
                continue;
            }
            visited[current] = true;

            if let Some(deps) = self.entry(current) {
                for dep in deps {
                    if !visited[dep.source] {
                        stack[depth] = dep.source;
                        depth += 1;
                    }
                }
            }
        }
        false
    }
}

impl Default for DependencyGraph {
    fn default() -> Self {
        Self::standard()
    }
}
