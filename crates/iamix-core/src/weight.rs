//! Smoothed weight state for the 3.1.2 top-channel blend.
//!
//! The weight is not a free-running float. It is an index into a short
//! monotonic curve, and every frame the decoder either advances the index by
//! the active mode's step or overrides it with an explicit default from the
//! bitstream. The index saturates at both ends of the curve.
//!
//! ```rust
//! use iamix_core::weight::{WeightState, WeightUpdate, weight_value};
//!
//! let mut w = WeightState::new();
//! assert_eq!(w.index(), None);
//!
//! w.apply(WeightUpdate::Set(4), 1);
//! w.apply(WeightUpdate::Advance, 1);
//! assert_eq!(w.index(), Some(5));
//! assert_eq!(w.value(), weight_value(5));
//! ```

/// Smallest valid weight index.
pub const MIN_WEIGHT_INDEX: i32 = 0;

/// Largest valid weight index.
pub const MAX_WEIGHT_INDEX: i32 = 10;

/// Weight curve, indexed by weight index.
pub const WEIGHT_TABLE: [f32; 11] = [
    0.0, 0.0179, 0.0391, 0.0658, 0.1038, 0.25, 0.3962, 0.4342, 0.4609, 0.4821, 0.5,
];

/// Weight value for an index; out-of-range indices are clamped.
#[inline]
pub fn weight_value(index: i32) -> f32 {
    WEIGHT_TABLE[index.clamp(MIN_WEIGHT_INDEX, MAX_WEIGHT_INDEX) as usize]
}

/// Next index after stepping `current` by `step`, clamped to the curve.
///
/// `current` may be `-1` (uninitialised).
#[inline]
pub fn advance_index(step: i32, current: i32) -> i32 {
    current
        .saturating_add(step)
        .clamp(MIN_WEIGHT_INDEX, MAX_WEIGHT_INDEX)
}

/// Returns `true` if `index` lies on the weight curve.
#[inline]
pub fn is_valid_index(index: i32) -> bool {
    (MIN_WEIGHT_INDEX..=MAX_WEIGHT_INDEX).contains(&index)
}

/// How a mode/weight update treats the weight index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeightUpdate {
    /// Step the current index by the active mode's weight step.
    Advance,
    /// Adopt this index, discarding any smoothing in progress. An index past
    /// the end of the curve advances instead, as a bitstream value would.
    Set(u8),
}

impl WeightUpdate {
    /// Interprets a bitstream weight index: on-curve values set the index,
    /// anything else asks for an advance.
    pub fn from_index(index: i32) -> Self {
        if is_valid_index(index) {
            Self::Set(index as u8)
        } else {
            Self::Advance
        }
    }

    /// This update with an off-curve [`Set`](Self::Set) turned into
    /// [`Advance`](Self::Advance).
    pub fn normalize(self) -> Self {
        match self {
            Self::Set(index) if !is_valid_index(i32::from(index)) => Self::Advance,
            other => other,
        }
    }
}

/// Current weight index of a renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WeightState {
    index: Option<u8>,
}

impl WeightState {
    /// Creates an uninitialised state.
    pub const fn new() -> Self {
        Self { index: None }
    }

    /// Current index, or `None` before the first update.
    #[inline]
    pub fn index(&self) -> Option<u8> {
        self.index
    }

    /// Current index as a signed value, `-1` when uninitialised.
    #[inline]
    pub fn raw_index(&self) -> i32 {
        self.index.map_or(-1, i32::from)
    }

    /// Weight value for the current index (the curve's first entry when
    /// uninitialised).
    #[inline]
    pub fn value(&self) -> f32 {
        weight_value(self.raw_index())
    }

    /// Applies an update with the given mode step. Returns `true` if the
    /// index changed.
    pub fn apply(&mut self, update: WeightUpdate, step: i8) -> bool {
        let next = match update.normalize() {
            WeightUpdate::Advance => advance_index(i32::from(step), self.raw_index()) as u8,
            WeightUpdate::Set(index) => index,
        };
        let changed = self.index != Some(next);
        self.index = Some(next);
        changed
    }
}
