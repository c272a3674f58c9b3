//! Demixing modes and their mix-factor presets.
//!
//! The bitstream selects one of six demixing modes. Each mode fixes the
//! `alpha`, `beta`, `gamma` and `delta` coefficients used by the dependency
//! graph, and the step by which the smoothed weight index moves on every
//! advance. Mode value 3 is reserved.

use core::fmt;

/// Coefficient preset for one demixing mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MixFactors {
    /// Weight of the 7.x side pair in the 5.x surround pair.
    pub alpha: f32,
    /// Weight of the 7.x back pair in the 5.x surround pair.
    pub beta: f32,
    /// Weight of the back height pair in the x.x.2 height pair.
    pub gamma: f32,
    /// Weight of the 5.x surround pair in the 3.x front pair.
    pub delta: f32,
    /// Signed step applied to the weight index on every advance.
    pub weight_step: i8,
}

impl MixFactors {
    /// All-zero factors held by a renderer before its first mode update.
    pub const ZERO: Self = Self {
        alpha: 0.0,
        beta: 0.0,
        gamma: 0.0,
        delta: 0.0,
        weight_step: 0,
    };

    /// Value of a named coefficient slot.
    #[inline]
    pub fn get(&self, slot: CoefficientSlot) -> f32 {
        match slot {
            CoefficientSlot::Alpha => self.alpha,
            CoefficientSlot::Beta => self.beta,
            CoefficientSlot::Gamma => self.gamma,
            CoefficientSlot::Delta => self.delta,
        }
    }
}

impl Default for MixFactors {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Named coefficient of the active [`MixFactors`].
///
/// Graph edges that reference a slot read the renderer's current factors at
/// evaluation time, so a mode change takes effect on the next sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CoefficientSlot {
    /// [`MixFactors::alpha`].
    Alpha,
    /// [`MixFactors::beta`].
    Beta,
    /// [`MixFactors::gamma`].
    Gamma,
    /// [`MixFactors::delta`].
    Delta,
}

impl fmt::Display for CoefficientSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Alpha => "alpha",
            Self::Beta => "beta",
            Self::Gamma => "gamma",
            Self::Delta => "delta",
        })
    }
}

/// A demixing mode as signalled by the bitstream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MixMode {
    /// Mode 1, weight decreasing.
    Mode1 = 0,
    /// Mode 2, weight decreasing.
    Mode2 = 1,
    /// Mode 3, weight decreasing.
    Mode3 = 2,
    /// Mode 1, weight increasing.
    Mode1Rising = 4,
    /// Mode 2, weight increasing.
    Mode2Rising = 5,
    /// Mode 3, weight increasing.
    Mode3Rising = 6,
}

impl MixMode {
    /// Every valid mode, in bitstream value order.
    pub const ALL: [MixMode; 6] = [
        Self::Mode1,
        Self::Mode2,
        Self::Mode3,
        Self::Mode1Rising,
        Self::Mode2Rising,
        Self::Mode3Rising,
    ];

    /// Bitstream value of this mode.
    #[inline]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Mix factors for this mode.
    pub const fn factors(self) -> MixFactors {
        let (alpha, beta, gamma, delta, weight_step) = match self {
            Self::Mode1 => (1.0, 1.0, 0.707, 0.707, -1),
            Self::Mode2 => (0.707, 0.707, 0.707, 0.707, -1),
            Self::Mode3 => (1.0, 0.866, 0.866, 0.866, -1),
            Self::Mode1Rising => (1.0, 1.0, 0.707, 0.707, 1),
            Self::Mode2Rising => (0.707, 0.707, 0.707, 0.707, 1),
            Self::Mode3Rising => (1.0, 0.866, 0.866, 0.866, 1),
        };
        MixFactors {
            alpha,
            beta,
            gamma,
            delta,
            weight_step,
        }
    }
}

impl fmt::Display for MixMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Error returned for a reserved or out-of-range mode value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidMixMode(pub u8);

impl fmt::Display for InvalidMixMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid demixing mode {}", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidMixMode {}

impl TryFrom<u8> for MixMode {
    type Error = InvalidMixMode;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|mode| mode.value() == value)
            .ok_or(InvalidMixMode(value))
    }
}

/// Returns `true` if `value` names a demixing mode.
pub fn is_valid_mode(value: u8) -> bool {
    MixMode::try_from(value).is_ok()
}
