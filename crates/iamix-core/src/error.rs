//! Errors returned by the downmix renderer.

use core::fmt;

use crate::layout::Layout;
use crate::mix::InvalidMixMode;

/// Broad category of a [`DownmixError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The call was malformed; the renderer is unchanged.
    BadArgument,
    /// No renderer could be built for the requested layouts.
    ConstructionFailure,
}

/// Errors that can occur when opening, updating or running a renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DownmixError {
    /// Input and output layouts are the same.
    SameLayout(Layout),
    /// The layout is not a base layout, or is the binaural target.
    UnsupportedLayout(Layout),
    /// The output has more surround or height capability than the input.
    CapabilityIncrease {
        /// Source layout.
        input: Layout,
        /// Requested target layout.
        output: Layout,
    },
    /// Height stripping was requested under [`HeightPolicy::Preserve`](crate::HeightPolicy::Preserve).
    HeightStripRejected {
        /// Source layout.
        input: Layout,
        /// Requested target layout.
        output: Layout,
    },
    /// The demixing mode is reserved or out of range.
    InvalidMode(u8),
    /// The per-channel stride is zero.
    InvalidStride,
    /// Channel count times stride does not fit in `usize`.
    StrideTooLarge {
        /// Requested samples per channel.
        stride: usize,
    },
    /// The first sample index lies outside the channel stride.
    StartOutOfRange {
        /// Requested first sample.
        start: usize,
        /// Samples per channel.
        stride: usize,
    },
    /// A buffer cannot hold every channel at the given stride.
    BufferTooShort {
        /// Required length in samples.
        needed: usize,
        /// Supplied length in samples.
        actual: usize,
    },
}

impl DownmixError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SameLayout(_)
            | Self::UnsupportedLayout(_)
            | Self::CapabilityIncrease { .. }
            | Self::HeightStripRejected { .. } => ErrorKind::ConstructionFailure,
            Self::InvalidMode(_)
            | Self::InvalidStride
            | Self::StrideTooLarge { .. }
            | Self::StartOutOfRange { .. }
            | Self::BufferTooShort { .. } => ErrorKind::BadArgument,
        }
    }
}

impl fmt::Display for DownmixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SameLayout(layout) => write!(f, "cannot downmix {layout} to itself"),
            Self::UnsupportedLayout(layout) => {
                write!(f, "layout {layout} cannot take part in a downmix")
            }
            Self::CapabilityIncrease { input, output } => {
                write!(f, "{output} is more capable than {input}")
            }
            Self::HeightStripRejected { input, output } => {
                write!(f, "height stripping from {input} to {output} is not allowed")
            }
            Self::InvalidMode(mode) => write!(f, "invalid demixing mode {mode}"),
            Self::InvalidStride => write!(f, "channel stride must be non-zero"),
            Self::StrideTooLarge { stride } => {
                write!(f, "channel stride {stride} overflows the buffer size")
            }
            Self::StartOutOfRange { start, stride } => {
                write!(f, "start sample {start} outside channel stride {stride}")
            }
            Self::BufferTooShort { needed, actual } => {
                write!(f, "buffer holds {actual} samples, {needed} needed")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DownmixError {}

impl From<InvalidMixMode> for DownmixError {
    fn from(e: InvalidMixMode) -> Self {
        Self::InvalidMode(e.0)
    }
}
