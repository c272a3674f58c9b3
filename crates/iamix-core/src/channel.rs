//! Channel identifiers and dense per-channel tables.
//!
//! The channel universe is small and fixed, so every per-channel table in the
//! renderer is a plain array indexed by [`Channel`]. A channel can be physical
//! in one renderer (its samples arrive in the input buffer) and derived in
//! another (computed from other channels through the dependency graph).

use core::fmt;
use core::ops::{Index, IndexMut};

/// A loudspeaker channel known to the downmix renderer.
///
/// Names follow the layout the channel belongs to: `L5`/`R5` are the front
/// pair of every 5.x and 7.x layout, `Sl5`/`Sr5` the 5.x surround pair,
/// `Hl`/`Hr` the 5.1.2/7.1.2 height pair and `Tl`/`Tr` the 3.1.2 top pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Channel {
    /// Mono.
    Mono = 0,
    /// Stereo left.
    L2,
    /// Stereo right.
    R2,
    /// 3.1.2 front left.
    L3,
    /// 3.1.2 front right.
    R3,
    /// Front center.
    C,
    /// Low-frequency effects.
    Lfe,
    /// 5.x/7.x front left.
    L5,
    /// 5.x/7.x front right.
    R5,
    /// 5.x surround left.
    Sl5,
    /// 5.x surround right.
    Sr5,
    /// 7.x side left.
    Sl7,
    /// 7.x side right.
    Sr7,
    /// 7.x back left.
    Bl7,
    /// 7.x back right.
    Br7,
    /// 3.1.2 top left.
    Tl,
    /// 3.1.2 top right.
    Tr,
    /// x.x.2 height left.
    Hl,
    /// x.x.2 height right.
    Hr,
    /// x.x.4 height front left.
    Hfl,
    /// x.x.4 height front right.
    Hfr,
    /// x.x.4 height back left.
    Hbl,
    /// x.x.4 height back right.
    Hbr,
}

impl Channel {
    /// Number of channels in the universe.
    pub const COUNT: usize = 23;

    /// Every channel, in index order.
    pub const ALL: [Channel; Self::COUNT] = [
        Self::Mono,
        Self::L2,
        Self::R2,
        Self::L3,
        Self::R3,
        Self::C,
        Self::Lfe,
        Self::L5,
        Self::R5,
        Self::Sl5,
        Self::Sr5,
        Self::Sl7,
        Self::Sr7,
        Self::Bl7,
        Self::Br7,
        Self::Tl,
        Self::Tr,
        Self::Hl,
        Self::Hr,
        Self::Hfl,
        Self::Hfr,
        Self::Hbl,
        Self::Hbr,
    ];

    /// Dense index of this channel, `0..COUNT`.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Short display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mono => "Mono",
            Self::L2 => "L2",
            Self::R2 => "R2",
            Self::L3 => "L3",
            Self::R3 => "R3",
            Self::C => "C",
            Self::Lfe => "LFE",
            Self::L5 => "L5",
            Self::R5 => "R5",
            Self::Sl5 => "SL5",
            Self::Sr5 => "SR5",
            Self::Sl7 => "SL7",
            Self::Sr7 => "SR7",
            Self::Bl7 => "BL7",
            Self::Br7 => "BR7",
            Self::Tl => "TL",
            Self::Tr => "TR",
            Self::Hl => "HL",
            Self::Hr => "HR",
            Self::Hfl => "HFL",
            Self::Hfr => "HFR",
            Self::Hbl => "HBL",
            Self::Hbr => "HBR",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name(), self.index())
    }
}

/// Fixed-size table holding one value per [`Channel`].
///
/// Used for the renderer's graph entries and the per-call sample table, so
/// neither needs a heap allocation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChannelMap<T> {
    slots: [T; Channel::COUNT],
}

impl<T: Copy> ChannelMap<T> {
    /// Creates a map with every slot set to `value`.
    pub const fn filled(value: T) -> Self {
        Self {
            slots: [value; Channel::COUNT],
        }
    }
}

impl<T> ChannelMap<T> {
    /// Iterates `(channel, value)` pairs in channel index order.
    pub fn iter(&self) -> impl Iterator<Item = (Channel, &T)> {
        Channel::ALL.iter().copied().zip(self.slots.iter())
    }
}

impl<T: Copy + Default> Default for ChannelMap<T> {
    fn default() -> Self {
        Self::filled(T::default())
    }
}

impl<T> Index<Channel> for ChannelMap<T> {
    type Output = T;

    #[inline]
    fn index(&self, channel: Channel) -> &T {
        &self.slots[channel.index()]
    }
}

impl<T> IndexMut<Channel> for ChannelMap<T> {
    #[inline]
    fn index_mut(&mut self, channel: Channel) -> &mut T {
        &mut self.slots[channel.index()]
    }
}
