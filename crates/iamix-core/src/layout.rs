//! Loudspeaker layout catalogue.
//!
//! Each [`Layout`] carries a name, a surround rank, a height rank and the
//! ordered list of rendering channels its samples are stored in. The base
//! layouts are the ones an audio element may be coded in; the expanded
//! layouts are channel subsets of the 7.1.4 layout and never take part in a
//! downmix.

use core::fmt;
use core::str::FromStr;

use crate::channel::Channel;

/// Maximum number of rendering channels in any layout.
pub const MAX_LAYOUT_CHANNELS: usize = 12;

/// Static description of a layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutInfo {
    /// Canonical name, as accepted by [`Layout::from_str`].
    pub name: &'static str,
    /// Number of loudspeakers on the listener plane, LFE excluded.
    pub surround: u8,
    /// Number of elevated loudspeakers.
    pub height: u8,
    /// Number of rendering channels.
    pub channel_count: usize,
}

/// A loudspeaker layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layout {
    /// 1 channel.
    Mono,
    /// 2 channels (L, R).
    Stereo,
    /// 5.1 (L, R, C, LFE, Ls, Rs).
    Surround5_1,
    /// 5.1.2 (5.1 + Ltf, Rtf).
    Surround5_1_2,
    /// 5.1.4 (5.1 + Ltf, Rtf, Ltb, Rtb).
    Surround5_1_4,
    /// 7.1 (L, R, C, LFE, Lss, Rss, Lrs, Rrs).
    Surround7_1,
    /// 7.1.2 (7.1 + Ltf, Rtf).
    Surround7_1_2,
    /// 7.1.4 (7.1 + Ltf, Rtf, Ltb, Rtb).
    Surround7_1_4,
    /// 3.1.2 (L, R, C, LFE, Ltf, Rtf).
    Surround3_1_2,
    /// Binaural rendering target.
    Binaural,
    /// Expanded: LFE only.
    Lfe,
    /// Expanded: 5.1 surround pair.
    StereoS,
    /// Expanded: 7.1 side surround pair.
    StereoSs,
    /// Expanded: 7.1 rear surround pair.
    StereoRs,
    /// Expanded: top front pair.
    StereoTf,
    /// Expanded: top back pair.
    StereoTb,
    /// Expanded: the four top channels of 7.1.4.
    Top4Ch,
    /// Expanded: front L, R, C of 7.1.4.
    Front3Ch,
}

impl Layout {
    /// Every layout in the catalogue.
    pub const ALL: [Layout; 18] = [
        Self::Mono,
        Self::Stereo,
        Self::Surround5_1,
        Self::Surround5_1_2,
        Self::Surround5_1_4,
        Self::Surround7_1,
        Self::Surround7_1_2,
        Self::Surround7_1_4,
        Self::Surround3_1_2,
        Self::Binaural,
        Self::Lfe,
        Self::StereoS,
        Self::StereoSs,
        Self::StereoRs,
        Self::StereoTf,
        Self::StereoTb,
        Self::Top4Ch,
        Self::Front3Ch,
    ];

    /// Returns `true` for layouts an audio element can be coded in.
    pub const fn is_base(self) -> bool {
        matches!(
            self,
            Self::Mono
                | Self::Stereo
                | Self::Surround5_1
                | Self::Surround5_1_2
                | Self::Surround5_1_4
                | Self::Surround7_1
                | Self::Surround7_1_2
                | Self::Surround7_1_4
                | Self::Surround3_1_2
                | Self::Binaural
        )
    }

    /// Returns `true` for the binaural rendering target.
    pub const fn is_binaural(self) -> bool {
        matches!(self, Self::Binaural)
    }

    /// Name and capability ranks of this layout.
    pub const fn info(self) -> LayoutInfo {
        let (name, surround, height) = match self {
            Self::Mono => ("mono", 1, 0),
            Self::Stereo => ("stereo", 2, 0),
            Self::Surround5_1 => ("5.1", 5, 0),
            Self::Surround5_1_2 => ("5.1.2", 5, 2),
            Self::Surround5_1_4 => ("5.1.4", 5, 4),
            Self::Surround7_1 => ("7.1", 7, 0),
            Self::Surround7_1_2 => ("7.1.2", 7, 2),
            Self::Surround7_1_4 => ("7.1.4", 7, 4),
            Self::Surround3_1_2 => ("3.1.2", 3, 2),
            Self::Binaural => ("binaural", 2, 0),
            Self::Lfe => ("lfe", 0, 0),
            Self::StereoS => ("stereo-s", 2, 0),
            Self::StereoSs => ("stereo-ss", 2, 0),
            Self::StereoRs => ("stereo-rs", 2, 0),
            Self::StereoTf => ("stereo-tf", 0, 2),
            Self::StereoTb => ("stereo-tb", 0, 2),
            Self::Top4Ch => ("top-4ch", 0, 4),
            Self::Front3Ch => ("3.0ch", 3, 0),
        };
        LayoutInfo {
            name,
            surround,
            height,
            channel_count: self.rendering_channels().len(),
        }
    }

    /// Canonical name of this layout.
    pub const fn name(self) -> &'static str {
        self.info().name
    }

    /// Rendering channels in the order their samples are stored.
    pub const fn rendering_channels(self) -> &'static [Channel] {
        use Channel::{
            Bl7, Br7, C, Hbl, Hbr, Hfl, Hfr, Hl, Hr, L2, L3, L5, Lfe, Mono, R2, R3, R5, Sl5, Sl7,
            Sr5, Sr7, Tl, Tr,
        };
        match self {
            Self::Mono => &[Mono],
            Self::Stereo | Self::Binaural => &[L2, R2],
            Self::Surround5_1 => &[L5, R5, C, Lfe, Sl5, Sr5],
            Self::Surround5_1_2 => &[L5, R5, C, Lfe, Sl5, Sr5, Hl, Hr],
            Self::Surround5_1_4 => &[L5, R5, C, Lfe, Sl5, Sr5, Hfl, Hfr, Hbl, Hbr],
            Self::Surround7_1 => &[L5, R5, C, Lfe, Sl7, Sr7, Bl7, Br7],
            Self::Surround7_1_2 => &[L5, R5, C, Lfe, Sl7, Sr7, Bl7, Br7, Hl, Hr],
            Self::Surround7_1_4 => &[L5, R5, C, Lfe, Sl7, Sr7, Bl7, Br7, Hfl, Hfr, Hbl, Hbr],
            Self::Surround3_1_2 => &[L3, R3, C, Lfe, Tl, Tr],
            Self::Lfe => &[Lfe],
            Self::StereoS => &[Sl5, Sr5],
            Self::StereoSs => &[Sl7, Sr7],
            Self::StereoRs => &[Bl7, Br7],
            Self::StereoTf => &[Hfl, Hfr],
            Self::StereoTb => &[Hbl, Hbr],
            Self::Top4Ch => &[Hfl, Hfr, Hbl, Hbr],
            Self::Front3Ch => &[L5, R5, C],
        }
    }

    /// Number of rendering channels.
    pub const fn channel_count(self) -> usize {
        self.rendering_channels().len()
    }

    /// Returns `true` if `channel` is one of this layout's rendering channels.
    pub fn contains(self, channel: Channel) -> bool {
        self.rendering_channels().contains(&channel)
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a layout name is not in the catalogue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownLayout;

impl fmt::Display for UnknownLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown loudspeaker layout")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownLayout {}

impl FromStr for Layout {
    type Err = UnknownLayout;

    /// Parses a canonical layout name; matching is ASCII case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|layout| layout.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(UnknownLayout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_counts() {
        assert_eq!(Layout::Mono.channel_count(), 1);
        assert_eq!(Layout::Stereo.channel_count(), 2);
        assert_eq!(Layout::Surround5_1.channel_count(), 6);
        assert_eq!(Layout::Surround5_1_2.channel_count(), 8);
        assert_eq!(Layout::Surround5_1_4.channel_count(), 10);
        assert_eq!(Layout::Surround7_1.channel_count(), 8);
        assert_eq!(Layout::Surround7_1_2.channel_count(), 10);
        assert_eq!(Layout::Surround7_1_4.channel_count(), 12);
        assert_eq!(Layout::Surround3_1_2.channel_count(), 6);
        assert!(
            Layout::ALL
                .iter()
                .all(|l| l.channel_count() <= MAX_LAYOUT_CHANNELS)
        );
    }

    #[test]
    fn test_info_matches_channels() {
        for layout in Layout::ALL {
            let info = layout.info();
            assert_eq!(info.channel_count, layout.rendering_channels().len());
            assert_eq!(info.name, layout.name());
        }
    }

    #[test]
    fn test_rendering_channels_unique() {
        for layout in Layout::ALL {
            let chs = layout.rendering_channels();
            for (i, a) in chs.iter().enumerate() {
                assert!(!chs[i + 1..].contains(a), "{layout} repeats {a}");
            }
        }
    }

    #[test]
    fn test_base_layouts() {
        assert!(Layout::Surround7_1_4.is_base());
        assert!(Layout::Binaural.is_base());
        assert!(!Layout::Top4Ch.is_base());
        assert!(!Layout::Lfe.is_base());
        assert!(Layout::Binaural.is_binaural());
        assert!(!Layout::Stereo.is_binaural());
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("7.1.4".parse::<Layout>(), Ok(Layout::Surround7_1_4));
        assert_eq!("Stereo".parse::<Layout>(), Ok(Layout::Stereo));
        assert_eq!(" 3.1.2 ".parse::<Layout>(), Ok(Layout::Surround3_1_2));
        assert_eq!("9.1.6".parse::<Layout>(), Err(UnknownLayout));
        for layout in Layout::ALL {
            assert_eq!(layout.to_string().parse::<Layout>(), Ok(layout));
        }
    }
}
