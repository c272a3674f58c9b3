//! Downmix renderer: layout validation, mode/weight state and evaluation.
//!
//! A [`DownmixRenderer`] is opened once per (input layout, output layout)
//! pair and reused for every frame of a stream. Opening prunes the
//! dependency graph so that every input channel is a leaf. Each frame the
//! decoder calls [`set_mode_and_weight()`](DownmixRenderer::set_mode_and_weight)
//! with the signalled demixing mode and weight, then
//! [`downmix()`](DownmixRenderer::downmix) to evaluate every output channel.
//!
//! # Buffers
//!
//! Both buffers are planar: channel `i` of a layout occupies
//! `[i * stride, (i + 1) * stride)`, in the layout's rendering-channel order.
//!
//! # Example
//!
//! ```rust
//! use iamix_core::{DownmixRenderer, Layout};
//!
//! let mut dmr = DownmixRenderer::open(Layout::Surround3_1_2, Layout::Stereo).unwrap();
//! dmr.set_mode_and_weight(0, 0).unwrap();
//!
//! let stride = 4;
//! let input = vec![1.0f32; Layout::Surround3_1_2.channel_count() * stride];
//! let mut output = vec![0.0f32; Layout::Stereo.channel_count() * stride];
//! dmr.downmix(&input, &mut output, 0, stride, stride).unwrap();
//!
//! // L2 = L3 + 0.707 * C
//! assert!((output[0] - 1.707).abs() < 1e-6);
//! ```

use crate::channel::{Channel, ChannelMap};
use crate::error::DownmixError;
use crate::graph::{DependencyGraph, Visitor};
use crate::layout::Layout;
use crate::mix::{MixFactors, MixMode};
use crate::weight::{WeightState, WeightUpdate};

/// Whether a downmix may drop every height channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HeightPolicy {
    /// A height-capable input may render to a layout without height.
    #[default]
    Strip,
    /// A height-capable input must render to a layout with height.
    Preserve,
}

/// Checks that `output` can be derived from `input`.
///
/// # Errors
///
/// - [`DownmixError::SameLayout`] if the layouts are equal
/// - [`DownmixError::UnsupportedLayout`] for non-base or binaural layouts
/// - [`DownmixError::HeightStripRejected`] if `policy` is
///   [`HeightPolicy::Preserve`] and only the input has height
/// - [`DownmixError::CapabilityIncrease`] if the output has more surround
///   or more height channels than the input
pub fn validate_pair(
    input: Layout,
    output: Layout,
    policy: HeightPolicy,
) -> Result<(), DownmixError> {
    if input == output {
        return Err(DownmixError::SameLayout(input));
    }
    for layout in [input, output] {
        if !layout.is_base() || layout.is_binaural() {
            return Err(DownmixError::UnsupportedLayout(layout));
        }
    }

    let src = input.info();
    let dst = output.info();
    if policy == HeightPolicy::Preserve && src.height > 0 && dst.height == 0 {
        return Err(DownmixError::HeightStripRejected { input, output });
    }
    if src.surround < dst.surround || src.height < dst.height {
        return Err(DownmixError::CapabilityIncrease { input, output });
    }
    Ok(())
}

/// Returns `true` if [`DownmixRenderer::open`] accepts the pair.
pub fn is_valid_pair(input: Layout, output: Layout) -> bool {
    validate_pair(input, output, HeightPolicy::default()).is_ok()
}

/// Counters collected by a diagnostic walk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TraceSummary {
    /// Edges traversed.
    pub edges: usize,
    /// Channels resolved from input data.
    pub bound: usize,
    /// Channels that resolved to silence.
    pub unresolved: usize,
}

/// Reads one sample index through the graph.
struct SampleReader<'a> {
    samples: &'a ChannelMap<Option<&'a [f32]>>,
    index: usize,
}

impl Visitor for SampleReader<'_> {
    type Value = f32;

    #[inline]
    fn bound(&mut self, channel: Channel) -> Option<f32> {
        self.samples[channel].map(|data| data[self.index])
    }

    #[inline]
    fn unresolved(&mut self, _channel: Channel) -> f32 {
        0.0
    }

    #[inline]
    fn begin(&mut self, _target: Channel) -> f32 {
        0.0
    }

    #[inline]
    fn accumulate(&mut self, sum: f32, value: f32, weight: f32) -> f32 {
        sum + value * weight
    }
}

/// Walks the derivation of a channel without data, logging each edge.
struct Tracer {
    input: Layout,
    summary: TraceSummary,
}

impl Visitor for Tracer {
    type Value = ();

    fn bound(&mut self, channel: Channel) -> Option<()> {
        if self.input.contains(channel) {
            self.summary.bound += 1;
            Some(())
        } else {
            None
        }
    }

    fn unresolved(&mut self, _channel: Channel) {
        self.summary.unresolved += 1;
        #[cfg(feature = "tracing")]
        tracing::warn!("channel {_channel} can not be found");
    }

    fn begin(&mut self, _target: Channel) {}

    fn edge(&mut self, _target: Channel, _source: Channel, _weight: f32) {
        self.summary.edges += 1;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            "channel {_source}, scale {_weight}{}",
            if self.input.contains(_source) {
                ", s."
            } else {
                " m."
            }
        );
    }

    fn accumulate(&mut self, _sum: (), _value: (), _weight: f32) {}
}

/// Renders a lower-capability layout from a higher one.
///
/// Holds the pruned dependency graph, the active demixing mode and its mix
/// factors, and the smoothed weight index. The renderer allocates nothing;
/// `downmix` takes `&self`, so one renderer can serve concurrent readers
/// between updates.
#[derive(Clone, Debug)]
pub struct DownmixRenderer {
    input: Layout,
    output: Layout,
    mode: Option<MixMode>,
    weight: WeightState,
    factors: MixFactors,
    graph: DependencyGraph,
}

impl DownmixRenderer {
    /// Opens a renderer with the standard topology and
    /// [`HeightPolicy::Strip`].
    pub fn open(input: Layout, output: Layout) -> Result<Self, DownmixError> {
        Self::open_with(
            input,
            output,
            HeightPolicy::default(),
            DependencyGraph::standard(),
        )
    }

    /// Opens a renderer with the standard topology and the given policy.
    pub fn open_with_policy(
        input: Layout,
        output: Layout,
        policy: HeightPolicy,
    ) -> Result<Self, DownmixError> {
        Self::open_with(input, output, policy, DependencyGraph::standard())
    }

    /// Opens a renderer over a custom topology.
    ///
    /// Every input rendering channel is detached from `graph`, so input data
    /// always wins over a derivation. No cycle check is needed here:
    /// [`DependencyGraph::insert`] refuses cycles and the standard table has
    /// none.
    ///
    /// # Errors
    ///
    /// Any error of [`validate_pair`].
    pub fn open_with(
        input: Layout,
        output: Layout,
        policy: HeightPolicy,
        mut graph: DependencyGraph,
    ) -> Result<Self, DownmixError> {
        validate_pair(input, output, policy)?;

        #[cfg(feature = "tracing")]
        tracing::debug!("{input} downmix to {output}");

        for &ch in input.rendering_channels() {
            graph.detach(ch);
        }

        Ok(Self {
            input,
            output,
            mode: None,
            weight: WeightState::new(),
            factors: MixFactors::ZERO,
            graph,
        })
    }

    /// Releases the renderer.
    pub fn close(self) {}

    /// Applies a bitstream mode/weight update.
    ///
    /// A `weight_index` on the weight curve sets the index; any other value
    /// advances it by the mode's step.
    ///
    /// # Errors
    ///
    /// [`DownmixError::InvalidMode`] for a reserved or unknown mode. No state
    /// changes on error.
    pub fn set_mode_and_weight(&mut self, mode: u8, weight_index: i32) -> Result<(), DownmixError> {
        let mode = MixMode::try_from(mode)?;
        self.update(mode, WeightUpdate::from_index(weight_index));
        Ok(())
    }

    /// Applies a typed mode/weight update.
    ///
    /// A mode change replaces the mix factors wholesale; slot-weighted edges
    /// see the new values on the next evaluation. The `gamma·w` edges of the
    /// top pair are recomputed and frozen whenever the weight advances, the
    /// weight index changes, or the mode changes.
    pub fn update(&mut self, mode: MixMode, weight: WeightUpdate) {
        let weight = weight.normalize();
        let mode_changed = self.mode != Some(mode);
        if mode_changed {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                "dmixtypenum: {} -> {}",
                self.mode.map_or(-1, |m| i32::from(m.value())),
                mode
            );
            self.mode = Some(mode);
            self.factors = mode.factors();
            #[cfg(feature = "tracing")]
            tracing::debug!(
                "mode {mode}: a {}, b {}, g {}, d {}, w index offset {}",
                self.factors.alpha,
                self.factors.beta,
                self.factors.gamma,
                self.factors.delta,
                self.factors.weight_step
            );
        }

        #[cfg(feature = "tracing")]
        let previous = self.weight;
        let index_changed = self.weight.apply(weight, self.factors.weight_step);
        #[cfg(feature = "tracing")]
        if index_changed || weight == WeightUpdate::Advance {
            tracing::debug!(
                "weight state index : {} ({}) -> {} ({})",
                previous.raw_index(),
                previous.value(),
                self.weight.raw_index(),
                self.weight.value()
            );
        }

        if weight == WeightUpdate::Advance || index_changed || mode_changed {
            self.refresh_top_blend();
        }
    }

    /// Rewrites the `gamma·w` literal on the TL/TR surround edges.
    fn refresh_top_blend(&mut self) {
        let blend = self.factors.gamma * self.weight.value();
        self.graph.set_literal(Channel::Tl, Channel::Sl5, blend);
        self.graph.set_literal(Channel::Tr, Channel::Sr5, blend);
    }

    /// Evaluates every output channel for samples `[start, start + duration)`,
    /// clipped to `stride`.
    ///
    /// Output samples outside that range are left untouched.
    ///
    /// # Errors
    ///
    /// - [`DownmixError::InvalidStride`] if `stride` is zero
    /// - [`DownmixError::StartOutOfRange`] if `start >= stride`
    /// - [`DownmixError::StrideTooLarge`] if a layout's channel count times
    ///   `stride` overflows
    /// - [`DownmixError::BufferTooShort`] if either buffer is shorter than
    ///   its layout's channel count times `stride`
    pub fn downmix(
        &self,
        input: &[f32],
        output: &mut [f32],
        start: usize,
        duration: usize,
        stride: usize,
    ) -> Result<(), DownmixError> {
        if stride == 0 {
            return Err(DownmixError::InvalidStride);
        }
        if start >= stride {
            return Err(DownmixError::StartOutOfRange { start, stride });
        }
        let in_chs = self.input.rendering_channels();
        let out_chs = self.output.rendering_channels();
        check_len(input.len(), in_chs.len(), stride)?;
        check_len(output.len(), out_chs.len(), stride)?;

        // Bound fresh on every call; nothing aliases a previous buffer.
        let mut samples: ChannelMap<Option<&[f32]>> = ChannelMap::filled(None);
        for (&ch, data) in in_chs.iter().zip(input.chunks_exact(stride)) {
            samples[ch] = Some(data);
        }

        let end = start.saturating_add(duration).min(stride);
        for (&ch, out) in out_chs.iter().zip(output.chunks_exact_mut(stride)) {
            #[cfg(feature = "tracing")]
            {
                tracing::debug!("channel {ch} checking...");
                self.trace_output(ch);
            }
            for (i, sample) in out.iter_mut().enumerate().take(end).skip(start) {
                let mut reader = SampleReader {
                    samples: &samples,
                    index: i,
                };
                *sample = self.graph.walk(ch, &self.factors, &mut reader);
            }
        }
        Ok(())
    }

    /// Walks the derivation of `channel` against this renderer's input
    /// layout, logging every edge when the `tracing` feature is enabled.
    pub fn trace_output(&self, channel: Channel) -> TraceSummary {
        let mut tracer = Tracer {
            input: self.input,
            summary: TraceSummary::default(),
        };
        self.graph.walk(channel, &self.factors, &mut tracer);
        tracer.summary
    }

    /// Source layout.
    pub fn input_layout(&self) -> Layout {
        self.input
    }

    /// Target layout.
    pub fn output_layout(&self) -> Layout {
        self.output
    }

    /// Input rendering channels, in buffer order.
    pub fn input_channels(&self) -> &'static [Channel] {
        self.input.rendering_channels()
    }

    /// Output rendering channels, in buffer order.
    pub fn output_channels(&self) -> &'static [Channel] {
        self.output.rendering_channels()
    }

    /// Active demixing mode, `None` before the first update.
    pub fn mode(&self) -> Option<MixMode> {
        self.mode
    }

    /// Current weight index, `None` before the first update.
    pub fn weight_index(&self) -> Option<u8> {
        self.weight.index()
    }

    /// Current weight value.
    pub fn weight(&self) -> f32 {
        self.weight.value()
    }

    /// Active mix factors.
    pub fn mix_factors(&self) -> &MixFactors {
        &self.factors
    }

    /// The pruned dependency graph.
    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }
}

fn check_len(actual: usize, channels: usize, stride: usize) -> Result<(), DownmixError> {
    let needed = channels
        .checked_mul(stride)
        .ok_or(DownmixError::StrideTooLarge { stride })?;
    if actual < needed {
        return Err(DownmixError::BufferTooShort { needed, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Dependency, WeightSource};

    const STRIDE: usize = 16;

    fn constant_input(layout: Layout, value: f32) -> Vec<f32> {
        vec![value; layout.channel_count() * STRIDE]
    }

    fn top_blend(dmr: &DownmixRenderer) -> f32 {
        match dmr.graph().entry(Channel::Tl).unwrap()[1].weight {
            WeightSource::Literal(v) => v,
            WeightSource::Slot(_) => panic!("TL surround edge should be a literal"),
        }
    }

    // --- Validation ---

    #[test]
    fn test_same_layout_rejected() {
        assert_eq!(
            validate_pair(Layout::Stereo, Layout::Stereo, HeightPolicy::Strip),
            Err(DownmixError::SameLayout(Layout::Stereo))
        );
    }

    #[test]
    fn test_binaural_rejected() {
        assert!(!is_valid_pair(Layout::Surround5_1, Layout::Binaural));
        assert!(!is_valid_pair(Layout::Binaural, Layout::Mono));
    }

    #[test]
    fn test_expanded_layouts_rejected() {
        assert_eq!(
            validate_pair(Layout::Surround7_1_4, Layout::Top4Ch, HeightPolicy::Strip),
            Err(DownmixError::UnsupportedLayout(Layout::Top4Ch))
        );
    }

    #[test]
    fn test_capability_increase_rejected() {
        assert!(!is_valid_pair(Layout::Stereo, Layout::Surround5_1));
        assert!(!is_valid_pair(Layout::Surround3_1_2, Layout::Surround5_1_2));
        assert!(!is_valid_pair(Layout::Surround7_1_2, Layout::Surround5_1_4));
        assert!(!is_valid_pair(Layout::Surround5_1, Layout::Surround3_1_2));
    }

    #[test]
    fn test_height_strip_policy() {
        assert!(is_valid_pair(Layout::Surround5_1_2, Layout::Surround5_1));
        assert!(is_valid_pair(Layout::Surround7_1_4, Layout::Stereo));
        assert_eq!(
            validate_pair(
                Layout::Surround5_1_2,
                Layout::Surround5_1,
                HeightPolicy::Preserve
            ),
            Err(DownmixError::HeightStripRejected {
                input: Layout::Surround5_1_2,
                output: Layout::Surround5_1,
            })
        );
        assert!(
            validate_pair(
                Layout::Surround7_1_4,
                Layout::Surround3_1_2,
                HeightPolicy::Preserve
            )
            .is_ok()
        );
    }

    // --- Construction ---

    #[test]
    fn test_open_prunes_input_channels() {
        let dmr = DownmixRenderer::open(Layout::Surround5_1_2, Layout::Surround3_1_2).unwrap();
        for &ch in dmr.input_channels() {
            assert!(dmr.graph().is_leaf(ch), "{ch} should be a leaf");
        }
        assert!(!dmr.graph().is_leaf(Channel::L3));
        assert!(!dmr.graph().is_leaf(Channel::Tl));
        assert_eq!(dmr.mode(), None);
        assert_eq!(dmr.weight_index(), None);
    }

    #[test]
    fn test_open_with_custom_graph() {
        let mut graph = DependencyGraph::empty();
        graph
            .insert(Channel::L2, &[Dependency::literal(Channel::L3, 0.5)])
            .unwrap();
        let dmr = DownmixRenderer::open_with(
            Layout::Surround3_1_2,
            Layout::Stereo,
            HeightPolicy::Strip,
            graph,
        )
        .unwrap();
        assert_eq!(dmr.graph().derived_count(), 1);

        let input = constant_input(Layout::Surround3_1_2, 1.0);
        let mut output = vec![9.0; 2 * STRIDE];
        dmr.downmix(&input, &mut output, 0, STRIDE, STRIDE).unwrap();
        assert!(output[..STRIDE].iter().all(|&s| s == 0.5));
        assert!(output[STRIDE..].iter().all(|&s| s == 0.0));
    }

    // --- Mode / weight ---

    #[test]
    fn test_invalid_mode_leaves_state() {
        let mut dmr = DownmixRenderer::open(Layout::Surround7_1_4, Layout::Surround3_1_2).unwrap();
        dmr.set_mode_and_weight(1, 4).unwrap();
        let before = dmr.clone();
        assert_eq!(
            dmr.set_mode_and_weight(3, -1),
            Err(DownmixError::InvalidMode(3))
        );
        assert_eq!(dmr.mode(), before.mode());
        assert_eq!(dmr.weight_index(), before.weight_index());
        assert_eq!(dmr.graph(), before.graph());
    }

    #[test]
    fn test_mode_change_replaces_factors() {
        let mut dmr = DownmixRenderer::open(Layout::Surround7_1_4, Layout::Surround3_1_2).unwrap();
        dmr.set_mode_and_weight(0, -1).unwrap();
        assert_eq!(*dmr.mix_factors(), MixMode::Mode1.factors());
        dmr.set_mode_and_weight(2, -1).unwrap();
        assert_eq!(*dmr.mix_factors(), MixMode::Mode3.factors());
        assert_eq!(dmr.mode(), Some(MixMode::Mode3));
    }

    #[test]
    fn test_advance_and_set() {
        let mut dmr = DownmixRenderer::open(Layout::Surround7_1_4, Layout::Surround3_1_2).unwrap();
        dmr.set_mode_and_weight(4, -1).unwrap();
        assert_eq!(dmr.weight_index(), Some(0));
        dmr.set_mode_and_weight(4, -1).unwrap();
        assert_eq!(dmr.weight_index(), Some(1));
        dmr.set_mode_and_weight(4, 8).unwrap();
        assert_eq!(dmr.weight_index(), Some(8));
        dmr.set_mode_and_weight(0, 11).unwrap();
        assert_eq!(dmr.weight_index(), Some(7));
    }

    #[test]
    fn test_typed_and_bitstream_updates_agree() {
        let mut typed = DownmixRenderer::open(Layout::Surround7_1_4, Layout::Surround3_1_2).unwrap();
        let mut bitstream = typed.clone();
        for (mode, index) in [(MixMode::Mode1Rising, 7u8), (MixMode::Mode1, 11), (MixMode::Mode1, 255)] {
            typed.update(mode, WeightUpdate::Set(index));
            bitstream
                .set_mode_and_weight(mode.value(), i32::from(index))
                .unwrap();
            assert_eq!(typed.weight_index(), bitstream.weight_index());
            assert_eq!(typed.graph(), bitstream.graph());
        }
        assert_eq!(typed.weight_index(), Some(5));
    }

    #[test]
    fn test_top_blend_follows_weight() {
        let mut dmr = DownmixRenderer::open(Layout::Surround7_1_4, Layout::Surround3_1_2).unwrap();
        assert_eq!(top_blend(&dmr), 0.0);

        dmr.set_mode_and_weight(0, 5).unwrap();
        assert_eq!(top_blend(&dmr), 0.707 * 0.25);

        dmr.set_mode_and_weight(0, -1).unwrap();
        assert_eq!(dmr.weight_index(), Some(4));
        assert_eq!(top_blend(&dmr), 0.707 * 0.1038);

        // Same explicit index, new mode: the blend picks up the new gamma.
        dmr.set_mode_and_weight(2, 4).unwrap();
        assert_eq!(top_blend(&dmr), 0.866 * 0.1038);
    }

    #[test]
    fn test_top_blend_skipped_when_top_is_input() {
        let mut dmr = DownmixRenderer::open(Layout::Surround3_1_2, Layout::Stereo).unwrap();
        dmr.set_mode_and_weight(0, 10).unwrap();
        assert!(dmr.graph().is_leaf(Channel::Tl));
        assert_eq!(dmr.weight_index(), Some(10));
    }

    // --- Evaluation ---

    #[test]
    fn test_downmix_argument_checks() {
        let dmr = DownmixRenderer::open(Layout::Stereo, Layout::Mono).unwrap();
        let input = constant_input(Layout::Stereo, 1.0);
        let mut output = vec![0.0; STRIDE];

        assert_eq!(
            dmr.downmix(&input, &mut output, 0, STRIDE, 0),
            Err(DownmixError::InvalidStride)
        );
        assert_eq!(
            dmr.downmix(&input, &mut output, STRIDE, 1, STRIDE),
            Err(DownmixError::StartOutOfRange {
                start: STRIDE,
                stride: STRIDE
            })
        );
        assert_eq!(
            dmr.downmix(&input[..STRIDE], &mut output, 0, STRIDE, STRIDE),
            Err(DownmixError::BufferTooShort {
                needed: 2 * STRIDE,
                actual: STRIDE
            })
        );
        assert_eq!(
            dmr.downmix(&input, &mut output[..1], 0, STRIDE, STRIDE),
            Err(DownmixError::BufferTooShort {
                needed: STRIDE,
                actual: 1
            })
        );
    }

    #[test]
    fn test_downmix_stride_overflow() {
        let dmr = DownmixRenderer::open(Layout::Stereo, Layout::Mono).unwrap();
        let input = [1.0; 4];
        let mut output = [-1.0; 2];
        let stride = usize::MAX / 2 + 1;

        let err = dmr
            .downmix(&input, &mut output, 0, 1, stride)
            .unwrap_err();
        assert_eq!(err, DownmixError::StrideTooLarge { stride });
        assert_eq!(err.kind(), crate::ErrorKind::BadArgument);
        assert_eq!(output, [-1.0; 2]);
    }

    #[test]
    fn test_mono_from_stereo() {
        let dmr = DownmixRenderer::open(Layout::Stereo, Layout::Mono).unwrap();
        let input = constant_input(Layout::Stereo, 1.0);
        let mut output = vec![0.0; STRIDE];
        dmr.downmix(&input, &mut output, 0, STRIDE, STRIDE).unwrap();
        assert!(output.iter().all(|&s| s == 1.0));
    }

    #[test]
    fn test_stereo_from_three_front() {
        let dmr = DownmixRenderer::open(Layout::Surround3_1_2, Layout::Stereo).unwrap();
        let input = constant_input(Layout::Surround3_1_2, 1.0);
        let mut output = vec![0.0; 2 * STRIDE];
        dmr.downmix(&input, &mut output, 0, STRIDE, STRIDE).unwrap();
        assert!(output.iter().all(|&s| (s - 1.707).abs() < 1e-6));
    }

    #[test]
    fn test_range_is_respected() {
        let dmr = DownmixRenderer::open(Layout::Stereo, Layout::Mono).unwrap();
        let input = vec![1.0; 2 * 20];
        let mut output = vec![-1.0; 20];
        dmr.downmix(&input, &mut output, 5, 10, 20).unwrap();
        for (i, &s) in output.iter().enumerate() {
            if (5..15).contains(&i) {
                assert_eq!(s, 1.0, "sample {i} should be written");
            } else {
                assert_eq!(s, -1.0, "sample {i} should be untouched");
            }
        }
    }

    #[test]
    fn test_duration_clipped_to_stride() {
        let dmr = DownmixRenderer::open(Layout::Stereo, Layout::Mono).unwrap();
        let input = vec![0.5; 2 * 8];
        let mut output = vec![0.0; 8];
        dmr.downmix(&input, &mut output, 6, usize::MAX, 8).unwrap();
        assert_eq!(&output[..6], &[0.0; 6]);
        assert_eq!(&output[6..], &[0.5, 0.5]);
    }

    #[test]
    fn test_silence_for_underivable_channel() {
        let mut graph = DependencyGraph::standard();
        graph.detach(Channel::L2);
        let dmr =
            DownmixRenderer::open_with(Layout::Surround3_1_2, Layout::Stereo, HeightPolicy::Strip, graph)
                .unwrap();
        let input = constant_input(Layout::Surround3_1_2, 1.0);
        let mut output = vec![9.0; 2 * STRIDE];
        dmr.downmix(&input, &mut output, 0, STRIDE, STRIDE).unwrap();
        assert!(output[..STRIDE].iter().all(|&s| s == 0.0));
        assert!(output[STRIDE..].iter().all(|&s| (s - 1.707).abs() < 1e-6));
    }

    #[test]
    fn test_trace_summary() {
        let dmr = DownmixRenderer::open(Layout::Surround7_1_4, Layout::Surround3_1_2).unwrap();
        // TL <- HL(<- HFL, HBL), SL5(<- SL7, BL7)
        let summary = dmr.trace_output(Channel::Tl);
        assert_eq!(summary.edges, 6);
        assert_eq!(summary.bound, 4);
        assert_eq!(summary.unresolved, 0);
        // LFE is an input channel.
        assert_eq!(
            dmr.trace_output(Channel::Lfe),
            TraceSummary {
                edges: 0,
                bound: 1,
                unresolved: 0
            }
        );
    }
}
