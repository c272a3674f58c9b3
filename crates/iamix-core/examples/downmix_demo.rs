//! Downmix demo: layout validation, frame-by-frame weight ramping, and the
//! derivation trace of every output channel.
//!
//! Run with: RUST_LOG=debug cargo run -p iamix-core --features tracing --example downmix_demo

use iamix_core::{DownmixRenderer, Layout, MAX_LAYOUT_CHANNELS, is_valid_pair};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // --- Pair validation ---
    println!("=== Valid Downmix Pairs ===\n");

    let bases: Vec<Layout> = Layout::ALL
        .into_iter()
        .filter(|l| l.is_base() && !l.is_binaural())
        .collect();

    print!("{:<8}", "in\\out");
    for out in &bases {
        print!("{:>7}", out.name());
    }
    println!();
    for &input in &bases {
        print!("{:<8}", input.name());
        for &output in &bases {
            print!("{:>7}", if is_valid_pair(input, output) { "x" } else { "." });
        }
        println!();
    }

    // --- Weight ramp ---
    println!("\n=== 7.1.4 -> 3.1.2, mode 4 ramp ===\n");

    let input_layout = Layout::Surround7_1_4;
    let output_layout = Layout::Surround3_1_2;
    let stride = 8;
    let mut dmr = DownmixRenderer::open(input_layout, output_layout)?;
    // Sized for any layout; only the leading channels are read or written.
    let input = vec![1.0f32; MAX_LAYOUT_CHANNELS * stride];
    let mut output = vec![0.0f32; MAX_LAYOUT_CHANNELS * stride];

    println!("{:<6} {:>6} {:>8} {:>10}", "Frame", "Index", "Weight", "TL");
    println!("{:-<6} {:->6} {:->8} {:->10}", "", "", "", "");
    let tl = output_layout
        .rendering_channels()
        .iter()
        .position(|&c| c == iamix_core::Channel::Tl)
        .unwrap_or(0);
    for frame in 0..12 {
        dmr.set_mode_and_weight(4, -1)?;
        dmr.downmix(&input, &mut output, 0, stride, stride)?;
        println!(
            "{:<6} {:>6} {:>8.4} {:>10.4}",
            frame,
            dmr.weight_index().unwrap_or_default(),
            dmr.weight(),
            output[tl * stride]
        );
    }

    // --- Derivation trace ---
    println!("\n=== Derivation Trace ===\n");

    for &ch in dmr.output_channels() {
        let summary = dmr.trace_output(ch);
        println!(
            "{:<6} edges {:>2}  bound {:>2}  unresolved {}",
            ch.name(),
            summary.edges,
            summary.bound,
            summary.unresolved
        );
    }

    dmr.close();
    Ok(())
}
