//! Optimizes a 64×64 mask for a number of ticks and saves it as a PNG.
//!
//! ```text
//! RUST_LOG=info cargo run --release --example generate -- [ticks] [output.png]
//! ```

use anyhow::{Context, Result};
use bluenoise_swap::{BlueNoise, MaskConfig};
use std::time::Instant;
use tracing::info;

const DEFAULT_TICKS: usize = 200;

fn main() -> Result<()> {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let ticks = match args.next() {
        Some(arg) => arg.parse().context("ticks must be a number")?,
        None => DEFAULT_TICKS,
    };
    let output = args.next().unwrap_or_else(|| "bluenoise.png".into());

    let mut noise = BlueNoise::generate(MaskConfig::default())?;
    let start = Instant::now();
    let initial = noise.energy();

    for tick in 1..=ticks {
        let report = noise.step();
        if tick % 50 == 0 {
            info!(
                tick,
                energy = report.energy,
                committed = report.improvements.len(),
                "progress"
            );
        }
    }

    info!(
        initial,
        last = noise.energy(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "optimization finished"
    );

    noise
        .save_png(&output)
        .with_context(|| format!("failed to write {output}"))?;
    info!(%output, "saved mask");

    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
