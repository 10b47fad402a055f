//! Headless lash simulation harness.
//!
//! Runs a [`Lash`] at a fixed frame rate and writes one JSON line per frame
//! to standard output.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use glam::Vec3;
use lash::{init_logging, Lash, LashConfig, LogDebugSink};
use log::info;
use serde::Serialize;

/// Simulates a lash and prints its points every frame
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON lash configuration; defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Total simulated time in seconds
    #[arg(long, default_value_t = 3.0)]
    seconds: f32,

    /// Frames per second driving `advance`
    #[arg(long, default_value_t = 90.0)]
    fps: f32,

    /// Seconds the lash stays extended before retracting
    #[arg(long, default_value_t = 1.5)]
    extend_for: f32,

    /// Anchor speed along +X in units per second
    #[arg(long, default_value_t = 0.0)]
    sweep_speed: f32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct FrameRecord<'a> {
    frame: u32,
    time: f32,
    extended: bool,
    segments: usize,
    points: &'a [Vec3],
}

fn load_config(path: Option<&PathBuf>) -> Result<LashConfig> {
    match path {
        Some(path) => LashConfig::load(path)
            .with_context(|| format!("loading lash config from {}", path.display())),
        None => Ok(LashConfig::default()),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    ensure!(args.fps > 0.0, "--fps must be positive, got {}", args.fps);
    ensure!(args.seconds >= 0.0, "--seconds must not be negative");

    let config = load_config(args.config.as_ref())?;
    let mut lash = Lash::new(config, Vec3::ZERO)
        .context("building lash")?
        .with_debug_sink(LogDebugSink::default());

    let delta_time = args.fps.recip();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut frame = 0_u32;
    let mut time = 0.0_f32;
    let mut peak_segments = 0;

    while time < args.seconds {
        time += delta_time;
        frame += 1;
        let anchor = Vec3::X * args.sweep_speed * time;
        let extended = time <= args.extend_for;
        lash.advance(delta_time, anchor, extended);
        peak_segments = peak_segments.max(lash.segment_count());

        let record = FrameRecord {
            frame,
            time,
            extended,
            segments: lash.segment_count(),
            points: lash.points(),
        };
        serde_json::to_writer(&mut out, &record).context("encoding frame")?;
        writeln!(out).context("writing frame")?;
    }
    out.flush().context("flushing output")?;

    info!(
        "simulated {frame} frames: peak {peak_segments} segments, {} at the end",
        lash.segment_count()
    );
    Ok(())
}
