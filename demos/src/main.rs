// Copyright 2025 the Gridcast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Walks focus through a program guide and prints what the renderer would see.
//!
//! ```text
//! cargo run -p gridcast_demos -- --moves RRDDDDDDL --seed 3
//! RUST_LOG=gridcast=debug cargo run -p gridcast_demos -- --config guide.toml
//! ```

mod nav;
mod sample;

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use gridcast::{
    Channel, GuideConfig, GuideController, GuideData, GuideFrame, Timestamp, ValidationPolicy,
};
use gridcast_motion::FrameTime;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Headless walkthrough of a Gridcast program guide")]
struct Args {
    /// Number of generated channels.
    #[arg(long, default_value_t = 10)]
    channels: usize,
    /// Number of generated programs per channel.
    #[arg(long, default_value_t = 5)]
    programs: usize,
    /// Seed for the generated schedule.
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Wall-clock time in milliseconds since the Unix epoch. Defaults to now.
    #[arg(long)]
    now: Option<Timestamp>,
    /// Guide configuration (TOML). Missing keys keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Schedule to load instead of generating one (JSON array of channels).
    #[arg(long)]
    schedule: Option<PathBuf>,
    /// Repair malformed schedules instead of rejecting them.
    #[arg(long)]
    clamp: bool,
    /// Viewport height in pixels.
    #[arg(long, default_value_t = 600.0)]
    height: f64,
    /// Viewport width in pixels.
    #[arg(long, default_value_t = 600.0)]
    width: f64,
    /// Key presses: U, D, L, R.
    #[arg(long, default_value = "RRDDDDDDDLUU")]
    moves: String,
    /// Milliseconds between key presses.
    #[arg(long, default_value_t = 150)]
    press_interval: u64,
    /// Milliseconds between printed frames.
    #[arg(long, default_value_t = 50)]
    frame_interval: u64,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let now = match args.now {
        Some(now) => now,
        None => wall_clock()?,
    };
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => GuideConfig::default(),
    };
    let channels = match &args.schedule {
        Some(path) => load_schedule(path)?,
        None => {
            let mut rng = SmallRng::seed_from_u64(args.seed);
            sample::sample_channels(&mut rng, now, args.channels, args.programs)
        }
    };
    let policy = if args.clamp {
        ValidationPolicy::Clamp
    } else {
        ValidationPolicy::Strict
    };
    let data = GuideData::new(channels, policy).context("invalid schedule")?;
    let moves = nav::parse_moves(&args.moves)?;

    let mut guide = GuideController::anchored_at(data, config, now);
    guide.on_layout(args.height, args.width);
    tracing::info!(
        channels = guide.data().len(),
        origin = guide.geometry().origin(),
        stride = guide.geometry().metrics().row_stride(),
        "guide ready"
    );

    let mut cell = (0, 0);
    let mut clock = 0;
    if guide.focus_program(cell.0, cell.1, FrameTime::from_millis(clock)).is_none() {
        tracing::warn!("guide has no programs to focus");
        return Ok(());
    }
    print_frame(clock, cell, &guide.frame(FrameTime::from_millis(clock)));

    for mv in moves {
        let next = nav::step(guide.data(), cell, mv);
        let press_at = clock + args.press_interval;
        // Frames rendered while waiting for the key press.
        while clock + args.frame_interval < press_at {
            clock += args.frame_interval;
            print_frame(clock, cell, &guide.frame(FrameTime::from_millis(clock)));
        }
        clock = press_at;
        if next != cell {
            guide.on_blur();
            guide.focus_program(next.0, next.1, FrameTime::from_millis(clock));
            cell = next;
        }
        tracing::debug!(?mv, channel = cell.0, program = cell.1, "key press");
        print_frame(clock, cell, &guide.frame(FrameTime::from_millis(clock)));
    }

    while guide.is_animating(FrameTime::from_millis(clock)) {
        clock += args.frame_interval.max(1);
        print_frame(clock, cell, &guide.frame(FrameTime::from_millis(clock)));
    }
    Ok(())
}

fn print_frame(clock: u64, (channel, program): (usize, usize), frame: &GuideFrame) {
    let x = frame
        .transform
        .translate_x
        .map_or_else(|| String::from("-"), |x| format!("{x:9.2}"));
    let in_view = frame.rows_in_view().count();
    println!(
        "t={clock:>6}ms focus=({channel:>3},{program:>2}) y={:9.2} x={x:>9} \
         window=[{}, {}] full_rows={in_view}{}",
        frame.transform.translate_y,
        frame.visible.min,
        frame.visible.max,
        if frame.animating { " *" } else { "" },
    );
}

fn wall_clock() -> Result<Timestamp> {
    let since_epoch = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock is before the Unix epoch")?;
    Timestamp::try_from(since_epoch.as_millis()).context("system clock out of range")
}

fn load_config(path: &Path) -> Result<GuideConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = toml::from_str(&content)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

fn load_schedule(path: &Path) -> Result<Vec<Channel>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading schedule {}", path.display()))?;
    let channels = serde_json::from_str(&content)
        .with_context(|| format!("parsing schedule {}", path.display()))?;
    Ok(channels)
}
