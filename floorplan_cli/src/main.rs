// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `floorplan`: validate floor plans and render them to PNG.
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `info`);
//! `RUST_LOG=floorplan_render=debug` shows every skipped entity.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "floorplan")]
#[command(about = "Validate floor plans and render them to PNG.")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render a plan to a PNG file.
    Render {
        /// Plan JSON file.
        input: PathBuf,
        /// Output PNG file.
        #[arg(short, long)]
        output: PathBuf,
        /// Surface width in pixels. Defaults to the plan width.
        #[arg(long)]
        width: Option<u32>,
        /// Surface height in pixels. Defaults to the plan height.
        #[arg(long)]
        height: Option<u32>,
        /// Style JSON file overriding the default palette.
        #[arg(long)]
        style: Option<PathBuf>,
        /// Force every camera on or off before rendering.
        #[arg(long, value_enum)]
        cameras: Option<Cameras>,
    },
    /// Check plan dimensions and list entities the renderer would skip.
    Validate {
        /// Plan JSON file.
        input: PathBuf,
    },
    /// Print the imaging ops a render would emit.
    Ops {
        /// Plan JSON file.
        input: PathBuf,
        /// Surface width in pixels. Defaults to the plan width.
        #[arg(long)]
        width: Option<u32>,
        /// Surface height in pixels. Defaults to the plan height.
        #[arg(long)]
        height: Option<u32>,
    },
}

/// Camera visibility override.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Cameras {
    On,
    Off,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render {
            input,
            output,
            width,
            height,
            style,
            cameras,
        } => commands::render_png(
            &input,
            &output,
            (width, height),
            style.as_deref(),
            cameras.map(|c| c == Cameras::On),
        ),
        Command::Validate { input } => commands::validate(&input),
        Command::Ops {
            input,
            width,
            height,
        } => commands::dump_ops(&input, (width, height)),
    }
}
