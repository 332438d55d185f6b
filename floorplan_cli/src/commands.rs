// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use floorplan_imaging_ref::RefBackend;
use floorplan_imaging_vello_cpu::CpuSurface;
use floorplan_model::FloorPlanData;
use floorplan_render::{RenderStyle, Renderer};
use png::{BitDepth, ColorType, Encoder};

fn load_plan(path: &Path) -> Result<FloorPlanData> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("read plan: {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse plan: {}", path.display()))
}

fn load_style(path: &Path) -> Result<RenderStyle> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("read style: {}", path.display()))?;
    RenderStyle::from_json(&text).with_context(|| format!("parse style: {}", path.display()))
}

/// Picks the surface size, falling back to the plan extent per axis.
pub(crate) fn surface_size(
    plan: &FloorPlanData,
    requested: (Option<u32>, Option<u32>),
) -> Result<(u32, u32)> {
    plan.validate().context("plan cannot be rendered")?;
    let width = match requested.0 {
        Some(w) => w,
        None => extent_to_px(plan.dimensions.width)?,
    };
    let height = match requested.1 {
        Some(h) => h,
        None => extent_to_px(plan.dimensions.height)?,
    };
    Ok((width, height))
}

/// Rounds a validated plan extent up to whole pixels.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the value is checked to lie in 0..=u32::MAX first"
)]
fn extent_to_px(v: f64) -> Result<u32> {
    let v = v.ceil();
    if !(0.0..=f64::from(u32::MAX)).contains(&v) {
        bail!("plan extent {v} does not fit a surface");
    }
    Ok(v as u32)
}

pub(crate) fn render_png(
    input: &Path,
    output: &Path,
    requested: (Option<u32>, Option<u32>),
    style: Option<&Path>,
    cameras: Option<bool>,
) -> Result<()> {
    let mut plan = load_plan(input)?;
    if let Some(active) = cameras {
        plan = plan.with_cameras_active(active);
    }
    let renderer = match style {
        Some(path) => Renderer::with_style(load_style(path)?),
        None => Renderer::default(),
    };
    let (width, height) = surface_size(&plan, requested)?;

    let skipped = plan.entity_issues().len();
    if skipped > 0 {
        tracing::warn!(skipped, "some entities are malformed and will not be drawn");
    }

    let mut surface = CpuSurface::new(width, height).context("create surface")?;
    {
        let mut backend = surface.backend();
        renderer.render(&mut backend, &plan, width, height);
    }
    let rgba = surface.to_rgba8();

    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir: {}", parent.display()))?;
    }
    let file =
        File::create(output).with_context(|| format!("create output: {}", output.display()))?;
    write_png(BufWriter::new(file), width, height, &rgba)
        .with_context(|| format!("write png: {}", output.display()))?;

    tracing::info!(output = %output.display(), width, height, "rendered floor plan");
    Ok(())
}

fn write_png<W: Write>(writer: W, width: u32, height: u32, rgba: &[u8]) -> Result<()> {
    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(rgba)?;
    writer.finish()?;
    Ok(())
}

pub(crate) fn validate(input: &Path) -> Result<()> {
    let plan = load_plan(input)?;
    let issues = plan.entity_issues();
    for issue in &issues {
        println!("warning: {issue}");
    }
    plan.validate()
        .with_context(|| format!("invalid plan: {}", input.display()))?;
    println!(
        "ok: {} walls, {} doors, {} windows, {} furniture, {} cameras, {} rooms ({} issues)",
        plan.walls.len(),
        plan.doors().len(),
        plan.windows().len(),
        plan.furniture().len(),
        plan.cameras().len(),
        plan.rooms().len(),
        issues.len(),
    );
    Ok(())
}

pub(crate) fn dump_ops(input: &Path, requested: (Option<u32>, Option<u32>)) -> Result<()> {
    let plan = load_plan(input)?;
    let (width, height) = surface_size(&plan, requested)?;
    let mut backend = RefBackend::default();
    floorplan_render::render(&mut backend, &plan, width, height);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for op in backend.ops() {
        writeln!(out, "{op:?}")?;
    }
    Ok(())
}
