// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use floorplan_imaging::{Affine, FillRule, ImagingBackend, StateOp};
use floorplan_model::{EntityKind, FloorPlanData, IssueKind};
use floorplan_view2d::PlanViewport;
use kurbo::Size;

use crate::draw::{
    DrawContext, Palette, draw_camera, draw_door, draw_frame, draw_furniture, draw_wall,
    draw_window,
};
use crate::style::RenderStyle;

/// Paints floor plans onto an imaging backend.
///
/// A `Renderer` only carries its [`RenderStyle`]; it keeps no state between
/// calls, so one renderer can paint any number of plans and surfaces.
#[derive(Clone, Debug, Default)]
pub struct Renderer {
    style: RenderStyle,
}

impl Renderer {
    /// Creates a renderer with the default palette.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a renderer with a custom palette.
    #[must_use]
    pub fn with_style(style: RenderStyle) -> Self {
        Self { style }
    }

    /// The palette in use.
    #[must_use]
    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// Paints `plan` onto a surface of `width` x `height` pixels.
    ///
    /// The surface is cleared to the background first, then the border,
    /// walls, windows, doors, furniture and cameras are drawn in that order,
    /// so later layers cover earlier ones. Malformed entities are skipped
    /// one by one and never stop the pass.
    ///
    /// Plan dimensions are not validated. A zero or non-finite extent makes
    /// every entity non-finite after scaling, so only the background and
    /// border are drawn.
    pub fn render<B: ImagingBackend + ?Sized>(
        &self,
        backend: &mut B,
        plan: &FloorPlanData,
        width: u32,
        height: u32,
    ) {
        let _span = tracing::debug_span!(
            "render",
            width,
            height,
            walls = plan.walls.len(),
            windows = plan.windows().len(),
            doors = plan.doors().len(),
            furniture = plan.furniture().len(),
            cameras = plan.cameras().len(),
        )
        .entered();

        let viewport = PlanViewport::new(
            plan.dimensions.into(),
            Size::new(f64::from(width), f64::from(height)),
        );
        if !viewport.is_usable() {
            tracing::debug!(
                plan_width = plan.dimensions.width,
                plan_height = plan.dimensions.height,
                "degenerate plan extent; entities will be skipped"
            );
        }

        backend.state(StateOp::SetTransform(Affine::IDENTITY));
        backend.state(StateOp::SetFillRule(FillRule::NonZero));
        let cx = DrawContext {
            viewport: &viewport,
            style: &self.style,
            palette: Palette::create(backend, &self.style),
        };

        draw_frame(backend, &cx);
        draw_each(EntityKind::Wall, &plan.walls, |w| draw_wall(backend, &cx, w));
        draw_each(EntityKind::Window, plan.windows(), |w| {
            draw_window(backend, &cx, w)
        });
        draw_each(EntityKind::Door, plan.doors(), |d| draw_door(backend, &cx, d));
        draw_each(EntityKind::Furniture, plan.furniture(), |f| {
            draw_furniture(backend, &cx, f)
        });
        draw_each(EntityKind::Camera, plan.cameras(), |c| {
            draw_camera(backend, &cx, c)
        });
    }
}

/// Paints `plan` with the default palette.
///
/// This is `Renderer::default().render(...)`.
pub fn render<B: ImagingBackend + ?Sized>(
    backend: &mut B,
    plan: &FloorPlanData,
    width: u32,
    height: u32,
) {
    Renderer::default().render(backend, plan, width, height);
}

fn draw_each<T>(
    kind: EntityKind,
    items: &[T],
    mut draw: impl FnMut(&T) -> Result<(), IssueKind>,
) {
    for (index, item) in items.iter().enumerate() {
        if let Err(reason) = draw(item) {
            tracing::debug!(entity = %kind, index, %reason, "skipping malformed entity");
        }
    }
}
