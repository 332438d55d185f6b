// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-entity drawers.
//!
//! Each drawer checks its entity, then emits imaging ops. A drawer that
//! returns `Err` has emitted nothing.

use floorplan_imaging::{
    Affine, DrawOp, ImagingBackend, ImagingBackendExt, PaintDesc, PaintId, PathDesc, StateOp,
    StrokeStyle,
};
use floorplan_model::{Camera, Door, Furniture, IssueKind, Wall, Window};
use floorplan_view2d::PlanViewport;
use kurbo::{Arc, BezPath, Cap, Circle, Point, Rect, Shape, Size, Vec2};
use peniko::{Brush, Color};

use crate::geometry::{FurnitureTone, camera_sector, furniture_parts, wall_quad};
use crate::style::RenderStyle;

/// Flattening tolerance for arcs and circles, in surface pixels.
const TOLERANCE: f64 = 0.1;

/// A door swing never sweeps more than one full turn either way.
const MAX_SWING_DEG: f64 = 360.0;

/// Glass is inset by this many plan units from the frame width.
const GLASS_INSET: f64 = 2.0;

/// Paint resources for one render pass.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Palette {
    background: PaintId,
    border: PaintId,
    wall: PaintId,
    window_frame: PaintId,
    window_glass: PaintId,
    door: PaintId,
    door_swing: PaintId,
    furniture: PaintId,
    bed: PaintId,
    pillow: PaintId,
    table: PaintId,
    chair: PaintId,
    sofa: PaintId,
    sofa_armrest: PaintId,
    furniture_outline: PaintId,
    cone_fill: PaintId,
    cone_outline: PaintId,
    camera_active: PaintId,
    camera_inactive: PaintId,
    camera_lens: PaintId,
    indicator_on: PaintId,
    indicator_off: PaintId,
}

impl Palette {
    pub(crate) fn create<B: ImagingBackend + ?Sized>(backend: &mut B, style: &RenderStyle) -> Self {
        let mut paint = |color: Color| {
            backend.create_paint(PaintDesc {
                brush: Brush::Solid(color),
            })
        };
        Self {
            background: paint(style.background),
            border: paint(style.border),
            wall: paint(style.wall),
            window_frame: paint(style.window_frame),
            window_glass: paint(style.window_glass),
            door: paint(style.door),
            door_swing: paint(style.door_swing),
            furniture: paint(style.furniture),
            bed: paint(style.bed),
            pillow: paint(style.pillow),
            table: paint(style.table),
            chair: paint(style.chair),
            sofa: paint(style.sofa),
            sofa_armrest: paint(style.sofa_armrest),
            furniture_outline: paint(style.furniture_outline),
            cone_fill: paint(style.cone_fill),
            cone_outline: paint(style.cone_outline),
            camera_active: paint(style.camera_active),
            camera_inactive: paint(style.camera_inactive),
            camera_lens: paint(style.camera_lens),
            indicator_on: paint(style.indicator_on),
            indicator_off: paint(style.indicator_off),
        }
    }

    fn furniture_tone(&self, tone: FurnitureTone) -> PaintId {
        match tone {
            FurnitureTone::Default => self.furniture,
            FurnitureTone::Bed => self.bed,
            FurnitureTone::Pillow => self.pillow,
            FurnitureTone::Table => self.table,
            FurnitureTone::Chair => self.chair,
            FurnitureTone::Sofa => self.sofa,
            FurnitureTone::Armrest => self.sofa_armrest,
        }
    }
}

/// Shared inputs of every drawer.
#[derive(Debug)]
pub(crate) struct DrawContext<'a> {
    pub(crate) viewport: &'a PlanViewport,
    pub(crate) style: &'a RenderStyle,
    pub(crate) palette: Palette,
}

fn butt_stroke(width: f64) -> StrokeStyle {
    StrokeStyle::new(width).with_caps(Cap::Butt)
}

fn fill_rect<B: ImagingBackend + ?Sized>(backend: &mut B, paint: PaintId, rect: Rect) {
    backend.state(StateOp::SetPaint(paint));
    backend.draw(DrawOp::fill_rect(rect));
}

fn fill_circle<B: ImagingBackend + ?Sized>(backend: &mut B, paint: PaintId, circle: Circle) {
    backend.fill_with(
        paint,
        PathDesc::from_path_elements(circle.path_elements(TOLERANCE)),
    );
}

/// Clears the surface and outlines its edge.
pub(crate) fn draw_frame<B: ImagingBackend + ?Sized>(backend: &mut B, cx: &DrawContext<'_>) {
    let rect = cx.viewport.surface_rect();
    fill_rect(backend, cx.palette.background, rect);

    backend.state(StateOp::SetPaint(cx.palette.border));
    backend.state(StateOp::SetStroke(StrokeStyle::new(cx.style.border_width)));
    backend.draw(DrawOp::stroke_rect(rect));
}

/// Fills a wall as a quad around its scaled center line.
///
/// The thickness is scaled along x only, so walls that are not
/// horizontal look thicker or thinner than intended when the two scale
/// factors differ.
pub(crate) fn draw_wall<B: ImagingBackend + ?Sized>(
    backend: &mut B,
    cx: &DrawContext<'_>,
    wall: &Wall,
) -> Result<(), IssueKind> {
    let start = cx.viewport.plan_to_surface_point(wall.start.into());
    let end = cx.viewport.plan_to_surface_point(wall.end.into());
    let half = cx.viewport.scale_length_x(wall.thickness) / 2.0;
    if !(start.is_finite() && end.is_finite() && half.is_finite()) {
        return Err(IssueKind::NonFinite);
    }
    let quad = wall_quad(start, end, half).ok_or(IssueKind::ZeroLength)?;
    backend.fill_with(cx.palette.wall, PathDesc::polygon(&quad));
    Ok(())
}

/// Strokes a window twice: the frame, then narrower glass on top.
pub(crate) fn draw_window<B: ImagingBackend + ?Sized>(
    backend: &mut B,
    cx: &DrawContext<'_>,
    window: &Window,
) -> Result<(), IssueKind> {
    let start = cx.viewport.plan_to_surface_point(window.start.into());
    let end = cx.viewport.plan_to_surface_point(window.end.into());
    let frame_width = cx.viewport.scale_length_x(window.width);
    let glass_width = cx
        .viewport
        .scale_length_x(window.width - GLASS_INSET)
        .max(1.0);
    if !(start.is_finite() && end.is_finite() && frame_width.is_finite() && glass_width.is_finite())
    {
        return Err(IssueKind::NonFinite);
    }
    if start == end {
        return Err(IssueKind::ZeroLength);
    }

    let segment = PathDesc::line(start, end);
    backend.stroke_with(
        cx.palette.window_frame,
        butt_stroke(frame_width),
        segment.clone(),
    );
    backend.stroke_with(cx.palette.window_glass, butt_stroke(glass_width), segment);
    Ok(())
}

/// Strokes a door frame and, when open, its swing arc.
///
/// The arc pivots on the scaled `start`, has the frame's length as radius
/// and sweeps `opening_angle` degrees from the frame direction, clamped to
/// one full turn.
pub(crate) fn draw_door<B: ImagingBackend + ?Sized>(
    backend: &mut B,
    cx: &DrawContext<'_>,
    door: &Door,
) -> Result<(), IssueKind> {
    let start = cx.viewport.plan_to_surface_point(door.start.into());
    let end = cx.viewport.plan_to_surface_point(door.end.into());
    let swing = door.swing();
    if !(start.is_finite() && end.is_finite() && swing.is_none_or(f64::is_finite)) {
        return Err(IssueKind::NonFinite);
    }

    backend.stroke_with(
        cx.palette.door,
        butt_stroke(cx.style.door_width),
        PathDesc::line(start, end),
    );

    let d = end - start;
    let radius = d.hypot();
    if let Some(angle) = swing
        && radius > 0.0
    {
        let arc = Arc::new(
            start,
            Vec2::new(radius, radius),
            d.atan2(),
            angle.clamp(-MAX_SWING_DEG, MAX_SWING_DEG).to_radians(),
            0.0,
        );
        backend.stroke_with(
            cx.palette.door_swing,
            butt_stroke(cx.style.door_swing_width),
            PathDesc::from_path_elements(arc.path_elements(TOLERANCE)),
        );
    }
    Ok(())
}

/// Fills a piece of furniture in its own rotated frame, then outlines it.
///
/// Unrotated items go through the same transform path as `rotation = 0`,
/// so both produce the same op stream.
pub(crate) fn draw_furniture<B: ImagingBackend + ?Sized>(
    backend: &mut B,
    cx: &DrawContext<'_>,
    item: &Furniture,
) -> Result<(), IssueKind> {
    let center = cx.viewport.plan_to_surface_point(item.position.into());
    let size = cx.viewport.scale_size(Size::new(item.width, item.height));
    let rotation = item.rotation.unwrap_or(0.0);
    if !(center.is_finite() && size.is_finite() && rotation.is_finite()) {
        return Err(IssueKind::NonFinite);
    }
    if size.width <= 0.0 || size.height <= 0.0 {
        return Err(IssueKind::NonPositiveSize);
    }

    let local = Affine::translate(center.to_vec2()) * Affine::rotate(rotation.to_radians());
    let parts = furniture_parts(&item.kind, size);
    backend.with_transform(local, |b| {
        for (rect, tone) in &parts {
            fill_rect(b, cx.palette.furniture_tone(*tone), *rect);
        }
        let outline = parts[0].0;
        b.state(StateOp::SetPaint(cx.palette.furniture_outline));
        b.state(StateOp::SetStroke(StrokeStyle::new(
            cx.style.furniture_outline_width,
        )));
        b.draw(DrawOp::stroke_rect(outline));
    });
    Ok(())
}

/// Draws a camera's coverage cone (when on) and its icon.
///
/// The cone is a circular sector centered on the camera. A zero range or a
/// non-positive field of view leaves only the icon.
pub(crate) fn draw_camera<B: ImagingBackend + ?Sized>(
    backend: &mut B,
    cx: &DrawContext<'_>,
    camera: &Camera,
) -> Result<(), IssueKind> {
    let center = cx.viewport.plan_to_surface_point(camera.position.into());
    let radius = cx.viewport.scale_length_x(camera.range);
    if !(center.is_finite()
        && radius.is_finite()
        && camera.direction.is_finite()
        && camera.field_of_view.is_finite())
    {
        return Err(IssueKind::NonFinite);
    }
    if camera.range < 0.0 {
        return Err(IssueKind::NegativeRange);
    }

    let active = camera.active();
    if active && radius > 0.0 && camera.field_of_view > 0.0 {
        let sector = sector_path(center, radius, camera.direction, camera.field_of_view);
        backend.fill_with(cx.palette.cone_fill, sector.clone());
        backend.stroke_with(
            cx.palette.cone_outline,
            StrokeStyle::new(cx.style.cone_outline_width),
            sector,
        );
    }

    let (body, indicator) = if active {
        (cx.palette.camera_active, cx.palette.indicator_on)
    } else {
        (cx.palette.camera_inactive, cx.palette.indicator_off)
    };
    let s = cx.style.camera_icon_size;
    let local = Affine::translate(center.to_vec2()) * Affine::rotate(camera.direction.to_radians());
    backend.with_transform(local, |b| {
        fill_rect(
            b,
            body,
            Rect::from_center_size(Point::ORIGIN, Size::new(s, s)),
        );
        // Lens on the facing edge, indicator toward the back.
        fill_circle(b, cx.palette.camera_lens, Circle::new((s / 2.0, 0.0), s / 4.0));
        fill_circle(b, indicator, Circle::new((-s / 4.0, -s / 4.0), s / 8.0));
    });
    Ok(())
}

/// Closed circular sector of the cone, as a path.
fn sector_path(center: Point, radius: f64, direction: f64, field_of_view: f64) -> PathDesc {
    let cone = camera_sector(direction, field_of_view);
    let start = cone.start_deg.to_radians();
    let arc = Arc::new(
        center,
        Vec2::new(radius, radius),
        start,
        cone.sweep_deg.to_radians(),
        0.0,
    );
    let mut path = BezPath::new();
    path.move_to(center);
    path.line_to(center + Vec2::from_angle(start) * radius);
    path.extend(arc.append_iter(TOLERANCE));
    path.close_path();
    PathDesc::from_path_elements(path.iter())
}
