// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floorplan Imaging: backend-agnostic drawing IR and backend traits.
//!
//! This crate defines the small immediate-mode drawing vocabulary that the
//! floor-plan renderer speaks, and the traits a drawing surface implements
//! to consume it.
//!
//! # Position in the stack
//!
//! - **Renderer**: `floorplan_render` walks a floor plan and turns walls,
//!   doors, windows, furniture and cameras into paths and paints.
//! - **Imaging IR (this crate)**: paths, paints, stroke styles and an affine
//!   transform stack expressed as POD state + draw operations.
//! - **Backends**: concrete surfaces such as the recording backend in
//!   `floorplan_imaging_ref` or the CPU rasterizer in
//!   `floorplan_imaging_vello_cpu`.
//!
//! # Core concepts
//!
//! - **Resources**: small, opaque handles ([`PathId`], [`PaintId`]) whose
//!   lifetimes are managed via [`ResourceBackend`].
//! - **Imaging operations**: [`StateOp`] (mutate state) and [`DrawOp`]
//!   (produce pixels), combined into [`ImagingOp`] for logs and recordings.
//! - **Transform stack**: [`StateOp::PushTransform`] / [`StateOp::PopTransform`]
//!   give the canvas-style save/translate/rotate/restore scoping; the
//!   [`TransformStack`] helper implements the bookkeeping for backends.
//!
//! # Example
//!
//! ```
//! use floorplan_imaging::*;
//! use peniko::{Brush, Color};
//! # #[derive(Default)]
//! # struct MyBackend { stack: TransformStack, n: u32 }
//! # impl ResourceBackend for MyBackend {
//! #     fn create_path(&mut self, _desc: PathDesc) -> PathId { self.n += 1; PathId(self.n) }
//! #     fn destroy_path(&mut self, _id: PathId) {}
//! #     fn create_paint(&mut self, _desc: PaintDesc) -> PaintId { self.n += 1; PaintId(self.n) }
//! #     fn destroy_paint(&mut self, _id: PaintId) {}
//! # }
//! # impl ImagingBackend for MyBackend {
//! #     fn state(&mut self, op: StateOp) { self.stack.apply(&op); }
//! #     fn draw(&mut self, _op: DrawOp) {}
//! # }
//! let mut backend = MyBackend::default();
//!
//! let paint = backend.create_paint(PaintDesc {
//!     brush: Brush::Solid(Color::WHITE),
//! });
//! let path = backend.create_path(PathDesc {
//!     commands: Box::new([PathCmd::MoveTo { x: 0.0, y: 0.0 }]),
//! });
//!
//! backend.state(StateOp::SetPaint(paint));
//! backend.with_transform(Affine::rotate(0.5), |b| {
//!     b.draw(DrawOp::FillPath(path));
//! });
//! ```

#![no_std]

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;
use kurbo::{BezPath, PathEl};
use peniko::Brush;
pub use peniko::Fill as FillRule;

/// Identifier for a path resource.
///
/// This is a small, opaque handle that is stable for the lifetime of the
/// resource.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PathId(pub u32);

/// Identifier for a paint resource.
///
/// Paints are typically created once per render pass for each palette tone
/// and shared by many paths.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PaintId(pub u32);

/// Affine transform type used by the imaging IR.
pub type Affine = kurbo::Affine;

/// Stroke style used by `StateOp::SetStroke`.
///
/// This is a re-export of [`kurbo::Stroke`], which captures width,
/// joins, caps, dashes, and related stroke parameters.
pub type StrokeStyle = kurbo::Stroke;

/// State operations that mutate the current imaging state.
#[derive(Clone, Debug, PartialEq)]
pub enum StateOp {
    /// Replace the current transform matrix.
    ///
    /// This does not touch the transform stack; a later
    /// [`StateOp::PopTransform`] still restores the matrix saved by the
    /// matching push.
    SetTransform(Affine),
    /// Save the current transform and concatenate the given one onto it.
    ///
    /// The new current transform is `current * local`, so `local` is
    /// expressed in the coordinate system that was active before the push.
    /// Pushes must be well-nested with [`StateOp::PopTransform`].
    PushTransform(Affine),
    /// Restore the transform saved by the most recent push.
    PopTransform,
    /// Set the current paint resource.
    SetPaint(PaintId),
    /// Set the current stroke style.
    SetStroke(StrokeStyle),
    /// Set the current fill rule used for filling paths.
    ///
    /// The default fill rule is [`FillRule::NonZero`].
    SetFillRule(FillRule),
}

/// Draw operations that produce pixels given the current state.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Fill the given path with the current paint.
    FillPath(PathId),
    /// Stroke the given path with the current stroke and paint.
    StrokePath(PathId),
    /// Fill an axis-aligned rectangle with the current paint.
    FillRect {
        /// Minimum X coordinate.
        x0: f32,
        /// Minimum Y coordinate.
        y0: f32,
        /// Maximum X coordinate.
        x1: f32,
        /// Maximum Y coordinate.
        y1: f32,
    },
    /// Stroke an axis-aligned rectangle with the current stroke and paint.
    StrokeRect {
        /// Minimum X coordinate.
        x0: f32,
        /// Minimum Y coordinate.
        y0: f32,
        /// Maximum X coordinate.
        x1: f32,
        /// Maximum Y coordinate.
        y1: f32,
    },
}

impl DrawOp {
    /// Fill `rect` with the current paint.
    pub fn fill_rect(rect: kurbo::Rect) -> Self {
        Self::FillRect {
            x0: f64_to_f32(rect.x0),
            y0: f64_to_f32(rect.y0),
            x1: f64_to_f32(rect.x1),
            y1: f64_to_f32(rect.y1),
        }
    }

    /// Stroke `rect` with the current stroke and paint.
    pub fn stroke_rect(rect: kurbo::Rect) -> Self {
        Self::StrokeRect {
            x0: f64_to_f32(rect.x0),
            y0: f64_to_f32(rect.y0),
            x1: f64_to_f32(rect.x1),
            y1: f64_to_f32(rect.y1),
        }
    }
}

/// Description of a path resource.
#[derive(Clone, Debug, PartialEq)]
pub struct PathDesc {
    /// Command buffer describing the path geometry.
    pub commands: Box<[PathCmd]>,
}

impl PathDesc {
    /// Build a path description from kurbo path elements.
    ///
    /// This is how curved geometry (arcs, circles) enters the IR: build the
    /// shape with kurbo and flatten its elements into commands.
    pub fn from_path_elements(elements: impl IntoIterator<Item = PathEl>) -> Self {
        let commands: Vec<PathCmd> = elements.into_iter().map(PathCmd::from).collect();
        Self {
            commands: commands.into_boxed_slice(),
        }
    }

    /// Build a closed polygon through `points`.
    ///
    /// Returns an empty path when `points` is empty.
    pub fn polygon(points: &[kurbo::Point]) -> Self {
        let mut commands = Vec::with_capacity(points.len() + 1);
        for (i, p) in points.iter().enumerate() {
            let (x, y) = point_to_f32(*p);
            if i == 0 {
                commands.push(PathCmd::MoveTo { x, y });
            } else {
                commands.push(PathCmd::LineTo { x, y });
            }
        }
        if !commands.is_empty() {
            commands.push(PathCmd::Close);
        }
        Self {
            commands: commands.into_boxed_slice(),
        }
    }

    /// Build an open polyline made of a single segment.
    pub fn line(from: kurbo::Point, to: kurbo::Point) -> Self {
        let (x0, y0) = point_to_f32(from);
        let (x1, y1) = point_to_f32(to);
        Self {
            commands: Box::new([
                PathCmd::MoveTo { x: x0, y: y0 },
                PathCmd::LineTo { x: x1, y: y1 },
            ]),
        }
    }

    /// Returns `true` if every coordinate in the path is finite.
    pub fn is_finite(&self) -> bool {
        self.commands.iter().all(PathCmd::is_finite)
    }

    /// Convert to kurbo's path type.
    pub fn to_bez_path(&self) -> BezPath {
        let mut p = BezPath::new();
        for cmd in self.commands.iter() {
            match *cmd {
                PathCmd::MoveTo { x, y } => p.move_to((f64::from(x), f64::from(y))),
                PathCmd::LineTo { x, y } => p.line_to((f64::from(x), f64::from(y))),
                PathCmd::QuadTo { x1, y1, x, y } => p.quad_to(
                    (f64::from(x1), f64::from(y1)),
                    (f64::from(x), f64::from(y)),
                ),
                PathCmd::CurveTo {
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                } => p.curve_to(
                    (f64::from(x1), f64::from(y1)),
                    (f64::from(x2), f64::from(y2)),
                    (f64::from(x), f64::from(y)),
                ),
                PathCmd::Close => p.close_path(),
            }
        }
        p
    }
}

/// Simple path command enumeration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PathCmd {
    /// Move the current point without drawing.
    MoveTo {
        /// X coordinate of the new point.
        x: f32,
        /// Y coordinate of the new point.
        y: f32,
    },
    /// Draw a line from the current point to the given point.
    LineTo {
        /// X coordinate of the line end.
        x: f32,
        /// Y coordinate of the line end.
        y: f32,
    },
    /// Draw a quadratic Bézier curve from the current point to the given
    /// point, using a single control point.
    QuadTo {
        /// X coordinate of the control point.
        x1: f32,
        /// Y coordinate of the control point.
        y1: f32,
        /// X coordinate of the curve end.
        x: f32,
        /// Y coordinate of the curve end.
        y: f32,
    },
    /// Draw a cubic Bézier curve from the current point to the given point,
    /// using two control points.
    CurveTo {
        /// X coordinate of the first control point.
        x1: f32,
        /// Y coordinate of the first control point.
        y1: f32,
        /// X coordinate of the second control point.
        x2: f32,
        /// Y coordinate of the second control point.
        y2: f32,
        /// X coordinate of the curve end.
        x: f32,
        /// Y coordinate of the curve end.
        y: f32,
    },
    /// Close the current subpath.
    Close,
}

impl PathCmd {
    /// Returns `true` if every coordinate of this command is finite.
    pub fn is_finite(&self) -> bool {
        match *self {
            Self::MoveTo { x, y } | Self::LineTo { x, y } => x.is_finite() && y.is_finite(),
            Self::QuadTo { x1, y1, x, y } => [x1, y1, x, y].iter().all(|v| v.is_finite()),
            Self::CurveTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => [x1, y1, x2, y2, x, y].iter().all(|v| v.is_finite()),
            Self::Close => true,
        }
    }
}

impl From<PathEl> for PathCmd {
    fn from(el: PathEl) -> Self {
        match el {
            PathEl::MoveTo(p) => {
                let (x, y) = point_to_f32(p);
                Self::MoveTo { x, y }
            }
            PathEl::LineTo(p) => {
                let (x, y) = point_to_f32(p);
                Self::LineTo { x, y }
            }
            PathEl::QuadTo(c, p) => {
                let (x1, y1) = point_to_f32(c);
                let (x, y) = point_to_f32(p);
                Self::QuadTo { x1, y1, x, y }
            }
            PathEl::CurveTo(c1, c2, p) => {
                let (x1, y1) = point_to_f32(c1);
                let (x2, y2) = point_to_f32(c2);
                let (x, y) = point_to_f32(p);
                Self::CurveTo {
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                }
            }
            PathEl::ClosePath => Self::Close,
        }
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "the IR stores f32 coordinates; surface-space values fit comfortably"
)]
fn f64_to_f32(v: f64) -> f32 {
    v as f32
}

fn point_to_f32(p: kurbo::Point) -> (f32, f32) {
    (f64_to_f32(p.x), f64_to_f32(p.y))
}

/// Description of a paint resource.
#[derive(Clone, Debug)]
pub struct PaintDesc {
    /// Brush used when rendering.
    ///
    /// This is a [`peniko::Brush`], so backends can directly map it onto their
    /// native paint representation. The floor-plan renderer only uses solid
    /// colors, including translucent ones for camera coverage.
    pub brush: Brush,
}

/// Resource lifetime interface.
///
/// Backends implement this to manage their own resource storage. IDs must
/// remain valid and refer to the same logical resource until the matching
/// `destroy_*` call.
pub trait ResourceBackend {
    /// Create a path resource.
    fn create_path(&mut self, desc: PathDesc) -> PathId;
    /// Destroy a previously created path.
    fn destroy_path(&mut self, id: PathId);

    /// Create a paint resource.
    fn create_paint(&mut self, desc: PaintDesc) -> PaintId;
    /// Destroy a previously created paint.
    fn destroy_paint(&mut self, id: PaintId);
}

/// Unified imaging operation used by op logs.
#[derive(Clone, Debug, PartialEq)]
pub enum ImagingOp {
    /// State-changing operation.
    State(StateOp),
    /// Drawing operation.
    Draw(DrawOp),
}

/// Minimal imaging backend trait: the drawing surface.
pub trait ImagingBackend: ResourceBackend {
    /// Apply a state operation.
    fn state(&mut self, op: StateOp);

    /// Apply a draw operation.
    fn draw(&mut self, op: DrawOp);

    /// Save the current transform and concatenate `local` onto it.
    ///
    /// This is equivalent to `self.state(StateOp::PushTransform(local))`.
    #[inline]
    fn transform_push(&mut self, local: Affine) {
        self.state(StateOp::PushTransform(local));
    }

    /// Restore the transform saved by the most recent push.
    ///
    /// This is equivalent to `self.state(StateOp::PopTransform)`.
    #[inline]
    fn transform_pop(&mut self) {
        self.state(StateOp::PopTransform);
    }
}

/// Convenience helpers for `ImagingBackend` implementations and callers.
///
/// This is separate from [`ImagingBackend`] so that methods can accept closures and return values
/// without complicating trait object usage (`&mut dyn ImagingBackend`).
pub trait ImagingBackendExt: ImagingBackend {
    /// Run `f` with `local` concatenated onto the current transform,
    /// restoring the previous transform afterwards.
    ///
    /// Note: if `f` panics, the transform will not be popped.
    #[inline]
    fn with_transform<R>(&mut self, local: Affine, f: impl FnOnce(&mut Self) -> R) -> R {
        self.transform_push(local);
        let out = f(self);
        self.transform_pop();
        out
    }

    /// Create a path from `desc` and fill it with `paint`.
    #[inline]
    fn fill_with(&mut self, paint: PaintId, desc: PathDesc) -> PathId {
        let path = self.create_path(desc);
        self.state(StateOp::SetPaint(paint));
        self.draw(DrawOp::FillPath(path));
        path
    }

    /// Create a path from `desc` and stroke it with `paint` and `style`.
    #[inline]
    fn stroke_with(&mut self, paint: PaintId, style: StrokeStyle, desc: PathDesc) -> PathId {
        let path = self.create_path(desc);
        self.state(StateOp::SetPaint(paint));
        self.state(StateOp::SetStroke(style));
        self.draw(DrawOp::StrokePath(path));
        path
    }
}

impl<B: ImagingBackend + ?Sized> ImagingBackendExt for B {}

/// Transform bookkeeping shared by backends.
///
/// Tracks the current transform plus the transforms saved by
/// [`StateOp::PushTransform`].
#[derive(Clone, Debug, Default)]
pub struct TransformStack {
    current: Affine,
    saved: Vec<Affine>,
}

impl TransformStack {
    /// Returns the current transform.
    #[inline]
    pub fn current(&self) -> Affine {
        self.current
    }

    /// Returns the number of saved transforms.
    #[inline]
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Update the stack for a state op.
    ///
    /// Returns `true` if `op` was a transform op and changed the stack or the
    /// current transform. An unmatched pop leaves the stack unchanged and
    /// returns `false`.
    pub fn apply(&mut self, op: &StateOp) -> bool {
        match op {
            StateOp::SetTransform(xf) => {
                self.current = *xf;
                true
            }
            StateOp::PushTransform(local) => {
                self.saved.push(self.current);
                self.current = self.current * *local;
                true
            }
            StateOp::PopTransform => match self.saved.pop() {
                Some(prev) => {
                    self.current = prev;
                    true
                }
                None => false,
            },
            _ => false,
        }
    }
}
