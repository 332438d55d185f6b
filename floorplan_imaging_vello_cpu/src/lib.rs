// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vello CPU–backed implementation of the imaging backend.
//!
//! This crate implements [`ImagingBackend`] on top of
//! the sparse-strips [`vello_cpu::RenderContext`], so that floor plans can be
//! rasterized to RGBA pixels without a GPU.
//!
//! [`CpuSurface`] owns a render context of a fixed pixel size and hands out
//! short-lived [`VelloCpuImagingBackend`]s that draw into it:
//!
//! ```no_run
//! use floorplan_imaging_vello_cpu::CpuSurface;
//!
//! let mut surface = CpuSurface::new(800, 600)?;
//! {
//!     let mut backend = surface.backend();
//!     // ... issue imaging ops ...
//! }
//! let rgba: Vec<u8> = surface.to_rgba8();
//! assert_eq!(rgba.len(), 800 * 600 * 4);
//! # Ok::<(), floorplan_imaging_vello_cpu::SurfaceError>(())
//! ```

#![deny(unsafe_code)]
#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use floorplan_imaging::{
    Affine, DrawOp, FillRule, ImagingBackend, PaintDesc, PaintId, PathDesc, PathId,
    ResourceBackend, StateOp, StrokeStyle, TransformStack,
};
use kurbo::{Cap, Join};
use peniko::Brush;
use vello_cpu::kurbo::{
    Affine as CpuAffine, BezPath, Cap as CpuCap, Join as CpuJoin, Rect, Stroke,
};
use vello_cpu::{Pixmap, RenderContext, RenderMode, RenderSettings};

/// Failure to acquire a drawing surface.
///
/// This is fatal for the render call that needed the surface; there is
/// nothing to draw an error state into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceError {
    /// One of the requested dimensions is zero.
    #[error("surface must have a non-zero size, got {width}x{height}")]
    Empty {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },
    /// One of the requested dimensions exceeds what the rasterizer supports.
    #[error("surface {width}x{height} exceeds the maximum of {max}x{max}")]
    TooLarge {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
        /// Largest supported size along either axis.
        max: u16,
    },
}

/// An owned CPU render target of a fixed pixel size.
pub struct CpuSurface {
    ctx: RenderContext,
    width: u16,
    height: u16,
}

impl fmt::Debug for CpuSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CpuSurface")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl CpuSurface {
    /// Create a transparent surface of `width` x `height` pixels.
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        if width == 0 || height == 0 {
            return Err(SurfaceError::Empty { width, height });
        }
        let (Ok(w), Ok(h)) = (u16::try_from(width), u16::try_from(height)) else {
            return Err(SurfaceError::TooLarge {
                width,
                height,
                max: u16::MAX,
            });
        };
        let settings = RenderSettings {
            // Force u8 pipeline output even if `f32_pipeline` is enabled elsewhere in the
            // workspace, so repeated renders produce identical bytes.
            render_mode: RenderMode::OptimizeSpeed,
            ..RenderSettings::default()
        };
        Ok(Self {
            ctx: RenderContext::new_with(w, h, settings),
            width: w,
            height: h,
        })
    }

    /// Surface width in pixels.
    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    /// Surface height in pixels.
    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    /// Borrow an imaging backend that draws into this surface.
    pub fn backend(&mut self) -> VelloCpuImagingBackend<'_> {
        VelloCpuImagingBackend::new(&mut self.ctx)
    }

    /// Rasterize everything drawn so far and return straight-alpha RGBA8
    /// pixels in row-major order.
    pub fn to_rgba8(&mut self) -> Vec<u8> {
        let mut pixmap = Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);

        let unpremul = pixmap.take_unpremultiplied();
        let mut bytes = Vec::with_capacity(unpremul.len() * 4);
        for p in unpremul {
            bytes.extend_from_slice(&[p.r, p.g, p.b, p.a]);
        }
        bytes
    }
}

/// CPU-backed implementation of the imaging backend using `vello_cpu`.
pub struct VelloCpuImagingBackend<'ctx> {
    /// Underlying Vello CPU render context to draw into.
    pub ctx: &'ctx mut RenderContext,
    paths: Vec<Option<BezPath>>,
    paints: Vec<Option<PaintDesc>>,

    transforms: TransformStack,
    current_paint: Option<PaintId>,
    current_fill_rule: FillRule,
}

impl fmt::Debug for VelloCpuImagingBackend<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("VelloCpuImagingBackend { .. }")
    }
}

impl<'ctx> VelloCpuImagingBackend<'ctx> {
    /// Create a new backend that renders into the given CPU render context.
    pub fn new(ctx: &'ctx mut RenderContext) -> Self {
        ctx.set_transform(CpuAffine::IDENTITY);
        Self {
            ctx,
            paths: Vec::new(),
            paints: Vec::new(),
            transforms: TransformStack::default(),
            current_paint: None,
            current_fill_rule: FillRule::NonZero,
        }
    }

    fn path_to_bez(&self, id: PathId) -> Option<&BezPath> {
        self.paths.get(id.0 as usize)?.as_ref()
    }

    fn affine_to_cpu(xf: Affine) -> CpuAffine {
        CpuAffine::new(xf.as_coeffs())
    }

    fn stroke_to_cpu(style: &StrokeStyle) -> Stroke {
        let mut stroke = Stroke::new(style.width);
        stroke.miter_limit = style.miter_limit;
        stroke.join = match style.join {
            Join::Bevel => CpuJoin::Bevel,
            Join::Miter => CpuJoin::Miter,
            Join::Round => CpuJoin::Round,
        };
        stroke.start_cap = match style.start_cap {
            Cap::Butt => CpuCap::Butt,
            Cap::Round => CpuCap::Round,
            Cap::Square => CpuCap::Square,
        };
        stroke.end_cap = match style.end_cap {
            Cap::Butt => CpuCap::Butt,
            Cap::Round => CpuCap::Round,
            Cap::Square => CpuCap::Square,
        };
        stroke
    }

    fn apply_current_paint(&mut self) {
        let Some(id) = self.current_paint else {
            return;
        };
        let idx = id.0 as usize;
        if let Some(Some(PaintDesc { brush })) = self.paints.get(idx) {
            match brush.clone() {
                Brush::Solid(color) => {
                    self.ctx.set_paint(color);
                }
                Brush::Gradient(gradient) => {
                    self.ctx.set_paint(gradient);
                }
                Brush::Image(_) => {
                    // Image paints never appear in floor plans; keep the previous paint.
                }
            }
        }
    }
}

impl ResourceBackend for VelloCpuImagingBackend<'_> {
    fn create_path(&mut self, desc: PathDesc) -> PathId {
        let p = desc.to_bez_path();
        let id = u32::try_from(self.paths.len())
            .expect("VelloCpuImagingBackend: too many paths for u32 PathId");
        self.paths.push(Some(p));
        PathId(id)
    }

    fn destroy_path(&mut self, id: PathId) {
        let idx = id.0 as usize;
        if let Some(slot) = self.paths.get_mut(idx) {
            *slot = None;
        }
    }

    fn create_paint(&mut self, desc: PaintDesc) -> PaintId {
        let id = u32::try_from(self.paints.len())
            .expect("VelloCpuImagingBackend: too many paints for u32 PaintId");
        self.paints.push(Some(desc));
        PaintId(id)
    }

    fn destroy_paint(&mut self, id: PaintId) {
        let idx = id.0 as usize;
        if let Some(slot) = self.paints.get_mut(idx) {
            *slot = None;
        }
    }
}

impl ImagingBackend for VelloCpuImagingBackend<'_> {
    fn state(&mut self, op: StateOp) {
        match op {
            StateOp::SetTransform(_) | StateOp::PushTransform(_) | StateOp::PopTransform => {
                let changed = self.transforms.apply(&op);
                debug_assert!(changed, "PopTransform with empty stack");
                self.ctx
                    .set_transform(Self::affine_to_cpu(self.transforms.current()));
            }
            StateOp::SetPaint(id) => {
                self.current_paint = Some(id);
                self.apply_current_paint();
            }
            StateOp::SetStroke(style) => {
                self.ctx.set_stroke(Self::stroke_to_cpu(&style));
            }
            StateOp::SetFillRule(rule) => {
                self.current_fill_rule = rule;
                self.ctx.set_fill_rule(rule);
            }
        }
    }

    fn draw(&mut self, op: DrawOp) {
        match op {
            DrawOp::FillPath(id) => {
                if let Some(path) = self.path_to_bez(id).cloned() {
                    self.ctx.fill_path(&path);
                }
            }
            DrawOp::StrokePath(id) => {
                if let Some(path) = self.path_to_bez(id).cloned() {
                    self.ctx.stroke_path(&path);
                }
            }
            DrawOp::FillRect { x0, y0, x1, y1 } => {
                let rect = Rect::new(x0 as f64, y0 as f64, x1 as f64, y1 as f64);
                self.ctx.fill_rect(&rect);
            }
            DrawOp::StrokeRect { x0, y0, x1, y1 } => {
                let rect = Rect::new(x0 as f64, y0 as f64, x1 as f64, y1 as f64);
                self.ctx.stroke_rect(&rect);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use floorplan_imaging::{ImagingBackendExt, PathDesc};
    use kurbo::Point;
    use peniko::Color;

    fn pixel(rgba: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * width + x) * 4) as usize;
        [rgba[i], rgba[i + 1], rgba[i + 2], rgba[i + 3]]
    }

    #[test]
    fn zero_sized_surface_is_rejected() {
        assert_eq!(
            CpuSurface::new(0, 10).unwrap_err(),
            SurfaceError::Empty {
                width: 0,
                height: 10
            }
        );
        assert!(matches!(
            CpuSurface::new(70_000, 10),
            Err(SurfaceError::TooLarge { .. })
        ));
    }

    #[test]
    fn fill_rect_covers_expected_pixels() {
        let mut surface = CpuSurface::new(20, 20).expect("surface");
        {
            let mut backend = surface.backend();
            let red = backend.create_paint(PaintDesc {
                brush: Brush::Solid(Color::from_rgba8(255, 0, 0, 255)),
            });
            backend.state(StateOp::SetPaint(red));
            backend.draw(DrawOp::FillRect {
                x0: 0.0,
                y0: 0.0,
                x1: 10.0,
                y1: 10.0,
            });
        }
        let rgba = surface.to_rgba8();
        assert_eq!(rgba.len(), 20 * 20 * 4);
        assert_eq!(pixel(&rgba, 20, 5, 5), [255, 0, 0, 255]);
        assert_eq!(pixel(&rgba, 20, 15, 15)[3], 0);
    }

    #[test]
    fn pushed_transform_moves_geometry_and_pop_restores_it() {
        let mut surface = CpuSurface::new(40, 20).expect("surface");
        {
            let mut backend = surface.backend();
            let blue = backend.create_paint(PaintDesc {
                brush: Brush::Solid(Color::from_rgba8(0, 0, 255, 255)),
            });
            let square = PathDesc::polygon(&[
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0),
                Point::new(0.0, 10.0),
            ]);
            backend.with_transform(Affine::translate((20.0, 0.0)), |b| {
                b.fill_with(blue, square.clone());
            });
            assert_eq!(backend.transforms.current(), Affine::IDENTITY);
        }
        let rgba = surface.to_rgba8();
        assert_eq!(pixel(&rgba, 40, 25, 5), [0, 0, 255, 255]);
        assert_eq!(pixel(&rgba, 40, 5, 5)[3], 0);
    }

    #[test]
    fn rendering_twice_is_byte_identical() {
        let draw = |surface: &mut CpuSurface| {
            let mut backend = surface.backend();
            let paint = backend.create_paint(PaintDesc {
                brush: Brush::Solid(Color::from_rgba8(10, 120, 200, 180)),
            });
            backend.stroke_with(
                paint,
                StrokeStyle::new(3.0),
                PathDesc::line(Point::new(2.0, 3.0), Point::new(30.0, 17.0)),
            );
        };
        let mut a = CpuSurface::new(32, 20).expect("surface");
        let mut b = CpuSurface::new(32, 20).expect("surface");
        draw(&mut a);
        draw(&mut b);
        assert_eq!(a.to_rgba8(), b.to_rgba8());
    }
}
