// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size};

/// Mapping from plan space onto a pixel surface.
///
/// `PlanViewport` tracks the plan extent and the surface size and derives
/// one scale factor per axis from them. It can be used to:
/// - Convert points and rectangles between plan and surface coordinates.
/// - Scale lengths (wall thickness, camera range) along the x axis.
/// - Detect when a resize actually changes the mapping.
#[derive(Clone, Debug)]
pub struct PlanViewport {
    plan_size: Size,
    surface_size: Size,
    scale_x: f64,
    scale_y: f64,
}

impl PlanViewport {
    /// Creates a viewport mapping a plan of `plan_size` onto a surface of
    /// `surface_size` pixels.
    #[must_use]
    pub fn new(plan_size: Size, surface_size: Size) -> Self {
        let mut vp = Self {
            plan_size,
            surface_size,
            scale_x: 1.0,
            scale_y: 1.0,
        };
        vp.rebuild_scale();
        vp
    }

    /// Returns the plan extent in plan-space units.
    #[must_use]
    pub fn plan_size(&self) -> Size {
        self.plan_size
    }

    /// Returns the surface size in pixels.
    #[must_use]
    pub fn surface_size(&self) -> Size {
        self.surface_size
    }

    /// Sets the surface size.
    ///
    /// Returns `true` if the size changed and the scale factors were rebuilt.
    pub fn set_surface_size(&mut self, size: Size) -> bool {
        if self.surface_size == size {
            return false;
        }
        self.surface_size = size;
        self.rebuild_scale();
        true
    }

    /// Sets the plan extent.
    ///
    /// Returns `true` if the extent changed and the scale factors were rebuilt.
    pub fn set_plan_size(&mut self, size: Size) -> bool {
        if self.plan_size == size {
            return false;
        }
        self.plan_size = size;
        self.rebuild_scale();
        true
    }

    /// Surface pixels per plan unit along x.
    #[must_use]
    pub fn scale_x(&self) -> f64 {
        self.scale_x
    }

    /// Surface pixels per plan unit along y.
    #[must_use]
    pub fn scale_y(&self) -> f64 {
        self.scale_y
    }

    /// Returns `true` if both scale factors are finite and non-zero.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.scale_x.is_finite()
            && self.scale_y.is_finite()
            && self.scale_x != 0.0
            && self.scale_y != 0.0
    }

    /// Converts a plan-space point into surface coordinates.
    ///
    /// This is exactly `(x * scale_x, y * scale_y)`, so at a 1:1 scale every
    /// point maps onto itself bit for bit.
    #[must_use]
    pub fn plan_to_surface_point(&self, pt: Point) -> Point {
        Point::new(pt.x * self.scale_x, pt.y * self.scale_y)
    }

    /// Converts a surface point back into plan space.
    #[must_use]
    pub fn surface_to_plan_point(&self, pt: Point) -> Point {
        Point::new(pt.x / self.scale_x, pt.y / self.scale_y)
    }

    /// Scales a plan-space length along the x axis.
    ///
    /// Lengths that have no natural axis (wall thickness, window width,
    /// camera range) are scaled with the x factor.
    #[must_use]
    pub fn scale_length_x(&self, len: f64) -> f64 {
        len * self.scale_x
    }

    /// Scales a plan-space size with the per-axis factors.
    #[must_use]
    pub fn scale_size(&self, size: Size) -> Size {
        Size::new(size.width * self.scale_x, size.height * self.scale_y)
    }

    /// Converts a plan-space rectangle into surface coordinates.
    #[must_use]
    pub fn plan_to_surface_rect(&self, rect: Rect) -> Rect {
        let p0 = self.plan_to_surface_point(rect.origin());
        let p1 = self.plan_to_surface_point(Point::new(rect.x1, rect.y1));
        Rect::from_points(p0, p1)
    }

    /// Converts a surface rectangle into plan space.
    #[must_use]
    pub fn surface_to_plan_rect(&self, rect: Rect) -> Rect {
        let p0 = self.surface_to_plan_point(rect.origin());
        let p1 = self.surface_to_plan_point(Point::new(rect.x1, rect.y1));
        Rect::from_points(p0, p1)
    }

    /// Returns the plan → surface mapping as an affine transform.
    #[must_use]
    pub fn plan_to_surface(&self) -> Affine {
        Affine::scale_non_uniform(self.scale_x, self.scale_y)
    }

    /// Returns the surface rectangle, anchored at the origin.
    #[must_use]
    pub fn surface_rect(&self) -> Rect {
        self.surface_size.to_rect()
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> PlanViewportDebugInfo {
        PlanViewportDebugInfo {
            plan_size: self.plan_size,
            surface_size: self.surface_size,
            scale_x: self.scale_x,
            scale_y: self.scale_y,
            uniform: self.scale_x == self.scale_y,
        }
    }

    fn rebuild_scale(&mut self) {
        self.scale_x = self.surface_size.width / self.plan_size.width;
        self.scale_y = self.surface_size.height / self.plan_size.height;
    }
}

/// Debug snapshot of a [`PlanViewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct PlanViewportDebugInfo {
    /// Plan extent in plan-space units.
    pub plan_size: Size,
    /// Surface size in pixels.
    pub surface_size: Size,
    /// Surface pixels per plan unit along x.
    pub scale_x: f64,
    /// Surface pixels per plan unit along y.
    pub scale_y: f64,
    /// Whether both axes share the same scale factor.
    pub uniform: bool,
}
