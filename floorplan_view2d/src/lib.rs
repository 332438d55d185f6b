// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floorplan View 2D: mapping between plan space and surface space.
//!
//! A floor plan is authored in plan-space units whose extent is the plan's
//! `dimensions`. It is drawn into a surface measured in pixels. This crate
//! provides [`PlanViewport`], a small headless model of that mapping:
//! - Per-axis scale factors (`surface / plan` along each axis).
//! - Point, length and rectangle conversion in both directions.
//! - Change detection when the surface is resized or the plan extent
//!   changes, so callers know when to repaint.
//!
//! It does **not** own any plan data or rendering backend.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use floorplan_view2d::PlanViewport;
//!
//! // A 1000x750 plan drawn into a 500x500 canvas.
//! let mut view = PlanViewport::new(Size::new(1000.0, 750.0), Size::new(500.0, 500.0));
//! assert_eq!(view.scale_x(), 0.5);
//!
//! let p = view.plan_to_surface_point(Point::new(100.0, 75.0));
//! assert_eq!(p, Point::new(50.0, 50.0));
//!
//! // Resizing to the same size is a no-op.
//! assert!(!view.set_surface_size(Size::new(500.0, 500.0)));
//! ```
//!
//! ## Design notes
//!
//! - Scaling is **non-uniform**: each axis gets its own factor and the
//!   plan's aspect ratio is not preserved. A plan drawn into a surface of a
//!   different aspect ratio appears stretched.
//! - There is no pan, zoom or rotation.
//! - A zero plan extent yields infinite or NaN scale factors; callers are
//!   expected to validate plan dimensions first.
//!
//! This crate is `no_std`.

#![no_std]

mod viewport;

pub use viewport::{PlanViewport, PlanViewportDebugInfo};
