// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floorplan Render: paints floor plans onto an imaging backend.
//!
//! The renderer takes a [`FloorPlanData`] and a surface size, scales every
//! coordinate from plan space into surface space and emits a deterministic
//! sequence of imaging ops:
//!
//! 1. clear to the background and outline the surface border,
//! 2. walls as filled quads,
//! 3. windows as a frame stroke with a narrower glass stroke on top,
//! 4. doors as a frame line plus a swing arc when open,
//! 5. furniture as rectangles decorated per type, rotated about their center,
//! 6. cameras as a translucent coverage cone (when on) and an icon.
//!
//! It holds no state between calls and performs no I/O. Any
//! [`ImagingBackend`] can be the surface: the recording backend from
//! `floorplan_imaging_ref` for tests, or the CPU rasterizer from
//! `floorplan_imaging_vello_cpu` for pixels.
//!
//! ```
//! use floorplan_imaging_ref::RefBackend;
//! use floorplan_model::FloorPlanData;
//!
//! let plan: FloorPlanData = serde_json::from_str(r#"{
//!     "walls": [{ "start": {"x": 0, "y": 0}, "end": {"x": 1000, "y": 0}, "thickness": 10 }],
//!     "dimensions": { "width": 1000, "height": 750 }
//! }"#).unwrap();
//!
//! let mut backend = RefBackend::default();
//! floorplan_render::render(&mut backend, &plan, 1000, 750);
//! // Background, border and one wall.
//! assert_eq!(backend.draws().count(), 3);
//! ```
//!
//! ## Angles
//!
//! All angles are degrees in surface space: `0°` points along +x and
//! positive angles turn toward +y. Since y grows downward this is clockwise
//! on screen. Door swings, camera cones, camera icons and furniture
//! rotation all use it.
//!
//! [`FloorPlanData`]: floorplan_model::FloorPlanData
//! [`ImagingBackend`]: floorplan_imaging::ImagingBackend

mod draw;
mod geometry;
mod renderer;
mod style;
mod view;

pub use geometry::{ConeSector, FurnitureTone, camera_sector, furniture_parts, wall_quad};
pub use renderer::{Renderer, render};
pub use style::{RenderStyle, StyleError, format_color, parse_color};
pub use view::FloorPlanView;
