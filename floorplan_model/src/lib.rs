// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floorplan Model: the floor-plan data the renderer draws.
//!
//! Every entity is an immutable value in plan-space units. The types
//! (de)serialize with `serde` using the camelCase JSON field names the
//! dashboard backend delivers, so a plan can be loaded straight from JSON:
//!
//! ```
//! use floorplan_model::{FloorPlanData, FurnitureKind};
//!
//! let plan: FloorPlanData = serde_json::from_str(r#"{
//!     "walls": [{ "start": {"x": 0, "y": 0}, "end": {"x": 1000, "y": 0}, "thickness": 10 }],
//!     "furniture": [{ "type": "bed", "position": {"x": 200, "y": 200},
//!                     "width": 160, "height": 200 }],
//!     "dimensions": { "width": 1000, "height": 750 }
//! }"#).unwrap();
//!
//! assert!(plan.validate().is_ok());
//! assert_eq!(plan.furniture()[0].kind, FurnitureKind::Bed);
//! assert!(plan.doors().is_empty());
//! ```
//!
//! Optional arrays (`rooms`, `doors`, `windows`, `furniture`, `cameras`)
//! may be absent and read as empty through the slice accessors.

mod entities;
mod error;
mod plan;

pub use entities::{Camera, Door, Furniture, FurnitureKind, Point, Room, Wall, Window};
pub use error::{EntityIssue, EntityKind, IssueKind, ValidationError};
pub use plan::{Dimensions, FloorPlanData};
