// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde::{Deserialize, Serialize};

use crate::entities::{Camera, Door, Furniture, Point, Room, Wall, Window};
use crate::error::{EntityIssue, EntityKind, IssueKind, ValidationError};

/// Extent of plan space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Plan width.
    pub width: f64,
    /// Plan height.
    pub height: f64,
}

impl Dimensions {
    /// Creates a plan extent.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl From<Dimensions> for kurbo::Size {
    fn from(d: Dimensions) -> Self {
        Self::new(d.width, d.height)
    }
}

/// A complete floor plan.
///
/// Optional collections keep the distinction between "absent" and "empty"
/// so a loaded plan serializes back the way it came in. Read them through
/// the slice accessors, which treat absent as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorPlanData {
    /// Walls, drawn first.
    pub walls: Vec<Wall>,
    /// Room metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rooms: Option<Vec<Room>>,
    /// Doors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doors: Option<Vec<Door>>,
    /// Windows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub windows: Option<Vec<Window>>,
    /// Furniture.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub furniture: Option<Vec<Furniture>>,
    /// Cameras, drawn last.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cameras: Option<Vec<Camera>>,
    /// Plan-space extent.
    pub dimensions: Dimensions,
}

impl FloorPlanData {
    /// Creates an empty plan with the given extent.
    #[must_use]
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            walls: Vec::new(),
            rooms: None,
            doors: None,
            windows: None,
            furniture: None,
            cameras: None,
            dimensions,
        }
    }

    /// Room metadata, empty if absent.
    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        self.rooms.as_deref().unwrap_or_default()
    }

    /// Doors, empty if absent.
    #[must_use]
    pub fn doors(&self) -> &[Door] {
        self.doors.as_deref().unwrap_or_default()
    }

    /// Windows, empty if absent.
    #[must_use]
    pub fn windows(&self) -> &[Window] {
        self.windows.as_deref().unwrap_or_default()
    }

    /// Furniture, empty if absent.
    #[must_use]
    pub fn furniture(&self) -> &[Furniture] {
        self.furniture.as_deref().unwrap_or_default()
    }

    /// Cameras, empty if absent.
    #[must_use]
    pub fn cameras(&self) -> &[Camera] {
        self.cameras.as_deref().unwrap_or_default()
    }

    /// Checks that the plan can be scaled onto a surface.
    ///
    /// Only the extent is checked. Malformed entities are reported by
    /// [`FloorPlanData::entity_issues`] and never make a plan invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let Dimensions { width, height } = self.dimensions;
        if !width.is_finite() || !height.is_finite() {
            return Err(ValidationError::NonFiniteDimensions { width, height });
        }
        if width <= 0.0 || height <= 0.0 {
            return Err(ValidationError::NonPositiveDimensions { width, height });
        }
        Ok(())
    }

    /// Lists entities the renderer will skip, in draw order.
    #[must_use]
    pub fn entity_issues(&self) -> Vec<EntityIssue> {
        let mut issues = Vec::new();
        let mut push = |kind, index, problem| {
            issues.push(EntityIssue {
                kind,
                index,
                problem,
            });
        };

        for (i, w) in self.walls.iter().enumerate() {
            if !(finite_segment(w.start, w.end) && w.thickness.is_finite()) {
                push(EntityKind::Wall, i, IssueKind::NonFinite);
            } else if w.length() == 0.0 {
                push(EntityKind::Wall, i, IssueKind::ZeroLength);
            }
        }
        for (i, w) in self.windows().iter().enumerate() {
            if !(finite_segment(w.start, w.end) && w.width.is_finite()) {
                push(EntityKind::Window, i, IssueKind::NonFinite);
            } else if w.start == w.end {
                push(EntityKind::Window, i, IssueKind::ZeroLength);
            }
        }
        for (i, d) in self.doors().iter().enumerate() {
            let angle_ok = d.opening_angle.is_none_or(f64::is_finite);
            if !(finite_segment(d.start, d.end) && angle_ok) {
                push(EntityKind::Door, i, IssueKind::NonFinite);
            }
        }
        for (i, f) in self.furniture().iter().enumerate() {
            let finite = f.position.is_finite()
                && f.width.is_finite()
                && f.height.is_finite()
                && f.rotation.is_none_or(f64::is_finite);
            if !finite {
                push(EntityKind::Furniture, i, IssueKind::NonFinite);
            } else if f.width <= 0.0 || f.height <= 0.0 {
                push(EntityKind::Furniture, i, IssueKind::NonPositiveSize);
            }
        }
        for (i, c) in self.cameras().iter().enumerate() {
            let finite = c.position.is_finite()
                && c.direction.is_finite()
                && c.field_of_view.is_finite()
                && c.range.is_finite();
            if !finite {
                push(EntityKind::Camera, i, IssueKind::NonFinite);
            } else if c.range < 0.0 {
                push(EntityKind::Camera, i, IssueKind::NegativeRange);
            }
        }
        issues
    }

    /// Returns a copy with every camera switched on or off.
    ///
    /// This is how a show/hide cameras control is expressed: the renderer
    /// itself has no visibility switch and draws whatever the data says.
    #[must_use]
    pub fn with_cameras_active(&self, active: bool) -> Self {
        let mut plan = self.clone();
        if let Some(cameras) = plan.cameras.as_mut() {
            for camera in cameras {
                camera.is_active = Some(active);
            }
        }
        plan
    }
}

fn finite_segment(a: Point, b: Point) -> bool {
    a.is_finite() && b.is_finite()
}
