// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;

use serde::{Deserialize, Serialize};

/// A plan-space coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate, growing downward.
    pub y: f64,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns `true` if both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl From<Point> for kurbo::Point {
    fn from(p: Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<kurbo::Point> for Point {
    fn from(p: kurbo::Point) -> Self {
        Self::new(p.x, p.y)
    }
}

/// A thick wall segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    /// First endpoint.
    pub start: Point,
    /// Second endpoint.
    pub end: Point,
    /// Thickness in plan units, centered on the segment.
    pub thickness: f64,
}

impl Wall {
    /// Length of the wall's center line.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

/// A door frame with an optional swing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Door {
    /// Hinge end of the frame.
    pub start: Point,
    /// Free end of the frame.
    pub end: Point,
    /// Whether the door is drawn open.
    pub is_open: bool,
    /// Swing angle in degrees, measured from the frame direction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_angle: Option<f64>,
}

impl Door {
    /// Swing angle to draw, if the door is open and has one.
    #[must_use]
    pub fn swing(&self) -> Option<f64> {
        if self.is_open {
            self.opening_angle
        } else {
            None
        }
    }
}

/// A window cut into a wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Window {
    /// First endpoint.
    pub start: Point,
    /// Second endpoint.
    pub end: Point,
    /// Frame width in plan units.
    pub width: f64,
}

/// Decoration set for a piece of furniture.
///
/// Unknown type strings are kept verbatim in [`FurnitureKind::Other`] so a
/// plan survives a load/save round trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FurnitureKind {
    /// Bed with a pillow.
    Bed,
    /// Table.
    Table,
    /// Chair.
    Chair,
    /// Sofa with armrests.
    Sofa,
    /// Anything else; drawn as a plain rectangle.
    Other(String),
}

impl FurnitureKind {
    /// The JSON type string for this kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Bed => "bed",
            Self::Table => "table",
            Self::Chair => "chair",
            Self::Sofa => "sofa",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for FurnitureKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "bed" => Self::Bed,
            "table" => Self::Table,
            "chair" => Self::Chair,
            "sofa" => Self::Sofa,
            _ => Self::Other(s),
        }
    }
}

impl From<&str> for FurnitureKind {
    fn from(s: &str) -> Self {
        Self::from(s.to_owned())
    }
}

impl From<FurnitureKind> for String {
    fn from(kind: FurnitureKind) -> Self {
        match kind {
            FurnitureKind::Other(s) => s,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for FurnitureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A piece of furniture: a rectangle centered at `position`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Furniture {
    /// Decoration set.
    #[serde(rename = "type")]
    pub kind: FurnitureKind,
    /// Center of the rectangle.
    pub position: Point,
    /// Extent along the item's own x axis.
    pub width: f64,
    /// Extent along the item's own y axis.
    pub height: f64,
    /// Rotation about the center in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
}

/// A security camera and its coverage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Camera {
    /// Mount point.
    pub position: Point,
    /// Facing direction in degrees.
    pub direction: f64,
    /// Angular width of the coverage cone in degrees.
    pub field_of_view: f64,
    /// Coverage radius in plan units.
    pub range: f64,
    /// Whether the camera is on. Absent means off.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl Camera {
    /// Whether the camera is on; an absent flag reads as off.
    #[must_use]
    pub fn active(&self) -> bool {
        self.is_active.unwrap_or(false)
    }
}

/// Room metadata. Never drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Backend identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name.
    pub name: String,
    /// Free-form room type such as `"bedroom"`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}
