// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure surface-space geometry for the drawers.
//!
//! Angles follow one convention throughout: degrees in surface space,
//! `0°` along +x, positive angles turning from +x toward +y. With y growing
//! downward that is clockwise on screen.

use floorplan_model::FurnitureKind;
use kurbo::{Point, Rect, Size, Vec2};

/// Angular extent of a camera's coverage cone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConeSector {
    /// Start angle in degrees, in `[0, 360)`.
    pub start_deg: f64,
    /// End angle in degrees, in `[0, 360)`.
    pub end_deg: f64,
    /// Angle swept from `start_deg` to reach `end_deg`, in `[0, 360]`.
    ///
    /// This is the field of view clamped to a full turn. It is kept
    /// separately because the normalized start and end angles alone cannot
    /// tell a full circle from an empty one.
    pub sweep_deg: f64,
}

/// Computes the coverage cone of a camera facing `direction` with the given
/// field of view, both in degrees.
///
/// ```
/// use floorplan_render::camera_sector;
///
/// let cone = camera_sector(90.0, 60.0);
/// assert_eq!((cone.start_deg, cone.end_deg, cone.sweep_deg), (60.0, 120.0, 60.0));
///
/// // Cones that straddle 0° wrap into [0, 360).
/// let cone = camera_sector(10.0, 60.0);
/// assert_eq!((cone.start_deg, cone.end_deg), (340.0, 40.0));
/// ```
#[must_use]
pub fn camera_sector(direction: f64, field_of_view: f64) -> ConeSector {
    let half = field_of_view / 2.0;
    ConeSector {
        start_deg: (direction - half).rem_euclid(360.0),
        end_deg: (direction + half).rem_euclid(360.0),
        sweep_deg: field_of_view.clamp(0.0, 360.0),
    }
}

/// Corners of a wall of thickness `2 * half_thickness` around the segment
/// `start..end`, in order around the quad.
///
/// Returns `None` for zero-length or non-finite segments.
#[must_use]
pub fn wall_quad(start: Point, end: Point, half_thickness: f64) -> Option<[Point; 4]> {
    let d = end - start;
    let len = d.hypot();
    if !len.is_finite() || len == 0.0 || !half_thickness.is_finite() {
        return None;
    }
    let n = Vec2::new(-d.y, d.x) / len * half_thickness;
    Some([start + n, end + n, end - n, start - n])
}

/// Which palette tone a furniture part uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FurnitureTone {
    /// Fallback for unrecognized types.
    Default,
    /// Bed base.
    Bed,
    /// Bed pillow.
    Pillow,
    /// Table.
    Table,
    /// Chair.
    Chair,
    /// Sofa base.
    Sofa,
    /// Sofa armrest.
    Armrest,
}

/// Share of the bed covered by the pillow.
const PILLOW_FRACTION: (f64, f64) = (0.35, 0.25);
/// Pillow inset from the bed's top-left corner, as a share of the bed.
const PILLOW_INSET: f64 = 0.05;
/// Share of the sofa width taken by each armrest.
const ARMREST_FRACTION: f64 = 0.1;

/// Splits a piece of furniture into filled rectangles, back to front.
///
/// Rectangles are in the item's local frame, centered on the origin. The
/// first entry is always the full base rectangle.
#[must_use]
pub fn furniture_parts(kind: &FurnitureKind, size: Size) -> Vec<(Rect, FurnitureTone)> {
    let base = Rect::from_center_size(Point::ORIGIN, size);
    match kind {
        FurnitureKind::Bed => {
            let inset = Vec2::new(size.width, size.height) * PILLOW_INSET;
            let pillow = Rect::from_origin_size(
                base.origin() + inset,
                (size.width * PILLOW_FRACTION.0, size.height * PILLOW_FRACTION.1),
            );
            vec![(base, FurnitureTone::Bed), (pillow, FurnitureTone::Pillow)]
        }
        FurnitureKind::Sofa => {
            let arm = size.width * ARMREST_FRACTION;
            let left = Rect::new(base.x0, base.y0, base.x0 + arm, base.y1);
            let right = Rect::new(base.x1 - arm, base.y0, base.x1, base.y1);
            vec![
                (base, FurnitureTone::Sofa),
                (left, FurnitureTone::Armrest),
                (right, FurnitureTone::Armrest),
            ]
        }
        FurnitureKind::Table => vec![(base, FurnitureTone::Table)],
        FurnitureKind::Chair => vec![(base, FurnitureTone::Chair)],
        FurnitureKind::Other(_) => vec![(base, FurnitureTone::Default)],
    }
}
