// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validation errors and per-entity issues.

use std::fmt;

/// A plan that cannot be scaled onto a surface.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Width or height is zero or negative.
    #[error("plan dimensions must be positive, got {width} x {height}")]
    NonPositiveDimensions {
        /// Plan width.
        width: f64,
        /// Plan height.
        height: f64,
    },

    /// Width or height is NaN or infinite.
    #[error("plan dimensions must be finite, got {width} x {height}")]
    NonFiniteDimensions {
        /// Plan width.
        width: f64,
        /// Plan height.
        height: f64,
    },
}

/// Entity collections of a floor plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// `walls`
    Wall,
    /// `doors`
    Door,
    /// `windows`
    Window,
    /// `furniture`
    Furniture,
    /// `cameras`
    Camera,
}

impl EntityKind {
    /// Lowercase name used in logs and reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Wall => "wall",
            Self::Door => "door",
            Self::Window => "window",
            Self::Furniture => "furniture",
            Self::Camera => "camera",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What is wrong with a single entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum IssueKind {
    /// A coordinate or size is NaN or infinite.
    #[error("non-finite geometry")]
    NonFinite,
    /// Both endpoints coincide.
    #[error("zero length")]
    ZeroLength,
    /// Camera range below zero.
    #[error("negative range")]
    NegativeRange,
    /// Furniture width or height is zero or negative.
    #[error("non-positive size")]
    NonPositiveSize,
}

/// A malformed entity, located by collection and index.
///
/// Issues are not fatal: the renderer skips such entities and draws the
/// rest of the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{kind} #{index}: {problem}")]
pub struct EntityIssue {
    /// Collection the entity belongs to.
    pub kind: EntityKind,
    /// Index within that collection.
    pub index: usize,
    /// What is wrong.
    pub problem: IssueKind,
}
