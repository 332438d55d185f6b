// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Palette and stroke widths used by the renderer.

use peniko::Color;
use serde::{Deserialize, Serialize};

/// A style that cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    /// A color string is not `#rrggbb` or `#rrggbbaa`.
    #[error("invalid color {0:?}, expected #rrggbb or #rrggbbaa")]
    InvalidColor(String),

    /// A width or size is negative or not finite.
    #[error("{field} must be a finite non-negative number, got {value}")]
    InvalidWidth {
        /// Offending field.
        field: &'static str,
        /// Offending value.
        value: f64,
    },

    /// The JSON document could not be parsed.
    #[error("malformed style document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Colors and line widths for every element of a floor plan.
///
/// Widths are in surface pixels and do not scale with the plan, except
/// where noted on the drawers (wall thickness and window width come from
/// the plan itself).
///
/// Loading from JSON only needs the fields that differ from the default:
///
/// ```
/// use floorplan_render::RenderStyle;
///
/// let style = RenderStyle::from_json(r##"{ "wall": "#000000", "borderWidth": 4 }"##).unwrap();
/// assert_eq!(style.border_width, 4.0);
/// assert_eq!(style.door, RenderStyle::default().door);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderStyle {
    /// Surface fill laid down before anything else.
    #[serde(with = "hex")]
    pub background: Color,
    /// Outline around the whole surface.
    #[serde(with = "hex")]
    pub border: Color,
    /// Width of the surface outline.
    pub border_width: f64,
    /// Wall fill.
    #[serde(with = "hex")]
    pub wall: Color,
    /// Outer window stroke.
    #[serde(with = "hex")]
    pub window_frame: Color,
    /// Inner window stroke.
    #[serde(with = "hex")]
    pub window_glass: Color,
    /// Door frame line.
    #[serde(with = "hex")]
    pub door: Color,
    /// Width of the door frame line.
    pub door_width: f64,
    /// Door swing arc.
    #[serde(with = "hex")]
    pub door_swing: Color,
    /// Width of the door swing arc.
    pub door_swing_width: f64,
    /// Fill for furniture of an unrecognized type.
    #[serde(with = "hex")]
    pub furniture: Color,
    /// Bed base.
    #[serde(with = "hex")]
    pub bed: Color,
    /// Bed pillow.
    #[serde(with = "hex")]
    pub pillow: Color,
    /// Table fill.
    #[serde(with = "hex")]
    pub table: Color,
    /// Chair fill.
    #[serde(with = "hex")]
    pub chair: Color,
    /// Sofa base.
    #[serde(with = "hex")]
    pub sofa: Color,
    /// Sofa armrests, darker than the base.
    #[serde(with = "hex")]
    pub sofa_armrest: Color,
    /// Outline drawn around every piece of furniture.
    #[serde(with = "hex")]
    pub furniture_outline: Color,
    /// Width of the furniture outline.
    pub furniture_outline_width: f64,
    /// Coverage cone fill.
    #[serde(with = "hex")]
    pub cone_fill: Color,
    /// Coverage cone outline.
    #[serde(with = "hex")]
    pub cone_outline: Color,
    /// Width of the cone outline.
    pub cone_outline_width: f64,
    /// Camera body when the camera is on.
    #[serde(with = "hex")]
    pub camera_active: Color,
    /// Camera body when the camera is off.
    #[serde(with = "hex")]
    pub camera_inactive: Color,
    /// Camera lens mark.
    #[serde(with = "hex")]
    pub camera_lens: Color,
    /// Status indicator when the camera is on.
    #[serde(with = "hex")]
    pub indicator_on: Color,
    /// Status indicator when the camera is off.
    #[serde(with = "hex")]
    pub indicator_off: Color,
    /// Side of the square camera icon in surface pixels.
    pub camera_icon_size: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background: Color::from_rgba8(0xff, 0xff, 0xff, 0xff),
            border: Color::from_rgba8(0xcc, 0xcc, 0xcc, 0xff),
            border_width: 2.0,
            wall: Color::from_rgba8(0x33, 0x33, 0x33, 0xff),
            window_frame: Color::from_rgba8(0x4a, 0x90, 0xd9, 0xff),
            window_glass: Color::from_rgba8(0xcf, 0xe8, 0xfc, 0xff),
            door: Color::from_rgba8(0x8b, 0x45, 0x13, 0xff),
            door_width: 3.0,
            door_swing: Color::from_rgba8(0x8b, 0x45, 0x13, 0x99),
            door_swing_width: 1.0,
            furniture: Color::from_rgba8(0xa0, 0xa0, 0xa0, 0xff),
            bed: Color::from_rgba8(0x8f, 0xbc, 0x8f, 0xff),
            pillow: Color::from_rgba8(0xf5, 0xf5, 0xf5, 0xff),
            table: Color::from_rgba8(0xde, 0xb8, 0x87, 0xff),
            chair: Color::from_rgba8(0xcd, 0x85, 0x3f, 0xff),
            sofa: Color::from_rgba8(0x6a, 0x5a, 0xcd, 0xff),
            sofa_armrest: Color::from_rgba8(0x48, 0x3d, 0x8b, 0xff),
            furniture_outline: Color::from_rgba8(0x55, 0x55, 0x55, 0xff),
            furniture_outline_width: 1.0,
            cone_fill: Color::from_rgba8(0x2e, 0x7d, 0x32, 0x33),
            cone_outline: Color::from_rgba8(0x2e, 0x7d, 0x32, 0x66),
            cone_outline_width: 1.0,
            camera_active: Color::from_rgba8(0x21, 0x96, 0xf3, 0xff),
            camera_inactive: Color::from_rgba8(0x9e, 0x9e, 0x9e, 0xff),
            camera_lens: Color::from_rgba8(0x21, 0x21, 0x21, 0xff),
            indicator_on: Color::from_rgba8(0x00, 0xe6, 0x76, 0xff),
            indicator_off: Color::from_rgba8(0xf4, 0x43, 0x36, 0xff),
            camera_icon_size: 16.0,
        }
    }
}

impl RenderStyle {
    /// Parses a style from JSON and checks its widths.
    ///
    /// Fields missing from the document keep their default value.
    pub fn from_json(json: &str) -> Result<Self, StyleError> {
        let style: Self = serde_json::from_str(json)?;
        style.validate()?;
        Ok(style)
    }

    /// Checks that every width and size is finite and non-negative.
    pub fn validate(&self) -> Result<(), StyleError> {
        for (field, value) in [
            ("borderWidth", self.border_width),
            ("doorWidth", self.door_width),
            ("doorSwingWidth", self.door_swing_width),
            ("furnitureOutlineWidth", self.furniture_outline_width),
            ("coneOutlineWidth", self.cone_outline_width),
            ("cameraIconSize", self.camera_icon_size),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(StyleError::InvalidWidth { field, value });
            }
        }
        Ok(())
    }
}

/// Parses `#rrggbb` or `#rrggbbaa`.
pub fn parse_color(s: &str) -> Result<Color, StyleError> {
    let invalid = || StyleError::InvalidColor(s.to_owned());
    let digits = s.strip_prefix('#').ok_or_else(invalid)?;
    if !(digits.len() == 6 || digits.len() == 8) || !digits.is_ascii() {
        return Err(invalid());
    }
    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
    let alpha = if digits.len() == 8 { byte(6)? } else { 0xff };
    Ok(Color::from_rgba8(byte(0)?, byte(2)?, byte(4)?, alpha))
}

/// Formats a color as `#rrggbb`, or `#rrggbbaa` when it is translucent.
pub fn format_color(color: Color) -> String {
    let [r, g, b, a] = color.to_rgba8().to_u8_array();
    if a == 0xff {
        format!("#{r:02x}{g:02x}{b:02x}")
    } else {
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

mod hex {
    use peniko::Color;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub(super) fn serialize<S: Serializer>(color: &Color, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&super::format_color(*color))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Color, D::Error> {
        let s = String::deserialize(de)?;
        super::parse_color(&s).map_err(de::Error::custom)
    }
}
