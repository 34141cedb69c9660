//! Per-state cell styling.
//!
//! Styles are plain values looked up by [`DayVisualState`]; the renderer
//! receives a [`StyleLookup`] instead of reading shared mutable fields.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{ConfigError, DayVisualState};

const HEX_PREFIX: char = '#';
const OPAQUE: u8 = u8::MAX;

/// An 8-bit RGBA colour, written `#RRGGBB` or `#RRGGBBAA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Self = Self::opaque(0x00, 0x00, 0x00);
    pub const WHITE: Self = Self::opaque(0xff, 0xff, 0xff);
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, OPAQUE)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{HEX_PREFIX}{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != OPAQUE {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

impl FromStr for Rgba {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidColor(s.to_owned());
        let hex = s.trim().strip_prefix(HEX_PREFIX).ok_or_else(invalid)?;
        if !hex.is_ascii() || !matches!(hex.len(), 6 | 8) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());

        let a = if hex.len() == 8 { channel(6)? } else { OPAQUE };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, a))
    }
}

impl Serialize for Rgba {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Text and background styling for one kind of day cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayStyle {
    pub font_family: String,
    pub font_size:   f32,
    pub text_color:  Rgba,
    pub background:  Rgba,
}

impl DayStyle {
    pub fn new(text_color: Rgba, background: Rgba) -> Self {
        Self {
            text_color,
            background,
            ..Self::default()
        }
    }
}

impl Default for DayStyle {
    fn default() -> Self {
        Self {
            font_family: "system-ui".to_owned(),
            font_size:   16.0,
            text_color:  Rgba::BLACK,
            background:  Rgba::TRANSPARENT,
        }
    }
}

/// Resolves the style for a day state. The renderer depends on this rather
/// than on a concrete sheet.
pub trait StyleLookup {
    fn style(&self, state: DayVisualState) -> &DayStyle;
}

/// One immutable [`DayStyle`] per [`DayVisualState`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSheet {
    pub preview:     DayStyle,
    pub selected:    DayStyle,
    pub highlighted: DayStyle,
    pub normal:      DayStyle,
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            preview:     DayStyle::new(Rgba::opaque(0xb0, 0xb0, 0xb0), Rgba::TRANSPARENT),
            selected:    DayStyle::new(Rgba::WHITE, Rgba::opaque(0x1e, 0x6f, 0xd9)),
            highlighted: DayStyle::new(Rgba::BLACK, Rgba::opaque(0xcf, 0xe2, 0xfa)),
            normal:      DayStyle::default(),
        }
    }
}

impl StyleLookup for StyleSheet {
    fn style(&self, state: DayVisualState) -> &DayStyle {
        match state {
            DayVisualState::Preview => &self.preview,
            DayVisualState::Selected => &self.selected,
            DayVisualState::Highlighted => &self.highlighted,
            DayVisualState::Normal => &self.normal,
        }
    }
}
