use std::{
    fmt,
    ops::{Add, Sub},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::error::{ColorParseError, VariantParseError};

/// A position in logical pixels. Also used as a displacement.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn min_side(self) -> f32 {
        self.width.min(self.height)
    }
}

/// Axis-aligned rectangle; `min` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    pub fn from_min_size(min: Point, size: Size) -> Self {
        Self {
            min,
            max: Point::new(min.x + size.width, min.y + size.height),
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    pub fn translate(&self, by: Point) -> Self {
        Self {
            min: self.min + by,
            max: self.max + by,
        }
    }

    /// Moves every edge inwards by `amount`, never past the center.
    pub fn shrink(&self, amount: f32) -> Self {
        let amount = amount
            .max(0.0)
            .min(self.width() / 2.0)
            .min(self.height() / 2.0);
        Self {
            min: Point::new(self.min.x + amount, self.min.y + amount),
            max: Point::new(self.max.x - amount, self.max.y - amount),
        }
    }
}

/// Straight (non-premultiplied) RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 255])
    }

    pub fn r(&self) -> u8 {
        self.0[0]
    }

    pub fn g(&self) -> u8 {
        self.0[1]
    }

    pub fn b(&self) -> u8 {
        self.0[2]
    }

    pub fn a(&self) -> u8 {
        self.0[3]
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(input: &str) -> Result<Self, ColorParseError> {
        let hex = input.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return Err(ColorParseError::InvalidDigit(input.to_string()));
        }
        let byte = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| ColorParseError::InvalidDigit(input.to_string()))
        };
        match hex.len() {
            3 => {
                let mut out = [0u8, 0, 0, 255];
                for (slot, ch) in out.iter_mut().zip(hex.chars()) {
                    let v = ch
                        .to_digit(16)
                        .ok_or_else(|| ColorParseError::InvalidDigit(input.to_string()))?
                        as u8;
                    *slot = v * 17;
                }
                Ok(Self(out))
            }
            6 => Ok(Self([byte(&hex[0..2])?, byte(&hex[2..4])?, byte(&hex[4..6])?, 255])),
            8 => Ok(Self([
                byte(&hex[0..2])?,
                byte(&hex[2..4])?,
                byte(&hex[4..6])?,
                byte(&hex[6..8])?,
            ])),
            _ => Err(ColorParseError::InvalidLength(input.to_string())),
        }
    }
}

impl FromStr for Rgba {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a() == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r(), self.g(), self.b())
        } else {
            write!(
                f,
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r(),
                self.g(),
                self.b(),
                self.a()
            )
        }
    }
}

/// Which draft of the window to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowVariant {
    /// Decorated window with a plain prompt box.
    Basic,
    /// Decorated window with a styled prompt box.
    Styled,
    /// Frameless rounded window with a neumorphic prompt bar.
    #[default]
    Neumorphic,
}

impl WindowVariant {
    pub fn label(self) -> &'static str {
        match self {
            WindowVariant::Basic => "basic",
            WindowVariant::Styled => "styled",
            WindowVariant::Neumorphic => "neumorphic",
        }
    }

    pub fn is_frameless(self) -> bool {
        matches!(self, WindowVariant::Neumorphic)
    }
}

impl FromStr for WindowVariant {
    type Err = VariantParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "styled" => Ok(Self::Styled),
            "neumorphic" => Ok(Self::Neumorphic),
            _ => Err(VariantParseError::new("window variant", s)),
        }
    }
}

impl fmt::Display for WindowVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How a frameless window follows the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragMode {
    /// Move the window ourselves by the pointer delta.
    #[default]
    Manual,
    /// Hand the drag over to the window manager.
    Native,
}

impl FromStr for DragMode {
    type Err = VariantParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manual" => Ok(Self::Manual),
            "native" => Ok(Self::Native),
            _ => Err(VariantParseError::new("drag mode", s)),
        }
    }
}

impl fmt::Display for DragMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DragMode::Manual => "manual",
            DragMode::Native => "native",
        })
    }
}
