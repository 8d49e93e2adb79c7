use crate::foundation::error::{SatError, SatResult};

pub use kurbo::{Affine, Rect};

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Square canvas of `size × size` pixels.
    pub fn square(size: u32) -> SatResult<Self> {
        if size == 0 {
            return Err(SatError::validation("canvas size must be > 0"));
        }
        if size > u32::from(u16::MAX) {
            return Err(SatError::validation("canvas size must fit in u16"));
        }
        Ok(Self {
            width: size,
            height: size,
        })
    }

    /// Canvas bounds as a rectangle anchored at the origin.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque white.
    pub const WHITE: Self = Self::opaque(255, 255, 255);

    /// Opaque color from RGB channels.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Build from an `[r, g, b, a]` array.
    pub const fn from_array([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }

    /// Black with alpha derived from a `0..=1` opacity, matching CSS `rgba(0, 0, 0, a)`.
    pub fn black_with_opacity(opacity: f32) -> Self {
        let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { r: 0, g: 0, b: 0, a }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
