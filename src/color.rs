//! Color related types and functions.
//!
//! Objects are colored with continuous RGB values (a [`Vector3`] with channels in `0..=1`). The
//! LEDs themselves can only switch each channel on or off, so every lit point carries a
//! [`Color1b`], produced by a [`Dithering`](crate::dithering::Dithering) implementation.

use crate::Vector3;
use colorsys::{Hsl, Rgb};

/// 1 bit per channel color of a single LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color1b {
    pub r: bool,
    pub g: bool,
    pub b: bool,
}

impl Color1b {
    pub const OFF: Self = Self::new(false, false, false);
    pub const RED: Self = Self::new(true, false, false);
    pub const GREEN: Self = Self::new(false, true, false);
    pub const BLUE: Self = Self::new(false, false, true);
    pub const YELLOW: Self = Self::new(true, true, false);
    pub const CYAN: Self = Self::new(false, true, true);
    pub const MAGENTA: Self = Self::new(true, false, true);
    pub const WHITE: Self = Self::new(true, true, true);

    pub const fn new(r: bool, g: bool, b: bool) -> Self {
        Self { r, g, b }
    }

    pub const fn is_off(&self) -> bool {
        !(self.r || self.g || self.b)
    }

    /// Packs into the low 3 bits: red is bit 0, green bit 1, blue bit 2.
    pub const fn bits(&self) -> u8 {
        self.r as u8 | (self.g as u8) << 1 | (self.b as u8) << 2
    }

    pub const fn from_bits(bits: u8) -> Self {
        Self::new(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0)
    }

    /// Continuous color that reproduces this one exactly when dithered.
    pub fn as_vec(&self) -> Vector3 {
        Vector3::new(
            self.r as u8 as f32,
            self.g as u8 as f32,
            self.b as u8 as f32,
        )
    }

    /// Channel-wise OR, i.e. additive light mixing.
    pub const fn add(self, other: Self) -> Self {
        Self::new(self.r | other.r, self.g | other.g, self.b | other.b)
    }
}

/// Builds a continuous color from HSL.
///
/// `hue` is in degrees, `saturation` and `lightness` in percent, like [`colorsys::Hsl`].
pub fn hsl(hue: f64, saturation: f64, lightness: f64) -> Vector3 {
    let rgb = Rgb::from(&Hsl::new(hue, saturation, lightness, None));
    Vector3::new(
        rgb.red() as f32,
        rgb.green() as f32,
        rgb.blue() as f32,
    ) / 255.0
}
