#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`HueSaturation`**: Perceptual hue angle and saturation, independent of brightness
//! - **`ChromaticityPoint`**: A CIE 1931 xy chromaticity
//! - **`GamutTriangle`**: The xy triangle a device can reproduce, with barycentric containment
//! - **`RgbSpace`**: Primaries plus white point, with compile-time RGB <-> XYZ matrices
//! - **`ColorConverter`**: Hue/saturation <-> xy <-> RGB conversions within one `RgbSpace`
//! - **`NamedColor`**: Static table of preset smart-light colors
//! - **`LightState`** / **`LightCommand`**: Value types for driving a color light
//!
//! RGB crosses the API boundary as `Srgb<u8>` (0-255 per channel), using the
//! piecewise sRGB transfer curve. Every conversion is total: inputs are
//! clamped, never rejected. The only error is [`InvalidGamut`], raised when
//! a gamut or color space is constructed.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod colors;
pub mod command;
pub mod converter;
pub mod gamut;
pub mod light;
pub mod space;
pub mod types;

pub use colors::NamedColor;
pub use command::{LightAction, LightCommand};
pub use converter::{
    ColorConverter, hue_to_xy, is_within_gamut, rgb_to_xy, xy_to_hue, xy_to_rgb,
    xy_to_saturation,
};
pub use gamut::{GamutTriangle, InvalidGamut};
pub use light::{ColorMode, LightState};
pub use space::RgbSpace;
pub use types::{ChromaticityPoint, D65, HueSaturation};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_constants_evaluate() {
        let _ = ColorConverter::WIDE;
        let _ = ColorConverter::SRGB;
        assert_eq!(ColorConverter::default(), ColorConverter::WIDE);
        assert_eq!(RgbSpace::WIDE.white_point(), D65);
    }
}
