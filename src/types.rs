//! Core color value types.

use palette::RgbHue;

/// The CIE 1931 chromaticity of the D65 standard illuminant.
pub const D65: ChromaticityPoint = ChromaticityPoint::new(0.3127, 0.3290);

/// A perceptual color angle and purity, independent of brightness.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HueSaturation {
    /// Hue angle in degrees, `[0, 360)`.
    pub hue: f32,

    /// Color purity, `[0, 1]`.
    pub saturation: f32,
}

impl HueSaturation {
    /// Creates a hue/saturation pair.
    ///
    /// The hue is wrapped into `[0, 360)` and the saturation is clamped to
    /// `[0, 1]`. Non-finite inputs become `0.0`.
    #[inline]
    pub fn new(hue: f32, saturation: f32) -> Self {
        Self {
            hue: wrap_hue(hue),
            saturation: clamp_unit(saturation),
        }
    }
}

/// A point in CIE 1931 xy chromaticity space.
///
/// Brightness-independent. Physically realizable colors satisfy
/// `x >= 0`, `y >= 0` and `x + y <= 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChromaticityPoint {
    pub x: f32,
    pub y: f32,
}

impl ChromaticityPoint {
    /// Creates a chromaticity point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the point as `[x, y]`, the layout smart-home APIs use for `xy_color`.
    #[inline]
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Returns `true` if both coordinates are finite.
    #[inline]
    pub const fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f32; 2]> for ChromaticityPoint {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(f32, f32)> for ChromaticityPoint {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl From<ChromaticityPoint> for [f32; 2] {
    fn from(point: ChromaticityPoint) -> Self {
        point.to_array()
    }
}

/// Clamps to `[0, 1]`, mapping NaN to `0.0`.
#[inline]
pub(crate) fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Wraps a hue angle into `[0, 360)`, mapping non-finite angles to `0.0`.
pub(crate) fn wrap_hue(hue: f32) -> f32 {
    if !hue.is_finite() {
        return 0.0;
    }

    let wrapped = RgbHue::<f32>::from_degrees(hue).into_positive_degrees();
    // values a hair below zero can round up to exactly 360
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
