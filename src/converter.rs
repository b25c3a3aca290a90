//! Conversions between hue/saturation, CIE xy chromaticity and RGB.
//!
//! All conversions are pure and total: out-of-range inputs are clamped, never
//! rejected. Points outside the converter's gamut are moved to the nearest
//! boundary point before inverting, which shifts out-of-gamut colors toward
//! the closest reproducible one.
//!
//! RGB values use the piecewise sRGB transfer curve on top of the space's
//! own primaries. At the boundary RGB is `Srgb<u8>` (0-255 per channel).

use crate::gamut::GamutTriangle;
use crate::space::RgbSpace;
use crate::types::{ChromaticityPoint, HueSaturation, clamp_unit};
use palette::{FromColor, Hsv, LinSrgb, Srgb};

/// Converts colors within a single [`RgbSpace`].
///
/// The default converter uses [`RgbSpace::WIDE`], whose primaries match the
/// named `Red`, `Green` and `Blue` presets.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorConverter {
    space: RgbSpace,
}

impl Default for ColorConverter {
    fn default() -> Self {
        Self::WIDE
    }
}

impl ColorConverter {
    /// Converter over the wide smart-light gamut.
    pub const WIDE: Self = Self::new(RgbSpace::WIDE);

    /// Converter over the sRGB gamut.
    pub const SRGB: Self = Self::new(RgbSpace::SRGB);

    /// Creates a converter for the given color space.
    #[inline]
    pub const fn new(space: RgbSpace) -> Self {
        Self { space }
    }

    /// Returns the color space this converter works in.
    #[inline]
    pub const fn space(&self) -> &RgbSpace {
        &self.space
    }

    /// Returns the gamut this converter clamps to.
    #[inline]
    pub const fn gamut(&self) -> &GamutTriangle {
        self.space.gamut()
    }

    /// Converts a hue (degrees) and saturation to a chromaticity point.
    ///
    /// The hue is wrapped modulo 360 and the saturation clamped to `[0, 1]`.
    /// The color is taken at full value, so the result lies inside the gamut
    /// and satisfies `x + y <= 1`.
    pub fn hue_to_xy(&self, hue: f32, saturation: f32) -> ChromaticityPoint {
        self.hue_saturation_to_xy(HueSaturation::new(hue, saturation))
    }

    /// Converts a [`HueSaturation`] to a chromaticity point.
    pub fn hue_saturation_to_xy(&self, color: HueSaturation) -> ChromaticityPoint {
        let hsv: Hsv = Hsv::new(color.hue, clamp_unit(color.saturation), 1.0);
        let rgb: Srgb = Srgb::from_color(hsv);
        self.linear_to_xy(rgb.into_linear())
    }

    /// Returns the hue (degrees, `[0, 360)`) of a chromaticity point.
    ///
    /// Achromatic points have no defined hue and report `0.0`.
    pub fn xy_to_hue(&self, x: f32, y: f32) -> f32 {
        self.xy_to_hue_saturation(x, y).hue
    }

    /// Returns the saturation (`[0, 1]`) of a chromaticity point.
    pub fn xy_to_saturation(&self, x: f32, y: f32) -> f32 {
        self.xy_to_hue_saturation(x, y).saturation
    }

    /// Converts a chromaticity point to hue and saturation.
    ///
    /// The point is lifted to full brightness in this space, gamma-encoded and
    /// read back as HSV.
    pub fn xy_to_hue_saturation(&self, x: f32, y: f32) -> HueSaturation {
        let linear = self.xy_to_linear(ChromaticityPoint::new(x, y));
        let rgb: Srgb = Srgb::from_linear(linear);
        let hsv: Hsv = Hsv::from_color(rgb);
        HueSaturation::new(hsv.hue.into_positive_degrees(), hsv.saturation)
    }

    /// Converts a chromaticity point and brightness to 8-bit RGB.
    ///
    /// `brightness` (clamped to `[0, 1]`) scales linear light, so `1.0` drives
    /// the brightest channel to 255 and `0.0` yields black. Every channel of
    /// the result is in range.
    pub fn xy_to_rgb(&self, x: f32, y: f32, brightness: f32) -> Srgb<u8> {
        let linear = self.xy_to_linear(ChromaticityPoint::new(x, y));
        let brightness = clamp_unit(brightness);
        let scaled = LinSrgb::new(
            linear.red * brightness,
            linear.green * brightness,
            linear.blue * brightness,
        );
        let rgb: Srgb = Srgb::from_linear(scaled);
        quantize(rgb)
    }

    /// Converts a chromaticity point to 8-bit RGB at full brightness.
    ///
    /// Same as [`xy_to_rgb`](Self::xy_to_rgb) with `brightness = 1.0`.
    #[inline]
    pub fn xy_to_rgb_full(&self, x: f32, y: f32) -> Srgb<u8> {
        self.xy_to_rgb(x, y, 1.0)
    }

    /// Converts 8-bit RGB to a chromaticity point and brightness.
    ///
    /// The brightness is the largest linear channel, so passing both values to
    /// [`xy_to_rgb`](Self::xy_to_rgb) reproduces `rgb`. Black has no
    /// chromaticity and reports the white point at brightness `0.0`.
    pub fn rgb_to_xy(&self, rgb: Srgb<u8>) -> (ChromaticityPoint, f32) {
        let linear: LinSrgb = rgb.into_format::<f32>().into_linear();
        let peak = linear.red.max(linear.green).max(linear.blue);
        if peak <= 0.0 {
            return (self.space.white_point(), 0.0);
        }
        (self.linear_to_xy(linear), peak)
    }

    /// Returns `true` if the point lies within this converter's gamut.
    #[inline]
    pub fn is_within_gamut(&self, x: f32, y: f32) -> bool {
        self.space.gamut().contains(ChromaticityPoint::new(x, y))
    }

    fn linear_to_xy(&self, linear: LinSrgb) -> ChromaticityPoint {
        let [big_x, big_y, big_z] =
            self.space
                .linear_to_xyz([linear.red, linear.green, linear.blue]);
        let sum = big_x + big_y + big_z;
        if sum <= f32::EPSILON {
            return self.space.white_point();
        }

        let x = clamp_unit(big_x / sum);
        let y = (big_y / sum).clamp(0.0, 1.0 - x);
        ChromaticityPoint::new(x, y)
    }

    /// Maps a chromaticity to linear RGB whose largest channel is 1.
    fn xy_to_linear(&self, point: ChromaticityPoint) -> LinSrgb {
        let white = LinSrgb::new(1.0, 1.0, 1.0);
        if !point.is_finite() {
            return white;
        }

        let point = self.space.gamut().closest_point(point);
        let y = point.y.max(MIN_Y);
        let xyz = [point.x / y, 1.0, (1.0 - point.x - point.y) / y];

        let [r, g, b] = self.space.xyz_to_linear(xyz);
        let (r, g, b) = (r.max(0.0), g.max(0.0), b.max(0.0));
        let peak = r.max(g).max(b);
        if peak <= f32::EPSILON {
            return white;
        }

        LinSrgb::new(r / peak, g / peak, b / peak)
    }
}

/// Floor for `y` when lifting to XYZ; gamut vertices may sit on `y = 0`.
const MIN_Y: f32 = 1e-6;

fn quantize(rgb: Srgb) -> Srgb<u8> {
    Srgb::new(
        channel_to_u8(rgb.red),
        channel_to_u8(rgb.green),
        channel_to_u8(rgb.blue),
    )
}

#[inline]
pub(crate) fn channel_to_u8(channel: f32) -> u8 {
    // round half up; the clamp keeps the cast in range
    (clamp_unit(channel) * 255.0 + 0.5) as u8
}

/// Converts hue (degrees) and saturation to xy in the wide smart-light gamut.
#[inline]
pub fn hue_to_xy(hue: f32, saturation: f32) -> ChromaticityPoint {
    ColorConverter::WIDE.hue_to_xy(hue, saturation)
}

/// Returns the hue of a chromaticity point in the wide smart-light gamut.
#[inline]
pub fn xy_to_hue(x: f32, y: f32) -> f32 {
    ColorConverter::WIDE.xy_to_hue(x, y)
}

/// Returns the saturation of a chromaticity point in the wide smart-light gamut.
#[inline]
pub fn xy_to_saturation(x: f32, y: f32) -> f32 {
    ColorConverter::WIDE.xy_to_saturation(x, y)
}

/// Converts a chromaticity point to 8-bit RGB.
///
/// Pass `1.0` as `brightness` for full brightness, or use
/// [`ColorConverter::xy_to_rgb_full`].
#[inline]
pub fn xy_to_rgb(x: f32, y: f32, brightness: f32) -> Srgb<u8> {
    ColorConverter::WIDE.xy_to_rgb(x, y, brightness)
}

/// Converts 8-bit RGB to a chromaticity point and linear brightness.
#[inline]
pub fn rgb_to_xy(rgb: Srgb<u8>) -> (ChromaticityPoint, f32) {
    ColorConverter::WIDE.rgb_to_xy(rgb)
}

/// Returns `true` if `(x, y)` lies inside `triangle`, boundary included.
#[inline]
pub fn is_within_gamut(x: f32, y: f32, triangle: &GamutTriangle) -> bool {
    triangle.contains(ChromaticityPoint::new(x, y))
}
