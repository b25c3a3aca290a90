//! RGB color spaces defined by primaries and a white point.
//!
//! An [`RgbSpace`] carries the matrices between linear RGB and CIE XYZ. They
//! are derived from the chromaticities alone, so the built-in spaces are
//! computed entirely at compile time.

use crate::gamut::{GamutTriangle, InvalidGamut};
use crate::types::{ChromaticityPoint, D65};

type Matrix3 = [[f32; 3]; 3];

/// An RGB color space: a gamut triangle, a white point and the derived matrices.
///
/// Linear RGB `(1, 1, 1)` maps to the white point at luminance `Y = 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RgbSpace {
    gamut: GamutTriangle,
    white_point: ChromaticityPoint,
    rgb_to_xyz: Matrix3,
    xyz_to_rgb: Matrix3,
}

impl RgbSpace {
    /// sRGB primaries with a D65 white point.
    pub const SRGB: Self = Self::builtin(GamutTriangle::SRGB, D65);

    /// Wide-gamut smart-light primaries with a D65 white point.
    pub const WIDE: Self = Self::builtin(GamutTriangle::WIDE, D65);

    /// Builds a color space from its primaries and white point.
    ///
    /// # Errors
    /// * `NonFinite` - The white point has a NaN or infinite coordinate
    /// * `WhitePointOutside` - The white point is not strictly inside the gamut
    /// * `Degenerate` - The primaries cannot be inverted
    pub const fn new(
        gamut: GamutTriangle,
        white_point: ChromaticityPoint,
    ) -> Result<Self, InvalidGamut> {
        if !white_point.is_finite() {
            return Err(InvalidGamut::NonFinite);
        }
        if white_point.y <= 0.0 {
            return Err(InvalidGamut::WhitePointOutside);
        }

        // Columns are the primaries' (x, y, z) with the 1/y factor left to the scale.
        let [r, g, b] = gamut.vertices();
        let primaries = [
            [r.x, g.x, b.x],
            [r.y, g.y, b.y],
            [1.0 - r.x - r.y, 1.0 - g.x - g.y, 1.0 - b.x - b.y],
        ];
        let inverse_primaries = match invert(primaries) {
            Some(m) => m,
            None => return Err(InvalidGamut::Degenerate),
        };

        let white_xyz = [
            white_point.x / white_point.y,
            1.0,
            (1.0 - white_point.x - white_point.y) / white_point.y,
        ];
        let scale = mul_vec(&inverse_primaries, white_xyz);
        if scale[0] <= 0.0 || scale[1] <= 0.0 || scale[2] <= 0.0 {
            return Err(InvalidGamut::WhitePointOutside);
        }

        let mut rgb_to_xyz = primaries;
        let mut row = 0;
        while row < 3 {
            let mut col = 0;
            while col < 3 {
                rgb_to_xyz[row][col] *= scale[col];
                col += 1;
            }
            row += 1;
        }

        let xyz_to_rgb = match invert(rgb_to_xyz) {
            Some(m) => m,
            None => return Err(InvalidGamut::Degenerate),
        };

        Ok(Self {
            gamut,
            white_point,
            rgb_to_xyz,
            xyz_to_rgb,
        })
    }

    const fn builtin(gamut: GamutTriangle, white_point: ChromaticityPoint) -> Self {
        match Self::new(gamut, white_point) {
            Ok(space) => space,
            Err(_) => panic!("built-in color space is invalid"),
        }
    }

    /// Returns the gamut triangle spanned by the primaries.
    #[inline]
    pub const fn gamut(&self) -> &GamutTriangle {
        &self.gamut
    }

    /// Returns the white point chromaticity.
    #[inline]
    pub const fn white_point(&self) -> ChromaticityPoint {
        self.white_point
    }

    /// Returns the linear RGB to XYZ matrix (row-major).
    #[inline]
    pub const fn rgb_to_xyz_matrix(&self) -> [[f32; 3]; 3] {
        self.rgb_to_xyz
    }

    /// Returns the XYZ to linear RGB matrix (row-major).
    #[inline]
    pub const fn xyz_to_rgb_matrix(&self) -> [[f32; 3]; 3] {
        self.xyz_to_rgb
    }

    /// Maps linear RGB to CIE XYZ.
    #[inline]
    pub const fn linear_to_xyz(&self, rgb: [f32; 3]) -> [f32; 3] {
        mul_vec(&self.rgb_to_xyz, rgb)
    }

    /// Maps CIE XYZ to linear RGB. Out-of-gamut input yields negative channels.
    #[inline]
    pub const fn xyz_to_linear(&self, xyz: [f32; 3]) -> [f32; 3] {
        mul_vec(&self.xyz_to_rgb, xyz)
    }
}

const fn mul_vec(m: &Matrix3, v: [f32; 3]) -> [f32; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// Inverts a 3x3 matrix by cofactor expansion.
const fn invert(m: Matrix3) -> Option<Matrix3> {
    let c00 = m[1][1] * m[2][2] - m[1][2] * m[2][1];
    let c01 = m[1][2] * m[2][0] - m[1][0] * m[2][2];
    let c02 = m[1][0] * m[2][1] - m[1][1] * m[2][0];

    let det = m[0][0] * c00 + m[0][1] * c01 + m[0][2] * c02;
    if !det.is_finite() || det.abs() < 1e-9 {
        return None;
    }
    let inv = 1.0 / det;

    Some([
        [
            c00 * inv,
            (m[0][2] * m[2][1] - m[0][1] * m[2][2]) * inv,
            (m[0][1] * m[1][2] - m[0][2] * m[1][1]) * inv,
        ],
        [
            c01 * inv,
            (m[0][0] * m[2][2] - m[0][2] * m[2][0]) * inv,
            (m[0][2] * m[1][0] - m[0][0] * m[1][2]) * inv,
        ],
        [
            c02 * inv,
            (m[0][1] * m[2][0] - m[0][0] * m[2][1]) * inv,
            (m[0][0] * m[1][1] - m[0][1] * m[1][0]) * inv,
        ],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32, epsilon: f32) -> bool {
        (a - b).abs() < epsilon
    }

    #[test]
    fn srgb_matrix_matches_published_values() {
        let m = RgbSpace::SRGB.rgb_to_xyz_matrix();
        let expected = [
            [0.4124, 0.3576, 0.1805],
            [0.2126, 0.7152, 0.0722],
            [0.0193, 0.1192, 0.9505],
        ];
        for row in 0..3 {
            for col in 0..3 {
                assert!(close(m[row][col], expected[row][col], 2e-3));
            }
        }
    }

    #[test]
    fn white_maps_to_unit_rgb() {
        for space in [RgbSpace::SRGB, RgbSpace::WIDE] {
            let white = space.white_point();
            let rgb = space.xyz_to_linear([white.x / white.y, 1.0, (1.0 - white.x - white.y) / white.y]);
            for channel in rgb {
                assert!(close(channel, 1.0, 1e-4));
            }
        }
    }

    #[test]
    fn matrices_are_inverse() {
        let space = RgbSpace::WIDE;
        let xyz = space.linear_to_xyz([0.2, 0.5, 0.8]);
        let rgb = space.xyz_to_linear(xyz);
        assert!(close(rgb[0], 0.2, 1e-4));
        assert!(close(rgb[1], 0.5, 1e-4));
        assert!(close(rgb[2], 0.8, 1e-4));
    }

    #[test]
    fn luminance_row_sums_to_one() {
        let m = RgbSpace::WIDE.rgb_to_xyz_matrix();
        assert!(close(m[1][0] + m[1][1] + m[1][2], 1.0, 1e-4));
    }

    #[test]
    fn rejects_white_point_outside_gamut() {
        let result = RgbSpace::new(GamutTriangle::SRGB, ChromaticityPoint::new(0.7, 0.25));
        assert_eq!(result, Err(InvalidGamut::WhitePointOutside));
    }

    #[test]
    fn rejects_non_finite_white_point() {
        let result = RgbSpace::new(GamutTriangle::SRGB, ChromaticityPoint::new(f32::NAN, 0.3));
        assert_eq!(result, Err(InvalidGamut::NonFinite));
    }
}
