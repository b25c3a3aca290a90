//! Gamut triangles in CIE xy space.
//!
//! A [`GamutTriangle`] bounds the chromaticities a light or color space can
//! reproduce. Containment uses a barycentric sign test, so a point is only
//! accepted if it lies inside the actual triangle, not merely inside the
//! unit simplex.

use crate::types::ChromaticityPoint;

/// Tolerance for treating a point on an edge as inside, relative to the
/// triangle's doubled area.
const BOUNDARY_TOLERANCE: f32 = 1e-5;

/// Smallest accepted doubled triangle area.
const MIN_DOUBLE_AREA: f32 = 1e-6;

/// Errors raised when building a gamut or color space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InvalidGamut {
    /// A vertex or white point coordinate is NaN or infinite.
    NonFinite,

    /// The three primaries are collinear or coincident.
    Degenerate,

    /// The white point does not lie strictly inside the triangle.
    WhitePointOutside,
}

impl core::fmt::Display for InvalidGamut {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InvalidGamut::NonFinite => {
                write!(f, "invalid gamut: coordinates must be finite")
            }
            InvalidGamut::Degenerate => {
                write!(f, "invalid gamut: primaries must span a non-zero area")
            }
            InvalidGamut::WhitePointOutside => {
                write!(f, "invalid gamut: white point lies outside the primaries")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidGamut {}

/// The reproducible-color boundary of a device or color space.
///
/// Always holds three finite, non-collinear points. Use [`GamutTriangle::new`]
/// to build one from arbitrary primaries.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GamutTriangle {
    red: ChromaticityPoint,
    green: ChromaticityPoint,
    blue: ChromaticityPoint,
}

impl GamutTriangle {
    /// ITU-R BT.709 / sRGB primaries.
    pub const SRGB: Self = Self::builtin(
        ChromaticityPoint::new(0.64, 0.33),
        ChromaticityPoint::new(0.30, 0.60),
        ChromaticityPoint::new(0.15, 0.06),
    );

    /// Wide smart-light gamut, spanned by the named `Red`, `Green` and `Blue`
    /// presets.
    ///
    /// Matches the Philips Hue wide-gamut primaries to four decimal places.
    pub const WIDE: Self = Self::builtin(
        ChromaticityPoint::new(0.7006, 0.2993),
        ChromaticityPoint::new(0.1724, 0.7468),
        ChromaticityPoint::new(0.1357, 0.0399),
    );

    /// Creates a gamut triangle from its red, green and blue primaries.
    ///
    /// # Errors
    /// * `NonFinite` - A coordinate is NaN or infinite
    /// * `Degenerate` - The primaries do not span a triangle
    pub const fn new(
        red: ChromaticityPoint,
        green: ChromaticityPoint,
        blue: ChromaticityPoint,
    ) -> Result<Self, InvalidGamut> {
        if !(red.is_finite() && green.is_finite() && blue.is_finite()) {
            return Err(InvalidGamut::NonFinite);
        }

        if edge_sign(red, green, blue).abs() < MIN_DOUBLE_AREA {
            return Err(InvalidGamut::Degenerate);
        }

        Ok(Self { red, green, blue })
    }

    const fn builtin(
        red: ChromaticityPoint,
        green: ChromaticityPoint,
        blue: ChromaticityPoint,
    ) -> Self {
        match Self::new(red, green, blue) {
            Ok(gamut) => gamut,
            Err(_) => panic!("built-in gamut triangle is degenerate"),
        }
    }

    /// Red primary.
    #[inline]
    pub const fn red(&self) -> ChromaticityPoint {
        self.red
    }

    /// Green primary.
    #[inline]
    pub const fn green(&self) -> ChromaticityPoint {
        self.green
    }

    /// Blue primary.
    #[inline]
    pub const fn blue(&self) -> ChromaticityPoint {
        self.blue
    }

    /// Returns the vertices in red, green, blue order.
    #[inline]
    pub const fn vertices(&self) -> [ChromaticityPoint; 3] {
        [self.red, self.green, self.blue]
    }

    /// Returns the mean of the three primaries.
    pub const fn centroid(&self) -> ChromaticityPoint {
        ChromaticityPoint::new(
            (self.red.x + self.green.x + self.blue.x) / 3.0,
            (self.red.y + self.green.y + self.blue.y) / 3.0,
        )
    }

    /// Returns `true` if the point lies inside the triangle or on its boundary.
    ///
    /// The point is inside when it is on the same side of all three edges.
    /// Either vertex winding is accepted. Non-finite points are never inside.
    pub const fn contains(&self, point: ChromaticityPoint) -> bool {
        if !point.is_finite() {
            return false;
        }

        let d1 = edge_sign(point, self.red, self.green);
        let d2 = edge_sign(point, self.green, self.blue);
        let d3 = edge_sign(point, self.blue, self.red);

        // relative to the doubled area of the whole triangle
        let tolerance = BOUNDARY_TOLERANCE * edge_sign(self.red, self.green, self.blue).abs();
        let has_negative = d1 < -tolerance || d2 < -tolerance || d3 < -tolerance;
        let has_positive = d1 > tolerance || d2 > tolerance || d3 > tolerance;

        !(has_negative && has_positive)
    }

    /// Returns the point itself if inside, otherwise the nearest point on the boundary.
    ///
    /// Non-finite points map to the centroid.
    pub fn closest_point(&self, point: ChromaticityPoint) -> ChromaticityPoint {
        if !point.is_finite() {
            return self.centroid();
        }
        if self.contains(point) {
            return point;
        }

        let candidates = [
            closest_on_segment(point, self.red, self.green),
            closest_on_segment(point, self.green, self.blue),
            closest_on_segment(point, self.blue, self.red),
        ];

        let mut best = candidates[0];
        for candidate in &candidates[1..] {
            if distance_squared(point, *candidate) < distance_squared(point, best) {
                best = *candidate;
            }
        }
        best
    }
}

/// Which side of the line `a -> b` the point `p` falls on (doubled signed area).
const fn edge_sign(p: ChromaticityPoint, a: ChromaticityPoint, b: ChromaticityPoint) -> f32 {
    (p.x - b.x) * (a.y - b.y) - (a.x - b.x) * (p.y - b.y)
}

fn closest_on_segment(
    p: ChromaticityPoint,
    a: ChromaticityPoint,
    b: ChromaticityPoint,
) -> ChromaticityPoint {
    let ab_x = b.x - a.x;
    let ab_y = b.y - a.y;
    // non-zero: vertices of a valid triangle are distinct
    let length_squared = ab_x * ab_x + ab_y * ab_y;

    let t = (((p.x - a.x) * ab_x + (p.y - a.y) * ab_y) / length_squared).clamp(0.0, 1.0);
    ChromaticityPoint::new(a.x + ab_x * t, a.y + ab_y * t)
}

#[inline]
fn distance_squared(a: ChromaticityPoint, b: ChromaticityPoint) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}
