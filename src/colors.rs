//! Named preset colors.
//!
//! A fixed table of common smart-light colors as CIE xy chromaticities. The
//! table is `const` data; nothing in it can be modified at runtime.

use crate::converter::xy_to_rgb;
use crate::types::ChromaticityPoint;
use palette::Srgb;

/// A named preset color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NamedColor {
    WarmWhite,
    CoolWhite,
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Purple,
    Pink,
}

impl NamedColor {
    /// Every preset, in table order.
    pub const ALL: [NamedColor; 10] = [
        NamedColor::WarmWhite,
        NamedColor::CoolWhite,
        NamedColor::Red,
        NamedColor::Orange,
        NamedColor::Yellow,
        NamedColor::Green,
        NamedColor::Cyan,
        NamedColor::Blue,
        NamedColor::Purple,
        NamedColor::Pink,
    ];

    /// Returns the preset's chromaticity.
    pub const fn xy(self) -> ChromaticityPoint {
        let (x, y) = match self {
            NamedColor::WarmWhite => (0.4209, 0.3761),
            NamedColor::CoolWhite => (0.3127, 0.3290),
            NamedColor::Red => (0.7006, 0.2993),
            NamedColor::Orange => (0.5614, 0.4156),
            NamedColor::Yellow => (0.4316, 0.5016),
            NamedColor::Green => (0.1724, 0.7468),
            NamedColor::Cyan => (0.1532, 0.3297),
            NamedColor::Blue => (0.1357, 0.0399),
            NamedColor::Purple => (0.2451, 0.1056),
            NamedColor::Pink => (0.3960, 0.2151),
        };
        ChromaticityPoint::new(x, y)
    }

    /// Returns the human-readable name, e.g. `"Warm White"`.
    pub const fn name(self) -> &'static str {
        match self {
            NamedColor::WarmWhite => "Warm White",
            NamedColor::CoolWhite => "Cool White",
            NamedColor::Red => "Red",
            NamedColor::Orange => "Orange",
            NamedColor::Yellow => "Yellow",
            NamedColor::Green => "Green",
            NamedColor::Cyan => "Cyan",
            NamedColor::Blue => "Blue",
            NamedColor::Purple => "Purple",
            NamedColor::Pink => "Pink",
        }
    }

    /// Looks up a preset by name.
    ///
    /// Matching ignores ASCII case as well as spaces, underscores and hyphens,
    /// so `"warm white"`, `"WarmWhite"` and `"warm_white"` all resolve.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|color| names_match(color.name(), name))
    }

    /// Renders the preset as 8-bit RGB at the given brightness.
    #[inline]
    pub fn rgb(self, brightness: f32) -> Srgb<u8> {
        let xy = self.xy();
        xy_to_rgb(xy.x, xy.y, brightness)
    }
}

impl core::fmt::Display for NamedColor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

fn names_match(canonical: &str, query: &str) -> bool {
    fn normalized(s: &str) -> impl Iterator<Item = u8> + '_ {
        s.bytes()
            .filter(|&b| !matches!(b, b' ' | b'_' | b'-'))
            .map(|b| b.to_ascii_lowercase())
    }
    normalized(canonical).eq(normalized(query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case_and_separators() {
        assert_eq!(NamedColor::from_name("Warm White"), Some(NamedColor::WarmWhite));
        assert_eq!(NamedColor::from_name("warmwhite"), Some(NamedColor::WarmWhite));
        assert_eq!(NamedColor::from_name("COOL_WHITE"), Some(NamedColor::CoolWhite));
        assert_eq!(NamedColor::from_name("pink"), Some(NamedColor::Pink));
    }

    #[test]
    fn lookup_rejects_unknown_names() {
        assert_eq!(NamedColor::from_name("Magenta"), None);
        assert_eq!(NamedColor::from_name(""), None);
        assert_eq!(NamedColor::from_name("Red2"), None);
    }

    #[test]
    fn every_preset_round_trips_through_its_name() {
        for color in NamedColor::ALL {
            assert_eq!(NamedColor::from_name(color.name()), Some(color));
        }
    }
}
