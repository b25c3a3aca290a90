//! Color commands for smart lights.

use crate::colors::NamedColor;
use crate::converter::ColorConverter;
use crate::types::{ChromaticityPoint, HueSaturation};
use palette::Srgb;

/// Actions that change a light's color or power.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightAction {
    /// Set an xy chromaticity.
    SetXy(ChromaticityPoint),
    /// Set a hue and saturation.
    SetHueSaturation(HueSaturation),
    /// Set a named preset.
    SetNamed(NamedColor),
    /// Set an 8-bit RGB color. The brightest channel sets the brightness.
    SetRgb(Srgb<u8>),
    /// Set brightness (0-255). Zero turns the light off.
    SetBrightness(u8),
    /// Turn off.
    TurnOff,
}

impl LightAction {
    /// Resolves the action to the xy color an xy-mode light should display.
    ///
    /// The result is clamped into the wide smart-light gamut. Returns `None`
    /// for actions without a color, and for `SetRgb` black.
    pub fn xy_color(&self) -> Option<ChromaticityPoint> {
        let converter = ColorConverter::WIDE;
        let xy = match *self {
            LightAction::SetXy(point) => point,
            LightAction::SetHueSaturation(color) => converter.hue_saturation_to_xy(color),
            LightAction::SetNamed(color) => color.xy(),
            LightAction::SetRgb(rgb) => {
                let (xy, brightness) = converter.rgb_to_xy(rgb);
                if brightness <= 0.0 {
                    return None;
                }
                xy
            }
            LightAction::SetBrightness(_) | LightAction::TurnOff => return None,
        };
        Some(converter.gamut().closest_point(xy))
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LightAction {
    fn format(&self, f: defmt::Formatter) {
        match self {
            LightAction::SetXy(point) => defmt::write!(f, "SetXy({})", point),
            LightAction::SetHueSaturation(color) => defmt::write!(f, "SetHueSaturation({})", color),
            LightAction::SetNamed(color) => defmt::write!(f, "SetNamed({})", color),
            LightAction::SetRgb(rgb) => defmt::write!(
                f,
                "SetRgb({=u8}, {=u8}, {=u8})",
                rgb.red,
                rgb.green,
                rgb.blue
            ),
            LightAction::SetBrightness(level) => defmt::write!(f, "SetBrightness({=u8})", level),
            LightAction::TurnOff => defmt::write!(f, "TurnOff"),
        }
    }
}

/// Command targeting a specific light.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LightCommand<Id> {
    pub entity_id: Id,
    pub action: LightAction,
}

impl<Id> LightCommand<Id> {
    /// Creates command.
    pub fn new(entity_id: Id, action: LightAction) -> Self {
        Self { entity_id, action }
    }

    /// Resolves the command's color to xy. See [`LightAction::xy_color`].
    #[inline]
    pub fn xy_color(&self) -> Option<ChromaticityPoint> {
        self.action.xy_color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gamut::GamutTriangle;

    #[test]
    fn xy_outside_gamut_is_clamped() {
        let xy = LightAction::SetXy(ChromaticityPoint::new(0.05, 0.9))
            .xy_color()
            .unwrap();
        assert!(GamutTriangle::WIDE.contains(xy));
    }

    #[test]
    fn power_actions_have_no_color() {
        assert_eq!(LightAction::TurnOff.xy_color(), None);
        assert_eq!(LightAction::SetBrightness(128).xy_color(), None);
        assert_eq!(LightAction::SetRgb(Srgb::new(0, 0, 0)).xy_color(), None);
    }

    #[test]
    fn command_carries_entity_id() {
        let command = LightCommand::new("light.hue_color_bulb", LightAction::SetNamed(NamedColor::Orange));
        assert_eq!(command.entity_id, "light.hue_color_bulb");

        let xy = command.xy_color().unwrap();
        assert!((xy.x - 0.5614).abs() < 1e-4);
        assert!((xy.y - 0.4156).abs() < 1e-4);
    }
}
