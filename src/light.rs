//! Light state as reported by a smart-home integration.
//!
//! [`LightState`] mirrors the attributes a color light exposes: power,
//! brightness, the active color mode, the modes it supports and its current
//! xy color. Applying a [`LightAction`] updates it the way the light itself
//! would.

use crate::command::LightAction;
use crate::converter::{channel_to_u8, rgb_to_xy, xy_to_rgb};
use crate::types::{ChromaticityPoint, D65};
use heapless::Vec;
use palette::Srgb;

/// Capacity of the supported-modes list; one slot per [`ColorMode`] variant.
pub const MAX_COLOR_MODES: usize = 5;

/// How a light accepts color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorMode {
    /// CIE xy chromaticity.
    Xy,
    /// Correlated color temperature (white only).
    ColorTemp,
    /// Brightness only, fixed color.
    Brightness,
    /// Hue and saturation.
    HueSaturation,
    /// RGB channels.
    Rgb,
}

/// Snapshot of a color light.
#[derive(Debug, Clone, PartialEq)]
pub struct LightState {
    is_on: bool,
    brightness: u8,
    color_mode: ColorMode,
    supported_color_modes: Vec<ColorMode, MAX_COLOR_MODES>,
    xy_color: Option<ChromaticityPoint>,
}

impl LightState {
    /// Creates a light that is off, at full brightness, supporting only `color_mode`.
    pub fn new(color_mode: ColorMode) -> Self {
        let mut supported_color_modes = Vec::new();
        // cannot fail: capacity is at least one
        let _ = supported_color_modes.push(color_mode);

        Self {
            is_on: false,
            brightness: u8::MAX,
            color_mode,
            supported_color_modes,
            xy_color: None,
        }
    }

    /// Adds a supported color mode. Duplicates are ignored.
    pub fn with_supported_mode(mut self, mode: ColorMode) -> Self {
        if !self.supports(mode) {
            // cannot fail: capacity equals the number of distinct modes
            let _ = self.supported_color_modes.push(mode);
        }
        self
    }

    /// Sets the brightness (0-255).
    pub fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    /// Sets the current xy color.
    pub fn with_xy_color(mut self, xy: ChromaticityPoint) -> Self {
        self.xy_color = Some(xy);
        self
    }

    /// Sets the power state.
    pub fn with_power(mut self, is_on: bool) -> Self {
        self.is_on = is_on;
        self
    }

    /// Returns `true` if the light is on.
    #[inline]
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    /// Returns the brightness (0-255).
    #[inline]
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Returns the active color mode.
    #[inline]
    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    /// Returns the supported color modes in the order they were added.
    #[inline]
    pub fn supported_color_modes(&self) -> &[ColorMode] {
        &self.supported_color_modes
    }

    /// Returns the current xy color, if one has been set.
    #[inline]
    pub fn xy_color(&self) -> Option<ChromaticityPoint> {
        self.xy_color
    }

    /// Returns `true` if the light accepts the given color mode.
    pub fn supports(&self, mode: ColorMode) -> bool {
        self.supported_color_modes.contains(&mode)
    }

    /// Applies an action to the state.
    ///
    /// Color actions turn the light on and switch it to xy mode when
    /// supported. A brightness of zero turns it off, as does an RGB color
    /// whose linear peak rounds to level 0 (black, or darker than about
    /// `(7, 0, 0)`). The previous brightness is kept for the next turn-on.
    pub fn apply(&mut self, action: LightAction) {
        match action {
            LightAction::TurnOff | LightAction::SetBrightness(0) => {
                self.is_on = false;
            }
            LightAction::SetBrightness(level) => {
                self.brightness = level;
                self.is_on = true;
            }
            LightAction::SetRgb(rgb) => {
                // levels are linear, so colors dimmer than level 1 round to off
                let (_, peak) = rgb_to_xy(rgb);
                let level = channel_to_u8(peak);
                match action.xy_color() {
                    Some(xy) if level > 0 => {
                        self.set_color(xy);
                        self.brightness = level;
                    }
                    _ => self.is_on = false,
                }
            }
            LightAction::SetXy(_) | LightAction::SetHueSaturation(_) | LightAction::SetNamed(_) => {
                if let Some(xy) = action.xy_color() {
                    self.set_color(xy);
                }
            }
        }
    }

    /// Renders the state as 8-bit RGB.
    ///
    /// An off light is black. A light without an xy color renders the D65
    /// white point.
    pub fn rgb(&self) -> Srgb<u8> {
        if !self.is_on {
            return Srgb::new(0, 0, 0);
        }
        let xy = self.xy_color.unwrap_or(D65);
        xy_to_rgb(xy.x, xy.y, f32::from(self.brightness) / 255.0)
    }

    fn set_color(&mut self, xy: ChromaticityPoint) {
        self.xy_color = Some(xy);
        self.is_on = true;
        if self.supports(ColorMode::Xy) {
            self.color_mode = ColorMode::Xy;
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LightState {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "LightState {{ on: {=bool}, brightness: {=u8}, mode: {}, supported: {}, xy: {} }}",
            self.is_on,
            self.brightness,
            self.color_mode,
            self.supported_color_modes.as_slice(),
            self.xy_color
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_light_is_off_with_single_mode() {
        let state = LightState::new(ColorMode::Brightness);
        assert!(!state.is_on());
        assert_eq!(state.supported_color_modes(), &[ColorMode::Brightness]);
        assert_eq!(state.xy_color(), None);
    }

    #[test]
    fn duplicate_modes_are_ignored() {
        let state = LightState::new(ColorMode::Xy)
            .with_supported_mode(ColorMode::Xy)
            .with_supported_mode(ColorMode::ColorTemp)
            .with_supported_mode(ColorMode::ColorTemp);
        assert_eq!(state.supported_color_modes(), &[ColorMode::Xy, ColorMode::ColorTemp]);
    }

    #[test]
    fn all_modes_fit() {
        let state = LightState::new(ColorMode::Xy)
            .with_supported_mode(ColorMode::ColorTemp)
            .with_supported_mode(ColorMode::Brightness)
            .with_supported_mode(ColorMode::HueSaturation)
            .with_supported_mode(ColorMode::Rgb);
        assert_eq!(state.supported_color_modes().len(), MAX_COLOR_MODES);
    }
}
