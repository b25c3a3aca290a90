#![no_std]
#![no_main]

use core::hint::black_box;
use cortex_m_rt::entry;
use palette::Srgb;
use panic_halt as _;
use xy_color::{
    ColorConverter, ColorMode, GamutTriangle, LightAction, LightState, NamedColor, hue_to_xy,
    rgb_to_xy, xy_to_hue, xy_to_rgb, xy_to_saturation,
};

// ============================================================================
// Conversion Paths
// ============================================================================

// black_box keeps inputs opaque so the optimizer can't const-fold the math away
#[inline(never)]
fn exercise_conversions() {
    let hue = black_box(210.0_f32);
    let saturation = black_box(0.8_f32);

    let xy = hue_to_xy(hue, saturation);
    black_box(xy_to_hue(xy.x, xy.y));
    black_box(xy_to_saturation(xy.x, xy.y));
    black_box(xy_to_rgb(xy.x, xy.y, black_box(0.5)));

    let (xy, brightness) = rgb_to_xy(black_box(Srgb::new(255, 128, 0)));
    black_box((xy, brightness));

    let srgb = black_box(ColorConverter::SRGB);
    black_box(srgb.hue_to_xy(hue, saturation));
    black_box(GamutTriangle::SRGB.closest_point(black_box(xy)));
}

// ============================================================================
// Light Model
// ============================================================================

#[inline(never)]
fn exercise_light_state() {
    let mut state = LightState::new(ColorMode::Xy)
        .with_supported_mode(ColorMode::Brightness)
        .with_brightness(black_box(200));

    state.apply(black_box(LightAction::SetNamed(NamedColor::WarmWhite)));
    black_box(state.rgb());

    if let Some(color) = NamedColor::from_name(black_box("cool white")) {
        state.apply(LightAction::SetNamed(color));
    }
    black_box(state);
}

#[entry]
fn main() -> ! {
    // Call test functions to ensure all code is included
    exercise_conversions();
    exercise_light_state();

    // Halt - this is a size analysis binary, not meant to run
    loop {
        cortex_m::asm::nop();
    }
}
