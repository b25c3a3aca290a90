//! Walks through the xy conversions a color-light control needs.
//!
//! Run with `cargo run --example xy_examples --features std`.

use xy_color::{
    ColorMode, D65, GamutTriangle, LightAction, LightCommand, LightState, NamedColor, hue_to_xy,
    is_within_gamut, xy_to_hue, xy_to_rgb, xy_to_saturation,
};

fn main() {
    println!("=== XY Color Conversion Examples ===");

    let red = hue_to_xy(0.0, 1.0);
    let green = hue_to_xy(120.0, 1.0);
    let blue = hue_to_xy(240.0, 1.0);
    let cyan = hue_to_xy(180.0, 0.8);

    println!("Red XY:   ({:.4}, {:.4})", red.x, red.y);
    println!("Green XY: ({:.4}, {:.4})", green.x, green.y);
    println!("Blue XY:  ({:.4}, {:.4})", blue.x, blue.y);
    println!("Cyan XY:  ({:.4}, {:.4})", cyan.x, cyan.y);

    println!(
        "Red HSV: hue {:.1}, saturation {:.3}",
        xy_to_hue(red.x, red.y),
        xy_to_saturation(red.x, red.y)
    );

    let red_preset = NamedColor::Red.xy();
    let rgb = xy_to_rgb(red_preset.x, red_preset.y, 1.0);
    println!("RGB from XY: ({}, {}, {})", rgb.red, rgb.green, rgb.blue);

    println!("Common XY Colors:");
    for color in NamedColor::ALL {
        let xy = color.xy();
        println!("  {:<11} ({:.4}, {:.4})", color.name(), xy.x, xy.y);
    }

    let green_preset = NamedColor::Green.xy();
    for (label, gamut) in [("sRGB", GamutTriangle::SRGB), ("wide", GamutTriangle::WIDE)] {
        println!(
            "Red in {label} gamut: {}",
            is_within_gamut(red_preset.x, red_preset.y, &gamut)
        );
        println!(
            "Green in {label} gamut: {}",
            is_within_gamut(green_preset.x, green_preset.y, &gamut)
        );
    }

    // A bulb reporting xy mode at brightness 200, showing D65 white
    let mut bulb = LightState::new(ColorMode::Xy)
        .with_supported_mode(ColorMode::ColorTemp)
        .with_supported_mode(ColorMode::Brightness)
        .with_brightness(200)
        .with_xy_color(D65)
        .with_power(true);
    println!("Bulb renders as {:?}", bulb.rgb());

    let command = LightCommand::new(
        "light.hue_color_bulb",
        LightAction::SetHueSaturation(xy_color::HueSaturation::new(180.0, 0.8)),
    );
    if let Some(xy) = command.xy_color() {
        println!("Setting XY color on {}: {:?}", command.entity_id, xy.to_array());
    }
    bulb.apply(command.action);
    println!("Bulb now renders as {:?}", bulb.rgb());
}
