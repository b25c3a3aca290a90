//! Integration tests for colors module

mod common;
use common::*;

use xy_color::{NamedColor, Srgb, xy_to_hue};

#[test]
fn table_matches_reference_values() {
    let expected: [(NamedColor, f32, f32); 10] = [
        (NamedColor::WarmWhite, 0.4209, 0.3761),
        (NamedColor::CoolWhite, 0.3127, 0.3290),
        (NamedColor::Red, 0.7006, 0.2993),
        (NamedColor::Orange, 0.5614, 0.4156),
        (NamedColor::Yellow, 0.4316, 0.5016),
        (NamedColor::Green, 0.1724, 0.7468),
        (NamedColor::Cyan, 0.1532, 0.3297),
        (NamedColor::Blue, 0.1357, 0.0399),
        (NamedColor::Purple, 0.2451, 0.1056),
        (NamedColor::Pink, 0.3960, 0.2151),
    ];
    for (color, x, y) in expected {
        assert_eq!(color.xy().to_array(), [x, y], "{}", color);
    }
}

#[test]
fn all_lists_each_preset_once() {
    for (i, a) in NamedColor::ALL.iter().enumerate() {
        for b in &NamedColor::ALL[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn display_uses_name() {
    assert_eq!(NamedColor::WarmWhite.to_string(), "Warm White");
    assert_eq!(NamedColor::Purple.to_string(), "Purple");
}

#[test]
fn cool_white_renders_white() {
    assert!(rgb_within(NamedColor::CoolWhite.rgb(1.0), Srgb::new(255, 255, 255), 1));
}

#[test]
fn warm_white_leans_red() {
    let rgb = NamedColor::WarmWhite.rgb(1.0);
    assert_eq!(rgb.red, 255);
    assert!(rgb.blue < rgb.green);
}

#[test]
fn primary_presets_render_primaries() {
    assert!(rgb_within(NamedColor::Red.rgb(1.0), Srgb::new(255, 0, 0), 1));
    assert!(rgb_within(NamedColor::Green.rgb(1.0), Srgb::new(0, 255, 0), 1));
    assert!(rgb_within(NamedColor::Blue.rgb(1.0), Srgb::new(0, 0, 255), 1));
}

#[test]
fn preset_hues_follow_color_wheel() {
    let hue_of = |color: NamedColor| {
        let xy = color.xy();
        xy_to_hue(xy.x, xy.y)
    };
    assert!(hue_distance(hue_of(NamedColor::Red), 0.0) < 1.0);
    assert!(hue_distance(hue_of(NamedColor::Green), 120.0) < 1.0);
    assert!(hue_distance(hue_of(NamedColor::Blue), 240.0) < 1.0);

    let orange = hue_of(NamedColor::Orange);
    assert!(orange > 0.0 && orange < 60.0);
}
