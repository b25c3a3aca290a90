//! Shared test infrastructure for xy-color integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use xy_color::{ChromaticityPoint, Srgb};

// ============================================================================
// Approximate comparisons
// ============================================================================

pub fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

pub fn points_close(a: ChromaticityPoint, b: ChromaticityPoint, epsilon: f32) -> bool {
    approx_eq(a.x, b.x, epsilon) && approx_eq(a.y, b.y, epsilon)
}

/// Shortest angular distance between two hues, in degrees.
pub fn hue_distance(a: f32, b: f32) -> f32 {
    let diff = (a - b).abs() % 360.0;
    diff.min(360.0 - diff)
}

/// True if every channel differs by at most `tolerance`.
pub fn rgb_within(a: Srgb<u8>, b: Srgb<u8>, tolerance: u8) -> bool {
    a.red.abs_diff(b.red) <= tolerance
        && a.green.abs_diff(b.green) <= tolerance
        && a.blue.abs_diff(b.blue) <= tolerance
}

// ============================================================================
// Sample grids
// ============================================================================

/// Hues from 0 to 352.5 in 7.5 degree steps.
pub fn hue_samples() -> impl Iterator<Item = f32> {
    (0..48).map(|i| i as f32 * 7.5)
}

/// Saturations from 0.0 to 1.0 in 0.1 steps.
pub fn saturation_samples() -> impl Iterator<Item = f32> {
    (0..=10).map(|i| i as f32 / 10.0)
}
