//! Utility helpers for tests.
pub mod fixtures;

use glam::Vec2;

/// Assert that two vectors agree component-wise within `tolerance`.
///
/// # Panics
/// Panics with both vectors in the message if any component differs by more
/// than `tolerance`.
pub fn assert_vec2_near(actual: Vec2, expected: Vec2, tolerance: f32) {
    assert!(
        (actual - expected).abs().max_element() <= tolerance,
        "expected {expected:?}, got {actual:?} (tolerance {tolerance})"
    );
}

/// `count` rotations spread evenly over `[0, 360)`, offset by half a step so
/// none lands exactly on a quadrant boundary.
///
/// # Examples
/// ```
/// use test_utils::sample_angles;
/// let angles = sample_angles(4);
/// assert_eq!(angles, vec![45.0, 135.0, 225.0, 315.0]);
/// ```
pub fn sample_angles(count: u16) -> Vec<f32> {
    let step = 360.0 / f32::from(count);
    (0..count)
        .map(|i| (f32::from(i) + 0.5) * step)
        .collect()
}
