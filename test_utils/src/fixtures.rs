//! Convenience constructors for controller tests.

use drakewalk::surface_walk::SurfaceWalkInput;
use drakewalk::{Contact, PlatformerConfig, PlatformerController};
use glam::Vec2;

/// Contact with the given normal.
///
/// # Examples
/// ```
/// use test_utils::fixtures::contact;
/// let c = contact(0.0, 1.0);
/// assert_eq!(c.normal.y, 1.0);
/// ```
pub fn contact(x: f32, y: f32) -> Contact {
    Contact::new(Vec2::new(x, y))
}

/// Surface-walk input with no drop, a critical verticality of `0.9` and an
/// upward vertical velocity.
///
/// # Examples
/// ```
/// use test_utils::fixtures::walk_input;
/// let input = walk_input(30.0, 2.0);
/// assert_eq!(input.rotation_degrees, 30.0);
/// assert!(!input.drop_held);
/// ```
pub fn walk_input(rotation_degrees: f32, speed: f32) -> SurfaceWalkInput {
    SurfaceWalkInput {
        rotation_degrees,
        drop_held: false,
        drop_speed: -4.0,
        critical_verticality: 0.9,
        current_velocity_y: 1.0,
        current_speed: speed,
    }
}

/// Controller built from `config`.
///
/// # Panics
/// Panics if the config is rejected.
pub fn controller_with(config: PlatformerConfig) -> PlatformerController {
    PlatformerController::new(config).unwrap_or_else(|e| panic!("config rejected: {e}"))
}

/// Controller with default tuning.
///
/// # Panics
/// Panics if the default config is rejected.
pub fn default_controller() -> PlatformerController {
    controller_with(PlatformerConfig::default())
}
