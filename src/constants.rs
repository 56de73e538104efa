//! Default tuning values and angle constants.
//!
//! The defaults seed [`PlatformerConfig::default`](crate::config::PlatformerConfig)
//! and any field omitted from a JSON config file.

/// Horizontal walking speed while grounded, units per second.
pub const DEFAULT_MOVE_SPEED: f32 = 4.0;
/// Minimum up component of a contact normal that counts as standing on it.
pub const DEFAULT_GROUNDED_THRESHOLD: f32 = 0.5;
/// Degrees per second of in-air rotation at full horizontal input.
pub const DEFAULT_TURN_SPEED: f32 = 180.0;
/// Raw vertical component substituted while the drop button is held.
pub const DEFAULT_DROP_SPEED: f32 = -4.0;
/// Verticality at or above which the vertical direction follows the current
/// velocity instead of the quadrant.
pub const DEFAULT_CRITICAL_VERTICALITY: f32 = 0.9;
/// Seconds that must pass after a jump before another can start.
pub const DEFAULT_JUMP_DELAY: f32 = 0.5;
/// Default jump arc as `(time, height offset per fixed step)` keys.
pub const DEFAULT_JUMP_KEYS: [(f32, f32); 3] = [(0.0, 0.0), (0.15, 0.12), (0.3, 0.0)];

/// Degrees in a full turn.
pub const FULL_TURN_DEGREES: f32 = 360.0;
/// Degrees spanned by each rotation quadrant.
pub const QUADRANT_DEGREES: f32 = 90.0;
/// Window of the verticality triangle wave, from one horizontal to the next.
pub const VERTICALITY_WINDOW_DEGREES: f32 = 180.0;

/// Fixed simulation step used by the headless CLI.
pub const FIXED_DELTA_TIME: f32 = 1.0 / 50.0;
