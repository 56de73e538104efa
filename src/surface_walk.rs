//! Orientation-driven velocity remapping.
//!
//! Each fixed step the body's velocity is pointed along the surface it is
//! currently rotated onto: along the floor at 0°, up the wall at 90°, across
//! the ceiling at 180° and so on. The speed is kept; only the direction
//! changes.

use glam::Vec2;

use crate::orientation::{verticality, OrientationError, Quadrant};

/// Everything the remapping needs from one fixed step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceWalkInput {
    /// Body rotation in degrees; any value, wrapped internally.
    pub rotation_degrees: f32,
    /// Whether the drop button is held this step.
    pub drop_held: bool,
    /// Raw vertical component used while dropping.
    pub drop_speed: f32,
    /// Verticality at which the vertical sign follows the current velocity.
    pub critical_verticality: f32,
    /// Current vertical velocity, only its sign is used.
    pub current_velocity_y: f32,
    /// Current speed; becomes the magnitude of the result.
    pub current_speed: f32,
}

impl SurfaceWalkInput {
    /// Builds an input from the body's rotation and full velocity vector.
    #[must_use]
    pub fn from_velocity(
        rotation_degrees: f32,
        velocity: Vec2,
        drop_held: bool,
        drop_speed: f32,
        critical_verticality: f32,
    ) -> Self {
        Self {
            rotation_degrees,
            drop_held,
            drop_speed,
            critical_verticality,
            current_velocity_y: velocity.y,
            current_speed: velocity.length(),
        }
    }
}

/// Sign with zero counted as positive.
fn sign(value: f32) -> f32 {
    if value >= 0.0 {
        1.0
    } else {
        -1.0
    }
}

/// Direction before normalisation.
///
/// While dropping the `y` component is the drop speed itself rather than a
/// unit contribution; it still passes through normalisation afterwards.
///
/// # Errors
/// Propagates [`OrientationError`] when the rotation has no quadrant.
pub fn try_raw_direction(input: &SurfaceWalkInput) -> Result<Vec2, OrientationError> {
    let mut signs = Quadrant::try_from_rotation(input.rotation_degrees)?.sign_vector();
    let vert = verticality(input.rotation_degrees);

    // On a near-vertical surface keep whichever way the body is already going
    // so climbing and falling do not flip at the quadrant boundary.
    if vert >= input.critical_verticality {
        signs.y = sign(input.current_velocity_y);
    }

    let y = if input.drop_held {
        input.drop_speed
    } else {
        signs.y * vert
    };
    Ok(Vec2::new(signs.x * (1.0 - vert), y))
}

/// Direction before normalisation.
///
/// # Panics
/// Panics when the rotation cannot be assigned a quadrant, see
/// [`Quadrant::from_rotation`].
#[must_use]
pub fn raw_direction(input: &SurfaceWalkInput) -> Vec2 {
    match try_raw_direction(input) {
        Ok(direction) => direction,
        Err(e) => panic!("{e}"),
    }
}

/// Remaps the current speed onto the surface the body is rotated to.
///
/// # Errors
/// Propagates [`OrientationError`] when the rotation has no quadrant.
pub fn try_remap_velocity(input: &SurfaceWalkInput) -> Result<Vec2, OrientationError> {
    let direction = try_raw_direction(input)?;
    Ok(direction.try_normalize().unwrap_or(Vec2::ZERO) * input.current_speed)
}

/// Remaps the current speed onto the surface the body is rotated to.
///
/// The result has the same magnitude as `input.current_speed` unless the raw
/// direction degenerates to zero, which only happens while dropping with a
/// zero drop speed on a perfectly vertical surface.
///
/// # Panics
/// Panics when the rotation cannot be assigned a quadrant, see
/// [`Quadrant::from_rotation`].
///
/// # Examples
/// ```
/// use drakewalk::surface_walk::{remap_velocity, SurfaceWalkInput};
/// let input = SurfaceWalkInput {
///     rotation_degrees: 90.0,
///     drop_held: false,
///     drop_speed: -4.0,
///     critical_verticality: 0.9,
///     current_velocity_y: 1.0,
///     current_speed: 3.0,
/// };
/// let v = remap_velocity(&input);
/// assert!(v.x.abs() < 1e-6);
/// assert!((v.y - 3.0).abs() < 1e-6);
/// ```
#[must_use]
pub fn remap_velocity(input: &SurfaceWalkInput) -> Vec2 {
    match try_remap_velocity(input) {
        Ok(velocity) => velocity,
        Err(e) => panic!("{e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn input(rotation_degrees: f32) -> SurfaceWalkInput {
        SurfaceWalkInput {
            rotation_degrees,
            drop_held: false,
            drop_speed: -4.0,
            critical_verticality: 0.9,
            current_velocity_y: 0.0,
            current_speed: 2.0,
        }
    }

    #[test]
    fn level_ground_walks_right() {
        let v = remap_velocity(&input(0.0));
        assert_relative_eq!(v.x, 2.0);
        assert_relative_eq!(v.y, 0.0);
    }

    #[test]
    fn ceiling_walks_left() {
        let v = remap_velocity(&input(180.0));
        assert_relative_eq!(v.x, -2.0);
        assert_relative_eq!(v.y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn zero_vertical_velocity_counts_as_upward() {
        // 270° would point down by quadrant, but it is a wall.
        let direction = raw_direction(&input(270.0));
        assert_relative_eq!(direction.y, 1.0);
    }

    #[test]
    fn degenerate_drop_yields_zero_velocity() {
        let mut dropping = input(90.0);
        dropping.drop_held = true;
        dropping.drop_speed = 0.0;
        assert_eq!(remap_velocity(&dropping), Vec2::ZERO);
    }

    #[test]
    fn from_velocity_splits_speed_and_sign() {
        let built = SurfaceWalkInput::from_velocity(10.0, Vec2::new(3.0, -4.0), false, 1.0, 0.9);
        assert_relative_eq!(built.current_speed, 5.0);
        assert_relative_eq!(built.current_velocity_y, -4.0);
    }
}
