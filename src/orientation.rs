//! Rotation helpers for surface walking.
//!
//! Converts a body's raw rotation into the two quantities the velocity mapper
//! needs: the [`Quadrant`] the body is facing into, which fixes the outward
//! sign of each axis, and its [`verticality`], a triangle wave that is `0` on
//! floors and ceilings and `1` on walls.

use glam::Vec2;
use thiserror::Error;

use crate::{FULL_TURN_DEGREES, QUADRANT_DEGREES, VERTICALITY_WINDOW_DEGREES};

/// Raised when a rotation cannot be assigned to any quadrant.
///
/// Wrapping keeps finite angles within `[0, 360]`, so this only surfaces for
/// non-finite input or a wrapping bug.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum OrientationError {
    /// The wrapped rotation produced a quadrant index outside `0..=4`.
    #[error("unexpected rotation value {0}")]
    UnexpectedRotation(f32),
}

/// Wraps `value` into `[0, length]`.
///
/// Matches the engine convention: the result is clamped rather than taken
/// modulo, so floating error on large inputs can land exactly on `length`.
///
/// # Examples
/// ```
/// use drakewalk::orientation::repeat;
/// assert!((repeat(370.0, 360.0) - 10.0).abs() < 1e-4);
/// assert!((repeat(-90.0, 360.0) - 270.0).abs() < 1e-4);
/// ```
#[must_use]
pub fn repeat(value: f32, length: f32) -> f32 {
    (value - (value / length).floor() * length).clamp(0.0, length)
}

/// Wraps a rotation in degrees into `[0, 360)`.
#[must_use]
pub fn normalize_rotation(degrees: f32) -> f32 {
    repeat(degrees, FULL_TURN_DEGREES)
}

/// The 90° sector a rotation falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// `[0, 90)`, also reached by a wrapped rotation of exactly 360.
    First,
    /// `[90, 180)`.
    Second,
    /// `[180, 270)`.
    Third,
    /// `[270, 360)`.
    Fourth,
}

impl Quadrant {
    /// Maps a quadrant index to a quadrant. Index `4` is the wrapped
    /// full-turn case and folds back onto [`Quadrant::First`].
    #[must_use]
    pub const fn from_index(index: i64) -> Option<Self> {
        match index {
            0 | 4 => Some(Self::First),
            1 => Some(Self::Second),
            2 => Some(Self::Third),
            3 => Some(Self::Fourth),
            _ => None,
        }
    }

    /// Finds the quadrant of an arbitrary rotation in degrees.
    ///
    /// # Errors
    /// Returns [`OrientationError::UnexpectedRotation`] when the wrapped
    /// rotation does not index a quadrant.
    ///
    /// # Examples
    /// ```
    /// use drakewalk::orientation::Quadrant;
    /// assert_eq!(Quadrant::try_from_rotation(100.0), Ok(Quadrant::Second));
    /// assert!(Quadrant::try_from_rotation(f32::NAN).is_err());
    /// ```
    pub fn try_from_rotation(degrees: f32) -> Result<Self, OrientationError> {
        let wrapped = normalize_rotation(degrees);
        if !wrapped.is_finite() {
            return Err(OrientationError::UnexpectedRotation(wrapped));
        }
        Self::from_index(quadrant_index(wrapped))
            .ok_or(OrientationError::UnexpectedRotation(wrapped))
    }

    /// Finds the quadrant of an arbitrary rotation in degrees.
    ///
    /// # Panics
    /// Panics when the rotation cannot be assigned a quadrant. Finite input
    /// always wraps into range, so reaching the panic means the caller fed a
    /// non-finite angle or wrapping is broken.
    #[must_use]
    pub fn from_rotation(degrees: f32) -> Self {
        match Self::try_from_rotation(degrees) {
            Ok(quadrant) => quadrant,
            Err(e) => panic!("{e}"),
        }
    }

    /// Outward direction of travel on the surface this quadrant faces.
    #[must_use]
    pub const fn sign_vector(self) -> Vec2 {
        match self {
            Self::First => Vec2::new(1.0, 1.0),
            Self::Second => Vec2::new(-1.0, 1.0),
            Self::Third => Vec2::new(-1.0, -1.0),
            Self::Fourth => Vec2::new(1.0, -1.0),
        }
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "Callers pass a finite angle wrapped into [0, 360], so the index is within 0..=4."
)]
fn quadrant_index(wrapped: f32) -> i64 {
    (wrapped / QUADRANT_DEGREES).floor() as i64
}

/// How close a rotation is to standing on a wall.
///
/// Returns `0.0` for a perfectly horizontal orientation (0°, 180°), `1.0` for
/// a perfectly vertical one (90°, 270°) and a linear ramp in between.
///
/// # Examples
/// ```
/// use drakewalk::orientation::verticality;
/// assert_eq!(verticality(0.0), 0.0);
/// assert_eq!(verticality(90.0), 1.0);
/// assert!((verticality(45.0) - 0.5).abs() < 1e-6);
/// ```
#[must_use]
pub fn verticality(degrees: f32) -> f32 {
    let pos = repeat(degrees, VERTICALITY_WINDOW_DEGREES) / VERTICALITY_WINDOW_DEGREES;
    if pos < 0.5 {
        pos * 2.0
    } else {
        2.0 * (1.0 - pos)
    }
}
