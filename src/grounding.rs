//! Grounded/airborne tracking from collision contacts.

use glam::Vec2;
use log::debug;
use serde::Serialize;

/// Whether the body is standing on something.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum GroundState {
    /// Touching a surface whose normal points sufficiently upwards.
    Grounded,
    /// Not standing on anything.
    #[default]
    Airborne,
}

impl GroundState {
    /// Returns `true` for [`GroundState::Grounded`].
    #[must_use]
    pub const fn is_grounded(self) -> bool {
        matches!(self, Self::Grounded)
    }
}

/// A single contact point reported by a collision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Surface normal at the contact, pointing away from the other collider.
    pub normal: Vec2,
}

impl Contact {
    /// Creates a contact from its normal.
    #[must_use]
    pub const fn new(normal: Vec2) -> Self {
        Self { normal }
    }
}

/// Two-state grounded tracker.
///
/// Any contact whose normal has an up component of at least `threshold`
/// grounds the body. Leaving a collision always makes it airborne, even if
/// another collision is still touching; the next contact re-grounds it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GroundTracker {
    state: GroundState,
}

impl GroundTracker {
    /// Creates an airborne tracker.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: GroundState::Airborne,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> GroundState {
        self.state
    }

    /// Applies the contacts of a newly started collision.
    ///
    /// Contacts that fail the threshold never unground the body.
    pub fn collision_enter<I>(&mut self, contacts: I, threshold: f32)
    where
        I: IntoIterator<Item = Contact>,
    {
        if contacts.into_iter().any(|c| c.normal.y >= threshold) {
            if !self.state.is_grounded() {
                debug!("grounded by contact (threshold {threshold})");
            }
            self.state = GroundState::Grounded;
        }
    }

    /// Applies the end of a collision.
    pub fn collision_exit(&mut self) {
        if self.state.is_grounded() {
            debug!("left ground");
        }
        self.state = GroundState::Airborne;
    }
}
