//! Physics-body collaborator.
//!
//! The controller never owns position, rotation or velocity; it reads and
//! commands them through [`PhysicsBody`]. [`KinematicBody`] is a small
//! in-memory implementation used by the Bevy plugin, the headless CLI and the
//! tests.

use bevy::prelude::Component;
use glam::Vec2;
use serde::Serialize;

/// Body state owned by a physics engine.
///
/// `move_position` and `move_rotation` are kinematic commands: the engine
/// applies them during its next simulation step, so reads made in the same
/// step still observe the previous pose.
pub trait PhysicsBody {
    /// Rotation in degrees, unwrapped.
    fn rotation(&self) -> f32;
    /// World position.
    fn position(&self) -> Vec2;
    /// Linear velocity.
    fn velocity(&self) -> Vec2;
    /// Replaces the linear velocity immediately.
    fn set_velocity(&mut self, velocity: Vec2);
    /// Requests a move to `target` on the next simulation step.
    fn move_position(&mut self, target: Vec2);
    /// Requests a rotation to `degrees` on the next simulation step.
    fn move_rotation(&mut self, degrees: f32);
}

/// Minimal kinematic body with deferred move commands.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct KinematicBody {
    /// Rotation in degrees.
    pub rotation: f32,
    /// World position.
    pub position: Vec2,
    /// Linear velocity.
    pub velocity: Vec2,
    #[serde(skip)]
    pending_position: Option<Vec2>,
    #[serde(skip)]
    pending_rotation: Option<f32>,
}

impl KinematicBody {
    /// Creates a body at rest.
    #[must_use]
    pub const fn new(position: Vec2, rotation: f32) -> Self {
        Self {
            rotation,
            position,
            velocity: Vec2::ZERO,
            pending_position: None,
            pending_rotation: None,
        }
    }

    /// Returns the body with `velocity` set.
    #[must_use]
    pub const fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Advances the body by `dt` seconds.
    ///
    /// A pending `move_position` replaces velocity integration for this step;
    /// otherwise position advances by `velocity * dt`.
    pub fn integrate(&mut self, dt: f32) {
        self.position = match self.pending_position.take() {
            Some(target) => target,
            None => self.position + self.velocity * dt,
        };
        if let Some(degrees) = self.pending_rotation.take() {
            self.rotation = degrees;
        }
    }
}

impl PhysicsBody for KinematicBody {
    fn rotation(&self) -> f32 {
        self.rotation
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    fn move_position(&mut self, target: Vec2) {
        self.pending_position = Some(target);
    }

    fn move_rotation(&mut self, degrees: f32) {
        self.pending_rotation = Some(degrees);
    }
}
