//! The platformer controller.
//!
//! [`PlatformerController`] owns only the state the engine does not: the
//! jump timers and the grounded flag. Everything else is read from and
//! written back to a [`PhysicsBody`] each fixed step.

use glam::Vec2;
use log::trace;

use crate::body::PhysicsBody;
use crate::config::{ConfigError, PlatformerConfig};
use crate::grounding::{Contact, GroundState, GroundTracker};
use crate::input::InputFrame;
use crate::jump::{HeightCurve, JumpTimer, KeyframeCurve};
use crate::surface_walk::{remap_velocity, SurfaceWalkInput};

/// Drives one body from sampled input, contacts and a jump curve.
#[derive(Debug, Clone)]
pub struct PlatformerController<C = KeyframeCurve> {
    config: PlatformerConfig,
    curve: C,
    jump: JumpTimer,
    ground: GroundTracker,
}

impl PlatformerController<KeyframeCurve> {
    /// Validates `config` and builds a controller using its keyframe curve.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] when the config fails validation.
    pub fn new(config: PlatformerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let curve = config.curve()?;
        Ok(Self::with_curve(config, curve))
    }
}

impl<C: HeightCurve> PlatformerController<C> {
    /// Builds a controller with a custom jump curve.
    ///
    /// `config.jump_curve` is ignored; `curve` drives the jump arc.
    #[must_use]
    pub const fn with_curve(config: PlatformerConfig, curve: C) -> Self {
        Self {
            config,
            curve,
            jump: JumpTimer::new(),
            ground: GroundTracker::new(),
        }
    }

    /// Active tuning.
    #[must_use]
    pub const fn config(&self) -> &PlatformerConfig {
        &self.config
    }

    /// Current grounded state.
    #[must_use]
    pub const fn ground_state(&self) -> GroundState {
        self.ground.state()
    }

    /// Jump timers.
    #[must_use]
    pub const fn jump_timer(&self) -> &JumpTimer {
        &self.jump
    }

    /// Whether the current jump arc is still running.
    #[must_use]
    pub fn is_jumping(&self) -> bool {
        self.jump.is_jumping(self.curve.duration())
    }

    /// Per-frame update: starts jumps and advances the jump timers.
    ///
    /// Returns `true` when a jump started this frame.
    pub fn update(&mut self, input: &InputFrame, dt: f32) -> bool {
        self.jump.tick(input.jump, self.config.jump_delay, dt)
    }

    /// Per-fixed-step update. Returns the velocity written to the body.
    ///
    /// While airborne outside a jump the horizontal axis turns the body.
    /// While grounded the body stops and is walked horizontally. The body's
    /// velocity is then pointed along the surface it is rotated to, and a
    /// running jump lifts it by the curve value for the elapsed jump time.
    ///
    /// # Panics
    /// Panics when the body's rotation is not finite, see
    /// [`Quadrant::from_rotation`](crate::orientation::Quadrant::from_rotation).
    pub fn fixed_update<B>(&mut self, body: &mut B, input: &InputFrame, dt: f32) -> Vec2
    where
        B: PhysicsBody + ?Sized,
    {
        let grounded = self.ground.state().is_grounded();
        let jumping = self.is_jumping();

        if !grounded && !jumping {
            let delta = self.config.turn_speed * -input.horizontal * dt;
            body.move_rotation(body.rotation() + delta);
        }

        if grounded {
            body.set_velocity(Vec2::ZERO);
            body.move_position(
                body.position() + Vec2::X * self.config.move_speed * input.horizontal * dt,
            );
        }

        let velocity = remap_velocity(&SurfaceWalkInput::from_velocity(
            body.rotation(),
            body.velocity(),
            input.drop,
            self.config.drop_speed,
            self.config.critical_verticality,
        ));
        trace!("remapped velocity to {velocity:?}");
        body.set_velocity(velocity);

        if jumping {
            let lift = self.curve.evaluate(self.jump.elapsed());
            body.move_position(body.position() + Vec2::Y * lift);
        }

        velocity
    }

    /// Applies the contacts of a newly started collision.
    pub fn collision_enter<I>(&mut self, contacts: I)
    where
        I: IntoIterator<Item = Contact>,
    {
        self.ground
            .collision_enter(contacts, self.config.grounded_threshold);
    }

    /// Applies the end of a collision.
    pub fn collision_exit(&mut self) {
        self.ground.collision_exit();
    }
}
