//! Bevy plugin wiring the controller into the schedule.
//!
//! Jump timers advance in `Update`, once per frame. Surface walking runs in
//! `FixedUpdate` against each entity's [`KinematicBody`]. Collision contacts
//! arrive as [`ContactBegan`] and [`ContactEnded`] events from whatever
//! collision backend the app uses.

use bevy::prelude::*;
use log::warn;

use crate::body::KinematicBody;
use crate::controller::PlatformerController;
use crate::grounding::Contact;
use crate::input::InputFrame;

/// Component attaching a [`PlatformerController`] to an entity.
#[derive(Component, Debug, Clone, Deref, DerefMut)]
pub struct Platformer(pub PlatformerController);

/// A collision involving `entity` started with the given contact normals.
#[derive(Event, Debug, Clone)]
pub struct ContactBegan {
    /// Entity whose collider was touched.
    pub entity: Entity,
    /// Normals of every contact point in the collision.
    pub normals: Vec<Vec2>,
}

/// A collision involving `entity` ended.
#[derive(Event, Debug, Clone, Copy)]
pub struct ContactEnded {
    /// Entity whose collider was released.
    pub entity: Entity,
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
fn apply_contact_began(event: On<ContactBegan>, mut platformers: Query<&mut Platformer>) {
    let ContactBegan { entity, normals } = event.event();
    match platformers.get_mut(*entity) {
        Ok(mut platformer) => {
            platformer.collision_enter(normals.iter().copied().map(Contact::new));
        }
        Err(e) => warn!("contact for {entity} ignored: {e}"),
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
fn apply_contact_ended(event: On<ContactEnded>, mut platformers: Query<&mut Platformer>) {
    let ContactEnded { entity } = event.event();
    match platformers.get_mut(*entity) {
        Ok(mut platformer) => platformer.collision_exit(),
        Err(e) => warn!("contact end for {entity} ignored: {e}"),
    }
}

/// Advances every controller's jump timers by the frame delta.
pub fn advance_jump_timers_system(
    time: Res<Time>,
    input: Res<InputFrame>,
    mut platformers: Query<&mut Platformer>,
) {
    let dt = time.delta_secs();
    for mut platformer in &mut platformers {
        platformer.update(&input, dt);
    }
}

/// Runs one fixed step for every controlled body, then integrates it.
pub fn step_platformers_system(
    time: Res<Time>,
    input: Res<InputFrame>,
    mut query: Query<(&mut Platformer, &mut KinematicBody)>,
) {
    let dt = time.delta_secs();
    for (mut platformer, mut body) in &mut query {
        platformer.fixed_update(&mut *body, &input, dt);
        body.integrate(dt);
    }
}

/// Registers the input resource, contact observers and controller systems.
#[derive(Default)]
pub struct PlatformerPlugin;

impl Plugin for PlatformerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputFrame>();
        app.add_observer(apply_contact_began);
        app.add_observer(apply_contact_ended);
        app.add_systems(Update, advance_jump_timers_system);
        app.add_systems(FixedUpdate, step_platformers_system);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlatformerConfig;
    use crate::grounding::GroundState;
    use rstest::{fixture, rstest};

    #[fixture]
    fn app_with_body() -> (App, Entity) {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(PlatformerPlugin);
        let controller = PlatformerController::new(PlatformerConfig::default())
            .unwrap_or_else(|e| panic!("default config rejected: {e}"));
        let id = app
            .world_mut()
            .spawn((
                Platformer(controller),
                KinematicBody::new(Vec2::ZERO, 0.0).with_velocity(Vec2::new(0.0, -2.0)),
            ))
            .id();
        (app, id)
    }

    fn ground_state(app: &App, id: Entity) -> GroundState {
        app.world()
            .get::<Platformer>(id)
            .map(|p| p.ground_state())
            .unwrap_or_else(|| panic!("entity lost its Platformer"))
    }

    #[rstest]
    fn plugin_initialises_input() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(PlatformerPlugin);
        assert!(app.world().contains_resource::<InputFrame>());
    }

    #[rstest]
    fn contact_events_toggle_ground(app_with_body: (App, Entity)) {
        let (mut app, id) = app_with_body;
        app.world_mut().trigger(ContactBegan {
            entity: id,
            normals: vec![Vec2::Y],
        });
        assert_eq!(ground_state(&app, id), GroundState::Grounded);

        app.world_mut().trigger(ContactEnded { entity: id });
        assert_eq!(ground_state(&app, id), GroundState::Airborne);
    }

    #[rstest]
    fn grounded_fixed_step_stops_the_body(app_with_body: (App, Entity)) {
        let (mut app, id) = app_with_body;
        app.world_mut().trigger(ContactBegan {
            entity: id,
            normals: vec![Vec2::Y],
        });
        app.world_mut().run_schedule(FixedUpdate);
        let body = app
            .world()
            .get::<KinematicBody>(id)
            .copied()
            .unwrap_or_else(|| panic!("entity lost its KinematicBody"));
        assert_eq!(body.velocity, Vec2::ZERO);
    }

    #[rstest]
    fn held_jump_starts_a_jump(app_with_body: (App, Entity)) {
        let (mut app, id) = app_with_body;
        app.world_mut().resource_mut::<InputFrame>().jump = true;
        app.update();
        let jumping = app
            .world()
            .get::<Platformer>(id)
            .is_some_and(|p| p.is_jumping());
        assert!(jumping);
    }
}
