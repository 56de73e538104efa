#![cfg_attr(docsrs, feature(doc_cfg))]
//! Library crate providing the drakewalk platformer controller.
//! Re-exports the surface-walking math, the controller and its Bevy plugin.
pub mod body;
pub mod config;
pub mod constants;
pub mod controller;
pub mod grounding;
pub mod input;
pub mod jump;
pub mod logging;
pub mod orientation;
pub mod plugin;
pub mod surface_walk;
pub use constants::*;

// Re-export commonly used items
pub use body::{KinematicBody, PhysicsBody};
pub use config::{ConfigError, PlatformerConfig};
pub use controller::PlatformerController;
pub use grounding::{Contact, GroundState, GroundTracker};
pub use input::{Axis, Button, InputFrame, InputSource};
pub use jump::{CurveError, HeightCurve, JumpTimer, Keyframe, KeyframeCurve};
pub use logging::init as init_logging;
pub use orientation::{normalize_rotation, verticality, OrientationError, Quadrant};
pub use plugin::{ContactBegan, ContactEnded, Platformer, PlatformerPlugin};
pub use surface_walk::{remap_velocity, try_remap_velocity, SurfaceWalkInput};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use drakewalk::prelude::*;
    //! ```

    pub use crate::Contact;
    pub use crate::InputFrame;
    pub use crate::KinematicBody;
    pub use crate::PhysicsBody;
    pub use crate::PlatformerConfig;
    pub use crate::PlatformerController;
    pub use crate::PlatformerPlugin;
    pub use glam::Vec2;
}
