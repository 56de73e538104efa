//! Jump arcs and jump timing.
//!
//! A jump is a fixed window of time during which the body is lifted each
//! fixed step by the value a [`HeightCurve`] gives for the time elapsed since
//! take-off. [`JumpTimer`] tracks that window along with the delay that stops
//! a held button from chaining jumps back to back.

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Time to height lookup driving a jump arc.
pub trait HeightCurve {
    /// Height offset at `time` seconds after take-off.
    fn evaluate(&self, time: f32) -> f32;

    /// Last time in the curve's domain; the jump ends once it is passed.
    fn duration(&self) -> f32;
}

/// One key of a [`KeyframeCurve`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Seconds since take-off.
    pub time: f32,
    /// Height offset at `time`.
    pub value: f32,
}

impl Keyframe {
    /// Creates a key.
    #[must_use]
    pub const fn new(time: f32, value: f32) -> Self {
        Self { time, value }
    }
}

impl From<(f32, f32)> for Keyframe {
    fn from((time, value): (f32, f32)) -> Self {
        Self { time, value }
    }
}

/// Rejected key sets.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// The curve has no keys at all.
    #[error("jump curve needs at least one key")]
    Empty,
    /// A key's time or value is NaN or infinite.
    #[error("jump curve key {index} is not finite")]
    NonFinite {
        /// Position of the offending key.
        index: usize,
    },
    /// Keys are not in strictly increasing time order.
    #[error("jump curve key {index} at t={time} does not follow t={previous}")]
    Unordered {
        /// Position of the offending key.
        index: usize,
        /// Time of the offending key.
        time: f32,
        /// Time of the key before it.
        previous: f32,
    },
}

/// Piecewise linear curve through a set of keys.
///
/// Evaluation clamps to the first key before the domain and to the last key
/// after it.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyframeCurve {
    keys: Vec<Keyframe>,
}

impl KeyframeCurve {
    /// Builds a curve, checking the keys are finite and strictly increasing
    /// in time.
    ///
    /// # Errors
    /// Returns a [`CurveError`] describing the first invalid key.
    ///
    /// # Examples
    /// ```
    /// use drakewalk::jump::{HeightCurve, Keyframe, KeyframeCurve};
    /// let curve = KeyframeCurve::new(vec![Keyframe::new(0.0, 0.0), Keyframe::new(1.0, 2.0)])?;
    /// assert!((curve.evaluate(0.5) - 1.0).abs() < 1e-6);
    /// assert_eq!(curve.duration(), 1.0);
    /// # Ok::<(), drakewalk::jump::CurveError>(())
    /// ```
    pub fn new(keys: Vec<Keyframe>) -> Result<Self, CurveError> {
        if keys.is_empty() {
            return Err(CurveError::Empty);
        }
        for (index, key) in keys.iter().enumerate() {
            if !key.time.is_finite() || !key.value.is_finite() {
                return Err(CurveError::NonFinite { index });
            }
        }
        for (index, pair) in keys.windows(2).enumerate() {
            if let [previous, next] = pair {
                if next.time <= previous.time {
                    return Err(CurveError::Unordered {
                        index: index + 1,
                        time: next.time,
                        previous: previous.time,
                    });
                }
            }
        }
        Ok(Self { keys })
    }

    /// Keys in time order.
    #[must_use]
    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }
}

impl HeightCurve for KeyframeCurve {
    fn evaluate(&self, time: f32) -> f32 {
        let (Some(first), Some(last)) = (self.keys.first(), self.keys.last()) else {
            return 0.0;
        };
        if time <= first.time {
            return first.value;
        }
        if time >= last.time {
            return last.value;
        }
        self.keys
            .windows(2)
            .find_map(|pair| match pair {
                [a, b] if time <= b.time => {
                    let t = (time - a.time) / (b.time - a.time);
                    Some(a.value + (b.value - a.value) * t)
                }
                _ => None,
            })
            .unwrap_or(last.value)
    }

    fn duration(&self) -> f32 {
        self.keys.last().map_or(0.0, |k| k.time)
    }
}

/// Jump window and re-trigger delay, advanced once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpTimer {
    elapsed: f32,
    delay_remaining: f32,
}

impl Default for JumpTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl JumpTimer {
    /// A timer that is not jumping and may jump immediately.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elapsed: f32::INFINITY,
            delay_remaining: 0.0,
        }
    }

    /// Seconds since the last take-off.
    #[must_use]
    pub const fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Seconds until another jump may start; zero or negative when ready.
    #[must_use]
    pub const fn delay_remaining(&self) -> f32 {
        self.delay_remaining
    }

    /// Whether a jump is in progress for an arc lasting `duration` seconds.
    #[must_use]
    pub fn is_jumping(&self, duration: f32) -> bool {
        self.elapsed <= duration
    }

    /// Advances by one frame.
    ///
    /// Starts a jump when `jump_held` and the delay has run out. Returns
    /// `true` when a jump started this frame.
    pub fn tick(&mut self, jump_held: bool, jump_delay: f32, dt: f32) -> bool {
        let started = self.delay_remaining <= 0.0 && jump_held;
        if started {
            debug!("jump started");
            self.delay_remaining = jump_delay;
            self.elapsed = 0.0;
        }
        self.delay_remaining -= dt;
        self.elapsed += dt;
        started
    }
}
