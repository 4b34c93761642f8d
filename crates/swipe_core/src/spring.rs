//! Damped spring integrator used for every animated card property.
//!
//! Units: positions in pixels (or degrees / scale factor), time in
//! milliseconds, velocity in units per millisecond. Integration runs in
//! fixed 1 ms substeps so the result does not depend on the frame rate.

use serde::{Deserialize, Serialize};

/// Longest frame delta accepted by [`Spring::step`]; longer gaps are clamped.
pub const MAX_FRAME_MS: f32 = 64.0;

const SUBSTEP_MS: f32 = 1.0;

/// Tension/friction/mass parameters of a spring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    pub tension: f32,
    pub friction: f32,
    pub mass: f32,
}

impl SpringConfig {
    /// Light and responsive; used while the pointer is down.
    pub const DRAG: Self = Self {
        tension: 180.0,
        friction: 15.0,
        mass: 0.7,
    };
    /// Stiff and heavily damped; snaps a released card back to rest.
    pub const REVERT: Self = Self {
        tension: 500.0,
        friction: 40.0,
        mass: 1.0,
    };
    /// Heavier throw used when a card leaves the deck.
    pub const EXIT: Self = Self {
        tension: 180.0,
        friction: 18.0,
        mass: 1.2,
    };

    pub(crate) fn is_valid(&self) -> bool {
        [self.tension, self.friction, self.mass]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0)
    }
}

/// One animated scalar chasing a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    position: f32,
    velocity: f32,
    target: f32,
    precision: f32,
    config: SpringConfig,
}

impl Spring {
    /// A spring sitting still at `value`.
    pub fn at_rest(value: f32, precision: f32) -> Self {
        Self {
            position: value,
            velocity: 0.0,
            target: value,
            precision,
            config: SpringConfig::DRAG,
        }
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Points the spring at a new target, keeping current velocity.
    pub fn retarget(&mut self, target: f32, config: SpringConfig) {
        if target.is_finite() {
            self.target = target;
        }
        self.config = config;
    }

    /// Overrides the current velocity, e.g. to launch a throw.
    pub fn kick(&mut self, velocity: f32) {
        if velocity.is_finite() {
            self.velocity = velocity;
        }
    }

    pub fn is_settled(&self) -> bool {
        (self.position - self.target).abs() < self.precision && self.velocity.abs() < self.precision
    }

    /// Advances the spring by `dt_ms`; returns `true` once it is at rest.
    pub fn step(&mut self, dt_ms: f32) -> bool {
        if !dt_ms.is_finite() || dt_ms <= 0.0 {
            return self.is_settled();
        }
        let SpringConfig {
            tension,
            friction,
            mass,
        } = self.config;
        let mut remaining = dt_ms.min(MAX_FRAME_MS);
        while remaining > 0.0 {
            let h = remaining.min(SUBSTEP_MS);
            let spring_force = -tension * 1e-6 * (self.position - self.target);
            let damping_force = -friction * 1e-3 * self.velocity;
            let acceleration = (spring_force + damping_force) / mass;
            self.velocity += acceleration * h;
            self.position += self.velocity * h;
            remaining -= h;
        }
        if self.is_settled() {
            self.position = self.target;
            self.velocity = 0.0;
            true
        } else {
            false
        }
    }
}
