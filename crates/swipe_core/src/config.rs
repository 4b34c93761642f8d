use serde::{Deserialize, Deserializer, Serialize};

use crate::spring::SpringConfig;

/// Size of the area the deck is rendered into, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 700.0,
        }
    }
}

/// Spring presets for the three motion modes.
///
/// A config file may set any subset of fields of any preset; the rest keep
/// that preset's own defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "PresetOverrides")]
pub struct SpringPresets {
    pub drag: SpringConfig,
    pub revert: SpringConfig,
    pub exit: SpringConfig,
}

impl Default for SpringPresets {
    fn default() -> Self {
        Self {
            drag: SpringConfig::DRAG,
            revert: SpringConfig::REVERT,
            exit: SpringConfig::EXIT,
        }
    }
}

/// Fields are plain numbers in the file; absent ones stay `None`.
#[derive(Debug, Default, Deserialize)]
struct SpringOverride {
    #[serde(default, deserialize_with = "present")]
    tension: Option<f32>,
    #[serde(default, deserialize_with = "present")]
    friction: Option<f32>,
    #[serde(default, deserialize_with = "present")]
    mass: Option<f32>,
}

fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f32>, D::Error> {
    f32::deserialize(deserializer).map(Some)
}

impl SpringOverride {
    fn over(self, base: SpringConfig) -> SpringConfig {
        SpringConfig {
            tension: self.tension.unwrap_or(base.tension),
            friction: self.friction.unwrap_or(base.friction),
            mass: self.mass.unwrap_or(base.mass),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PresetOverrides {
    drag: SpringOverride,
    revert: SpringOverride,
    exit: SpringOverride,
}

impl From<PresetOverrides> for SpringPresets {
    fn from(file: PresetOverrides) -> Self {
        Self {
            drag: file.drag.over(SpringConfig::DRAG),
            revert: file.revert.over(SpringConfig::REVERT),
            exit: file.exit.over(SpringConfig::EXIT),
        }
    }
}

/// Every tunable of the deck. Missing fields in a config file fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Number of cards rendered as a pile, front card included.
    pub visible_stack_size: usize,
    /// Release speed (px/ms) that commits regardless of distance.
    pub velocity_threshold: f32,
    /// Release displacement (px) that commits regardless of speed.
    pub distance_threshold: f32,
    pub drag_amplify: f32,
    pub rotation_divisor: f32,
    pub drag_scale_base: f32,
    pub drag_scale_divisor: f32,
    pub drag_scale_max: f32,
    /// Weight of the newest delta in the exponentially smoothed velocity,
    /// for pointer events 16 ms apart. Wider gaps weigh the new delta more.
    pub velocity_smoothing: f32,
    /// Distance past the viewport edge an exiting card is thrown to.
    pub exit_overshoot: f32,
    /// Rotation (degrees) added to a card thrown left or right.
    pub exit_rotation: f32,
    /// Minimum launch speed (px/ms) of an exiting card.
    pub exit_min_velocity: f32,
    /// Vertical offset per depth in the visible pile.
    pub stack_offset_step: f32,
    pub viewport: Viewport,
    pub springs: SpringPresets,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            visible_stack_size: 3,
            velocity_threshold: 0.2,
            distance_threshold: 100.0,
            drag_amplify: 1.5,
            rotation_divisor: 7.0,
            drag_scale_base: 1.05,
            drag_scale_divisor: 2000.0,
            drag_scale_max: 1.25,
            velocity_smoothing: 0.5,
            exit_overshoot: 300.0,
            exit_rotation: 45.0,
            exit_min_velocity: 2.0,
            stack_offset_step: 6.0,
            viewport: Viewport::default(),
            springs: SpringPresets::default(),
        }
    }
}

impl DeckConfig {
    /// Replaces non-finite or out-of-range values with their defaults.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let positive = |value: f32, fallback: f32| {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                fallback
            }
        };
        let non_negative = |value: f32, fallback: f32| {
            if value.is_finite() && value >= 0.0 {
                value
            } else {
                fallback
            }
        };
        let spring = |value: SpringConfig, fallback: SpringConfig| {
            if value.is_valid() {
                value
            } else {
                fallback
            }
        };

        let smoothing = if self.velocity_smoothing.is_finite()
            && self.velocity_smoothing > 0.0
            && self.velocity_smoothing <= 1.0
        {
            self.velocity_smoothing
        } else {
            defaults.velocity_smoothing
        };

        Self {
            visible_stack_size: self.visible_stack_size.max(1),
            velocity_threshold: positive(self.velocity_threshold, defaults.velocity_threshold),
            distance_threshold: positive(self.distance_threshold, defaults.distance_threshold),
            drag_amplify: positive(self.drag_amplify, defaults.drag_amplify),
            rotation_divisor: positive(self.rotation_divisor, defaults.rotation_divisor),
            drag_scale_base: positive(self.drag_scale_base, defaults.drag_scale_base),
            drag_scale_divisor: positive(self.drag_scale_divisor, defaults.drag_scale_divisor),
            drag_scale_max: positive(self.drag_scale_max, defaults.drag_scale_max),
            velocity_smoothing: smoothing,
            exit_overshoot: non_negative(self.exit_overshoot, defaults.exit_overshoot),
            exit_rotation: non_negative(self.exit_rotation, defaults.exit_rotation),
            exit_min_velocity: non_negative(self.exit_min_velocity, defaults.exit_min_velocity),
            stack_offset_step: non_negative(self.stack_offset_step, defaults.stack_offset_step),
            viewport: Viewport {
                width: positive(self.viewport.width, defaults.viewport.width),
                height: positive(self.viewport.height, defaults.viewport.height),
            },
            springs: SpringPresets {
                drag: spring(self.springs.drag, defaults.springs.drag),
                revert: spring(self.springs.revert, defaults.springs.revert),
                exit: spring(self.springs.exit, defaults.springs.exit),
            },
        }
    }
}
