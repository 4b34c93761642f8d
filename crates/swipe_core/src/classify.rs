//! Maps gesture samples to swipe decisions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::DeckConfig;
use crate::gesture::GestureSample;

/// A committed decision on the front card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Thrown right.
    Like,
    /// Thrown left.
    Pass,
    /// Thrown up.
    Collect,
}

impl Direction {
    pub const ALL: [Direction; 3] = [Direction::Like, Direction::Pass, Direction::Collect];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Like => "like",
            Direction::Pass => "pass",
            Direction::Collect => "collect",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseDirectionError {
    #[error("unknown swipe direction {0:?}")]
    Unknown(String),
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Accepts the decision names as well as the screen directions they map to.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "like" | "right" => Ok(Direction::Like),
            "pass" | "left" => Ok(Direction::Pass),
            "collect" | "up" | "cart" => Ok(Direction::Collect),
            _ => Err(ParseDirectionError::Unknown(s.to_string())),
        }
    }
}

/// Result of classifying a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeOutcome {
    Like,
    Pass,
    Collect,
    /// No decision; the card goes back to rest.
    None,
}

impl SwipeOutcome {
    pub fn direction(self) -> Option<Direction> {
        match self {
            SwipeOutcome::Like => Some(Direction::Like),
            SwipeOutcome::Pass => Some(Direction::Pass),
            SwipeOutcome::Collect => Some(Direction::Collect),
            SwipeOutcome::None => None,
        }
    }

    pub fn is_commit(self) -> bool {
        self != SwipeOutcome::None
    }
}

impl From<Direction> for SwipeOutcome {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Like => SwipeOutcome::Like,
            Direction::Pass => SwipeOutcome::Pass,
            Direction::Collect => SwipeOutcome::Collect,
        }
    }
}

/// Release thresholds; crossing any one of them commits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThresholds {
    pub velocity: f32,
    pub distance: f32,
}

impl Default for SwipeThresholds {
    fn default() -> Self {
        Self::from(&DeckConfig::default())
    }
}

impl From<&DeckConfig> for SwipeThresholds {
    fn from(config: &DeckConfig) -> Self {
        Self {
            velocity: config.velocity_threshold,
            distance: config.distance_threshold,
        }
    }
}

impl SwipeThresholds {
    pub fn is_triggered(&self, sample: &GestureSample) -> bool {
        sample.vx.abs() > self.velocity
            || sample.vy.abs() > self.velocity
            || sample.dx.abs() > self.distance
            || sample.dy.abs() > self.distance
    }
}

/// Decides the outcome of a released drag.
///
/// Only terminal samples can commit. Classification uses the raw `dy`, so a
/// fling below the origin reaches the vertical branch and resolves to `None`.
pub fn classify(sample: &GestureSample, thresholds: &SwipeThresholds) -> SwipeOutcome {
    if sample.active || !sample.is_finite() || !thresholds.is_triggered(sample) {
        return SwipeOutcome::None;
    }
    leaning(sample.dx, sample.dy)
}

/// The direction a displacement points to, ignoring thresholds.
pub fn leaning(dx: f32, dy: f32) -> SwipeOutcome {
    if dx.abs() > dy.abs() {
        if dx > 0.0 {
            SwipeOutcome::Like
        } else {
            SwipeOutcome::Pass
        }
    } else if dy < 0.0 {
        SwipeOutcome::Collect
    } else {
        SwipeOutcome::None
    }
}

/// Which indicator a live drag should highlight. Feedback only.
pub fn feedback_direction(sample: &GestureSample) -> Option<Direction> {
    if !sample.is_finite() {
        return None;
    }
    leaning(sample.dx, sample.dy).direction()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("like".parse::<Direction>(), Ok(Direction::Like));
        assert_eq!("RIGHT".parse::<Direction>(), Ok(Direction::Like));
        assert_eq!("left".parse::<Direction>(), Ok(Direction::Pass));
        assert_eq!(" cart ".parse::<Direction>(), Ok(Direction::Collect));
        assert_eq!(
            "down".parse::<Direction>(),
            Err(ParseDirectionError::Unknown("down".to_string()))
        );
    }

    #[test]
    fn leaning_ties_go_vertical() {
        assert_eq!(leaning(50.0, -50.0), SwipeOutcome::Collect);
        assert_eq!(leaning(-50.0, 50.0), SwipeOutcome::None);
        assert_eq!(leaning(0.0, 0.0), SwipeOutcome::None);
    }

    #[test]
    fn live_samples_never_commit() {
        let sample = GestureSample::live(500.0, 0.0, 3.0, 0.0);
        assert_eq!(
            classify(&sample, &SwipeThresholds::default()),
            SwipeOutcome::None
        );
        assert_eq!(feedback_direction(&sample), Some(Direction::Like));
    }
}
