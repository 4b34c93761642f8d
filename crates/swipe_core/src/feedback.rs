//! Directional hints drawn over the front card while it moves.

use crate::classify::Direction;
use crate::motion::MotionState;

/// Travel (px) below which an indicator stays hidden.
const INDICATOR_DEAD_ZONE: f32 = 20.0;
const INDICATOR_FULL_AT: f32 = 80.0;
const GLOW_THRESHOLD: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorLevel {
    pub opacity: f32,
    pub scale: f32,
}

impl IndicatorLevel {
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        scale: 0.8,
    };

    /// Level for travel toward this indicator's side.
    pub fn for_travel(travel: f32) -> Self {
        if travel > INDICATOR_DEAD_ZONE {
            Self {
                opacity: (travel / INDICATOR_FULL_AT).min(1.0),
                scale: 1.0 + (travel / 200.0).min(0.5),
            }
        } else {
            Self::HIDDEN
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Indicators {
    pub like: IndicatorLevel,
    pub pass: IndicatorLevel,
    pub collect: IndicatorLevel,
}

impl Default for Indicators {
    fn default() -> Self {
        Self {
            like: IndicatorLevel::HIDDEN,
            pass: IndicatorLevel::HIDDEN,
            collect: IndicatorLevel::HIDDEN,
        }
    }
}

impl Indicators {
    pub fn from_motion(state: &MotionState) -> Self {
        Self {
            like: IndicatorLevel::for_travel(state.x),
            pass: IndicatorLevel::for_travel(-state.x),
            collect: IndicatorLevel::for_travel(-state.y),
        }
    }
}

/// Colored edge glow around the front card.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Glow {
    pub direction: Option<Direction>,
    pub radius: f32,
}

impl Glow {
    pub fn from_motion(state: &MotionState) -> Self {
        let direction = if state.x > GLOW_THRESHOLD {
            Some(Direction::Like)
        } else if state.x < -GLOW_THRESHOLD {
            Some(Direction::Pass)
        } else if state.y < -GLOW_THRESHOLD {
            Some(Direction::Collect)
        } else {
            None
        };
        Self {
            direction,
            radius: state.x.abs().max(state.y.abs()) / 5.0,
        }
    }
}
