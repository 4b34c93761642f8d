//! Continuous motion of the front card and of cards being thrown off the deck.
//!
//! Every animated property is a [`Spring`]. While a drag is live the springs
//! chase a target derived from the pointer displacement; once the drag ends they
//! either chase the neutral rest pose (revert) or a point far outside the
//! viewport (exit). Motion state exists only while something is moving: a front
//! card at rest and a card that has left the viewport hold no springs.

use crate::classify::Direction;
use crate::config::DeckConfig;
use crate::gesture::GestureSample;
use crate::item::ItemId;
use crate::spring::{Spring, SpringConfig};

const POSITION_PRECISION: f32 = 0.01;
const SCALE_PRECISION: f32 = 0.0005;

/// Rendered pose of a card, relative to its slot in the pile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionState {
    pub x: f32,
    pub y: f32,
    /// Degrees, clockwise.
    pub rotation: f32,
    pub scale: f32,
}

impl MotionState {
    pub const NEUTRAL: Self = Self {
        x: 0.0,
        y: 0.0,
        rotation: 0.0,
        scale: 1.0,
    };

    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }
}

impl Default for MotionState {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// What the front card is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrontPhase {
    /// At rest, no springs allocated.
    #[default]
    Idle,
    /// Following a live drag.
    Dragging,
    /// Springing back to rest after a release that did not commit.
    Reverting,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct CardMotion {
    x: Spring,
    y: Spring,
    rotation: Spring,
    scale: Spring,
}

impl CardMotion {
    fn neutral() -> Self {
        Self {
            x: Spring::at_rest(0.0, POSITION_PRECISION),
            y: Spring::at_rest(0.0, POSITION_PRECISION),
            rotation: Spring::at_rest(0.0, POSITION_PRECISION),
            scale: Spring::at_rest(1.0, SCALE_PRECISION),
        }
    }

    fn state(&self) -> MotionState {
        MotionState {
            x: self.x.position(),
            y: self.y.position(),
            rotation: self.rotation.position(),
            scale: self.scale.position(),
        }
    }

    fn retarget(&mut self, target: MotionState, config: SpringConfig) {
        self.x.retarget(target.x, config);
        self.y.retarget(target.y, config);
        self.rotation.retarget(target.rotation, config);
        self.scale.retarget(target.scale, config);
    }

    /// Returns `true` once every property is at rest.
    fn step(&mut self, dt_ms: f32) -> bool {
        let x = self.x.step(dt_ms);
        let y = self.y.step(dt_ms);
        let rotation = self.rotation.step(dt_ms);
        let scale = self.scale.step(dt_ms);
        x && y && rotation && scale
    }
}

/// A committed card on its way out of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExitingCard {
    pub item_id: ItemId,
    pub direction: Direction,
    motion: CardMotion,
}

impl ExitingCard {
    pub fn state(&self) -> MotionState {
        self.motion.state()
    }

    fn has_left(&self, config: &DeckConfig) -> bool {
        let state = self.motion.state();
        match self.direction {
            Direction::Like => state.x >= config.viewport.width,
            Direction::Pass => state.x <= -config.viewport.width,
            Direction::Collect => state.y <= -config.viewport.height,
        }
    }
}

/// Target pose for a live drag sample.
pub fn drag_target(sample: &GestureSample, config: &DeckConfig) -> MotionState {
    if !sample.is_finite() {
        return MotionState::NEUTRAL;
    }
    let x = sample.dx * config.drag_amplify;
    let y = sample.visual_dy() * config.drag_amplify;
    let scale = (config.drag_scale_base + x.abs() / config.drag_scale_divisor)
        .min(config.drag_scale_max);
    MotionState {
        x,
        y,
        rotation: sample.dx / config.rotation_divisor,
        scale,
    }
}

/// Owns the motion of the front card and of every card still exiting.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnimationController {
    front: Option<CardMotion>,
    phase: FrontPhase,
    exiting: Vec<ExitingCard>,
}

impl AnimationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn front_state(&self) -> MotionState {
        self.front
            .as_ref()
            .map(CardMotion::state)
            .unwrap_or(MotionState::NEUTRAL)
    }

    pub fn front_phase(&self) -> FrontPhase {
        self.phase
    }

    pub fn exiting(&self) -> &[ExitingCard] {
        &self.exiting
    }

    pub fn is_exiting(&self) -> bool {
        !self.exiting.is_empty()
    }

    pub fn is_animating(&self) -> bool {
        self.front.is_some() || self.is_exiting()
    }

    /// Couples the front card to a live drag.
    pub fn drag_to(&mut self, sample: &GestureSample, config: &DeckConfig) {
        let target = drag_target(sample, config);
        self.front
            .get_or_insert_with(CardMotion::neutral)
            .retarget(target, config.springs.drag);
        self.phase = FrontPhase::Dragging;
    }

    /// Sends the front card back to its rest pose.
    pub fn revert(&mut self, config: &DeckConfig) {
        match self.front.as_mut() {
            Some(motion) => {
                motion.retarget(MotionState::NEUTRAL, config.springs.revert);
                self.phase = FrontPhase::Reverting;
            }
            None => self.phase = FrontPhase::Idle,
        }
    }

    /// Throws the front card out in `direction` and leaves a neutral front behind.
    ///
    /// `release` is the pointer velocity at release in px/ms; a programmatic
    /// trigger passes zero and gets the minimum launch speed.
    pub fn launch_exit(
        &mut self,
        item_id: ItemId,
        direction: Direction,
        release: (f32, f32),
        config: &DeckConfig,
    ) {
        let mut motion = self.front.take().unwrap_or_else(CardMotion::neutral);
        self.phase = FrontPhase::Idle;

        let (vx, vy) = (finite_or_zero(release.0), finite_or_zero(release.1));
        let launch = |v: f32| (v.abs() * 2.0).max(config.exit_min_velocity);
        let exit = config.springs.exit;
        match direction {
            Direction::Like => {
                motion
                    .x
                    .retarget(config.viewport.width + config.exit_overshoot, exit);
                motion.rotation.retarget(config.exit_rotation, exit);
                motion.x.kick(launch(vx));
            }
            Direction::Pass => {
                motion
                    .x
                    .retarget(-(config.viewport.width + config.exit_overshoot), exit);
                motion.rotation.retarget(-config.exit_rotation, exit);
                motion.x.kick(-launch(vx));
            }
            Direction::Collect => {
                motion
                    .y
                    .retarget(-(config.viewport.height + config.exit_overshoot), exit);
                motion.y.kick(-launch(vy));
            }
        }

        self.exiting.push(ExitingCard {
            item_id,
            direction,
            motion,
        });
    }

    /// Drops front motion so a newly promoted card starts at rest.
    pub fn reset_front(&mut self) {
        self.front = None;
        self.phase = FrontPhase::Idle;
    }

    /// Forgets every animation, front and exiting.
    pub fn clear(&mut self) {
        self.reset_front();
        self.exiting.clear();
    }

    /// Advances every spring by one frame. Returns the ids of cards that
    /// finished leaving the viewport during this step.
    pub fn step(&mut self, dt_ms: f32, config: &DeckConfig) -> Vec<ItemId> {
        if let Some(motion) = self.front.as_mut() {
            let settled = motion.step(dt_ms);
            if settled && self.phase != FrontPhase::Dragging {
                self.front = None;
                self.phase = FrontPhase::Idle;
            }
        }

        let mut finished = Vec::new();
        self.exiting.retain_mut(|card| {
            let settled = card.motion.step(dt_ms);
            if settled || card.has_left(config) {
                finished.push(card.item_id);
                false
            } else {
                true
            }
        });
        finished
    }
}

fn finite_or_zero(value: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(controller: &mut AnimationController, config: &DeckConfig, frames: usize) -> Vec<ItemId> {
        let mut finished = Vec::new();
        for _ in 0..frames {
            finished.extend(controller.step(16.0, config));
        }
        finished
    }

    #[test]
    fn drag_target_amplifies_and_clamps_downward_motion() {
        let config = DeckConfig::default();
        let target = drag_target(&GestureSample::live(70.0, 40.0, 0.0, 0.0), &config);

        assert_eq!(target.x, 105.0);
        assert_eq!(target.y, 0.0);
        assert_eq!(target.rotation, 10.0);
        assert!(target.scale > 1.05 && target.scale <= config.drag_scale_max);
    }

    #[test]
    fn drag_scale_is_capped() {
        let config = DeckConfig::default();
        let target = drag_target(&GestureSample::live(5000.0, 0.0, 0.0, 0.0), &config);
        assert_eq!(target.scale, config.drag_scale_max);
    }

    #[test]
    fn front_follows_drag_smoothly() {
        let config = DeckConfig::default();
        let mut controller = AnimationController::new();
        controller.drag_to(&GestureSample::live(100.0, 0.0, 0.0, 0.0), &config);
        controller.step(16.0, &config);

        let state = controller.front_state();
        assert!(state.x > 0.0 && state.x < 150.0, "{state:?}");
        assert_eq!(controller.front_phase(), FrontPhase::Dragging);
    }

    #[test]
    fn revert_returns_to_neutral_and_drops_state() {
        let config = DeckConfig::default();
        let mut controller = AnimationController::new();
        controller.drag_to(&GestureSample::live(-40.0, -10.0, 0.0, 0.0), &config);
        run(&mut controller, &config, 10);
        controller.revert(&config);
        assert_eq!(controller.front_phase(), FrontPhase::Reverting);

        run(&mut controller, &config, 120);
        assert_eq!(controller.front_state(), MotionState::NEUTRAL);
        assert_eq!(controller.front_phase(), FrontPhase::Idle);
        assert!(!controller.is_animating());
    }

    #[test]
    fn exit_leaves_viewport_in_decided_direction() {
        let config = DeckConfig::default();
        for direction in Direction::ALL {
            let mut controller = AnimationController::new();
            controller.launch_exit(7, direction, (0.0, 0.0), &config);
            assert!(controller.is_exiting());
            assert_eq!(controller.front_state(), MotionState::NEUTRAL);

            controller.step(16.0, &config);
            let state = controller.exiting()[0].state();
            match direction {
                Direction::Like => assert!(state.x > 0.0 && state.rotation > 0.0),
                Direction::Pass => assert!(state.x < 0.0 && state.rotation < 0.0),
                Direction::Collect => assert!(state.y < 0.0),
            }

            let finished = run(&mut controller, &config, 300);
            assert_eq!(finished, vec![7], "{direction:?}");
            assert!(!controller.is_exiting());
        }
    }

    #[test]
    fn faster_release_exits_sooner() {
        let config = DeckConfig::default();
        let frames_to_exit = |vx: f32| {
            let mut controller = AnimationController::new();
            controller.launch_exit(1, Direction::Like, (vx, 0.0), &config);
            (1..1000)
                .find(|_| !controller.step(16.0, &config).is_empty())
                .unwrap()
        };
        assert!(frames_to_exit(3.0) < frames_to_exit(0.0));
    }

    #[test]
    fn clear_drops_everything() {
        let config = DeckConfig::default();
        let mut controller = AnimationController::new();
        controller.drag_to(&GestureSample::live(10.0, 0.0, 0.0, 0.0), &config);
        controller.launch_exit(1, Direction::Pass, (0.0, 0.0), &config);
        controller.drag_to(&GestureSample::live(10.0, 0.0, 0.0, 0.0), &config);
        controller.clear();
        assert!(!controller.is_animating());
    }
}
