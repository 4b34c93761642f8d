//! Swipe deck core: gesture classification, card physics and the deck state machine.
//!
//! Everything here is pure and single-threaded. Hosts feed [`Msg`]s into
//! [`update`], render [`DeckState::view`], and forward the returned
//! [`Effect`]s to whoever listens for decisions.
mod classify;
mod config;
mod deck;
mod effect;
mod feedback;
mod gesture;
mod item;
mod motion;
mod msg;
mod spring;
mod state;
mod update;
mod view_model;
mod window;

pub use classify::{
    classify, feedback_direction, leaning, Direction, ParseDirectionError, SwipeOutcome,
    SwipeThresholds,
};
pub use config::{DeckConfig, SpringPresets, Viewport};
pub use deck::{Commit, DeckManager, DeckStatus};
pub use effect::Effect;
pub use feedback::{Glow, IndicatorLevel, Indicators};
pub use gesture::{GestureSample, GestureTracker};
pub use item::{Item, ItemId};
pub use motion::{drag_target, AnimationController, ExitingCard, FrontPhase, MotionState};
pub use msg::Msg;
pub use spring::{Spring, SpringConfig, MAX_FRAME_MS};
pub use state::{DecisionStats, DeckState};
pub use update::update;
pub use view_model::{CardView, DeckViewModel, ExitingView};
pub use window::{layout, stack_rotation, StackSlot, INTRO_STAGGER_MS};
