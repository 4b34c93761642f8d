use crate::classify::Direction;
use crate::deck::DeckStatus;
use crate::feedback::{Glow, Indicators};
use crate::item::ItemId;
use crate::motion::{FrontPhase, MotionState};
use crate::state::DecisionStats;

#[derive(Debug, Clone, PartialEq)]
pub struct DeckViewModel {
    pub status: DeckStatus,
    pub remaining: usize,
    pub total: usize,
    /// Visible window, front card first.
    pub cards: Vec<CardView>,
    pub exiting: Vec<ExitingView>,
    pub front_phase: FrontPhase,
    pub front_motion: MotionState,
    /// Indicator picked by the live drag, if any.
    pub feedback: Option<Direction>,
    pub indicators: Indicators,
    pub glow: Glow,
    pub stats: DecisionStats,
    pub dirty: bool,
}

/// Final pose of a card in the pile: static slot plus front-card motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardView {
    pub item_id: ItemId,
    pub depth: usize,
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
    pub scale: f32,
    pub z_index: usize,
    pub intro_delay_ms: u32,
    pub interactive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExitingView {
    pub item_id: ItemId,
    pub direction: Direction,
    pub motion: MotionState,
}
