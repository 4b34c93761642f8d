use crate::classify::Direction;
use crate::config::DeckConfig;
use crate::deck::{DeckManager, DeckStatus};
use crate::feedback::{Glow, Indicators};
use crate::gesture::GestureTracker;
use crate::item::Item;
use crate::motion::AnimationController;
use crate::view_model::{CardView, DeckViewModel, ExitingView};
use crate::window;

/// Committed decisions since the last reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecisionStats {
    pub liked: usize,
    pub passed: usize,
    pub collected: usize,
}

impl DecisionStats {
    pub(crate) fn record(&mut self, direction: Direction) {
        match direction {
            Direction::Like => self.liked += 1,
            Direction::Pass => self.passed += 1,
            Direction::Collect => self.collected += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.liked + self.passed + self.collected
    }
}

/// Everything the deck owns. Mutated only through [`crate::update`].
#[derive(Debug, Clone, PartialEq)]
pub struct DeckState {
    pub(crate) config: DeckConfig,
    pub(crate) deck: DeckManager,
    pub(crate) tracker: GestureTracker,
    pub(crate) motion: AnimationController,
    pub(crate) feedback: Option<Direction>,
    pub(crate) stats: DecisionStats,
    dirty: bool,
}

impl Default for DeckState {
    fn default() -> Self {
        Self::new(Vec::new(), DeckConfig::default())
    }
}

impl DeckState {
    pub fn new(items: Vec<Item>, config: DeckConfig) -> Self {
        let config = config.sanitized();
        Self {
            deck: DeckManager::new(items),
            tracker: GestureTracker::new(config.velocity_smoothing),
            motion: AnimationController::new(),
            feedback: None,
            stats: DecisionStats::default(),
            dirty: false,
            config,
        }
    }

    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    pub fn deck(&self) -> &DeckManager {
        &self.deck
    }

    pub fn motion(&self) -> &AnimationController {
        &self.motion
    }

    pub fn status(&self) -> DeckStatus {
        self.deck.status()
    }

    pub fn is_dragging(&self) -> bool {
        self.tracker.is_active()
    }

    pub fn stats(&self) -> DecisionStats {
        self.stats
    }

    pub fn view(&self) -> DeckViewModel {
        let front = self.motion.front_state();
        let cards = window::layout(&self.deck, &self.config)
            .into_iter()
            .map(|slot| {
                if slot.is_front() {
                    CardView {
                        item_id: slot.item_id,
                        depth: slot.depth,
                        x: front.x,
                        y: slot.offset_y + front.y,
                        rotation: slot.rotation + front.rotation,
                        scale: front.scale,
                        z_index: slot.z_index,
                        intro_delay_ms: slot.intro_delay_ms,
                        interactive: true,
                    }
                } else {
                    CardView {
                        item_id: slot.item_id,
                        depth: slot.depth,
                        x: 0.0,
                        y: slot.offset_y,
                        rotation: slot.rotation,
                        scale: 1.0,
                        z_index: slot.z_index,
                        intro_delay_ms: slot.intro_delay_ms,
                        interactive: false,
                    }
                }
            })
            .collect();
        let exiting = self
            .motion
            .exiting()
            .iter()
            .map(|card| ExitingView {
                item_id: card.item_id,
                direction: card.direction,
                motion: card.state(),
            })
            .collect();

        DeckViewModel {
            status: self.deck.status(),
            remaining: self.deck.len(),
            total: self.deck.total(),
            cards,
            exiting,
            front_phase: self.motion.front_phase(),
            front_motion: front,
            feedback: self.feedback,
            indicators: Indicators::from_motion(&front),
            glow: Glow::from_motion(&front),
            stats: self.stats,
            dirty: self.dirty,
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
