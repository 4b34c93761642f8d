//! Static layout of the visible pile. Nothing here is animated.

use crate::config::DeckConfig;
use crate::deck::DeckManager;
use crate::item::ItemId;

/// Stagger between the intro animations of consecutive pile entries.
pub const INTRO_STAGGER_MS: u32 = 100;

/// Resting placement of one entry of the visible window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackSlot {
    pub item_id: ItemId,
    /// 0 for the front card.
    pub depth: usize,
    pub offset_y: f32,
    /// Degrees; stable for a given id.
    pub rotation: f32,
    /// Higher draws on top.
    pub z_index: usize,
    pub intro_delay_ms: u32,
}

impl StackSlot {
    pub fn is_front(&self) -> bool {
        self.depth == 0
    }
}

/// Tilt of a card sitting under the front card, derived from its id.
pub fn stack_rotation(item_id: ItemId, depth: usize) -> f32 {
    if depth == 0 {
        return 0.0;
    }
    let sign = if item_id % 2 == 0 { -1.0 } else { 1.0 };
    sign * (item_id % 3 + 1) as f32
}

/// Lays out the first `visible_stack_size` items of the deck.
pub fn layout(deck: &DeckManager, config: &DeckConfig) -> Vec<StackSlot> {
    let remaining = deck.len();
    deck.visible(config.visible_stack_size)
        .enumerate()
        .map(|(depth, item)| StackSlot {
            item_id: item.id,
            depth,
            offset_y: depth as f32 * config.stack_offset_step,
            rotation: stack_rotation(item.id, depth),
            z_index: remaining - depth,
            intro_delay_ms: depth as u32 * INTRO_STAGGER_MS,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;

    #[test]
    fn front_card_is_untilted() {
        assert_eq!(stack_rotation(5, 0), 0.0);
    }

    #[test]
    fn rotation_depends_only_on_id() {
        assert_eq!(stack_rotation(4, 1), -2.0);
        assert_eq!(stack_rotation(4, 2), -2.0);
        assert_eq!(stack_rotation(3, 1), 1.0);
        assert_eq!(stack_rotation(5, 2), 3.0);
    }

    #[test]
    fn layout_stacks_the_window() {
        let deck = DeckManager::new((1..=5).map(|id| Item::new(id, "")).collect());
        let slots = layout(&deck, &DeckConfig::default());

        assert_eq!(slots.len(), 3);
        assert!(slots[0].is_front());
        assert_eq!(slots[1].offset_y, 6.0);
        assert_eq!(slots[2].offset_y, 12.0);
        assert_eq!(
            slots.iter().map(|s| s.z_index).collect::<Vec<_>>(),
            vec![5, 4, 3]
        );
        assert_eq!(slots[2].intro_delay_ms, 200);
    }
}
