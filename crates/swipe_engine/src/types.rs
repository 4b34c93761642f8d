use swipe_core::{Direction, Effect, ItemId};

/// Notification delivered to every subscriber of a [`crate::DeckSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckEvent {
    /// The front item was decided. Sent after the deck has already moved on.
    Decision {
        direction: Direction,
        item_id: ItemId,
        frame: u64,
    },
    /// No items are left.
    Exhausted { frame: u64 },
    /// The deck was refilled from its original list.
    Reset { len: usize, frame: u64 },
}

impl DeckEvent {
    pub(crate) fn from_effect(effect: Effect, frame: u64) -> Self {
        match effect {
            Effect::Decision { direction, item_id } => DeckEvent::Decision {
                direction,
                item_id,
                frame,
            },
            Effect::Exhausted => DeckEvent::Exhausted { frame },
            Effect::Reset { len } => DeckEvent::Reset { len, frame },
        }
    }
}
