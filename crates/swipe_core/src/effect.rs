use crate::classify::Direction;
use crate::item::ItemId;

/// Notifications produced by [`crate::update`], after the state change they report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// The front item was decided and removed.
    Decision { direction: Direction, item_id: ItemId },
    /// The last item was decided.
    Exhausted,
    /// The deck was refilled from the original list.
    Reset { len: usize },
}
