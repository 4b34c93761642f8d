use std::collections::{HashSet, VecDeque};

use swipe_logging::{swipe_info, swipe_warn};

use crate::classify::{Direction, SwipeOutcome};
use crate::item::{Item, ItemId};

/// Lifecycle of the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckStatus {
    /// The given item is on top and accepts input.
    Active(ItemId),
    /// Every item has been decided; only a reset does anything.
    Empty,
}

/// Result of removing the front item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Commit {
    pub direction: Direction,
    pub item_id: ItemId,
    /// The deck became empty with this commit.
    pub exhausted: bool,
}

/// Ordered items still to be decided. Front of the queue is the top card.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeckManager {
    original: Vec<Item>,
    remaining: VecDeque<Item>,
}

impl DeckManager {
    /// Builds a deck in the given order. Repeated ids keep their first occurrence.
    pub fn new(items: Vec<Item>) -> Self {
        let mut seen = HashSet::with_capacity(items.len());
        let original: Vec<Item> = items
            .into_iter()
            .filter(|item| {
                let fresh = seen.insert(item.id);
                if !fresh {
                    swipe_warn!("dropping duplicate item id={}", item.id);
                }
                fresh
            })
            .collect();
        let remaining = original.iter().cloned().collect();
        Self {
            original,
            remaining,
        }
    }

    pub fn status(&self) -> DeckStatus {
        match self.remaining.front() {
            Some(item) => DeckStatus::Active(item.id),
            None => DeckStatus::Empty,
        }
    }

    pub fn front(&self) -> Option<&Item> {
        self.remaining.front()
    }

    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Number of items the deck was seeded with.
    pub fn total(&self) -> usize {
        self.original.len()
    }

    /// The seed list, in order, as restored by [`DeckManager::reset`].
    pub fn original(&self) -> &[Item] {
        &self.original
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.remaining.iter()
    }

    pub fn ids(&self) -> Vec<ItemId> {
        self.remaining.iter().map(|item| item.id).collect()
    }

    /// The first `k` items, front first.
    pub fn visible(&self, k: usize) -> impl Iterator<Item = &Item> {
        self.remaining.iter().take(k)
    }

    /// Removes the front item if `item_id` is still the front and the outcome commits.
    ///
    /// A stale id (already removed or never on top) and `SwipeOutcome::None`
    /// leave the deck untouched.
    pub fn commit(&mut self, item_id: ItemId, outcome: SwipeOutcome) -> Option<Commit> {
        let direction = outcome.direction()?;
        match self.remaining.front() {
            Some(front) if front.id == item_id => {}
            Some(front) => {
                swipe_warn!(
                    "ignoring {} for item id={}; front is id={}",
                    direction,
                    item_id,
                    front.id
                );
                return None;
            }
            None => {
                swipe_warn!("ignoring {} for item id={}; deck is empty", direction, item_id);
                return None;
            }
        }
        self.remaining.pop_front();
        let exhausted = self.remaining.is_empty();
        if exhausted {
            swipe_info!("deck exhausted after {} items", self.original.len());
        }
        Some(Commit {
            direction,
            item_id,
            exhausted,
        })
    }

    /// Restores the full original list in its original order.
    pub fn reset(&mut self) {
        self.remaining = self.original.iter().cloned().collect();
        swipe_info!("deck reset with {} items", self.remaining.len());
    }
}
