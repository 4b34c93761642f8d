use std::collections::HashSet;

use pretty_assertions::assert_eq;
use swipe_core::{
    update, DeckConfig, DeckManager, DeckState, DeckStatus, Direction, Effect, Item, ItemId, Msg,
    SwipeOutcome,
};

fn items(ids: &[ItemId]) -> Vec<Item> {
    ids.iter()
        .map(|&id| Item::new(id, format!("item {id}")))
        .collect()
}

fn settle(mut state: DeckState) -> DeckState {
    while state.motion().is_animating() {
        state = update(state, Msg::Frame { dt_ms: 16.0 }).0;
    }
    state
}

#[test]
fn length_tracks_commits_and_removed_ids_stay_gone() {
    let initial = [10, 11, 12, 13, 14, 15];
    let mut deck = DeckManager::new(items(&initial));
    let outcomes = [
        SwipeOutcome::Like,
        SwipeOutcome::None,
        SwipeOutcome::Collect,
        SwipeOutcome::Pass,
        SwipeOutcome::None,
        SwipeOutcome::Like,
    ];

    let mut removed = HashSet::new();
    let mut committed = 0;
    for outcome in outcomes {
        let front = deck.front().map(|item| item.id).unwrap();
        if let Some(commit) = deck.commit(front, outcome) {
            committed += 1;
            removed.insert(commit.item_id);
        }
        assert_eq!(deck.len(), initial.len() - committed);
        assert!(deck.items().all(|item| !removed.contains(&item.id)));
    }
    assert_eq!(committed, 4);
    assert_eq!(deck.ids(), vec![14, 15]);
}

#[test]
fn reset_after_exhaustion_restores_original_order() {
    let mut state = DeckState::new(items(&[7, 3, 9]), DeckConfig::default());
    let original = state.deck().original().to_vec();

    let mut decided = Vec::new();
    for direction in [Direction::Pass, Direction::Collect, Direction::Like] {
        let (next, effects) = update(state, Msg::Trigger(direction));
        for effect in effects {
            if let Effect::Decision { item_id, .. } = effect {
                decided.push(item_id);
            }
        }
        state = settle(next);
    }
    assert_eq!(decided, vec![7, 3, 9]);
    assert_eq!(state.status(), DeckStatus::Empty);

    let (state, _) = update(state, Msg::Reset);
    assert_eq!(state.deck().items().cloned().collect::<Vec<_>>(), original);
    assert_eq!(state.status(), DeckStatus::Active(7));
}

#[test]
fn reset_from_active_reseeds_full_list() {
    let state = DeckState::new(items(&[1, 2, 3]), DeckConfig::default());
    let (state, _) = update(state, Msg::Trigger(Direction::Like));
    assert_eq!(state.deck().ids(), vec![2, 3]);

    let (state, effects) = update(state, Msg::Reset);
    assert_eq!(effects, vec![Effect::Reset { len: 3 }]);
    assert_eq!(state.deck().ids(), vec![1, 2, 3]);
    assert!(state.motion().exiting().is_empty());
}

#[test]
fn one_decision_event_per_commit() {
    let mut state = DeckState::new(items(&[1, 2, 3, 4]), DeckConfig::default());
    let mut decisions = 0;
    for step in 0..40 {
        let msg = if step % 3 == 0 {
            Msg::Trigger(Direction::ALL[step % 2])
        } else {
            Msg::Frame { dt_ms: 16.0 }
        };
        let (next, effects) = update(state, msg);
        decisions += effects
            .iter()
            .filter(|effect| matches!(effect, Effect::Decision { .. }))
            .count();
        state = next;
    }
    assert_eq!(decisions, 4 - state.deck().len());
    assert_eq!(state.stats().total(), decisions);
}
