use swipe_core::{update, DeckConfig, DeckState, Item, Msg};

#[test]
fn frame_at_rest_changes_nothing() {
    let mut state = DeckState::new(vec![Item::new(1, "a")], DeckConfig::default());
    assert!(!state.consume_dirty());

    let (mut next, effects) = update(state.clone(), Msg::Frame { dt_ms: 16.0 });

    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
    assert_eq!(state, next);
}
