use std::sync::Once;

use pretty_assertions::assert_eq;
use swipe_core::{DeckConfig, DeckStatus, Direction, Item, ItemId, Msg};
use swipe_engine::{DeckEvent, DeckSession};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(swipe_logging::initialize_for_tests);
}

fn session(ids: &[ItemId]) -> DeckSession {
    init_logging();
    let items = ids
        .iter()
        .map(|&id| Item::new(id, format!("item {id}")))
        .collect();
    DeckSession::new(items, DeckConfig::default())
}

fn decisions(events: &[DeckEvent]) -> Vec<(Direction, ItemId)> {
    events
        .iter()
        .filter_map(|event| match *event {
            DeckEvent::Decision {
                direction, item_id, ..
            } => Some((direction, item_id)),
            _ => None,
        })
        .collect()
}

#[test]
fn every_subscriber_sees_each_decision_once() {
    let mut session = session(&[1, 2]);
    let first = session.subscribe();
    let second = session.subscribe();

    session.commands().trigger(Direction::Like);
    assert_eq!(session.pump(), 1);

    let a: Vec<_> = first.try_iter().collect();
    let b: Vec<_> = second.try_iter().collect();
    assert_eq!(decisions(&a), vec![(Direction::Like, 1)]);
    assert_eq!(a, b);
}

#[test]
fn dropped_subscribers_do_not_block_others() {
    let mut session = session(&[1, 2]);
    drop(session.subscribe());
    let live = session.subscribe();

    session.dispatch(Msg::Trigger(Direction::Pass));
    assert_eq!(decisions(&live.try_iter().collect::<Vec<_>>()), vec![(Direction::Pass, 1)]);
}

#[test]
fn decision_arrives_after_the_deck_moved_on() {
    let mut session = session(&[4, 5]);
    let events = session.subscribe();

    session.dispatch(Msg::Trigger(Direction::Collect));
    let received: Vec<_> = events.try_iter().collect();
    assert_eq!(decisions(&received), vec![(Direction::Collect, 4)]);
    assert_eq!(session.state().status(), DeckStatus::Active(5));
    assert!(!session.state().deck().ids().contains(&4));
}

#[test]
fn commands_queue_until_pumped() {
    let mut session = session(&[1, 2, 3]);
    let events = session.subscribe();
    let commands = session.commands();

    commands.trigger(Direction::Like);
    assert!(events.try_recv().is_err());
    assert_eq!(session.state().deck().len(), 3);

    session.advance(16.0);
    assert_eq!(session.state().deck().len(), 2);
    assert_eq!(decisions(&events.try_iter().collect::<Vec<_>>()), vec![(Direction::Like, 1)]);
}

#[test]
fn unknown_trigger_names_are_ignored() {
    let mut session = session(&[1, 2]);
    let events = session.subscribe();
    let commands = session.commands();

    assert!(!commands.trigger_named("sideways"));
    assert_eq!(session.pump(), 0);
    assert!(events.try_recv().is_err());

    assert!(commands.trigger_named("cart"));
    session.pump();
    assert_eq!(
        decisions(&events.try_iter().collect::<Vec<_>>()),
        vec![(Direction::Collect, 1)]
    );
}

#[test]
fn exhaustion_and_reset_are_published() {
    let mut session = session(&[1]);
    let events = session.subscribe();
    let commands = session.commands();

    commands.trigger(Direction::Like);
    session.advance(16.0);
    session.settle(5_000.0);
    assert!(!session.state().motion().is_animating());

    commands.trigger(Direction::Like);
    commands.reset();
    session.advance(16.0);

    let received: Vec<_> = events.try_iter().collect();
    assert_eq!(decisions(&received), vec![(Direction::Like, 1)]);
    assert!(matches!(received[1], DeckEvent::Exhausted { .. }));
    assert!(matches!(received[2], DeckEvent::Reset { len: 1, .. }));
    assert_eq!(received.len(), 3);
    assert_eq!(session.state().status(), DeckStatus::Active(1));
}

#[test]
fn advance_runs_whole_frames_only() {
    let mut session = session(&[1, 2]);
    session.dispatch(Msg::Trigger(Direction::Pass));
    let start = session.frame();

    session.advance(10.0);
    assert_eq!(session.frame(), start);
    session.advance(10.0);
    assert_eq!(session.frame(), start + 1);
    assert!(session.consume_dirty());
}
