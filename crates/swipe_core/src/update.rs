use swipe_logging::{swipe_debug, swipe_info, swipe_trace, swipe_warn};

use crate::classify::{classify, feedback_direction, Direction, SwipeThresholds};
use crate::gesture::GestureSample;
use crate::{DeckState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
///
/// Effects describe transitions that have already been applied to the
/// returned state.
pub fn update(mut state: DeckState, msg: Msg) -> (DeckState, Vec<Effect>) {
    let effects = match msg {
        Msg::PointerDown { x, y, at_ms } => {
            if state.deck.is_empty() {
                swipe_debug!("pointer down ignored; deck is empty");
            } else if state.tracker.pointer_down(x, y, at_ms) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::PointerMove { x, y, at_ms } => {
            if let Some(sample) = state.tracker.pointer_move(x, y, at_ms) {
                state.motion.drag_to(&sample, &state.config);
                state.feedback = feedback_direction(&sample);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::PointerUp { x, y, at_ms } => match state.tracker.pointer_up(x, y, at_ms) {
            Some(sample) => release(&mut state, &sample),
            None => Vec::new(),
        },
        Msg::Trigger(direction) => trigger(&mut state, direction),
        Msg::Reset => {
            state.deck.reset();
            state.tracker.cancel();
            state.motion.clear();
            state.feedback = None;
            state.stats = Default::default();
            state.mark_dirty();
            vec![Effect::Reset {
                len: state.deck.len(),
            }]
        }
        Msg::Frame { dt_ms } => {
            if state.motion.is_animating() {
                swipe_trace!(
                    "frame dt={:.1}ms front={:?} exiting={}",
                    dt_ms,
                    state.motion.front_phase(),
                    state.motion.exiting().len()
                );
                for item_id in state.motion.step(dt_ms, &state.config) {
                    swipe_trace!("item id={} left the viewport", item_id);
                }
                state.mark_dirty();
            }
            Vec::new()
        }
    };

    (state, effects)
}

fn release(state: &mut DeckState, sample: &GestureSample) -> Vec<Effect> {
    state.feedback = None;
    let outcome = classify(sample, &SwipeThresholds::from(&state.config));
    swipe_debug!(
        "release dx={:.1} dy={:.1} vx={:.3} vy={:.3} -> {:?}",
        sample.dx,
        sample.dy,
        sample.vx,
        sample.vy,
        outcome
    );
    match outcome.direction() {
        Some(direction) => commit_front(state, direction, (sample.vx, sample.vy)),
        None => {
            state.motion.revert(&state.config);
            state.mark_dirty();
            Vec::new()
        }
    }
}

fn trigger(state: &mut DeckState, direction: Direction) -> Vec<Effect> {
    if state.deck.is_empty() {
        swipe_warn!("trigger {} ignored; deck is empty", direction);
        return Vec::new();
    }
    if state.motion.is_exiting() {
        swipe_warn!("trigger {} ignored; previous card still exiting", direction);
        return Vec::new();
    }
    // A programmatic decision wins over a drag in progress.
    state.tracker.cancel();
    state.feedback = None;
    commit_front(state, direction, (0.0, 0.0))
}

fn commit_front(state: &mut DeckState, direction: Direction, release: (f32, f32)) -> Vec<Effect> {
    let Some(front_id) = state.deck.front().map(|item| item.id) else {
        return Vec::new();
    };
    let Some(commit) = state.deck.commit(front_id, direction.into()) else {
        return Vec::new();
    };

    state
        .motion
        .launch_exit(commit.item_id, direction, release, &state.config);
    state.stats.record(direction);
    state.mark_dirty();
    swipe_info!(
        "{} item id={} ({} remaining)",
        direction,
        commit.item_id,
        state.deck.len()
    );

    let mut effects = Vec::with_capacity(1 + usize::from(commit.exhausted));
    effects.push(Effect::Decision {
        direction,
        item_id: commit.item_id,
    });
    if commit.exhausted {
        effects.push(Effect::Exhausted);
    }
    effects
}
