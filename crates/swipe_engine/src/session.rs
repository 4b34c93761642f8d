use std::sync::mpsc;

use swipe_core::{update, DeckConfig, DeckState, DeckViewModel, Direction, Item, Msg};
use swipe_logging::{swipe_debug, swipe_warn};

use crate::clock::FrameClock;
use crate::types::DeckEvent;

/// Narrow command surface handed to collaborators.
///
/// Commands are queued and applied on the session's next [`DeckSession::pump`],
/// in the order they were sent.
#[derive(Debug, Clone)]
pub struct DeckCommands {
    tx: mpsc::Sender<Msg>,
}

impl DeckCommands {
    pub fn trigger(&self, direction: Direction) {
        let _ = self.tx.send(Msg::Trigger(direction));
    }

    /// Like [`DeckCommands::trigger`], for names coming from outside Rust.
    /// Unknown names are dropped; returns whether a command was queued.
    pub fn trigger_named(&self, name: &str) -> bool {
        match name.parse::<Direction>() {
            Ok(direction) => {
                self.trigger(direction);
                true
            }
            Err(err) => {
                swipe_warn!("ignoring trigger: {}", err);
                false
            }
        }
    }

    pub fn reset(&self) {
        let _ = self.tx.send(Msg::Reset);
    }
}

/// Owns a deck and runs it on the caller's thread.
///
/// Input arrives through [`DeckSession::dispatch`] or queued [`DeckCommands`];
/// decisions leave through channels handed out by [`DeckSession::subscribe`].
pub struct DeckSession {
    state: DeckState,
    clock: FrameClock,
    cmd_tx: mpsc::Sender<Msg>,
    cmd_rx: mpsc::Receiver<Msg>,
    subscribers: Vec<mpsc::Sender<DeckEvent>>,
}

impl DeckSession {
    pub fn new(items: Vec<Item>, config: DeckConfig) -> Self {
        Self::with_clock(items, config, FrameClock::default())
    }

    pub fn with_clock(items: Vec<Item>, config: DeckConfig, clock: FrameClock) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        Self {
            state: DeckState::new(items, config),
            clock,
            cmd_tx,
            cmd_rx,
            subscribers: Vec::new(),
        }
    }

    pub fn commands(&self) -> DeckCommands {
        DeckCommands {
            tx: self.cmd_tx.clone(),
        }
    }

    /// Opens a new event stream. Dropped receivers are pruned on the next send.
    pub fn subscribe(&mut self) -> mpsc::Receiver<DeckEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    pub fn state(&self) -> &DeckState {
        &self.state
    }

    pub fn view(&self) -> DeckViewModel {
        self.state.view()
    }

    pub fn frame(&self) -> u64 {
        self.clock.frame()
    }

    /// Returns whether the view changed since the last call.
    pub fn consume_dirty(&mut self) -> bool {
        self.state.consume_dirty()
    }

    /// Applies one message and publishes the resulting events.
    pub fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;

        let frame = self.clock.frame();
        for effect in effects {
            self.publish(DeckEvent::from_effect(effect, frame));
        }
    }

    /// Applies every queued command. Returns how many were processed.
    pub fn pump(&mut self) -> usize {
        let mut inbox = Vec::new();
        while let Ok(msg) = self.cmd_rx.try_recv() {
            inbox.push(msg);
        }
        let count = inbox.len();
        for msg in inbox {
            self.dispatch(msg);
        }
        count
    }

    /// Lets `elapsed_ms` of wall time pass: queued commands first, then every
    /// frame that became due.
    pub fn advance(&mut self, elapsed_ms: f32) {
        self.pump();
        let frame_ms = self.clock.frame_ms();
        let start = self.clock.frame();
        let due = self.clock.advance(elapsed_ms);
        for n in 1..=u64::from(due) {
            swipe_logging::set_frame(start + n);
            self.dispatch(Msg::Frame { dt_ms: frame_ms });
        }
    }

    /// Runs frames until nothing is moving, bounded by `max_ms`.
    pub fn settle(&mut self, max_ms: f32) {
        let frame_ms = self.clock.frame_ms();
        let mut spent = 0.0;
        while self.state.motion().is_animating() && spent < max_ms {
            self.advance(frame_ms);
            spent += frame_ms;
        }
    }

    fn publish(&mut self, event: DeckEvent) {
        swipe_debug!("publishing {:?} to {} subscribers", event, self.subscribers.len());
        self.subscribers.retain(|tx| tx.send(event).is_ok());
    }
}
