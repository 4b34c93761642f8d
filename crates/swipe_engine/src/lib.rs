//! Swipe engine: drives a deck over time and fans its decisions out.
mod catalog;
mod clock;
mod script;
mod session;
mod types;

pub use catalog::{load_catalog, parse_catalog, LoadError};
pub use clock::{FrameClock, FRAME_MS};
pub use script::{load_script, parse_script, replay, ScriptStep, DEFAULT_STEP_MS};
pub use session::{DeckCommands, DeckSession};
pub use types::DeckEvent;
