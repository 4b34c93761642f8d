//! Recorded input replay.
//!
//! A script is a JSON array of steps, each tagged by `op`. Every step moves
//! the session clock forward by its `ms` (16 when omitted) after it is applied.
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use swipe_core::Msg;
use swipe_logging::swipe_debug;

use crate::catalog::LoadError;
use crate::session::DeckSession;

pub const DEFAULT_STEP_MS: f32 = 16.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ScriptStep {
    Down {
        x: f32,
        y: f32,
        #[serde(default)]
        ms: Option<f32>,
    },
    Move {
        x: f32,
        y: f32,
        #[serde(default)]
        ms: Option<f32>,
    },
    /// Releases at the given point, or where the pointer last was.
    Up {
        #[serde(default)]
        x: Option<f32>,
        #[serde(default)]
        y: Option<f32>,
        #[serde(default)]
        ms: Option<f32>,
    },
    Wait {
        #[serde(default)]
        ms: Option<f32>,
    },
    Trigger {
        direction: String,
        #[serde(default)]
        ms: Option<f32>,
    },
    Reset {
        #[serde(default)]
        ms: Option<f32>,
    },
}

impl ScriptStep {
    pub fn duration_ms(&self) -> f32 {
        let ms = match self {
            ScriptStep::Down { ms, .. }
            | ScriptStep::Move { ms, .. }
            | ScriptStep::Up { ms, .. }
            | ScriptStep::Wait { ms }
            | ScriptStep::Trigger { ms, .. }
            | ScriptStep::Reset { ms } => *ms,
        };
        ms.filter(|ms| ms.is_finite() && *ms >= 0.0)
            .unwrap_or(DEFAULT_STEP_MS)
    }
}

pub fn parse_script(text: &str) -> Result<Vec<ScriptStep>, LoadError> {
    Ok(serde_json::from_str(text)?)
}

pub fn load_script(path: &Path) -> Result<Vec<ScriptStep>, LoadError> {
    parse_script(&fs::read_to_string(path)?)
}

/// Feeds every step into `session`, advancing its clock between steps.
pub fn replay(session: &mut DeckSession, steps: &[ScriptStep]) {
    let commands = session.commands();
    let mut now_ms = 0.0_f64;
    let mut last = (0.0_f32, 0.0_f32);

    for step in steps {
        swipe_debug!("script step {:?} at {}ms", step, now_ms);
        match step {
            ScriptStep::Down { x, y, .. } => {
                last = (*x, *y);
                session.dispatch(Msg::PointerDown {
                    x: *x,
                    y: *y,
                    at_ms: now_ms,
                });
            }
            ScriptStep::Move { x, y, .. } => {
                last = (*x, *y);
                session.dispatch(Msg::PointerMove {
                    x: *x,
                    y: *y,
                    at_ms: now_ms,
                });
            }
            ScriptStep::Up { x, y, .. } => {
                let x = x.unwrap_or(last.0);
                let y = y.unwrap_or(last.1);
                last = (x, y);
                session.dispatch(Msg::PointerUp { x, y, at_ms: now_ms });
            }
            ScriptStep::Wait { .. } => {}
            ScriptStep::Trigger { direction, .. } => {
                commands.trigger_named(direction);
            }
            ScriptStep::Reset { .. } => commands.reset(),
        }

        let elapsed = step.duration_ms();
        session.advance(elapsed);
        now_ms += f64::from(elapsed);
    }
    session.pump();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tagged_steps() {
        let steps = parse_script(
            r#"[
                {"op": "down", "x": 10, "y": 20},
                {"op": "move", "x": 30, "y": 20, "ms": 8},
                {"op": "up"},
                {"op": "trigger", "direction": "cart"},
                {"op": "wait", "ms": 500},
                {"op": "reset"}
            ]"#,
        )
        .unwrap();
        assert_eq!(steps.len(), 6);
        assert_eq!(
            steps[2],
            ScriptStep::Up {
                x: None,
                y: None,
                ms: None
            }
        );
        assert_eq!(steps[1].duration_ms(), 8.0);
        assert_eq!(steps[2].duration_ms(), DEFAULT_STEP_MS);
        assert_eq!(steps[4].duration_ms(), 500.0);
    }

    #[test]
    fn unknown_op_is_an_error() {
        assert!(parse_script(r#"[{"op": "shake"}]"#).is_err());
    }
}
