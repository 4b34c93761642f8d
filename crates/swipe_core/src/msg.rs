use crate::classify::Direction;

/// Inputs to the deck. Pointer messages always address the front card.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Pointer pressed on the front card.
    PointerDown { x: f32, y: f32, at_ms: f64 },
    /// Pointer moved while pressed.
    PointerMove { x: f32, y: f32, at_ms: f64 },
    /// Pointer released; ends the drag and may commit.
    PointerUp { x: f32, y: f32, at_ms: f64 },
    /// Programmatic decision on the front card.
    Trigger(Direction),
    /// Restore the original item list.
    Reset,
    /// One animation frame elapsed.
    Frame { dt_ms: f32 },
}
