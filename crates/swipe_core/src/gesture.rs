//! Turns raw pointer events for the front card into gesture samples.

/// Displacement and velocity of the current drag, relative to where it started.
///
/// `dy` is raw: a drag below the origin keeps its positive value here.
/// Renderers clamp it with [`GestureSample::visual_dy`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureSample {
    pub active: bool,
    pub dx: f32,
    pub dy: f32,
    /// Horizontal velocity in px/ms.
    pub vx: f32,
    /// Vertical velocity in px/ms.
    pub vy: f32,
}

impl GestureSample {
    /// A release sample, as emitted on pointer-up.
    pub fn terminal(dx: f32, dy: f32, vx: f32, vy: f32) -> Self {
        Self {
            active: false,
            dx,
            dy,
            vx,
            vy,
        }
    }

    /// An in-flight sample, as emitted on pointer-move.
    pub fn live(dx: f32, dy: f32, vx: f32, vy: f32) -> Self {
        Self {
            active: true,
            ..Self::terminal(dx, dy, vx, vy)
        }
    }

    /// Vertical displacement with downward motion suppressed.
    pub fn visual_dy(&self) -> f32 {
        self.dy.min(0.0)
    }

    pub fn is_finite(&self) -> bool {
        [self.dx, self.dy, self.vx, self.vy]
            .iter()
            .all(|v| v.is_finite())
    }
}

/// Event spacing at which `smoothing` is the weight of the newest delta.
const SMOOTHING_WINDOW_MS: f32 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Drag {
    origin_x: f32,
    origin_y: f32,
    last_x: f32,
    last_y: f32,
    last_at_ms: f64,
    vx: f32,
    vy: f32,
}

impl Drag {
    fn sample(&self, active: bool) -> GestureSample {
        GestureSample {
            active,
            dx: self.last_x - self.origin_x,
            dy: self.last_y - self.origin_y,
            vx: self.vx,
            vy: self.vy,
        }
    }

    fn advance(&mut self, x: f32, y: f32, at_ms: f64, smoothing: f32) {
        let dt = (at_ms - self.last_at_ms) as f32;
        if dt > 0.0 {
            let inst_vx = (x - self.last_x) / dt;
            let inst_vy = (y - self.last_y) / dt;
            // Weight by elapsed time, not event count: a pause drains old velocity.
            let alpha = 1.0 - (1.0 - smoothing).powf(dt / SMOOTHING_WINDOW_MS);
            self.vx = alpha * inst_vx + (1.0 - alpha) * self.vx;
            self.vy = alpha * inst_vy + (1.0 - alpha) * self.vy;
            self.last_at_ms = at_ms;
        }
        self.last_x = x;
        self.last_y = y;
    }
}

/// Tracks at most one drag at a time. Holds no state between drags.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureTracker {
    smoothing: f32,
    drag: Option<Drag>,
}

impl GestureTracker {
    pub fn new(smoothing: f32) -> Self {
        Self {
            smoothing: smoothing.clamp(f32::EPSILON, 1.0),
            drag: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.drag.is_some()
    }

    /// Starts a new drag at `(x, y)`, discarding any previous one.
    pub fn pointer_down(&mut self, x: f32, y: f32, at_ms: f64) -> bool {
        if !(x.is_finite() && y.is_finite() && at_ms.is_finite()) {
            return false;
        }
        self.drag = Some(Drag {
            origin_x: x,
            origin_y: y,
            last_x: x,
            last_y: y,
            last_at_ms: at_ms,
            vx: 0.0,
            vy: 0.0,
        });
        true
    }

    /// Emits an active sample for a move of the current drag.
    pub fn pointer_move(&mut self, x: f32, y: f32, at_ms: f64) -> Option<GestureSample> {
        let smoothing = self.smoothing;
        let drag = self.drag.as_mut()?;
        if x.is_finite() && y.is_finite() && at_ms.is_finite() {
            drag.advance(x, y, at_ms, smoothing);
        }
        Some(drag.sample(true))
    }

    /// Ends the current drag and emits its terminal sample.
    pub fn pointer_up(&mut self, x: f32, y: f32, at_ms: f64) -> Option<GestureSample> {
        let smoothing = self.smoothing;
        let mut drag = self.drag.take()?;
        if x.is_finite() && y.is_finite() && at_ms.is_finite() {
            drag.advance(x, y, at_ms, smoothing);
        }
        Some(drag.sample(false))
    }

    /// Drops the current drag without emitting anything.
    pub fn cancel(&mut self) {
        self.drag = None;
    }
}
