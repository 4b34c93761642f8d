/// Default frame length: 60 frames per second.
pub const FRAME_MS: f32 = 1000.0 / 60.0;

/// Fixed-timestep accumulator that turns wall-clock time into whole frames.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameClock {
    frame_ms: f32,
    pending_ms: f32,
    frame: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(FRAME_MS)
    }
}

impl FrameClock {
    pub fn new(frame_ms: f32) -> Self {
        let frame_ms = if frame_ms.is_finite() && frame_ms > 0.0 {
            frame_ms
        } else {
            FRAME_MS
        };
        Self {
            frame_ms,
            pending_ms: 0.0,
            frame: 0,
        }
    }

    pub fn frame_ms(&self) -> f32 {
        self.frame_ms
    }

    /// Frames completed so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Adds elapsed time and returns how many whole frames are now due.
    pub fn advance(&mut self, elapsed_ms: f32) -> u32 {
        if !elapsed_ms.is_finite() || elapsed_ms <= 0.0 {
            return 0;
        }
        self.pending_ms += elapsed_ms;
        let due = (self.pending_ms / self.frame_ms).floor();
        self.pending_ms -= due * self.frame_ms;
        let due = due as u32;
        self.frame += u64::from(due);
        due
    }
}
