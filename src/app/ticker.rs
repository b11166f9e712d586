use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Fixed-cadence tick source driven by frame delta time. Best-effort: a
/// long frame yields several due ticks at once, a short one yields none.
/// Tests single-step by feeding synthetic deltas.
pub struct Ticker {
    period: f32,
    accumulator: f32,
}

impl Ticker {
    pub fn new(period: f32) -> Self {
        Self {
            period,
            accumulator: 0.0,
        }
    }

    /// Advance by `dt` seconds, returning how many ticks became due.
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt;
        let mut ticks = 0;
        while self.accumulator >= self.period {
            self.accumulator -= self.period;
            ticks += 1;
        }
        ticks
    }
}

/// Stop handle for the render loop. Cloneable; cancelling any clone stops
/// the loop at the next frame boundary.
#[derive(Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
