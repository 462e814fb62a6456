/// Drop-based rate limiter.
///
/// Accepts a call when at least `interval_ms` has passed since the last
/// accepted one. Rejected calls leave the state untouched; nothing is queued
/// or deferred.
#[derive(Clone, Debug)]
pub struct Throttle {
    interval_ms: f64,
    last_ms: Option<f64>,
}

impl Throttle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_ms: None,
        }
    }

    /// Returns `true` and records `now_ms` if the call is let through.
    pub fn try_acquire(&mut self, now_ms: f64) -> bool {
        if let Some(last) = self.last_ms {
            if now_ms < last || now_ms - last < self.interval_ms {
                return false;
            }
        }
        self.last_ms = Some(now_ms);
        true
    }

    #[inline]
    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    #[inline]
    pub fn last_ms(&self) -> Option<f64> {
        self.last_ms
    }
}
