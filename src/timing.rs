//! Rate limiting for high-frequency browser events.

#[cfg(test)]
#[path = "timing_test.rs"]
mod timing_test;

/// Leading-edge throttle: the first call passes, then calls are dropped
/// until `limit_ms` has elapsed since the last pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Throttle {
    limit_ms: f64,
    last_pass_ms: Option<f64>,
}

impl Throttle {
    #[must_use]
    pub fn new(limit_ms: f64) -> Self {
        Self { limit_ms, last_pass_ms: None }
    }

    /// Whether a call at `now_ms` may run.
    pub fn try_pass(&mut self, now_ms: f64) -> bool {
        if let Some(last) = self.last_pass_ms
            && now_ms - last < self.limit_ms
        {
            return false;
        }
        self.last_pass_ms = Some(now_ms);
        true
    }
}
