use crate::domain::logging::get_time_provider;

/// Runs a callback at most once per `wait_ms`.
///
/// Calls inside the window are dropped, never queued. The window starts at
/// construction, so the first call only runs once `wait_ms` has elapsed.
pub struct Throttle<F: FnMut()> {
    callback: F,
    wait_ms: u64,
    last_call_ms: u64,
}

impl<F: FnMut()> Throttle<F> {
    pub fn new(callback: F, wait_ms: u64, now_ms: u64) -> Self {
        Self { callback, wait_ms, last_call_ms: now_ms }
    }

    /// Invoke the callback if more than `wait_ms` passed since the last run.
    /// Returns whether it ran.
    pub fn call_at(&mut self, now_ms: u64) -> bool {
        if now_ms.saturating_sub(self.last_call_ms) > self.wait_ms {
            (self.callback)();
            self.last_call_ms = now_ms;
            true
        } else {
            false
        }
    }

    /// [`call_at`](Self::call_at) with the global clock.
    pub fn call(&mut self) -> bool {
        self.call_at(get_time_provider().current_timestamp())
    }
}

/// Wrap `callback` in a closure gated by the global clock.
pub fn throttle<F: FnMut()>(callback: F, wait_ms: u64) -> impl FnMut() -> bool {
    let mut gate = Throttle::new(callback, wait_ms, get_time_provider().current_timestamp());
    move || gate.call()
}
