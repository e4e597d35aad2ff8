use std::sync::atomic::{AtomicUsize, Ordering};

/// Backend bookkeeping shared by submission tasks
pub struct AppState {
    /// Requests sent to the parse service and not yet answered
    pub in_flight: AtomicUsize,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            in_flight: AtomicUsize::new(0),
        }
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
