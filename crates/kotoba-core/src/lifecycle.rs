/// Result of the most recent request that resolved
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LastOutcome {
    /// Nothing resolved yet
    #[default]
    Idle,
    Done,
    /// `cause` is logged, never displayed
    Error { cause: String },
}

/// Request lifecycle as the window sees it.
///
/// `pending` is tracked apart from the last outcome: while a request is in
/// flight the previous Done or Error stays authoritative.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestState {
    pending: bool,
    last: LastOutcome,
}

impl RequestState {
    pub fn new(pending: bool, last: LastOutcome) -> Self {
        Self { pending, last }
    }

    /// A request went out; the last outcome is left as is
    pub fn begin(&mut self) {
        self.pending = true;
    }

    /// A request resolved
    pub fn finish(&mut self, outcome: LastOutcome) {
        self.pending = false;
        self.last = outcome;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn is_error(&self) -> bool {
        matches!(self.last, LastOutcome::Error { .. })
    }

    pub fn last(&self) -> &LastOutcome {
        &self.last
    }
}

/// What to do with a response that resolves after a newer submission
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StalePolicy {
    /// Apply every response; the last one to arrive wins
    #[default]
    LastResolvedWins,
    /// Only apply the response of the newest submission
    DiscardStale,
}

impl StalePolicy {
    pub fn from_flag(discard_stale: bool) -> Self {
        if discard_stale {
            StalePolicy::DiscardStale
        } else {
            StalePolicy::LastResolvedWins
        }
    }
}
