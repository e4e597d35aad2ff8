use std::fmt;

use crate::analysis::SentenceAnalysis;

/// Events exchanged between the UI thread and the backend
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Sentence submitted from the input field
    SubmitSentence(Submission),
    /// A submission finished, successfully or not
    ParseFinished {
        id: SubmissionId,
        outcome: ParseOutcome,
    },
    /// Close the window and stop the UI loop
    Shutdown,
}

/// Monotonic tag assigned to every submission
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubmissionId(pub u64);

impl SubmissionId {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub id: SubmissionId,
    /// Verbatim input field content, possibly empty
    pub sentence: String,
}

/// Result of one request to the parse service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Parsed(SentenceAnalysis),
    /// Transport failure; the string is the cause, kept for logs only
    Failed(String),
}
