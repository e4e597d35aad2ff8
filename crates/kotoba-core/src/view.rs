use kotoba_types::{ParseOutcome, ParseResult, SentenceAnalysis, Submission, SubmissionId};

use crate::input::{KeyAction, KeyEvent, route_key};
use crate::lifecycle::{LastOutcome, RequestState, StalePolicy};
use crate::render::{RenderView, project};
use crate::selection::{Selection, Transition};

/// Effect of a finished request on the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// New analysis installed, selection reset
    Replaced,
    /// Previous analysis kept, error shown
    Failed,
    /// Superseded by a newer submission and dropped
    Discarded,
}

/// The single owner of everything the window shows.
///
/// All mutation goes through the methods below; [`ViewState::render`]
/// derives the paintable view from scratch every time.
#[derive(Debug, Default)]
pub struct ViewState {
    analysis: SentenceAnalysis,
    selection: Selection,
    request: RequestState,
    last_submission: SubmissionId,
    stale_policy: StalePolicy,
}

impl ViewState {
    pub fn new(stale_policy: StalePolicy) -> Self {
        Self {
            stale_policy,
            ..Self::default()
        }
    }

    pub fn analysis(&self) -> &SentenceAnalysis {
        &self.analysis
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn request(&self) -> &RequestState {
        &self.request
    }

    pub fn selected_word(&self) -> Option<&ParseResult> {
        self.selection.word(&self.analysis)
    }

    /// Start a request for `sentence`.
    ///
    /// Only the pending flag changes: the previous analysis, selection and
    /// error banner stay on screen until the request resolves.
    pub fn submit(&mut self, sentence: impl Into<String>) -> Submission {
        self.last_submission = self.last_submission.next();
        self.request.begin();

        let submission = Submission {
            id: self.last_submission,
            sentence: sentence.into(),
        };
        tracing::debug!(
            "Submission {} pending ({} chars)",
            submission.id,
            submission.sentence.chars().count()
        );
        submission
    }

    /// Apply the outcome of submission `id`
    pub fn resolve(&mut self, id: SubmissionId, outcome: ParseOutcome) -> Resolution {
        if self.stale_policy == StalePolicy::DiscardStale && id < self.last_submission {
            tracing::debug!(
                "Dropping stale response {} (latest is {})",
                id,
                self.last_submission
            );
            return Resolution::Discarded;
        }

        match outcome {
            ParseOutcome::Parsed(analysis) => {
                tracing::debug!("Submission {} parsed into {} tokens", id, analysis.len());
                self.analysis = analysis;
                self.selection = self.selection.apply(Transition::Reset, self.analysis.len());
                self.request.finish(LastOutcome::Done);
                Resolution::Replaced
            }
            ParseOutcome::Failed(cause) => {
                tracing::error!("Submission {} failed: {}", id, cause);
                self.request.finish(LastOutcome::Error { cause });
                Resolution::Failed
            }
        }
    }

    /// Returns whether the selection changed
    pub fn click_token(&mut self, index: usize) -> bool {
        self.transition(Transition::ClickToken(index))
    }

    /// Route a key event. Returns the action taken, if any; a
    /// [`KeyAction::Submit`] is left to the caller, which owns the input text.
    pub fn handle_key(&mut self, event: KeyEvent) -> Option<KeyAction> {
        let action = route_key(event)?;
        if let KeyAction::Navigate(transition) = action {
            self.transition(transition);
        }
        Some(action)
    }

    pub fn render(&self) -> RenderView {
        project(&self.analysis, self.selection, &self.request)
    }

    fn transition(&mut self, transition: Transition) -> bool {
        let next = self.selection.apply(transition, self.analysis.len());
        let changed = next != self.selection;
        if changed {
            tracing::debug!(
                "Selection {} -> {} ({:?})",
                self.selection.raw_index(),
                next.raw_index(),
                transition
            );
        }
        self.selection = next;
        changed
    }
}
