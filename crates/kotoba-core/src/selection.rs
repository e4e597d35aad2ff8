use kotoba_types::{ParseResult, SentenceAnalysis};

/// Which token of the current analysis is selected.
///
/// The selected word is always read back through the analysis, so a
/// selection can never carry a word without an index or the other way round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Unselected,
    SelectedAt(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    ClickToken(usize),
    NavigateNext,
    NavigatePrevious,
    /// A new analysis replaced the old one
    Reset,
}

impl Selection {
    pub fn index(self) -> Option<usize> {
        match self {
            Selection::Unselected => None,
            Selection::SelectedAt(i) => Some(i),
        }
    }

    /// Index in the `-1 = nothing selected` convention used by log output
    pub fn raw_index(self) -> isize {
        self.index().map_or(-1, |i| i as isize)
    }

    /// The selected token, if any
    pub fn word(self, analysis: &SentenceAnalysis) -> Option<&ParseResult> {
        self.index().and_then(|i| analysis.get(i))
    }

    /// Next state for `transition` over a sequence of `len` tokens.
    ///
    /// Moves that would leave `0..len` return `self` unchanged.
    pub fn apply(self, transition: Transition, len: usize) -> Selection {
        match (transition, self) {
            (Transition::Reset, _) => Selection::Unselected,
            (Transition::ClickToken(i), _) if i < len => Selection::SelectedAt(i),
            (Transition::ClickToken(i), current) => {
                tracing::warn!("Ignoring click on token {} of {}", i, len);
                current
            }
            (Transition::NavigateNext, Selection::SelectedAt(i)) if i + 1 < len => {
                Selection::SelectedAt(i + 1)
            }
            (Transition::NavigatePrevious, Selection::SelectedAt(i)) if i > 0 => {
                Selection::SelectedAt(i - 1)
            }
            (Transition::NavigateNext | Transition::NavigatePrevious, current) => current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_selects_any_valid_index() {
        assert_eq!(
            Selection::Unselected.apply(Transition::ClickToken(2), 3),
            Selection::SelectedAt(2)
        );
        assert_eq!(
            Selection::SelectedAt(2).apply(Transition::ClickToken(0), 3),
            Selection::SelectedAt(0)
        );
    }

    #[test]
    fn click_out_of_range_is_ignored() {
        assert_eq!(
            Selection::SelectedAt(1).apply(Transition::ClickToken(3), 3),
            Selection::SelectedAt(1)
        );
        assert_eq!(
            Selection::Unselected.apply(Transition::ClickToken(0), 0),
            Selection::Unselected
        );
    }

    #[test]
    fn navigation_stops_at_the_ends() {
        assert_eq!(
            Selection::SelectedAt(2).apply(Transition::NavigateNext, 3),
            Selection::SelectedAt(2)
        );
        assert_eq!(
            Selection::SelectedAt(0).apply(Transition::NavigatePrevious, 3),
            Selection::SelectedAt(0)
        );
        assert_eq!(
            Selection::SelectedAt(1).apply(Transition::NavigateNext, 3),
            Selection::SelectedAt(2)
        );
        assert_eq!(
            Selection::SelectedAt(1).apply(Transition::NavigatePrevious, 3),
            Selection::SelectedAt(0)
        );
    }

    #[test]
    fn navigation_needs_a_selection() {
        assert_eq!(
            Selection::Unselected.apply(Transition::NavigateNext, 3),
            Selection::Unselected
        );
        assert_eq!(
            Selection::Unselected.apply(Transition::NavigatePrevious, 3),
            Selection::Unselected
        );
    }

    #[test]
    fn reset_always_unselects() {
        for state in [Selection::Unselected, Selection::SelectedAt(0), Selection::SelectedAt(7)] {
            assert_eq!(state.apply(Transition::Reset, 8), Selection::Unselected);
            assert_eq!(state.apply(Transition::Reset, 0), Selection::Unselected);
        }
    }

    #[test]
    fn raw_index_uses_minus_one_for_nothing() {
        assert_eq!(Selection::Unselected.raw_index(), -1);
        assert_eq!(Selection::SelectedAt(4).raw_index(), 4);
    }

    #[test]
    fn index_stays_in_bounds_for_any_sequence() {
        // Deterministic walk over every transition kind from several lengths
        let transitions = [
            Transition::NavigateNext,
            Transition::ClickToken(1),
            Transition::NavigateNext,
            Transition::NavigateNext,
            Transition::NavigateNext,
            Transition::ClickToken(9),
            Transition::NavigatePrevious,
            Transition::NavigatePrevious,
            Transition::NavigatePrevious,
            Transition::ClickToken(0),
            Transition::NavigatePrevious,
        ];

        for len in 0..5 {
            let mut state = Selection::Unselected;
            for _ in 0..3 {
                for &t in &transitions {
                    state = state.apply(t, len);
                    let raw = state.raw_index();
                    assert!(raw >= -1 && raw < len as isize, "len={len} state={state:?}");
                }
            }
        }
    }
}
