use std::cell::RefCell;

use kotoba_core::{Resolution, ViewState};
use kotoba_types::AppEvent;
use slint::{ComponentHandle, Weak};

use crate::MainWindow;
use crate::model::paint;

/// Apply one backend event on the UI thread.
///
/// Returns `false` once the UI loop should stop.
pub fn handle_event(
    event: AppEvent,
    window_weak: &Weak<MainWindow>,
    view: &RefCell<ViewState>,
) -> bool {
    let Some(window) = window_weak.upgrade() else {
        return false;
    };

    match event {
        AppEvent::ParseFinished { id, outcome } => {
            let resolution = view.borrow_mut().resolve(id, outcome);
            tracing::debug!("[UI] Submission {} resolved: {:?}", id, resolution);
            if resolution != Resolution::Discarded {
                paint(&window, &view.borrow().render());
            }
        }
        AppEvent::Shutdown => {
            tracing::info!("[UI] Shutdown requested");
            window.hide().ok();
            slint::quit_event_loop().ok();
            return false;
        }
        AppEvent::SubmitSentence(_) => {
            // Produced by the UI itself, never sent back
        }
    }

    true
}
