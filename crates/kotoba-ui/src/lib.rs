use std::cell::RefCell;
use std::rc::Rc;

use kanal::{AsyncReceiver, AsyncSender};
use kotoba_config::ui::UiConfig;
use kotoba_core::{FocusTarget, Key, KeyAction, KeyEvent, StalePolicy, ViewState};
use kotoba_types::AppEvent;
use slint::ComponentHandle;

pub mod events;
pub mod model;

use events::handle_event;
use model::paint;

slint::include_modules!();

/// Run the window on the current thread until it is closed.
///
/// The view state lives here and is only touched from Slint callbacks and
/// from the task draining `app_to_ui_rx`, all on this thread.
pub fn ui_loop(
    config: &UiConfig,
    stale_policy: StalePolicy,
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let window = MainWindow::new()?;
    window.set_window_title(config.window_title.as_str().into());

    let view = Rc::new(RefCell::new(ViewState::new(stale_policy)));
    paint(&window, &view.borrow().render());

    // Enter in the input field
    {
        let view = view.clone();
        let window_weak = window.as_weak();
        let tx = ui_to_app_tx.clone();
        window.on_submitted(move |text| {
            let Some(window) = window_weak.upgrade() else {
                return;
            };

            let enter = KeyEvent::new(Key::Enter, FocusTarget::TextInput);
            if view.borrow_mut().handle_key(enter) != Some(KeyAction::Submit) {
                return;
            }

            let submission = view.borrow_mut().submit(text.as_str());
            paint(&window, &view.borrow().render());

            let tx = tx.clone();
            let spawned = slint::spawn_local(async move {
                let id = submission.id;
                if let Err(e) = tx.send(AppEvent::SubmitSentence(submission)).await {
                    tracing::error!("[UI] Failed to send submission {}: {}", id, e);
                }
            });
            if let Err(e) = spawned {
                tracing::error!("[UI] Failed to spawn submission task: {}", e);
            }
        });
    }

    // Pointer selection
    {
        let view = view.clone();
        let window_weak = window.as_weak();
        window.on_token_clicked(move |index| {
            let Some(window) = window_weak.upgrade() else {
                return;
            };
            let Ok(index) = usize::try_from(index) else {
                return;
            };
            if view.borrow_mut().click_token(index) {
                paint(&window, &view.borrow().render());
            }
        });
    }

    // Arrow keys, tagged with whether the text input had focus
    {
        let view = view.clone();
        let window_weak = window.as_weak();
        window.on_navigate_key(move |name, from_input| {
            let Some(window) = window_weak.upgrade() else {
                return;
            };
            let target = if from_input {
                FocusTarget::TextInput
            } else {
                FocusTarget::Surface
            };
            let before = view.borrow().selection();
            view.borrow_mut().handle_key(KeyEvent::new(Key::from_name(&name), target));
            if view.borrow().selection() != before {
                paint(&window, &view.borrow().render());
            }
        });
    }

    // Backend -> UI
    {
        let view = view.clone();
        let window_weak = window.as_weak();
        slint::spawn_local(async move {
            while let Ok(event) = app_to_ui_rx.recv().await {
                if !handle_event(event, &window_weak, &view) {
                    break;
                }
            }
            tracing::debug!("[UI] Backend channel closed");
        })?;
    }

    window.show()?;
    slint::run_event_loop()?;
    window.hide().ok();

    Ok(())
}
