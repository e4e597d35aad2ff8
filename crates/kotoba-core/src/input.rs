use crate::selection::Transition;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    /// Map a DOM-style key name (`"ArrowRight"`, `"Enter"`, ...)
    pub fn from_name(name: &str) -> Self {
        match name {
            "Enter" => Key::Enter,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            _ => Key::Other,
        }
    }
}

/// Element a key event originated from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    TextInput,
    /// Anywhere else in the window
    Surface,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub target: FocusTarget,
}

impl KeyEvent {
    pub fn new(key: Key, target: FocusTarget) -> Self {
        Self { key, target }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Submit the input field's current value
    Submit,
    Navigate(Transition),
}

/// Decide what a key event does before it reaches the selection machine.
///
/// Arrow keys inside the text input belong to text editing and never move
/// the selection. Enter only submits from the text input.
pub fn route_key(event: KeyEvent) -> Option<KeyAction> {
    match (event.target, event.key) {
        (FocusTarget::TextInput, Key::Enter) => Some(KeyAction::Submit),
        (FocusTarget::TextInput, _) => None,
        (FocusTarget::Surface, Key::ArrowRight) => {
            Some(KeyAction::Navigate(Transition::NavigateNext))
        }
        (FocusTarget::Surface, Key::ArrowLeft) => {
            Some(KeyAction::Navigate(Transition::NavigatePrevious))
        }
        (FocusTarget::Surface, _) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_in_text_input_are_dropped() {
        for key in [Key::ArrowLeft, Key::ArrowRight, Key::Other] {
            assert_eq!(route_key(KeyEvent::new(key, FocusTarget::TextInput)), None);
        }
    }

    #[test]
    fn arrows_on_surface_navigate() {
        assert_eq!(
            route_key(KeyEvent::new(Key::ArrowRight, FocusTarget::Surface)),
            Some(KeyAction::Navigate(Transition::NavigateNext))
        );
        assert_eq!(
            route_key(KeyEvent::new(Key::ArrowLeft, FocusTarget::Surface)),
            Some(KeyAction::Navigate(Transition::NavigatePrevious))
        );
    }

    #[test]
    fn enter_submits_only_from_input() {
        assert_eq!(
            route_key(KeyEvent::new(Key::Enter, FocusTarget::TextInput)),
            Some(KeyAction::Submit)
        );
        assert_eq!(route_key(KeyEvent::new(Key::Enter, FocusTarget::Surface)), None);
    }

    #[test]
    fn key_names() {
        assert_eq!(Key::from_name("ArrowRight"), Key::ArrowRight);
        assert_eq!(Key::from_name("ArrowLeft"), Key::ArrowLeft);
        assert_eq!(Key::from_name("Enter"), Key::Enter);
        assert_eq!(Key::from_name("a"), Key::Other);
    }
}
