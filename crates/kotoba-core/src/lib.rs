pub mod input;
pub mod lifecycle;
pub mod render;
pub mod selection;
pub mod view;


pub use input::{FocusTarget, Key, KeyAction, KeyEvent};
pub use lifecycle::{LastOutcome, RequestState, StalePolicy};
pub use render::{DefinitionView, Decoration, RenderView, Rgb, TokenView};
pub use selection::{Selection, Transition};
pub use view::{Resolution, ViewState};
