use std::rc::Rc;

use kotoba_core::{Decoration, DefinitionView, RenderView, Rgb, TokenView};
use slint::{Color, ModelRc, SharedString, VecModel};

use crate::{DefinitionItem, MainWindow, TokenItem};

/// Push a freshly projected view into the window properties
pub fn paint(window: &MainWindow, view: &RenderView) {
    let tokens: Vec<TokenItem> = view.tokens.iter().map(token_item).collect();
    let definitions: Vec<DefinitionItem> = view.definitions.iter().map(definition_item).collect();

    window.set_tokens(ModelRc::from(Rc::new(VecModel::from(tokens))));
    window.set_definitions(ModelRc::from(Rc::new(VecModel::from(definitions))));
    window.set_loading(view.loading);
    window.set_error_text(view.error_banner.unwrap_or_default().into());
}

fn token_item(token: &TokenView) -> TokenItem {
    TokenItem {
        text: token.text.as_str().into(),
        color: color(token.color),
        decoration: decoration_code(token.decoration),
    }
}

fn definition_item(def: &DefinitionView) -> DefinitionItem {
    let senses: Vec<SharedString> = def.senses.iter().map(|s| s.as_str().into()).collect();

    DefinitionItem {
        written: join_forms(&def.written_forms).into(),
        readings: join_forms(&def.readings).into(),
        conjugation: def.conjugation.clone().unwrap_or_default().into(),
        senses: ModelRc::from(Rc::new(VecModel::from(senses))),
    }
}

fn color(rgb: Rgb) -> Color {
    Color::from_rgb_u8(rgb.r, rgb.g, rgb.b)
}

/// Matches the `decoration` codes in `app.slint`
pub(crate) fn decoration_code(decoration: Decoration) -> i32 {
    match decoration {
        Decoration::None => 0,
        Decoration::Selected => 1,
        Decoration::Echo => 2,
    }
}

pub(crate) fn join_forms(forms: &[String]) -> String {
    forms.join(" ")
}
