use kotoba_types::{Definition, SentenceAnalysis};

use crate::lifecycle::RequestState;
use crate::selection::Selection;

/// Message shown whenever a request fails, whatever the cause
pub const REQUEST_FAILED_MESSAGE: &str = "Failed to make request to backend";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Token colors, cycled by position
pub const WORD_COLORS: [Rgb; 4] = [
    Rgb::new(0x9C, 0x34, 0x4C),
    Rgb::new(0xAA, 0x5F, 0x39),
    Rgb::new(0x26, 0x71, 0x58),
    Rgb::new(0x57, 0x95, 0x32),
];

pub fn word_color(index: usize) -> Rgb {
    WORD_COLORS[index % WORD_COLORS.len()]
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Decoration {
    #[default]
    None,
    /// Dashed underline on the selected token
    Selected,
    /// Dotted underline on tokens with the selected token's text
    Echo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenView {
    pub index: usize,
    pub text: String,
    pub color: Rgb,
    pub decoration: Decoration,
}

impl TokenView {
    pub fn is_selected(&self) -> bool {
        self.decoration == Decoration::Selected
    }

    pub fn is_echo(&self) -> bool {
        self.decoration == Decoration::Echo
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefinitionView {
    pub written_forms: Vec<String>,
    pub readings: Vec<String>,
    pub conjugation: Option<String>,
    /// `"1. gloss-a gloss-b"`, numbered from one
    pub senses: Vec<String>,
}

impl DefinitionView {
    fn from_definition(def: &Definition) -> Self {
        let senses = def
            .entry
            .sense
            .iter()
            .enumerate()
            .map(|(i, sense)| format!("{}. {}", i + 1, sense.glossary.join(" ")))
            .collect();

        Self {
            written_forms: def.entry.kanji.clone().unwrap_or_default(),
            readings: def.entry.readings.clone(),
            conjugation: def.conjugation.as_ref().map(|c| c.name.clone()),
            senses,
        }
    }
}

/// Everything the window paints
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderView {
    pub tokens: Vec<TokenView>,
    pub definitions: Vec<DefinitionView>,
    pub loading: bool,
    pub error_banner: Option<&'static str>,
}

/// Project the view state into a paintable structure.
///
/// Pure: nothing is cached between calls.
pub fn project(
    analysis: &SentenceAnalysis,
    selection: Selection,
    request: &RequestState,
) -> RenderView {
    let selected_word = selection.word(analysis);
    let selected_text = selected_word.map(|w| w.original.as_str());

    let tokens = analysis
        .iter()
        .enumerate()
        .map(|(index, token)| {
            let decoration = if selection.index() == Some(index) {
                Decoration::Selected
            } else if selected_text == Some(token.original.as_str()) {
                Decoration::Echo
            } else {
                Decoration::None
            };

            TokenView {
                index,
                text: token.original.clone(),
                color: word_color(index),
                decoration,
            }
        })
        .collect();

    let definitions: Vec<DefinitionView> = selected_word
        .and_then(|w| w.definitions.as_ref())
        .map(|defs| defs.iter().map(DefinitionView::from_definition).collect())
        .unwrap_or_default();

    RenderView {
        tokens,
        definitions,
        loading: request.is_pending(),
        error_banner: request.is_error().then_some(REQUEST_FAILED_MESSAGE),
    }
}
