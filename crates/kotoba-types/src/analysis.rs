use serde::{Deserialize, Serialize};

/// One token of a parsed sentence, as returned by the parse service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    /// Exact surface substring of the submitted sentence
    pub original: String,
    /// `None` when the service found no dictionary entry
    #[serde(default)]
    pub definitions: Option<Vec<Definition>>,
}

impl ParseResult {
    /// Definitions in received order, empty when there are none
    pub fn definitions(&self) -> &[Definition] {
        self.definitions.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub entry: Entry,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conjugation: Option<Conjugation>,
}

/// Dictionary headword
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub kanji: Option<Vec<String>>,
    #[serde(default)]
    pub readings: Vec<String>,
    #[serde(default)]
    pub sense: Vec<Sense>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    #[serde(default)]
    pub glossary: Vec<String>,
    /// Part-of-speech tags, carried but not displayed
    #[serde(default)]
    pub pos: Option<Vec<String>>,
}

/// How the surface form was derived from its dictionary base
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conjugation {
    pub ending: String,
    pub base: String,
    pub pos: String,
    pub name: String,
}

/// Ordered tokens of one submitted sentence.
///
/// Always replaced as a whole when a new response arrives, never patched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SentenceAnalysis(Vec<ParseResult>);

impl SentenceAnalysis {
    pub fn new(tokens: Vec<ParseResult>) -> Self {
        Self(tokens)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ParseResult> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParseResult> {
        self.0.iter()
    }

    pub fn tokens(&self) -> &[ParseResult] {
        &self.0
    }
}
