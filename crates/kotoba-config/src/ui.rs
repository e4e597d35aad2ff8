use serde::{Deserialize, Serialize};

fn default_window_title() -> String {
    "Japanese Parser".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    #[serde(default = "default_window_title")]
    pub window_title: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_title: default_window_title(),
        }
    }
}

impl UiConfig {
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    /// `KOTOBA_WINDOW_TITLE`
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(title) = lookup("KOTOBA_WINDOW_TITLE") {
            self.window_title = title;
        }
    }
}
