use std::env;

use serde::{Deserialize, Serialize};

fn default_endpoint() -> String {
    "http://localhost:8080/parse".to_string()
}

/// Parse service connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Full URL of the parse endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Drop responses that resolve after a newer submission was made.
    /// Off means the last response to arrive wins.
    #[serde(default)]
    pub discard_stale_responses: bool,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            discard_stale_responses: false,
        }
    }
}

impl NetworkConfig {
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_overrides(|key| env::var(key).ok());
        config
    }

    /// `PARSE_ENDPOINT`, `DISCARD_STALE_RESPONSES`
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(endpoint) = lookup("PARSE_ENDPOINT") {
            self.endpoint = endpoint;
        }

        if let Some(flag) = lookup("DISCARD_STALE_RESPONSES").and_then(|v| parse_flag(&v)) {
            self.discard_stale_responses = flag;
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_values() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" on "), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
