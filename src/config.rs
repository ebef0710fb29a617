// Decoder configuration

use serde::{Deserialize, Serialize};

/// Default cap on operator nesting depth
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// When comparison operators have their operand count checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArityCheck {
    /// Checked by the evaluator; decoding accepts any operand count
    #[default]
    Deferred,
    /// Checked as soon as the comparison packet is decoded
    Eager,
}

/// Settings for a decode call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoderConfig {
    /// Maximum operator nesting depth; the root sits at depth 0
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    #[serde(default)]
    pub arity_check: ArityCheck,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            arity_check: ArityCheck::Deferred,
        }
    }
}

impl DecoderConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_arity_check(mut self, arity_check: ArityCheck) -> Self {
        self.arity_check = arity_check;
        self
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DecoderConfig::default();
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(config.arity_check, ArityCheck::Deferred);
    }

    #[test]
    fn test_from_partial_json() {
        let config = DecoderConfig::from_json(r#"{"arity_check": "eager"}"#).unwrap();
        assert_eq!(config.arity_check, ArityCheck::Eager);
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);

        let config = DecoderConfig::from_json("{}").unwrap();
        assert_eq!(config, DecoderConfig::default());
    }

    #[test]
    fn test_json_roundtrip() {
        let config = DecoderConfig::default()
            .with_max_depth(8)
            .with_arity_check(ArityCheck::Eager);
        let json = config.to_json().unwrap();
        assert_eq!(DecoderConfig::from_json(&json).unwrap(), config);
    }
}
