//! Referee configuration.
//!
//! Two behaviors are configuration rather than fixed rules:
//! - `InputPolicy`: how raw text is interpreted as a move
//! - `InvalidInputPolicy`: whether rejected input consumes the round
//!
//! The number of rounds is fixed at [`MATCH_ROUNDS`].

use serde::{Deserialize, Serialize};

use super::moves::Move;

/// Rounds in a match.
pub const MATCH_ROUNDS: u8 = 3;

/// How raw input text is mapped to a candidate move token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputPolicy {
    /// Trim and lowercase; the whole string must be a move token.
    #[default]
    Exact,
    /// Split on non-letters; the first token naming a move wins.
    Tokenized,
    /// `Tokenized`, plus a synonym table for tokens that are not moves.
    Synonyms,
}

impl std::fmt::Display for InputPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputPolicy::Exact => f.write_str("exact"),
            InputPolicy::Tokenized => f.write_str("tokenized"),
            InputPolicy::Synonyms => f.write_str("synonyms"),
        }
    }
}

/// What happens to the round when the user's input is rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidInputPolicy {
    /// State is untouched; the user must try again.
    #[default]
    Retry,
    /// The round is consumed and recorded as a draw.
    Forfeit,
}

impl std::fmt::Display for InvalidInputPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidInputPolicy::Retry => f.write_str("retry"),
            InvalidInputPolicy::Forfeit => f.write_str("forfeit"),
        }
    }
}

/// Referee configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefereeConfig {
    /// Interpretation of raw input text.
    pub input_policy: InputPolicy,

    /// Handling of rejected input.
    pub invalid_input: InvalidInputPolicy,

    /// Synonyms added on top of the built-in table.
    ///
    /// Only consulted under [`InputPolicy::Synonyms`]. Keys are matched
    /// after lowercasing.
    #[serde(default)]
    pub extra_synonyms: Vec<(String, Move)>,
}

impl RefereeConfig {
    #[must_use]
    pub fn with_input_policy(mut self, policy: InputPolicy) -> Self {
        self.input_policy = policy;
        self
    }

    #[must_use]
    pub fn with_invalid_input(mut self, policy: InvalidInputPolicy) -> Self {
        self.invalid_input = policy;
        self
    }

    /// Add a synonym. Enables nothing by itself; see `extra_synonyms`.
    #[must_use]
    pub fn with_synonym(mut self, word: impl Into<String>, mv: Move) -> Self {
        self.extra_synonyms.push((word.into().to_lowercase(), mv));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RefereeConfig::default();
        assert_eq!(config.input_policy, InputPolicy::Exact);
        assert_eq!(config.invalid_input, InvalidInputPolicy::Retry);
        assert!(config.extra_synonyms.is_empty());
    }

    #[test]
    fn test_builder() {
        let config = RefereeConfig::default()
            .with_input_policy(InputPolicy::Synonyms)
            .with_invalid_input(InvalidInputPolicy::Forfeit)
            .with_synonym("Boulder", Move::Rock);

        assert_eq!(config.input_policy, InputPolicy::Synonyms);
        assert_eq!(config.invalid_input, InvalidInputPolicy::Forfeit);
        assert_eq!(config.extra_synonyms, vec![("boulder".to_string(), Move::Rock)]);
    }

    #[test]
    fn test_config_serde() {
        let config = RefereeConfig::default().with_input_policy(InputPolicy::Tokenized);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"tokenized\""));

        let back: RefereeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_missing_synonyms_default() {
        let json = r#"{"input_policy":"synonyms","invalid_input":"forfeit"}"#;
        let config: RefereeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.invalid_input, InvalidInputPolicy::Forfeit);
        assert!(config.extra_synonyms.is_empty());
    }
}
