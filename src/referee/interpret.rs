//! Raw text → candidate move token.
//!
//! The interpreter never rejects anything itself. It only produces the
//! token handed to the validator, which then decides between "empty
//! input", "unknown move" and acceptance.
//!
//! | policy      | `"  Rock "` | `"I pick rock!"` | `"stone"` |
//! |-------------|-------------|------------------|-----------|
//! | `Exact`     | rock        | unknown          | unknown   |
//! | `Tokenized` | rock        | rock             | unknown   |
//! | `Synonyms`  | rock        | rock             | rock      |

use rustc_hash::FxHashMap;

use crate::core::{InputPolicy, Move, RefereeConfig};

/// Synonyms understood under [`InputPolicy::Synonyms`].
pub const BUILTIN_SYNONYMS: [(&str, Move); 8] = [
    ("stone", Move::Rock),
    ("r", Move::Rock),
    ("sheet", Move::Paper),
    ("p", Move::Paper),
    ("shears", Move::Scissors),
    ("s", Move::Scissors),
    ("nuke", Move::Bomb),
    ("b", Move::Bomb),
];

/// Applies one `InputPolicy` to raw input.
#[derive(Clone, Debug)]
pub struct Interpreter {
    policy: InputPolicy,
    synonyms: FxHashMap<String, Move>,
}

impl Interpreter {
    /// Interpreter with the built-in synonym table only.
    #[must_use]
    pub fn new(policy: InputPolicy) -> Self {
        let synonyms = BUILTIN_SYNONYMS
            .iter()
            .map(|&(word, mv)| (word.to_string(), mv))
            .collect();
        Self { policy, synonyms }
    }

    /// Interpreter for a referee config, including its extra synonyms.
    #[must_use]
    pub fn from_config(config: &RefereeConfig) -> Self {
        let mut interpreter = Self::new(config.input_policy);
        for (word, mv) in &config.extra_synonyms {
            interpreter.synonyms.insert(word.to_lowercase(), *mv);
        }
        interpreter
    }

    #[must_use]
    pub fn policy(&self) -> InputPolicy {
        self.policy
    }

    /// Candidate token for the validator, `None` when nothing usable remains.
    #[must_use]
    pub fn interpret(&self, text: &str) -> Option<String> {
        let normalized = text.trim().to_lowercase();
        match self.policy {
            InputPolicy::Exact => Some(normalized).filter(|s| !s.is_empty()),
            InputPolicy::Tokenized => Self::first_match(&normalized, |_| None),
            InputPolicy::Synonyms => {
                Self::first_match(&normalized, |token| self.synonyms.get(token).copied())
            }
        }
    }

    /// First token that names a move (directly or via `alias`). Falls back
    /// to the first token so the validator reports it as unknown.
    ///
    /// Apostrophes stay inside words, so "let's" is one token and never
    /// reaches the one-letter synonyms.
    fn first_match(text: &str, alias: impl Fn(&str) -> Option<Move>) -> Option<String> {
        let mut tokens = text
            .split(|c: char| !c.is_alphabetic() && !is_apostrophe(c))
            .map(|token| token.trim_matches(is_apostrophe))
            .filter(|token| !token.is_empty())
            .peekable();
        let first = tokens.peek().map(|token| token.to_string())?;

        tokens
            .find_map(|token| Move::from_token(token).or_else(|| alias(token)))
            .map(|mv| mv.token().to_string())
            .or(Some(first))
    }
}

fn is_apostrophe(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}')
}
