//! Match state: scores, round count, bomb usage, and round history.
//!
//! `MatchState` is the only mutable entity in the engine. It is created
//! fresh at match start and changed once per completed round through
//! [`MatchState::apply_result`] (or [`MatchState::forfeit_round`] when the
//! referee consumes a round on invalid input). Both funnel into a single
//! private commit step.
//!
//! Fields are private; everything outside this module reads through
//! accessors. Deserialization replays the history and rejects any state
//! the mutators could not have produced.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::MATCH_ROUNDS;
use super::moves::Move;
use super::player::{Player, PlayerMap};
use crate::error::StateError;
use crate::rules::{resolve, Resolution};

/// Winner of a single round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    User,
    Bot,
    Draw,
}

impl Winner {
    /// The winning player, if any.
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Winner::User => Some(Player::User),
            Winner::Bot => Some(Player::Bot),
            Winner::Draw => None,
        }
    }

    /// Display label: "You", "Bot" or "Draw".
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Winner::User => "You",
            Winner::Bot => "Bot",
            Winner::Draw => "Draw",
        }
    }
}

impl From<Player> for Winner {
    fn from(player: Player) -> Self {
        match player {
            Player::User => Winner::User,
            Player::Bot => Winner::Bot,
        }
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Winner::User => f.write_str("user"),
            Winner::Bot => f.write_str("bot"),
            Winner::Draw => f.write_str("draw"),
        }
    }
}

/// Overall result of a match, decided purely by comparing scores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    UserWins,
    BotWins,
    Draw,
}

impl MatchOutcome {
    #[must_use]
    pub fn from_scores(user_score: u8, bot_score: u8) -> Self {
        match user_score.cmp(&bot_score) {
            std::cmp::Ordering::Greater => MatchOutcome::UserWins,
            std::cmp::Ordering::Less => MatchOutcome::BotWins,
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
        }
    }

    /// Display label: "User wins", "Bot wins" or "Draw".
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            MatchOutcome::UserWins => "User wins",
            MatchOutcome::BotWins => "Bot wins",
            MatchOutcome::Draw => "Draw",
        }
    }
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Snapshot of a completed round. Never modified once appended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round number, starting at 1.
    pub round: u8,

    /// `None` only for a forfeited round.
    pub user_move: Option<Move>,

    /// `None` only for a forfeited round.
    pub bot_move: Option<Move>,

    pub winner: Winner,

    /// Human-readable reason for the result.
    pub rationale: String,
}

impl RoundRecord {
    /// True when the round was consumed by rejected input.
    #[must_use]
    pub fn is_forfeit(&self) -> bool {
        self.user_move.is_none()
    }
}

/// Cumulative state of one match.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MatchStateRepr")]
pub struct MatchState {
    round_index: u8,
    scores: PlayerMap<u8>,
    bomb_used: PlayerMap<bool>,
    history: Vector<RoundRecord>,
}

/// Wire shape of `MatchState`, checked before it becomes one.
#[derive(Deserialize)]
struct MatchStateRepr {
    round_index: u8,
    scores: PlayerMap<u8>,
    bomb_used: PlayerMap<bool>,
    history: Vector<RoundRecord>,
}

impl TryFrom<MatchStateRepr> for MatchState {
    type Error = StateError;

    fn try_from(repr: MatchStateRepr) -> Result<Self, Self::Error> {
        let state = MatchState {
            round_index: repr.round_index,
            scores: repr.scores,
            bomb_used: repr.bomb_used,
            history: repr.history,
        };
        state.check()?;
        Ok(state)
    }
}

impl MatchState {
    /// Fresh state: no rounds, zero scores, both bombs available.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Accessors ===

    /// Rounds completed so far, in `0..=MATCH_ROUNDS`.
    #[must_use]
    pub fn round_index(&self) -> u8 {
        self.round_index
    }

    /// 1-based number of the round about to be played.
    #[must_use]
    pub fn current_round(&self) -> u8 {
        self.round_index + 1
    }

    /// True while the next round to play is the last one.
    #[must_use]
    pub fn is_final_round(&self) -> bool {
        self.round_index + 1 == MATCH_ROUNDS
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.round_index >= MATCH_ROUNDS
    }

    #[must_use]
    pub fn rounds_remaining(&self) -> u8 {
        MATCH_ROUNDS.saturating_sub(self.round_index)
    }

    #[must_use]
    pub fn score(&self, player: Player) -> u8 {
        self.scores[player]
    }

    #[must_use]
    pub fn user_score(&self) -> u8 {
        self.score(Player::User)
    }

    #[must_use]
    pub fn bot_score(&self) -> u8 {
        self.score(Player::Bot)
    }

    /// Rounds that ended without a winner.
    #[must_use]
    pub fn draws(&self) -> u8 {
        self.round_index
            .saturating_sub(self.user_score())
            .saturating_sub(self.bot_score())
    }

    #[must_use]
    pub fn bomb_used(&self, player: Player) -> bool {
        self.bomb_used[player]
    }

    /// Completed rounds, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<RoundRecord> {
        &self.history
    }

    #[must_use]
    pub fn last_round(&self) -> Option<&RoundRecord> {
        self.history.last()
    }

    /// Current standing by score, whether or not the match is over.
    #[must_use]
    pub fn standing(&self) -> MatchOutcome {
        MatchOutcome::from_scores(self.user_score(), self.bot_score())
    }

    /// Final outcome, once every round has been played.
    #[must_use]
    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.is_complete().then(|| self.standing())
    }

    /// Replay the history and confirm the round count, scores and bomb
    /// flags all follow from it.
    pub fn check(&self) -> Result<(), StateError> {
        if self.round_index > MATCH_ROUNDS {
            return Err(StateError::Inconsistent("more rounds than a match allows"));
        }
        if self.history.len() != usize::from(self.round_index) {
            return Err(StateError::Inconsistent("history length differs from round count"));
        }

        let mut scores: PlayerMap<u8> = PlayerMap::default();
        let mut bombs: PlayerMap<bool> = PlayerMap::default();
        for (i, record) in self.history.iter().enumerate() {
            if usize::from(record.round) != i + 1 {
                return Err(StateError::Inconsistent("history rounds out of sequence"));
            }
            let winner = match (record.user_move, record.bot_move) {
                (Some(user), Some(bot)) => resolve(user, bot).winner,
                (None, None) => Winner::Draw,
                _ => return Err(StateError::Inconsistent("round with a single move")),
            };
            if record.winner != winner {
                return Err(StateError::Inconsistent("round winner does not follow from its moves"));
            }
            if let Some(player) = winner.player() {
                scores[player] += 1;
            }
            for (player, mv) in [(Player::User, record.user_move), (Player::Bot, record.bot_move)] {
                if mv.is_some_and(Move::is_bomb) {
                    if bombs[player] {
                        return Err(StateError::Inconsistent("bomb played twice"));
                    }
                    bombs[player] = true;
                }
            }
        }

        if scores.iter().any(|(player, &score)| self.score(player) != score) {
            return Err(StateError::Inconsistent("scores differ from history"));
        }
        if bombs.iter().any(|(player, &used)| self.bomb_used(player) != used) {
            return Err(StateError::Inconsistent("bomb flags differ from history"));
        }
        Ok(())
    }

    // === Mutation ===

    /// Record a resolved round.
    ///
    /// Marks bombs as spent, credits the winner, appends the round to the
    /// history and advances the round index. Refuses to touch a completed
    /// match.
    pub fn apply_result(
        &mut self,
        user_move: Move,
        bot_move: Move,
        resolution: &Resolution,
    ) -> Result<&RoundRecord, StateError> {
        self.commit(
            Some(user_move),
            Some(bot_move),
            resolution.winner,
            resolution.rationale.clone(),
        )
    }

    /// Consume the current round as a draw with no moves played.
    pub fn forfeit_round(&mut self, reason: impl std::fmt::Display) -> Result<&RoundRecord, StateError> {
        self.commit(None, None, Winner::Draw, format!("forfeited: {reason}"))
    }

    fn commit(
        &mut self,
        user_move: Option<Move>,
        bot_move: Option<Move>,
        winner: Winner,
        rationale: String,
    ) -> Result<&RoundRecord, StateError> {
        if self.is_complete() {
            return Err(StateError::MatchComplete {
                rounds: self.round_index,
            });
        }

        if user_move.is_some_and(Move::is_bomb) {
            self.bomb_used[Player::User] = true;
        }
        if bot_move.is_some_and(Move::is_bomb) {
            self.bomb_used[Player::Bot] = true;
        }
        if let Some(player) = winner.player() {
            self.scores[player] += 1;
        }

        self.history.push_back(RoundRecord {
            round: self.round_index + 1,
            user_move,
            bot_move,
            winner,
            rationale,
        });
        self.round_index += 1;

        // Just pushed, so the history is non-empty.
        Ok(&self.history[self.history.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::resolve;

    fn play(state: &mut MatchState, user: Move, bot: Move) {
        let resolution = resolve(user, bot);
        state.apply_result(user, bot, &resolution).unwrap();
    }

    #[test]
    fn test_fresh_state() {
        let state = MatchState::new();
        assert_eq!(state.round_index(), 0);
        assert_eq!(state.current_round(), 1);
        assert_eq!(state.rounds_remaining(), 3);
        assert_eq!(state.user_score(), 0);
        assert_eq!(state.bot_score(), 0);
        assert!(!state.bomb_used(Player::User));
        assert!(!state.bomb_used(Player::Bot));
        assert!(state.history().is_empty());
        assert!(!state.is_complete());
        assert_eq!(state.outcome(), None);
    }

    #[test]
    fn test_apply_result_scores_and_rounds() {
        let mut state = MatchState::new();
        play(&mut state, Move::Rock, Move::Scissors);

        assert_eq!(state.round_index(), 1);
        assert_eq!(state.user_score(), 1);
        assert_eq!(state.bot_score(), 0);

        let record = state.last_round().unwrap();
        assert_eq!(record.round, 1);
        assert_eq!(record.user_move, Some(Move::Rock));
        assert_eq!(record.bot_move, Some(Move::Scissors));
        assert_eq!(record.winner, Winner::User);
        assert_eq!(record.rationale, "rock beats scissors");
    }

    #[test]
    fn test_apply_result_returns_appended_record() {
        let mut state = MatchState::new();
        let resolution = resolve(Move::Paper, Move::Scissors);
        let record = state
            .apply_result(Move::Paper, Move::Scissors, &resolution)
            .unwrap()
            .clone();

        assert_eq!(record.winner, Winner::Bot);
        assert_eq!(Some(&record), state.last_round());
    }

    #[test]
    fn test_draw_credits_nobody() {
        let mut state = MatchState::new();
        play(&mut state, Move::Paper, Move::Paper);

        assert_eq!(state.user_score(), 0);
        assert_eq!(state.bot_score(), 0);
        assert_eq!(state.draws(), 1);
        assert_eq!(state.round_index(), 1);
    }

    #[test]
    fn test_bomb_flags_are_sticky() {
        let mut state = MatchState::new();
        play(&mut state, Move::Bomb, Move::Rock);
        assert!(state.bomb_used(Player::User));
        assert!(!state.bomb_used(Player::Bot));

        play(&mut state, Move::Rock, Move::Bomb);
        assert!(state.bomb_used(Player::User));
        assert!(state.bomb_used(Player::Bot));

        play(&mut state, Move::Paper, Move::Rock);
        assert!(state.bomb_used(Player::User));
        assert!(state.bomb_used(Player::Bot));
    }

    #[test]
    fn test_bomb_draw_marks_both() {
        let mut state = MatchState::new();
        play(&mut state, Move::Bomb, Move::Bomb);

        assert!(state.bomb_used(Player::User));
        assert!(state.bomb_used(Player::Bot));
        assert_eq!(state.last_round().unwrap().winner, Winner::Draw);
        assert_eq!(state.user_score() + state.bot_score(), 0);
    }

    #[test]
    fn test_no_update_after_completion() {
        let mut state = MatchState::new();
        play(&mut state, Move::Rock, Move::Scissors);
        play(&mut state, Move::Rock, Move::Paper);
        play(&mut state, Move::Rock, Move::Rock);
        assert!(state.is_complete());

        let before = state.clone();
        let resolution = resolve(Move::Paper, Move::Rock);
        let err = state.apply_result(Move::Paper, Move::Rock, &resolution).unwrap_err();
        assert_eq!(err, StateError::MatchComplete { rounds: 3 });
        assert_eq!(state, before);

        assert!(state.forfeit_round("unknown move").is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn test_forfeit_round() {
        let mut state = MatchState::new();
        let record = state.forfeit_round("unknown move").unwrap().clone();

        assert!(record.is_forfeit());
        assert_eq!(record.winner, Winner::Draw);
        assert_eq!(record.rationale, "forfeited: unknown move");
        assert_eq!(state.round_index(), 1);
        assert_eq!(state.draws(), 1);
        assert!(!state.bomb_used(Player::User));
    }

    #[test]
    fn test_score_invariant() {
        let mut state = MatchState::new();
        play(&mut state, Move::Rock, Move::Scissors);
        play(&mut state, Move::Rock, Move::Rock);
        play(&mut state, Move::Scissors, Move::Rock);

        assert_eq!(
            state.user_score() + state.bot_score() + state.draws(),
            state.round_index()
        );
        assert_eq!(state.history().len(), state.round_index() as usize);
        assert_eq!(state.outcome(), Some(MatchOutcome::Draw));
    }

    #[test]
    fn test_history_rounds_are_sequential() {
        let mut state = MatchState::new();
        play(&mut state, Move::Rock, Move::Paper);
        state.forfeit_round("empty input").unwrap();
        play(&mut state, Move::Bomb, Move::Paper);

        let rounds: Vec<u8> = state.history().iter().map(|r| r.round).collect();
        assert_eq!(rounds, vec![1, 2, 3]);
    }

    #[test]
    fn test_outcome_labels() {
        assert_eq!(MatchOutcome::from_scores(2, 1).label(), "User wins");
        assert_eq!(MatchOutcome::from_scores(0, 1).label(), "Bot wins");
        assert_eq!(MatchOutcome::from_scores(1, 1).label(), "Draw");
    }

    #[test]
    fn test_winner_labels() {
        assert_eq!(Winner::User.label(), "You");
        assert_eq!(Winner::Bot.label(), "Bot");
        assert_eq!(Winner::Draw.label(), "Draw");
        assert_eq!(Winner::from(Player::Bot), Winner::Bot);
    }

    #[test]
    fn test_state_serde() {
        let mut state = MatchState::new();
        play(&mut state, Move::Bomb, Move::Paper);

        let json = serde_json::to_string(&state).unwrap();
        let back: MatchState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    fn tampered(edit: impl FnOnce(&mut serde_json::Value)) -> Result<MatchState, serde_json::Error> {
        let mut state = MatchState::new();
        play(&mut state, Move::Rock, Move::Scissors);
        play(&mut state, Move::Bomb, Move::Bomb);

        let mut value = serde_json::to_value(&state).unwrap();
        edit(&mut value);
        serde_json::from_value(value)
    }

    #[test]
    fn test_untouched_state_decodes() {
        let state = tampered(|_| {}).unwrap();
        assert_eq!(state.check(), Ok(()));
        assert_eq!(state.draws(), 1);
    }

    #[test]
    fn test_inflated_score_is_rejected() {
        let err = tampered(|v| v["scores"]["data"][0] = 3.into()).unwrap_err();
        assert!(err.to_string().contains("scores differ from history"), "{err}");
    }

    #[test]
    fn test_round_count_must_match_history() {
        let err = tampered(|v| v["round_index"] = 1.into()).unwrap_err();
        assert!(err.to_string().contains("history length"), "{err}");

        let err = tampered(|v| v["round_index"] = 9.into()).unwrap_err();
        assert!(err.to_string().contains("more rounds"), "{err}");
    }

    #[test]
    fn test_cleared_bomb_flag_is_rejected() {
        let err = tampered(|v| v["bomb_used"]["data"][1] = false.into()).unwrap_err();
        assert!(err.to_string().contains("bomb flags"), "{err}");
    }

    #[test]
    fn test_rewritten_winner_is_rejected() {
        let err = tampered(|v| v["history"][0]["winner"] = "bot".into()).unwrap_err();
        assert!(err.to_string().contains("does not follow"), "{err}");
    }

    #[test]
    fn test_draws_never_underflow() {
        let mut state = MatchState::new();
        state.scores[Player::User] = 2;
        state.round_index = 1;
        assert_eq!(state.draws(), 0);
        assert!(state.check().is_err());
    }
}
