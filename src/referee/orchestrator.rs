//! The referee: drives one round end to end.
//!
//! interpret → validate → choose bot move → resolve → apply → report
//!
//! Invalid input stops after validation. Under `InvalidInputPolicy::Retry`
//! nothing changes; under `Forfeit` the round is recorded as a draw.

use log::{debug, info, warn};

use crate::core::{
    GameRng, InvalidInputPolicy, MatchState, Move, Player, RefereeConfig,
};
use crate::error::{CheckpointError, MoveError, StateError};
use crate::rules::{legal_moves, resolve, validate};
use crate::strategy::{BombReserve, OpponentStrategy};

use super::checkpoint::Checkpoint;
use super::interpret::Interpreter;
use super::round::{Rejection, RoundOutcome, RoundReport};

/// Referee for a single match.
///
/// Owns the match state; nothing else can change it. One `Referee` per
/// match: separate matches never share state.
///
/// ```
/// use rps_referee::core::{GameRng, Move, RefereeConfig, Winner};
/// use rps_referee::referee::{Referee, RoundOutcome};
/// use rps_referee::strategy::Scripted;
///
/// let bot = Scripted::new([Move::Scissors]);
/// let mut referee = Referee::with_strategy(RefereeConfig::default(), GameRng::new(1), bot);
///
/// match referee.play_round("rock") {
///     RoundOutcome::Played(report) => assert_eq!(report.record.winner, Winner::User),
///     other => panic!("unexpected {other:?}"),
/// }
/// assert_eq!(referee.state().user_score(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Referee<S = BombReserve> {
    config: RefereeConfig,
    interpreter: Interpreter,
    state: MatchState,
    rng: GameRng,
    strategy: S,
}

impl Referee<BombReserve> {
    /// Referee with the default bot, seeded for reproducible play.
    #[must_use]
    pub fn new(config: RefereeConfig, seed: u64) -> Self {
        Self::with_strategy(config, GameRng::new(seed), BombReserve)
    }

    /// Resume a default-bot match from encoded checkpoint bytes.
    pub fn resume(bytes: &[u8]) -> Result<Self, CheckpointError> {
        Ok(Self::restore(Checkpoint::from_bytes(bytes)?, BombReserve))
    }
}

impl<S: OpponentStrategy> Referee<S> {
    /// Referee with a custom opponent and randomness source.
    #[must_use]
    pub fn with_strategy(config: RefereeConfig, rng: GameRng, strategy: S) -> Self {
        Self::from_parts(config, MatchState::new(), rng, strategy)
    }

    /// Resume a match from a checkpoint.
    ///
    /// Strategies are not part of a checkpoint; pass the one to continue with.
    #[must_use]
    pub fn restore(checkpoint: Checkpoint, strategy: S) -> Self {
        let rng = GameRng::from_state(&checkpoint.rng);
        Self::from_parts(checkpoint.config, checkpoint.state, rng, strategy)
    }

    fn from_parts(config: RefereeConfig, state: MatchState, rng: GameRng, strategy: S) -> Self {
        Self {
            interpreter: Interpreter::from_config(&config),
            config,
            state,
            rng,
            strategy,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &RefereeConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    #[must_use]
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    /// Snapshot of config, state and RNG position.
    #[must_use]
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            config: self.config.clone(),
            state: self.state.clone(),
            rng: self.rng.state(),
        }
    }

    // === Play ===

    /// Play one round from raw user input.
    pub fn play_round(&mut self, input: &str) -> RoundOutcome {
        if self.state.is_complete() {
            warn!("input {input:?} received after the match ended");
            return RoundOutcome::MatchComplete;
        }

        let candidate = self.interpreter.interpret(input);
        debug!(
            "interpreted {input:?} as {candidate:?} ({} policy)",
            self.interpreter.policy()
        );

        let user_move = match validate(candidate.as_deref(), Player::User, &self.state).into_result() {
            Ok(mv) => mv,
            Err(err) => return self.reject(err),
        };
        let bot_move = self.choose_bot_move();

        let resolution = resolve(user_move, bot_move);
        match self.state.apply_result(user_move, bot_move, &resolution) {
            Ok(record) => {
                let record = record.clone();
                info!(
                    "round {}: {} vs {} -> {} ({})",
                    record.round, user_move, bot_move, record.winner, record.rationale
                );
                self.log_if_complete();
                RoundOutcome::Played(RoundReport::new(record, &self.state))
            }
            Err(StateError::MatchComplete { .. } | StateError::Inconsistent(_)) => RoundOutcome::MatchComplete,
        }
    }

    fn choose_bot_move(&mut self) -> Move {
        let chosen = self.strategy.choose_move(&self.state, &mut self.rng);
        match validate(Some(chosen.token()), Player::Bot, &self.state).into_result() {
            Ok(mv) => {
                debug!("{} chose {mv}", self.strategy.name());
                mv
            }
            Err(err) => {
                warn!(
                    "{} chose {chosen} ({err}); playing rock instead",
                    self.strategy.name()
                );
                Move::Rock
            }
        }
    }

    fn reject(&mut self, error: MoveError) -> RoundOutcome {
        warn!("rejected input for round {}: {error}", self.state.current_round());

        let forfeited = match self.config.invalid_input {
            InvalidInputPolicy::Retry => None,
            InvalidInputPolicy::Forfeit => self
                .state
                .forfeit_round(error)
                .ok()
                .cloned()
                .map(|record| RoundReport::new(record, &self.state)),
        };
        if forfeited.is_some() {
            info!("round {} forfeited as a draw", self.state.round_index());
            self.log_if_complete();
        }

        RoundOutcome::Rejected(Rejection {
            error,
            legal_moves: legal_moves(Player::User, &self.state),
            forfeited,
        })
    }

    fn log_if_complete(&self) {
        if let Some(outcome) = self.state.outcome() {
            info!(
                "match complete: {outcome} (you {} - bot {})",
                self.state.user_score(),
                self.state.bot_score()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{InputPolicy, Winner};
    use crate::strategy::Scripted;

    fn scripted(config: RefereeConfig, bot: &[Move]) -> Referee<Scripted> {
        Referee::with_strategy(config, GameRng::new(0), Scripted::new(bot.iter().copied()))
    }

    #[test]
    fn test_valid_round_advances() {
        let mut referee = scripted(RefereeConfig::default(), &[Move::Scissors]);
        let outcome = referee.play_round("rock");

        let report = outcome.report().unwrap();
        assert_eq!(report.record.winner, Winner::User);
        assert_eq!(report.user_score, 1);
        assert_eq!(report.total_rounds, 3);
        assert_eq!(referee.state().round_index(), 1);
    }

    #[test]
    fn test_invalid_input_is_retried() {
        let mut referee = scripted(RefereeConfig::default(), &[Move::Rock]);
        let outcome = referee.play_round("totally invalid");

        match outcome {
            RoundOutcome::Rejected(rejection) => {
                assert_eq!(rejection.error, MoveError::UnknownMove);
                assert!(rejection.forfeited.is_none());
                assert_eq!(rejection.legal_moves.as_slice(), &Move::ALL);
            }
            other => panic!("expected rejection, got {other:?}"),
        }
        assert_eq!(referee.state().round_index(), 0);
        assert!(referee.state().history().is_empty());
    }

    #[test]
    fn test_rejection_does_not_consume_bot_move() {
        let mut referee = scripted(RefereeConfig::default(), &[Move::Paper, Move::Scissors]);
        referee.play_round("");
        let outcome = referee.play_round("rock");
        assert_eq!(outcome.report().unwrap().record.bot_move, Some(Move::Paper));
    }

    #[test]
    fn test_invalid_input_forfeits() {
        let config = RefereeConfig::default().with_invalid_input(InvalidInputPolicy::Forfeit);
        let mut referee = scripted(config, &[Move::Rock]);

        let outcome = referee.play_round("   ");
        let report = outcome.report().unwrap();
        assert!(report.record.is_forfeit());
        assert_eq!(report.record.winner, Winner::Draw);
        assert_eq!(report.record.rationale, "forfeited: empty input");
        assert_eq!(referee.state().round_index(), 1);
        assert_eq!(referee.state().draws(), 1);
    }

    #[test]
    fn test_calls_after_completion() {
        let mut referee = scripted(RefereeConfig::default(), &[Move::Rock]);
        for _ in 0..3 {
            assert!(referee.play_round("paper").is_played());
        }
        assert!(referee.is_complete());

        let before = referee.state().clone();
        assert_eq!(referee.play_round("paper"), RoundOutcome::MatchComplete);
        assert_eq!(referee.play_round("lizard"), RoundOutcome::MatchComplete);
        assert_eq!(referee.state(), &before);
    }

    #[test]
    fn test_illegal_bot_bomb_is_replaced() {
        // A strategy that ignores its spent bomb.
        struct AlwaysBomb;
        impl OpponentStrategy for AlwaysBomb {
            fn choose_move(&mut self, _: &MatchState, _: &mut GameRng) -> Move {
                Move::Bomb
            }
            fn name(&self) -> &str {
                "always-bomb"
            }
        }

        let mut referee = Referee::with_strategy(RefereeConfig::default(), GameRng::new(0), AlwaysBomb);
        assert_eq!(referee.strategy().name(), "always-bomb");
        referee.play_round("rock");
        let outcome = referee.play_round("paper");

        let record = &outcome.report().unwrap().record;
        assert_eq!(record.bot_move, Some(Move::Rock));
        assert_eq!(record.winner, Winner::User);
    }

    #[test]
    fn test_policy_from_config() {
        let config = RefereeConfig::default().with_input_policy(InputPolicy::Synonyms);
        let mut referee = scripted(config, &[Move::Scissors]);
        let outcome = referee.play_round("stone");
        assert_eq!(outcome.report().unwrap().record.user_move, Some(Move::Rock));
    }

    #[test]
    fn test_seeded_referees_agree() {
        let inputs = ["rock", "paper", "scissors"];
        let mut a = Referee::new(RefereeConfig::default(), 11);
        let mut b = Referee::new(RefereeConfig::default(), 11);
        for input in inputs {
            assert_eq!(a.play_round(input), b.play_round(input));
        }
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn test_resume_from_bytes() {
        let mut referee = Referee::new(RefereeConfig::default(), 5);
        referee.play_round("paper");
        let bytes = referee.checkpoint().to_bytes().unwrap();

        let mut resumed = Referee::resume(&bytes).unwrap();
        assert_eq!(resumed.state(), referee.state());
        assert_eq!(resumed.play_round("rock"), referee.play_round("rock"));

        assert!(Referee::resume(&[]).is_err());
    }
}
