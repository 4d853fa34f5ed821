//! Interactive referee
//!
//! Plays a three-round match against the bot in the terminal.
//! Reads plain lines when stdin is not a terminal, so matches can be piped.

use clap::{Parser, ValueEnum};
use colored::Colorize;
use dialoguer::Input;
use rps_referee::{
    BombReserve, GameRng, InputPolicy, InvalidInputPolicy, MatchOutcome, MatchState, Move,
    OpponentStrategy, Referee, RefereeConfig, RoundOutcome, RoundReport, UniformClassic, Winner,
    MATCH_ROUNDS,
};
use std::io::{BufRead, IsTerminal};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Policy {
    Exact,
    Tokenized,
    Synonyms,
}

impl From<Policy> for InputPolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::Exact => InputPolicy::Exact,
            Policy::Tokenized => InputPolicy::Tokenized,
            Policy::Synonyms => InputPolicy::Synonyms,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OnInvalid {
    Retry,
    Forfeit,
}

impl From<OnInvalid> for InvalidInputPolicy {
    fn from(policy: OnInvalid) -> Self {
        match policy {
            OnInvalid::Retry => InvalidInputPolicy::Retry,
            OnInvalid::Forfeit => InvalidInputPolicy::Forfeit,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Opponent {
    /// Saves the bomb for the last round or for catching up
    BombReserve,
    /// Never bombs
    Classic,
}

#[derive(Debug, Parser)]
#[command(name = "referee", about = "Rock-Paper-Scissors-plus-bomb, best of three")]
struct Args {
    /// Seed for the bot; random when omitted
    #[arg(long, env = "RPS_SEED")]
    seed: Option<u64>,

    /// How typed input is read as a move
    #[arg(long, value_enum, default_value = "exact", env = "RPS_INPUT_POLICY")]
    input_policy: Policy,

    /// Whether invalid input costs the round
    #[arg(long, value_enum, default_value = "retry", env = "RPS_ON_INVALID")]
    on_invalid: OnInvalid,

    /// Bot behavior
    #[arg(long, value_enum, default_value = "bomb-reserve", env = "RPS_OPPONENT")]
    opponent: Opponent,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let config = RefereeConfig::default()
        .with_input_policy(args.input_policy.into())
        .with_invalid_input(args.on_invalid.into());
    let rng = args.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    let strategy: Box<dyn OpponentStrategy> = match args.opponent {
        Opponent::BombReserve => Box::new(BombReserve),
        Opponent::Classic => Box::new(UniformClassic),
    };
    log::info!("seed {}, {} input, {} on invalid", rng.seed(), config.input_policy, config.invalid_input);

    println!("{}", rules(config.invalid_input));
    let mut referee = Referee::with_strategy(config, rng, strategy);

    let interactive = std::io::stdin().is_terminal();
    let mut lines = (!interactive).then(|| std::io::stdin().lock().lines());
    while !referee.is_complete() {
        let input = if interactive {
            match Input::<String>::new()
                .with_prompt("Your move")
                .allow_empty(true)
                .interact_text()
            {
                Ok(input) => input,
                Err(e) => {
                    eprintln!("input error: {}", e);
                    std::process::exit(1);
                }
            }
        } else {
            match lines.as_mut().and_then(Iterator::next) {
                Some(Ok(line)) => line,
                Some(Err(e)) => {
                    eprintln!("input error: {}", e);
                    std::process::exit(1);
                }
                None => {
                    eprintln!("input ended before the match finished");
                    std::process::exit(1);
                }
            }
        };

        match referee.play_round(&input) {
            RoundOutcome::Played(report) => println!("{}", round_result(&report)),
            RoundOutcome::Rejected(rejection) => {
                println!("{}", rejection.to_string().as_str().yellow());
                if let Some(report) = &rejection.forfeited {
                    println!("{}", round_result(report));
                }
            }
            RoundOutcome::MatchComplete => break,
        }
    }

    println!("{}", final_result(referee.state()));
}

fn rules(on_invalid: InvalidInputPolicy) -> String {
    let invalid = match on_invalid {
        InvalidInputPolicy::Retry => "Invalid input triggers a warning and re-prompt.",
        InvalidInputPolicy::Forfeit => "Invalid input forfeits the round as a draw.",
    };
    [
        String::new(),
        format!("Best of {} rounds. Valid moves: rock, paper, scissors, bomb (once per player).", MATCH_ROUNDS)
            .as_str()
            .bold()
            .to_string(),
        "Bomb beats everything; bomb vs bomb is a draw.".to_string(),
        invalid.to_string(),
        format!("Game ends automatically after {} rounds.", MATCH_ROUNDS),
        String::new(),
    ]
    .join("\n")
}

fn move_label(mv: Option<Move>) -> String {
    match mv {
        Some(Move::Bomb) => "bomb".red().bold().to_string(),
        Some(mv) => mv.to_string(),
        None => "none".dimmed().to_string(),
    }
}

fn round_result(report: &RoundReport) -> String {
    let record = &report.record;
    let winner = match record.winner {
        Winner::User => record.winner.label().green(),
        Winner::Bot => record.winner.label().red(),
        Winner::Draw => record.winner.label().normal(),
    };
    [
        String::new(),
        "==== Round Result ====".bold().to_string(),
        format!("Round {}/{}", record.round, report.total_rounds),
        format!(
            "Moves: You={} | Bot={}",
            move_label(record.user_move),
            move_label(record.bot_move)
        ),
        format!("Winner: {}", winner),
        format!("Reason: {}", record.rationale),
        format!("Score: {}", report.score_line()),
        "======================".bold().to_string(),
    ]
    .join("\n")
}

fn final_result(state: &MatchState) -> String {
    let outcome = state.standing();
    let label = match outcome {
        MatchOutcome::UserWins => outcome.label().green().bold(),
        MatchOutcome::BotWins => outcome.label().red().bold(),
        MatchOutcome::Draw => outcome.label().bold(),
    };
    [
        String::new(),
        "Game Over".bold().to_string(),
        format!("Final Score: You {} - Bot {}", state.user_score(), state.bot_score()),
        format!("Result: {}", label),
        String::new(),
    ]
    .join("\n")
}
