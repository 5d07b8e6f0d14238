//! # Rock Paper Scissors
//!
//! Pure round logic and the running scoreboard. The computer's move is
//! drawn uniformly; the interactive loop lives in the CLI layer.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type for move parsing
pub type RpsResult<T> = Result<T, RpsError>;

/// Move parsing errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RpsError {
    #[error("Unknown move '{value}': expected rock, paper, or scissors")]
    UnknownMove { value: String },
}

impl RpsError {
    /// Stable error code string for the response envelope
    pub fn code(&self) -> &'static str {
        match self {
            RpsError::UnknownMove { .. } => "KITBAG_RPS_UNKNOWN_MOVE",
        }
    }
}

/// A player's move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    pub fn as_str(&self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }

    /// The move this one defeats
    pub fn beats(&self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }

    /// Parse a move, accepting the single-letter short forms
    pub fn parse(value: &str) -> RpsResult<Move> {
        match value.trim().to_ascii_lowercase().as_str() {
            "rock" | "r" => Ok(Move::Rock),
            "paper" | "p" => Ok(Move::Paper),
            "scissors" | "s" => Ok(Move::Scissors),
            _ => Err(RpsError::UnknownMove {
                value: value.trim().to_string(),
            }),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who took the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Draw,
    UserWins,
    ComputerWins,
}

/// Decide a round from both moves
pub fn outcome(user: Move, computer: Move) -> Outcome {
    if user == computer {
        Outcome::Draw
    } else if user.beats() == computer {
        Outcome::UserWins
    } else {
        Outcome::ComputerWins
    }
}

/// The banner line for a decided round
pub fn message(outcome: Outcome, user: Move, computer: Move) -> String {
    match outcome {
        Outcome::Draw => "The game was draw!".to_string(),
        Outcome::UserWins => format!("You win! Your {} beats {}", user, computer),
        Outcome::ComputerWins => {
            format!("Computer win! {} beats your {}", computer, user)
        }
    }
}

/// Draw the computer's move uniformly
pub fn random_move(rng: &mut impl Rng) -> Move {
    match rng.gen_range(0..3) {
        0 => Move::Rock,
        1 => Move::Paper,
        _ => Move::Scissors,
    }
}

/// Running session score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Scoreboard {
    pub user: u32,
    pub computer: u32,
}

impl Scoreboard {
    /// Apply one round's outcome; draws leave both sides unchanged
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Draw => {}
            Outcome::UserWins => self.user += 1,
            Outcome::ComputerWins => self.computer += 1,
        }
    }

    pub fn reset(&mut self) {
        *self = Scoreboard::default();
    }
}

/// One decided round, rendered into the response envelope
#[derive(Debug, Clone, Serialize)]
pub struct Round {
    pub user: Move,
    pub computer: Move,
    pub outcome: Outcome,
    pub message: String,
    pub score: Scoreboard,
}

/// Play one round and fold it into the scoreboard
pub fn play_round(user: Move, computer: Move, score: &mut Scoreboard) -> Round {
    let decided = outcome(user, computer);
    score.record(decided);
    Round {
        user,
        computer,
        outcome: decided,
        message: message(decided, user, computer),
        score: *score,
    }
}
