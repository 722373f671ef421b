#![doc = include_str!("../README.md")]

use thiserror::Error;

pub mod game;
pub use game::{Code, Session};

pub mod strategy;
pub use strategy::{Oracle, Strategy};

pub mod session;
pub use session::run_session;

pub mod harness;
pub use harness::Harness;

pub mod perf;
pub use perf::{Aggregate, SessionPerf, Summary};

#[cfg(test)]
pub(crate) mod mock;

/// Convenience alias used throughout the crate.
pub type Result<T, E = MooError> = std::result::Result<T, E>;

/// The errors that `moo_rs` can produce.
#[derive(Debug, Error)]
pub enum MooError {
    #[error("game encountered error")]
    Game {
        #[from]
        kind: GameError,
    },

    #[error("general IO error")]
    Printing(#[from] std::io::Error),

    #[error("the benchmark harness encountered an error")]
    Harness {
        #[from]
        kind: HarnessError,
    },
}

#[derive(Debug, Error)]
pub enum GameError {
    /// A value provided when constructing a [`Code`] is not a decimal
    /// digit.
    #[error("the input {0:?} is not a decimal digit")]
    InvalidDigit(String),

    /// The number of digits provided when constructing a [`Code`] is outside
    /// the supported range.
    #[error("a code must have between 1 and 10 digits, got {0}")]
    InvalidLength(usize),
}

#[derive(Debug, Error)]
pub enum HarnessError {
    /// The configured number of benchmark runs is zero, so every derived
    /// average would be meaningless.
    #[error("no strategies have been added to the harness")]
    NoStrategiesAdded,

    #[error("the harness needs at least one worker")]
    NoWorkers,

    #[error("the job queue needs a capacity of at least one")]
    ZeroQueueCapacity,

    #[error("difficulty must be between 1 and 10, got {0}")]
    InvalidDifficulty(usize),

    /// A worker thread panicked, so the final totals would be incomplete.
    #[error("a worker thread panicked before the queue drained")]
    WorkerPanicked,
}
