//! A single bad strategy to show how they are written.

use std::fmt::Display;

use crate::{
    game::Code,
    strategy::{Oracle, Strategy},
    Result,
};

/// A moo strategy that guesses a fresh random code every round.
///
/// This exists to show how [`Strategy`] is implemented and to give the
/// harness something to chew on in examples. For strategies that actually
/// use the oracle's feedback, check out the `moo_strategies` crate.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Naive {
    difficulty: usize,
}

impl Naive {
    /// Creates a new [`Naive`] guessing codes of length `difficulty`.
    pub fn new(difficulty: usize) -> Result<Self> {
        // fail here rather than round by round
        Code::random(difficulty)?;
        Ok(Naive { difficulty })
    }
}

impl Strategy for Naive {
    fn propose(&mut self, oracle: &mut dyn Oracle) -> Code {
        let guess = Code::random(self.difficulty).unwrap();
        let (_, _) = oracle.score(&guess);
        guess
    }
}

impl Display for Naive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "moo_rs::Naive")
    }
}
