use std::fmt::Display;

use itertools::Itertools;
use moo_rs::{
    game::{score, Code},
    strategy::Oracle,
    GameError, Result, Strategy,
};

/// A moo strategy that filters the candidate space with every answer.
///
/// `Exhaustive` starts from all distinct-digit codes of the session's length
/// and, after each scored guess, keeps only the candidates that would have
/// produced the same hit/blow counts had they been the secret. It guesses
/// the first surviving candidate, so against any distinct-digit secret it
/// terminates in at most as many rounds as there are candidates (5040 at
/// difficulty four).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exhaustive {
    candidates: Vec<Code>,
}

impl Exhaustive {
    /// Creates a new [`Exhaustive`] for secrets of length `difficulty`.
    pub fn new(difficulty: usize) -> Result<Self> {
        if difficulty == 0 || difficulty > Code::MAX_LEN {
            return Err(GameError::InvalidLength(difficulty).into());
        }
        let candidates = (0u8..10)
            .permutations(difficulty)
            .map(|digits| Code::from_digits(digits).unwrap())
            .collect();
        Ok(Exhaustive { candidates })
    }
}

impl Strategy for Exhaustive {
    fn propose(&mut self, oracle: &mut dyn Oracle) -> Code {
        let guess = self
            .candidates
            .first()
            .cloned()
            .expect("a consistent candidate always remains");

        let (hit, blow) = oracle.score(&guess);
        self.candidates
            .retain(|c| c != &guess && score(c, &guess) == (hit, blow));

        guess
    }
}

impl Display for Exhaustive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "moo_strategies::Exhaustive")
    }
}
