use std::fmt::Display;

use moo_rs::{game::Code, strategy::Oracle, Result, Strategy};

/// A moo strategy that guesses a fresh random code every round.
///
/// `Random` ignores the oracle's feedback entirely and may repeat a guess it
/// has already made, so its round counts are unbounded in theory. Run it
/// with a round cap, or use [`Dedup`](crate::Dedup) for the variant that at
/// least never asks the same question twice.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Random {
    difficulty: usize,
}

impl Random {
    /// Creates a new [`Random`] guessing codes of length `difficulty`.
    pub fn new(difficulty: usize) -> Result<Self> {
        Code::random(difficulty)?;
        Ok(Random { difficulty })
    }
}

impl Strategy for Random {
    fn propose(&mut self, oracle: &mut dyn Oracle) -> Code {
        let guess = Code::random(self.difficulty).unwrap();
        let (_, _) = oracle.score(&guess);
        guess
    }
}

impl Display for Random {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "moo_strategies::Random")
    }
}

#[cfg(test)]
mod test {
    use moo_rs::game::Session;

    use super::*;

    #[test]
    fn proposals_are_valid_codes_and_each_is_scored() {
        let mut strategy = Random::new(3).unwrap();
        let mut session = Session::new(Code::from_str("012").unwrap());

        for round in 1..=10 {
            let guess = strategy.propose(&mut session);
            assert_eq!(guess.len(), 3);
            assert_eq!(session.rounds(), round);
        }
    }

    #[test]
    fn rejects_impossible_difficulty() {
        assert!(Random::new(0).is_err());
        assert!(Random::new(11).is_err());
    }
}
