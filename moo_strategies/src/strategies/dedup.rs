use std::{collections::HashSet, fmt::Display};

use moo_rs::{game::Code, strategy::Oracle, Result, Strategy};

/// A random moo strategy that never repeats a guess.
///
/// `Dedup` draws random codes like [`Random`](crate::Random) but keeps a
/// per-session history and redraws until it finds a code it has not guessed
/// yet, so a session takes at most as many rounds as there are distinct-digit
/// codes for the difficulty. The history dies with the session; nothing
/// carries over between runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dedup {
    difficulty: usize,
    asked: HashSet<Code>,
}

impl Dedup {
    /// Creates a new [`Dedup`] guessing codes of length `difficulty`.
    pub fn new(difficulty: usize) -> Result<Self> {
        Code::random(difficulty)?;
        Ok(Dedup {
            difficulty,
            asked: HashSet::new(),
        })
    }
}

impl Strategy for Dedup {
    fn propose(&mut self, oracle: &mut dyn Oracle) -> Code {
        let guess = loop {
            let candidate = Code::random(self.difficulty).unwrap();
            if self.asked.insert(candidate.clone()) {
                break candidate;
            }
        };
        let (_, _) = oracle.score(&guess);
        guess
    }
}

impl Display for Dedup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "moo_strategies::Dedup")
    }
}

#[cfg(test)]
mod test {
    use moo_rs::game::Session;

    use super::*;

    #[test]
    fn never_repeats_a_guess() {
        let mut strategy = Dedup::new(2).unwrap();
        let mut session = Session::new(Code::from_str("98").unwrap());

        let mut seen = HashSet::new();
        for _ in 0..30 {
            let guess = strategy.propose(&mut session);
            assert!(seen.insert(guess), "guess repeated within a session");
        }
    }

    #[test]
    fn exhausts_the_whole_space_at_difficulty_one() {
        let mut strategy = Dedup::new(1).unwrap();
        let mut session = Session::new(Code::from_str("9").unwrap());

        // ten distinct one-digit codes exist, and Dedup emits each once
        let mut seen = HashSet::new();
        for _ in 0..10 {
            seen.insert(strategy.propose(&mut session));
        }
        assert_eq!(seen.len(), 10);
    }
}
