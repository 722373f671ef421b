//! The moo game itself: codes, scoring, and the per-session oracle.

use std::{fmt::Display, ops::Deref};

use itertools::Itertools;
use rand::seq::index::sample;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{strategy::Oracle, GameError, Result};

/// A moo code: an ordered sequence of decimal digits.
///
/// This struct represents a possible guess or secret, and its construction
/// is validated to ensure that every instance holds between one and ten
/// digits, each in `0..=9`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Code {
    digits: Vec<u8>,
}

impl Code {
    /// The longest supported code, one position per distinct digit.
    pub const MAX_LEN: usize = 10;

    /// Creates a new [`Code`] from raw digits.
    ///
    /// Returns an error if the sequence is empty, longer than
    /// [`MAX_LEN`](Self::MAX_LEN), or contains a value above nine.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use moo_rs::game::Code;
    /// #
    /// let code = Code::from_digits(vec![0, 1, 2, 3])?;
    /// assert_eq!(code.to_string(), "0123");
    ///
    /// assert!(Code::from_digits(vec![7, 24]).is_err());
    /// assert!(Code::from_digits(vec![]).is_err());
    /// #
    /// # Ok::<_, moo_rs::MooError>(())
    /// ```
    pub fn from_digits(digits: Vec<u8>) -> Result<Self> {
        if digits.is_empty() || digits.len() > Self::MAX_LEN {
            return Err(GameError::InvalidLength(digits.len()).into());
        }
        if let Some(&bad) = digits.iter().find(|&&d| d > 9) {
            return Err(GameError::InvalidDigit(bad.to_string()).into());
        }
        Ok(Code { digits })
    }

    /// Creates a new [`Code`] from a string of decimal digits.
    ///
    /// Returns an error on any non-digit character or an unsupported length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use moo_rs::game::Code;
    /// #
    /// let code = Code::from_str("1234")?;
    /// assert_eq!(code.len(), 4);
    ///
    /// assert!(Code::from_str("12x4").is_err());
    /// #
    /// # Ok::<_, moo_rs::MooError>(())
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &str) -> Result<Self> {
        let digits = input
            .chars()
            .map(|c| {
                c.to_digit(10)
                    .map(|d| d as u8)
                    .ok_or_else(|| GameError::InvalidDigit(c.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_digits(digits)
    }

    /// Generates a random secret of `len` distinct digits.
    ///
    /// Moo secrets never repeat a digit, which is why a code is at most ten
    /// digits long.
    pub fn random(len: usize) -> Result<Self> {
        if len == 0 || len > Self::MAX_LEN {
            return Err(GameError::InvalidLength(len).into());
        }
        let mut rng = rand::thread_rng();
        let digits = sample(&mut rng, Self::MAX_LEN, len)
            .iter()
            .map(|d| d as u8)
            .collect();
        Ok(Code { digits })
    }

    /// Returns a slice of the underlying digits.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }
}

impl Deref for Code {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.digits
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for d in &self.digits {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

/// Scores `guess` against `secret`, returning `(hit, blow)`.
///
/// A hit is a digit of the guess matching the secret at the same position.
/// A blow is a digit present in both codes but at a different position.
///
/// When a guess repeats a digit, min-multiset counting applies: the repeated
/// digit earns at most as many hits and blows together as the secret holds
/// copies of it. Guessing `1123` against the secret `1234` therefore earns
/// a single hit for the pair of `1`s, never a hit and a blow.
pub fn score(secret: &Code, guess: &Code) -> (u32, u32) {
    let hit = secret
        .iter()
        .zip(guess.iter())
        .filter(|(s, g)| s == g)
        .count() as u32;

    let secret_counts = secret.iter().counts();
    let common: usize = guess
        .iter()
        .counts()
        .into_iter()
        .map(|(d, n)| n.min(secret_counts.get(&d).copied().unwrap_or(0)))
        .sum();

    (hit, common as u32 - hit)
}

/// The per-session oracle: one secret code plus the session's counters.
///
/// A [`Session`] is created fresh for every benchmark run, consulted by
/// exactly one strategy, and never shared across sessions or workers. Every
/// call to [`score()`](Oracle::score()) advances the round counter by one and
/// folds the returned hit and blow counts into the session tallies, which the
/// runner reads back once the session ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    secret: Code,
    rounds: u32,
    hits: u32,
    blows: u32,
}

impl Session {
    /// Creates a session around a known secret.
    pub fn new(secret: Code) -> Self {
        Session {
            secret,
            rounds: 0,
            hits: 0,
            blows: 0,
        }
    }

    /// Creates a session with a freshly drawn secret of length `difficulty`.
    pub fn with_random_secret(difficulty: usize) -> Result<Self> {
        Ok(Self::new(Code::random(difficulty)?))
    }

    /// The secret code this session scores against.
    pub fn secret(&self) -> &Code {
        &self.secret
    }

    /// The number of guesses scored so far.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Total hits over every scored guess.
    pub fn hits(&self) -> u32 {
        self.hits
    }

    /// Total blows over every scored guess.
    pub fn blows(&self) -> u32 {
        self.blows
    }
}

impl Oracle for Session {
    fn score(&mut self, guess: &Code) -> (u32, u32) {
        let (hit, blow) = score(&self.secret, guess);
        self.rounds += 1;
        self.hits += hit;
        self.blows += blow;
        (hit, blow)
    }

    fn is_answer(&self, guess: &Code) -> bool {
        self.secret == *guess
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;
    use crate::strategy::Oracle;

    fn code(s: &str) -> Code {
        Code::from_str(s).unwrap()
    }

    #[test]
    fn exact_match_scores_all_hits() {
        assert_eq!(score(&code("0123"), &code("0123")), (4, 0));
    }

    #[test]
    fn reversed_guess_scores_all_blows() {
        assert_eq!(score(&code("1234"), &code("4321")), (0, 4));
    }

    #[test]
    fn mixed_guess() {
        // 1 stays put, 3 and 4 are misplaced, 9 is absent.
        assert_eq!(score(&code("1234"), &code("1349")), (1, 2));
    }

    #[test]
    fn duplicate_guess_digits_do_not_inflate_blows() {
        assert_eq!(score(&code("1234"), &code("1123")), (1, 2));
        assert_eq!(score(&code("1234"), &code("1111")), (1, 0));
    }

    #[test]
    fn session_counts_every_scored_guess() {
        let mut session = Session::new(code("0123"));
        assert_eq!(session.score(&code("4567")), (0, 0));
        assert_eq!(session.score(&code("0123")), (4, 0));
        assert_eq!(session.rounds(), 2);
        assert_eq!(session.hits(), 4);
        assert_eq!(session.blows(), 0);
        assert!(session.is_answer(&code("0123")));
        assert!(!session.is_answer(&code("4567")));
        // the equality check never advances the round counter
        assert_eq!(session.rounds(), 2);
    }

    #[test]
    fn from_str_rejects_garbage() {
        assert!(Code::from_str("12x4").is_err());
        assert!(Code::from_str("").is_err());
        assert!(Code::from_str("01234567890").is_err());
    }

    #[test]
    fn random_secret_has_distinct_digits() {
        for len in 1..=Code::MAX_LEN {
            let secret = Code::random(len).unwrap();
            assert_eq!(secret.len(), len);
            let mut seen = [false; 10];
            for &d in secret.iter() {
                assert!(!seen[d as usize], "digit {} repeated in {}", d, secret);
                seen[d as usize] = true;
            }
        }
        assert!(Code::random(0).is_err());
        assert!(Code::random(11).is_err());
    }

    fn arb_code(len: usize) -> impl Strategy<Value = Code> {
        prop::collection::vec(0u8..10, len).prop_map(|d| Code::from_digits(d).unwrap())
    }

    proptest! {
        #[test]
        fn scoring_is_bounded((secret, guess) in (1usize..=6).prop_flat_map(|len| (arb_code(len), arb_code(len)))) {
            let (hit, blow) = score(&secret, &guess);
            prop_assert!((hit + blow) as usize <= secret.len());
        }

        #[test]
        fn self_score_is_all_hits(secret in (1usize..=10).prop_flat_map(arb_code)) {
            let len = secret.len() as u32;
            prop_assert_eq!(score(&secret, &secret), (len, 0));
        }
    }
}
