//! Tools for defining moo guessing strategies.

use std::fmt::{Debug, Display};

use crate::game::Code;

pub mod naive;

/// The scoring service a strategy consults during one session.
///
/// An oracle wraps exactly one secret code. [`score()`](Oracle::score())
/// grades a guess and advances the session's round counter;
/// [`is_answer()`](Oracle::is_answer()) is the separate equality check the
/// session runner uses to decide termination, and it leaves the counter
/// untouched. The crate's oracle is [`Session`](crate::game::Session);
/// tests may substitute their own implementation.
pub trait Oracle {
    /// Grades `guess` against the secret and returns `(hit, blow)`.
    fn score(&mut self, guess: &Code) -> (u32, u32);

    /// Returns true if `guess` equals the secret.
    fn is_answer(&self, guess: &Code) -> bool;
}

/// Trait defining a moo guessing strategy.
///
/// To write a strategy, define a new struct and implement this trait on it.
///
/// # How to implement
///
/// First, make a new struct and implement [`Display`] on it. The harness
/// uses [`Display`] to name the strategy in logs, so do not use linebreaks.
///
/// ```rust
/// use std::fmt::Display;
///
/// #[derive(Debug)]
/// struct MyCoolStrategy;
///
/// impl Display for MyCoolStrategy {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "MyCoolStrategy")
///     }
/// }
/// ```
///
/// Then, implement [`propose()`](Strategy::propose()). A conforming
/// implementation scores each guess it settles on before returning it, so
/// that the session's round counter reflects every guess including the
/// winning one.
///
/// ```rust
/// # use std::fmt::Display;
/// # use moo_rs::{Strategy, Oracle, game::Code};
/// #
/// # #[derive(Debug)]
/// # struct MyCoolStrategy;
/// #
/// # impl Display for MyCoolStrategy {
/// #     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
/// #         write!(f, "MyCoolStrategy")
/// #     }
/// # }
/// #
/// impl Strategy for MyCoolStrategy {
///     fn propose(&mut self, oracle: &mut dyn Oracle) -> Code {
///         let guess = Code::from_str("0123").unwrap();
///         let (_hit, _blow) = oracle.score(&guess);
///         guess
///     }
/// }
/// ```
///
/// A strategy may keep state across [`propose()`](Strategy::propose()) calls
/// within one session (for example a history of prior guesses), but it is
/// consumed by its session and never reused across sessions, so no state
/// survives. Each strategy instance runs inside exactly one worker; the
/// protocol never hands one oracle to two workers.
pub trait Strategy: Display + Debug + Send {
    /// Proposes the strategy's current best guess.
    ///
    /// Called repeatedly by the session runner until the returned guess
    /// equals the secret. Implementations consult `oracle` for hit/blow
    /// feedback as part of producing the guess.
    fn propose(&mut self, oracle: &mut dyn Oracle) -> Code;
}
