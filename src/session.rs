//! Driving one strategy through one game session.

use std::time::Instant;

use tracing::{debug, trace};

use crate::{game::Session, perf::SessionPerf, strategy::Strategy, Oracle, Result};

/// Runs `strategy` against a freshly drawn secret of length `difficulty`.
///
/// The runner loops, asking the strategy for its current best guess and the
/// oracle whether that guess equals the secret, until the first match. The
/// round count of the returned [`SessionPerf`] is the number of guesses the
/// oracle scored, winning guess included; the scoring call happens inside
/// [`propose()`](Strategy::propose()), the equality check here.
///
/// With `max_rounds = None` a strategy that never converges loops forever,
/// exactly like the interactive game it benchmarks. `Some(cap)` stops the
/// session once `cap` guesses have been scored without a match and reports
/// it as unsolved.
pub fn run_session(
    strategy: &mut dyn Strategy,
    difficulty: usize,
    max_rounds: Option<u32>,
) -> Result<SessionPerf> {
    let session = Session::with_random_secret(difficulty)?;
    Ok(run_session_on(strategy, session, max_rounds))
}

/// Runs `strategy` against a caller-provided session.
///
/// This is [`run_session`] minus the secret generation, for reproducible
/// benchmarks and tests that need a fixed secret.
pub fn run_session_on(
    strategy: &mut dyn Strategy,
    mut session: Session,
    max_rounds: Option<u32>,
) -> SessionPerf {
    trace!(secret = %session.secret(), strategy = %strategy, "session start");

    let start = Instant::now();
    let solved = loop {
        let guess = strategy.propose(&mut session);
        if session.is_answer(&guess) {
            break true;
        }
        if matches!(max_rounds, Some(cap) if session.rounds() >= cap) {
            break false;
        }
    };
    let duration = start.elapsed();

    debug!(
        rounds = session.rounds(),
        ?duration,
        solved,
        strategy = %strategy,
        "session finished"
    );

    SessionPerf {
        rounds: session.rounds(),
        duration,
        hits: session.hits(),
        blows: session.blows(),
        solved,
    }
}
