//! Accumulating and summarizing benchmark results.

use std::{fmt::Display, time::Duration};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The measurements of one completed session.
///
/// Produced by [`run_session`](crate::session::run_session) and folded into
/// an [`Aggregate`] by whichever worker ran the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionPerf {
    /// Guesses scored before the session ended, the winning guess included.
    pub rounds: u32,

    /// Wall-clock time from the first proposal to the winning guess.
    pub duration: Duration,

    /// Hits over every scored guess of the session.
    pub hits: u32,

    /// Blows over every scored guess of the session.
    pub blows: u32,

    /// False only when a round cap stopped the session before the strategy
    /// found the secret.
    pub solved: bool,
}

/// Cross-session totals, accumulated under one lock.
///
/// The harness wraps a single `Mutex<Aggregate>` and every worker records
/// its finished sessions through it, so the round/duration totals and the
/// hit/blow tallies move under the same mutual-exclusion discipline. The
/// totals are commutative: the final numbers do not depend on the order in
/// which workers finish.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregate {
    sessions: u32,
    unsolved: u32,
    rounds: u64,
    duration: Duration,
    hits: u64,
    blows: u64,
}

impl Aggregate {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one finished session into the totals.
    pub fn record(&mut self, perf: &SessionPerf) {
        self.sessions += 1;
        if !perf.solved {
            self.unsolved += 1;
        }
        self.rounds += u64::from(perf.rounds);
        self.duration += perf.duration;
        self.hits += u64::from(perf.hits);
        self.blows += u64::from(perf.blows);
    }

    /// The number of sessions recorded so far.
    pub fn num_sessions(&self) -> u32 {
        self.sessions
    }

    /// Converts the totals to a read-side snapshot.
    ///
    /// The harness calls this only after its join barrier, so the snapshot
    /// is taken race-free.
    pub fn to_summary(&self) -> Summary {
        Summary {
            sessions: self.sessions,
            unsolved: self.unsolved,
            total_rounds: self.rounds,
            total_duration: self.duration,
            total_hits: self.hits,
            total_blows: self.blows,
        }
    }
}

/// A summary of a benchmark run produced by the [harness](crate::Harness).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Summary {
    sessions: u32,
    unsolved: u32,
    total_rounds: u64,
    total_duration: Duration,
    total_hits: u64,
    total_blows: u64,
}

impl Summary {
    /// Gets the number of sessions the harness completed.
    pub fn num_sessions(&self) -> u32 {
        self.sessions
    }

    /// Gets the number of sessions that found their secret.
    pub fn num_solved(&self) -> u32 {
        self.sessions - self.unsolved
    }

    /// Gets the number of sessions stopped by the round cap.
    pub fn num_unsolved(&self) -> u32 {
        self.unsolved
    }

    /// Gets the number of guesses scored across all sessions.
    pub fn total_rounds(&self) -> u64 {
        self.total_rounds
    }

    /// Gets the wall-clock time spent across all sessions.
    pub fn total_duration(&self) -> Duration {
        self.total_duration
    }

    /// Gets the hits scored across all sessions.
    pub fn total_hits(&self) -> u64 {
        self.total_hits
    }

    /// Gets the blows scored across all sessions.
    pub fn total_blows(&self) -> u64 {
        self.total_blows
    }

    /// Gets the average number of rounds per session.
    ///
    /// The harness rejects a run of zero sessions before starting, so this
    /// never divides by zero on a harness-produced summary.
    pub fn mean_rounds(&self) -> f64 {
        self.total_rounds as f64 / f64::from(self.sessions)
    }

    /// Gets the average wall-clock time per session.
    pub fn mean_duration(&self) -> Duration {
        self.total_duration / self.sessions
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:-^80}", "moo benchmark")?;
        if self.unsolved == 0 {
            writeln!(f, "Ran {} sessions", self.sessions)?;
        } else {
            writeln!(
                f,
                "Ran {} sessions, {} stopped by the round cap",
                self.sessions, self.unsolved
            )?;
        }
        writeln!(
            f,
            "avg. spent: {:?}, avg. estimates count: {:.2}",
            self.mean_duration(),
            self.mean_rounds()
        )?;
        writeln!(
            f,
            "total Hits: {}, Blows: {}",
            self.total_hits, self.total_blows
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;

    fn perf(rounds: u32, millis: u64, hits: u32, blows: u32, solved: bool) -> SessionPerf {
        SessionPerf {
            rounds,
            duration: Duration::from_millis(millis),
            hits,
            blows,
            solved,
        }
    }

    #[test]
    fn record_accumulates_every_field() {
        let mut agg = Aggregate::new();
        agg.record(&perf(3, 10, 5, 2, true));
        agg.record(&perf(7, 30, 1, 4, false));

        let summary = agg.to_summary();
        assert_eq!(summary.num_sessions(), 2);
        assert_eq!(summary.num_solved(), 1);
        assert_eq!(summary.num_unsolved(), 1);
        assert_eq!(summary.total_rounds(), 10);
        assert_eq!(summary.total_duration(), Duration::from_millis(40));
        assert_eq!(summary.total_hits(), 6);
        assert_eq!(summary.total_blows(), 6);
        assert_eq!(summary.mean_rounds(), 5.0);
        assert_eq!(summary.mean_duration(), Duration::from_millis(20));
    }

    fn arb_perf() -> impl Strategy<Value = SessionPerf> {
        (0u32..100, 0u64..1_000, 0u32..50, 0u32..50, any::<bool>())
            .prop_map(|(rounds, millis, hits, blows, solved)| perf(rounds, millis, hits, blows, solved))
    }

    fn fold(perfs: &[SessionPerf]) -> Aggregate {
        let mut agg = Aggregate::new();
        for p in perfs {
            agg.record(p);
        }
        agg
    }

    proptest! {
        // Completion order between workers is unspecified, so the totals
        // must not depend on recording order.
        #[test]
        fn totals_are_order_independent(
            perfs in prop::collection::vec(arb_perf(), 1..32),
            rotation in 0usize..32,
        ) {
            let mut perfs = perfs;
            let forward = fold(&perfs);

            let len = perfs.len();
            perfs.rotate_left(rotation % len);
            perfs.reverse();
            prop_assert_eq!(forward, fold(&perfs));
        }
    }
}
