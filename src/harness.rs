//! The benchmark harness for running moo strategies.

use std::{
    io::Write,
    sync::{mpsc, Arc, Mutex},
    thread,
};

use tracing::info;

use crate::{
    game::Code,
    perf::{Aggregate, Summary},
    session::run_session,
    strategy::Strategy,
    HarnessError, Result,
};

/// A benchmark harness that runs many strategy jobs on a worker pool.
///
/// Create a new harness with [`new()`](Harness::new()) and configure it
/// using the various builder methods. Note that these methods consume the
/// existing [`Harness`] and return a new one. Each added strategy is one
/// benchmark run: a fresh session with its own random secret.
///
/// # Examples
///
/// ```rust,no_run
/// # use moo_rs::harness::Harness;
/// use moo_rs::strategy::naive::Naive;
///
/// let harness = Harness::new()
///     .difficulty(4)
///     .workers(4)
///     .queue_capacity(64)
///     .add_strategy(Box::new(Naive::new(4).unwrap()));
///
/// let summary = harness.run();
/// ```
#[derive(Debug)]
pub struct Harness {
    strategies: Vec<Box<dyn Strategy>>,
    workers: usize,
    queue_capacity: usize,
    difficulty: usize,
    max_rounds: Option<u32>,
    verbose: bool,
    // signals each completed handoff to the queue
    #[cfg(test)]
    sent_watch: Option<mpsc::Sender<()>>,
}

impl Default for Harness {
    fn default() -> Self {
        Harness {
            strategies: Vec::new(),
            workers: 16,
            queue_capacity: 1000,
            difficulty: 4,
            max_rounds: None,
            verbose: false,
            #[cfg(test)]
            sent_watch: None,
        }
    }
}

impl Harness {
    /// Creates a new benchmark harness with default configuration.
    ///
    /// Defaults:
    /// 1. runs no strategies
    /// 2. quiet mode
    /// 3. 16 workers over a queue of capacity 1000
    /// 4. difficulty 4, no round cap
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the harness log each recorded session while running.
    pub fn verbose(self) -> Self {
        Harness {
            verbose: true,
            ..self
        }
    }

    /// Makes the harness silent while running.
    pub fn quiet(self) -> Self {
        Harness {
            verbose: false,
            ..self
        }
    }

    /// Sets the number of worker threads.
    pub fn workers(self, workers: usize) -> Self {
        Harness { workers, ..self }
    }

    /// Sets the capacity of the bounded job queue.
    ///
    /// Enqueuing beyond this capacity blocks the producer until a worker
    /// takes a job, so a small capacity keeps memory flat for large run
    /// counts.
    pub fn queue_capacity(self, queue_capacity: usize) -> Self {
        Harness {
            queue_capacity,
            ..self
        }
    }

    /// Sets the secret length every session is played at.
    pub fn difficulty(self, difficulty: usize) -> Self {
        Harness { difficulty, ..self }
    }

    /// Caps the number of scored rounds per session.
    ///
    /// Without a cap a strategy that never converges loops forever, matching
    /// the behavior of the game it benchmarks. Capped sessions that run out
    /// of rounds are counted as unsolved in the [`Summary`].
    pub fn max_rounds(self, max_rounds: impl Into<Option<u32>>) -> Self {
        Harness {
            max_rounds: max_rounds.into(),
            ..self
        }
    }

    /// Adds one benchmark run to the harness.
    pub fn add_strategy(self, strat: Box<dyn Strategy>) -> Self {
        let mut strategies = self.strategies;
        strategies.push(strat);
        Harness { strategies, ..self }
    }

    /// Adds a [`Vec`] of benchmark runs to the harness.
    pub fn add_strategies(self, strats: Vec<Box<dyn Strategy>>) -> Self {
        let mut strategies = self.strategies;
        strategies.extend(strats);
        Harness { strategies, ..self }
    }

    #[cfg(test)]
    fn sent_watch(self, watch: mpsc::Sender<()>) -> Self {
        Harness {
            sent_watch: Some(watch),
            ..self
        }
    }

    /// Runs every queued strategy job and produces the aggregate summary.
    ///
    /// All workers start before the first job is enqueued, pull jobs from
    /// the bounded queue until it is closed and drained, and fold each
    /// finished session into one shared [`Aggregate`] under its lock. The
    /// totals are read only after every worker has been joined.
    ///
    /// Misconfiguration — zero runs, zero workers, a zero-capacity queue, or
    /// a difficulty outside `1..=10` — is rejected before any thread starts.
    pub fn run(self) -> Result<Summary> {
        if self.strategies.is_empty() {
            return Err(HarnessError::NoStrategiesAdded.into());
        }
        if self.workers == 0 {
            return Err(HarnessError::NoWorkers.into());
        }
        if self.queue_capacity == 0 {
            return Err(HarnessError::ZeroQueueCapacity.into());
        }
        if self.difficulty == 0 || self.difficulty > Code::MAX_LEN {
            return Err(HarnessError::InvalidDifficulty(self.difficulty).into());
        }

        info!(
            workers = self.workers,
            queue_capacity = self.queue_capacity,
            difficulty = self.difficulty,
            runs = self.strategies.len(),
            "starting benchmark"
        );

        let aggregate = Arc::new(Mutex::new(Aggregate::new()));
        let (tx, rx) = mpsc::sync_channel::<Box<dyn Strategy>>(self.queue_capacity);
        let rx = Arc::new(Mutex::new(rx));

        let mut handles = Vec::with_capacity(self.workers);
        for id in 0..self.workers {
            let rx = Arc::clone(&rx);
            let aggregate = Arc::clone(&aggregate);
            let (difficulty, max_rounds, verbose) =
                (self.difficulty, self.max_rounds, self.verbose);

            let handle = thread::Builder::new()
                .name(format!("moo-worker-{id}"))
                .spawn(move || -> Result<()> {
                    loop {
                        // the receiver lock is released as soon as recv
                        // returns; sessions run unlocked
                        let job = { rx.lock().unwrap().recv() };
                        let Ok(mut strategy) = job else { break };

                        let perf = run_session(strategy.as_mut(), difficulty, max_rounds)?;
                        if verbose {
                            info!(
                                worker = id,
                                rounds = perf.rounds,
                                solved = perf.solved,
                                "session recorded"
                            );
                        }
                        aggregate.lock().unwrap().record(&perf);
                    }
                    Ok(())
                })?;
            handles.push(handle);
        }

        // the workers hold the only receiver handles from here on, so a
        // blocked send fails over instead of waiting on dead workers
        drop(rx);

        for strategy in self.strategies {
            // blocks while the queue already holds queue_capacity jobs;
            // fails only once every worker has exited early
            tx.send(strategy)
                .map_err(|_| HarnessError::WorkerPanicked)?;
            #[cfg(test)]
            if let Some(watch) = &self.sent_watch {
                let _ = watch.send(());
            }
        }
        // closing the queue: workers drain what is left, then exit
        drop(tx);

        for handle in handles {
            handle.join().map_err(|_| HarnessError::WorkerPanicked)??;
        }

        let aggregate = Arc::try_unwrap(aggregate).unwrap().into_inner().unwrap();
        Ok(aggregate.to_summary())
    }

    /// Runs the harness (see [`run()`](Harness::run())) and prints the
    /// summary.
    pub fn run_and_summarize(self) -> Result<Summary> {
        let summary = self.run()?;
        write!(std::io::stdout(), "{}", summary)?;
        Ok(summary)
    }
}
