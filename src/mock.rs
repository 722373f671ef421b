use std::{fmt::Display, sync::mpsc};

use crate::{game::Code, strategy::{Oracle, Strategy}};

/// Scores the same guess every round.
#[derive(Debug, Clone)]
pub(crate) struct Fixed {
    guess: Code,
}

impl Fixed {
    pub(crate) fn new(guess: Code) -> Self {
        Self { guess }
    }
}

impl Strategy for Fixed {
    fn propose(&mut self, oracle: &mut dyn Oracle) -> Code {
        let (_, _) = oracle.score(&self.guess);
        self.guess.clone()
    }
}

impl Display for Fixed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Fixed {}", self.guess)
    }
}

/// Signals when its session starts, then waits for the test to release it
/// before scoring a single fixed guess.
#[derive(Debug)]
pub(crate) struct Gated {
    guess: Code,
    started: mpsc::Sender<()>,
    gate: mpsc::Receiver<()>,
}

impl Gated {
    pub(crate) fn new(guess: Code, started: mpsc::Sender<()>, gate: mpsc::Receiver<()>) -> Self {
        Self {
            guess,
            started,
            gate,
        }
    }
}

impl Strategy for Gated {
    fn propose(&mut self, oracle: &mut dyn Oracle) -> Code {
        self.started.send(()).unwrap();
        self.gate.recv().unwrap();
        let (_, _) = oracle.score(&self.guess);
        self.guess.clone()
    }
}

impl Display for Gated {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Gated {}", self.guess)
    }
}

/// Panics the moment it is asked for a guess.
#[derive(Debug, Clone)]
pub(crate) struct Panicky;

impl Strategy for Panicky {
    fn propose(&mut self, _oracle: &mut dyn Oracle) -> Code {
        panic!("strategy blew up")
    }
}

impl Display for Panicky {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Panicky")
    }
}
