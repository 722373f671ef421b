use std::{
    fmt::Display,
    io::{self, BufRead, Write},
};

use moo_rs::{game::Code, strategy::Oracle, Result, Strategy};

/// A moo strategy that lets a human play the session over stdin.
///
/// Each round prints a `?: ` prompt, reads one line, and scores it, echoing
/// the guess with its hit and blow counts. Malformed input — non-digit
/// characters or the wrong number of digits — is re-prompted locally and
/// never reaches the harness.
///
/// A blocking read suspends only the worker running this session; other
/// workers keep processing their own jobs.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interactive {
    difficulty: usize,
}

impl Interactive {
    /// Creates a new [`Interactive`] expecting guesses of length
    /// `difficulty`.
    pub fn new(difficulty: usize) -> Result<Self> {
        Code::random(difficulty)?;
        Ok(Interactive { difficulty })
    }

    fn read_guess(&self) -> Code {
        let stdin = io::stdin();
        loop {
            print!("?: ");
            io::stdout().flush().expect("stdout closed");

            let mut input = String::new();
            let read = stdin
                .lock()
                .read_line(&mut input)
                .expect("could not read from stdin");
            if read == 0 {
                panic!("stdin closed mid-session");
            }

            match Code::from_str(input.trim()) {
                Ok(code) if code.len() == self.difficulty => break code,
                Ok(_) => println!("enter exactly {} digits", self.difficulty),
                Err(e) => println!("{}", e),
            }
        }
    }
}

impl Strategy for Interactive {
    fn propose(&mut self, oracle: &mut dyn Oracle) -> Code {
        let guess = self.read_guess();
        let (hit, blow) = oracle.score(&guess);
        println!("{} Hit: {} Blow: {}", guess, hit, blow);
        guess
    }
}

impl Display for Interactive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "moo_strategies::Interactive")
    }
}
