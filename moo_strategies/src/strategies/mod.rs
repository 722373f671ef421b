mod dedup;
mod exhaustive;
mod interactive;
mod random;

pub use dedup::Dedup;
pub use exhaustive::Exhaustive;
pub use interactive::Interactive;
pub use random::Random;
