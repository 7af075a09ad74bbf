pub mod candidate;
pub mod operators;
pub mod population;
pub mod progress;
pub mod solver;

pub use candidate::Candidate;
pub use population::Population;
pub use progress::{ConsoleProgress, NullProgress};
pub use solver::{ProgressCallback, Solver, StagnationTracker};
