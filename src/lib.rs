pub mod config;
pub mod engine;
pub mod error;
pub mod grid;

pub use config::{AppConfig, ConfigManager, EvolutionConfig, RunConfig};
pub use engine::{Candidate, ConsoleProgress, NullProgress, Population, ProgressCallback, Solver};
pub use error::{Result, SudokuError};
pub use grid::{FilledGrid, FillingString, Grid, WINNING_SCORE};
