use super::traits::ConfigSection;
use crate::error::{Result, SudokuError};
use serde::{Deserialize, Serialize};

/// Where the puzzle comes from and where the renderings go.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub input_path: String,
    /// HTML rendering of the solution; skipped when `None`.
    pub html_output_path: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_path: "sudoku_input.txt".to_string(),
            html_output_path: Some("sudoku_output.htm".to_string()),
        }
    }
}

impl ConfigSection for RunConfig {
    fn section_name() -> &'static str {
        "run"
    }

    fn validate(&self) -> Result<()> {
        if self.input_path.is_empty() {
            return Err(SudokuError::Configuration(
                "Input path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
