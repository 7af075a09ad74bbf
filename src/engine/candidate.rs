use crate::error::Result;
use crate::grid::{FilledGrid, FillingString, Grid};

/// One evolutionary individual: a proposed filling for the template's blanks,
/// the grid it materializes into, and a fitness score cached after evaluation.
///
/// Candidates are immutable once scored. Breeding and mutation always produce
/// a fresh candidate from a new filling string.
#[derive(Debug, Clone)]
pub struct Candidate {
    filling: FillingString,
    filled: FilledGrid,
    score: Option<u32>,
}

impl Candidate {
    /// Materialize a candidate against the template. The score stays unset
    /// until [`Candidate::evaluate`] runs.
    pub fn new(template: &Grid, filling: FillingString) -> Result<Self> {
        let filled = template.fill(&filling)?;
        Ok(Self {
            filling,
            filled,
            score: None,
        })
    }

    /// Compute and cache the fitness score. Idempotent.
    pub fn evaluate(&mut self, template: &Grid) -> u32 {
        match self.score {
            Some(score) => score,
            None => {
                let score = template.evaluate(&self.filled);
                self.score = Some(score);
                score
            }
        }
    }

    /// Cached score, `None` until evaluated.
    pub fn score(&self) -> Option<u32> {
        self.score
    }

    pub fn filling(&self) -> &FillingString {
        &self.filling
    }

    pub fn filled_grid(&self) -> &FilledGrid {
        &self.filled
    }
}
