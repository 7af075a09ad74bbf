use crate::engine::candidate::Candidate;
use crate::grid::{Grid, WINNING_SCORE};
use rayon::prelude::*;
use std::cmp::Reverse;

/// An ordered collection of candidates for one generation.
#[derive(Debug, Clone, Default)]
pub struct Population {
    candidates: Vec<Candidate>,
}

impl Population {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Score every candidate. Each evaluation reads only its own grid and
    /// writes only its own cached score, so the generation is scored across
    /// the rayon pool. Already-scored candidates (the elite) are no-ops.
    pub fn evaluate_all(&mut self, template: &Grid) {
        self.candidates
            .par_iter_mut()
            .for_each(|candidate| {
                candidate.evaluate(template);
            });
    }

    /// Stable sort by score, descending; unevaluated candidates sort last.
    /// Stability keeps runs reproducible under a fixed seed.
    pub fn rank_descending(&mut self) {
        self.candidates
            .sort_by_key(|candidate| Reverse(candidate.score()));
    }

    /// Top `fraction` of the ranked population, carried verbatim into the
    /// next generation. Call after [`Population::rank_descending`].
    pub fn elite(&self, fraction: f64) -> &[Candidate] {
        self.top_slice(fraction)
    }

    /// Top `fraction` of the ranked population eligible as breeding parents.
    pub fn parent_pool(&self, fraction: f64) -> &[Candidate] {
        self.top_slice(fraction)
    }

    fn top_slice(&self, fraction: f64) -> &[Candidate] {
        let count = (self.candidates.len() as f64 * fraction) as usize;
        &self.candidates[..count.min(self.candidates.len())]
    }

    /// Floor of the mean score across the population.
    pub fn average_score(&self) -> u32 {
        if self.candidates.is_empty() {
            return 0;
        }
        let total: u64 = self
            .candidates
            .iter()
            .map(|candidate| u64::from(candidate.score().unwrap_or(0)))
            .sum();
        (total / self.candidates.len() as u64) as u32
    }

    /// Highest-scored candidate. Call after ranking.
    pub fn best(&self) -> Option<&Candidate> {
        self.candidates.first()
    }

    /// A candidate at the maximum possible fitness, if one exists.
    pub fn winner(&self) -> Option<&Candidate> {
        self.candidates
            .iter()
            .find(|candidate| candidate.score() == Some(WINNING_SCORE))
    }
}
