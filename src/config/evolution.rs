use super::traits::ConfigSection;
use crate::error::{Result, SudokuError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub population_size: usize,
    /// Fraction of the ranked population carried unchanged into the next
    /// generation.
    pub elitism_fraction: f64,
    /// Fraction of the ranked population eligible as breeding parents.
    pub parent_pool_fraction: f64,
    pub tournament_size: usize,
    /// Chance that a bred offspring undergoes mutation at all.
    pub offspring_mutation_chance: f64,
    /// Per-gene redraw chance once an offspring mutates.
    pub gene_mutation_chance: f64,
    /// Consecutive generations the floor-rounded average score may repeat
    /// before the population is rebuilt from scratch.
    pub stagnation_window: usize,
    /// Fixed RNG seed for reproducible runs; entropy-seeded when `None`.
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 2000,
            elitism_fraction: 0.01,
            parent_pool_fraction: 1.0,
            tournament_size: 3,
            offspring_mutation_chance: 0.5,
            gene_mutation_chance: 0.1,
            stagnation_window: 20,
            seed: None,
        }
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(SudokuError::Configuration(
                "Population size must be at least 2".to_string(),
            ));
        }
        if self.tournament_size == 0 {
            return Err(SudokuError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }
        for (name, value) in [
            ("Elitism fraction", self.elitism_fraction),
            ("Parent pool fraction", self.parent_pool_fraction),
            ("Offspring mutation chance", self.offspring_mutation_chance),
            ("Gene mutation chance", self.gene_mutation_chance),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SudokuError::Configuration(format!(
                    "{} must be between 0 and 1",
                    name
                )));
            }
        }
        if self.parent_pool_fraction * (self.population_size as f64) < 1.0 {
            return Err(SudokuError::Configuration(
                "Parent pool must hold at least one candidate".to_string(),
            ));
        }
        Ok(())
    }
}
