use crate::config::{ConfigSection, EvolutionConfig};
use crate::engine::candidate::Candidate;
use crate::engine::operators::{breed, mutate, random_filling, tournament_selection};
use crate::engine::population::Population;
use crate::error::Result;
use crate::grid::Grid;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Receives progress events from the generation loop.
pub trait ProgressCallback {
    fn on_generation(&mut self, generation: usize, best: u32, average: u32);
    fn on_reset(&mut self, generation: usize, average: u32, best: u32);
    fn on_solved(&mut self, generation: usize, score: u32);
}

/// Watches the floor-rounded population average; when it repeats for more
/// than `window` consecutive generations, the search has converged on a
/// local optimum and the population should be rebuilt from scratch.
#[derive(Debug)]
pub struct StagnationTracker {
    window: usize,
    last_average: u32,
    occurrences: usize,
}

impl StagnationTracker {
    pub fn new(window: usize) -> Self {
        Self {
            window,
            last_average: 0,
            occurrences: 0,
        }
    }

    /// Record this generation's average; returns true when a reset is due.
    pub fn observe(&mut self, average: u32) -> bool {
        if average == self.last_average {
            self.occurrences += 1;
        } else {
            self.last_average = average;
            self.occurrences = 0;
        }
        self.occurrences > self.window
    }

    pub fn reset(&mut self) {
        self.last_average = 0;
        self.occurrences = 0;
    }
}

/// Evolutionary search over filling strings for one template.
///
/// Drives the generational loop sequentially; only fitness evaluation of a
/// freshly bred generation fans out across the rayon pool. Breeding stays on
/// the single `StdRng` so a fixed seed replays the same run.
pub struct Solver {
    config: EvolutionConfig,
    rng: StdRng,
}

impl Solver {
    pub fn new(config: EvolutionConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self { config, rng })
    }

    /// Run generations until a candidate reaches `WINNING_SCORE`. There is no
    /// generation or time cutoff; stagnation resets are the escape hatch for
    /// local optima, so the loop only ever returns a full solution.
    pub fn solve<C: ProgressCallback>(
        &mut self,
        template: &Grid,
        callback: &mut C,
    ) -> Result<Candidate> {
        let filling_len = template.missing_count();
        let mut stagnation = StagnationTracker::new(self.config.stagnation_window);

        let mut population = self.initial_population(template, filling_len)?;
        let mut generation = 0usize;

        loop {
            generation += 1;
            population.rank_descending();

            if let Some(winner) = population.winner() {
                let winner = winner.clone();
                log::info!(
                    "solved at generation {} with score {}",
                    generation,
                    winner.score().unwrap_or(0)
                );
                callback.on_solved(generation, winner.score().unwrap_or(0));
                return Ok(winner);
            }

            let best = population
                .best()
                .and_then(Candidate::score)
                .unwrap_or(0);
            let average = population.average_score();
            callback.on_generation(generation, best, average);

            if stagnation.observe(average) {
                log::info!(
                    "population reset at generation {} (average {} stalled, best {})",
                    generation,
                    average,
                    best
                );
                callback.on_reset(generation, average, best);
                population = self.initial_population(template, filling_len)?;
                generation = 0;
                stagnation.reset();
                continue;
            }

            population = self.next_generation(template, &population)?;
        }
    }

    /// Fresh population of uniformly random fillings, fully evaluated.
    fn initial_population(
        &mut self,
        template: &Grid,
        filling_len: usize,
    ) -> Result<Population> {
        let mut candidates = Vec::with_capacity(self.config.population_size);
        for _ in 0..self.config.population_size {
            let filling = random_filling(filling_len, &mut self.rng);
            candidates.push(Candidate::new(template, filling)?);
        }
        let mut population = Population::new(candidates);
        population.evaluate_all(template);
        Ok(population)
    }

    /// Elite carried verbatim, the rest bred by tournament selection,
    /// uniform crossover, and mutation. Expects a ranked population.
    fn next_generation(
        &mut self,
        template: &Grid,
        ranked: &Population,
    ) -> Result<Population> {
        let mut candidates: Vec<Candidate> =
            ranked.elite(self.config.elitism_fraction).to_vec();

        let pool = ranked.parent_pool(self.config.parent_pool_fraction);
        while candidates.len() < self.config.population_size {
            let parent1 = tournament_selection(pool, self.config.tournament_size, &mut self.rng);
            let parent2 = tournament_selection(pool, self.config.tournament_size, &mut self.rng);
            let offspring = breed(parent1, parent2, &mut self.rng);
            let offspring = mutate(
                offspring,
                self.config.offspring_mutation_chance,
                self.config.gene_mutation_chance,
                &mut self.rng,
            );
            candidates.push(Candidate::new(template, offspring)?);
        }

        let mut population = Population::new(candidates);
        population.evaluate_all(template);
        Ok(population)
    }
}
