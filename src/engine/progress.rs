use super::solver::ProgressCallback;

/// Prints generation progress to stdout.
pub struct ConsoleProgress {
    /// Print a generation line every N generations (resets always print).
    pub report_every: usize,
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self { report_every: 100 }
    }
}

impl ProgressCallback for ConsoleProgress {
    fn on_generation(&mut self, generation: usize, best: u32, average: u32) {
        if self.report_every > 0 && generation % self.report_every == 0 {
            println!("Gen: {:4} | Avg: {:3} | Max: {:3}", generation, average, best);
        }
    }

    fn on_reset(&mut self, generation: usize, average: u32, best: u32) {
        println!(
            "Population reset at Gen: {:4} | Avg: {:3} | Max: {:3}",
            generation, average, best
        );
    }

    fn on_solved(&mut self, generation: usize, score: u32) {
        println!("Solved at Gen: {:4} | Score: {:3}", generation, score);
    }
}

/// Discards all progress events. For tests and embedding.
pub struct NullProgress;

impl ProgressCallback for NullProgress {
    fn on_generation(&mut self, _generation: usize, _best: u32, _average: u32) {}
    fn on_reset(&mut self, _generation: usize, _average: u32, _best: u32) {}
    fn on_solved(&mut self, _generation: usize, _score: u32) {}
}
