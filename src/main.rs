use anyhow::Context;
use sudoku_evo::{ConfigManager, ConsoleProgress, Grid, Solver};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let manager = ConfigManager::new();
    if let Some(config_path) = std::env::args().nth(1) {
        manager
            .load_from_file(&config_path)
            .with_context(|| format!("loading config {}", config_path))?;
    }
    let config = manager.get();

    let input = std::fs::read_to_string(&config.run.input_path)
        .with_context(|| format!("reading puzzle {}", config.run.input_path))?;
    let lines: Vec<&str> = input.lines().collect();
    let grid = Grid::from_lines(&lines)?;

    let mut solver = Solver::new(config.evolution)?;
    let solved = solver.solve(&grid, &mut ConsoleProgress::default())?;

    println!("{}", solved.filled_grid());

    if let Some(html_path) = &config.run.html_output_path {
        std::fs::write(html_path, grid.render_html(solved.filled_grid()))
            .with_context(|| format!("writing {}", html_path))?;
    }

    Ok(())
}
