use rand::rngs::StdRng;
use rand::SeedableRng;
use sudoku_evo::engine::operators::{breed, mutate, random_filling, tournament_selection};
use sudoku_evo::{Candidate, FillingString, Grid};

fn template() -> Grid {
    Grid::from_lines(&[
        ".....3.27", ".1..57..9", "6......3.",
        "45..7...2", "...4.9..5", "9.2..1374",
        "1.58.2496", ".6..4..18", ".4.1.6.53",
    ])
    .unwrap()
}

fn scored_candidate(grid: &Grid, filling: FillingString) -> Candidate {
    let mut candidate = Candidate::new(grid, filling).unwrap();
    candidate.evaluate(grid);
    candidate
}

#[test]
fn breed_preserves_length_and_gene_provenance() {
    let mut rng = StdRng::seed_from_u64(11);
    let parent1 = random_filling(43, &mut rng);
    let parent2 = random_filling(43, &mut rng);

    let child = breed(&parent1, &parent2, &mut rng);
    assert_eq!(child.len(), 43);
    for (i, &gene) in child.iter().enumerate() {
        assert!(
            gene == parent1[i] || gene == parent2[i],
            "gene {} came from neither parent",
            i
        );
    }
}

#[test]
fn mutation_disabled_reproduces_offspring_unchanged() {
    let mut rng = StdRng::seed_from_u64(2);
    let offspring = random_filling(43, &mut rng);
    assert_eq!(mutate(offspring.clone(), 0.0, 0.0, &mut rng), offspring);
    assert_eq!(mutate(offspring.clone(), 1.0, 0.0, &mut rng), offspring);
}

#[test]
fn full_mutation_redraws_but_stays_in_digit_range() {
    let mut rng = StdRng::seed_from_u64(2);
    let mutated = mutate(vec![b'1'; 43], 1.0, 1.0, &mut rng);
    assert_eq!(mutated.len(), 43);
    assert!(mutated.iter().all(|gene| (b'1'..=b'9').contains(gene)));
}

#[test]
fn tournament_on_singleton_pool_returns_its_filling() {
    let grid = template();
    let mut rng = StdRng::seed_from_u64(5);
    let pool = vec![scored_candidate(&grid, vec![b'7'; 43])];

    let selected = tournament_selection(&pool, 3, &mut rng);
    assert_eq!(selected, &vec![b'7'; 43]);
}

#[test]
fn larger_tournaments_raise_selection_pressure() {
    let grid = template();
    let solution = b"5946188326427984511389673621885673397522897".to_vec();
    let pool = vec![
        scored_candidate(&grid, vec![b'1'; 43]),
        scored_candidate(&grid, solution.clone()),
    ];

    let wins = |tournament_size: usize, seed: u64| -> usize {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..400)
            .filter(|_| tournament_selection(&pool, tournament_size, &mut rng) == &solution)
            .count()
    };

    // k=1 is a uniform draw (~200/400); k=3 picks the stronger candidate
    // unless all three draws miss it (~350/400)
    let uniform = wins(1, 17);
    let pressured = wins(3, 17);
    assert!(uniform > 120 && uniform < 280, "uniform draw was {}", uniform);
    assert!(pressured > 300, "pressured draw was {}", pressured);
    assert!(pressured > uniform);
}
