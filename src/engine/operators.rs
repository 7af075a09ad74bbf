use crate::engine::candidate::Candidate;
use crate::grid::FillingString;
use rand::Rng;

/// Generate a random filling: one uniform digit `1`-`9` per blank cell.
pub fn random_filling<R: Rng>(length: usize, rng: &mut R) -> FillingString {
    (0..length).map(|_| random_digit(rng)).collect()
}

/// Tournament selection: draw `tournament_size` candidates uniformly with
/// replacement from the pool and return the filling of the best-scored one.
pub fn tournament_selection<'a, R: Rng>(
    pool: &'a [Candidate],
    tournament_size: usize,
    rng: &mut R,
) -> &'a FillingString {
    let mut best = &pool[rng.gen_range(0..pool.len())];
    for _ in 1..tournament_size {
        let contender = &pool[rng.gen_range(0..pool.len())];
        if contender.score() > best.score() {
            best = contender;
        }
    }
    best.filling()
}

/// Uniform crossover: a fair coin per gene position decides which parent
/// contributes. Parents must share a length (same template).
pub fn breed<R: Rng>(
    parent1: &FillingString,
    parent2: &FillingString,
    rng: &mut R,
) -> FillingString {
    parent1
        .iter()
        .zip(parent2)
        .map(|(&gene1, &gene2)| if rng.gen_bool(0.5) { gene1 } else { gene2 })
        .collect()
}

/// Two-level mutation: the offspring mutates at all with probability
/// `offspring_chance`; if it does, each gene independently redraws a uniform
/// digit with probability `gene_chance`. A redraw may land on the same digit.
pub fn mutate<R: Rng>(
    mut offspring: FillingString,
    offspring_chance: f64,
    gene_chance: f64,
    rng: &mut R,
) -> FillingString {
    if rng.gen::<f64>() >= offspring_chance {
        return offspring;
    }

    for gene in offspring.iter_mut() {
        if rng.gen::<f64>() < gene_chance {
            *gene = random_digit(rng);
        }
    }
    offspring
}

fn random_digit<R: Rng>(rng: &mut R) -> u8 {
    rng.gen_range(b'1'..=b'9')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_filling_yields_digits_only() {
        let mut rng = StdRng::seed_from_u64(7);
        let filling = random_filling(200, &mut rng);
        assert_eq!(filling.len(), 200);
        assert!(filling.iter().all(|gene| (b'1'..=b'9').contains(gene)));
    }

    #[test]
    fn breed_takes_each_gene_from_one_parent() {
        let mut rng = StdRng::seed_from_u64(42);
        let parent1: FillingString = vec![b'1'; 50];
        let parent2: FillingString = vec![b'9'; 50];
        let child = breed(&parent1, &parent2, &mut rng);

        assert_eq!(child.len(), 50);
        assert!(child.iter().all(|&gene| gene == b'1' || gene == b'9'));
        // With a fair coin over 50 genes, both parents contribute
        assert!(child.contains(&b'1'));
        assert!(child.contains(&b'9'));
    }

    #[test]
    fn mutate_with_zero_gene_chance_is_identity() {
        let mut rng = StdRng::seed_from_u64(1);
        let offspring: FillingString = b"123456789".to_vec();
        assert_eq!(mutate(offspring.clone(), 1.0, 0.0, &mut rng), offspring);
    }

    #[test]
    fn mutate_with_zero_offspring_chance_is_identity() {
        let mut rng = StdRng::seed_from_u64(1);
        let offspring: FillingString = b"123456789".to_vec();
        assert_eq!(mutate(offspring.clone(), 0.0, 1.0, &mut rng), offspring);
    }

    #[test]
    fn mutate_with_full_chance_redraws_every_gene() {
        let mut rng = StdRng::seed_from_u64(3);
        let mutated = mutate(vec![b'5'; 100], 1.0, 1.0, &mut rng);
        assert_eq!(mutated.len(), 100);
        assert!(mutated.iter().all(|gene| (b'1'..=b'9').contains(gene)));
        // 100 uniform redraws all landing back on '5' is astronomically unlikely
        assert!(mutated.iter().any(|&gene| gene != b'5'));
    }

    #[test]
    fn operators_are_deterministic_under_a_fixed_seed() {
        let run = || {
            let mut rng = StdRng::seed_from_u64(99);
            let parent1 = random_filling(30, &mut rng);
            let parent2 = random_filling(30, &mut rng);
            let child = breed(&parent1, &parent2, &mut rng);
            mutate(child, 0.5, 0.1, &mut rng)
        };
        assert_eq!(run(), run());
    }
}
