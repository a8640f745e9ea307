//! Property-based tests for konami-evo
//!
//! Uses proptest to verify invariants and properties of the library.

use konami_evo::prelude::*;
use proptest::prelude::*;

fn button() -> impl Strategy<Value = Button> {
    prop::sample::select(Button::ALL.to_vec())
}

fn code() -> impl Strategy<Value = Vec<Button>> {
    prop::collection::vec(button(), KONAMI_CODE.len())
}

fn fitness() -> PrefixMatch<Button> {
    PrefixMatch::new(konami::target())
}

fn population_of(codes: Vec<Vec<Button>>) -> Population<Button> {
    let fitness = fitness();
    codes
        .into_iter()
        .enumerate()
        .map(|(id, genes)| Individual::evaluated(id, Sequence::new(genes), &fitness).unwrap())
        .collect()
}

proptest! {
    // ==================== Fitness Properties ====================

    #[test]
    fn prefix_score_is_longest_common_prefix(genes in code()) {
        let expected = genes
            .iter()
            .zip(KONAMI_CODE.iter())
            .take_while(|(a, b)| a == b)
            .count();
        let sequence = Sequence::new(genes);
        let fitness = fitness();

        prop_assert_eq!(fitness.evaluate(&sequence), expected);
        prop_assert!(fitness.evaluate(&sequence) <= fitness.max_score());
        prop_assert_eq!(fitness.is_match(&sequence), expected == KONAMI_CODE.len());
    }

    #[test]
    fn first_gene_mismatch_scores_zero(mut genes in code(), first in button()) {
        prop_assume!(first != Button::Up);
        genes[0] = first;
        prop_assert_eq!(fitness().evaluate(&Sequence::new(genes)), 0);
    }

    #[test]
    fn later_genes_ignored_after_mismatch(
        prefix in 0usize..KONAMI_CODE.len(),
        tail in code(),
    ) {
        let mut genes = KONAMI_CODE.to_vec();
        genes[prefix] = if KONAMI_CODE[prefix] == Button::Start {
            Button::A
        } else {
            Button::Start
        };
        for i in (prefix + 1)..genes.len() {
            genes[i] = tail[i];
        }
        prop_assert_eq!(fitness().evaluate(&Sequence::new(genes)), prefix);
    }

    // ==================== Mutation Properties ====================

    #[test]
    fn zero_rate_mutation_is_identity(genes in code(), seed in any::<u64>()) {
        use rand::SeedableRng;
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let mutation = ResampleMutation::new(konami::alphabet(), 0.0).unwrap();

        let original = Sequence::new(genes);
        let mut mutated = original.clone();
        mutation.mutate(&mut mutated, &mut rng);
        prop_assert_eq!(mutated, original);
    }

    #[test]
    fn mutation_stays_in_alphabet(genes in code(), rate in 0.0f64..=1.0) {
        let mut rng = rand::thread_rng();
        let alphabet = konami::alphabet();
        let mutation = ResampleMutation::new(alphabet.clone(), rate).unwrap();

        let mut sequence = Sequence::new(genes);
        mutation.mutate(&mut sequence, &mut rng);
        prop_assert_eq!(sequence.len(), KONAMI_CODE.len());
        prop_assert!(alphabet.validate(&sequence).is_ok());
    }

    #[test]
    fn out_of_range_rates_are_rejected(rate in prop_oneof![-10.0f64..-1e-9, 1.0f64 + 1e-9..10.0]) {
        prop_assert!(ResampleMutation::new(konami::alphabet(), rate).is_err());
    }

    // ==================== Crossover Properties ====================

    #[test]
    fn crossover_genes_come_from_parents(p1 in code(), p2 in code()) {
        let mut rng = rand::thread_rng();
        let parent1 = Sequence::new(p1);
        let parent2 = Sequence::new(p2);

        let child = UniformCrossover::new().crossover(&parent1, &parent2, &mut rng).unwrap();

        prop_assert_eq!(child.len(), parent1.len());
        for i in 0..child.len() {
            prop_assert!(child[i] == parent1[i] || child[i] == parent2[i]);
        }
    }

    #[test]
    fn crossover_of_identical_parents_is_identity(genes in code()) {
        let mut rng = rand::thread_rng();
        let parent = Sequence::new(genes);
        let child = UniformCrossover::new().crossover(&parent, &parent, &mut rng).unwrap();
        prop_assert_eq!(child, parent);
    }

    // ==================== Selection Properties ====================

    #[test]
    fn truncation_keeps_best(
        codes in prop::collection::vec(code(), 1..30),
        cutoff in 1usize..40,
    ) {
        let population = population_of(codes);
        let survivors = TruncationSelection::new(cutoff).select(&population);

        prop_assert_eq!(survivors.len(), cutoff.min(population.len()));

        let max = population.iter().map(|i| i.score()).max().unwrap();
        prop_assert_eq!(survivors[0].score(), max);
        for pair in survivors.windows(2) {
            prop_assert!(pair[0].score() >= pair[1].score());
        }

        // Nobody left behind outscores the weakest survivor
        let weakest = survivors.last().unwrap().score();
        let kept: Vec<usize> = survivors.iter().map(|i| i.id()).collect();
        for individual in population.iter().filter(|i| !kept.contains(&i.id())) {
            prop_assert!(individual.score() <= weakest);
        }
    }

    // ==================== Breeding Properties ====================

    #[test]
    fn breeding_preserves_shape(
        codes in prop::collection::vec(code(), 2..10),
        size in 2usize..40,
        rate in 0.0f64..=1.0,
    ) {
        let mut rng = rand::thread_rng();
        let fitness = fitness();
        let mutation = ResampleMutation::new(konami::alphabet(), rate).unwrap();
        let survivors = population_of(codes).into_individuals();

        let crossover = UniformCrossover::new();
        let offspring =
            breed(&survivors, size, &crossover, &mutation, &fitness, &mut rng).unwrap();

        prop_assert_eq!(offspring.len(), size);
        for (id, child) in offspring.iter().enumerate() {
            prop_assert_eq!(child.id(), id);
            prop_assert_eq!(child.sequence().len(), KONAMI_CODE.len());
            prop_assert_eq!(child.score(), fitness.evaluate(child.sequence()));
            prop_assert_eq!(child.is_match(), fitness.is_match(child.sequence()));
        }
    }

    // ==================== Termination Properties ====================

    #[test]
    fn win_check_matches_fraction(
        winners in 0usize..20,
        losers in 0usize..20,
        win_percent in 0.0f64..=1.0,
    ) {
        prop_assume!(winners + losers > 0);
        let mut codes = vec![KONAMI_CODE.to_vec(); winners];
        codes.extend(std::iter::repeat(vec![Button::Start; KONAMI_CODE.len()]).take(losers));
        let population = population_of(codes);

        let state = EvolutionState { generation: 0, population: &population };
        let expected = winners as f64 >= population.len() as f64 * win_percent;
        prop_assert_eq!(WinPercentage::new(win_percent).should_terminate(&state), expected);
    }
}
