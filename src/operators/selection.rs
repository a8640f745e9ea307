//! Selection operators
//!
//! This module provides truncation selection.

use crate::genome::traits::Symbol;
use crate::operators::traits::SelectionOperator;
use crate::population::individual::Individual;
use crate::population::population::Population;

/// Truncation selection
///
/// Keeps the `cutoff` highest-scoring individuals. The sort is stable, so
/// individuals with equal scores keep their population order. A cutoff
/// larger than the population keeps everyone.
#[derive(Clone, Debug)]
pub struct TruncationSelection {
    /// Number of survivors to keep
    pub cutoff: usize,
}

impl TruncationSelection {
    /// Create a new truncation selection
    pub fn new(cutoff: usize) -> Self {
        Self { cutoff }
    }
}

impl<S: Symbol> SelectionOperator<S> for TruncationSelection {
    fn select(&self, population: &Population<S>) -> Vec<Individual<S>> {
        let mut ranked = population.individuals().to_vec();
        ranked.sort_by(|a, b| b.score().cmp(&a.score()));
        ranked.truncate(self.cutoff.min(ranked.len()));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitness::prefix::PrefixMatch;
    use crate::genome::alphabet::Alphabet;
    use crate::genome::sequence::Sequence;
    use crate::genome::target::Target;

    fn create_population() -> Population<char> {
        let alphabet = Alphabet::new(vec!['u', 'd', 'l', 'r', 'b', 'a', 's']).unwrap();
        let target = Target::new(alphabet, "uuddlrlrbas".chars().collect()).unwrap();
        let fitness = PrefixMatch::new(target);

        // Individual i has a matching prefix of exactly i symbols
        let code: Vec<char> = "uuddlrlrbas".chars().collect();
        let mut individuals = Vec::new();
        for i in 0..11 {
            let mut genes = code.clone();
            genes[i] = if code[i] == 'u' { 'd' } else { 'u' };
            individuals.push(Individual::evaluated(i, Sequence::new(genes), &fitness).unwrap());
        }
        individuals.push(
            Individual::evaluated(11, "uuddlrlrbas".chars().collect(), &fitness).unwrap(),
        );
        Population::from_individuals(individuals)
    }

    #[test]
    fn test_truncation_returns_top_k() {
        let pop = create_population();
        let survivors = TruncationSelection::new(5).select(&pop);

        assert_eq!(survivors.len(), 5);
        assert_eq!(survivors[0].score(), 11);
        assert!(survivors[0].is_match());
        let max = pop.best().unwrap().score();
        assert_eq!(survivors[0].score(), max);
    }

    #[test]
    fn test_truncation_sorted_descending() {
        let pop = create_population();
        let survivors = TruncationSelection::new(pop.len()).select(&pop);

        for pair in survivors.windows(2) {
            assert!(pair[0].score() >= pair[1].score());
        }
    }

    #[test]
    fn test_truncation_is_stable() {
        let alphabet = Alphabet::new(vec!['a', 'b']).unwrap();
        let target = Target::new(alphabet, "ab".chars().collect()).unwrap();
        let fitness = PrefixMatch::new(target);
        let pop: Population<char> = ["bb", "aa", "ba", "ab", "aa"]
            .iter()
            .enumerate()
            .map(|(id, s)| Individual::evaluated(id, s.chars().collect(), &fitness).unwrap())
            .collect();

        let ids: Vec<usize> = TruncationSelection::new(5)
            .select(&pop)
            .iter()
            .map(|i| i.id())
            .collect();
        assert_eq!(ids, vec![3, 1, 4, 0, 2]);
    }

    #[test]
    fn test_truncation_clamps_cutoff() {
        let pop = create_population();
        let survivors = TruncationSelection::new(100).select(&pop);
        assert_eq!(survivors.len(), pop.len());
    }

    #[test]
    fn test_truncation_leaves_population_untouched() {
        let pop = create_population();
        let before = pop.clone();
        let _ = TruncationSelection::new(3).select(&pop);
        assert_eq!(pop, before);
    }
}
