//! Genetic operators for the planner GA.
//!
//! Tournament selection, single-point crossover with repair, and
//! capacity-aware per-gene mutation. Every operator takes the random
//! source explicitly so runs are reproducible under a seeded RNG.

use rand::seq::index;
use rand::Rng;

use super::chromosome::{Chromosome, REST};
use super::problem::PlannerProblem;

/// Default tournament size for selection.
pub const DEFAULT_TOURNAMENT_SIZE: usize = 3;

/// Tournament selection.
///
/// Repeats `population.len()` times: draws `tournament_size` distinct
/// indices (each round independent, so an individual can win several
/// tournaments), keeps the highest-fitness contender, and copies it into
/// the new pool. Copies own their genes.
pub fn tournament_select<R: Rng>(
    population: &[Chromosome],
    scores: &[f64],
    tournament_size: usize,
    rng: &mut R,
) -> Vec<Chromosome> {
    let size = tournament_size.min(population.len());
    let mut selected = Vec::with_capacity(population.len());

    for _ in 0..population.len() {
        let winner = index::sample(rng, population.len(), size)
            .into_iter()
            .max_by(|&a, &b| scores[a].total_cmp(&scores[b]));
        if let Some(idx) = winner {
            selected.push(population[idx].clone());
        }
    }

    selected
}

/// Single-point crossover with repair.
///
/// With probability `crossover_rate`, cuts both parents at a uniform point
/// in `[1, len-1]` and swaps the tails; each child is repaired if the
/// exchange overloaded a day. Otherwise the children are plain copies of
/// the parents.
pub fn crossover<R: Rng>(
    problem: &PlannerProblem,
    parent1: &Chromosome,
    parent2: &Chromosome,
    crossover_rate: f64,
    rng: &mut R,
) -> (Chromosome, Chromosome) {
    if parent1.len() < 2 || !rng.random_bool(crossover_rate) {
        return (parent1.clone(), parent2.clone());
    }

    let point = rng.random_range(1..parent1.len());
    let mut genes1 = parent1.genes[..point].to_vec();
    genes1.extend_from_slice(&parent2.genes[point..]);
    let mut genes2 = parent2.genes[..point].to_vec();
    genes2.extend_from_slice(&parent1.genes[point..]);

    let mut child1 = Chromosome::from_genes(genes1);
    let mut child2 = Chromosome::from_genes(genes2);
    if !child1.is_valid(problem) {
        child1.repair(problem, rng);
    }
    if !child2.is_valid(problem) {
        child2.repair(problem, rng);
    }

    (child1, child2)
}

/// Per-gene mutation with a capacity guard.
///
/// Each position mutates independently with probability `mutation_rate`.
/// An assigned gene is redrawn unconditionally from the course ids plus
/// rest; a rest gene only becomes a course while its day is still under
/// capacity. A final whole-chromosome repair runs if the pass left the
/// schedule invalid.
pub fn mutate<R: Rng>(
    problem: &PlannerProblem,
    chromosome: &mut Chromosome,
    mutation_rate: f64,
    rng: &mut R,
) {
    let capacity = problem.capacity_slots();

    for i in 0..chromosome.len() {
        if !rng.random_bool(mutation_rate) {
            continue;
        }

        if chromosome.genes[i] != REST {
            chromosome.genes[i] = problem.random_gene(rng);
        } else {
            let day = i / problem.slots_per_day;
            if chromosome.assigned_slots(problem, day) < capacity {
                chromosome.genes[i] = problem.random_gene(rng);
            }
        }
    }

    if !chromosome.is_valid(problem) {
        chromosome.repair(problem, rng);
    }
}
