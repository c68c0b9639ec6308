//! Generational evolution loop.
//!
//! Drives the GA to completion: evaluate, record the generation best,
//! select, recombine, mutate, repeat. No elitism — the best individual of
//! a generation can be lost to the stochastic operators; only its fitness
//! value survives in the history. The loop is synchronous and owns the
//! whole population; each run is self-contained given its random source.

use rand::Rng;
use tracing::debug;

use super::chromosome::Chromosome;
use super::operators::{crossover, mutate, tournament_select, DEFAULT_TOURNAMENT_SIZE};
use super::problem::PlannerProblem;

/// GA run parameters.
///
/// # Example
///
/// ```
/// use study_schedule::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_generations(10);
/// assert_eq!(config.population_size, 20);
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Individuals per generation.
    pub population_size: usize,
    /// Number of generations to run.
    pub generations: usize,
    /// Probability of performing crossover on a selected pair.
    pub crossover_rate: f64,
    /// Per-gene mutation probability.
    pub mutation_rate: f64,
    /// Contenders per selection tournament.
    pub tournament_size: usize,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 100,
            crossover_rate: 0.8,
            mutation_rate: 0.1,
            tournament_size: DEFAULT_TOURNAMENT_SIZE,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }

    /// Sets the generation count.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, crossover_rate: f64) -> Self {
        self.crossover_rate = crossover_rate;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, mutation_rate: f64) -> Self {
        self.mutation_rate = mutation_rate;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, tournament_size: usize) -> Self {
        self.tournament_size = tournament_size;
        self
    }
}

/// Per-generation progress snapshot passed to the observer.
#[derive(Debug, Clone, Copy)]
pub struct GenerationProgress {
    /// Generation index, 0-based.
    pub generation: usize,
    /// Total generations configured for the run.
    pub total: usize,
    /// Best fitness observed in this generation.
    pub best_fitness: f64,
}

/// Outcome of an evolution run.
#[derive(Debug, Clone)]
pub struct EvolutionResult {
    /// Highest-fitness individual of the final population.
    pub best: Chromosome,
    /// Fitness of `best`.
    pub best_fitness: f64,
    /// Best fitness per generation, in run order. One entry per completed
    /// generation; not guaranteed non-decreasing (no elitism).
    pub history: Vec<f64>,
}

impl EvolutionResult {
    /// Final minus initial recorded best fitness (0 for an empty history).
    pub fn improvement(&self) -> f64 {
        match (self.history.first(), self.history.last()) {
            (Some(first), Some(last)) => last - first,
            _ => 0.0,
        }
    }
}

impl PlannerProblem {
    /// Runs the evolution loop to completion.
    ///
    /// Caller preconditions (see [`crate::validation`]): non-empty course
    /// list, positive dimensions, `population_size ≥ 2`, `generations ≥ 1`.
    pub fn evolve<R: Rng>(&self, config: &GaConfig, rng: &mut R) -> EvolutionResult {
        self.evolve_with_observer(config, rng, |_| true)
    }

    /// Runs the evolution loop, notifying `observer` after each generation.
    ///
    /// The observer is invoked synchronously; the loop waits for it to
    /// return. Returning `false` cancels the run before the next
    /// generation, leaving the history shorter than `config.generations`.
    /// The best individual of the population at the point of cancellation
    /// is still returned.
    pub fn evolve_with_observer<R, F>(
        &self,
        config: &GaConfig,
        rng: &mut R,
        mut observer: F,
    ) -> EvolutionResult
    where
        R: Rng,
        F: FnMut(GenerationProgress) -> bool,
    {
        let mut population: Vec<Chromosome> = (0..config.population_size)
            .map(|_| Chromosome::random(self, rng))
            .collect();
        let mut history = Vec::with_capacity(config.generations);

        for generation in 0..config.generations {
            let scores: Vec<f64> = population.iter().map(|c| self.evaluate(c)).collect();
            let generation_best = scores.iter().copied().fold(0.0_f64, f64::max);
            history.push(generation_best);
            debug!(generation, best_fitness = generation_best, "generation evaluated");

            let proceed = observer(GenerationProgress {
                generation,
                total: config.generations,
                best_fitness: generation_best,
            });
            if !proceed {
                debug!(generation, "evolution cancelled by observer");
                break;
            }

            let selected = tournament_select(&population, &scores, config.tournament_size, rng);

            // Pair consecutive winners; an odd pool wraps the last one
            // around to the first.
            let mut next = Vec::with_capacity(config.population_size + 1);
            let mut i = 0;
            while i < selected.len() {
                let parent1 = &selected[i];
                let parent2 = if i + 1 < selected.len() {
                    &selected[i + 1]
                } else {
                    &selected[0]
                };
                let (mut child1, mut child2) =
                    crossover(self, parent1, parent2, config.crossover_rate, rng);
                mutate(self, &mut child1, config.mutation_rate, rng);
                mutate(self, &mut child2, config.mutation_rate, rng);
                next.push(child1);
                next.push(child2);
                i += 2;
            }
            next.truncate(config.population_size);
            population = next;
        }

        // Final extra evaluation pass over the last population.
        let mut best_idx = 0;
        let mut best_fitness = f64::NEG_INFINITY;
        for (idx, chromosome) in population.iter().enumerate() {
            let fitness = self.evaluate(chromosome);
            if fitness > best_fitness {
                best_fitness = fitness;
                best_idx = idx;
            }
        }
        let best = population.swap_remove(best_idx);

        EvolutionResult {
            best,
            best_fitness,
            history,
        }
    }
}
