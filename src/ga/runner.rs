//! Generational GA loop.
//!
//! [`GeneticOptimizer`] owns a population and advances it one generation
//! per [`step`](GeneticOptimizer::step):
//! selection → crossover → (odd-size trim) → mutation → replace.
//!
//! There is no elitism: the best member of one generation may be lost in
//! the next. [`run`](GeneticOptimizer::run) tracks the best member ever
//! seen separately.

use super::config::GaConfig;
use super::selection;
use super::types::Genome;
use crate::error::Result;
use crate::random::{create_rng, entropy_rng};
use rand::rngs::StdRng;
use rand::Rng;

/// Fitness summary of the current population.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Number of completed generations.
    pub generation: usize,
    pub best_fitness: f64,
    pub mean_fitness: f64,
    pub worst_fitness: f64,
}

/// Result of [`GeneticOptimizer::run`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunSummary {
    /// Decoded value of the fittest member seen in any generation.
    pub best_value: f64,

    /// Fitness of that member.
    pub best_fitness: f64,

    /// Generations executed by this call.
    pub generations: usize,

    /// Peak fitness of each population, starting with the one `run`
    /// began from.
    ///
    /// May decrease between generations.
    pub fitness_history: Vec<f64>,

    /// Running maximum of `fitness_history`. Non-decreasing.
    pub best_history: Vec<f64>,
}

/// A non-elitist generational genetic algorithm.
///
/// Generic over the [`Genome`] it evolves and the random source `R`, which
/// supplies every draw in a fixed order so a seeded source reproduces a
/// run exactly.
///
/// # Usage
///
/// ```
/// use u_bitga::ga::{Chromosome, GaConfig, GeneticOptimizer, SearchSpace};
///
/// let space = SearchSpace::from_bounds(0.0, 1.0, |x| x * (1.0 - x)).unwrap();
/// let config = GaConfig::default().with_population_size(20).with_seed(42);
/// let mut ga = GeneticOptimizer::<Chromosome>::new(&space, &config).unwrap();
///
/// for _ in 0..10 {
///     ga.step().unwrap();
/// }
/// assert_eq!(ga.population().len(), 20);
/// assert!((0.0..=1.0).contains(&ga.best()));
/// ```
#[derive(Debug, Clone)]
pub struct GeneticOptimizer<G: Genome, R: Rng = StdRng> {
    population: Vec<G>,
    crossover_rate: f64,
    mutation_rate: f64,
    generation: usize,
    rng: R,
}

impl<G: Genome> GeneticOptimizer<G, StdRng> {
    /// Builds an optimizer with a freshly spawned population.
    ///
    /// The generator is seeded from [`GaConfig::seed`], or from entropy
    /// when no seed is set.
    pub fn new(context: &G::Context, config: &GaConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => entropy_rng(),
        };
        Self::with_rng(context, config, rng)
    }
}

impl<G: Genome, R: Rng> GeneticOptimizer<G, R> {
    /// Builds an optimizer drawing from the given random source.
    ///
    /// Spawns `config.population_size` members, each with an independent
    /// random encoding.
    pub fn with_rng(context: &G::Context, config: &GaConfig, mut rng: R) -> Result<Self> {
        config.validate()?;

        let population: Vec<G> = (0..config.population_size)
            .map(|_| G::spawn(context, &mut rng))
            .collect();

        log::debug!(
            "initialized population of {} (crossover_rate={}, mutation_rate={})",
            population.len(),
            config.crossover_rate,
            config.mutation_rate
        );

        Ok(Self {
            population,
            crossover_rate: config.crossover_rate,
            mutation_rate: config.mutation_rate,
            generation: 0,
            rng,
        })
    }

    /// Builds an optimizer around an existing population.
    ///
    /// `config.population_size` is ignored; the population's own length is
    /// used and is subject to the same minimum of two.
    pub fn with_population(population: Vec<G>, config: &GaConfig, rng: R) -> Result<Self> {
        let config = GaConfig {
            population_size: population.len(),
            ..config.clone()
        };
        config.validate()?;

        Ok(Self {
            population,
            crossover_rate: config.crossover_rate,
            mutation_rate: config.mutation_rate,
            generation: 0,
            rng,
        })
    }

    /// Decoded value of every member, in population order.
    pub fn population(&self) -> Vec<f64> {
        self.population.iter().map(G::value).collect()
    }

    /// Fitness of every member, in population order.
    pub fn fitnesses(&self) -> Vec<f64> {
        self.population.iter().map(G::fitness).collect()
    }

    pub fn chromosomes(&self) -> &[G] {
        &self.population
    }

    /// Number of completed generations.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn crossover_rate(&self) -> f64 {
        self.crossover_rate
    }

    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    /// Selects two distinct members by fitness and, with probability
    /// `crossover_rate`, replaces them with their crossover children.
    ///
    /// Fails with [`GaError::InvalidWeights`](crate::GaError::InvalidWeights)
    /// if any fitness is negative or all are zero.
    pub fn select_pair(&mut self) -> Result<(G, G)> {
        let weights = self.fitnesses();
        let picked = selection::choose_indices(&weights, 2, false, &mut self.rng)?;
        let a = &self.population[picked[0]];
        let b = &self.population[picked[1]];

        if self.rng.random::<f64>() < self.crossover_rate {
            Ok(a.crossover(b, &mut self.rng))
        } else {
            Ok((a.clone(), b.clone()))
        }
    }

    /// Advances the population by one generation.
    ///
    /// Pairs from [`select_pair`](Self::select_pair) fill the next
    /// generation; an odd population size overshoots by one, and a
    /// uniformly chosen member is dropped. Every member is then mutated.
    /// On error the current population is left as it was.
    pub fn step(&mut self) -> Result<()> {
        let size = self.population.len();
        let mut offspring = Vec::with_capacity(size + 1);

        while offspring.len() < size {
            let (a, b) = self.select_pair()?;
            offspring.push(a);
            offspring.push(b);
        }

        if offspring.len() > size {
            drop_random(&mut offspring, &mut self.rng);
        }

        let mut next = Vec::with_capacity(size);
        for child in &offspring {
            next.push(child.mutate(self.mutation_rate, &mut self.rng));
        }

        self.population = next;
        self.generation += 1;

        log::trace!(
            "generation {}: best fitness {}",
            self.generation,
            self.best_fitness()
        );
        Ok(())
    }

    /// The fittest current member; the first one in population order on
    /// ties.
    pub fn best_genome(&self) -> &G {
        let mut best = &self.population[0];
        for member in &self.population[1..] {
            if member.fitness() > best.fitness() {
                best = member;
            }
        }
        best
    }

    /// Decoded value of the fittest current member.
    pub fn best(&self) -> f64 {
        self.best_genome().value()
    }

    pub fn best_fitness(&self) -> f64 {
        self.best_genome().fitness()
    }

    pub fn stats(&self) -> GenerationStats {
        let fitnesses = self.fitnesses();
        let worst = fitnesses.iter().cloned().fold(f64::INFINITY, f64::min);
        let mean = fitnesses.iter().sum::<f64>() / fitnesses.len() as f64;
        GenerationStats {
            generation: self.generation,
            best_fitness: self.best_fitness(),
            mean_fitness: mean,
            worst_fitness: worst,
        }
    }

    /// Runs `generations` steps and reports the best member seen along the
    /// way, the current population included.
    pub fn run(&mut self, generations: usize) -> Result<RunSummary> {
        let first = self.best_genome();
        let mut best_value = first.value();
        let mut best_fitness = first.fitness();

        let mut fitness_history = Vec::with_capacity(generations + 1);
        let mut best_history = Vec::with_capacity(generations + 1);
        fitness_history.push(best_fitness);
        best_history.push(best_fitness);

        for _ in 0..generations {
            self.step()?;

            let peak = self.best_genome();
            if peak.fitness() > best_fitness {
                best_fitness = peak.fitness();
                best_value = peak.value();
            }
            fitness_history.push(peak.fitness());
            best_history.push(best_fitness);

            let stats = self.stats();
            log::debug!(
                "generation {}: best={:.6} mean={:.6} worst={:.6} overall={:.6}",
                stats.generation,
                stats.best_fitness,
                stats.mean_fitness,
                stats.worst_fitness,
                best_fitness
            );
        }

        Ok(RunSummary {
            best_value,
            best_fitness,
            generations,
            fitness_history,
            best_history,
        })
    }
}

/// Removes one element at a uniformly random position and returns that
/// position.
fn drop_random<T, R: Rng + ?Sized>(items: &mut Vec<T>, rng: &mut R) -> usize {
    let idx = rng.random_range(0..items.len());
    items.remove(idx);
    idx
}

// ============================================================================
// Tests
// ============================================================================
