//! A fixed-size population of skeletons and the elitist reproduction step that renews it.

use crate::{
    bounds::Bounds,
    config::{Physics, PopulationConfig, SimConfig},
    error::{ConfigError, Error},
    fitness::FitnessRule,
    random::WyRng,
    render::Frame,
    skeleton::Skeleton,
};
use core::num::NonZeroU32;
use rand::{seq::IndexedRandom, Rng};
use rand_distr::{Distribution, Uniform};
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Population summary, taken after a reproduction or on demand
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub generation: usize,
    pub best_score: f64,
    pub mean_score: f64,
    pub best_mutation_rate: f64,
}

#[derive(Debug, Clone)]
pub struct Population {
    members: Vec<Skeleton>,
    generation: usize,
    config: PopulationConfig,
    physics: Physics,
    rule: FitnessRule,
    drop_height: f64,
    jitter: Uniform<f64>,
}

impl Population {
    /// Spawn `config.population.size` fresh skeletons inside `bounds`. Fails on any
    /// configuration that would leave ranking or reproduction undefined.
    pub fn new(config: &SimConfig, bounds: &Bounds) -> Result<Self, Error> {
        config.validate()?;
        let (low, high) = config.population.jitter;
        let jitter = Uniform::new(low, high).map_err(|_| ConfigError::Jitter { low, high })?;

        let origin = bounds.spawn_origin(config.viewport.drop_height);
        Ok(Self {
            members: (0..config.population.size)
                .map(|_| Skeleton::spawn(origin, config.population.initial_mutation_rate))
                .collect(),
            generation: 0,
            config: config.population,
            physics: config.physics,
            rule: config.fitness,
            drop_height: config.viewport.drop_height,
            jitter,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[inline]
    pub fn members(&self) -> &[Skeleton] {
        &self.members
    }

    #[cfg(test)]
    pub(crate) fn members_mut(&mut self) -> &mut [Skeleton] {
        &mut self.members
    }

    #[inline]
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// The highest scoring member. Ties go to the earliest
    pub fn best(&self) -> Option<&Skeleton> {
        self.members
            .iter()
            .reduce(|best, s| if s.score() > best.score() { s } else { best })
    }

    /// Step every member `speed` times. The steps split one frame of standing time between them.
    /// Each member draws from its own generator seeded off `rng`, so results do not depend on
    /// whether members are stepped in parallel.
    pub fn tick(&mut self, speed: NonZeroU32, bounds: &Bounds, rng: &mut impl Rng) {
        let seeds = self
            .members
            .iter()
            .map(|_| rng.next_u64())
            .collect::<Vec<_>>();
        let (physics, rule) = (&self.physics, &self.rule);
        let substeps = f64::from(speed.get());
        let step = |(member, seed): (&mut Skeleton, &u64)| {
            let mut rng = WyRng::seeded(*seed);
            for _ in 0..speed.get() {
                member.step(&mut rng, bounds, physics, rule, substeps);
            }
        };

        #[cfg(feature = "parallel")]
        self.members.par_iter_mut().zip(seeds.par_iter()).for_each(step);
        #[cfg(not(feature = "parallel"))]
        self.members.iter_mut().zip(seeds.iter()).for_each(step);
    }

    /// Rank by score, keep the elites untouched, and replace everyone else with a fresh skeleton
    /// whose mutation rate is a jittered copy of a random elite's.
    pub fn reproduce(&mut self, bounds: &Bounds, rng: &mut impl Rng) -> Stats {
        self.members.sort_by(|l, r| r.score().total_cmp(&l.score()));

        let origin = bounds.spawn_origin(self.drop_height);
        let (elites, rest) = self.members.split_at_mut(self.config.elites);
        for slot in rest.iter_mut() {
            let parent = elites
                .choose(rng)
                .map_or(self.config.initial_mutation_rate, Skeleton::mutation_rate);
            *slot = Skeleton::spawn(origin, parent * self.jitter.sample(rng));
        }

        self.generation += 1;
        let stats = self.stats();
        log::debug!(
            "generation {}: best {} mean {:.3} elite rates {:?}",
            stats.generation,
            stats.best_score,
            stats.mean_score,
            elites_rates(&self.members[..self.config.elites]),
        );
        stats
    }

    pub fn stats(&self) -> Stats {
        let l = self.members.len() as f64;
        let best = self.best();
        Stats {
            generation: self.generation,
            best_score: best.map_or(0., Skeleton::score),
            mean_score: self.members.iter().fold(0., |acc, s| acc + s.score() / l),
            best_mutation_rate: best.map_or(0., Skeleton::mutation_rate),
        }
    }

    /// Render geometry for every member, in member order
    pub fn frame(&self, head_radius: f64) -> Frame {
        Frame {
            figures: self
                .members
                .iter()
                .map(|member| member.figure(head_radius))
                .collect(),
        }
    }
}

fn elites_rates(elites: &[Skeleton]) -> Vec<f64> {
    elites.iter().map(Skeleton::mutation_rate).collect()
}
