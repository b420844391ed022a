//! One humanoid figure: particles at fixed joints, the sticks between them, and its fitness.

use crate::{
    bounds::Bounds,
    config::Physics,
    constraint::Stick,
    fitness::{Contacts, Fitness, FitnessRule},
    joint::{Joint, BONES, JOINT_COUNT},
    particle::Particle,
    render::{Figure, Segment},
};
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skeleton {
    particles: [Particle; JOINT_COUNT],
    sticks: [Stick; BONES.len()],
    fitness: Fitness,
    mutation_rate: f64,
}

impl Skeleton {
    /// A fresh skeleton at rest in the spawn pose around `origin`, with zeroed fitness
    pub fn spawn((x, y): (f64, f64), mutation_rate: f64) -> Self {
        Self {
            particles: Joint::ALL.map(|joint| {
                let (dx, dy) = joint.rest_offset();
                Particle::at(x + dx, y + dy)
            }),
            sticks: BONES.map(|(a, b, rest)| Stick::new(a, b, rest)),
            fitness: Fitness::default(),
            mutation_rate,
        }
    }

    #[inline]
    pub fn particle(&self, joint: Joint) -> &Particle {
        &self.particles[joint.idx()]
    }

    #[inline]
    pub fn particle_mut(&mut self, joint: Joint) -> &mut Particle {
        &mut self.particles[joint.idx()]
    }

    #[inline]
    pub fn particles(&self) -> &[Particle; JOINT_COUNT] {
        &self.particles
    }

    #[inline]
    pub fn sticks(&self) -> &[Stick] {
        &self.sticks
    }

    #[inline]
    pub fn fitness(&self) -> &Fitness {
        &self.fitness
    }

    #[inline]
    pub fn fitness_mut(&mut self) -> &mut Fitness {
        &mut self.fitness
    }

    #[inline]
    pub fn score(&self) -> f64 {
        self.fitness.score
    }

    #[inline]
    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    /// Advance one physics step: jitter and integrate every particle, relax the sticks, clamp
    /// into `bounds`, then score the resulting pose. The jitter on each axis is uniform in
    /// `±mutation_rate * impulse_scale`. `substeps` is the number of steps batched into the
    /// current frame.
    pub fn step(
        &mut self,
        rng: &mut impl Rng,
        bounds: &Bounds,
        physics: &Physics,
        rule: &FitnessRule,
        substeps: f64,
    ) {
        let reach = self.mutation_rate * physics.impulse_scale;
        for particle in self.particles.iter_mut() {
            let impulse = if reach > 0. {
                (
                    rng.random_range(-reach..=reach),
                    rng.random_range(-reach..=reach),
                )
            } else {
                (0., 0.)
            };
            particle.integrate(physics, Some(impulse));
        }

        self.relax(physics.iterations);

        for particle in self.particles.iter_mut() {
            particle.clamp(bounds, physics.restitution);
        }

        self.evaluate(bounds.floor_y, rule, substeps);
    }

    /// Run `iterations` passes over every stick, in stick order
    pub fn relax(&mut self, iterations: usize) {
        for _ in 0..iterations {
            for stick in self.sticks.iter() {
                stick.relax(&mut self.particles);
            }
        }
    }

    /// Score the current pose as one of `substeps` steps sharing a single frame, so a frame
    /// always covers `1 / tick_rate` seconds of standing no matter the speed
    pub fn evaluate(&mut self, floor_y: f64, rule: &FitnessRule, substeps: f64) {
        let contacts = Contacts::count(&self.particles, floor_y);
        self.fitness.observe(contacts, 1. / (rule.tick_rate * substeps), rule);
    }

    pub fn figure(&self, head_radius: f64) -> Figure {
        let head = self.particle(Joint::Head);
        Figure {
            segments: self
                .sticks
                .iter()
                .map(|stick| {
                    let (a, b) = stick.ends();
                    let (p1, p2) = (self.particle(a), self.particle(b));
                    Segment {
                        x1: p1.x,
                        y1: p1.y,
                        x2: p2.x,
                        y2: p2.y,
                    }
                })
                .collect(),
            head: (head.x, head.y),
            head_radius,
        }
    }
}
