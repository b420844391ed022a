//! The frame loop: tick the population at the current speed, then maybe reproduce.

use crate::{
    bounds::Bounds,
    cadence::{Cadence, CadencePolicy, CadenceView},
    config::SimConfig,
    error::Error,
    population::{Population, Stats},
    random::{default_rng, WyRng},
    render::Frame,
};
use core::num::NonZeroU32;
use rand::Rng;

pub enum Target {
    Frames(u64),
    Generation(usize),
    Score(f64),
}

impl Target {
    fn satisfied(&self, frame: u64, population: &Population) -> bool {
        match self {
            Self::Frames(t) => *t <= frame,
            Self::Generation(t) => *t <= population.generation(),
            Self::Score(t) => population.best().is_some_and(|best| best.score() >= *t),
        }
    }
}

/// What happened during one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub frame: u64,
    /// Population stats right after reproducing, if this frame reproduced
    pub reproduced: Option<Stats>,
}

pub struct Simulation<C: Cadence = CadencePolicy, R: Rng = WyRng> {
    population: Population,
    cadence: C,
    rng: R,
    speed: NonZeroU32,
    frame: u64,
    since_reproduction: u64,
    best_at_reproduction: f64,
}

impl Simulation {
    /// A simulation driven by the configured cadence and an entropy-seeded generator
    pub fn from_config(config: &SimConfig) -> Result<Self, Error> {
        Simulation::new(config, config.cadence, default_rng())
    }
}

impl<C: Cadence, R: Rng> Simulation<C, R> {
    pub fn new(config: &SimConfig, cadence: C, rng: R) -> Result<Self, Error> {
        Ok(Self {
            population: Population::new(config, &config.viewport.bounds())?,
            cadence,
            rng,
            speed: NonZeroU32::MIN,
            frame: 0,
            since_reproduction: 0,
            best_at_reproduction: 0.,
        })
    }

    #[inline]
    pub fn population(&self) -> &Population {
        &self.population
    }

    #[inline]
    pub fn speed(&self) -> NonZeroU32 {
        self.speed
    }

    /// Physics steps per frame. Takes effect from the next frame on
    #[inline]
    pub fn set_speed(&mut self, speed: NonZeroU32) {
        self.speed = speed;
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frame
    }

    /// Run one frame inside `bounds`, which may differ from the previous frame's
    pub fn frame(&mut self, bounds: &Bounds) -> FrameReport {
        self.population.tick(self.speed, bounds, &mut self.rng);
        self.frame += 1;
        self.since_reproduction += 1;

        let view = CadenceView {
            frame: self.frame,
            since_reproduction: self.since_reproduction,
            best_score: self.population.best().map_or(0., |best| best.score()),
            best_at_reproduction: self.best_at_reproduction,
        };

        let reproduced = self.cadence.due(&view, &mut self.rng).then(|| {
            let stats = self.population.reproduce(bounds, &mut self.rng);
            self.since_reproduction = 0;
            self.best_at_reproduction = stats.best_score;
            stats
        });

        FrameReport {
            frame: self.frame,
            reproduced,
        }
    }

    /// Render geometry for the current state
    pub fn render(&self, head_radius: f64) -> Frame {
        self.population.frame(head_radius)
    }

    /// Run frames until `target` holds. `bounds` is asked for the current bounds before every
    /// frame, and `hook` sees every frame's report.
    pub fn run(
        &mut self,
        target: Target,
        mut bounds: impl FnMut() -> Bounds,
        mut hook: impl FnMut(&FrameReport),
    ) -> Stats {
        loop {
            let report = self.frame(&bounds());
            hook(&report);
            if target.satisfied(self.frame, &self.population) {
                let stats = self.population.stats();
                log::info!(
                    "target reached after {} frames, generation {}, best score {}",
                    self.frame,
                    stats.generation,
                    stats.best_score
                );
                break stats;
            }
        }
    }
}
