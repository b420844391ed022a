//! Simulation configuration. Every section has defaults from [crate::constants], so a partial
//! JSON file is enough to override a single value.

use crate::{
    bounds::Viewport,
    cadence::CadencePolicy,
    constants::*,
    error::{ConfigError, Error},
    fitness::FitnessRule,
};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Integrator tunables
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Physics {
    pub damping: f64,
    pub gravity: f64,
    pub restitution: f64,
    pub iterations: usize,
    pub impulse_scale: f64,
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            damping: STANCE_DAMPING,
            gravity: STANCE_GRAVITY,
            restitution: STANCE_RESTITUTION,
            iterations: STANCE_RELAX_ITERATIONS,
            impulse_scale: STANCE_IMPULSE_SCALE,
        }
    }
}

impl Physics {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.damping > 0. && self.damping < 1.) {
            return Err(ConfigError::Damping(self.damping));
        }
        if !(0. ..=1.).contains(&self.restitution) {
            return Err(ConfigError::Restitution(self.restitution));
        }
        if self.iterations == 0 {
            return Err(ConfigError::NoIterations);
        }
        if !self.gravity.is_finite() || !self.impulse_scale.is_finite() {
            return Err(ConfigError::NonFinite);
        }
        Ok(())
    }
}

/// Named integrator settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    #[default]
    Classic,
    /// Heavier damping and weaker gravity, slow and floaty
    Damped,
    /// More relaxation passes, limbs stretch less
    Stiff,
}

impl From<Preset> for Physics {
    fn from(preset: Preset) -> Self {
        match preset {
            Preset::Classic => Physics::default(),
            Preset::Damped => Physics {
                damping: 0.95,
                gravity: 0.3,
                ..Physics::default()
            },
            Preset::Stiff => Physics {
                iterations: 12,
                ..Physics::default()
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationConfig {
    pub size: usize,
    pub elites: usize,
    pub initial_mutation_rate: f64,
    /// Offspring mutation rate is the parent's times a uniform draw from this range
    pub jitter: (f64, f64),
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            size: STANCE_POPULATION_SIZE,
            elites: STANCE_ELITE_COUNT,
            initial_mutation_rate: STANCE_INITIAL_MUTATION_RATE,
            jitter: (STANCE_JITTER_LOW, STANCE_JITTER_HIGH),
        }
    }
}

impl PopulationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.elites == 0 {
            return Err(ConfigError::NoElites);
        }
        if self.elites >= self.size {
            return Err(ConfigError::TooManyElites {
                elites: self.elites,
                size: self.size,
            });
        }
        if !(self.initial_mutation_rate.is_finite() && self.initial_mutation_rate >= 0.) {
            return Err(ConfigError::MutationRate(self.initial_mutation_rate));
        }
        let (low, high) = self.jitter;
        if !(low.is_finite() && high.is_finite() && 0. < low && low < high) {
            return Err(ConfigError::Jitter { low, high });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub physics: Physics,
    pub fitness: FitnessRule,
    pub population: PopulationConfig,
    pub cadence: CadencePolicy,
    pub viewport: Viewport,
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.physics.validate()?;
        self.fitness.validate()?;
        self.population.validate()?;
        self.cadence.validate()?;
        self.viewport.validate()
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self, Error> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        Self::from_str(&fs::read_to_string(path)?)
    }

    pub fn to_string(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
