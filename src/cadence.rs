//! When the population stops to reproduce. There is no natural generation length here, so the
//! trigger is a policy.

use crate::{
    constants::STANCE_REPRODUCE_CHANCE,
    error::ConfigError,
    random::{chance, happens},
};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// What a cadence gets to look at, once per frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CadenceView {
    /// Frames run so far, including the current one
    pub frame: u64,
    /// Frames run since the last reproduction, including the current one
    pub since_reproduction: u64,
    /// Best score in the population right now
    pub best_score: f64,
    /// Best score in the population right after the last reproduction
    pub best_at_reproduction: f64,
}

pub trait Cadence {
    /// Whether the population should reproduce at the end of this frame
    fn due(&mut self, view: &CadenceView, rng: &mut impl RngCore) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CadencePolicy {
    /// Every `frames` frames
    Interval { frames: u64 },
    /// Independently on every frame with probability `per_frame`
    Chance { per_frame: f64 },
    /// Whenever the best score has risen by `gain` since the last reproduction
    ScoreGain { gain: f64 },
}

impl Default for CadencePolicy {
    fn default() -> Self {
        Self::Chance {
            per_frame: STANCE_REPRODUCE_CHANCE,
        }
    }
}

impl CadencePolicy {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            Self::Interval { frames } if frames == 0 => Err(ConfigError::Interval),
            Self::Chance { per_frame } if !(0. ..=1.).contains(&per_frame) => {
                Err(ConfigError::Chance(per_frame))
            }
            Self::ScoreGain { gain } if !(gain > 0.) => Err(ConfigError::ScoreGain(gain)),
            _ => Ok(()),
        }
    }
}

impl Cadence for CadencePolicy {
    fn due(&mut self, view: &CadenceView, rng: &mut impl RngCore) -> bool {
        match *self {
            Self::Interval { frames } => view.since_reproduction >= frames,
            Self::Chance { per_frame } => happens(rng, chance(per_frame)),
            Self::ScoreGain { gain } => view.best_score - view.best_at_reproduction >= gain,
        }
    }
}
