//! Balance fitness: reward sustained two-foot stance, punish lying on the ground.

use crate::{
    constants::*,
    error::ConfigError,
    joint::{Joint, JOINT_COUNT},
    particle::Particle,
};
use serde::{Deserialize, Serialize};

/// Tunables of the fitness rule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitnessRule {
    /// Physics steps per simulated second
    pub tick_rate: f64,
    /// Seconds of uninterrupted stance that earn one point
    pub standing_threshold: f64,
    /// Ground contacts at or above which the pose counts as fallen
    pub fallen_contacts: usize,
}

impl Default for FitnessRule {
    fn default() -> Self {
        Self {
            tick_rate: STANCE_TICK_RATE,
            standing_threshold: STANCE_STANDING_THRESHOLD,
            fallen_contacts: STANCE_FALLEN_CONTACTS,
        }
    }
}

impl FitnessRule {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tick_rate > 0.) {
            return Err(ConfigError::TickRate(self.tick_rate));
        }
        if !(self.standing_threshold > 0.) {
            return Err(ConfigError::StandingThreshold(self.standing_threshold));
        }
        if self.fallen_contacts == 0 || self.fallen_contacts > JOINT_COUNT {
            return Err(ConfigError::FallenContacts(self.fallen_contacts));
        }
        Ok(())
    }
}

/// Ground contacts of one skeleton, split into feet and everything else
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Contacts {
    pub feet: usize,
    pub others: usize,
}

impl Contacts {
    pub fn count(particles: &[Particle; JOINT_COUNT], floor_y: f64) -> Self {
        Joint::ALL
            .iter()
            .filter(|joint| particles[joint.idx()].is_touching_ground(floor_y))
            .fold(Self::default(), |mut acc, joint| {
                if joint.is_foot() {
                    acc.feet += 1;
                } else {
                    acc.others += 1;
                }
                acc
            })
    }

    /// Both feet down and nothing else
    #[inline]
    pub fn standing(&self) -> bool {
        self.feet == 2 && self.others == 0
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.feet + self.others
    }
}

// Absorbs rounding when many fractional steps add up to the threshold
const STANDING_SLACK: f64 = 1e-9;

/// Per-skeleton fitness accumulator. Both fields start at zero. `score` persists for the
/// lifetime of the skeleton, `time_standing` restarts whenever a stance breaks or earns a point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Fitness {
    pub score: f64,
    pub time_standing: f64,
}

impl Fitness {
    /// Score one step's contacts, where the step covered `elapsed` simulated seconds
    pub fn observe(&mut self, contacts: Contacts, elapsed: f64, rule: &FitnessRule) {
        if contacts.standing() {
            self.time_standing += elapsed;
            if self.time_standing >= rule.standing_threshold - STANDING_SLACK {
                self.score += 1.;
                self.time_standing = 0.;
            }
        } else {
            self.time_standing = 0.;
        }

        if contacts.total() >= rule.fallen_contacts {
            self.score -= 1.;
        }
    }
}
