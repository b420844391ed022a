//! Centralized default constants for the stance simulation.
//!
//! All tunable defaults are defined here with the `STANCE_` prefix, and
//! surface again as the `Default` impls of the config structs.

use crate::joint::JOINT_COUNT;

// ============================================================================
// Integrator Parameters
// ============================================================================

/// Fraction of implicit velocity retained each step
pub const STANCE_DAMPING: f64 = 0.99;

/// Downward position increment added every step
pub const STANCE_GRAVITY: f64 = 0.5;

/// Fraction of implicit velocity kept when a particle is clamped to a bound
pub const STANCE_RESTITUTION: f64 = 0.5;

/// Stick relaxation passes per step
pub const STANCE_RELAX_ITERATIONS: usize = 5;

/// Per-axis impulse magnitude at a mutation rate of 1.0
pub const STANCE_IMPULSE_SCALE: f64 = 0.5;

// ============================================================================
// Fitness Parameters
// ============================================================================

/// Physics steps per simulated second
pub const STANCE_TICK_RATE: f64 = 60.0;

/// Seconds of two-foot stance required for one point
pub const STANCE_STANDING_THRESHOLD: f64 = 3.0;

/// Joints touching the ground at or above which a skeleton counts as fallen
pub const STANCE_FALLEN_CONTACTS: usize = JOINT_COUNT - 1;

// ============================================================================
// Population Parameters
// ============================================================================

/// Number of skeletons alive at once
pub const STANCE_POPULATION_SIZE: usize = 20;

/// Number of top-ranked skeletons kept unchanged on reproduction
pub const STANCE_ELITE_COUNT: usize = 5;

/// Mutation rate of every skeleton in the first generation
pub const STANCE_INITIAL_MUTATION_RATE: f64 = 1.0;

/// Lower bound of the multiplicative mutation rate jitter
pub const STANCE_JITTER_LOW: f64 = 0.9;

/// Upper bound of the multiplicative mutation rate jitter
pub const STANCE_JITTER_HIGH: f64 = 1.1;

/// Per-frame chance of reproduction under the default cadence
pub const STANCE_REPRODUCE_CHANCE: f64 = 0.01;

// ============================================================================
// Viewport Parameters
// ============================================================================

pub const STANCE_VIEWPORT_WIDTH: f64 = 800.0;

pub const STANCE_VIEWPORT_HEIGHT: f64 = 600.0;

/// Distance of the ground line above the bottom edge of the viewport
pub const STANCE_FLOOR_MARGIN: f64 = 50.0;

/// Height of the feet above the floor when a skeleton spawns
pub const STANCE_DROP_HEIGHT: f64 = 120.0;

/// Radius of the head circle handed to the renderer
pub const STANCE_HEAD_RADIUS: f64 = 30.0;
