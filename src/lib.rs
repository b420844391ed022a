#[macro_use]
mod macros;

pub mod bounds;
pub mod cadence;
pub mod config;
pub mod constants;
pub mod constraint;
pub mod error;
pub mod fitness;
pub mod joint;
pub mod particle;
pub mod population;
pub mod random;
pub mod render;
pub mod simulation;
pub mod skeleton;

pub use bounds::{Bounds, Viewport};
pub use cadence::{Cadence, CadencePolicy, CadenceView};
pub use config::{Physics, PopulationConfig, Preset, SimConfig};
pub use constraint::Stick;
pub use error::{ConfigError, Error};
pub use fitness::{Contacts, Fitness, FitnessRule};
pub use joint::{Joint, JOINT_COUNT};
pub use particle::Particle;
pub use population::{Population, Stats};
pub use render::{Figure, Frame, Segment};
pub use simulation::{FrameReport, Simulation, Target};
pub use skeleton::Skeleton;
