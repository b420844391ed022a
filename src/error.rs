use thiserror::Error;

/// A configuration that would leave the simulation without a well-defined ranking or
/// integrator. Raised before anything is constructed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("population must contain at least one skeleton")]
    EmptyPopulation,
    #[error("at least one elite is needed to parent offspring")]
    NoElites,
    #[error("elite count {elites} must be smaller than population size {size}")]
    TooManyElites { elites: usize, size: usize },
    #[error("initial mutation rate {0} must be finite and non-negative")]
    MutationRate(f64),
    #[error("mutation jitter range [{low}, {high}) must be finite, positive and non-empty")]
    Jitter { low: f64, high: f64 },
    #[error("damping {0} must be strictly between 0 and 1")]
    Damping(f64),
    #[error("restitution {0} must be between 0 and 1")]
    Restitution(f64),
    #[error("at least one relaxation pass is required")]
    NoIterations,
    #[error("gravity and impulse scale must be finite")]
    NonFinite,
    #[error("tick rate {0} must be positive")]
    TickRate(f64),
    #[error("standing threshold {0} must be positive")]
    StandingThreshold(f64),
    #[error("fallen contact count {0} must be between 1 and the number of joints")]
    FallenContacts(usize),
    #[error("reproduction chance {0} must be between 0 and 1")]
    Chance(f64),
    #[error("reproduction interval must be at least one frame")]
    Interval,
    #[error("score gain {0} must be positive")]
    ScoreGain(f64),
    #[error("viewport {width}x{height} cannot fit a floor {floor_margin} above its bottom edge")]
    Viewport {
        width: f64,
        height: f64,
        floor_margin: f64,
    },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
