//! Error handling for the decay generator

use thiserror::Error;

/// Errors that can occur while configuring or running the generator
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// A required PDG code is missing from the particle database.
    /// Unrecoverable: the run must be aborted.
    #[error("PDG code {pdg} ({name}) not defined")]
    UnknownParticle {
        /// The PDG code that could not be resolved
        pdg: i32,
        /// Human readable particle name
        name: &'static str,
    },

    /// Vertex box with an inverted or non-finite interval
    #[error("Invalid vertex box on {axis} axis: [{lo}, {hi}]")]
    InvalidBox {
        /// Axis label ("x", "y" or "z")
        axis: &'static str,
        /// Lower bound
        lo: f64,
        /// Upper bound
        hi: f64,
    },

    /// More decay chain entries than the configured maximum
    #[error("Decay chain capacity of {capacity} entries exceeded")]
    ChainCapacityExceeded {
        /// Maximum number of entries allowed
        capacity: usize,
    },

    /// Branching ratio outside [0, 1]
    #[error("Branching ratio {0} outside [0, 1]")]
    BranchingRatioOutOfRange(f64),

    /// Energy or momentum magnitude that is not finite and positive
    #[error("Invalid energy or momentum value: {0}")]
    InvalidEnergy(f64),

    /// Spectrum shape that cannot be sampled
    #[error("Invalid spectrum: {0}")]
    InvalidSpectrum(String),

    /// `read_event` called before a successful `init`
    #[error("Generator not initialized")]
    NotInitialized,

    /// An I/O error occurred while reading a configuration file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GeneratorError {
    /// Whether the error must abort the whole run rather than just reject a setting
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            GeneratorError::UnknownParticle { .. } | GeneratorError::NotInitialized
        )
    }
}

/// Type alias for Results from generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;
