//! Primary event generator for the beta-delayed proton and alpha emission of
//! 20Mg, producing the tracks an active-target TPC simulation starts from.
//!
//! The host owns the random stream, the particle database and the track sink;
//! [`Mg20DecayGenerator`] only samples and emits.

pub mod bounding_box;
pub mod branching;
pub mod config;
pub mod data;
pub mod error;
pub mod fast_rng;
pub mod generator;
pub mod kinematics;
pub mod model;
pub mod particle;
pub mod settings;
pub mod spectrum;
pub mod stats;
pub mod track;

pub use bounding_box::BoundingBox;
pub use branching::{AlwaysEmit, BranchDraws, BranchingGate, Channel, ThresholdGate};
pub use config::{DecayChainEntry, GeneratorConfig};
pub use error::{GeneratorError, Result};
pub use fast_rng::FastRng;
pub use generator::{DecayEvent, DecayGenerator, Mg20DecayGenerator};
pub use kinematics::{beta_momentum_from_energy, nonrelativistic_momentum, ParticleKinematics};
pub use model::generate_events;
pub use particle::{ParticleDatabase, ParticleDefinition, ParticleKind, PdgTable};
pub use settings::RunSettings;
pub use spectrum::{PolynomialSpectrum, SpectrumShape};
pub use track::{EmittedTrack, TrackBank, TrackSink};
