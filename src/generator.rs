//! The 20Mg decay event generator.
//!
//! Every event goes through the same linear sequence:
//!
//! 1. draw the vertex inside the configured box, or keep the fixed vertex
//! 2. resolve the rest masses of proton, alpha, gamma and beta
//! 3. sample proton and alpha isotropically at their calibration momenta
//! 4. sample the gamma over the forward hemisphere
//! 5. sample the beta energy from its spectrum and convert it to a momentum
//! 6. with a decay chain configured, take fresh branching draws for each chain
//!    entry and rescale proton and alpha to its energy, keeping their
//!    directions
//! 7. emit a placeholder photon, then the proton, then the alpha
//!
//! The gamma and beta are sampled but not emitted.

use crate::branching::{AlwaysEmit, BranchDraws, BranchingGate, Channel};
use crate::config::{DecayChainEntry, GeneratorConfig};
use crate::data::{ALPHA_PDG, BETA_PDG, GAMMA_PDG, PROTON_PDG};
use crate::error::{GeneratorError, Result};
use crate::kinematics::{beta_momentum_from_energy, ParticleKinematics};
use crate::particle::{resolve_masses, ParticleDatabase, PdgTable, ResolvedMasses};
use crate::spectrum::PolynomialSpectrum;
use crate::stats::AngularDistribution;
use crate::track::{EmittedTrack, TrackSink};
use nalgebra::Vector3;
use rand::Rng;

/// Capabilities the host needs from a primary generator
pub trait DecayGenerator {
    /// One-time setup; a failure must abort the run
    fn init(&mut self) -> Result<()>;

    /// Sample one event and write its tracks to `sink`
    fn read_event<R: Rng + ?Sized>(&mut self, rng: &mut R, sink: &mut dyn TrackSink)
        -> Result<()>;
}

/// Full kinematics of one sampled event
#[derive(Debug, Clone, PartialEq)]
pub struct DecayEvent {
    pub vertex: Vector3<f64>,
    pub proton: ParticleKinematics,
    pub alpha: ParticleKinematics,
    pub gamma: ParticleKinematics,
    pub beta: ParticleKinematics,
    /// Beta kinetic energy in keV
    pub beta_energy: f64,
    /// Branching draws, one per decay chain entry
    pub draws: Vec<BranchDraws>,
}

impl DecayEvent {
    /// Draws that decide emission: those of the last chain entry, or zeros
    /// without a chain
    pub fn emission_draws(&self) -> BranchDraws {
        self.draws.last().copied().unwrap_or_default()
    }
}

#[derive(Debug)]
pub struct Mg20DecayGenerator<D: ParticleDatabase = PdgTable> {
    config: GeneratorConfig,
    database: D,
    gate: Box<dyn BranchingGate>,
    vertex: Vector3<f64>,
    beta_spectrum: Option<PolynomialSpectrum>,
}

impl Mg20DecayGenerator<PdgTable> {
    /// Generator backed by the standard particle table
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_database(config, PdgTable::standard())
    }
}

impl<D: ParticleDatabase> Mg20DecayGenerator<D> {
    pub fn with_database(config: GeneratorConfig, database: D) -> Self {
        let vertex = Vector3::from(config.vertex);
        Self {
            config,
            database,
            gate: Box::new(AlwaysEmit),
            vertex,
            beta_spectrum: None,
        }
    }

    /// Replace the branching gate, [`AlwaysEmit`] by default
    pub fn with_gate<G: BranchingGate + 'static>(mut self, gate: G) -> Self {
        self.gate = Box::new(gate);
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Mutable access to the configuration. The generator has to be
    /// initialized again before the next event.
    pub fn config_mut(&mut self) -> &mut GeneratorConfig {
        self.beta_spectrum = None;
        &mut self.config
    }

    pub fn database(&self) -> &D {
        &self.database
    }

    pub fn is_initialized(&self) -> bool {
        self.beta_spectrum.is_some()
    }

    /// Current vertex: the last sampled one, or the fixed vertex
    pub fn vertex(&self) -> Vector3<f64> {
        self.vertex
    }

    fn masses(&self) -> Result<ResolvedMasses> {
        let masses = resolve_masses(&self.database)?;
        log::debug!(
            "masses: proton={} alpha={} gamma={} beta={}",
            masses.proton,
            masses.alpha,
            masses.gamma,
            masses.beta
        );
        Ok(masses)
    }

    /// Sample every decay product of one event without emitting anything
    pub fn sample_event<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<DecayEvent> {
        let spectrum = self
            .beta_spectrum
            .as_ref()
            .ok_or(GeneratorError::NotInitialized)?;

        if let Some(bounds) = &self.config.box_vertex {
            self.vertex = bounds.sample(rng);
        }

        let masses = self.masses()?;

        if self.config.only_alpha_proton_branch {
            // Stored only; the emitted particle set is the same either way
            log::trace!("only_alpha_proton_branch set, emission unchanged");
        }

        let mut proton = ParticleKinematics::sample(
            PROTON_PDG,
            masses.proton,
            self.config.proton_momentum,
            &AngularDistribution::Isotropic,
            rng,
        );
        let mut alpha = ParticleKinematics::sample(
            ALPHA_PDG,
            masses.alpha,
            self.config.alpha_momentum,
            &AngularDistribution::Isotropic,
            rng,
        );
        let gamma = ParticleKinematics::sample(
            GAMMA_PDG,
            masses.gamma,
            self.config.gamma_momentum,
            &AngularDistribution::Hemispherical,
            rng,
        );

        let beta_energy = spectrum.sample(rng);
        let beta_momentum = beta_momentum_from_energy(beta_energy);
        log::debug!(
            "beta energy={} keV momentum={} GeV/c",
            beta_energy,
            beta_momentum
        );
        let beta = ParticleKinematics::sample(
            BETA_PDG,
            masses.beta,
            beta_momentum,
            &AngularDistribution::Isotropic,
            rng,
        );

        let mut draws = Vec::with_capacity(self.config.decay_chain.len());
        for entry in &self.config.decay_chain {
            let entry_draws = BranchDraws::sample(rng);
            self.apply_chain_entry(entry, &entry_draws, &mut proton, &mut alpha);
            draws.push(entry_draws);
        }

        Ok(DecayEvent {
            vertex: self.vertex,
            proton,
            alpha,
            gamma,
            beta,
            beta_energy,
            draws,
        })
    }

    /// Rescale proton and alpha to the energy of one chain entry, for the
    /// channels the gate accepts
    pub fn apply_chain_entry(
        &self,
        entry: &DecayChainEntry,
        draws: &BranchDraws,
        proton: &mut ParticleKinematics,
        alpha: &mut ParticleKinematics,
    ) {
        if self.gate.accepts(Channel::Proton, draws.proton) {
            proton.rescale_to(entry.energy);
        }
        if self.gate.accepts(Channel::Alpha, draws.alpha) {
            alpha.rescale_to(entry.energy);
        }
    }

    /// Write the tracks of a sampled event to `sink`
    pub fn emit<S: TrackSink + ?Sized>(&self, event: &DecayEvent, sink: &mut S) {
        let draws = event.emission_draws();
        sink.add_track(EmittedTrack::placeholder());
        if self.gate.accepts(Channel::Proton, draws.proton) {
            sink.add_track(EmittedTrack::new(
                PROTON_PDG,
                event.proton.momentum,
                event.vertex,
            ));
        }
        if self.gate.accepts(Channel::Alpha, draws.alpha) {
            sink.add_track(EmittedTrack::new(
                ALPHA_PDG,
                event.alpha.momentum,
                event.vertex,
            ));
        }
    }
}

impl<D: ParticleDatabase> DecayGenerator for Mg20DecayGenerator<D> {
    fn init(&mut self) -> Result<()> {
        self.config.validate_sampling()?;
        let masses = self.masses()?;
        let spectrum = PolynomialSpectrum::new(self.config.beta_spectrum.clone())?;
        log::info!(
            "20Mg decay generator ready: proton={} GeV alpha={} GeV, {} decay chain entries",
            masses.proton,
            masses.alpha,
            self.config.decay_chain.len()
        );
        if self.config.decay_chain_enabled() {
            log::debug!(
                "branching ratios {:?} are stored; gating is done by {:?}",
                self.config.chain_branching_ratios(),
                self.gate
            );
        }
        self.vertex = Vector3::from(self.config.vertex);
        self.beta_spectrum = Some(spectrum);
        Ok(())
    }

    fn read_event<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        sink: &mut dyn TrackSink,
    ) -> Result<()> {
        let event = self.sample_event(rng)?;
        self.emit(&event, sink);
        Ok(())
    }
}
