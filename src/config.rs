// Generator configuration
use crate::bounding_box::BoundingBox;
use crate::data::{ALPHA_MOMENTUM, GAMMA_MOMENTUM, PROTON_MOMENTUM};
use crate::error::{GeneratorError, Result};
use crate::fast_rng::PRN_STRIDE;
use crate::kinematics::nonrelativistic_momentum;
use crate::particle::ParticleKind;
use crate::spectrum::{PolynomialSpectrum, SpectrumShape};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Maximum number of decay chain entries unless configured otherwise
pub const DEFAULT_MAX_CHAIN_ENTRIES: usize = 64;

/// Uniform draws of one event outside the decay chain: vertex (3), proton,
/// alpha and gamma directions (2 each), beta energy (1) and direction (2)
pub const DRAWS_PER_EVENT: u64 = 12;

/// Largest chain whose two draws per entry still fit in the per-event stream
/// of [`crate::FastRng::for_event`]. Longer chains would overlap the next event.
pub const MAX_CHAIN_ENTRIES: usize = ((PRN_STRIDE - DRAWS_PER_EVENT) / 2) as usize;

/// One step of the nuclear decay chain.
///
/// `energy` is applied directly as the momentum magnitude (GeV/c) of the
/// proton and alpha when the chain is rescaled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecayChainEntry {
    pub energy: f64,
    pub branching_ratio: f64,
}

impl DecayChainEntry {
    pub fn new(energy: f64, branching_ratio: f64) -> Self {
        Self {
            energy,
            branching_ratio,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.energy.is_finite() && self.energy > 0.0) {
            return Err(GeneratorError::InvalidEnergy(self.energy));
        }
        if !(0.0..=1.0).contains(&self.branching_ratio) {
            return Err(GeneratorError::BranchingRatioOutOfRange(
                self.branching_ratio,
            ));
        }
        Ok(())
    }
}

/// Configuration of the 20Mg decay generator.
///
/// Set up once before the first event and read-only while events are
/// generated. Every field has a default, so a JSON file only needs to list
/// what differs from the reference scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Stored for compatibility. It does not change which particles are
    /// emitted; in particular it does not gate the gamma channel.
    pub only_alpha_proton_branch: bool,
    /// When present the vertex is drawn uniformly inside the box every event
    pub box_vertex: Option<BoundingBox>,
    /// Vertex used when no box is configured
    pub vertex: [f64; 3],
    pub decay_chain: Vec<DecayChainEntry>,
    pub max_chain_entries: usize,
    /// Calibration momenta in GeV/c
    pub proton_momentum: f64,
    pub alpha_momentum: f64,
    pub gamma_momentum: f64,
    /// Beta kinetic energy spectrum, x in keV
    pub beta_spectrum: SpectrumShape,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            only_alpha_proton_branch: false,
            box_vertex: None,
            vertex: [0.0, 0.0, 0.0],
            decay_chain: Vec::new(),
            max_chain_entries: DEFAULT_MAX_CHAIN_ENTRIES,
            proton_momentum: PROTON_MOMENTUM,
            alpha_momentum: ALPHA_MOMENTUM,
            gamma_momentum: GAMMA_MOMENTUM,
            beta_spectrum: SpectrumShape::reference_beta(),
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration for the reference scenario
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_only_alpha_proton_branch(&mut self, value: bool) {
        self.only_alpha_proton_branch = value;
    }

    /// Store a vertex box without checking its bounds.
    ///
    /// Inverted axes are sampled between the two values; use
    /// [`GeneratorConfig::try_set_box_vertex`] to reject them instead.
    pub fn set_box_vertex(&mut self, x1: f64, y1: f64, z1: f64, x2: f64, y2: f64, z2: f64) {
        self.box_vertex = Some(BoundingBox::new([x1, y1, z1], [x2, y2, z2]));
    }

    /// Store a vertex box after checking `lo <= hi` on every axis
    pub fn try_set_box_vertex(
        &mut self,
        x1: f64,
        y1: f64,
        z1: f64,
        x2: f64,
        y2: f64,
        z2: f64,
    ) -> Result<()> {
        let bounds = BoundingBox::new([x1, y1, z1], [x2, y2, z2]);
        bounds.validate()?;
        self.box_vertex = Some(bounds);
        Ok(())
    }

    /// Box `(-xb, -yb, zb1)` to `(xb, yb, zb2)` around the beam axis
    pub fn set_beam_box(&mut self, xb: f64, yb: f64, zb1: f64, zb2: f64) -> Result<()> {
        let bounds = BoundingBox::symmetric_xy(xb, yb, zb1, zb2);
        bounds.validate()?;
        self.box_vertex = Some(bounds);
        Ok(())
    }

    pub fn set_vertex(&mut self, vertex: [f64; 3]) {
        self.vertex = vertex;
    }

    /// Append one `(energy, branching ratio)` step and enable chain mode
    pub fn add_decay_chain_entry(&mut self, energy: f64, branching_ratio: f64) -> Result<()> {
        let capacity = self.max_chain_entries.min(MAX_CHAIN_ENTRIES);
        if self.decay_chain.len() >= capacity {
            return Err(GeneratorError::ChainCapacityExceeded { capacity });
        }
        let entry = DecayChainEntry::new(energy, branching_ratio);
        entry.validate()?;
        log::debug!(
            "decay chain entry {}: energy={} branching_ratio={}",
            self.decay_chain.len(),
            energy,
            branching_ratio
        );
        self.decay_chain.push(entry);
        Ok(())
    }

    pub fn decay_chain_enabled(&self) -> bool {
        !self.decay_chain.is_empty()
    }

    pub fn chain_energies(&self) -> Vec<f64> {
        self.decay_chain.iter().map(|e| e.energy).collect()
    }

    pub fn chain_branching_ratios(&self) -> Vec<f64> {
        self.decay_chain.iter().map(|e| e.branching_ratio).collect()
    }

    /// Replace the calibration momentum of a proton or alpha with the
    /// non-relativistic momentum of the given kinetic energy in keV
    pub fn set_energy_kev(&mut self, kind: ParticleKind, energy_kev: f64) -> Result<()> {
        if !(energy_kev.is_finite() && energy_kev > 0.0) {
            return Err(GeneratorError::InvalidEnergy(energy_kev));
        }
        let momentum = nonrelativistic_momentum(energy_kev, kind.mass_mev());
        match kind {
            ParticleKind::Proton => self.proton_momentum = momentum,
            ParticleKind::Alpha => self.alpha_momentum = momentum,
        }
        Ok(())
    }

    pub fn set_proton_energy_kev(&mut self, energy_kev: f64) -> Result<()> {
        self.set_energy_kev(ParticleKind::Proton, energy_kev)
    }

    pub fn set_alpha_energy_kev(&mut self, energy_kev: f64) -> Result<()> {
        self.set_energy_kev(ParticleKind::Alpha, energy_kev)
    }

    /// Check the whole configuration, as after loading it from a file
    pub fn validate(&self) -> Result<()> {
        if let Some(bounds) = &self.box_vertex {
            bounds.validate()?;
        }
        self.validate_sampling()
    }

    /// Check what event sampling cannot work without. Vertex box ordering is
    /// not part of it: a box stored with [`GeneratorConfig::set_box_vertex`]
    /// is sampled as given.
    pub fn validate_sampling(&self) -> Result<()> {
        if self.max_chain_entries > MAX_CHAIN_ENTRIES {
            return Err(GeneratorError::ChainCapacityExceeded {
                capacity: MAX_CHAIN_ENTRIES,
            });
        }
        if self.decay_chain.len() > self.max_chain_entries {
            return Err(GeneratorError::ChainCapacityExceeded {
                capacity: self.max_chain_entries,
            });
        }
        for entry in &self.decay_chain {
            entry.validate()?;
        }
        for momentum in [
            self.proton_momentum,
            self.alpha_momentum,
            self.gamma_momentum,
        ] {
            if !(momentum.is_finite() && momentum > 0.0) {
                return Err(GeneratorError::InvalidEnergy(momentum));
            }
        }
        PolynomialSpectrum::new(self.beta_spectrum.clone())?;
        Ok(())
    }

    /// Parse and validate a configuration from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: GeneratorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
