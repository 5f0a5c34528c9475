use crate::data::{
    ALPHA_MASS_MEV, ALPHA_PDG, PARTICLE_MASSES, PROTON_MASS_MEV, PROTON_PDG, REQUIRED_PARTICLES,
};
use crate::error::{GeneratorError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Entry of a particle database
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleDefinition {
    pub pdg: i32,
    pub name: String,
    /// Rest mass in GeV/c^2
    pub mass: f64,
}

impl ParticleDefinition {
    pub fn new(pdg: i32, name: &str, mass: f64) -> Self {
        Self {
            pdg,
            name: name.to_string(),
            mass,
        }
    }
}

/// Rest-mass lookup by PDG code, provided by the host simulation.
pub trait ParticleDatabase {
    fn lookup(&self, pdg: i32) -> Option<ParticleDefinition>;
}

impl<T: ParticleDatabase + ?Sized> ParticleDatabase for &T {
    fn lookup(&self, pdg: i32) -> Option<ParticleDefinition> {
        (**self).lookup(pdg)
    }
}

/// In-memory particle table.
///
/// [`PdgTable::standard`] is filled from [`PARTICLE_MASSES`]; entries can be
/// added or removed to mirror whatever the host transport engine defines.
#[derive(Debug, Clone, Default)]
pub struct PdgTable {
    entries: HashMap<i32, ParticleDefinition>,
}

impl PdgTable {
    /// Table with no particles defined
    pub fn empty() -> Self {
        Self::default()
    }

    /// Table with the standard light particles and ions
    pub fn standard() -> Self {
        let entries = PARTICLE_MASSES
            .iter()
            .map(|(&pdg, &(name, mass))| (pdg, ParticleDefinition::new(pdg, name, mass)))
            .collect();
        Self { entries }
    }

    pub fn insert(&mut self, definition: ParticleDefinition) {
        self.entries.insert(definition.pdg, definition);
    }

    pub fn remove(&mut self, pdg: i32) -> Option<ParticleDefinition> {
        self.entries.remove(&pdg)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ParticleDatabase for PdgTable {
    fn lookup(&self, pdg: i32) -> Option<ParticleDefinition> {
        self.entries.get(&pdg).cloned()
    }
}

/// Rest masses of every decay product, in GeV/c^2
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedMasses {
    pub proton: f64,
    pub alpha: f64,
    pub gamma: f64,
    pub beta: f64,
}

/// Look up every particle in [`REQUIRED_PARTICLES`].
///
/// Fails with [`GeneratorError::UnknownParticle`] on the first missing code so
/// that a zero mass is never used silently.
pub fn resolve_masses<D: ParticleDatabase + ?Sized>(database: &D) -> Result<ResolvedMasses> {
    let mut masses = [0.0; REQUIRED_PARTICLES.len()];
    for (slot, &(pdg, name)) in masses.iter_mut().zip(REQUIRED_PARTICLES.iter()) {
        match database.lookup(pdg) {
            Some(definition) => *slot = definition.mass,
            None => {
                log::error!("PDG code {} ({}) not defined", pdg, name);
                return Err(GeneratorError::UnknownParticle { pdg, name });
            }
        }
    }
    let [proton, alpha, gamma, beta] = masses;
    Ok(ResolvedMasses {
        proton,
        alpha,
        gamma,
        beta,
    })
}

/// Heavy decay products whose calibration momentum can be set from a kinetic energy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleKind {
    #[serde(rename = "p")]
    Proton,
    #[serde(rename = "a")]
    Alpha,
}

impl ParticleKind {
    pub fn pdg(self) -> i32 {
        match self {
            ParticleKind::Proton => PROTON_PDG,
            ParticleKind::Alpha => ALPHA_PDG,
        }
    }

    /// NIST rest energy in MeV
    pub fn mass_mev(self) -> f64 {
        match self {
            ParticleKind::Proton => PROTON_MASS_MEV,
            ParticleKind::Alpha => ALPHA_MASS_MEV,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{BETA_PDG, GAMMA_PDG};

    #[test]
    fn test_standard_table_has_required_particles() {
        let table = PdgTable::standard();
        for &(pdg, _) in REQUIRED_PARTICLES.iter() {
            assert!(table.lookup(pdg).is_some(), "missing PDG {}", pdg);
        }
        assert_eq!(table.lookup(GAMMA_PDG).unwrap().mass, 0.0);
        assert!(table.lookup(999999).is_none());
    }

    #[test]
    fn test_resolve_masses() {
        let masses = resolve_masses(&PdgTable::standard()).unwrap();
        assert_eq!(masses.proton, 0.938272);
        assert_eq!(masses.alpha, 3.727379);
        assert_eq!(masses.gamma, 0.0);
        assert!((masses.beta - 0.000511).abs() < 1e-6);
    }

    #[test]
    fn test_resolve_masses_reports_first_missing() {
        let mut table = PdgTable::standard();
        table.remove(ALPHA_PDG);
        table.remove(BETA_PDG);
        match resolve_masses(&table) {
            Err(GeneratorError::UnknownParticle { pdg, name }) => {
                assert_eq!(pdg, ALPHA_PDG);
                assert_eq!(name, "alpha");
            }
            other => panic!("expected UnknownParticle, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_definition_overrides_mass() {
        let mut table = PdgTable::empty();
        assert!(table.is_empty());
        table.insert(ParticleDefinition::new(PROTON_PDG, "proton", 1.0));
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup(PROTON_PDG).unwrap().mass, 1.0);
    }

    #[test]
    fn test_particle_kind() {
        assert_eq!(ParticleKind::Proton.pdg(), PROTON_PDG);
        assert_eq!(ParticleKind::Alpha.pdg(), ALPHA_PDG);
        assert!(ParticleKind::Alpha.mass_mev() > ParticleKind::Proton.mass_mev());
    }
}
