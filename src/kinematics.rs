// Momentum construction for decay products

use crate::data::ELECTRON_MASS_KEV;
use crate::stats::AngularDistribution;
use nalgebra::Vector3;
use rand::Rng;

/// Sampled kinematics of a single decay product. Momenta in GeV/c, angles in radians.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleKinematics {
    pub pdg: i32,
    /// Rest mass in GeV/c^2
    pub mass: f64,
    pub momentum_magnitude: f64,
    pub theta: f64,
    pub phi: f64,
    pub momentum: Vector3<f64>,
}

impl ParticleKinematics {
    /// Build the momentum vector from a magnitude and emission angles:
    /// `pz = |p| cos(theta)`, `pt = |p| sin(theta)`, `px = pt cos(phi)`, `py = pt sin(phi)`.
    pub fn from_angles(pdg: i32, mass: f64, magnitude: f64, theta: f64, phi: f64) -> Self {
        let pz = magnitude * theta.cos();
        let pt = magnitude * theta.sin();
        let momentum = Vector3::new(pt * phi.cos(), pt * phi.sin(), pz);
        Self {
            pdg,
            mass,
            momentum_magnitude: magnitude,
            theta,
            phi,
            momentum,
        }
    }

    /// Draw emission angles from `angle` and attach the given magnitude
    pub fn sample<R: Rng + ?Sized>(
        pdg: i32,
        mass: f64,
        magnitude: f64,
        angle: &AngularDistribution,
        rng: &mut R,
    ) -> Self {
        let (theta, phi) = angle.sample_angles(rng);
        Self::from_angles(pdg, mass, magnitude, theta, phi)
    }

    /// Scale the momentum to `magnitude`, keeping the sampled direction.
    ///
    /// A zero momentum has no direction and is left untouched.
    pub fn rescale_to(&mut self, magnitude: f64) {
        let current = self.momentum.norm();
        if current == 0.0 {
            return;
        }
        self.momentum *= magnitude / current;
        self.momentum_magnitude = magnitude;
    }

    pub fn px(&self) -> f64 {
        self.momentum.x
    }

    pub fn py(&self) -> f64 {
        self.momentum.y
    }

    pub fn pz(&self) -> f64 {
        self.momentum.z
    }

    /// Total energy in GeV
    pub fn total_energy(&self) -> f64 {
        (self.momentum.norm_squared() + self.mass * self.mass).sqrt()
    }

    /// Kinetic energy in GeV
    pub fn kinetic_energy(&self) -> f64 {
        self.total_energy() - self.mass
    }
}

/// Relativistic electron momentum in GeV/c for a kinetic energy in keV:
/// `sqrt((E + m_e)^2 - m_e^2) * 1e-6` with `m_e = 511 keV`.
pub fn beta_momentum_from_energy(energy_kev: f64) -> f64 {
    let total = energy_kev + ELECTRON_MASS_KEV;
    (total * total - ELECTRON_MASS_KEV * ELECTRON_MASS_KEV).sqrt() * 1e-6
}

/// Non-relativistic momentum `sqrt(2 m E)` in GeV/c for a kinetic energy in
/// keV and a rest energy in MeV.
pub fn nonrelativistic_momentum(energy_kev: f64, mass_mev: f64) -> f64 {
    let energy_mev = energy_kev / 1000.0;
    (2.0 * mass_mev * energy_mev).sqrt() / 1000.0
}
