// Static particle data and the calibration constants of the 20Mg decay
// scenario. Masses follow the PDG table used by the host transport code.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// PDG code of the proton
pub const PROTON_PDG: i32 = 2212;
/// PDG code of the alpha particle (4He nucleus)
pub const ALPHA_PDG: i32 = 1000020040;
/// PDG code of the photon
pub const GAMMA_PDG: i32 = 22;
/// PDG code of the electron, used for the beta channel
pub const BETA_PDG: i32 = 11;

/// Particles every event needs a rest mass for, as `(pdg, name)`
pub const REQUIRED_PARTICLES: [(i32, &str); 4] = [
    (PROTON_PDG, "proton"),
    (ALPHA_PDG, "alpha"),
    (GAMMA_PDG, "gamma"),
    (BETA_PDG, "beta"),
];

/// Momentum of a 1200 keV proton in GeV/c
pub const PROTON_MOMENTUM: f64 = 0.04745369333976018;
/// Momentum of a 500 keV alpha in GeV/c
pub const ALPHA_MOMENTUM: f64 = 0.0610522678252004;
/// Gamma momentum in GeV/c
pub const GAMMA_MOMENTUM: f64 = 0.004033;

/// Electron rest energy in keV as used by the beta momentum conversion
pub const ELECTRON_MASS_KEV: f64 = 511.0;

/// NIST proton rest energy in MeV
pub const PROTON_MASS_MEV: f64 = 938.27208816;
/// NIST alpha rest energy in MeV
pub const ALPHA_MASS_MEV: f64 = 3727.3794066;

/// Upper edge of the reference beta spectrum in keV
pub const BETA_ENDPOINT_KEV: f64 = 2165.0;

/// Coefficients `c0..c5` of the 5th order polynomial fitted to the beta
/// spectrum feeding the 7440 keV state, x in keV.
pub const BETA_SPECTRUM_COEFFICIENTS: [f64; 6] = [
    2.42189e-9,
    1.68134e-10,
    -8.74415e-14,
    -3.26775e-18,
    -8.54988e-21,
    5.56934e-24,
];

/// Number of bins used to tabulate the reference beta spectrum
pub const BETA_SPECTRUM_BINS: usize = 1000;

/// Largest tabulation grid accepted for any spectrum
pub const MAX_SPECTRUM_BINS: usize = 1_000_000;

/// Rest masses in GeV/c^2 keyed by PDG code, with the particle name.
pub static PARTICLE_MASSES: Lazy<HashMap<i32, (&'static str, f64)>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(GAMMA_PDG, ("gamma", 0.0));
    m.insert(BETA_PDG, ("e-", 0.000510998950));
    m.insert(-11, ("e+", 0.000510998950));
    m.insert(12, ("nu_e", 0.0));
    m.insert(-12, ("anti_nu_e", 0.0));
    m.insert(PROTON_PDG, ("proton", 0.938272));
    m.insert(2112, ("neutron", 0.939565));
    m.insert(1000010020, ("deuteron", 1.875613));
    m.insert(1000010030, ("triton", 2.808921));
    m.insert(1000020030, ("He3", 2.808391));
    m.insert(ALPHA_PDG, ("alpha", 3.727379));
    m
});
