// Empirical energy spectrum sampling
//
// A polynomial shape is tabulated on a fixed grid over its domain, turned into
// a cumulative distribution and inverted with linear interpolation inside the
// selected bin. Negative parts of the fitted shape carry no probability.

use crate::data::{
    BETA_ENDPOINT_KEV, BETA_SPECTRUM_BINS, BETA_SPECTRUM_COEFFICIENTS, MAX_SPECTRUM_BINS,
};
use crate::error::{GeneratorError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Polynomial shape `c0 + c1*x + ... + cn*x^n` over `[lo, hi]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectrumShape {
    pub coefficients: Vec<f64>,
    pub lo: f64,
    pub hi: f64,
    #[serde(default = "default_bins")]
    pub bins: usize,
}

fn default_bins() -> usize {
    BETA_SPECTRUM_BINS
}

impl SpectrumShape {
    /// Beta spectrum of the reference 20Mg scenario, 0 to 2165 keV
    pub fn reference_beta() -> Self {
        Self {
            coefficients: BETA_SPECTRUM_COEFFICIENTS.to_vec(),
            lo: 0.0,
            hi: BETA_ENDPOINT_KEV,
            bins: BETA_SPECTRUM_BINS,
        }
    }

    /// Evaluate the polynomial with Horner's scheme
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * x + c)
    }
}

impl Default for SpectrumShape {
    fn default() -> Self {
        Self::reference_beta()
    }
}

/// Tabulated sampler built from a [`SpectrumShape`]
#[derive(Debug, Clone)]
pub struct PolynomialSpectrum {
    shape: SpectrumShape,
    /// Bin edges, `bins + 1` entries
    edges: Vec<f64>,
    /// Normalized cumulative probability at each edge
    cdf: Vec<f64>,
}

impl PolynomialSpectrum {
    pub fn new(shape: SpectrumShape) -> Result<Self> {
        if shape.coefficients.is_empty() {
            return Err(GeneratorError::InvalidSpectrum(
                "no polynomial coefficients".to_string(),
            ));
        }
        if !(shape.lo.is_finite() && shape.hi.is_finite()) || shape.lo >= shape.hi {
            return Err(GeneratorError::InvalidSpectrum(format!(
                "domain [{}, {}] is empty",
                shape.lo, shape.hi
            )));
        }
        if shape.bins == 0 {
            return Err(GeneratorError::InvalidSpectrum(
                "at least one bin is required".to_string(),
            ));
        }
        if shape.bins > MAX_SPECTRUM_BINS {
            return Err(GeneratorError::InvalidSpectrum(format!(
                "{} bins exceed the limit of {}",
                shape.bins, MAX_SPECTRUM_BINS
            )));
        }

        let width = (shape.hi - shape.lo) / shape.bins as f64;
        let edges: Vec<f64> = (0..=shape.bins)
            .map(|i| {
                if i == shape.bins {
                    shape.hi
                } else {
                    shape.lo + width * i as f64
                }
            })
            .collect();

        // Trapezoidal integral per bin, clamping negative density to zero
        let mut cdf = Vec::with_capacity(edges.len());
        cdf.push(0.0);
        let mut total = 0.0;
        for pair in edges.windows(2) {
            let f_lo = shape.evaluate(pair[0]).max(0.0);
            let f_hi = shape.evaluate(pair[1]).max(0.0);
            total += 0.5 * (f_lo + f_hi) * (pair[1] - pair[0]);
            cdf.push(total);
        }
        if !(total.is_finite() && total > 0.0) {
            return Err(GeneratorError::InvalidSpectrum(format!(
                "integral over [{}, {}] is not positive",
                shape.lo, shape.hi
            )));
        }
        for value in cdf.iter_mut() {
            *value /= total;
        }

        Ok(Self { shape, edges, cdf })
    }

    pub fn shape(&self) -> &SpectrumShape {
        &self.shape
    }

    /// Draw one value from the spectrum
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let r: f64 = rng.gen();

        // Largest i with cdf[i] <= r
        let mut low = 0usize;
        let mut high = self.cdf.len() - 1;
        while high - low > 1 {
            let mid = (low + high) >> 1;
            if self.cdf[mid] <= r {
                low = mid;
            } else {
                high = mid;
            }
        }

        let c1 = self.cdf[low];
        let c2 = self.cdf[low + 1];
        let x1 = self.edges[low];
        let x2 = self.edges[low + 1];
        if c2 > c1 {
            (x1 + (r - c1) * (x2 - x1) / (c2 - c1)).min(x2)
        } else {
            x1
        }
    }
}
