use crate::error::{GeneratorError, Result};
use crate::stats::uniform;
use nalgebra::Vector3;
use rand::Rng;
use serde::{Deserialize, Serialize};

const AXES: [&str; 3] = ["x", "y", "z"];

/// Axis-aligned box the decay vertex is drawn from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub lower_left: [f64; 3],
    pub upper_right: [f64; 3],
}

impl BoundingBox {
    /// Box spanning the two corners as given; inverted axes are kept as they are
    pub fn new(lower_left: [f64; 3], upper_right: [f64; 3]) -> Self {
        BoundingBox {
            lower_left,
            upper_right,
        }
    }

    /// Box centred on the beam axis: `(-xb, -yb, zb1)` to `(xb, yb, zb2)`
    pub fn symmetric_xy(xb: f64, yb: f64, zb1: f64, zb2: f64) -> Self {
        Self::new([-xb, -yb, zb1], [xb, yb, zb2])
    }

    pub fn center(&self) -> [f64; 3] {
        [
            0.5 * (self.lower_left[0] + self.upper_right[0]),
            0.5 * (self.lower_left[1] + self.upper_right[1]),
            0.5 * (self.lower_left[2] + self.upper_right[2]),
        ]
    }

    pub fn width(&self) -> [f64; 3] {
        [
            self.upper_right[0] - self.lower_left[0],
            self.upper_right[1] - self.lower_left[1],
            self.upper_right[2] - self.lower_left[2],
        ]
    }

    /// Check every axis is finite with `lo <= hi`. Degenerate axes are allowed.
    pub fn validate(&self) -> Result<()> {
        for (axis, name) in AXES.iter().enumerate() {
            let lo = self.lower_left[axis];
            let hi = self.upper_right[axis];
            if !(lo.is_finite() && hi.is_finite()) || lo > hi {
                return Err(GeneratorError::InvalidBox {
                    axis: *name,
                    lo,
                    hi,
                });
            }
        }
        Ok(())
    }

    pub fn contains(&self, point: &Vector3<f64>) -> bool {
        (0..3).all(|axis| {
            point[axis] >= self.lower_left[axis] && point[axis] <= self.upper_right[axis]
        })
    }

    /// Draw x, y and z independently and uniformly, in that order
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector3<f64> {
        let x = uniform(rng, self.lower_left[0], self.upper_right[0]);
        let y = uniform(rng, self.lower_left[1], self.upper_right[1]);
        let z = uniform(rng, self.lower_left[2], self.upper_right[2]);
        Vector3::new(x, y, z)
    }
}
