use rand::Rng;

/// Uniform draw in `[lo, hi)`.
///
/// Computed as `lo + (hi - lo) * u`, so inverted bounds are accepted and
/// simply sample `(hi, lo]`. Degenerate bounds always return `lo`.
#[inline]
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    lo + (hi - lo) * rng.gen::<f64>()
}

/// Angular distributions for emitted decay products
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngularDistribution {
    /// `cos(theta)` uniform in [-1, 1]
    Isotropic,
    /// `cos(theta)` uniform in [0, 1], forward hemisphere only
    Hemispherical,
}

impl AngularDistribution {
    /// Sample `(theta, phi)` in radians.
    ///
    /// Theta is drawn first, then phi from `U(0, 360)` degrees.
    pub fn sample_angles<R: Rng + ?Sized>(&self, rng: &mut R) -> (f64, f64) {
        let cos_theta = match self {
            AngularDistribution::Isotropic => uniform(rng, -1.0, 1.0),
            AngularDistribution::Hemispherical => uniform(rng, 0.0, 1.0),
        };
        let theta = cos_theta.acos();
        let phi = uniform(rng, 0.0, 360.0).to_radians();
        (theta, phi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_uniform_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10000 {
            let x = uniform(&mut rng, -2.5, 4.0);
            assert!(x >= -2.5 && x < 4.0);
        }
    }

    #[test]
    fn test_uniform_inverted_bounds() {
        // No validation: inverted intervals sample between the two values
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let x = uniform(&mut rng, 5.0, 1.0);
            assert!(x > 1.0 && x <= 5.0);
        }
    }

    #[test]
    fn test_uniform_degenerate() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(uniform(&mut rng, 3.0, 3.0), 3.0);
    }

    #[test]
    fn test_isotropic_angles_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut below_equator = 0;
        for _ in 0..10000 {
            let (theta, phi) = AngularDistribution::Isotropic.sample_angles(&mut rng);
            assert!((0.0..=PI).contains(&theta));
            assert!((0.0..=2.0 * PI).contains(&phi));
            if theta > FRAC_PI_2 {
                below_equator += 1;
            }
        }
        // Roughly half the directions point backwards
        assert!(below_equator > 4500 && below_equator < 5500);
    }

    #[test]
    fn test_hemispherical_never_exceeds_half_pi() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..10000 {
            let (theta, _) = AngularDistribution::Hemispherical.sample_angles(&mut rng);
            assert!((0.0..=FRAC_PI_2).contains(&theta));
        }
    }

    #[test]
    fn test_isotropic_angles_vary() {
        let mut rng = StdRng::seed_from_u64(3);
        let first = AngularDistribution::Isotropic.sample_angles(&mut rng);
        let varied = (0..100)
            .map(|_| AngularDistribution::Isotropic.sample_angles(&mut rng))
            .any(|angles| angles != first);
        assert!(varied, "Isotropic samples should vary");
    }

    #[test]
    fn test_send_sync_bounds() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<AngularDistribution>();
        assert_sync::<AngularDistribution>();
    }
}
