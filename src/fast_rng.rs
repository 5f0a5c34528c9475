// Seedable random stream for event generation
//
// PCG-LCG generator in the style of OpenMC's random_lcg.cpp. Each event gets
// its own stream, derived from the run seed by skipping the LCG ahead a fixed
// stride per event, so events can be generated in any order or in parallel
// and still reproduce the same output for a given seed.

use rand::{RngCore, SeedableRng};

/// LCG multiplier
const PRN_MULT: u64 = 6364136223846793005;
/// LCG additive constant
const PRN_ADD: u64 = 1442695040888963407;
/// Number of LCG steps reserved per event
pub const PRN_STRIDE: u64 = 152917;

/// Seed `n` steps ahead of `seed` in O(log n)
pub fn future_seed(mut n: u64, seed: u64) -> u64 {
    let mut g = PRN_MULT;
    let mut c = PRN_ADD;
    let mut g_new: u64 = 1;
    let mut c_new: u64 = 0;

    while n > 0 {
        if n & 1 == 1 {
            g_new = g_new.wrapping_mul(g);
            c_new = c_new.wrapping_mul(g).wrapping_add(c);
        }
        c = c.wrapping_mul(g.wrapping_add(1));
        g = g.wrapping_mul(g);
        n >>= 1;
    }

    g_new.wrapping_mul(seed).wrapping_add(c_new)
}

/// Random stream owned by one event (or one worker).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FastRng {
    seed: u64,
}

impl FastRng {
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Stream of event `event_index` within a run seeded with `run_seed`
    pub fn for_event(run_seed: u64, event_index: u64) -> Self {
        Self::new(future_seed(
            event_index.wrapping_mul(PRN_STRIDE),
            run_seed,
        ))
    }

    /// Uniform f64 in [0, 1)
    #[inline(always)]
    pub fn random(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    #[inline]
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
    }

    #[inline(always)]
    fn step(&mut self) -> u64 {
        self.seed = PRN_MULT.wrapping_mul(self.seed).wrapping_add(PRN_ADD);

        // PCG output permutation (RXS-M-XS)
        let word = ((self.seed >> ((self.seed >> 59) + 5)) ^ self.seed)
            .wrapping_mul(12605985483714917081);
        (word >> 43) ^ word
    }
}

impl SeedableRng for FastRng {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self {
            seed: u64::from_le_bytes(seed),
        }
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}

impl RngCore for FastRng {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        (self.step() >> 32) as u32
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.step()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut left = dest;
        while left.len() >= 8 {
            let bytes = self.next_u64().to_le_bytes();
            left[..8].copy_from_slice(&bytes);
            left = &mut left[8..];
        }
        if !left.is_empty() {
            let bytes = self.next_u64().to_le_bytes();
            left.copy_from_slice(&bytes[..left.len()]);
        }
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
