//! Branching decisions for the decay channels.
//!
//! When a decay chain is configured, every chain entry takes one uniform draw
//! for the proton and one for the alpha. A [`BranchingGate`] decides from those
//! draws whether a channel is rescaled for that entry, and the draws of the
//! last entry decide whether it is emitted. The default gate, [`AlwaysEmit`],
//! accepts every draw in [0, 1], so both channels are always emitted.
//!
//! [`ThresholdGate`] is the opt-in alternative: each channel is accepted only
//! when its draw does not exceed a caller supplied threshold. No thresholds are
//! built in.

use rand::Rng;
use std::fmt::Debug;

/// Decay channels subject to a branching decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Proton,
    Alpha,
}

/// Branching draws of one chain entry.
/// The zero default stands in when no chain is configured.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BranchDraws {
    pub proton: f64,
    pub alpha: f64,
}

impl BranchDraws {
    /// Draw proton then alpha from `U(0, 1)`
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let proton = rng.gen::<f64>();
        let alpha = rng.gen::<f64>();
        log::trace!("branching draws: proton={} alpha={}", proton, alpha);
        Self { proton, alpha }
    }

    pub fn get(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Proton => self.proton,
            Channel::Alpha => self.alpha,
        }
    }
}

/// Decides whether a channel takes part in an event
pub trait BranchingGate: Debug + Send + Sync {
    fn accepts(&self, channel: Channel, draw: f64) -> bool;
}

/// Accepts every draw in [0, 1]
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysEmit;

impl BranchingGate for AlwaysEmit {
    fn accepts(&self, _channel: Channel, draw: f64) -> bool {
        draw <= 1.0
    }
}

/// Accepts a channel when its draw is at or below the channel threshold.
/// Channels without a threshold are always accepted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThresholdGate {
    proton: Option<f64>,
    alpha: Option<f64>,
}

impl ThresholdGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(mut self, channel: Channel, threshold: f64) -> Self {
        let slot = match channel {
            Channel::Proton => &mut self.proton,
            Channel::Alpha => &mut self.alpha,
        };
        *slot = Some(threshold);
        self
    }

    pub fn threshold(&self, channel: Channel) -> Option<f64> {
        match channel {
            Channel::Proton => self.proton,
            Channel::Alpha => self.alpha,
        }
    }
}

impl BranchingGate for ThresholdGate {
    fn accepts(&self, channel: Channel, draw: f64) -> bool {
        match self.threshold(channel) {
            Some(threshold) => draw <= threshold,
            None => true,
        }
    }
}
