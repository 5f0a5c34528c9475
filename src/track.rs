// Primary tracks handed to the transport engine
//
// Every event writes its tracks to a `TrackSink` in emission order. The host
// decides what a sink is; `TrackBank` is the in-memory queue used by the
// event loop and the tests.

use crate::data::GAMMA_PDG;
use nalgebra::Vector3;
use std::collections::VecDeque;

/// One primary track: particle type, momentum in GeV/c and vertex.
/// Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmittedTrack {
    pdg: i32,
    momentum: Vector3<f64>,
    vertex: Vector3<f64>,
}

impl EmittedTrack {
    pub fn new(pdg: i32, momentum: Vector3<f64>, vertex: Vector3<f64>) -> Self {
        Self {
            pdg,
            momentum,
            vertex,
        }
    }

    /// Zero-momentum photon at the origin that occupies track slot 0
    pub fn placeholder() -> Self {
        Self::new(GAMMA_PDG, Vector3::zeros(), Vector3::zeros())
    }

    pub fn pdg(&self) -> i32 {
        self.pdg
    }

    pub fn momentum(&self) -> Vector3<f64> {
        self.momentum
    }

    pub fn vertex(&self) -> Vector3<f64> {
        self.vertex
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

    pub fn vx(&self) -> f64 {
        self.vertex.x
    }

    pub fn vy(&self) -> f64 {
        self.vertex.y
    }

    pub fn vz(&self) -> f64 {
        self.vertex.z
    }
}

/// Append-only receiver of primary tracks
pub trait TrackSink {
    fn add_track(&mut self, track: EmittedTrack);
}

impl TrackSink for Vec<EmittedTrack> {
    fn add_track(&mut self, track: EmittedTrack) {
        self.push(track);
    }
}

/// FIFO queue of the primary tracks of one event
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackBank {
    queue: VecDeque<EmittedTrack>,
}

impl TrackBank {
    pub fn new() -> Self {
        TrackBank {
            queue: VecDeque::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        TrackBank {
            queue: VecDeque::with_capacity(capacity),
        }
    }

    /// Next track in emission order, or `None` once the bank is drained
    pub fn pop_track(&mut self) -> Option<EmittedTrack> {
        self.queue.pop_front()
    }

    pub fn get(&self, index: usize) -> Option<&EmittedTrack> {
        self.queue.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EmittedTrack> {
        self.queue.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

impl TrackSink for TrackBank {
    fn add_track(&mut self, track: EmittedTrack) {
        self.queue.push_back(track);
    }
}
