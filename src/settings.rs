/// Run parameters for the event loop
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    /// Number of events to generate
    pub events: usize,
    /// Run seed; `None` draws one from the thread RNG
    pub seed: Option<u64>,
}

impl RunSettings {
    pub fn new(events: usize) -> Self {
        Self { events, seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
