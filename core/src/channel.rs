//! Channel configuration for worker to aggregator communication

/// Channel buffer configuration for the result channel
#[derive(Debug, Clone)]
pub struct ChannelConfig {
    /// Upper bound on buffered results (workers -> aggregator)
    pub results_buffer: usize,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            results_buffer: 10_000,
        }
    }
}

impl ChannelConfig {
    /// Create a new channel config with a custom results buffer size
    pub fn with_results_buffer(mut self, size: usize) -> Self {
        self.results_buffer = size;
        self
    }

    /// Buffer size for a run of `total_requests`
    ///
    /// Never larger than the run needs and never zero, since a tokio mpsc
    /// channel cannot be created with no capacity.
    pub fn capacity_for(&self, total_requests: usize) -> usize {
        total_requests.min(self.results_buffer).max(1)
    }
}
