use super::read::MAX_READ_LEN;
use thiserror::Error;

/// The original survey setting: one true child among 101 candidates,
/// 10,000 reads each over a 3 Mbp reference.
pub const DEFAULT_CONFIG: SimConfig = SimConfig {
    reference_len: 3_000_000,
    candidate_count: 101,
    reads_per_candidate: 10_000,
    read_len: 32,
    parts_per_read: 4,
    mutations_per_read: 3,
};

/// Scenario parameters. All sizes are runtime values; `validate` must pass
/// before any generation runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Length of the parent sequence.
    pub reference_len: usize,
    /// Number of hypothesized children, the true one included.
    pub candidate_count: usize,
    /// Reads drawn for each candidate.
    pub reads_per_candidate: usize,
    /// Bases per read, at most 32.
    pub read_len: usize,
    /// Equal sub-windows a read is split into for mutation placement.
    pub parts_per_read: usize,
    /// Substitution trials per mutated read. Trials are independent and
    /// may hit the same position, so the effective mismatch count can be
    /// lower.
    pub mutations_per_read: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("read length must be between 1 and {}", MAX_READ_LEN)]
    ReadLength,
    #[error("parts per read must be positive and divide the read length")]
    PartsPerRead,
    #[error("reference must be at least one read long")]
    ReferenceLength,
    #[error("candidate and read counts must be positive")]
    Counts,
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.read_len == 0 || self.read_len > MAX_READ_LEN {
            return Err(ConfigError::ReadLength);
        }
        if self.parts_per_read == 0 || self.read_len % self.parts_per_read != 0 {
            return Err(ConfigError::PartsPerRead);
        }
        if self.reference_len < self.read_len {
            return Err(ConfigError::ReferenceLength);
        }
        if self.candidate_count == 0 || self.reads_per_candidate == 0 {
            return Err(ConfigError::Counts);
        }
        Ok(())
    }
    pub fn part_size(&self) -> usize {
        self.read_len / self.parts_per_read
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        DEFAULT_CONFIG
    }
}
