/// Generator settings

use crate::protocol::{CHECKSUM_FIELD_LEN, DEFAULT_DELIMITER};

/// Approximate payload size each message is padded towards
pub const DEFAULT_TARGET_LENGTH: usize = 2000;

/// Fixed seed so every run reproduces the same random stream
pub const DEFAULT_SEED: u64 = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub delimiter: char,
    pub target_length: usize,
    pub checksum_reserve: usize,
    pub seed: u64,
}

impl GeneratorConfig {
    /// Filler fields are appended until the payload reaches this many characters
    pub fn fill_threshold(&self) -> usize {
        self.target_length.saturating_sub(self.checksum_reserve)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            delimiter: DEFAULT_DELIMITER,
            target_length: DEFAULT_TARGET_LENGTH,
            checksum_reserve: CHECKSUM_FIELD_LEN,
            seed: DEFAULT_SEED,
        }
    }
}
