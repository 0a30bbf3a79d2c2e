//! Allocation settings for explicitly owned memory blocks.

use rivet_bytes::AlignedByteVec;
use rivet_common::{Error, Result, verify_arg};
use serde::{Deserialize, Serialize};

/// Smallest alignment handed out for owned blocks by default, matching what a C
/// `malloc` guarantees on 64-bit targets.
pub const DEFAULT_MIN_ALIGNMENT: usize = 16;

/// Configuration applied to owned allocations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AllocatorConfig {
    /// Lower bound for the alignment of every owned block. The effective alignment
    /// of an allocation is the larger of this and the requested alignment.
    pub min_alignment: usize,
    /// Largest single allocation, in bytes. Larger requests fail with an
    /// allocation error without touching the system allocator.
    pub max_allocation: usize,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            min_alignment: DEFAULT_MIN_ALIGNMENT,
            max_allocation: isize::MAX as usize,
        }
    }
}

impl AllocatorConfig {
    /// Parses a configuration from JSON and validates it.
    ///
    /// Missing keys take their default values.
    pub fn from_json(json: &str) -> Result<AllocatorConfig> {
        let config: AllocatorConfig =
            serde_json::from_str(json).map_err(|e| Error::invalid_config("AllocatorConfig", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration and returns an error if invalid.
    pub fn validate(&self) -> Result<()> {
        verify_arg!(min_alignment, self.min_alignment.is_power_of_two());
        verify_arg!(
            min_alignment,
            self.min_alignment <= AlignedByteVec::MAX_ALIGNMENT
        );
        verify_arg!(max_allocation, self.max_allocation <= isize::MAX as usize);
        Ok(())
    }

    /// Alignment actually used for a request of `alignment` bytes.
    pub(crate) fn effective_alignment(&self, alignment: usize) -> usize {
        alignment.max(self.min_alignment)
    }
}
