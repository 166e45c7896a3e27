//! Test helpers shared across the crate's unit tests

use crate::utils::{RandomSource, UtilError};

/// Random source that always fails, standing in for an exhausted entropy pool.
pub(crate) struct ExhaustedSource;

impl RandomSource for ExhaustedSource {
    fn fill(&self, _dest: &mut [u8]) -> Result<(), UtilError> {
        Err(UtilError::Crypto("entropy pool unavailable".to_string()))
    }
}
