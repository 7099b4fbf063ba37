//! Random quote selection.
//!
//! The randomness itself is injected through [`RandomSource`] so that
//! selection is deterministic under test.

use crate::core::error::DomainError;

/// Source of uniformly distributed indices.
///
/// Implementations live in the infrastructure layer (or in tests).
pub trait RandomSource: Send + Sync {
    /// Return an index in `[0, upper)`. `upper` is never zero.
    fn next_index(&self, upper: usize) -> usize;
}

/// Pick one element of `candidates` uniformly at random.
pub fn pick_random<'a, T>(
    candidates: &'a [T],
    source: &dyn RandomSource,
) -> Result<&'a T, DomainError> {
    if candidates.is_empty() {
        return Err(DomainError::EmptyCandidates);
    }
    // Clamp in case a source misbehaves
    let index = source.next_index(candidates.len()).min(candidates.len() - 1);
    Ok(&candidates[index])
}
