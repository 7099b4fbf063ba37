//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation
//! adapters must implement. The random source port lives in the domain
//! ([`quotebox_domain::RandomSource`]) because selection depends on it.

pub mod presenter;
pub mod storage;
