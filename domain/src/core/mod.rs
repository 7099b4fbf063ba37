//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] - domain-level errors
//! - [`string::normalize_field`] - trimming/validation of user-entered text

pub mod error;
pub mod string;
