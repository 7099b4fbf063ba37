//! Domain layer for quotebox
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Quote**: a validated text/category pair, addressed by a stable [`QuoteId`]
//! - **Category filter**: the `all` sentinel or one existing category
//! - **Selection**: uniform random pick through an injected [`RandomSource`]
//! - **Document**: the JSON array format shared by export, import and storage

pub mod core;
pub mod document;
pub mod filter;
pub mod quote;
pub mod selection;

// Re-export commonly used types
pub use core::error::DomainError;
pub use document::{EXPORT_FILE_NAME, ImportOutcome, export_document, import_document};
pub use filter::{ALL_CATEGORIES, CategoryFilter};
pub use quote::{
    collection::QuoteCollection,
    defaults::default_quotes,
    entities::{Quote, QuoteId, StoredQuote},
};
pub use selection::{RandomSource, pick_random};
