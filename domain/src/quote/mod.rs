//! Quote domain.
//!
//! - [`entities::Quote`] - a text/category pair
//! - [`entities::QuoteId`] - stable surrogate identifier
//! - [`collection::QuoteCollection`] - ordered list owned by the quote store
//! - [`defaults::default_quotes`] - starter content

pub mod collection;
pub mod defaults;
pub mod entities;
