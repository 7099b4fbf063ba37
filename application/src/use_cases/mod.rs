//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod filter_controller;
pub mod quote_store;
pub mod quote_widget;
