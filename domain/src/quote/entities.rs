//! Quote entities

use crate::core::error::DomainError;
use crate::core::string::normalize_field;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single quote (Value Object)
///
/// Both fields are trimmed and non-empty. Every way of building one,
/// deserialization included, goes through [`Quote::new`]. This is also the
/// interchange shape: `{text, category}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "QuoteRecord")]
pub struct Quote {
    text: String,
    category: String,
}

/// Unchecked wire form of a [`Quote`].
#[derive(Deserialize)]
struct QuoteRecord {
    text: String,
    category: String,
}

impl TryFrom<QuoteRecord> for Quote {
    type Error = DomainError;

    fn try_from(record: QuoteRecord) -> Result<Self, Self::Error> {
        Self::new(&record.text, &record.category)
    }
}

impl Quote {
    /// Validate and build a quote from raw user input.
    pub fn new(text: &str, category: &str) -> Result<Self, DomainError> {
        Ok(Self {
            text: normalize_field(text, "text")?,
            category: normalize_field(category, "category")?,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn is_in(&self, category: &str) -> bool {
        self.category == category
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" - {}", self.text, self.category)
    }
}

/// Stable identifier of a quote inside a collection.
///
/// Assigned on insertion and never reused while the collection lives.
/// Not part of the persisted format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct QuoteId(u64);

impl QuoteId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for QuoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for QuoteId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().trim_start_matches('#').parse().map(QuoteId)
    }
}

/// A quote together with its identifier (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredQuote {
    pub id: QuoteId,
    #[serde(flatten)]
    pub quote: Quote,
}
