//! Category filter value object
//!
//! A filter is either the `all` sentinel or one category name. It is only
//! valid while that category still exists in the collection; [`CategoryFilter::resolve`]
//! turns a stale filter back into `all`.

use crate::quote::collection::QuoteCollection;
use crate::quote::entities::Quote;
use std::fmt;

/// Stored/displayed value of the "no filter" sentinel.
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Every quote is a candidate
    #[default]
    All,
    /// Only quotes whose category equals this value
    Category(String),
}

impl CategoryFilter {
    /// Interpret a raw preference value.
    ///
    /// Blank input and the `all` sentinel both mean no filter. A category
    /// literally named `all` is therefore unreachable through the filter.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Category(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Category(category) => category,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    pub fn matches(&self, quote: &Quote) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => quote.is_in(category),
        }
    }

    /// Validate against the current categories.
    ///
    /// Returns the usable filter and whether it had to be coerced to `all`.
    pub fn resolve(self, collection: &QuoteCollection) -> (Self, bool) {
        match self {
            Self::Category(ref category) if !collection.has_category(category) => {
                (Self::All, true)
            }
            other => (other, false),
        }
    }

    /// Quotes passing this filter, in collection order.
    pub fn candidates<'a>(&self, collection: &'a QuoteCollection) -> Vec<&'a Quote> {
        collection.quotes().filter(|quote| self.matches(quote)).collect()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}
