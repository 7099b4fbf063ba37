//! Ordered quote collection

use super::entities::{Quote, QuoteId, StoredQuote};

/// Ordered sequence of quotes addressed by [`QuoteId`].
///
/// Insertion order is the default display order. Ids come from a counter
/// that only moves forward, so removing an entry never shifts the identity
/// of the others.
#[derive(Debug, Clone)]
pub struct QuoteCollection {
    entries: Vec<StoredQuote>,
    next_id: u64,
}

impl Default for QuoteCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteCollection {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    pub fn from_quotes(quotes: impl IntoIterator<Item = Quote>) -> Self {
        let mut collection = Self::new();
        collection.extend(quotes);
        collection
    }

    fn allocate_id(&mut self) -> QuoteId {
        let id = QuoteId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append a quote and return its new id.
    pub fn add(&mut self, quote: Quote) -> QuoteId {
        let id = self.allocate_id();
        self.entries.push(StoredQuote { id, quote });
        id
    }

    /// Append several quotes, keeping their relative order.
    pub fn extend(&mut self, quotes: impl IntoIterator<Item = Quote>) -> Vec<QuoteId> {
        quotes.into_iter().map(|quote| self.add(quote)).collect()
    }

    /// Discard every entry and install `quotes` in their place.
    ///
    /// Ids restart from 1, since none of the previous ones survive.
    pub fn replace_all(&mut self, quotes: impl IntoIterator<Item = Quote>) {
        self.entries.clear();
        self.next_id = 1;
        self.extend(quotes);
    }

    /// Remove the entry with `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: QuoteId) -> Option<Quote> {
        let position = self.position(id)?;
        Some(self.entries.remove(position).quote)
    }

    /// Replace the entry with `id` in place, returning the previous value.
    pub fn edit(&mut self, id: QuoteId, quote: Quote) -> Option<Quote> {
        let position = self.position(id)?;
        Some(std::mem::replace(&mut self.entries[position].quote, quote))
    }

    pub fn get(&self, id: QuoteId) -> Option<&Quote> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.quote)
    }

    fn position(&self, id: QuoteId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    pub fn list(&self) -> &[StoredQuote] {
        &self.entries
    }

    pub fn quotes(&self) -> impl Iterator<Item = &Quote> {
        self.entries.iter().map(|entry| &entry.quote)
    }

    /// Owned copy of the quotes, for serialization.
    pub fn snapshot(&self) -> Vec<Quote> {
        self.quotes().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Categories in order of first appearance, without duplicates.
    pub fn distinct_categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for quote in self.quotes() {
            if !categories.iter().any(|c| c == quote.category()) {
                categories.push(quote.category().to_string());
            }
        }
        categories
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.quotes().any(|quote| quote.is_in(category))
    }
}
