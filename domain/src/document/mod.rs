//! Quote interchange document.
//!
//! The document is a UTF-8 JSON array of `{text, category}` objects. Extra
//! fields are ignored. The same format is used for export files, imports and
//! the durable storage snapshot.

use crate::core::error::DomainError;
use crate::quote::entities::Quote;
use serde_json::Value;

/// Default file name offered for exports.
pub const EXPORT_FILE_NAME: &str = "quotes.json";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Result of reading an interchange document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImportOutcome {
    /// Records with both fields present and non-empty, in document order.
    pub accepted: Vec<Quote>,
    /// Number of array elements that were dropped.
    pub rejected: usize,
}

impl ImportOutcome {
    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }
}

/// Serialize quotes as a pretty-printed JSON array.
pub fn export_document(quotes: &[Quote]) -> Vec<u8> {
    // Plain string fields always serialize
    serde_json::to_vec_pretty(quotes).unwrap_or_else(|_| b"[]".to_vec())
}

/// Parse an interchange document.
///
/// Fails only when the payload is not JSON or not an array. Malformed
/// elements are counted in [`ImportOutcome::rejected`] and skipped.
pub fn import_document(bytes: &[u8]) -> Result<ImportOutcome, DomainError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| DomainError::MalformedDocument(e.to_string()))?;

    let Value::Array(items) = value else {
        return Err(DomainError::MalformedDocument(
            "expected a JSON array of quotes".to_string(),
        ));
    };

    let mut outcome = ImportOutcome::default();
    for item in &items {
        match quote_from_value(item) {
            Some(quote) => outcome.accepted.push(quote),
            None => outcome.rejected += 1,
        }
    }
    Ok(outcome)
}

/// Read a single `{text, category}` object, or `None` when it is not one.
pub fn quote_from_value(value: &Value) -> Option<Quote> {
    let text = value.get("text")?.as_str()?;
    let category = value.get("category")?.as_str()?;
    Quote::new(text, category).ok()
}
