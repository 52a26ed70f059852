#![forbid(unsafe_code)]

//! Decoding errors.
//!
//! Lookups and loading are total; only malformed JSON handed over by the
//! host can fail.

/// Catalog decoding failure.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The product card array did not match the card schema.
    #[error("malformed product card json: {0}")]
    Cards(#[source] serde_json::Error),
    /// A replacement schema table document was rejected.
    #[error("malformed schema table json: {0}")]
    Schema(#[source] serde_json::Error),
}
