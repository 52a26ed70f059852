#![forbid(unsafe_code)]

use pips_catalog::CatalogError;
use pips_core::event::InputError;

/// Failures at the host boundary. Everything past decoding is infallible.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("malformed overlay options json: {0}")]
    Options(#[source] serde_json::Error),
    #[error("failed to encode host commands: {0}")]
    Encode(#[source] serde_json::Error),
}
