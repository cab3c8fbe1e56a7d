//! Client error types.

use leadflow_core::ExportError;
use leadflow_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response.
    #[error("intake request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// The service answered 2xx with `success: false`.
    #[error("submission declined: {0}")]
    Declined(String),

    /// The reply body was not an intake envelope.
    #[error("invalid intake response: {0}")]
    InvalidResponse(#[source] reqwest::Error),

    /// The local cache could not be written.
    #[error("local cache error: {0}")]
    Cache(#[from] StorageError),

    #[error("No leads found in local storage.")]
    NothingToExport,

    #[error("export failed: {0}")]
    Export(#[from] ExportError),
}
