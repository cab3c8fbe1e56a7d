//! The [`LeadStore`] trait defining the storage contract for leads.
//!
//! The contract is deliberately whole-collection: callers load everything,
//! modify the `Vec`, and save everything back. Callers that append from
//! several tasks must serialize those read-modify-write cycles themselves;
//! the intake service does so by holding its store behind a mutex.

use leadflow_core::LeadRecord;

use crate::error::StorageError;

/// The storage contract for captured leads.
///
/// The trait is synchronous; backends are small enough that a blocking call
/// inside a request handler is acceptable.
pub trait LeadStore: Send {
    /// Loads the full collection in insertion order.
    ///
    /// A store that has never been written returns an empty collection.
    fn load_all(&self) -> Result<Vec<LeadRecord>, StorageError>;

    /// Replaces the full collection.
    fn save_all(&mut self, leads: &[LeadRecord]) -> Result<(), StorageError>;

    /// Short label for logs.
    fn describe(&self) -> String;
}
