//! Storage abstraction for captured leads.
//!
//! Provides the [`LeadStore`] trait that the intake service writes through,
//! plus two backends:
//!
//! - [`JsonFileStore`]: the whole collection as one pretty-printed JSON array
//!   in a flat file, rewritten in full on every save
//! - [`InMemoryStore`]: a `Vec` for tests and ephemeral runs
//!
//! [`JsonArrayFile`] is the generic file primitive underneath the file store.
//! The submission client reuses it for its local cache.
//!
//! # Modules
//!
//! - [`error`]: StorageError enum with all failure modes
//! - [`traits`]: LeadStore trait definition
//! - [`file`]: JsonArrayFile and JsonFileStore
//! - [`memory`]: InMemoryStore implementation

pub mod error;
pub mod file;
pub mod memory;
pub mod traits;

// Re-export key types for ergonomic use.
pub use error::StorageError;
pub use file::{JsonArrayFile, JsonFileStore};
pub use memory::InMemoryStore;
pub use traits::LeadStore;
