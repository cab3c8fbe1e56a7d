//! Local append-only backup of submitted leads.
//!
//! Keyed by nothing: the same lead submitted twice is stored twice. The
//! cache is never reconciled with the intake service's store.

use std::path::{Path, PathBuf};

use leadflow_core::Lead;
use leadflow_storage::JsonArrayFile;

use crate::error::ClientError;

#[derive(Debug, Clone)]
pub struct LocalCache {
    file: JsonArrayFile<Lead>,
}

impl LocalCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        LocalCache {
            file: JsonArrayFile::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Appends a lead, returning how many the cache now holds.
    pub fn append(&self, lead: &Lead) -> Result<usize, ClientError> {
        Ok(self.file.append(lead.clone())?)
    }

    /// Every cached lead in submission order; unreadable caches read empty.
    pub fn read_all(&self) -> Vec<Lead> {
        self.file.read_or_empty()
    }
}
