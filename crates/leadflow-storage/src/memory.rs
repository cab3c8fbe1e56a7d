//! In-memory implementation of [`LeadStore`].
//!
//! [`InMemoryStore`] is a first-class backend for tests and ephemeral runs
//! with the same whole-collection semantics as the file backend.

use leadflow_core::LeadRecord;

use crate::error::StorageError;
use crate::traits::LeadStore;

#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    leads: Vec<LeadRecord>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.leads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }
}

impl LeadStore for InMemoryStore {
    fn load_all(&self) -> Result<Vec<LeadRecord>, StorageError> {
        Ok(self.leads.clone())
    }

    fn save_all(&mut self, leads: &[LeadRecord]) -> Result<(), StorageError> {
        self.leads = leads.to_vec();
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}
