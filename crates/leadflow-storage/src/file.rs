//! Flat-file JSON array storage.
//!
//! [`JsonArrayFile`] keeps a collection as a single JSON array in one file.
//! Saves go to a sibling `*.tmp` file that is then renamed over the target,
//! so a reader never observes a half-written array. A target that exists
//! but cannot be opened for writing is left alone and the save fails.

use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use leadflow_core::LeadRecord;

use crate::error::StorageError;
use crate::traits::LeadStore;

/// A collection of `T` persisted as one JSON array.
#[derive(Debug, Clone)]
pub struct JsonArrayFile<T> {
    path: PathBuf,
    _items: PhantomData<fn() -> T>,
}

impl<T> JsonArrayFile<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonArrayFile {
            path: path.into(),
            _items: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole array. A missing file is an empty collection.
    pub fn read(&self) -> Result<Vec<T>, StorageError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(StorageError::io(&self.path, err)),
        };
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&data)?)
    }

    /// Reads the whole array, treating any failure as an empty collection.
    pub fn read_or_empty(&self) -> Vec<T> {
        self.read().unwrap_or_else(|err| {
            tracing::warn!(path = %self.path.display(), error = %err, "unreadable store, using empty collection");
            Vec::new()
        })
    }

    /// Replaces the file contents with `items`, pretty-printed.
    pub fn write(&self, items: &[T]) -> Result<(), StorageError> {
        self.check_writable()?;
        let body = serde_json::to_string_pretty(items)?;
        let tmp = self.tmp_path();
        fs::write(&tmp, body).map_err(|err| StorageError::io(&tmp, err))?;
        if let Err(err) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(StorageError::io(&self.path, err));
        }
        Ok(())
    }

    /// Appends one item with a full read-modify-write cycle.
    ///
    /// A file that cannot be read is replaced rather than extended, unless it
    /// is also write-protected. Returns the new collection length.
    pub fn append(&self, item: T) -> Result<usize, StorageError> {
        let mut items = self.read_or_empty();
        items.push(item);
        self.write(&items)?;
        Ok(items.len())
    }

    /// Fails if the target exists and is not writable in its own right.
    /// Renaming over it would only need write access to the directory.
    fn check_writable(&self) -> Result<(), StorageError> {
        match OpenOptions::new().write(true).open(&self.path) {
            Ok(_) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::io(&self.path, err)),
        }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// [`LeadStore`] backed by a [`JsonArrayFile`] of [`LeadRecord`]s.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    file: JsonArrayFile<LeadRecord>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore {
            file: JsonArrayFile::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl LeadStore for JsonFileStore {
    fn load_all(&self) -> Result<Vec<LeadRecord>, StorageError> {
        self.file.read()
    }

    fn save_all(&mut self, leads: &[LeadRecord]) -> Result<(), StorageError> {
        self.file.write(leads)
    }

    fn describe(&self) -> String {
        format!("json file {}", self.file.path().display())
    }
}
