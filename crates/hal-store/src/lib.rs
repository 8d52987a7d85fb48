//! A small keyed store holding the persisted parts of a brain.
//!
//! Every entry is a bincode-encoded value under a string key. The whole map
//! is read when the store is opened and written back by [`Store::flush`],
//! which replaces the file atomically: a crash mid-write leaves the previous
//! brain intact.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::debug;

/// Format tag written under [`API_KEY`].
pub const API_VERSION: &str = "1.0";

pub const API_KEY: &str = "api";
pub const ORDER_KEY: &str = "order";
pub const DICTIONARY_KEY: &str = "dictionary";
pub const FORWARD_KEY: &str = "forward";
pub const BACKWARD_KEY: &str = "backward";
pub const BANWORDS_KEY: &str = "banwords";
pub const AUXWORDS_KEY: &str = "auxwords";
pub const SWAPWORDS_KEY: &str = "swapwords";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store i/o failed: {0}")]
    Io(#[from] io::Error),

    #[error("store encoding failed: {0}")]
    Codec(#[from] bincode::Error),

    #[error("incompatible brain format: stored {stored:?}, expected {expected:?}")]
    IncompatibleApi { stored: String, expected: String },

    #[error("brain was created with order {stored}, cannot open with order {requested}")]
    OrderMismatch { stored: u8, requested: u8 },

    #[error("stored {key} is inconsistent")]
    Corrupt { key: String },
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Named, individually encoded values backed by at most one file.
#[derive(Debug, Default)]
pub struct Store {
    path: Option<PathBuf>,
    entries: BTreeMap<String, Vec<u8>>,
}

impl Store {
    /// Open the store at `path`, starting empty if the file does not exist.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = match File::open(&path) {
            Ok(file) => bincode::deserialize_from(BufReader::new(file))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        debug!(path = %path.display(), entries = entries.len(), "store opened");
        Ok(Self {
            path: Some(path),
            entries,
        })
    }

    /// A store that lives only as long as the value; flushing does nothing.
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Decode the value under `key`, if any.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        self.entries
            .get(key)
            .map(|bytes| bincode::deserialize(bytes).map_err(StoreError::from))
            .transpose()
    }

    /// Like [`Store::get`], but a decoded value that fails `valid` is
    /// reported as [`StoreError::Corrupt`] instead of being returned.
    pub fn get_checked<T, F>(&self, key: &str, valid: F) -> Result<Option<T>>
    where
        T: DeserializeOwned,
        F: FnOnce(&T) -> bool,
    {
        let value = self.get(key)?;
        if let Some(v) = &value
            && !valid(v)
        {
            return Err(StoreError::Corrupt {
                key: key.to_owned(),
            });
        }
        Ok(value)
    }

    /// Encode `value` under `key`, replacing any previous value.
    pub fn put<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<()> {
        let bytes = bincode::serialize(value)?;
        self.entries.insert(key.to_owned(), bytes);
        Ok(())
    }

    /// Return the stored value, or store and return `default()` when absent.
    pub fn get_or_insert_with<T, F>(&mut self, key: &str, default: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> T,
    {
        if let Some(value) = self.get(key)? {
            return Ok(value);
        }
        let value = default();
        self.put(key, &value)?;
        Ok(value)
    }

    /// Tag a new store with the format version and `order`, or verify the
    /// tags of an existing one.
    pub fn check_header(&mut self, order: u8) -> Result<()> {
        let stored: String = self.get_or_insert_with(API_KEY, || API_VERSION.to_owned())?;
        if stored != API_VERSION {
            return Err(StoreError::IncompatibleApi {
                stored,
                expected: API_VERSION.to_owned(),
            });
        }
        let stored: u8 = self.get_or_insert_with(ORDER_KEY, || order)?;
        if stored != order {
            return Err(StoreError::OrderMismatch {
                stored,
                requested: order,
            });
        }
        Ok(())
    }

    /// Write every entry to the backing file, replacing it atomically.
    pub fn flush(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let parent = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        let tmp = NamedTempFile::new_in(parent)?;
        let mut writer = BufWriter::new(&tmp);
        bincode::serialize_into(&mut writer, &self.entries)?;
        writer.flush()?;
        drop(writer);
        tmp.persist(path).map_err(|e| e.error)?;

        debug!(path = %path.display(), entries = self.entries.len(), "store flushed");
        Ok(())
    }
}
