//! Named key-value preference stores.
//!
//! A store is a flat JSON object on disk (`<config dir>/<name>.json`).
//! Reads happen once when the store is opened; every write is flushed
//! synchronously with a temp-file-and-rename so a crash never leaves a
//! half-written file behind. A file that exists but cannot be read is never
//! overwritten: the store stays usable in memory and refuses to flush.

use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::{debug, warn};

use super::error::{AppError, Result};
use crate::app::domain::settings::AppSettings;

/// Synchronous string-keyed boolean store.
pub trait PreferenceStore {
    /// Read `key`, returning `default` when it was never written.
    fn get_bool(&self, key: &str, default: bool) -> bool;

    /// Write `key` and persist it before returning.
    fn put_bool(&mut self, key: &str, value: bool) -> Result<()>;
}

/// File-backed store holding a JSON object of preferences.
#[derive(Debug)]
pub struct JsonPreferenceStore {
    path: PathBuf,
    values: Map<String, Value>,
    /// False when an existing file could not be read
    writable: bool,
}

impl JsonPreferenceStore {
    /// Open the store called `name` inside the FerrisTip config directory.
    pub fn open_named(name: &str) -> Self {
        Self::open(AppSettings::config_dir().join(format!("{}.json", name)))
    }

    /// Open a store at an explicit path. A missing or corrupt file yields an
    /// empty store; an unreadable one yields an empty read-only store.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut writable = true;
        let values = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<Map<String, Value>>(&contents) {
                Ok(values) => values,
                Err(e) => {
                    warn!("Ignoring corrupt preference file {}: {}", path.display(), e);
                    Map::new()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => Map::new(),
            Err(e) => {
                warn!(
                    "Cannot read preference file {}: {}. Changes will not be saved.",
                    path.display(),
                    e
                );
                writable = false;
                Map::new()
            }
        };
        Self {
            path,
            values,
            writable,
        }
    }

    fn flush(&self) -> Result<()> {
        if !self.writable {
            return Err(AppError::Preferences(format!(
                "{} could not be read, refusing to overwrite it",
                self.path.display()
            )));
        }
        let parent = self
            .path
            .parent()
            .ok_or_else(|| AppError::Preferences(format!("no parent directory for {}", self.path.display())))?;
        fs::create_dir_all(parent)?;

        let tmp = self.path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(&self.values)?;
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn get_bool(&self, key: &str, default: bool) -> bool {
        self.values.get(key).and_then(Value::as_bool).unwrap_or(default)
    }

    fn put_bool(&mut self, key: &str, value: bool) -> Result<()> {
        self.values.insert(key.to_string(), Value::Bool(value));
        self.flush()?;
        debug!("Wrote preference {}={} to {}", key, value, self.path.display());
        Ok(())
    }
}

/// Volatile store used by tests and headless runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, bool>,
    writes: usize,
    fail_writes: bool,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Number of successful writes so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get_bool(&self, key: &str, default: bool) -> bool {
        self.values.get(key).copied().unwrap_or(default)
    }

    fn put_bool(&mut self, key: &str, value: bool) -> Result<()> {
        if self.fail_writes {
            return Err(AppError::Preferences(format!("write of {} rejected", key)));
        }
        self.values.insert(key.to_string(), value);
        self.writes += 1;
        Ok(())
    }
}
