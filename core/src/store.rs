//! JSON persistence layer.
//!
//! RULE: Only store.rs touches the file system.
//! Every load reads the whole document; every save rewrites it in full.
//! Concurrent writers to the same path are the caller's problem.

use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::{
    codec::{decode_data, encode_data},
    error::{DecodeResult, StoreError, StoreResult},
    game::BadCookerData,
};

/// Label used for I/O errors on anonymous readers and writers.
const STREAM: &str = "<stream>";

pub fn parse_document(text: &str) -> DecodeResult<BadCookerData> {
    let doc: serde_json::Value = serde_json::from_str(text)?;
    decode_data(&doc)
}

pub fn render_document(data: &BadCookerData) -> StoreResult<String> {
    serde_json::to_string(&encode_data(data)).map_err(StoreError::Encode)
}

pub fn read_from<R: Read>(mut reader: R) -> StoreResult<BadCookerData> {
    let mut text = String::new();
    reader.read_to_string(&mut text).map_err(|e| io_error(STREAM, e))?;
    Ok(parse_document(&text)?)
}

pub fn write_to<W: Write>(mut writer: W, data: &BadCookerData) -> StoreResult<()> {
    let text = render_document(data)?;
    writer.write_all(text.as_bytes()).map_err(|e| io_error(STREAM, e))?;
    writer.flush().map_err(|e| io_error(STREAM, e))
}

/// A database file holding one `BadCookerData` document.
#[derive(Debug, Clone)]
pub struct GameStore {
    path: PathBuf,
}

impl GameStore {
    /// Does not touch the file; it is read on `load` and written on `save`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> StoreResult<BadCookerData> {
        let text = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let data = parse_document(&text).inspect_err(|e| {
            log::warn!("store: failed to decode {}: {e}", self.path.display());
        })?;
        log::debug!("store: loaded {} games from {}", data.len(), self.path.display());
        Ok(data)
    }

    /// Like `load`, but a missing file is an empty collection.
    pub fn load_or_default(&self) -> StoreResult<BadCookerData> {
        if !self.path.exists() {
            log::info!("store: {} does not exist yet, starting empty", self.path.display());
            return Ok(BadCookerData::default());
        }
        self.load()
    }

    /// Overwrites the file with the full document.
    pub fn save(&self, data: &BadCookerData) -> StoreResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let created = !self.path.exists();
        let text = render_document(data)?;
        fs::write(&self.path, text).map_err(|e| self.io_error(e))?;

        if created {
            log::info!("store: created {}", self.path.display());
        }
        log::debug!("store: saved {} games to {}", data.len(), self.path.display());
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        io_error(&self.path.display().to_string(), source)
    }
}

fn io_error(path: &str, source: std::io::Error) -> StoreError {
    StoreError::Io { path: path.to_string(), source }
}
