use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{AnalystError, Result};
use crate::source::ProductSource;

/// Serves saved API responses from `<dir>/<barcode>.json`.
#[derive(Debug, Clone)]
pub struct FixtureSource {
    dir: PathBuf,
}

impl FixtureSource {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn path_for(&self, barcode: &str) -> PathBuf {
        self.dir.join(format!("{}.json", barcode))
    }
}

/// Read one saved response document.
pub fn load_response<P: AsRef<Path>>(path: P) -> Result<Value> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

impl ProductSource for FixtureSource {
    fn fetch(&self, barcode: &str) -> Result<Value> {
        match load_response(self.path_for(barcode)) {
            Err(AnalystError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                Err(AnalystError::MissingProduct(barcode.to_string()))
            }
            other => other,
        }
    }
}
