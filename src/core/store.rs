//! Purpose: Load a client dataset from a JSON file on disk.
//! Exports: `load`.
//! Role: Only filesystem touchpoint of the core; everything after the read is pure.
//! Invariants: Read-only; the store never writes or locks the data file.
//! Invariants: Callers see either a fully validated `Dataset` or an error, never a partial load.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::core::error::{Error, ErrorKind, Result};
use crate::core::record::Dataset;

pub fn load(path: impl AsRef<Path>) -> Result<Dataset> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::new(ErrorKind::FileNotFound)
            .with_message(format!("data file not found: {}", path.display()))
            .with_path(path)
            .with_hint("Pass an existing JSON file with --file, or set CLIENT_CLI_DATA."));
    }

    let bytes = fs::read(path).map_err(|err| read_error(path, err))?;
    let dataset = Dataset::from_json_slice(&bytes).map_err(|err| err.with_path(path))?;
    debug!(
        path = %path.display(),
        records = dataset.len(),
        "loaded dataset"
    );
    Ok(dataset)
}

fn read_error(path: &Path, err: io::Error) -> Error {
    let kind = match err.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => ErrorKind::FileNotFound,
        _ => ErrorKind::Io,
    };
    Error::new(kind)
        .with_message(format!("failed to read data file: {}", path.display()))
        .with_path(path)
        .with_source(err)
}
