//! Purpose: Resolve which JSON data file the CLI should load.
//! Exports: `DEFAULT_DATA_FILE`, `DATA_FILE_ENV`, `resolve_data_file`.
//! Role: Keep flag, environment, and default path precedence in one place.
//! Invariants: Precedence is `--file`, then `CLIENT_CLI_DATA`, then `data/clients.json`.
//! Invariants: Empty environment values are ignored.

use std::ffi::OsString;
use std::path::PathBuf;

pub(crate) const DEFAULT_DATA_FILE: &str = "data/clients.json";
pub(crate) const DATA_FILE_ENV: &str = "CLIENT_CLI_DATA";

pub(crate) fn resolve_data_file(flag: Option<PathBuf>) -> PathBuf {
    resolve_with_env(flag, std::env::var_os(DATA_FILE_ENV))
}

fn resolve_with_env(flag: Option<PathBuf>, env_value: Option<OsString>) -> PathBuf {
    if let Some(path) = flag {
        return path;
    }
    match env_value {
        Some(value) if !value.is_empty() => PathBuf::from(value),
        _ => PathBuf::from(DEFAULT_DATA_FILE),
    }
}
