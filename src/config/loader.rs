// src/config/loader.rs

use std::fs;
use std::path::Path;

use crate::config::model::DagFile;
use crate::config::validate::validate_dag_file;
use crate::errors::Result;

/// Load a DAG description from a given path and return the raw `DagFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation (parent references, acyclicity). Use [`load_and_validate`]
/// for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<DagFile> {
    let contents = fs::read_to_string(path.as_ref())?;
    let file: DagFile = toml::from_str(&contents)?;
    Ok(file)
}

/// Load a DAG description from path and run validation.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks for:
///   - unknown parent references,
///   - self-parenting,
///   - cycles.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<DagFile> {
    let file = load_from_path(&path)?;
    validate_dag_file(&file)?;
    Ok(file)
}
