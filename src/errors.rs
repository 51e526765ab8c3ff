// src/errors.rs

//! Crate-wide error type and `Result` alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DagplotError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("node '{0}' has no entry in the parent mapping")]
    MissingParentEntry(String),

    #[error("unknown parent '{parent}' referenced by node '{child}'")]
    UnknownParent { parent: String, child: String },

    #[error("unknown node: {0}")]
    UnknownNode(String),

    #[error("Cycle detected in DAG: {0}")]
    DagCycle(String),

    #[error("Graphviz rendering failed: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, DagplotError>;
