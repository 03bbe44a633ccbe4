//! Error types for winpkg-core

/// Errors specific to winpkg-core
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Package definition field '{0}' must not be empty")]
    EmptyField(&'static str),

    #[error("Unknown installer type: {0}")]
    UnknownInstallerType(String),

    #[error("Invalid skip list: {0}")]
    InvalidSkipList(#[from] serde_json::Error),
}
