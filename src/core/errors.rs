use std::result::Result as StdResult;

use thiserror::Error;

use crate::domain::EntityId;

/// Unified error type for store operations.
///
/// Every failed mutation leaves its store untouched, so callers that discard
/// the error get a plain no-op. Callers that keep it can tell a rejected input
/// from a missing id.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("No entity with id `{0}`")]
    NotFound(EntityId),
}

pub type Result<T> = StdResult<T, StoreError>;

/// Fatal shell errors. Command failures never reach this type; they are
/// reported inline and the loop keeps running.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
}
