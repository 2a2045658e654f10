//! Explorer errors
//!
//! The engines themselves are infallible. Errors only arise when turning
//! loosely typed input (slider values, names, config files) into
//! parameters, and when sonifying a trajectory.

use thiserror::Error;

use crate::explorer::SystemKind;

/// Crate result type
pub type Result<T> = std::result::Result<T, Error>;

/// Crate errors
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid argument {name}: {reason}")]
    InvalidArgument { name: String, reason: String },

    #[error("{kind} expects {expected} parameter values, got {got}")]
    ArityMismatch {
        kind: SystemKind,
        expected: usize,
        got: usize,
    },

    #[error("unknown system: {0}")]
    UnknownSystem(String),

    #[error("{kind} has no parameter named {name}")]
    UnknownParameter { kind: SystemKind, name: String },

    #[error("no sound implementation for {0}")]
    UnsupportedSonification(SystemKind),

    #[error("cannot sonify non-finite sample at index {index}")]
    NonFiniteSample { index: usize },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
