// src/error.rs
use std::{io, path::PathBuf};
use thiserror::Error;

/// A row did not unpack into the expected number of fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected {expected} fields, found {found}")]
pub struct UnpackMismatchError {
    pub expected: usize,
    pub found: usize,
}

/// Broad failure classes. Every `StreamError` falls into exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A data row had the wrong shape.
    InputShape,
    /// The source file could not be opened or read.
    Resource,
    /// Socket set-up or send failed.
    Transport,
    /// The configuration was invalid.
    Config,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InputShape => "input-shape",
            ErrorKind::Resource => "resource",
            ErrorKind::Transport => "transport",
            ErrorKind::Config => "config",
        }
    }
}

#[derive(Debug, Error)]
pub enum StreamError {
    #[error("failed to open {}: {}", .path.display(), .source)]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read record from {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{} has no header record", .path.display())]
    MissingHeader { path: PathBuf },

    #[error("malformed row on line {line}: {source}")]
    Malformed {
        line: u64,
        #[source]
        source: UnpackMismatchError,
    },

    #[error("failed to resolve {destination}: {source}")]
    Resolve {
        destination: String,
        #[source]
        source: io::Error,
    },

    #[error("{destination} resolved to no usable address")]
    NoAddress { destination: String },

    #[error("failed to create datagram socket: {0}")]
    Bind(#[source] io::Error),

    #[error("failed to send to {destination}: {source}")]
    Send {
        destination: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl StreamError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StreamError::Open { .. } | StreamError::Read { .. } | StreamError::MissingHeader { .. } => {
                ErrorKind::Resource
            }
            StreamError::Malformed { .. } => ErrorKind::InputShape,
            StreamError::Resolve { .. }
            | StreamError::NoAddress { .. }
            | StreamError::Bind(_)
            | StreamError::Send { .. } => ErrorKind::Transport,
            StreamError::Config(_) => ErrorKind::Config,
        }
    }
}

pub type Result<T> = std::result::Result<T, StreamError>;
