// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for wrm-core operations.

use thiserror::Error;
use uuid::Uuid;

use wrm_remote::TransportFault;

/// All possible errors that can occur in wrm-core operations.
///
/// Manager methods wrap every remote-layer fault at their own boundary into
/// [`Error::Transport`], tagged with the operation that was in flight;
/// callers never see a raw [`TransportFault`]. There is no retry and no
/// silent recovery anywhere in this crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error("error while {operation}: {message}")]
    Transport {
        operation: &'static str,
        message: String,
    },

    #[error("there are more than one web resource with name '{0}'")]
    AmbiguousName(String),

    #[error("web resource not found: {0}")]
    NotFound(Uuid),

    #[error("unknown web resource type code: {0}")]
    UnknownTypeCode(i32),

    #[error("invalid web resource type: '{0}'\n  hint: valid types are: html, css, script, data, png, jpg, gif, xap, xsl, ico, svg, resx")]
    InvalidType(String),

    #[error("invalid content: {0}")]
    InvalidContent(String),

    #[error("options error: {0}")]
    Options(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Wraps a transport fault with the name of the failed operation.
    pub(crate) fn transport(operation: &'static str, fault: TransportFault) -> Self {
        Error::Transport {
            operation,
            message: fault.message,
        }
    }

    /// Reports an `execute` reply whose variant does not match the request.
    pub(crate) fn unexpected_response(operation: &'static str) -> Self {
        Error::Transport {
            operation,
            message: "unexpected response from remote service".to_string(),
        }
    }
}

/// A specialized Result type for wrm-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
