// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Crate-level error type and process exit codes.
//!
//! The lookup path never produces an [`Error`]: a miss is `None`. Errors
//! come from the construction side (loading and verifying tables) and from
//! callers that treat a miss as fatal ([`SortedTable::require`]).
//!
//! [`SortedTable::require`]: crate::SortedTable::require

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::verify::InvariantError;

/// Errors raised while building, loading or querying lookup tables.
#[derive(Debug, Error)]
pub enum Error {
    /// A key that had to be present was not in the table.
    #[error("key not found")]
    NotFound,

    /// The table violates a construction invariant.
    #[error(transparent)]
    Invariant(#[from] InvariantError),

    /// A table file is not valid JSON or not a table.
    #[error("malformed table file: {0}")]
    Parse(#[from] serde_json::Error),

    /// A table file could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Stable short name of the error class.
    pub fn name(&self) -> &'static str {
        match self {
            Error::NotFound => "NotFound",
            Error::Invariant(InvariantError::TableTooLong { .. }) => "InvalidArgs",
            Error::Invariant(InvariantError::Unsorted { .. }) => "Failed",
            Error::Parse(_) => "Parse",
            Error::Io { .. } => "Failed",
        }
    }

    /// Process exit code a command-line front end reports for this error.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Error::NotFound => ExitCode::Failure,
            Error::Invariant(InvariantError::TableTooLong { .. }) => ExitCode::InvalidArguments,
            Error::Invariant(InvariantError::Unsorted { .. }) => ExitCode::InvalidState,
            Error::Parse(_) => ExitCode::InvalidArguments,
            Error::Io { .. } => ExitCode::ErrorErrno,
        }
    }
}

/// Exit codes reported by the `sortab` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    /// Generic failure, including a looked-up key being absent.
    Failure = 1,
    InvalidArguments = 2,
    /// A system call or library function failed.
    ErrorErrno = 5,
    /// The table is not in a usable state (unsorted).
    InvalidState = 7,
}

impl ExitCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ExitCode::Success => "Success",
            ExitCode::Failure => "Failure",
            ExitCode::InvalidArguments => "InvalidArgument",
            ExitCode::ErrorErrno => "ErrorNo",
            ExitCode::InvalidState => "InvalidState",
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code.code())
    }
}
