// SPDX-FileCopyrightText: 2026 har2doc contributors
//
// SPDX-License-Identifier: ISC

//! Error taxonomy for the conversion core.

use thiserror::Error;

/// Errors surfaced by document building and export.
///
/// The core performs no logging, retry, or partial-result recovery; every
/// variant propagates to the immediate caller, and batch-level policy (skip
/// a bad entry, abort the run) belongs to the orchestrating layer.
#[derive(Error, Debug)]
pub enum Error {
    /// An entry field does not match its expected textual pattern. Covers
    /// the two timestamp formats plus the method and status tokens.
    #[error("failed to parse {field} {value:?}: {message}")]
    Parse {
        field: &'static str,
        value: String,
        message: String,
    },

    /// A body declared as `application/json` is not valid JSON.
    #[error("malformed JSON body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// Export file write failure. No partial-file cleanup is attempted.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
