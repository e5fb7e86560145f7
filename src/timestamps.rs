// SPDX-FileCopyrightText: 2026 har2doc contributors
//
// SPDX-License-Identifier: ISC

//! Parsers for the two timestamp formats found in a capture entry.
//!
//! The capture-start field carries an ISO-8601 datetime with a numeric UTC
//! offset; the response Date header carries an HTTP-date (IMF-fixdate)
//! always suffixed with GMT. Both are normalized to the caller-supplied
//! local offset so that building a document never reads process-wide
//! timezone state.

use chrono::{DateTime, FixedOffset, Utc};

use crate::error::{Error, Result};

/// Format of the HAR `startedDateTime` field, e.g. `2024-01-31T14:42:19.605+09:00`.
const CAPTURE_START_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%:z";

/// Parse a capture-start timestamp and convert it to `local_offset`.
pub fn parse_capture_start(
    value: &str,
    local_offset: FixedOffset,
) -> Result<DateTime<FixedOffset>> {
    let parsed = DateTime::parse_from_str(value, CAPTURE_START_FORMAT).map_err(|e| {
        Error::Parse {
            field: "startedDateTime",
            value: value.to_string(),
            message: e.to_string(),
        }
    })?;
    Ok(parsed.with_timezone(&local_offset))
}

/// Parse a response Date header (e.g. `Mon, 01 Nov 2021 07:00:00 GMT`),
/// interpreted as UTC and converted to `local_offset`.
pub fn parse_response_date(
    value: &str,
    local_offset: FixedOffset,
) -> Result<DateTime<FixedOffset>> {
    let st = httpdate::parse_http_date(value).map_err(|e| Error::Parse {
        field: "response date",
        value: value.to_string(),
        message: e.to_string(),
    })?;
    Ok(DateTime::<Utc>::from(st).with_timezone(&local_offset))
}
