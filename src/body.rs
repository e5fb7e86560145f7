// SPDX-FileCopyrightText: 2026 har2doc contributors
//
// SPDX-License-Identifier: ISC

//! Content-type-dispatched body formatting.
//!
//! Formatters are looked up by exact content-type string; anything without a
//! registered formatter passes through unchanged. Today only
//! `application/json` has one: a pretty-printer with 4-space indentation
//! that leaves non-ASCII characters literal.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::Result;

type Formatter = fn(&str) -> Result<String>;

fn formatter_for(content_type: &str) -> Option<Formatter> {
    match content_type {
        "application/json" => Some(format_json_pretty),
        _ => None,
    }
}

/// Format `text` according to its declared content type.
///
/// Returns `Error::MalformedBody` when a declared-JSON body does not parse;
/// unknown or absent content types are identity.
pub fn normalize(text: &str, content_type: Option<&str>) -> Result<String> {
    match content_type.and_then(formatter_for) {
        Some(format) => format(text),
        None => Ok(text.to_string()),
    }
}

/// Like [`normalize`], but a body that fails its formatter degrades to the
/// raw text instead of erroring.
pub fn normalize_lenient(text: &str, content_type: Option<&str>) -> String {
    normalize(text, content_type).unwrap_or_else(|_| text.to_string())
}

fn format_json_pretty(text: &str) -> Result<String> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;
    // serde_json emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
