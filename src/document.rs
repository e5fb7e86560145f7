// SPDX-FileCopyrightText: 2026 har2doc contributors
//
// SPDX-License-Identifier: ISC

//! Canonical `Document` record and the pure builder that derives it from a
//! capture entry.

use chrono::{DateTime, FixedOffset, Local};
use http::{Method, StatusCode};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{Error, Result};
use crate::har::Entry;
use crate::masking::{apply_masking, MaskingRule};
use crate::{body, timestamps};

/// The normalized, masked record derived from one capture entry.
///
/// Immutable once built: rendering components derive display-only copies of
/// fields (e.g. the templated GET path) and never write back.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub request_datetime: DateTime<FixedOffset>,
    pub request_method: Method,
    pub request_url: String,
    pub request_host: String,
    pub request_path: String,
    pub request_query_string: QueryString,
    pub request_content_type: Option<String>,
    pub request_body: Option<String>,
    pub response_datetime: DateTime<FixedOffset>,
    pub response_status_code: StatusCode,
    pub response_content_type: Option<String>,
    pub response_body: Option<String>,
    pub time_elapsed: i64,
}

/// Ordered string-to-string mapping for query parameters.
///
/// Insertion order is preserved; inserting an existing key updates its value
/// in place (last value wins, original position kept).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString(Vec<(String, String)>);

impl QueryString {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: String, value: String) {
        if let Some(existing) = self.0.iter_mut().find(|(k, _)| *k == key) {
            existing.1 = value;
        } else {
            self.0.push((key, value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for QueryString {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut qs = Self::new();
        for (key, value) in iter {
            qs.insert(key, value);
        }
        qs
    }
}

impl Serialize for QueryString {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Environmental inputs of the builder, injected to keep it deterministic.
#[derive(Debug, Clone, Copy)]
pub struct BuildOptions {
    /// Offset both timestamps are normalized to.
    pub local_offset: FixedOffset,
    /// When set, a declared-JSON body that fails to parse passes through as
    /// raw text instead of aborting the entry.
    pub lenient_json: bool,
}

impl BuildOptions {
    /// Options using the process-local timezone, resolved once here rather
    /// than inside the builder.
    pub fn with_local_timezone() -> Self {
        Self {
            local_offset: *Local::now().offset(),
            lenient_json: false,
        }
    }
}

impl Document {
    /// Build a document from one capture entry. Pure: no I/O, fully
    /// deterministic given the entry, rules, and options.
    ///
    /// Propagates `Error::Parse` for unparseable timestamps, method, or
    /// status and `Error::MalformedBody` for invalid declared-JSON bodies
    /// (unless `lenient_json` is set).
    pub fn from_entry(
        entry: &Entry,
        masking_rules: &[MaskingRule],
        options: &BuildOptions,
    ) -> Result<Document> {
        let request = &entry.request;
        let response = &entry.response;

        let method = Method::from_bytes(request.method.as_bytes()).map_err(|e| Error::Parse {
            field: "method",
            value: request.method.clone(),
            message: e.to_string(),
        })?;
        let status = StatusCode::from_u16(response.status).map_err(|e| Error::Parse {
            field: "status",
            value: response.status.to_string(),
            message: e.to_string(),
        })?;

        let raw_host = request.host().unwrap_or_default();
        let raw_path = if raw_host.is_empty() {
            request.url.as_str()
        } else {
            // Path is whatever follows the first occurrence of the host in
            // the URL; the whole URL when the host does not occur in it.
            request
                .url
                .split_once(raw_host)
                .map(|(_, rest)| rest)
                .unwrap_or(request.url.as_str())
        };

        let response_date = response.date().unwrap_or_default();

        Ok(Document {
            request_datetime: timestamps::parse_capture_start(
                &entry.started_date_time,
                options.local_offset,
            )?,
            request_method: method,
            request_url: unquote_plus(&request.url),
            request_host: unquote_plus(raw_host),
            request_path: unquote_plus(raw_path),
            request_query_string: request
                .query_string
                .iter()
                .map(|pair| (pair.name.clone(), pair.value.clone()))
                .collect(),
            request_content_type: request.mime_type().map(str::to_string),
            request_body: prepare_body(
                request.text(),
                request.mime_type(),
                masking_rules,
                options,
            )?,
            response_datetime: timestamps::parse_response_date(
                response_date,
                options.local_offset,
            )?,
            response_status_code: status,
            response_content_type: response.mime_type().map(str::to_string),
            response_body: prepare_body(
                response.text(),
                response.mime_type(),
                masking_rules,
                options,
            )?,
            time_elapsed: entry.time.round() as i64,
        })
    }
}

/// Normalize then mask a body. Absent or empty source text yields `None`;
/// masking runs on the formatted text, never the raw one.
fn prepare_body(
    text: Option<&str>,
    content_type: Option<&str>,
    masking_rules: &[MaskingRule],
    options: &BuildOptions,
) -> Result<Option<String>> {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return Ok(None);
    };
    let formatted = if options.lenient_json {
        body::normalize_lenient(text, content_type)
    } else {
        body::normalize(text, content_type)?
    };
    Ok(Some(apply_masking(&formatted, masking_rules)))
}

/// Percent-decode a string, treating `+` as a space and replacing invalid
/// UTF-8 sequences rather than failing.
fn unquote_plus(value: &str) -> String {
    let spaced = value.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}
