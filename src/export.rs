// SPDX-FileCopyrightText: 2026 har2doc contributors
//
// SPDX-License-Identifier: ISC

//! Flat CSV export of documents, plus the one-shot file writes.
//!
//! Every field is quoted; embedded quotes and backslashes are
//! backslash-escaped. Row order equals input order.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::document::Document;
use crate::error::Result;

/// All `Document` fields in declaration order; the default CSV header.
pub const DOCUMENT_COLUMNS: &[&str] = &[
    "request_datetime",
    "request_method",
    "request_url",
    "request_host",
    "request_path",
    "request_query_string",
    "request_content_type",
    "request_body",
    "response_datetime",
    "response_status_code",
    "response_content_type",
    "response_body",
    "time_elapsed",
];

/// Canonical textual form of one document field. Unknown column names map
/// to empty text so that `to_csv` stays total over caller-given columns.
fn column_value(document: &Document, column: &str) -> String {
    match column {
        "request_datetime" => document.request_datetime.to_rfc3339(),
        "request_method" => document.request_method.to_string(),
        "request_url" => document.request_url.clone(),
        "request_host" => document.request_host.clone(),
        "request_path" => document.request_path.clone(),
        "request_query_string" => {
            serde_json::to_string(&document.request_query_string).unwrap_or_default()
        }
        "request_content_type" => document.request_content_type.clone().unwrap_or_default(),
        "request_body" => document.request_body.clone().unwrap_or_default(),
        "response_datetime" => document.response_datetime.to_rfc3339(),
        "response_status_code" => document.response_status_code.as_u16().to_string(),
        "response_content_type" => document.response_content_type.clone().unwrap_or_default(),
        "response_body" => document.response_body.clone().unwrap_or_default(),
        "time_elapsed" => document.time_elapsed.to_string(),
        _ => String::new(),
    }
}

fn quote_field(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

/// Render documents as CSV text: one header row in the caller-given column
/// order, then one row per document.
pub fn to_csv(documents: &[Document], columns: &[&str]) -> String {
    let mut csv = String::new();
    let header: Vec<String> = columns.iter().map(|c| quote_field(c)).collect();
    csv.push_str(&header.join(","));
    csv.push('\n');

    for document in documents {
        let row: Vec<String> = columns
            .iter()
            .map(|c| quote_field(&column_value(document, c)))
            .collect();
        csv.push_str(&row.join(","));
        csv.push('\n');
    }

    csv
}

/// Write the CSV export to `path`.
pub fn write_csv<P: AsRef<Path>>(
    documents: &[Document],
    path: P,
    columns: &[&str],
) -> Result<()> {
    write_text(path, &to_csv(documents, columns))
}

/// Write rendered Markdown to `path`.
pub fn write_markdown<P: AsRef<Path>>(markdown: &str, path: P) -> Result<()> {
    write_text(path, markdown)
}

fn write_text<P: AsRef<Path>>(path: P, text: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(text.as_bytes())?;
    file.flush()?;
    Ok(())
}
