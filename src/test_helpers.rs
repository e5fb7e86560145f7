// SPDX-FileCopyrightText: 2026 har2doc contributors
//
// SPDX-License-Identifier: ISC

//! Shared test utilities to reduce duplication across test modules.

use chrono::FixedOffset;
use http::{Method, StatusCode};

use crate::document::{BuildOptions, Document, QueryString};
use crate::har::Entry;

/// +09:00, the offset used throughout the fixtures.
pub fn test_offset() -> FixedOffset {
    FixedOffset::east_opt(9 * 3600).expect("valid test offset")
}

/// Build options pinned to [`test_offset`], strict JSON handling.
pub fn test_options() -> BuildOptions {
    BuildOptions {
        local_offset: test_offset(),
        lenient_json: false,
    }
}

/// A GET entry for `https://example.com/api/users/?page=1&size=10` with a
/// JSON 200 response.
pub fn make_test_entry() -> Entry {
    let entry = serde_json::json!({
        "startedDateTime": "2024-01-31T14:42:19.605+09:00",
        "time": 12.5,
        "request": {
            "method": "GET",
            "url": "https://example.com/api/users/?page=1&size=10",
            "headers": [{"name": "Host", "value": "example.com"}],
            "queryString": [
                {"name": "page", "value": "1"},
                {"name": "size", "value": "10"}
            ]
        },
        "response": {
            "status": 200,
            "headers": [{"name": "Date", "value": "Mon, 01 Nov 2021 07:00:00 GMT"}],
            "content": {"mimeType": "application/json", "text": "{\"name\":\"John\"}"}
        }
    });
    serde_json::from_value(entry).expect("valid test entry")
}

/// A minimal GET document for component tests; fields are meant to be
/// overridden per case.
pub fn make_test_document() -> Document {
    let offset = test_offset();
    Document {
        request_datetime: chrono::DateTime::parse_from_rfc3339("2024-01-31T14:42:19.605+09:00")
            .expect("valid fixture datetime")
            .with_timezone(&offset),
        request_method: Method::GET,
        request_url: "https://example.com/api/users/?page=1&size=10".to_string(),
        request_host: "example.com".to_string(),
        request_path: "/api/users/?page=1&size=10".to_string(),
        request_query_string: [
            ("page".to_string(), "1".to_string()),
            ("size".to_string(), "10".to_string()),
        ]
        .into_iter()
        .collect(),
        request_content_type: None,
        request_body: None,
        response_datetime: chrono::DateTime::parse_from_rfc3339("2021-11-01T16:00:00+09:00")
            .expect("valid fixture datetime")
            .with_timezone(&offset),
        response_status_code: StatusCode::OK,
        response_content_type: Some("application/json".to_string()),
        response_body: Some("{\n    \"name\": \"John\"\n}".to_string()),
        time_elapsed: 13,
    }
}

/// Like [`make_test_document`] but with an empty query string.
pub fn make_test_document_without_query() -> Document {
    let mut doc = make_test_document();
    doc.request_path = "/api/users/".to_string();
    doc.request_url = "https://example.com/api/users/".to_string();
    doc.request_query_string = QueryString::new();
    doc
}
