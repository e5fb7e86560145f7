// SPDX-FileCopyrightText: 2026 har2doc contributors
//
// SPDX-License-Identifier: ISC

use std::path::PathBuf;

use chrono::FixedOffset;
use har2doc::document::BuildOptions;

/// +09:00, matching the fixture timestamps.
pub fn fixture_options() -> BuildOptions {
    BuildOptions {
        local_offset: FixedOffset::east_opt(9 * 3600).expect("valid offset"),
        lenient_json: false,
    }
}

/// Write `har_json` to a uniquely named temp file and return its path.
pub fn write_temp_har(har_json: &str) -> anyhow::Result<PathBuf> {
    let tmp = std::env::temp_dir().join(format!("har2doc_e2e_{}.har", uuid::Uuid::new_v4()));
    std::fs::write(&tmp, har_json)?;
    Ok(tmp)
}

/// HAR file with one GET and one POST entry.
pub fn sample_har_json() -> String {
    serde_json::json!({
        "log": {
            "version": "1.2",
            "creator": {"name": "test", "version": "0"},
            "entries": [
                {
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
                },
                {
                    "startedDateTime": "2024-01-31T14:42:20.000+09:00",
                    "time": 4.0,
                    "request": {
                        "method": "POST",
                        "url": "https://example.com/api/users/",
                        "headers": [{"name": "Host", "value": "example.com"}],
                        "queryString": [],
                        "postData": {"mimeType": "application/json", "text": "{\"a\":1}"}
                    },
                    "response": {
                        "status": 204,
                        "headers": [{"name": "Date", "value": "Mon, 01 Nov 2021 07:00:01 GMT"}],
                        "content": {"mimeType": "", "text": ""}
                    }
                }
            ]
        }
    })
    .to_string()
}
