// SPDX-FileCopyrightText: 2026 har2doc contributors
//
// SPDX-License-Identifier: ISC

//! Serde model of the HAR subset the document builder consumes.
//!
//! Only the fields the pipeline reads are modeled; everything else in the
//! capture file is ignored during deserialization.

use serde::Deserialize;
use std::path::Path;

/// Root of a HAR file.
#[derive(Debug, Clone, Deserialize)]
pub struct Har {
    pub log: Log,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Log {
    #[serde(default)]
    pub entries: Vec<Entry>,
}

/// One recorded request/response exchange.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub started_date_time: String,
    /// Total elapsed time in milliseconds. HAR records this as a float.
    #[serde(default)]
    pub time: f64,
    pub request: Request,
    pub response: Response,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub method: String,
    pub url: String,
    #[serde(default)]
    pub headers: Vec<NameValue>,
    #[serde(default)]
    pub query_string: Vec<NameValue>,
    #[serde(default)]
    pub post_data: Option<PostData>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status: u16,
    #[serde(default)]
    pub headers: Vec<NameValue>,
    #[serde(default)]
    pub content: Option<Content>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct NameValue {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostData {
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

fn header_value<'a>(headers: &'a [NameValue], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|h| h.name.eq_ignore_ascii_case(name))
        .map(|h| h.value.as_str())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

impl Request {
    pub fn header(&self, name: &str) -> Option<&str> {
        header_value(&self.headers, name)
    }

    /// Host of the request: the Host header when present, otherwise the
    /// authority component of an absolute-form URL.
    pub fn host(&self) -> Option<&str> {
        if let Some(host) = non_empty(self.header("host")) {
            return Some(host);
        }
        let marker = "://";
        let idx = self.url.find(marker)?;
        let after = &self.url[idx + marker.len()..];
        let end = after.find('/').unwrap_or(after.len());
        non_empty(Some(&after[..end]))
    }

    /// Declared request content type, from the posted data.
    pub fn mime_type(&self) -> Option<&str> {
        non_empty(self.post_data.as_ref().and_then(|p| p.mime_type.as_deref()))
    }

    /// Posted body text, if any.
    pub fn text(&self) -> Option<&str> {
        self.post_data.as_ref().and_then(|p| p.text.as_deref())
    }
}

impl Response {
    pub fn header(&self, name: &str) -> Option<&str> {
        header_value(&self.headers, name)
    }

    /// Value of the response Date header.
    pub fn date(&self) -> Option<&str> {
        self.header("date")
    }

    /// Declared response content type; an empty string counts as absent.
    pub fn mime_type(&self) -> Option<&str> {
        non_empty(self.content.as_ref().and_then(|c| c.mime_type.as_deref()))
    }

    /// Response body text, if any.
    pub fn text(&self) -> Option<&str> {
        self.content.as_ref().and_then(|c| c.text.as_deref())
    }
}

/// Load all entries from a HAR file.
///
/// The whole file is parsed in one pass; a malformed capture fails the load
/// rather than skipping entries.
pub fn load_entries<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Entry>> {
    let path_ref = path.as_ref();
    let text = std::fs::read_to_string(path_ref)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {}", path_ref.display(), e))?;
    let har: Har = serde_json::from_str(&text)
        .map_err(|e| anyhow::anyhow!("failed to parse {}: {}", path_ref.display(), e))?;
    Ok(har.log.entries)
}
