// SPDX-FileCopyrightText: 2026 har2doc contributors
//
// SPDX-License-Identifier: ISC

//! Request content-type header section.
//!
//! Suppressed for `application/json` since the request-body fence already
//! declares json.

use crate::document::Document;

pub(crate) fn applies(document: &Document) -> bool {
    matches!(
        document.request_content_type.as_deref(),
        Some(ct) if ct != "application/json"
    )
}

pub(crate) fn render(document: &Document) -> String {
    format!(
        "Request Header\n\n- Content-Type: `{}`",
        document.request_content_type.as_deref().unwrap_or_default()
    )
}
