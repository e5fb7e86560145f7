// SPDX-FileCopyrightText: 2026 har2doc contributors
//
// SPDX-License-Identifier: ISC

//! Request body fence, skipped for GET requests.

use http::Method;

use crate::document::Document;

pub(crate) fn applies(document: &Document) -> bool {
    document.request_method != Method::GET
}

pub(crate) fn render(document: &Document) -> String {
    format!(
        "Request Body\n\n```json\n{}\n```",
        document.request_body.as_deref().unwrap_or_default()
    )
}
