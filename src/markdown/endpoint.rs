// SPDX-FileCopyrightText: 2026 har2doc contributors
//
// SPDX-License-Identifier: ISC

//! Endpoint heading, e.g. `### GET \`/api/users/?page={page}&size={size}\``.

use http::Method;

use crate::document::Document;

pub(crate) fn render(document: &Document) -> String {
    format!("### {} `{}`", document.request_method, display_path(document))
}

/// Display copy of the path. For GET requests every `key=value` pair from
/// the query mapping is replaced with `key={key}`; the replacement is a
/// global substring one, so a value recurring elsewhere in the path is also
/// rewritten. The stored document path is never touched.
fn display_path(document: &Document) -> String {
    let mut path = document.request_path.clone();
    if document.request_method == Method::GET {
        for (key, value) in document.request_query_string.iter() {
            path = path.replace(
                &format!("{}={}", key, value),
                &format!("{}={{{}}}", key, key),
            );
        }
    }
    path
}
