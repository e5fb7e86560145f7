// SPDX-FileCopyrightText: 2026 har2doc contributors
//
// SPDX-License-Identifier: ISC

//! Query parameter listing, one bullet per mapping entry.

use crate::document::Document;

pub(crate) fn applies(document: &Document) -> bool {
    !document.request_query_string.is_empty()
}

pub(crate) fn render(document: &Document) -> String {
    let bullets: Vec<String> = document
        .request_query_string
        .iter()
        .map(|(key, value)| format!("- `{}`: `{}`", key, value))
        .collect();
    format!("Query Parameter\n\n{}", bullets.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{make_test_document, make_test_document_without_query};

    #[test]
    fn one_bullet_per_key_in_insertion_order() {
        let doc = make_test_document();
        assert_eq!(
            render(&doc),
            "Query Parameter\n\n- `page`: `1`\n- `size`: `10`"
        );
    }

    #[test]
    fn skipped_when_query_is_empty() {
        assert!(!applies(&make_test_document_without_query()));
        assert!(applies(&make_test_document()));
    }
}
