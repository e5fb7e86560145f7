// SPDX-FileCopyrightText: 2026 har2doc contributors
//
// SPDX-License-Identifier: ISC

//! Response body fence, always rendered, heading annotated with the status
//! code.

use crate::document::Document;

pub(crate) fn render(document: &Document) -> String {
    format!(
        "Response Body ({})\n\n```json\n{}\n```",
        document.response_status_code.as_u16(),
        document.response_body.as_deref().unwrap_or_default()
    )
}
