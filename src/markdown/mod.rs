// SPDX-FileCopyrightText: 2026 har2doc contributors
//
// SPDX-License-Identifier: ISC

//! Component-based Markdown rendering.
//!
//! Each component kind owns an applicability condition and a render function
//! over one document. The engine evaluates kinds in the caller-supplied
//! order, skips inapplicable ones without emitting a placeholder, and joins
//! the rendered blocks with exactly one blank line. Components are stateless
//! and never mutate the document they render.

use crate::document::Document;

pub mod endpoint;
pub mod query_parameter;
pub mod request_body;
pub mod request_header;
pub mod response_body;

/// The closed set of renderable section kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Endpoint,
    QueryParameter,
    RequestHeader,
    RequestBody,
    ResponseBody,
}

impl ComponentKind {
    /// Whether this section applies to `document`.
    pub fn applies(self, document: &Document) -> bool {
        match self {
            ComponentKind::Endpoint | ComponentKind::ResponseBody => true,
            ComponentKind::QueryParameter => query_parameter::applies(document),
            ComponentKind::RequestHeader => request_header::applies(document),
            ComponentKind::RequestBody => request_body::applies(document),
        }
    }

    /// Render this section for `document`. Callers are expected to check
    /// [`applies`](Self::applies) first.
    pub fn render(self, document: &Document) -> String {
        match self {
            ComponentKind::Endpoint => endpoint::render(document),
            ComponentKind::QueryParameter => query_parameter::render(document),
            ComponentKind::RequestHeader => request_header::render(document),
            ComponentKind::RequestBody => request_body::render(document),
            ComponentKind::ResponseBody => response_body::render(document),
        }
    }
}

/// The standard section order.
pub const DEFAULT_COMPONENTS: &[ComponentKind] = &[
    ComponentKind::Endpoint,
    ComponentKind::QueryParameter,
    ComponentKind::RequestHeader,
    ComponentKind::RequestBody,
    ComponentKind::ResponseBody,
];

/// Render one document: applicable components in order, blank-line joined.
pub fn render_document(document: &Document, components: &[ComponentKind]) -> String {
    let blocks: Vec<String> = components
        .iter()
        .filter(|kind| kind.applies(document))
        .map(|kind| kind.render(document))
        .collect();
    blocks.join("\n\n")
}

/// Render a batch of documents in input order, blank-line joined.
pub fn render_documents(documents: &[Document], components: &[ComponentKind]) -> String {
    documents
        .iter()
        .map(|document| render_document(document, components))
        .collect::<Vec<_>>()
        .join("\n\n")
}
