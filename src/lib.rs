// SPDX-FileCopyrightText: 2026 har2doc contributors
//
// SPDX-License-Identifier: ISC

//! HAR traffic captures to masked CSV and Markdown documents.
//!
//! This library provides the core conversion pipeline: loading HAR entries,
//! building normalized `Document` records (timestamp parsing, query-string
//! decomposition, body formatting, masking), and exporting them as CSV rows
//! or component-rendered Markdown.

pub mod body;
pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod har;
pub mod markdown;
pub mod masking;
pub mod timestamps;

#[cfg(test)]
pub(crate) mod test_helpers;
