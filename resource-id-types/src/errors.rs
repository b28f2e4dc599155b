// Resource ID tooling
// SPDX-License-Identifier: MPL-2.0

//! Errors produced while tokenizing resource IDs.

use thiserror::Error;

/// Failure to tokenize or consume an Azure resource ID.
///
/// Callers are expected to treat every variant the same way: the ID did not
/// match. The variants exist to give a useful message.
#[allow(missing_docs)]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResourceIdError {
    #[error("Cannot parse Azure ID: {0:?} is not an absolute path")]
    NotAbsolute(String),
    #[error("The number of path segments is not divisible by 2 in {0:?}")]
    OddSegmentCount(String),
    #[error("Key/Value cannot be empty strings. Key: '{key}', Value: '{value}'")]
    EmptySegment { key: String, value: String },
    #[error("No subscription ID found in: {0:?}")]
    MissingSubscription(String),
    #[error("ID was missing the `{0}` element")]
    MissingSegment(String),
    #[error("ID contained more segments than required: {source_id:?}, {remaining}")]
    UnexpectedSegments { source_id: String, remaining: String },
}
