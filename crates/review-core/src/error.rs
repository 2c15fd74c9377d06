//! Review error types.

use thiserror::Error;

/// Errors that can occur at the review crate's boundaries.
///
/// The presentation pipeline itself never fails; these cover reading the
/// content graph and driving a selection group with a label it doesn't own.
#[derive(Error, Debug)]
pub enum ReviewError {
    /// Input could not be deserialized.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// The input document has no review object.
    #[error("No review record found in input: {0}")]
    MissingReview(String),

    /// Selection group misuse.
    #[error(transparent)]
    Selection(#[from] SelectionError),
}

/// Errors raised by a tab strip or accordion group.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// The label is not part of the group's label set.
    #[error("Unknown selection label: {0}")]
    UnknownLabel(String),
}

impl From<serde_json::Error> for ReviewError {
    fn from(e: serde_json::Error) -> Self {
        ReviewError::SerializationError(e.to_string())
    }
}
