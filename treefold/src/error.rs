//! Error types

use thiserror::Error;

/// Describes why an untyped value does not have the expected tree shape.
///
/// Every variant carries `at`, a JSON-pointer-style location of the
/// offending value (`""` for the value itself, `/root/children/1` for a
/// nested node).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// The value is not an object.
    #[error("expected an object at `{at}`")]
    NotAnObject { at: String },

    /// A required field is absent.
    #[error("missing field `{field}` at `{at}`")]
    MissingField { at: String, field: &'static str },

    /// A field is present but has the wrong type.
    #[error("field `{field}` at `{at}` must be {expected}")]
    WrongType {
        at: String,
        field: &'static str,
        expected: &'static str,
    },

    /// A leaf carries a `children` key.
    #[error("leaf at `{at}` must not have a `children` field")]
    UnexpectedChildren { at: String },

    /// An item's `type` tag is not one of the accepted values.
    #[error("unexpected item type `{found}` at `{at}`")]
    UnexpectedItemType { at: String, found: String },
}

impl ShapeError {
    /// Location of the offending value.
    pub fn at(&self) -> &str {
        match self {
            Self::NotAnObject { at }
            | Self::MissingField { at, .. }
            | Self::WrongType { at, .. }
            | Self::UnexpectedChildren { at }
            | Self::UnexpectedItemType { at, .. } => at,
        }
    }
}

/// Errors from converting untyped data into a [`Tree`](crate::Tree).
#[derive(Debug, Error)]
pub enum TreeError {
    /// The value failed shape validation.
    #[error("invalid tree shape: {0}")]
    Shape(#[from] ShapeError),

    /// The value passed validation but could not be deserialized.
    #[error("failed to decode tree: {0}")]
    Json(#[from] serde_json::Error),
}
