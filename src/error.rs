//! Error types for the field and the command line front end.

use crate::field::Point;
use thiserror::Error;

/// Result alias for field operations.
pub type Result<T> = std::result::Result<T, FieldError>;

/// The ways a coordinate or dimension can fall outside the land matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryViolation {
    /// The requested field had a non-positive dimension.
    Dimensions {
        /// Requested width.
        width: i32,
        /// Requested height.
        height: i32,
    },
    /// A corner lies outside `[0, width) x [0, height)`.
    OutOfField {
        /// The offending corner.
        point: Point,
        /// Field width.
        width: usize,
        /// Field height.
        height: usize,
    },
}

impl std::fmt::Display for BoundaryViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dimensions { width, height } => write!(
                f,
                "length and width must be greater than 0 (got {width} x {height})"
            ),
            Self::OutOfField {
                point,
                width,
                height,
            } => write!(
                f,
                "barren land coordinates must be in land matrix ({point} not in {width} x {height})"
            ),
        }
    }
}

/// Errors raised by [`Field`](crate::Field).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// A dimension or coordinate is outside the permitted range.
    #[error("invalid boundary: {reason}")]
    InvalidBoundary {
        /// What was out of range.
        reason: BoundaryViolation,
    },
}

impl From<BoundaryViolation> for FieldError {
    fn from(reason: BoundaryViolation) -> Self {
        Self::InvalidBoundary { reason }
    }
}

/// Problems with a line typed at the prompt. These never reach the field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The line did not contain exactly four tokens.
    #[error("Valid input is 4 integers. You entered {0} token(s). Please try again.")]
    TokenCount(usize),

    /// A token could not be parsed as an integer.
    #[error("At least one of your inputs was not an integer. Valid input is 4 integers.")]
    NotAnInteger(String),

    /// The first corner is above or to the right of the second.
    #[error(
        "Your bottom corner is either above or to the right of your top corner.\n\
         The first 2 coordinates should represent the bottom left corner. \
         The second 2 coordinates should represent the top right corner."
    )]
    InvertedCorners {
        /// First corner as typed.
        bottom: Point,
        /// Second corner as typed.
        top: Point,
    },
}

/// Errors that end an interactive session.
#[derive(Error, Debug)]
pub enum CliError {
    /// Reading input or writing output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The configured field could not be built.
    #[error(transparent)]
    Field(#[from] FieldError),
}
