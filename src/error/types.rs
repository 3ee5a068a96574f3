use std::fmt;

use thiserror::Error;

use crate::grid::GridError;
use crate::logging::LoggingError;
use crate::wrap::WrapError;

/// Unified result type for the crate.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Layout axis named in sizing errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Width => f.write_str("width"),
            Axis::Height => f.write_str("height"),
        }
    }
}

/// Errors surfaced while building, rendering or presenting a view tree.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("{kind} view requires exactly one child, found {found}")]
    ChildCount { kind: &'static str, found: usize },
    #[error("{kind} view has no content")]
    MissingContent { kind: &'static str },
    #[error("{kind} view fills its {axis} but has no parent to query")]
    FillWithoutParent { kind: &'static str, axis: Axis },
    #[error("{kind} view fills its {axis} but no ancestor resolves it")]
    UnresolvedFill { kind: &'static str, axis: Axis },
    #[error("grid error: {0}")]
    Grid(#[from] GridError),
    #[error("wrap error: {0}")]
    Wrap(#[from] WrapError),
    #[error("logging error: {0}")]
    Logging(#[from] LoggingError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl LayoutError {
    /// Whether the error comes from a malformed view tree rather than from a
    /// capacity check or the output side.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            LayoutError::ChildCount { .. }
                | LayoutError::MissingContent { .. }
                | LayoutError::FillWithoutParent { .. }
                | LayoutError::UnresolvedFill { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_errors_are_classified() {
        let err = LayoutError::FillWithoutParent {
            kind: "text",
            axis: Axis::Width,
        };
        assert!(err.is_configuration());
        assert_eq!(
            err.to_string(),
            "text view fills its width but has no parent to query"
        );
        assert!(!LayoutError::Wrap(WrapError::ZeroWidth).is_configuration());
    }
}
