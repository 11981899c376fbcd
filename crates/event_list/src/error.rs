use event_list_core::events::ValidationFailure;
use thiserror::Error;

/// Errors raised by the renderer when a caller names a row it does not hold.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ViewError {
    #[error("No row with id {0}")]
    RowNotFound(String),
    #[error("Row {0} is not a form of the expected kind")]
    NotAForm(usize),
    #[error(transparent)]
    Validation(#[from] ValidationFailure),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_error_display() {
        assert_eq!(
            ViewError::RowNotFound("7".to_string()).to_string(),
            "No row with id 7"
        );
        assert_eq!(
            ViewError::NotAForm(3).to_string(),
            "Row 3 is not a form of the expected kind"
        );
    }
}
