use thiserror::Error;

/// Errors raised while turning form input into a draft or patch.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("Please fill in all fields.")]
    MissingField(FormField),
    #[error("{field} is not a valid date: {value}")]
    InvalidDate { field: FormField, value: String },
}

/// A field of the add or edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Start,
    End,
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            FormField::Name => "Event name",
            FormField::Start => "Start date",
            FormField::End => "End date",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_failure_display() {
        assert_eq!(
            ValidationFailure::MissingField(FormField::Name).to_string(),
            "Please fill in all fields."
        );
        assert_eq!(
            ValidationFailure::InvalidDate {
                field: FormField::End,
                value: "tomorrow".to_string()
            }
            .to_string(),
            "End date is not a valid date: tomorrow"
        );
    }
}
