//! Business outcomes of address book mutations.
//!
//! None of these are errors: duplicates and missing contacts are expected
//! results that the caller inspects.

use crate::domain::ValidationError;

/// Result of [`AddressBook::add`](super::AddressBook::add).
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The contact was appended.
    Added,
    /// A contact with the same first and last name already exists.
    Duplicate,
}

impl AddOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, Self::Added)
    }
}

/// Result of an edit.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The replacement now sits at `position`.
    Updated { position: usize },
    /// No contact matched.
    NotFound,
    /// The merged fields failed validation; the original is untouched.
    Invalid(ValidationError),
    /// The edit would rename the contact onto another contact's key.
    Duplicate,
}

impl EditOutcome {
    pub fn is_updated(&self) -> bool {
        matches!(self, Self::Updated { .. })
    }

    /// The validation error, if the edit was rejected for one.
    pub fn validation_error(&self) -> Option<&ValidationError> {
        match self {
            Self::Invalid(err) => Some(err),
            _ => None,
        }
    }
}

/// Result of a delete.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// This many contacts were removed (always at least one).
    Deleted(usize),
    /// No contact matched.
    NotFound,
}

impl DeleteOutcome {
    pub fn is_deleted(&self) -> bool {
        matches!(self, Self::Deleted(_))
    }

    /// Number of contacts removed.
    pub fn removed(&self) -> usize {
        match self {
            Self::Deleted(n) => *n,
            Self::NotFound => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_helpers() {
        assert!(AddOutcome::Added.is_added());
        assert!(!AddOutcome::Duplicate.is_added());

        assert!(EditOutcome::Updated { position: 0 }.is_updated());
        let invalid = EditOutcome::Invalid(ValidationError::InvalidZip("1".to_string()));
        assert!(!invalid.is_updated());
        assert!(invalid.validation_error().is_some());
        assert!(EditOutcome::NotFound.validation_error().is_none());

        assert_eq!(DeleteOutcome::Deleted(2).removed(), 2);
        assert_eq!(DeleteOutcome::NotFound.removed(), 0);
        assert!(!DeleteOutcome::NotFound.is_deleted());
    }
}
