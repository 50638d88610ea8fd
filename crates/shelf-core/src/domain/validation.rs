use crate::domain::{error::DomainError, value_objects::LibraryLimits};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_limits(limits: &LibraryLimits) -> Result<(), DomainError> {
        let fields = [
            ("max_books", limits.max_books()),
            ("max_borrowed", limits.max_borrowed()),
            ("max_patrons", limits.max_patrons()),
        ];

        match fields.into_iter().find(|(_, value)| *value == 0) {
            Some((field, _)) => Err(DomainError::InvalidLimits { field }),
            None => Ok(()),
        }
    }
}
