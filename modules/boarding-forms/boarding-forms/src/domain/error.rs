//! Domain error types for the boarding forms module.

use boarding_forms_sdk::{
    BoardingFormsError, Bucket, DomainListError, EntityKind, FieldViolation, LogoRejection,
    SectionKind,
};
use thiserror::Error;

/// Domain-level errors for the boarding forms module.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    #[error("Validation failed with {} violations", .0.len())]
    Validation(Vec<FieldViolation>),

    #[error("Unknown field key: {section}.{bucket}.{key}")]
    UnknownFieldKey {
        section: SectionKind,
        bucket: Bucket,
        key: String,
    },

    #[error("Admin mode required")]
    Forbidden,

    #[error("Logo rejected: {0}")]
    InvalidLogo(#[from] LogoRejection),

    #[error("Approved domains: {0}")]
    DomainList(#[from] DomainListError),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl DomainError {
    #[must_use]
    pub fn template_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            kind: EntityKind::Template,
            id: id.into(),
        }
    }

    #[must_use]
    pub fn platform_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            kind: EntityKind::Platform,
            id: id.into(),
        }
    }

    #[must_use]
    pub fn unknown_field_key(section: SectionKind, bucket: Bucket, key: impl Into<String>) -> Self {
        Self::UnknownFieldKey {
            section,
            bucket,
            key: key.into(),
        }
    }

    /// Single-violation validation error.
    #[must_use]
    pub fn invalid(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation(vec![FieldViolation::new(path, message)])
    }
}

impl From<DomainError> for BoardingFormsError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound { kind, id } => BoardingFormsError::not_found(kind, id),
            DomainError::Validation(violations) => BoardingFormsError::validation(violations),
            DomainError::UnknownFieldKey {
                section,
                bucket,
                key,
            } => BoardingFormsError::UnknownFieldKey {
                section,
                bucket,
                key,
            },
            DomainError::Forbidden => BoardingFormsError::Forbidden,
            DomainError::InvalidLogo(rejection) => BoardingFormsError::InvalidLogo(rejection),
            DomainError::DomainList(err) => BoardingFormsError::DomainList(err),
            DomainError::Internal(e) => BoardingFormsError::internal(e.to_string()),
        }
    }
}
