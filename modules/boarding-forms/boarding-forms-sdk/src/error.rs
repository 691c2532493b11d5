//! Error types for the boarding forms module.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Bucket, SectionKind};

/// Kind of record addressed by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityKind {
    Template,
    Platform,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Template => "template",
            Self::Platform => "platform",
        })
    }
}

/// A single offending input, addressed by its dotted form path
/// (e.g. `heading.title`, `support.email`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub path: String,
    pub message: String,
}

impl FieldViolation {
    #[must_use]
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Reason a logo upload was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogoRejection {
    #[error("unsupported image type '{mime_type}', only PNG or JPG files are accepted")]
    InvalidType { mime_type: String },

    #[error("image is {size} bytes, must be at most {max} bytes")]
    TooLarge { size: usize, max: usize },
}

/// Rejected edit of an approved-domain list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainListError {
    #[error("domain must not be empty")]
    Empty,

    #[error("domain '{0}' already exists in the list")]
    Duplicate(String),

    #[error("no domain at index {index} (list has {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors that can occur when using the boarding forms API.
#[derive(Debug, Error)]
pub enum BoardingFormsError {
    /// No record with the given id.
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    /// One or more inputs are missing or malformed.
    #[error("validation failed: {}", join_violations(.violations))]
    Validation { violations: Vec<FieldViolation> },

    /// The addressed field is not declared by the field schema.
    #[error("unknown field key: {section}.{bucket}.{key}")]
    UnknownFieldKey {
        section: SectionKind,
        bucket: Bucket,
        key: String,
    },

    /// The operation requires admin mode.
    #[error("admin mode required")]
    Forbidden,

    #[error("logo rejected: {0}")]
    InvalidLogo(#[from] LogoRejection),

    #[error("approved domains: {0}")]
    DomainList(#[from] DomainListError),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl BoardingFormsError {
    #[must_use]
    pub fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    #[must_use]
    pub fn validation(violations: Vec<FieldViolation>) -> Self {
        Self::Validation { violations }
    }

    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    #[must_use]
    pub const fn is_forbidden(&self) -> bool {
        matches!(self, Self::Forbidden)
    }

    /// Offending inputs, if this is a validation error.
    #[must_use]
    pub fn violations(&self) -> Option<&[FieldViolation]> {
        match self {
            Self::Validation { violations } => Some(violations),
            _ => None,
        }
    }
}
