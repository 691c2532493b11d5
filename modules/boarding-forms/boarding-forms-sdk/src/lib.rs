//! Boarding Forms SDK
//!
//! This crate provides the public API for the `boarding-forms` module:
//! - `BoardingFormsApi` trait for consumers (UI shells, CLI, other modules)
//! - Template, custom form field, preset and platform models
//! - `BoardingFormsError` for error handling
//!
//! ## Usage
//!
//! ```ignore
//! use boarding_forms_sdk::{BoardingFormsApi, SessionContext};
//!
//! let ctx = SessionContext::admin();
//! let mut template = client.new_template(&ctx).await?;
//! let outcome = client.apply_preset(&ctx, &mut template, Some("stripe_connect")).await?;
//! let saved = client.save_template(&ctx, template).await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod error;
pub mod models;

// Re-export main types at crate root for convenience
pub use api::BoardingFormsApi;
pub use error::{BoardingFormsError, DomainListError, EntityKind, FieldViolation, LogoRejection};
pub use models::{
    ApprovedDomains, Bucket, ButtonStyle, ConnectionPreset, CustomFormFields, DisplayAttributes,
    FieldConfig, FieldConstraints, FieldMap, FieldOverlay, FieldRef, FieldSettings, FieldShape,
    Heading, LogoFile, MccCode, PlatformProfile, PlatformSummary, PresetOutcome,
    PresetOverlay, PresetReport, PresetSkipReason, Section, SectionKind, SectionOverlay,
    SessionContext, Support, Template, TemplateSummary,
};
