//! Public models for the `boarding-forms` module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the `boarding-forms` module and its consumers. JSON field names
//! follow the camelCase shape of the boarding form payloads.

mod field;
mod platform;
mod preset;
mod section;
mod session;
mod template;

pub use field::{
    DisplayAttributes, FieldConfig, FieldConstraints, FieldSettings, FieldShape,
};
pub use platform::{ApprovedDomains, PlatformProfile, PlatformSummary};
pub use preset::{
    ConnectionPreset, FieldOverlay, FieldRef, PresetOutcome, PresetOverlay, PresetReport,
    PresetSkipReason, SectionOverlay,
};
pub use section::{Bucket, CustomFormFields, FieldMap, Section, SectionKind};
pub use session::SessionContext;
pub use template::{ButtonStyle, Heading, LogoFile, MccCode, Support, Template, TemplateSummary};
