//! Boarding Forms Module Implementation
//!
//! The public API is defined in `boarding-forms-sdk` and re-exported here.

pub use boarding_forms_sdk::{
    BoardingFormsApi, BoardingFormsError, ConnectionPreset, CustomFormFields, FieldConfig,
    PlatformProfile, PresetOutcome, SessionContext, Template,
};

pub mod local_client;
pub use local_client::BoardingFormsLocalClient;

pub mod config;
pub mod domain;
pub mod infra;
