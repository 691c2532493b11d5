//! `BoardingFormsApi` trait definition.
//!
//! This trait defines the public API for the `boarding-forms` module.
//! Every method takes a `SessionContext`; custom form field configuration
//! additionally requires the context to be in admin mode.

use async_trait::async_trait;

use crate::error::BoardingFormsError;
use crate::models::{
    Bucket, ConnectionPreset, FieldConfig, LogoFile, MccCode, PlatformProfile, PlatformSummary,
    PresetOutcome, SectionKind, SessionContext, Template, TemplateSummary,
};

/// Public API trait for the `boarding-forms` module.
///
/// ```ignore
/// let mut template = client.new_template(&ctx).await?;
/// client.apply_preset(&ctx, &mut template, Some("payrix")).await?;
/// let saved = client.save_template(&ctx, template).await?;
/// ```
#[async_trait]
pub trait BoardingFormsApi: Send + Sync {
    /// List all templates.
    async fn list_templates(
        &self,
        ctx: &SessionContext,
    ) -> Result<Vec<TemplateSummary>, BoardingFormsError>;

    /// Build a blank template with default appearance and every custom form
    /// field hidden (add mode).
    async fn new_template(&self, ctx: &SessionContext) -> Result<Template, BoardingFormsError>;

    /// Load a template for editing.
    ///
    /// # Errors
    ///
    /// * `NotFound` - If no template with the given id exists
    async fn get_template(
        &self,
        ctx: &SessionContext,
        id: &str,
    ) -> Result<Template, BoardingFormsError>;

    /// Validate and persist a template. Assigns an id on first save.
    ///
    /// # Errors
    ///
    /// * `Validation` - With every offending input listed
    /// * `NotFound` - If the template carries an id that is not stored
    async fn save_template(
        &self,
        ctx: &SessionContext,
        template: Template,
    ) -> Result<Template, BoardingFormsError>;

    /// Delete a template by id.
    ///
    /// # Errors
    ///
    /// * `NotFound` - If no template with the given id exists
    async fn delete_template(&self, ctx: &SessionContext, id: &str)
    -> Result<(), BoardingFormsError>;

    /// List the connection preset catalog in display order.
    async fn list_presets(
        &self,
        ctx: &SessionContext,
    ) -> Result<Vec<ConnectionPreset>, BoardingFormsError>;

    /// Apply the selected preset onto the template's custom form fields.
    ///
    /// `None`, `custom` and unknown ids leave the template untouched and
    /// report why.
    ///
    /// # Errors
    ///
    /// * `Forbidden` - If the context is not in admin mode
    async fn apply_preset(
        &self,
        ctx: &SessionContext,
        template: &mut Template,
        preset_id: Option<&str>,
    ) -> Result<PresetOutcome, BoardingFormsError>;

    /// Replace the configuration of one custom form field.
    ///
    /// # Errors
    ///
    /// * `Forbidden` - If the context is not in admin mode
    /// * `UnknownFieldKey` - If the schema does not declare the field
    /// * `Validation` - If the shape does not match or the settings are invalid
    async fn configure_field(
        &self,
        ctx: &SessionContext,
        template: &mut Template,
        section: SectionKind,
        bucket: Bucket,
        key: &str,
        config: FieldConfig,
    ) -> Result<(), BoardingFormsError>;

    /// Validate an image and store it on the template heading as a data URL.
    ///
    /// # Errors
    ///
    /// * `InvalidLogo` - If the type is not accepted or the file is too large
    async fn upload_logo(
        &self,
        ctx: &SessionContext,
        template: &mut Template,
        file: LogoFile,
    ) -> Result<(), BoardingFormsError>;

    /// Clear the template logo.
    async fn remove_logo(
        &self,
        ctx: &SessionContext,
        template: &mut Template,
    ) -> Result<(), BoardingFormsError>;

    /// List all platforms with their activity aggregates.
    async fn list_platforms(
        &self,
        ctx: &SessionContext,
    ) -> Result<Vec<PlatformSummary>, BoardingFormsError>;

    /// Load a platform profile for editing.
    ///
    /// # Errors
    ///
    /// * `NotFound` - If no platform with the given id exists
    async fn get_platform(
        &self,
        ctx: &SessionContext,
        id: &str,
    ) -> Result<PlatformProfile, BoardingFormsError>;

    /// Validate and persist a platform profile. Assigns an id on first save.
    ///
    /// # Errors
    ///
    /// * `Validation` - If the profile is incomplete
    /// * `NotFound` - If the profile carries an id that is not stored
    async fn save_platform(
        &self,
        ctx: &SessionContext,
        profile: PlatformProfile,
    ) -> Result<PlatformProfile, BoardingFormsError>;

    /// Append a domain to the profile's approved domains.
    ///
    /// # Errors
    ///
    /// * `DomainList` - If the domain is blank or already listed; the list is unchanged
    async fn add_approved_domain(
        &self,
        ctx: &SessionContext,
        profile: &mut PlatformProfile,
        domain: &str,
    ) -> Result<(), BoardingFormsError>;

    /// Replace the approved domain at `index`.
    ///
    /// # Errors
    ///
    /// * `DomainList` - If the domain is blank, duplicates another entry, or
    ///   the index is out of range; the original entry is kept
    async fn update_approved_domain(
        &self,
        ctx: &SessionContext,
        profile: &mut PlatformProfile,
        index: usize,
        domain: &str,
    ) -> Result<(), BoardingFormsError>;

    /// Remove and return the approved domain at `index`.
    ///
    /// # Errors
    ///
    /// * `DomainList` - If the index is out of range
    async fn remove_approved_domain(
        &self,
        ctx: &SessionContext,
        profile: &mut PlatformProfile,
        index: usize,
    ) -> Result<String, BoardingFormsError>;

    /// Boarding domains a template may be served from.
    async fn list_domain_options(
        &self,
        ctx: &SessionContext,
    ) -> Result<Vec<String>, BoardingFormsError>;

    /// Merchant Category Code options.
    async fn list_mcc_codes(&self, ctx: &SessionContext)
    -> Result<Vec<MccCode>, BoardingFormsError>;
}
