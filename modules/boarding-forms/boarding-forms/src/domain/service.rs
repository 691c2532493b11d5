//! Domain service for the boarding forms module.

use std::collections::BTreeSet;
use std::sync::Arc;

use boarding_forms_sdk::{
    ApprovedDomains, Bucket, ButtonStyle, ConnectionPreset, DomainListError, FieldConfig, Heading,
    LogoFile, MccCode, PlatformProfile, PlatformSummary, PresetOutcome, SectionKind,
    SessionContext, Support, Template, TemplateSummary,
};
use tracing::{debug, info, instrument, warn};

use crate::config::BoardingFormsConfig;
use crate::domain::applier::apply_selected;
use crate::domain::error::DomainError;
use crate::domain::logo::encode_logo;
use crate::domain::notify::Notifier;
use crate::domain::presets::PRESET_CATALOG;
use crate::domain::repo::{PlatformRepository, TemplateRepository};
use crate::domain::schema::{blank_custom_form_fields, shape_of};
use crate::domain::validation::{validate_field_config, validate_platform, validate_template};

const DEFAULT_FORM_TYPE: &str = "KYC";
const DEFAULT_ACCENT_COLOR: &str = "#4014be";
const DEFAULT_BUTTON_TEXT_COLOR: &str = "#edf0f5";

/// Domain service for templates, presets and platforms.
///
/// Template and platform edits happen on caller-owned values; only
/// `save_*`/`delete_*` reach the repositories.
pub struct BoardingFormsService {
    templates: Arc<dyn TemplateRepository>,
    platforms: Arc<dyn PlatformRepository>,
    notifier: Arc<dyn Notifier>,
    presets: &'static [ConnectionPreset],
    config: BoardingFormsConfig,
}

impl BoardingFormsService {
    #[must_use]
    pub fn new(
        templates: Arc<dyn TemplateRepository>,
        platforms: Arc<dyn PlatformRepository>,
        notifier: Arc<dyn Notifier>,
        config: BoardingFormsConfig,
    ) -> Self {
        Self {
            templates,
            platforms,
            notifier,
            presets: PRESET_CATALOG.as_slice(),
            config,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &BoardingFormsConfig {
        &self.config
    }

    // --- templates ---

    #[instrument(skip(self))]
    pub async fn list_templates(&self) -> Result<Vec<TemplateSummary>, DomainError> {
        let templates = self.templates.list().await?;
        debug!(count = templates.len(), "listed templates");
        Ok(templates)
    }

    /// Blank template for add mode: default appearance, every custom form
    /// field hidden.
    #[must_use]
    pub fn new_template(&self) -> Template {
        Template {
            id: None,
            name: String::new(),
            form_type: DEFAULT_FORM_TYPE.to_owned(),
            domain: String::new(),
            mcc_codes: BTreeSet::new(),
            heading: Heading {
                title: String::new(),
                title_color: DEFAULT_ACCENT_COLOR.to_owned(),
                accent_color: DEFAULT_ACCENT_COLOR.to_owned(),
                logo: String::new(),
            },
            button: ButtonStyle {
                text_color: DEFAULT_BUTTON_TEXT_COLOR.to_owned(),
                accent_color: DEFAULT_ACCENT_COLOR.to_owned(),
            },
            return_url: String::new(),
            expiration_url: String::new(),
            expiration_in_hours: self.config.default_expiration_hours,
            tos_url: String::new(),
            display_tos: true,
            display_new_user_login: true,
            auto_transmit_merchant_data: true,
            support: Support::default(),
            custom_form_fields: blank_custom_form_fields(),
        }
    }

    #[instrument(skip(self))]
    pub async fn get_template(&self, id: &str) -> Result<Template, DomainError> {
        self.templates
            .find(id)
            .await?
            .ok_or_else(|| DomainError::template_not_found(id))
    }

    #[instrument(skip(self, template), fields(id = ?template.id, name = %template.name))]
    pub async fn save_template(&self, template: Template) -> Result<Template, DomainError> {
        if let Err(violations) = validate_template(&template) {
            warn!(violations = violations.len(), "template rejected");
            self.notifier.error("Please fill in all required fields");
            return Err(DomainError::Validation(violations));
        }

        let saved = match template.id.clone() {
            None => self.templates.insert(template).await?,
            Some(id) => self
                .templates
                .update(template)
                .await?
                .ok_or_else(|| DomainError::template_not_found(id))?,
        };

        info!(id = ?saved.id, "template saved");
        self.notifier.success("Template saved successfully!");
        Ok(saved)
    }

    #[instrument(skip(self))]
    pub async fn delete_template(&self, id: &str) -> Result<(), DomainError> {
        if !self.templates.delete(id).await? {
            return Err(DomainError::template_not_found(id));
        }
        info!("template deleted");
        Ok(())
    }

    // --- presets and custom form fields ---

    #[must_use]
    pub const fn list_presets(&self) -> &'static [ConnectionPreset] {
        self.presets
    }

    /// Applies the selected preset using the configured switch policy.
    ///
    /// # Errors
    ///
    /// `Forbidden` outside admin mode.
    #[instrument(skip(self, template))]
    pub fn apply_preset(
        &self,
        ctx: &SessionContext,
        template: &mut Template,
        preset_id: Option<&str>,
    ) -> Result<PresetOutcome, DomainError> {
        require_admin(ctx)?;

        let outcome = apply_selected(
            &mut template.custom_form_fields,
            preset_id,
            self.config.preset_switch,
        );
        if let PresetOutcome::Applied {
            preset_name,
            report,
        } = &outcome
        {
            info!(
                preset = %preset_name,
                applied = report.applied.len(),
                skipped = report.skipped.len(),
                "preset applied"
            );
            self.notifier.success(&format!(
                "{preset_name} configuration applied successfully! Review and customize fields as needed."
            ));
        }
        Ok(outcome)
    }

    /// Replaces one field's configuration.
    ///
    /// # Errors
    ///
    /// `Forbidden` outside admin mode, `UnknownFieldKey` for undeclared
    /// fields, `Validation` when the shape or settings are wrong.
    #[instrument(skip(self, template, config))]
    pub fn configure_field(
        &self,
        ctx: &SessionContext,
        template: &mut Template,
        section: SectionKind,
        bucket: Bucket,
        key: &str,
        config: FieldConfig,
    ) -> Result<(), DomainError> {
        require_admin(ctx)?;

        let shape = shape_of(section, bucket, key)?;
        let path = format!("customFormFields.{section}.{bucket}.{key}");
        validate_field_config(&path, shape, &config).map_err(DomainError::Validation)?;

        let field = template
            .custom_form_fields
            .section_mut(section)
            .bucket_mut(bucket)
            .and_then(|map| map.get_mut(key))
            .ok_or_else(|| DomainError::unknown_field_key(section, bucket, key))?;
        *field = config;

        self.notifier.success("Field configuration saved!");
        Ok(())
    }

    // --- logo ---

    /// # Errors
    ///
    /// `InvalidLogo` when the file is refused; the template is left as is.
    #[instrument(skip(self, template, file), fields(file = %file.file_name, size = file.bytes.len()))]
    pub fn upload_logo(&self, template: &mut Template, file: &LogoFile) -> Result<(), DomainError> {
        match encode_logo(file, &self.config.logo) {
            Ok(data_url) => {
                template.heading.logo = data_url;
                self.notifier.success("Logo uploaded successfully!");
                Ok(())
            }
            Err(rejection) => {
                self.notifier.error(&rejection.to_string());
                Err(rejection.into())
            }
        }
    }

    pub fn remove_logo(&self, template: &mut Template) {
        template.heading.logo.clear();
        self.notifier.success("Logo removed successfully!");
    }

    // --- platforms ---

    #[instrument(skip(self))]
    pub async fn list_platforms(&self) -> Result<Vec<PlatformSummary>, DomainError> {
        let platforms = self.platforms.list().await?;
        debug!(count = platforms.len(), "listed platforms");
        Ok(platforms)
    }

    #[instrument(skip(self))]
    pub async fn get_platform(&self, id: &str) -> Result<PlatformProfile, DomainError> {
        self.platforms
            .find(id)
            .await?
            .ok_or_else(|| DomainError::platform_not_found(id))
    }

    #[instrument(skip(self, profile), fields(id = ?profile.id, name = %profile.name))]
    pub async fn save_platform(
        &self,
        profile: PlatformProfile,
    ) -> Result<PlatformProfile, DomainError> {
        if let Err(violations) = validate_platform(&profile) {
            self.notifier.error("Please fill in all required fields");
            return Err(DomainError::Validation(violations));
        }

        let (saved, message) = match profile.id.clone() {
            None => (
                self.platforms.insert(profile).await?,
                "Platform created successfully!",
            ),
            Some(id) => (
                self.platforms
                    .update(profile)
                    .await?
                    .ok_or_else(|| DomainError::platform_not_found(id))?,
                "Platform updated successfully!",
            ),
        };

        info!(id = ?saved.id, "platform saved");
        self.notifier.success(message);
        Ok(saved)
    }

    /// Adds an approved domain to a profile being edited.
    ///
    /// # Errors
    ///
    /// `DomainList` for blank or duplicate input; the list is unchanged.
    pub fn add_domain(
        &self,
        domains: &mut ApprovedDomains,
        domain: &str,
    ) -> Result<(), DomainError> {
        let result = domains.add(domain).map(|_| ());
        self.report_domain_edit(result, "Domain added successfully")
    }

    /// Replaces the approved domain at `index`.
    ///
    /// # Errors
    ///
    /// `DomainList` for blank input, duplicates of another entry, or a bad
    /// index; the original entry is kept.
    pub fn update_domain(
        &self,
        domains: &mut ApprovedDomains,
        index: usize,
        domain: &str,
    ) -> Result<(), DomainError> {
        let result = domains.update(index, domain);
        self.report_domain_edit(result, "Domain updated successfully")
    }

    /// Removes the approved domain at `index`.
    ///
    /// # Errors
    ///
    /// `DomainList` for a bad index.
    pub fn remove_domain(
        &self,
        domains: &mut ApprovedDomains,
        index: usize,
    ) -> Result<String, DomainError> {
        let removed = domains.remove(index).map_err(|e| {
            self.notifier.error(&e.to_string());
            DomainError::from(e)
        })?;
        self.notifier.success("Domain deleted successfully");
        Ok(removed)
    }

    fn report_domain_edit(
        &self,
        result: Result<(), DomainListError>,
        success: &str,
    ) -> Result<(), DomainError> {
        match result {
            Ok(()) => {
                self.notifier.success(success);
                Ok(())
            }
            Err(DomainListError::Empty) => {
                self.notifier.error("Please enter a domain");
                Err(DomainListError::Empty.into())
            }
            Err(DomainListError::Duplicate(domain)) => {
                self.notifier
                    .warning("This domain already exists in the list");
                Err(DomainListError::Duplicate(domain).into())
            }
            Err(e @ DomainListError::IndexOutOfRange { .. }) => {
                self.notifier.error(&e.to_string());
                Err(e.into())
            }
        }
    }

    // --- reference data ---

    #[must_use]
    pub fn domain_options(&self) -> &[String] {
        &self.config.domain_options
    }

    #[must_use]
    pub fn mcc_codes(&self) -> &[MccCode] {
        &self.config.mcc_codes
    }
}

fn require_admin(ctx: &SessionContext) -> Result<(), DomainError> {
    if ctx.is_admin() {
        Ok(())
    } else {
        Err(DomainError::Forbidden)
    }
}
