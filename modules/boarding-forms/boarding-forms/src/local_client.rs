//! Local client implementing the `BoardingFormsApi` trait.

use std::sync::Arc;

use async_trait::async_trait;
use boarding_forms_sdk::{
    BoardingFormsApi, BoardingFormsError, Bucket, ConnectionPreset, FieldConfig, LogoFile,
    MccCode, PlatformProfile, PlatformSummary, PresetOutcome, SectionKind, SessionContext,
    Template, TemplateSummary,
};

use crate::domain::service::BoardingFormsService;

/// Local client for the Boarding Forms module.
///
/// Implements `BoardingFormsApi` by delegating to the domain service and
/// converting domain errors into SDK errors.
pub struct BoardingFormsLocalClient {
    service: Arc<BoardingFormsService>,
}

impl BoardingFormsLocalClient {
    #[must_use]
    pub fn new(service: Arc<BoardingFormsService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl BoardingFormsApi for BoardingFormsLocalClient {
    async fn list_templates(
        &self,
        _ctx: &SessionContext,
    ) -> Result<Vec<TemplateSummary>, BoardingFormsError> {
        self.service
            .list_templates()
            .await
            .map_err(BoardingFormsError::from)
    }

    async fn new_template(&self, _ctx: &SessionContext) -> Result<Template, BoardingFormsError> {
        Ok(self.service.new_template())
    }

    async fn get_template(
        &self,
        _ctx: &SessionContext,
        id: &str,
    ) -> Result<Template, BoardingFormsError> {
        self.service
            .get_template(id)
            .await
            .map_err(BoardingFormsError::from)
    }

    async fn save_template(
        &self,
        _ctx: &SessionContext,
        template: Template,
    ) -> Result<Template, BoardingFormsError> {
        self.service
            .save_template(template)
            .await
            .map_err(BoardingFormsError::from)
    }

    async fn delete_template(
        &self,
        _ctx: &SessionContext,
        id: &str,
    ) -> Result<(), BoardingFormsError> {
        self.service
            .delete_template(id)
            .await
            .map_err(BoardingFormsError::from)
    }

    async fn list_presets(
        &self,
        _ctx: &SessionContext,
    ) -> Result<Vec<ConnectionPreset>, BoardingFormsError> {
        Ok(self.service.list_presets().to_vec())
    }

    async fn apply_preset(
        &self,
        ctx: &SessionContext,
        template: &mut Template,
        preset_id: Option<&str>,
    ) -> Result<PresetOutcome, BoardingFormsError> {
        self.service
            .apply_preset(ctx, template, preset_id)
            .map_err(BoardingFormsError::from)
    }

    async fn configure_field(
        &self,
        ctx: &SessionContext,
        template: &mut Template,
        section: SectionKind,
        bucket: Bucket,
        key: &str,
        config: FieldConfig,
    ) -> Result<(), BoardingFormsError> {
        self.service
            .configure_field(ctx, template, section, bucket, key, config)
            .map_err(BoardingFormsError::from)
    }

    async fn upload_logo(
        &self,
        _ctx: &SessionContext,
        template: &mut Template,
        file: LogoFile,
    ) -> Result<(), BoardingFormsError> {
        self.service
            .upload_logo(template, &file)
            .map_err(BoardingFormsError::from)
    }

    async fn remove_logo(
        &self,
        _ctx: &SessionContext,
        template: &mut Template,
    ) -> Result<(), BoardingFormsError> {
        self.service.remove_logo(template);
        Ok(())
    }

    async fn list_platforms(
        &self,
        _ctx: &SessionContext,
    ) -> Result<Vec<PlatformSummary>, BoardingFormsError> {
        self.service
            .list_platforms()
            .await
            .map_err(BoardingFormsError::from)
    }

    async fn get_platform(
        &self,
        _ctx: &SessionContext,
        id: &str,
    ) -> Result<PlatformProfile, BoardingFormsError> {
        self.service
            .get_platform(id)
            .await
            .map_err(BoardingFormsError::from)
    }

    async fn save_platform(
        &self,
        _ctx: &SessionContext,
        profile: PlatformProfile,
    ) -> Result<PlatformProfile, BoardingFormsError> {
        self.service
            .save_platform(profile)
            .await
            .map_err(BoardingFormsError::from)
    }

    async fn add_approved_domain(
        &self,
        _ctx: &SessionContext,
        profile: &mut PlatformProfile,
        domain: &str,
    ) -> Result<(), BoardingFormsError> {
        self.service
            .add_domain(&mut profile.approved_domains, domain)
            .map_err(BoardingFormsError::from)
    }

    async fn update_approved_domain(
        &self,
        _ctx: &SessionContext,
        profile: &mut PlatformProfile,
        index: usize,
        domain: &str,
    ) -> Result<(), BoardingFormsError> {
        self.service
            .update_domain(&mut profile.approved_domains, index, domain)
            .map_err(BoardingFormsError::from)
    }

    async fn remove_approved_domain(
        &self,
        _ctx: &SessionContext,
        profile: &mut PlatformProfile,
        index: usize,
    ) -> Result<String, BoardingFormsError> {
        self.service
            .remove_domain(&mut profile.approved_domains, index)
            .map_err(BoardingFormsError::from)
    }

    async fn list_domain_options(
        &self,
        _ctx: &SessionContext,
    ) -> Result<Vec<String>, BoardingFormsError> {
        Ok(self.service.domain_options().to_vec())
    }

    async fn list_mcc_codes(
        &self,
        _ctx: &SessionContext,
    ) -> Result<Vec<MccCode>, BoardingFormsError> {
        Ok(self.service.mcc_codes().to_vec())
    }
}
