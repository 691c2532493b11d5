//! Repository traits for template and platform storage.

use async_trait::async_trait;
use boarding_forms_sdk::{PlatformProfile, PlatformSummary, Template, TemplateSummary};

/// Storage for boarding form templates.
///
/// Implementations handle the actual storage mechanism (in-memory, HTTP
/// backend, etc.). Missing records are `Ok(None)` / `Ok(false)`, not errors.
#[async_trait]
pub trait TemplateRepository: Send + Sync {
    async fn list(&self) -> anyhow::Result<Vec<TemplateSummary>>;

    async fn find(&self, id: &str) -> anyhow::Result<Option<Template>>;

    /// Stores a template that has no id yet and returns it with its new id.
    async fn insert(&self, template: Template) -> anyhow::Result<Template>;

    /// Replaces the stored template with the same id. `None` when no such
    /// template exists.
    async fn update(&self, template: Template) -> anyhow::Result<Option<Template>>;

    /// Returns whether a template was removed.
    async fn delete(&self, id: &str) -> anyhow::Result<bool>;
}

/// Storage for platform records.
#[async_trait]
pub trait PlatformRepository: Send + Sync {
    async fn list(&self) -> anyhow::Result<Vec<PlatformSummary>>;

    async fn find(&self, id: &str) -> anyhow::Result<Option<PlatformProfile>>;

    /// Stores a profile that has no id yet and returns it with its new id.
    async fn insert(&self, profile: PlatformProfile) -> anyhow::Result<PlatformProfile>;

    /// Replaces the stored profile with the same id. `None` when no such
    /// platform exists.
    async fn update(&self, profile: PlatformProfile) -> anyhow::Result<Option<PlatformProfile>>;
}
