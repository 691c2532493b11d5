//! In-memory template and platform stores with simulated backend latency.

use std::time::Duration;

use async_trait::async_trait;
use boarding_forms_sdk::{PlatformProfile, PlatformSummary, Template, TemplateSummary};
use parking_lot::RwLock;
use time::OffsetDateTime;
use tracing::trace;

use super::seed;
use crate::config::BoardingFormsConfig;
use crate::domain::repo::{PlatformRepository, TemplateRepository};

/// Author recorded for templates created through this store.
const LOCAL_AUTHOR: &str = "Administrator";

/// Delays standing in for a remote backend. Zero means no delay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulatedLatency {
    pub load: Duration,
    pub save: Duration,
}

impl SimulatedLatency {
    #[must_use]
    pub const fn from_config(config: &BoardingFormsConfig) -> Self {
        Self {
            load: Duration::from_millis(config.simulated_load_latency_ms),
            save: Duration::from_millis(config.simulated_save_latency_ms),
        }
    }

    async fn before_load(self) {
        if !self.load.is_zero() {
            trace!(delay_ms = self.load.as_millis(), "simulated load latency");
            tokio::time::sleep(self.load).await;
        }
    }

    async fn before_save(self) {
        if !self.save.is_zero() {
            trace!(delay_ms = self.save.as_millis(), "simulated save latency");
            tokio::time::sleep(self.save).await;
        }
    }
}

fn next_id(prefix: &str, existing: impl Iterator<Item = String>) -> String {
    let next = existing
        .filter_map(|id| id.strip_prefix(prefix)?.parse::<u32>().ok())
        .max()
        .unwrap_or(0)
        + 1;
    format!("{prefix}{next:03}")
}

struct TemplateRecord {
    summary: TemplateSummary,
    template: Template,
}

/// Template store kept in process memory, in listing order.
pub struct InMemoryTemplateRepository {
    records: RwLock<Vec<TemplateRecord>>,
    latency: SimulatedLatency,
}

impl InMemoryTemplateRepository {
    /// Empty store.
    #[must_use]
    pub fn new(latency: SimulatedLatency) -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            latency,
        }
    }

    /// Store holding the three mock templates.
    #[must_use]
    pub fn seeded(latency: SimulatedLatency) -> Self {
        let records = seed::template_summaries()
            .into_iter()
            .map(|summary| TemplateRecord {
                template: seed::sample_template(&summary.id),
                summary,
            })
            .collect();
        Self {
            records: RwLock::new(records),
            latency,
        }
    }
}

#[async_trait]
impl TemplateRepository for InMemoryTemplateRepository {
    async fn list(&self) -> anyhow::Result<Vec<TemplateSummary>> {
        self.latency.before_load().await;
        Ok(self
            .records
            .read()
            .iter()
            .map(|record| record.summary.clone())
            .collect())
    }

    async fn find(&self, id: &str) -> anyhow::Result<Option<Template>> {
        self.latency.before_load().await;
        Ok(self
            .records
            .read()
            .iter()
            .find(|record| record.summary.id == id)
            .map(|record| record.template.clone()))
    }

    async fn insert(&self, mut template: Template) -> anyhow::Result<Template> {
        if template.id.is_some() {
            anyhow::bail!("insert called for a template that already has an id");
        }
        self.latency.before_save().await;

        let mut records = self.records.write();
        let id = next_id(
            "TPL-",
            records.iter().map(|record| record.summary.id.clone()),
        );
        template.id = Some(id.clone());
        records.push(TemplateRecord {
            summary: TemplateSummary {
                id,
                name: template.name.clone(),
                created_by: LOCAL_AUTHOR.to_owned(),
                created_on: OffsetDateTime::now_utc().date(),
            },
            template: template.clone(),
        });
        Ok(template)
    }

    async fn update(&self, template: Template) -> anyhow::Result<Option<Template>> {
        let Some(id) = template.id.clone() else {
            anyhow::bail!("update called for a template without an id");
        };
        self.latency.before_save().await;

        let mut records = self.records.write();
        let Some(record) = records.iter_mut().find(|record| record.summary.id == id) else {
            return Ok(None);
        };
        record.summary.name.clone_from(&template.name);
        record.template = template.clone();
        Ok(Some(template))
    }

    async fn delete(&self, id: &str) -> anyhow::Result<bool> {
        self.latency.before_save().await;
        let mut records = self.records.write();
        let before = records.len();
        records.retain(|record| record.summary.id != id);
        Ok(records.len() != before)
    }
}

struct PlatformRecord {
    summary: PlatformSummary,
    profile: PlatformProfile,
}

/// Platform store kept in process memory, in listing order.
pub struct InMemoryPlatformRepository {
    records: RwLock<Vec<PlatformRecord>>,
    latency: SimulatedLatency,
}

impl InMemoryPlatformRepository {
    /// Empty store.
    #[must_use]
    pub fn new(latency: SimulatedLatency) -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            latency,
        }
    }

    /// Store holding the five mock platforms.
    #[must_use]
    pub fn seeded(latency: SimulatedLatency) -> Self {
        let records = seed::platform_summaries()
            .into_iter()
            .map(|summary| PlatformRecord {
                profile: seed::platform_profile(&summary),
                summary,
            })
            .collect();
        Self {
            records: RwLock::new(records),
            latency,
        }
    }
}

#[async_trait]
impl PlatformRepository for InMemoryPlatformRepository {
    async fn list(&self) -> anyhow::Result<Vec<PlatformSummary>> {
        self.latency.before_load().await;
        Ok(self
            .records
            .read()
            .iter()
            .map(|record| record.summary.clone())
            .collect())
    }

    async fn find(&self, id: &str) -> anyhow::Result<Option<PlatformProfile>> {
        self.latency.before_load().await;
        Ok(self
            .records
            .read()
            .iter()
            .find(|record| record.summary.id == id)
            .map(|record| record.profile.clone()))
    }

    async fn insert(&self, mut profile: PlatformProfile) -> anyhow::Result<PlatformProfile> {
        if profile.id.is_some() {
            anyhow::bail!("insert called for a platform that already has an id");
        }
        self.latency.before_save().await;

        let mut records = self.records.write();
        let id = next_id(
            "PLT-",
            records.iter().map(|record| record.summary.id.clone()),
        );
        profile.id = Some(id.clone());
        records.push(PlatformRecord {
            summary: PlatformSummary {
                id,
                name: profile.name.clone(),
                volume: 0,
                transactions: 0,
                rejects: 0,
                connections: 0,
                is_demo: profile.is_demo_platform,
            },
            profile: profile.clone(),
        });
        Ok(profile)
    }

    async fn update(&self, profile: PlatformProfile) -> anyhow::Result<Option<PlatformProfile>> {
        let Some(id) = profile.id.clone() else {
            anyhow::bail!("update called for a platform without an id");
        };
        self.latency.before_save().await;

        let mut records = self.records.write();
        let Some(record) = records.iter_mut().find(|record| record.summary.id == id) else {
            return Ok(None);
        };
        record.summary.name.clone_from(&profile.name);
        record.summary.is_demo = profile.is_demo_platform;
        record.profile = profile.clone();
        Ok(Some(profile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_id() {
        let ids = ["TPL-001", "TPL-003", "other"].map(str::to_owned);
        assert_eq!(next_id("TPL-", ids.into_iter()), "TPL-004");
        assert_eq!(next_id("PLT-", std::iter::empty()), "PLT-001");
    }

    #[tokio::test]
    async fn test_template_crud() {
        let repo = InMemoryTemplateRepository::seeded(SimulatedLatency::default());
        assert_eq!(repo.list().await.unwrap().len(), 3);

        let mut template = repo.find("TPL-002").await.unwrap().unwrap();
        assert_eq!(template.name, "Payrix Form");

        template.name = "Contractor Form".to_owned();
        assert!(repo.update(template.clone()).await.unwrap().is_some());
        let listed = repo.list().await.unwrap();
        assert_eq!(listed[1].name, "Contractor Form");
        assert_eq!(listed[1].created_by, "Jane Smith");

        template.id = None;
        let inserted = repo.insert(template).await.unwrap();
        assert_eq!(inserted.id.as_deref(), Some("TPL-004"));
        assert_eq!(repo.list().await.unwrap()[3].created_by, LOCAL_AUTHOR);

        assert!(repo.delete("TPL-004").await.unwrap());
        assert!(!repo.delete("TPL-004").await.unwrap());
        assert!(repo.find("TPL-004").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_of_missing_record() {
        let repo = InMemoryTemplateRepository::new(SimulatedLatency::default());
        let template = seed::sample_template("TPL-009");
        assert!(repo.update(template).await.unwrap().is_none());

        let platforms = InMemoryPlatformRepository::new(SimulatedLatency::default());
        let profile = PlatformProfile {
            id: Some("PLT-009".to_owned()),
            ..PlatformProfile::default()
        };
        assert!(platforms.update(profile).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_rejects_existing_id() {
        let repo = InMemoryTemplateRepository::new(SimulatedLatency::default());
        assert!(repo.insert(seed::sample_template("TPL-001")).await.is_err());
    }

    #[tokio::test]
    async fn test_platform_update_refreshes_listing() {
        let repo = InMemoryPlatformRepository::seeded(SimulatedLatency::default());
        let mut profile = repo.find("PLT-002").await.unwrap().unwrap();
        profile.name = "Payrix Pro".to_owned();
        profile.is_demo_platform = true;
        repo.update(profile).await.unwrap();

        let row = &repo.list().await.unwrap()[1];
        assert_eq!(row.name, "Payrix Pro");
        assert!(row.is_demo);
        assert_eq!(row.volume, 875_000);
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_latency_is_applied() {
        let latency = SimulatedLatency::from_config(&BoardingFormsConfig::default());
        let repo = InMemoryPlatformRepository::seeded(latency);

        let started = tokio::time::Instant::now();
        repo.list().await.unwrap();
        assert_eq!(started.elapsed(), Duration::from_millis(500));

        let profile = repo.find("PLT-001").await.unwrap().unwrap();
        let started = tokio::time::Instant::now();
        repo.update(profile).await.unwrap();
        assert_eq!(started.elapsed(), Duration::from_millis(1000));
    }
}
