#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

//! Common test utilities for boarding-forms integration tests

use std::sync::Arc;

use boarding_forms::{
    BoardingFormsLocalClient,
    config::BoardingFormsConfig,
    domain::{notify::TracingNotifier, service::BoardingFormsService},
    infra::{InMemoryPlatformRepository, InMemoryTemplateRepository, SimulatedLatency},
};
use boarding_forms_sdk::Template;

pub fn default_config() -> BoardingFormsConfig {
    BoardingFormsConfig::default().without_latency()
}

pub fn create_service() -> Arc<BoardingFormsService> {
    create_service_with(default_config())
}

pub fn create_service_with(config: BoardingFormsConfig) -> Arc<BoardingFormsService> {
    let latency = SimulatedLatency::from_config(&config);
    Arc::new(BoardingFormsService::new(
        Arc::new(InMemoryTemplateRepository::seeded(latency)),
        Arc::new(InMemoryPlatformRepository::seeded(latency)),
        Arc::new(TracingNotifier),
        config,
    ))
}

pub fn create_client() -> BoardingFormsLocalClient {
    BoardingFormsLocalClient::new(create_service())
}

/// A blank template with every required input filled in.
pub fn complete_template(service: &BoardingFormsService) -> Template {
    let mut template = service.new_template();
    template.name = "Merchant Onboarding".to_owned();
    template.domain = "https://boarding.dev.preczn.com".to_owned();
    template.heading.title = "Let's get you set up".to_owned();
    template.return_url = "https://merchant.example/complete".to_owned();
    template.expiration_url = "https://merchant.example/expired".to_owned();
    template
}
