//! Configuration for the boarding forms module.

use boarding_forms_sdk::MccCode;
use serde::{Deserialize, Serialize};

/// What happens to fields outside the new preset's overlay when a different
/// preset is applied on top of an earlier one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresetSwitchPolicy {
    /// Only keys declared by the preset are written; everything else keeps
    /// whatever an earlier preset or the administrator set.
    #[default]
    Overlay,
    /// Every field is hidden first, then the preset is applied. Help text and
    /// shape settings are kept.
    ResetThenApply,
}

/// Limits for logo uploads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct LogoUploadConfig {
    /// Maximum accepted file size in bytes.
    pub max_bytes: usize,
    pub allowed_mime_types: Vec<String>,
}

impl Default for LogoUploadConfig {
    fn default() -> Self {
        Self {
            max_bytes: 2 * 1024 * 1024, // 2 MB
            allowed_mime_types: vec![
                "image/png".to_owned(),
                "image/jpeg".to_owned(),
                "image/jpg".to_owned(),
            ],
        }
    }
}

/// Configuration for the boarding forms module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct BoardingFormsConfig {
    /// Delay applied by the in-memory store on every read.
    pub simulated_load_latency_ms: u64,
    /// Delay applied by the in-memory store on every write.
    pub simulated_save_latency_ms: u64,
    pub preset_switch: PresetSwitchPolicy,
    pub logo: LogoUploadConfig,
    /// Boarding domains a template may be served from.
    pub domain_options: Vec<String>,
    pub mcc_codes: Vec<MccCode>,
    /// `expirationInHours` of a blank template.
    pub default_expiration_hours: u32,
}

impl Default for BoardingFormsConfig {
    fn default() -> Self {
        Self {
            simulated_load_latency_ms: 500,
            simulated_save_latency_ms: 1000,
            preset_switch: PresetSwitchPolicy::default(),
            logo: LogoUploadConfig::default(),
            domain_options: vec![
                "https://boarding.dev.preczn.com".to_owned(),
                "https://boarding.staging.preczn.com".to_owned(),
                "https://boarding.prod.preczn.com".to_owned(),
            ],
            mcc_codes: default_mcc_codes(),
            default_expiration_hours: 72,
        }
    }
}

impl BoardingFormsConfig {
    /// Same configuration without simulated store latency.
    #[must_use]
    pub fn without_latency(mut self) -> Self {
        self.simulated_load_latency_ms = 0;
        self.simulated_save_latency_ms = 0;
        self
    }
}

fn default_mcc_codes() -> Vec<MccCode> {
    [
        ("1731", "Electrical Contractors"),
        (
            "1740",
            "Masonry, Stonework, Tile Setting, Plastering, and Insulation Contractors",
        ),
        ("1750", "Carpentry Contractors"),
        ("5812", "Eating Places and Restaurants"),
        ("5814", "Fast Food Restaurants"),
        (
            "7372",
            "Computer Programming, Data Processing, and Integrated Systems Design Services",
        ),
        (
            "7394",
            "Equipment, Tool, Furniture and Appliance Rental and Leasing",
        ),
        ("8011", "Doctors and Physicians (Not Elsewhere Classified)"),
        ("8021", "Dentists and Orthodontists"),
        (
            "8099",
            "Medical Services and Health Practitioners (Not Elsewhere Classified)",
        ),
    ]
    .into_iter()
    .map(|(code, description)| MccCode {
        code: code.to_owned(),
        label: format!("{code} - {description}"),
    })
    .collect()
}
