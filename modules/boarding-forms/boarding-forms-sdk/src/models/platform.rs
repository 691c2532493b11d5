use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::DomainListError;

/// Row of the platform listing with aggregate activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformSummary {
    pub id: String,
    pub name: String,
    /// Processed volume in whole dollars.
    pub volume: u64,
    pub transactions: u64,
    pub rejects: u64,
    pub connections: u64,
    pub is_demo: bool,
}

/// Ordered allow-list of domains permitted to embed the boarding form.
///
/// Entries are trimmed and never empty; duplicates (exact, case-sensitive
/// match) are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct ApprovedDomains(Vec<String>);

impl ApprovedDomains {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(&self, domain: &str) -> bool {
        self.0.iter().any(|d| d == domain)
    }

    /// Appends a domain and returns the stored (trimmed) value.
    ///
    /// # Errors
    ///
    /// `Empty` for blank input, `Duplicate` when the trimmed value is already listed.
    pub fn add<'a>(&mut self, domain: &'a str) -> Result<&'a str, DomainListError> {
        let trimmed = normalize(domain)?;
        if self.contains(trimmed) {
            return Err(DomainListError::Duplicate(trimmed.to_owned()));
        }
        self.0.push(trimmed.to_owned());
        Ok(trimmed)
    }

    /// Replaces the entry at `index`. On error the list is unchanged.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange`, `Empty`, or `Duplicate` when another entry (not the
    /// one being edited) already has the value.
    pub fn update(&mut self, index: usize, domain: &str) -> Result<(), DomainListError> {
        let len = self.0.len();
        if index >= len {
            return Err(DomainListError::IndexOutOfRange { index, len });
        }
        let trimmed = normalize(domain)?;
        let duplicate = self
            .0
            .iter()
            .enumerate()
            .any(|(i, d)| i != index && d == trimmed);
        if duplicate {
            return Err(DomainListError::Duplicate(trimmed.to_owned()));
        }
        trimmed.clone_into(&mut self.0[index]);
        Ok(())
    }

    /// Removes and returns the entry at `index`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when there is no such entry.
    pub fn remove(&mut self, index: usize) -> Result<String, DomainListError> {
        let len = self.0.len();
        if index >= len {
            return Err(DomainListError::IndexOutOfRange { index, len });
        }
        Ok(self.0.remove(index))
    }
}

fn normalize(domain: &str) -> Result<&str, DomainListError> {
    let trimmed = domain.trim();
    if trimmed.is_empty() {
        return Err(DomainListError::Empty);
    }
    Ok(trimmed)
}

impl TryFrom<Vec<String>> for ApprovedDomains {
    type Error = DomainListError;

    fn try_from(domains: Vec<String>) -> Result<Self, Self::Error> {
        let mut list = Self::new();
        for domain in &domains {
            list.add(domain)?;
        }
        Ok(list)
    }
}

impl From<ApprovedDomains> for Vec<String> {
    fn from(domains: ApprovedDomains) -> Self {
        domains.0
    }
}

/// Editable business profile of a platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct PlatformProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub business_legal_name: String,
    pub address: String,
    pub address2: String,
    pub country: String,
    pub city: String,
    pub region: String,
    pub postal: String,
    pub contact_name: String,
    pub is_test_platform: bool,
    pub is_demo_platform: bool,
    pub phone_number: String,
    pub default_mcc_code: String,
    pub mcc_codes: BTreeSet<String>,
    pub auto_enrich_merchant_records_live: bool,
    pub auto_enrich_merchant_records_test: bool,
    pub display_enrichment_data_on_forms: bool,
    pub est_high_ticket: Option<u64>,
    pub est_average_ticket: Option<u64>,
    pub est_annual_sales_volume: Option<u64>,
    pub product_service_description: String,
    pub approved_domains: ApprovedDomains,
}

impl Default for PlatformProfile {
    /// Blank profile for add mode.
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            business_legal_name: String::new(),
            address: String::new(),
            address2: String::new(),
            country: "US".to_owned(),
            city: String::new(),
            region: String::new(),
            postal: String::new(),
            contact_name: String::new(),
            is_test_platform: false,
            is_demo_platform: false,
            phone_number: String::new(),
            default_mcc_code: String::new(),
            mcc_codes: BTreeSet::new(),
            auto_enrich_merchant_records_live: false,
            auto_enrich_merchant_records_test: false,
            display_enrichment_data_on_forms: false,
            est_high_ticket: None,
            est_average_ticket: None,
            est_annual_sales_volume: None,
            product_service_description: String::new(),
            approved_domains: ApprovedDomains::new(),
        }
    }
}
