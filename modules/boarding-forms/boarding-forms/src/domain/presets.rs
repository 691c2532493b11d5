//! Connection preset catalog and per-session preset selection.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use boarding_forms_sdk::{
    ConnectionPreset, FieldOverlay, PresetOverlay, SectionKind, SectionOverlay,
};

/// Id of the blank-slate preset, which applies nothing.
pub const CUSTOM_PRESET_ID: &str = "custom";

/// `(key, display, subText)`
type OverlayEntry = (&'static str, bool, Option<&'static str>);

fn overlay(entries: &[OverlayEntry]) -> BTreeMap<String, FieldOverlay> {
    entries
        .iter()
        .map(|&(key, display, sub_text)| {
            let field = FieldOverlay::new(display);
            let field = match sub_text {
                Some(text) => field.with_sub_text(text),
                None => field,
            };
            (key.to_owned(), field)
        })
        .collect()
}

fn fields_only(entries: &[OverlayEntry]) -> SectionOverlay {
    SectionOverlay {
        fields: Some(overlay(entries)),
        attachments: None,
    }
}

fn with_attachments(fields: &[OverlayEntry], attachments: &[OverlayEntry]) -> SectionOverlay {
    SectionOverlay {
        fields: Some(overlay(fields)),
        attachments: Some(overlay(attachments)),
    }
}

fn preset(id: &str, name: &str, description: &str, fields: PresetOverlay) -> ConnectionPreset {
    ConnectionPreset {
        id: id.to_owned(),
        name: name.to_owned(),
        description: description.to_owned(),
        icon: None,
        fields,
    }
}

fn stripe_connect() -> ConnectionPreset {
    let business_info = fields_only(&[
        ("name", true, Some("Legal business name as registered with government agencies")),
        ("legalName", true, Some("DBA or trade name if different from legal name")),
        ("phone", true, Some("Primary business phone number for verification")),
        ("website", true, Some("Company website URL (used for business verification)")),
        ("tin", true, Some("EIN or SSN for tax reporting (encrypted and secure)")),
        ("tinType", true, Some("Select EIN for businesses or SSN for sole proprietors")),
        ("businessType", true, Some("Legal structure of your business")),
        ("industry", true, None),
        ("mcc", true, Some("Merchant Category Code - describes your business type")),
        ("dateEstablished", true, None),
    ]);
    let owners = fields_only(&[
        ("firstName", true, Some("Legal first name as shown on government-issued ID")),
        ("lastName", true, Some("Legal last name as shown on government-issued ID")),
        ("businessTitle", true, Some("Your role in the company (e.g., Owner, CEO, Partner)")),
        ("ssn", true, Some("Required for identity verification (encrypted and secure)")),
        ("dateOfBirth", true, Some("Must be 18 years or older")),
        ("email", true, Some("Primary email for account notifications")),
        ("phone", true, None),
        ("homeAddressLine1", true, Some("Personal residential address (not PO Box)")),
        ("homeAddressLine2", true, None),
        ("homeCity", true, None),
        ("homeState", true, None),
        ("homePostalCode", true, None),
        ("homeCountry", true, None),
        ("driversLicenseNumber", true, Some("Used for identity verification")),
        ("driversLicenseState", true, None),
        ("driversLicenseExpiration", true, None),
    ]);
    let banking = fields_only(&[
        ("accountHolderName", true, Some("Name on the bank account (must match business name)")),
        ("bankAccountType", true, None),
        ("routingNumber", true, Some("9-digit ABA routing number")),
        ("accountNumber", true, Some("Bank account number for deposits")),
    ]);
    preset(
        "stripe_connect",
        "Stripe Connect",
        "Standard fields required for Stripe Connect onboarding",
        PresetOverlay::new()
            .with_section(SectionKind::BusinessInfo, business_info)
            .with_section(SectionKind::Owners, owners)
            .with_section(SectionKind::Banking, banking),
    )
}

fn payrix() -> ConnectionPreset {
    let business_info = with_attachments(
        &[
            ("name", true, Some("Registered business name")),
            ("legalName", true, None),
            ("phone", true, Some("Business contact number")),
            ("website", true, Some("Business website or social media page")),
            ("tin", true, Some("Federal Tax ID (EIN) or SSN")),
            ("tinType", true, None),
            ("businessType", true, None),
            ("industry", true, None),
            ("mcc", true, Some("Industry classification code")),
            ("dateEstablished", true, Some("When the business was founded")),
            (
                "customerServicePhone",
                true,
                Some("Customer support phone for chargebacks and inquiries"),
            ),
        ],
        &[("determinationLetter501c3", false, None), ("form990", false, None)],
    );
    let owners = fields_only(&[
        ("firstName", true, None),
        ("middleName", false, None),
        ("lastName", true, None),
        ("businessTitle", true, Some("Officer title (Owner, CEO, President, etc.)")),
        ("ssn", true, Some("Social Security Number for KYC verification")),
        ("dateOfBirth", true, None),
        ("email", true, None),
        ("phone", true, None),
        ("homeAddressLine1", true, None),
        ("homeAddressLine2", false, None),
        ("homeCity", true, None),
        ("homeState", true, None),
        ("homePostalCode", true, None),
        ("homeCountry", true, None),
        ("driversLicenseNumber", true, None),
        ("driversLicenseState", true, None),
        ("driversLicenseExpiration", false, None),
    ]);
    let banking = fields_only(&[
        ("accountHolderName", true, None),
        ("bankAccountType", true, None),
        ("routingNumber", true, None),
        ("accountNumber", true, None),
    ]);
    preset(
        "payrix",
        "Payrix",
        "Required fields for Payrix merchant onboarding",
        PresetOverlay::new()
            .with_section(SectionKind::BusinessInfo, business_info)
            .with_section(SectionKind::Owners, owners)
            .with_section(SectionKind::Banking, banking),
    )
}

fn rainforest() -> ConnectionPreset {
    let business_info = fields_only(&[
        ("name", true, Some("Business name as it appears on documents")),
        ("legalName", true, None),
        ("phone", true, None),
        ("website", true, None),
        ("tin", true, None),
        ("tinType", true, None),
        ("businessType", true, Some("Corporate structure (LLC, Corp, etc.)")),
        ("industry", true, None),
        ("mcc", true, None),
        ("dateEstablished", false, None),
        (
            "customerServicePhone",
            true,
            Some("Phone number displayed on customer statements"),
        ),
    ]);
    let owners = with_attachments(
        &[
            ("firstName", true, None),
            ("middleName", false, None),
            ("lastName", true, None),
            ("businessTitle", true, None),
            ("ssn", true, None),
            ("dateOfBirth", true, Some("Owner must be at least 18 years old")),
            ("email", true, Some("Email for compliance notifications")),
            ("phone", true, None),
            ("homeAddressLine1", true, None),
            ("homeAddressLine2", false, None),
            ("homeCity", true, None),
            ("homeState", true, None),
            ("homePostalCode", true, None),
            ("homeCountry", true, None),
            ("driversLicenseNumber", false, None),
            ("driversLicenseState", false, None),
            ("driversLicenseExpiration", false, None),
            ("passportNumber", true, Some("Required for international business owners")),
            ("passportCountry", true, None),
            ("passportExpiration", true, None),
        ],
        &[(
            "id",
            true,
            Some("Government-issued ID (Driver's License or Passport)"),
        )],
    );
    let banking = fields_only(&[
        ("accountHolderName", true, Some("Must match business or owner name")),
        ("bankAccountType", true, None),
        ("routingNumber", true, None),
        ("accountNumber", true, None),
        ("bankName", true, Some("Financial institution name")),
    ]);
    preset(
        "rainforest",
        "Rainforest",
        "Rainforest payment processing requirements",
        PresetOverlay::new()
            .with_section(SectionKind::BusinessInfo, business_info)
            .with_section(SectionKind::Owners, owners)
            .with_section(SectionKind::Banking, banking),
    )
}

fn adyen() -> ConnectionPreset {
    let business_info = with_attachments(
        &[
            ("name", true, Some("Registered company name")),
            ("legalName", true, Some("Legal entity name (if different from trading name)")),
            ("phone", true, None),
            ("website", true, Some("Must be operational and match business description")),
            ("tin", true, Some("Tax identification number (format varies by country)")),
            ("tinType", true, None),
            ("businessType", true, None),
            ("industry", true, Some("Primary business activity")),
            ("mcc", true, Some("Select the MCC that best describes your business")),
            ("dateEstablished", true, Some("Company registration date")),
            ("customerServicePhone", true, None),
        ],
        &[("determinationLetter501c3", false, None), ("form990", false, None)],
    );
    let owners = with_attachments(
        &[
            ("firstName", true, None),
            ("middleName", true, Some("Required for enhanced verification")),
            ("lastName", true, None),
            ("businessTitle", true, Some("Must be an authorized signatory")),
            ("ssn", true, None),
            ("dateOfBirth", true, None),
            ("email", true, None),
            ("phone", true, Some("Direct contact number")),
            ("homeAddressLine1", true, None),
            ("homeAddressLine2", true, None),
            ("homeCity", true, None),
            ("homeState", true, None),
            ("homePostalCode", true, None),
            ("homeCountry", true, None),
            ("driversLicenseNumber", true, None),
            ("driversLicenseState", true, None),
            ("driversLicenseExpiration", true, None),
            ("passportNumber", true, Some("Alternative ID if no driver's license")),
            ("passportCountry", true, None),
            ("passportExpiration", true, None),
        ],
        &[(
            "id",
            true,
            Some("Clear color copy of government-issued photo ID"),
        )],
    );
    let banking = fields_only(&[
        ("accountHolderName", true, None),
        ("bankAccountType", true, None),
        (
            "routingNumber",
            true,
            Some("Bank routing number (US) or SWIFT code (International)"),
        ),
        ("accountNumber", true, Some("IBAN or local account number")),
        ("bankName", true, None),
    ]);
    let attachments = fields_only(&[
        (
            "businessLicense",
            true,
            Some("Current business license or registration certificate"),
        ),
        (
            "bankStatement",
            true,
            Some("Recent bank statement (within last 3 months)"),
        ),
        (
            "processingStatements",
            true,
            Some("Prior processing statements if switching from another processor"),
        ),
    ]);
    preset(
        "adyen",
        "Adyen",
        "Adyen merchant account setup requirements",
        PresetOverlay::new()
            .with_section(SectionKind::BusinessInfo, business_info)
            .with_section(SectionKind::Owners, owners)
            .with_section(SectionKind::Banking, banking)
            .with_section(SectionKind::Attachments, attachments),
    )
}

fn custom() -> ConnectionPreset {
    preset(
        CUSTOM_PRESET_ID,
        "Custom Configuration",
        "Start with a blank slate - configure fields manually",
        PresetOverlay::new(),
    )
}

/// The preset catalog, in display order. Immutable for the process lifetime.
pub static PRESET_CATALOG: LazyLock<Vec<ConnectionPreset>> =
    LazyLock::new(|| vec![stripe_connect(), payrix(), rainforest(), adyen(), custom()]);

/// Looks up a preset by id.
#[must_use]
pub fn find_preset(id: &str) -> Option<&'static ConnectionPreset> {
    PRESET_CATALOG.iter().find(|preset| preset.id == id)
}

/// Preset chosen in the quick-setup picker of one editing session.
///
/// Selecting an id that is not in the catalog is allowed; it simply resolves
/// to no preset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresetSelection {
    selected: Option<String>,
}

impl PresetSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, id: impl Into<String>) {
        self.selected = Some(id.into());
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The selected catalog entry, if the selection resolves to one.
    #[must_use]
    pub fn preset(&self) -> Option<&'static ConnectionPreset> {
        self.selected.as_deref().and_then(find_preset)
    }

    /// Display name of the selection, empty when nothing resolves.
    #[must_use]
    pub fn selected_preset_name(&self) -> &'static str {
        self.preset().map_or("", |preset| preset.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_and_unique_ids() {
        let ids: Vec<_> = PRESET_CATALOG.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["stripe_connect", "payrix", "rainforest", "adyen", "custom"]
        );
    }

    #[test]
    fn test_find_preset() {
        assert_eq!(find_preset("payrix").unwrap().name, "Payrix");
        assert!(find_preset("square").is_none());
        assert!(find_preset(CUSTOM_PRESET_ID).unwrap().fields.is_empty());
    }

    #[test]
    fn test_stripe_connect_business_info_overlay() {
        let preset = find_preset("stripe_connect").unwrap();
        let section = preset.fields.section(SectionKind::BusinessInfo).unwrap();
        let fields = section.fields.as_ref().unwrap();
        assert_eq!(fields.len(), 10);
        assert!(section.attachments.is_none());
        assert!(fields.values().all(|f| f.display));
        assert_eq!(
            fields["tin"].effective_sub_text(),
            Some("EIN or SSN for tax reporting (encrypted and secure)")
        );
        assert_eq!(fields["industry"].effective_sub_text(), None);
        assert!(preset.fields.section(SectionKind::Attachments).is_none());
    }

    #[test]
    fn test_payrix_hides_nonprofit_attachments() {
        let preset = find_preset("payrix").unwrap();
        let attachments = preset
            .fields
            .section(SectionKind::BusinessInfo)
            .and_then(|s| s.attachments.as_ref())
            .unwrap();
        assert!(!attachments["determinationLetter501c3"].display);
        assert!(!attachments["form990"].display);
    }

    #[test]
    fn test_selection() {
        let mut selection = PresetSelection::new();
        assert_eq!(selection.selected_preset_name(), "");

        selection.select("adyen");
        assert_eq!(selection.selected_preset_name(), "Adyen");
        assert_eq!(selection.selected_id(), Some("adyen"));

        selection.select("does-not-exist");
        assert_eq!(selection.selected_preset_name(), "");
        assert!(selection.preset().is_none());

        selection.clear();
        assert!(selection.selected_id().is_none());
    }
}
