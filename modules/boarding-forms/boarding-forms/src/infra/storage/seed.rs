//! Mock records the in-memory stores start with.

use boarding_forms_sdk::{
    ApprovedDomains, ButtonStyle, Heading, PlatformProfile, PlatformSummary, Support, Template,
    TemplateSummary,
};
use time::macros::date;

use crate::domain::schema::blank_custom_form_fields;

#[must_use]
pub fn template_summaries() -> Vec<TemplateSummary> {
    [
        ("TPL-001", "Standard Employee Onboarding", "John Doe", date!(2024 - 01 - 15)),
        ("TPL-002", "Contractor Onboarding", "Jane Smith", date!(2024 - 02 - 20)),
        ("TPL-003", "Remote Worker Setup", "Bob Johnson", date!(2024 - 03 - 10)),
    ]
    .into_iter()
    .map(|(id, name, created_by, created_on)| TemplateSummary {
        id: id.to_owned(),
        name: name.to_owned(),
        created_by: created_by.to_owned(),
        created_on,
    })
    .collect()
}

/// Stored body of every seeded template.
///
/// Return and expiration URLs lack a scheme, so saving the sample unchanged
/// fails validation.
#[must_use]
pub fn sample_template(id: &str) -> Template {
    Template {
        id: Some(id.to_owned()),
        name: "Payrix Form".to_owned(),
        form_type: "KYC".to_owned(),
        domain: "https://boarding.dev.preczn.com".to_owned(),
        mcc_codes: ["7372", "1731", "1740", "1750"]
            .into_iter()
            .map(str::to_owned)
            .collect(),
        heading: Heading {
            title: "Payrix Form".to_owned(),
            title_color: "#4014be".to_owned(),
            accent_color: "#4014be".to_owned(),
            logo: String::new(),
        },
        button: ButtonStyle {
            text_color: "#edf0f5".to_owned(),
            accent_color: "#4014be".to_owned(),
        },
        return_url: "www.clayhefner.com".to_owned(),
        expiration_url: "www.clayhefner.com/expired".to_owned(),
        expiration_in_hours: 72,
        tos_url: String::new(),
        display_tos: true,
        display_new_user_login: true,
        auto_transmit_merchant_data: true,
        support: Support::default(),
        custom_form_fields: blank_custom_form_fields(),
    }
}

#[must_use]
pub fn platform_summaries() -> Vec<PlatformSummary> {
    [
        ("PLT-001", "Stripe Platform", 1_250_000, 3450, 45, 125, false),
        ("PLT-002", "Payrix Platform", 875_000, 2100, 32, 89, false),
        ("PLT-003", "Demo Platform", 50_000, 150, 5, 12, true),
        ("PLT-004", "Adyen Platform", 2_100_000, 5670, 78, 234, false),
        ("PLT-005", "Rainforest Platform", 650_000, 1890, 23, 67, false),
    ]
    .into_iter()
    .map(
        |(id, name, volume, transactions, rejects, connections, is_demo)| PlatformSummary {
            id: id.to_owned(),
            name: name.to_owned(),
            volume,
            transactions,
            rejects,
            connections,
            is_demo,
        },
    )
    .collect()
}

/// Editable profile behind a seeded platform row. The Stripe platform carries
/// a complete business profile; the others only their listing data.
#[must_use]
pub fn platform_profile(summary: &PlatformSummary) -> PlatformProfile {
    if summary.id == "PLT-001" {
        return stripe_profile(&summary.id);
    }
    PlatformProfile {
        id: Some(summary.id.clone()),
        name: summary.name.clone(),
        is_demo_platform: summary.is_demo,
        ..PlatformProfile::default()
    }
}

fn stripe_profile(id: &str) -> PlatformProfile {
    let approved_domains = ApprovedDomains::try_from(
        ["https://example.com", "https://app.stripe.com", "localhost:4200"]
            .into_iter()
            .map(str::to_owned)
            .collect::<Vec<_>>(),
    )
    .unwrap_or_default();
    PlatformProfile {
        id: Some(id.to_owned()),
        name: "Stripe Platform".to_owned(),
        business_legal_name: "Stripe, Inc.".to_owned(),
        address: "510 Townsend Street".to_owned(),
        address2: "Suite 200".to_owned(),
        country: "US".to_owned(),
        city: "San Francisco".to_owned(),
        region: "CA".to_owned(),
        postal: "94103".to_owned(),
        contact_name: "John Doe".to_owned(),
        is_test_platform: false,
        is_demo_platform: true,
        phone_number: "(555) 123-4567".to_owned(),
        default_mcc_code: "5812".to_owned(),
        mcc_codes: ["5812".to_owned(), "5814".to_owned()].into(),
        auto_enrich_merchant_records_live: true,
        auto_enrich_merchant_records_test: false,
        display_enrichment_data_on_forms: false,
        est_high_ticket: Some(500),
        est_average_ticket: Some(75),
        est_annual_sales_volume: Some(1_250_000),
        product_service_description: "Payment processing and financial services".to_owned(),
        approved_domains,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::validate_template;

    #[test]
    fn test_seed_sizes() {
        assert_eq!(template_summaries().len(), 3);
        assert_eq!(platform_summaries().len(), 5);
        assert_eq!(
            platform_summaries().iter().filter(|p| p.is_demo).count(),
            1
        );
    }

    #[test]
    fn test_sample_template_needs_url_fixes_before_save() {
        let violations = validate_template(&sample_template("TPL-001")).unwrap_err();
        let paths: Vec<_> = violations.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, vec!["returnUrl", "expirationUrl"]);
    }

    #[test]
    fn test_stripe_profile() {
        let profile = platform_profile(&platform_summaries()[0]);
        assert_eq!(profile.business_legal_name, "Stripe, Inc.");
        assert_eq!(profile.approved_domains.len(), 3);
        assert_eq!(profile.est_annual_sales_volume, Some(1_250_000));

        let demo = platform_profile(&platform_summaries()[2]);
        assert_eq!(demo.name, "Demo Platform");
        assert!(demo.is_demo_platform);
        assert!(demo.approved_domains.is_empty());
    }
}
