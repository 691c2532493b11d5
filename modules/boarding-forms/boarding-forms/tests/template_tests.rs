#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Integration tests for the template lifecycle through the public API

mod common;

use boarding_forms::domain::session::{AdminMode, EditSession};
use boarding_forms_sdk::{
    BoardingFormsApi, BoardingFormsError, Bucket, EntityKind, FieldConfig, FieldShape, LogoFile,
    LogoRejection, SectionKind, SessionContext,
};
use common::{complete_template, create_client, create_service};

// =============================================================================
// Listing and loading
// =============================================================================

#[tokio::test]
async fn test_seeded_templates_are_listed_in_order() {
    let client = create_client();
    let ids: Vec<_> = client
        .list_templates(&SessionContext::regular())
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(ids, vec!["TPL-001", "TPL-002", "TPL-003"]);
}

#[tokio::test]
async fn test_unknown_template_is_not_found() {
    let client = create_client();
    let ctx = SessionContext::admin();

    let err = client.get_template(&ctx, "TPL-999").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "template not found: TPL-999");

    let err = client.delete_template(&ctx, "TPL-999").await.unwrap_err();
    assert!(matches!(
        err,
        BoardingFormsError::NotFound {
            kind: EntityKind::Template,
            ..
        }
    ));
}

// =============================================================================
// Saving
// =============================================================================

#[tokio::test]
async fn test_seeded_template_needs_fixing_before_save() {
    let client = create_client();
    let ctx = SessionContext::admin();
    let mut template = client.get_template(&ctx, "TPL-001").await.unwrap();

    let err = client
        .save_template(&ctx, template.clone())
        .await
        .unwrap_err();
    assert!(err.is_validation());
    let paths: Vec<_> = err.violations().unwrap().iter().map(|v| v.path.clone()).collect();
    assert_eq!(paths, vec!["returnUrl", "expirationUrl"]);

    template.return_url = "https://www.clayhefner.com".to_owned();
    template.expiration_url = "https://www.clayhefner.com/expired".to_owned();
    let saved = client.save_template(&ctx, template).await.unwrap();
    assert_eq!(saved.id.as_deref(), Some("TPL-001"));
}

#[tokio::test]
async fn test_edit_session_tracks_unsaved_changes() {
    let service = create_service();
    let mut session = EditSession::new(complete_template(&service));
    assert!(!session.has_unsaved_changes());

    service
        .apply_preset(
            &SessionContext::admin(),
            session.value_mut(),
            Some("stripe_connect"),
        )
        .unwrap();
    assert!(session.has_unsaved_changes());

    let saved = service.save_template(session.value().clone()).await.unwrap();
    session.mark_saved(saved);
    assert!(!session.has_unsaved_changes());
    assert!(session.value().id.is_some());
}

#[tokio::test]
async fn test_invalid_optional_inputs_are_reported() {
    let service = create_service();
    let mut template = complete_template(&service);
    template.tos_url = "terms".to_owned();
    template.support.email = "help@".to_owned();
    template.support.phone = "call us".to_owned();
    template.expiration_in_hours = 0;

    let err = BoardingFormsError::from(service.save_template(template).await.unwrap_err());
    let paths: Vec<_> = err.violations().unwrap().iter().map(|v| v.path.as_str()).collect();
    assert_eq!(
        paths,
        vec!["expirationInHours", "tosUrl", "support.email", "support.phone"]
    );
}

// =============================================================================
// Field configuration and admin mode
// =============================================================================

#[tokio::test]
async fn test_field_configuration_follows_admin_mode() {
    let client = create_client();
    let admin_mode = AdminMode::default();
    let mut template = client.new_template(&admin_mode.context()).await.unwrap();

    let mut config = FieldConfig::new(FieldShape::WithConstraints);
    config.display = true;
    config.set_sub_text("As shown on your government ID");

    let err = client
        .configure_field(
            &admin_mode.context(),
            &mut template,
            SectionKind::Owners,
            Bucket::Fields,
            "driversLicenseNumber",
            config.clone(),
        )
        .await
        .unwrap_err();
    assert!(err.is_forbidden());

    admin_mode.set(true);
    client
        .configure_field(
            &admin_mode.context(),
            &mut template,
            SectionKind::Owners,
            Bucket::Fields,
            "driversLicenseNumber",
            config.clone(),
        )
        .await
        .unwrap();
    assert_eq!(
        template
            .custom_form_fields
            .owners
            .field(Bucket::Fields, "driversLicenseNumber"),
        Some(&config)
    );

    let err = client
        .configure_field(
            &admin_mode.context(),
            &mut template,
            SectionKind::Owners,
            Bucket::Fields,
            "passportNumber",
            FieldConfig::new(FieldShape::Basic),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, BoardingFormsError::UnknownFieldKey { .. }));
}

// =============================================================================
// Logo
// =============================================================================

#[tokio::test]
async fn test_logo_limits() {
    let client = create_client();
    let ctx = SessionContext::regular();
    let mut template = client.new_template(&ctx).await.unwrap();

    let at_limit = LogoFile::new("logo.jpg", "image/jpeg", vec![0; 2 * 1024 * 1024]);
    client.upload_logo(&ctx, &mut template, at_limit).await.unwrap();
    assert!(template.heading.logo.starts_with("data:image/jpeg;base64,"));

    let too_large = LogoFile::new("logo.png", "image/png", vec![0; 2 * 1024 * 1024 + 1]);
    let err = client
        .upload_logo(&ctx, &mut template, too_large)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        BoardingFormsError::InvalidLogo(LogoRejection::TooLarge { .. })
    ));
    assert!(template.heading.logo.starts_with("data:image/jpeg;base64,"));

    client.remove_logo(&ctx, &mut template).await.unwrap();
    assert!(template.heading.logo.is_empty());
}
