//! Save-time validation of templates, platform profiles and field settings.
//!
//! Every check runs and every offending input is reported, so callers can
//! mark all of them at once.

use std::collections::HashSet;
use std::sync::LazyLock;

use boarding_forms_sdk::{
    Bucket, CustomFormFields, FieldConfig, FieldSettings, FieldShape, FieldViolation,
    PlatformProfile, Template,
};
use regex::Regex;

use crate::domain::schema::{section_schema, shape_of};

#[allow(clippy::expect_used)]
static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://.+").expect("static regex should not panic"));

#[allow(clippy::expect_used)]
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[\d\s\-()]+$").expect("static regex should not panic"));

#[allow(clippy::expect_used)]
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$",
    )
    .expect("static regex should not panic")
});

const REQUIRED: &str = "is required";
const BAD_URL: &str = "must start with http:// or https://";

#[must_use]
pub fn is_url(value: &str) -> bool {
    URL_PATTERN.is_match(value)
}

#[must_use]
pub fn is_phone(value: &str) -> bool {
    PHONE_PATTERN.is_match(value)
}

#[must_use]
pub fn is_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

#[derive(Default)]
struct Violations(Vec<FieldViolation>);

impl Violations {
    fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldViolation::new(path, message));
    }

    fn required(&mut self, path: &str, value: &str) {
        if value.trim().is_empty() {
            self.push(path, REQUIRED);
        }
    }

    fn required_url(&mut self, path: &str, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            self.push(path, REQUIRED);
        } else if !is_url(value) {
            self.push(path, BAD_URL);
        }
    }

    // Surrounding whitespace is not part of the value.
    fn optional(&mut self, path: &str, value: &str, check: fn(&str) -> bool, message: &str) {
        let value = value.trim();
        if !value.is_empty() && !check(value) {
            self.push(path, message);
        }
    }

    fn into_result(self) -> Result<(), Vec<FieldViolation>> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(self.0)
        }
    }
}

/// Checks a template before it is persisted.
///
/// # Errors
///
/// Every violation found, in form order.
pub fn validate_template(template: &Template) -> Result<(), Vec<FieldViolation>> {
    let mut v = Violations::default();

    v.required("name", &template.name);
    v.required("type", &template.form_type);
    v.required("domain", &template.domain);
    v.required("heading.title", &template.heading.title);
    v.required("heading.titleColor", &template.heading.title_color);
    v.required("heading.accentColor", &template.heading.accent_color);
    v.required("button.textColor", &template.button.text_color);
    v.required("button.accentColor", &template.button.accent_color);
    v.required_url("returnUrl", &template.return_url);
    v.required_url("expirationUrl", &template.expiration_url);
    if template.expiration_in_hours == 0 {
        v.push("expirationInHours", "must be greater than zero");
    }
    v.optional("tosUrl", &template.tos_url, is_url, BAD_URL);
    v.optional("support.email", &template.support.email, is_email, "must be a valid email address");
    v.optional("support.phone", &template.support.phone, is_phone, "must be a valid phone number");
    v.optional("support.url", &template.support.url, is_url, BAD_URL);

    v.0.extend(tree_violations(&template.custom_form_fields));

    v.into_result()
}

/// Checks a platform profile before it is persisted.
///
/// # Errors
///
/// Every violation found.
pub fn validate_platform(profile: &PlatformProfile) -> Result<(), Vec<FieldViolation>> {
    let mut v = Violations::default();
    v.required("name", &profile.name);
    v.into_result()
}

/// Checks a replacement field configuration against the declared shape.
///
/// # Errors
///
/// Every violation found, addressed under `path`.
pub fn validate_field_config(
    path: &str,
    expected: FieldShape,
    config: &FieldConfig,
) -> Result<(), Vec<FieldViolation>> {
    let mut v = Violations::default();
    field_violations(&mut v, path, expected, config);
    v.into_result()
}

fn field_violations(
    v: &mut Violations,
    path: &str,
    expected: FieldShape,
    config: &FieldConfig,
) {
    if config.shape() != expected {
        v.push(
            path,
            format!("expected a {expected} field, got {}", config.shape()),
        );
        return;
    }
    match &config.settings {
        FieldSettings::WithConstraints { field_constraints } => {
            if !field_constraints.has_valid_bounds() {
                v.push(
                    format!("{path}.fieldConstraints.minLength"),
                    "must not exceed maxLength",
                );
            }
        }
        FieldSettings::WithEnum { values } => {
            if values.iter().any(|value| value.trim().is_empty()) {
                v.push(format!("{path}.enum"), "values must not be empty");
            }
            let mut seen = HashSet::new();
            if !values.iter().all(|value| seen.insert(value.as_str())) {
                v.push(format!("{path}.enum"), "values must be unique");
            }
        }
        FieldSettings::Basic {} => {}
    }
}

/// Checks that a custom form field tree has exactly the declared leaves with
/// their declared shapes and valid settings.
fn tree_violations(tree: &CustomFormFields) -> Vec<FieldViolation> {
    let mut v = Violations::default();
    for (kind, section) in tree.sections() {
        for bucket in Bucket::ALL {
            let declared = section_schema(kind).bucket(bucket);
            let live = section.bucket(bucket);
            let prefix = format!("customFormFields.{kind}.{bucket}");

            if let Some(map) = live {
                for (key, config) in map {
                    let path = format!("{prefix}.{key}");
                    match shape_of(kind, bucket, key) {
                        Ok(shape) => field_violations(&mut v, &path, shape, config),
                        Err(_) => v.push(path, "is not a known field"),
                    }
                }
            }
            for spec in declared.unwrap_or_default() {
                if live.is_none_or(|map| !map.contains_key(spec.key)) {
                    v.push(format!("{prefix}.{}", spec.key), "is missing");
                }
            }
        }
    }
    v.0
}
