use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use time::Date;

use super::section::CustomFormFields;

/// Form heading appearance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Heading {
    pub title: String,
    pub title_color: String,
    pub accent_color: String,
    /// Data URL of the uploaded logo, empty when none.
    #[serde(default)]
    pub logo: String,
}

/// Submit button appearance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonStyle {
    pub text_color: String,
    pub accent_color: String,
}

/// Support contact shown on the merchant-facing form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Support {
    pub email: String,
    pub phone: String,
    pub url: String,
    pub text: String,
}

/// A boarding form template.
///
/// `id` is `None` until the template has been saved once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct Template {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    /// Form intent, e.g. `KYC`.
    #[serde(rename = "type")]
    pub form_type: String,
    pub domain: String,
    #[serde(default)]
    pub mcc_codes: BTreeSet<String>,
    pub heading: Heading,
    pub button: ButtonStyle,
    pub return_url: String,
    pub expiration_url: String,
    pub expiration_in_hours: u32,
    #[serde(default)]
    pub tos_url: String,
    pub display_tos: bool,
    pub display_new_user_login: bool,
    pub auto_transmit_merchant_data: bool,
    #[serde(default)]
    pub support: Support,
    pub custom_form_fields: CustomFormFields,
}

/// Row of the template listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSummary {
    pub id: String,
    pub name: String,
    pub created_by: String,
    pub created_on: Date,
}

/// Merchant Category Code option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MccCode {
    pub code: String,
    pub label: String,
}

/// A logo file as handed over by the upload collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl LogoFile {
    #[must_use]
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }
}
