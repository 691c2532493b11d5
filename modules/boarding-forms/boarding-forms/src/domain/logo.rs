//! Logo upload checks and data URL encoding.

use base64::Engine;
use boarding_forms_sdk::{LogoFile, LogoRejection};

use crate::config::LogoUploadConfig;

/// Checks the file against the upload limits.
///
/// # Errors
///
/// `InvalidType` for MIME types outside the allow-list, `TooLarge` when the
/// payload exceeds `max_bytes`. Type is checked first.
pub fn check_logo(file: &LogoFile, limits: &LogoUploadConfig) -> Result<(), LogoRejection> {
    if !limits
        .allowed_mime_types
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(&file.mime_type))
    {
        return Err(LogoRejection::InvalidType {
            mime_type: file.mime_type.clone(),
        });
    }
    if file.bytes.len() > limits.max_bytes {
        return Err(LogoRejection::TooLarge {
            size: file.bytes.len(),
            max: limits.max_bytes,
        });
    }
    Ok(())
}

/// Encodes bytes as a `data:` URL.
#[must_use]
pub fn to_data_url(mime_type: &str, bytes: &[u8]) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{mime_type};base64,{encoded}")
}

/// Checks the file and returns the data URL to store on the template heading.
///
/// # Errors
///
/// See [`check_logo`].
pub fn encode_logo(file: &LogoFile, limits: &LogoUploadConfig) -> Result<String, LogoRejection> {
    check_logo(file, limits)?;
    Ok(to_data_url(&file.mime_type, &file.bytes))
}
