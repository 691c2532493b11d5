use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Shape of a configurable leaf field.
///
/// Every leaf in the custom form field tree has exactly one shape, fixed by
/// the static field schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldShape {
    /// Display flag and help text only.
    Basic,
    /// Basic plus character-class and length constraints.
    WithConstraints,
    /// Basic plus an ordered list of allowed values.
    WithEnum,
}

impl FieldShape {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::WithConstraints => "withConstraints",
            Self::WithEnum => "withEnum",
        }
    }
}

impl fmt::Display for FieldShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation attributes shared by all field shapes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayAttributes {
    /// Help text rendered under the field.
    #[serde(default)]
    pub sub_text: String,
}

/// Character-class and length constraints for free-text fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct FieldConstraints {
    pub allow_alpha: bool,
    pub allow_numeric: bool,
    pub allow_whitespace: bool,
    pub allowed_special_characters: String,
    pub min_length: u32,
    pub max_length: u32,
}

impl Default for FieldConstraints {
    /// Permissive defaults: every character class allowed, 1..=255 characters.
    fn default() -> Self {
        Self {
            allow_alpha: true,
            allow_numeric: true,
            allow_whitespace: true,
            allowed_special_characters: String::new(),
            min_length: 1,
            max_length: 255,
        }
    }
}

impl FieldConstraints {
    /// Returns `true` when the length bounds are ordered.
    #[must_use]
    pub const fn has_valid_bounds(&self) -> bool {
        self.min_length <= self.max_length
    }
}

/// Shape-specific settings of a field.
///
/// Serialized flattened into [`FieldConfig`], so a constrained field carries a
/// `fieldConstraints` object and an enumerated field carries an `enum` array.
/// The shape is picked by which of the two keys is present; a malformed value
/// under either key is an error, never a fallback to `Basic`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldSettings {
    WithConstraints {
        #[serde(rename = "fieldConstraints")]
        field_constraints: FieldConstraints,
    },
    WithEnum {
        #[serde(rename = "enum")]
        values: Vec<String>,
    },
    Basic {},
}

#[derive(Deserialize)]
struct RawFieldSettings {
    #[serde(rename = "fieldConstraints")]
    field_constraints: Option<FieldConstraints>,
    #[serde(rename = "enum")]
    values: Option<Vec<String>>,
}

impl<'de> Deserialize<'de> for FieldSettings {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawFieldSettings::deserialize(deserializer)?;
        match (raw.field_constraints, raw.values) {
            (Some(field_constraints), None) => Ok(Self::WithConstraints { field_constraints }),
            (None, Some(values)) => Ok(Self::WithEnum { values }),
            (None, None) => Ok(Self::Basic {}),
            (Some(_), Some(_)) => Err(D::Error::custom(
                "a field cannot carry both `fieldConstraints` and `enum`",
            )),
        }
    }
}

impl FieldSettings {
    /// Default settings for the given shape.
    #[must_use]
    pub fn for_shape(shape: FieldShape) -> Self {
        match shape {
            FieldShape::Basic => Self::Basic {},
            FieldShape::WithConstraints => Self::WithConstraints {
                field_constraints: FieldConstraints::default(),
            },
            FieldShape::WithEnum => Self::WithEnum { values: Vec::new() },
        }
    }

    #[must_use]
    pub const fn shape(&self) -> FieldShape {
        match self {
            Self::Basic {} => FieldShape::Basic,
            Self::WithConstraints { .. } => FieldShape::WithConstraints,
            Self::WithEnum { .. } => FieldShape::WithEnum,
        }
    }
}

/// Configuration of a single leaf field in the custom form field tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfig {
    /// Whether the merchant-facing form shows this field.
    pub display: bool,
    #[serde(default)]
    pub display_attributes: DisplayAttributes,
    #[serde(flatten)]
    pub settings: FieldSettings,
}

impl FieldConfig {
    /// Creates a hidden field with empty help text and shape defaults.
    #[must_use]
    pub fn new(shape: FieldShape) -> Self {
        Self {
            display: false,
            display_attributes: DisplayAttributes::default(),
            settings: FieldSettings::for_shape(shape),
        }
    }

    #[must_use]
    pub const fn shape(&self) -> FieldShape {
        self.settings.shape()
    }

    #[must_use]
    pub fn sub_text(&self) -> &str {
        &self.display_attributes.sub_text
    }

    pub fn set_sub_text(&mut self, sub_text: impl Into<String>) {
        self.display_attributes.sub_text = sub_text.into();
    }

    /// Constraints, if this is a constrained field.
    #[must_use]
    pub const fn constraints(&self) -> Option<&FieldConstraints> {
        match &self.settings {
            FieldSettings::WithConstraints { field_constraints } => Some(field_constraints),
            _ => None,
        }
    }

    /// Allowed values, if this is an enumerated field.
    #[must_use]
    pub fn enum_values(&self) -> Option<&[String]> {
        match &self.settings {
            FieldSettings::WithEnum { values } => Some(values),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_field_defaults_per_shape() {
        let basic = FieldConfig::new(FieldShape::Basic);
        assert!(!basic.display);
        assert_eq!(basic.sub_text(), "");
        assert!(basic.constraints().is_none());
        assert!(basic.enum_values().is_none());

        let constrained = FieldConfig::new(FieldShape::WithConstraints);
        let c = constrained.constraints().unwrap();
        assert!(c.allow_alpha && c.allow_numeric && c.allow_whitespace);
        assert_eq!(c.allowed_special_characters, "");
        assert_eq!((c.min_length, c.max_length), (1, 255));

        let enumerated = FieldConfig::new(FieldShape::WithEnum);
        assert_eq!(enumerated.enum_values(), Some(&[][..]));
        assert_eq!(enumerated.shape(), FieldShape::WithEnum);
    }

    #[test]
    fn test_constraints_serialize_under_field_constraints() {
        let mut field = FieldConfig::new(FieldShape::WithConstraints);
        field.display = true;
        field.set_sub_text("Legal name");

        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["display"], true);
        assert_eq!(json["displayAttributes"]["subText"], "Legal name");
        assert_eq!(json["fieldConstraints"]["maxLength"], 255);
        assert_eq!(json["fieldConstraints"]["allowedSpecialCharacters"], "");
    }

    #[test]
    fn test_deserialize_picks_shape_from_payload() {
        let with_enum: FieldConfig = serde_json::from_str(
            r#"{"display":true,"displayAttributes":{"subText":""},"enum":["EIN","SSN"]}"#,
        )
        .unwrap();
        assert_eq!(with_enum.shape(), FieldShape::WithEnum);
        assert_eq!(
            with_enum.enum_values().unwrap(),
            &["EIN".to_owned(), "SSN".to_owned()]
        );

        let basic: FieldConfig =
            serde_json::from_str(r#"{"display":false,"displayAttributes":{"subText":"x"}}"#)
                .unwrap();
        assert_eq!(basic.shape(), FieldShape::Basic);
        assert_eq!(basic.sub_text(), "x");
    }

    #[test]
    fn test_malformed_shape_settings_are_rejected() {
        let partial_constraints = serde_json::from_str::<FieldConfig>(
            r#"{"display":true,"displayAttributes":{"subText":""},"fieldConstraints":{"allowAlpha":true}}"#,
        );
        assert!(partial_constraints.is_err());

        let scalar_enum = serde_json::from_str::<FieldConfig>(r#"{"display":true,"enum":"EIN"}"#);
        assert!(scalar_enum.is_err());

        let both = serde_json::from_str::<FieldConfig>(
            r#"{"display":true,"enum":[],"fieldConstraints":{"allowAlpha":true,"allowNumeric":true,"allowWhitespace":true,"allowedSpecialCharacters":"","minLength":1,"maxLength":255}}"#,
        )
        .unwrap_err();
        assert!(both.to_string().contains("both"));
    }

    #[test]
    fn test_serialized_fields_read_back_with_their_shape() {
        for shape in [FieldShape::Basic, FieldShape::WithConstraints, FieldShape::WithEnum] {
            let field = FieldConfig::new(shape);
            let json = serde_json::to_string(&field).unwrap();
            let parsed: FieldConfig = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, field, "{shape}");
        }
    }

    #[test]
    fn test_bounds_check() {
        let mut c = FieldConstraints::default();
        assert!(c.has_valid_bounds());
        c.min_length = 10;
        c.max_length = 9;
        assert!(!c.has_valid_bounds());
    }
}
