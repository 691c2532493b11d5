use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::section::{Bucket, SectionKind};

/// Sparse overlay entry for a single field.
///
/// Presets only ever carry display state and help text; constraint and enum
/// settings are never touched by a preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldOverlay {
    pub display: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_text: Option<String>,
}

impl FieldOverlay {
    #[must_use]
    pub const fn new(display: bool) -> Self {
        Self {
            display,
            sub_text: None,
        }
    }

    #[must_use]
    pub fn with_sub_text(mut self, sub_text: impl Into<String>) -> Self {
        self.sub_text = Some(sub_text.into());
        self
    }

    /// Help text to write, if the overlay carries a non-empty one.
    #[must_use]
    pub fn effective_sub_text(&self) -> Option<&str> {
        self.sub_text.as_deref().filter(|s| !s.is_empty())
    }
}

/// Overlay for one section. Absent buckets are not touched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionOverlay {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, FieldOverlay>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<BTreeMap<String, FieldOverlay>>,
}

impl SectionOverlay {
    #[must_use]
    pub fn bucket(&self, bucket: Bucket) -> Option<&BTreeMap<String, FieldOverlay>> {
        match bucket {
            Bucket::Fields => self.fields.as_ref(),
            Bucket::Attachments => self.attachments.as_ref(),
        }
    }

    /// Number of keys declared across both buckets.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.fields.as_ref().map_or(0, BTreeMap::len)
            + self.attachments.as_ref().map_or(0, BTreeMap::len)
    }
}

/// Sparse mapping from section to overlay. Sections without an entry are not
/// touched when the preset is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresetOverlay {
    sections: BTreeMap<SectionKind, SectionOverlay>,
}

impl PresetOverlay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_section(mut self, kind: SectionKind, overlay: SectionOverlay) -> Self {
        self.sections.insert(kind, overlay);
        self
    }

    #[must_use]
    pub fn section(&self, kind: SectionKind) -> Option<&SectionOverlay> {
        self.sections.get(&kind)
    }

    pub fn sections(&self) -> impl Iterator<Item = (SectionKind, &SectionOverlay)> {
        self.sections.iter().map(|(kind, overlay)| (*kind, overlay))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.values().all(|s| s.key_count() == 0)
    }
}

/// A named connection profile (typically a payment processor's required
/// field set) that can be bulk-applied to a template's custom form fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionPreset {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub fields: PresetOverlay,
}

/// Address of a leaf field in the custom form field tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FieldRef {
    pub section: SectionKind,
    pub bucket: Bucket,
    pub key: String,
}

impl FieldRef {
    #[must_use]
    pub fn new(section: SectionKind, bucket: Bucket, key: impl Into<String>) -> Self {
        Self {
            section,
            bucket,
            key: key.into(),
        }
    }
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.section, self.bucket, self.key)
    }
}

/// What a preset application wrote and which overlay keys had no live field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetReport {
    pub applied: Vec<FieldRef>,
    pub skipped: Vec<FieldRef>,
}

/// Why a preset application did nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PresetSkipReason {
    /// No preset is selected.
    NoSelection,
    /// The `custom` preset, which starts from a blank slate.
    Custom,
    /// The selected id is not in the catalog.
    UnknownPreset(String),
}

/// Result of applying a preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PresetOutcome {
    Applied { preset_name: String, report: PresetReport },
    Skipped(PresetSkipReason),
}

impl PresetOutcome {
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sub_text_is_not_effective() {
        assert_eq!(FieldOverlay::new(true).effective_sub_text(), None);
        assert_eq!(
            FieldOverlay::new(true).with_sub_text("").effective_sub_text(),
            None
        );
        assert_eq!(
            FieldOverlay::new(false)
                .with_sub_text("hint")
                .effective_sub_text(),
            Some("hint")
        );
    }

    #[test]
    fn test_overlay_emptiness() {
        assert!(PresetOverlay::new().is_empty());
        let overlay = PresetOverlay::new().with_section(
            SectionKind::Banking,
            SectionOverlay {
                fields: Some(BTreeMap::from([(
                    "routing".to_owned(),
                    FieldOverlay::new(true),
                )])),
                attachments: None,
            },
        );
        assert!(!overlay.is_empty());
        assert_eq!(overlay.section(SectionKind::Banking).unwrap().key_count(), 1);
        assert!(overlay.section(SectionKind::Owners).is_none());
    }

    #[test]
    fn test_field_ref_display() {
        let r = FieldRef::new(SectionKind::Owners, Bucket::Attachments, "idFront");
        assert_eq!(r.to_string(), "owners.attachments.idFront");
    }
}
