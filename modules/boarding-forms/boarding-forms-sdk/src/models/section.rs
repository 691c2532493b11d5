use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::field::FieldConfig;

/// Field key to configuration mapping for one bucket of a section.
pub type FieldMap = BTreeMap<String, FieldConfig>;

/// One of the four custom form field sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    BusinessInfo,
    Owners,
    Banking,
    Attachments,
}

impl SectionKind {
    /// All sections in display order.
    pub const ALL: [Self; 4] = [
        Self::BusinessInfo,
        Self::Owners,
        Self::Banking,
        Self::Attachments,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BusinessInfo => "businessInfo",
            Self::Owners => "owners",
            Self::Banking => "banking",
            Self::Attachments => "attachments",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for SectionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown section '{s}'"))
    }
}

/// Bucket within a section: regular data fields or document attachments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Bucket {
    Fields,
    Attachments,
}

impl Bucket {
    pub const ALL: [Self; 2] = [Self::Fields, Self::Attachments];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fields => "fields",
            Self::Attachments => "attachments",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Bucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|bucket| bucket.as_str() == s)
            .ok_or_else(|| format!("unknown bucket '{s}'"))
    }
}

/// A named grouping of configurable fields.
///
/// The `attachments` bucket is absent for sections that declare no
/// attachment keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub fields: FieldMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<FieldMap>,
}

impl Section {
    #[must_use]
    pub fn bucket(&self, bucket: Bucket) -> Option<&FieldMap> {
        match bucket {
            Bucket::Fields => Some(&self.fields),
            Bucket::Attachments => self.attachments.as_ref(),
        }
    }

    pub fn bucket_mut(&mut self, bucket: Bucket) -> Option<&mut FieldMap> {
        match bucket {
            Bucket::Fields => Some(&mut self.fields),
            Bucket::Attachments => self.attachments.as_mut(),
        }
    }

    #[must_use]
    pub fn field(&self, bucket: Bucket, key: &str) -> Option<&FieldConfig> {
        self.bucket(bucket).and_then(|map| map.get(key))
    }

    pub fn field_mut(&mut self, bucket: Bucket, key: &str) -> Option<&mut FieldConfig> {
        self.bucket_mut(bucket).and_then(|map| map.get_mut(key))
    }

    /// Iterates over every leaf, fields bucket first.
    pub fn leaves(&self) -> impl Iterator<Item = (Bucket, &str, &FieldConfig)> {
        let fields = self
            .fields
            .iter()
            .map(|(key, field)| (Bucket::Fields, key.as_str(), field));
        let attachments = self
            .attachments
            .iter()
            .flatten()
            .map(|(key, field)| (Bucket::Attachments, key.as_str(), field));
        fields.chain(attachments)
    }

    pub fn leaves_mut(&mut self) -> impl Iterator<Item = &mut FieldConfig> {
        self.fields
            .values_mut()
            .chain(self.attachments.iter_mut().flat_map(BTreeMap::values_mut))
    }
}

/// The four sections of administrator-configurable form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFormFields {
    pub business_info: Section,
    pub owners: Section,
    pub banking: Section,
    pub attachments: Section,
}

impl CustomFormFields {
    #[must_use]
    pub const fn section(&self, kind: SectionKind) -> &Section {
        match kind {
            SectionKind::BusinessInfo => &self.business_info,
            SectionKind::Owners => &self.owners,
            SectionKind::Banking => &self.banking,
            SectionKind::Attachments => &self.attachments,
        }
    }

    pub const fn section_mut(&mut self, kind: SectionKind) -> &mut Section {
        match kind {
            SectionKind::BusinessInfo => &mut self.business_info,
            SectionKind::Owners => &mut self.owners,
            SectionKind::Banking => &mut self.banking,
            SectionKind::Attachments => &mut self.attachments,
        }
    }

    /// Sections paired with their kind, in display order.
    pub fn sections(&self) -> impl Iterator<Item = (SectionKind, &Section)> {
        SectionKind::ALL
            .into_iter()
            .map(move |kind| (kind, self.section(kind)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::field::FieldShape;

    fn section_with(fields: &[&str], attachments: Option<&[&str]>) -> Section {
        let to_map = |keys: &[&str]| -> FieldMap {
            keys.iter()
                .map(|k| ((*k).to_owned(), FieldConfig::new(FieldShape::Basic)))
                .collect()
        };
        Section {
            fields: to_map(fields),
            attachments: attachments.map(to_map),
        }
    }

    #[test]
    fn test_section_kind_round_trips_through_str() {
        for kind in SectionKind::ALL {
            assert_eq!(kind.as_str().parse::<SectionKind>().unwrap(), kind);
        }
        assert!("payments".parse::<SectionKind>().is_err());
        assert_eq!("attachments".parse::<Bucket>().unwrap(), Bucket::Attachments);
    }

    #[test]
    fn test_missing_attachments_bucket() {
        let mut section = section_with(&["routing"], None);
        assert!(section.bucket(Bucket::Attachments).is_none());
        assert!(section.field_mut(Bucket::Attachments, "routing").is_none());
        assert!(section.field(Bucket::Fields, "routing").is_some());
    }

    #[test]
    fn test_leaves_visit_both_buckets() {
        let section = section_with(&["a", "b"], Some(&["c"]));
        let leaves: Vec<_> = section.leaves().map(|(b, k, _)| (b, k)).collect();
        assert_eq!(
            leaves,
            vec![
                (Bucket::Fields, "a"),
                (Bucket::Fields, "b"),
                (Bucket::Attachments, "c")
            ]
        );
    }

    #[test]
    fn test_section_without_attachments_omits_key_in_json() {
        let section = section_with(&["routing"], None);
        let json = serde_json::to_value(&section).unwrap();
        assert!(json.get("attachments").is_none());
        assert!(json["fields"]["routing"].is_object());
    }
}
