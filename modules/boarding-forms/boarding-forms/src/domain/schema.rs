//! Static declaration of the custom form field tree.
//!
//! Every leaf belongs to exactly one section and one bucket and has exactly
//! one shape. Live templates are built from and checked against this table.

use boarding_forms_sdk::{
    Bucket, CustomFormFields, FieldConfig, FieldMap, FieldShape, Section, SectionKind,
};

use crate::domain::error::DomainError;

/// One declared leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub shape: FieldShape,
}

const fn basic(key: &'static str) -> FieldSpec {
    FieldSpec {
        key,
        shape: FieldShape::Basic,
    }
}

const fn constrained(key: &'static str) -> FieldSpec {
    FieldSpec {
        key,
        shape: FieldShape::WithConstraints,
    }
}

const fn enumerated(key: &'static str) -> FieldSpec {
    FieldSpec {
        key,
        shape: FieldShape::WithEnum,
    }
}

/// Declared buckets of one section. `attachments` is `None` when the section
/// has no attachments bucket at all.
#[derive(Debug)]
pub struct SectionSchema {
    pub kind: SectionKind,
    pub fields: &'static [FieldSpec],
    pub attachments: Option<&'static [FieldSpec]>,
}

impl SectionSchema {
    #[must_use]
    pub const fn bucket(&self, bucket: Bucket) -> Option<&'static [FieldSpec]> {
        match bucket {
            Bucket::Fields => Some(self.fields),
            Bucket::Attachments => self.attachments,
        }
    }

    /// Number of declared leaves across both buckets.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.fields.len() + self.attachments.map_or(0, <[FieldSpec]>::len)
    }
}

const BUSINESS_INFO_FIELDS: &[FieldSpec] = &[
    basic("annualSaleVolume"),
    basic("annualFinanceVolume"),
    basic("averageTicket"),
    basic("highTicket"),
    basic("customerServicePhone"),
    basic("dateEstablished"),
    basic("email"),
    basic("industry"),
    constrained("legalName"),
    constrained("name"),
    basic("phone"),
    basic("productServiceDescription"),
    basic("publicCompany"),
    basic("shipToDays"),
    basic("stateIncorporated"),
    constrained("tin"),
    enumerated("tinType"),
    enumerated("businessType"),
    basic("website"),
    basic("mcc"),
    basic("countryIncorporated"),
];

const BUSINESS_INFO_ATTACHMENTS: &[FieldSpec] = &[basic("determinationLetter501c3"), basic("form990")];

const OWNERS_FIELDS: &[FieldSpec] = &[
    basic("firstName"),
    basic("lastName"),
    basic("middleName"),
    constrained("businessTitle"),
    basic("citizenshipCountry"),
    basic("email"),
    basic("phone"),
    basic("dob"),
    basic("ssn"),
    basic("ssnLast4"),
    basic("ownershipPercent"),
    basic("ownershipDate"),
    basic("primaryRepresentative"),
    basic("significantResponsibility"),
    basic("politicallyExposed"),
    enumerated("type"),
    constrained("driversLicenseNumber"),
    basic("driversLicenseState"),
    basic("driversLicenseExpiration"),
];

const OWNERS_ATTACHMENTS: &[FieldSpec] = &[
    basic("id"),
    basic("idFront"),
    basic("idBack"),
    basic("utilityBill"),
];

const BANKING_FIELDS: &[FieldSpec] = &[
    basic("account"),
    basic("routing"),
    enumerated("accountType"),
    basic("accountName"),
    basic("nameOnAccount"),
    enumerated("country"),
    basic("primaryAccount"),
    basic("hasDisbursementHistory"),
];

const ATTACHMENTS_ATTACHMENTS: &[FieldSpec] = &[
    basic("businessLicense"),
    basic("ss4"),
    basic("other"),
    basic("proofOfEmployment"),
    basic("articlesOfIncorporation"),
];

/// The field schema, in display order.
pub static FIELD_SCHEMA: [SectionSchema; 4] = [
    SectionSchema {
        kind: SectionKind::BusinessInfo,
        fields: BUSINESS_INFO_FIELDS,
        attachments: Some(BUSINESS_INFO_ATTACHMENTS),
    },
    SectionSchema {
        kind: SectionKind::Owners,
        fields: OWNERS_FIELDS,
        attachments: Some(OWNERS_ATTACHMENTS),
    },
    SectionSchema {
        kind: SectionKind::Banking,
        fields: BANKING_FIELDS,
        attachments: None,
    },
    SectionSchema {
        kind: SectionKind::Attachments,
        fields: &[],
        attachments: Some(ATTACHMENTS_ATTACHMENTS),
    },
];

#[must_use]
pub fn section_schema(kind: SectionKind) -> &'static SectionSchema {
    match kind {
        SectionKind::BusinessInfo => &FIELD_SCHEMA[0],
        SectionKind::Owners => &FIELD_SCHEMA[1],
        SectionKind::Banking => &FIELD_SCHEMA[2],
        SectionKind::Attachments => &FIELD_SCHEMA[3],
    }
}

/// Declared shape of a leaf.
///
/// # Errors
///
/// `UnknownFieldKey` when the section has no such bucket or the bucket has no
/// such key.
pub fn shape_of(section: SectionKind, bucket: Bucket, key: &str) -> Result<FieldShape, DomainError> {
    section_schema(section)
        .bucket(bucket)
        .and_then(|specs| specs.iter().find(|spec| spec.key == key))
        .map(|spec| spec.shape)
        .ok_or_else(|| DomainError::unknown_field_key(section, bucket, key))
}

/// Default configuration of a declared leaf.
///
/// # Errors
///
/// `UnknownFieldKey` for undeclared leaves.
pub fn default_field(
    section: SectionKind,
    bucket: Bucket,
    key: &str,
) -> Result<FieldConfig, DomainError> {
    shape_of(section, bucket, key).map(FieldConfig::new)
}

fn blank_bucket(specs: &[FieldSpec]) -> FieldMap {
    specs
        .iter()
        .map(|spec| (spec.key.to_owned(), FieldConfig::new(spec.shape)))
        .collect()
}

/// A section with every declared leaf hidden and at its shape defaults.
#[must_use]
pub fn blank_section(kind: SectionKind) -> Section {
    let schema = section_schema(kind);
    Section {
        fields: blank_bucket(schema.fields),
        attachments: schema.attachments.map(blank_bucket),
    }
}

/// The full custom form field tree of a blank template.
#[must_use]
pub fn blank_custom_form_fields() -> CustomFormFields {
    CustomFormFields {
        business_info: blank_section(SectionKind::BusinessInfo),
        owners: blank_section(SectionKind::Owners),
        banking: blank_section(SectionKind::Banking),
        attachments: blank_section(SectionKind::Attachments),
    }
}
