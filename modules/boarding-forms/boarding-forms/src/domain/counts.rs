//! Enabled/total field counts shown in section headers.

use std::fmt;

use boarding_forms_sdk::{CustomFormFields, Section, SectionKind};
use serde::Serialize;

/// Number of displayed leaves out of all leaves of a section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FieldCount {
    pub enabled: usize,
    pub total: usize,
}

impl fmt::Display for FieldCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.enabled, self.total)
    }
}

/// Counts over `fields` plus `attachments` when the section has that bucket.
#[must_use]
pub fn enabled_field_count(section: &Section) -> FieldCount {
    section
        .leaves()
        .fold(FieldCount::default(), |mut count, (_, _, field)| {
            count.total += 1;
            if field.display {
                count.enabled += 1;
            }
            count
        })
}

/// Counts for all four sections, in display order.
#[must_use]
pub fn section_counts(fields: &CustomFormFields) -> Vec<(SectionKind, FieldCount)> {
    fields
        .sections()
        .map(|(kind, section)| (kind, enabled_field_count(section)))
        .collect()
}
