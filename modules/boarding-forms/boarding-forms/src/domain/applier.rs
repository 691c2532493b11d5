//! Merges a preset overlay onto a live custom form field tree.

use boarding_forms_sdk::{
    Bucket, CustomFormFields, FieldRef, PresetOutcome, PresetOverlay, PresetReport,
    PresetSkipReason, SectionKind,
};
use tracing::debug;

use crate::config::PresetSwitchPolicy;
use crate::domain::presets::{CUSTOM_PRESET_ID, find_preset};

/// Writes the overlay onto `fields`.
///
/// For every key the overlay declares and the live tree has, `display` is
/// set verbatim and `subText` is replaced only when the overlay carries a
/// non-empty one. Keys the overlay does not declare are left alone. Overlay
/// keys without a live field are reported as skipped.
pub fn apply_overlay(fields: &mut CustomFormFields, overlay: &PresetOverlay) -> PresetReport {
    let mut report = PresetReport::default();

    for (kind, section_overlay) in overlay.sections() {
        let section = fields.section_mut(kind);
        for bucket in Bucket::ALL {
            let Some(entries) = section_overlay.bucket(bucket) else {
                continue;
            };
            let mut live = section.bucket_mut(bucket);
            for (key, entry) in entries {
                let target = live.as_deref_mut().and_then(|map| map.get_mut(key));
                let field_ref = FieldRef::new(kind, bucket, key.as_str());
                let Some(field) = target else {
                    debug!(field = %field_ref, "preset key has no live field, skipping");
                    report.skipped.push(field_ref);
                    continue;
                };
                field.display = entry.display;
                if let Some(sub_text) = entry.effective_sub_text() {
                    field.set_sub_text(sub_text);
                }
                report.applied.push(field_ref);
            }
        }
    }

    report
}

/// Hides every leaf, keeping help text and shape settings.
pub fn hide_all(fields: &mut CustomFormFields) {
    for kind in SectionKind::ALL {
        for field in fields.section_mut(kind).leaves_mut() {
            field.display = false;
        }
    }
}

/// Resolves the selection against the catalog and applies it.
///
/// No selection, `custom`, and ids missing from the catalog leave the tree
/// untouched.
pub fn apply_selected(
    fields: &mut CustomFormFields,
    preset_id: Option<&str>,
    policy: PresetSwitchPolicy,
) -> PresetOutcome {
    let Some(id) = preset_id else {
        return PresetOutcome::Skipped(PresetSkipReason::NoSelection);
    };
    if id == CUSTOM_PRESET_ID {
        return PresetOutcome::Skipped(PresetSkipReason::Custom);
    }
    let Some(preset) = find_preset(id) else {
        debug!(preset_id = id, "preset not in catalog, nothing applied");
        return PresetOutcome::Skipped(PresetSkipReason::UnknownPreset(id.to_owned()));
    };

    if policy == PresetSwitchPolicy::ResetThenApply {
        hide_all(fields);
    }
    let report = apply_overlay(fields, &preset.fields);
    PresetOutcome::Applied {
        preset_name: preset.name.clone(),
        report,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use boarding_forms_sdk::{FieldOverlay, FieldSettings, SectionOverlay};
    use tracing_test::traced_test;

    use super::*;
    use crate::domain::schema::blank_custom_form_fields;

    fn banking_overlay(entries: &[(&str, FieldOverlay)]) -> PresetOverlay {
        PresetOverlay::new().with_section(
            SectionKind::Banking,
            SectionOverlay {
                fields: Some(
                    entries
                        .iter()
                        .map(|(k, v)| ((*k).to_owned(), v.clone()))
                        .collect::<BTreeMap<_, _>>(),
                ),
                attachments: None,
            },
        )
    }

    #[test]
    fn test_display_is_written_verbatim() {
        let mut fields = blank_custom_form_fields();
        fields.banking.fields.get_mut("routing").unwrap().display = true;

        let overlay = banking_overlay(&[
            ("routing", FieldOverlay::new(false)),
            ("account", FieldOverlay::new(true)),
        ]);
        apply_overlay(&mut fields, &overlay);

        assert!(!fields.banking.fields["routing"].display);
        assert!(fields.banking.fields["account"].display);
    }

    #[test]
    fn test_sub_text_kept_when_overlay_has_none_or_empty() {
        let mut fields = blank_custom_form_fields();
        fields
            .banking
            .fields
            .get_mut("routing")
            .unwrap()
            .set_sub_text("custom hint");
        fields
            .banking
            .fields
            .get_mut("account")
            .unwrap()
            .set_sub_text("another hint");

        let overlay = banking_overlay(&[
            ("routing", FieldOverlay::new(true)),
            ("account", FieldOverlay::new(true).with_sub_text("")),
            ("accountName", FieldOverlay::new(true).with_sub_text("Preset hint")),
        ]);
        apply_overlay(&mut fields, &overlay);

        assert_eq!(fields.banking.fields["routing"].sub_text(), "custom hint");
        assert_eq!(fields.banking.fields["account"].sub_text(), "another hint");
        assert_eq!(fields.banking.fields["accountName"].sub_text(), "Preset hint");
    }

    #[test]
    fn test_constraints_are_never_touched() {
        let mut fields = blank_custom_form_fields();
        let mut expected = None;
        if let Some(field) = fields.business_info.fields.get_mut("name")
            && let FieldSettings::WithConstraints { field_constraints } =
                &mut field.settings
        {
            field_constraints.max_length = 40;
            expected = Some(field_constraints.clone());
        }

        apply_selected(&mut fields, Some("stripe_connect"), PresetSwitchPolicy::Overlay);

        assert_eq!(
            fields.business_info.fields["name"].constraints(),
            expected.as_ref()
        );
    }

    #[traced_test]
    #[test]
    fn test_unknown_keys_are_reported_and_logged() {
        let mut fields = blank_custom_form_fields();
        let overlay = banking_overlay(&[
            ("routing", FieldOverlay::new(true)),
            ("routingNumber", FieldOverlay::new(true)),
        ]);

        let report = apply_overlay(&mut fields, &overlay);

        assert_eq!(
            report.applied,
            vec![FieldRef::new(SectionKind::Banking, Bucket::Fields, "routing")]
        );
        assert_eq!(
            report.skipped,
            vec![FieldRef::new(SectionKind::Banking, Bucket::Fields, "routingNumber")]
        );
        assert!(logs_contain("banking.fields.routingNumber"));
    }

    #[test]
    fn test_missing_bucket_skips_every_key() {
        let mut fields = blank_custom_form_fields();
        let overlay = PresetOverlay::new().with_section(
            SectionKind::Banking,
            SectionOverlay {
                fields: None,
                attachments: Some(BTreeMap::from([(
                    "voidedCheck".to_owned(),
                    FieldOverlay::new(true),
                )])),
            },
        );

        let report = apply_overlay(&mut fields, &overlay);

        assert!(report.applied.is_empty());
        assert_eq!(report.skipped.len(), 1);
        assert!(fields.banking.attachments.is_none());
    }

    #[test]
    fn test_selection_outcomes() {
        let mut fields = blank_custom_form_fields();
        let blank = fields.clone();

        assert_eq!(
            apply_selected(&mut fields, None, PresetSwitchPolicy::Overlay),
            PresetOutcome::Skipped(PresetSkipReason::NoSelection)
        );
        assert_eq!(
            apply_selected(&mut fields, Some("custom"), PresetSwitchPolicy::ResetThenApply),
            PresetOutcome::Skipped(PresetSkipReason::Custom)
        );
        assert_eq!(
            apply_selected(&mut fields, Some("square"), PresetSwitchPolicy::Overlay),
            PresetOutcome::Skipped(PresetSkipReason::UnknownPreset("square".to_owned()))
        );
        assert_eq!(fields, blank);
    }

    #[test]
    fn test_switch_policy() {
        // rainforest enables owners.id; payrix does not declare owners attachments.
        let mut overlaid = blank_custom_form_fields();
        apply_selected(&mut overlaid, Some("rainforest"), PresetSwitchPolicy::Overlay);
        apply_selected(&mut overlaid, Some("payrix"), PresetSwitchPolicy::Overlay);
        assert!(overlaid.owners.attachments.as_ref().unwrap()["id"].display);

        let mut reset = blank_custom_form_fields();
        apply_selected(&mut reset, Some("rainforest"), PresetSwitchPolicy::Overlay);
        apply_selected(&mut reset, Some("payrix"), PresetSwitchPolicy::ResetThenApply);
        let id = &reset.owners.attachments.as_ref().unwrap()["id"];
        assert!(!id.display);
        assert_eq!(
            id.sub_text(),
            "Government-issued ID (Driver's License or Passport)"
        );
    }

    #[test]
    fn test_hide_all() {
        let mut fields = blank_custom_form_fields();
        apply_selected(&mut fields, Some("adyen"), PresetSwitchPolicy::Overlay);
        hide_all(&mut fields);
        assert!(
            fields
                .sections()
                .all(|(_, s)| s.leaves().all(|(_, _, f)| !f.display))
        );
    }
}
