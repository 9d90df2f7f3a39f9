use super::samples::sample_records;
use super::*;

#[test]
fn slugs_are_distinct_and_not_reserved() {
    let slugs: std::collections::BTreeSet<_> = EntityKind::ALL.into_iter().map(EntityKind::slug).collect();
    assert_eq!(slugs.len(), EntityKind::ALL.len());
    assert!(!slugs.contains("reports"));
    assert!(!slugs.contains("settings"));
}

#[test]
fn index_matches_position_in_all() {
    for (i, kind) in EntityKind::ALL.into_iter().enumerate() {
        assert_eq!(kind.index(), i);
    }
}

#[test]
fn descriptors_are_keyed_by_their_own_kind() {
    for kind in EntityKind::ALL {
        assert_eq!(kind.descriptor().kind, kind);
    }
}

#[test]
fn search_fields_exist_on_every_descriptor() {
    for kind in EntityKind::ALL {
        let descriptor = kind.descriptor();
        for key in descriptor.search_fields {
            assert!(descriptor.field(key).is_some(), "{key} missing on {:?}", kind);
        }
    }
}

#[test]
fn only_candidates_are_remote() {
    let remote: Vec<_> = EntityKind::ALL
        .into_iter()
        .filter(|kind| kind.descriptor().source == DataSource::Remote)
        .collect();
    assert_eq!(remote, vec![EntityKind::Candidate]);
}

#[test]
fn candidate_fields_match_the_wire_keys() {
    let keys: Vec<_> = EntityKind::Candidate.descriptor().fields.iter().map(|f| f.key).collect();
    assert_eq!(keys, vec!["name", "position", "phoneNumber", "email"]);
}

#[test]
fn sample_records_only_use_descriptor_fields() {
    for kind in EntityKind::ALL {
        let descriptor = kind.descriptor();
        for record in sample_records(kind) {
            for key in record.fields.keys() {
                assert!(descriptor.field(key).is_some(), "{key} not declared on {kind:?}");
            }
        }
    }
}

#[test]
fn sample_choice_values_are_valid_options() {
    for kind in EntityKind::ALL {
        let descriptor = kind.descriptor();
        for record in sample_records(kind) {
            for field in descriptor.fields {
                if let FieldInput::Choice(options) = field.input {
                    assert!(options.contains(&record.get(field.key)), "{kind:?}.{}", field.key);
                }
            }
        }
    }
}

#[test]
fn sample_sizes_match_seed_data() {
    let sizes: Vec<_> = EntityKind::ALL.into_iter().map(|kind| sample_records(kind).len()).collect();
    assert_eq!(sizes, vec![7, 7, 7, 4, 5, 5]);
}

#[test]
fn record_get_defaults_to_empty() {
    let record = Record::new(1, [("name", "Roy")]);
    assert_eq!(record.get("name"), "Roy");
    assert_eq!(record.get("email"), "");
}

#[test]
fn blank_draft_uses_initial_values() {
    let draft = Draft::blank(EntityKind::User.descriptor());
    assert_eq!(draft.get("name"), "");
    assert_eq!(draft.get("email"), "");
    assert_eq!(draft.get("role"), "Interviewee");
    assert_eq!(draft.get("status"), "On Progress");
}

#[test]
fn draft_from_record_keeps_only_descriptor_fields() {
    let record = Record::new(3, [("name", "Komeng Adul"), ("position", "FrontEnd"), ("extra", "x")]);
    let draft = Draft::from_record(EntityKind::Candidate.descriptor(), &record);
    assert_eq!(draft.get("name"), "Komeng Adul");
    assert_eq!(draft.get("phoneNumber"), "");
    assert!(!draft.fields().contains_key("extra"));

    let round = draft.into_record(3);
    assert_eq!(round.id, 3);
    assert_eq!(round.get("position"), "FrontEnd");
}

#[test]
fn html_types_follow_field_input() {
    assert_eq!(FieldInput::Email.html_type(), "email");
    assert_eq!(FieldInput::DateTime.html_type(), "datetime-local");
    assert_eq!(FieldInput::Time.html_type(), "time");
    assert_eq!(FieldInput::Phone.html_type(), "tel");
}
