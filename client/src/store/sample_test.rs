use super::*;
use futures::executor::block_on;

fn candidate_draft(name: &str) -> Draft {
    let mut draft = Draft::blank(EntityKind::Candidate.descriptor());
    draft.set("name", name);
    draft.set("position", "QA");
    draft.set("phoneNumber", "0800");
    draft.set("email", "qa@example.com");
    draft
}

#[test]
fn seeded_store_loads_sample_collection() {
    let store = SampleStore::seeded(EntityKind::User);
    let records = block_on(store.load(&CancelToken::new())).unwrap();
    assert_eq!(records.len(), 7);
    assert_eq!(records[0].get("name"), "Roy Rohmat");
}

#[test]
fn create_appends_with_next_id() {
    let store = SampleStore::seeded(EntityKind::Candidate);
    let token = CancelToken::new();
    let created = block_on(store.create(candidate_draft("Sari"), &token)).unwrap();
    assert_eq!(created.id, 8);

    let records = block_on(store.load(&token)).unwrap();
    assert_eq!(records.len(), 8);
    assert_eq!(records.last(), Some(&created));
}

#[test]
fn create_in_empty_store_starts_at_one() {
    let store = SampleStore::new(EntityKind::Candidate, Vec::new());
    let created = block_on(store.create(candidate_draft("Sari"), &CancelToken::new())).unwrap();
    assert_eq!(created.id, 1);
}

#[test]
fn cancelled_token_short_circuits() {
    let store = SampleStore::seeded(EntityKind::Interview);
    let token = CancelToken::new();
    token.cancel();
    assert_eq!(block_on(store.load(&token)), Err(StoreError::Cancelled));
    assert_eq!(
        block_on(store.create(Draft::default(), &token)),
        Err(StoreError::Cancelled)
    );
    assert_eq!(block_on(store.load(&CancelToken::new())).unwrap().len(), 5);
}

#[test]
fn lookup_finds_by_id() {
    let store = SampleStore::seeded(EntityKind::TestScheduling);
    assert_eq!(store.lookup(2).map(|r| r.get("examiner").to_owned()), Some("Dr. Budi".to_owned()));
    assert_eq!(store.lookup(99), None);
}

#[test]
fn update_does_not_persist() {
    let store = SampleStore::seeded(EntityKind::User);
    let mut draft = Draft::from_record(EntityKind::User.descriptor(), &store.lookup(1).unwrap());
    draft.set("name", "Renamed");

    let updated = store.update(1, &draft);
    assert_eq!(updated.get("name"), "Renamed");
    assert_eq!(store.lookup(1).unwrap().get("name"), "Roy Rohmat");
}

#[test]
fn remove_drops_only_matching_record() {
    let store = SampleStore::seeded(EntityKind::PsychologicalTest);
    store.remove(3);
    let ids: Vec<_> = block_on(store.load(&CancelToken::new()))
        .unwrap()
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec![1, 2, 4, 5]);
}

#[test]
fn create_at_id_ceiling_does_not_overflow() {
    let store = SampleStore::new(EntityKind::Candidate, vec![Record::new(u32::MAX, [("name", "Last")])]);
    let created = block_on(store.create(candidate_draft("Next"), &CancelToken::new())).unwrap();
    assert_eq!(created.id, u32::MAX);
}
