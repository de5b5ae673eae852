use std::rc::Rc;
use visitmap::{Catalog, MemoryStorage, Municipality, Point, StoreError, Subdivision, VisitedStore};

const KEY: &str = "test_visited";

fn square(x: f32, y: f32) -> Vec<Point> {
    vec![Point::new(x, y), Point::new(x + 10.0, y), Point::new(x + 10.0, y + 10.0), Point::new(x, y + 10.0)]
}

fn catalog() -> Rc<Catalog> {
    let subs = vec![Subdivision::new("A", "#111111", "Region A"), Subdivision::new("B", "#222222", "Region B")];
    let munis = vec![
        Municipality::new("validId1", "One", "A", square(0.0, 0.0)),
        Municipality::new("validId2", "Two", "B", square(20.0, 0.0)),
        Municipality::new("validId3", "Three", "B", square(40.0, 0.0)),
    ];
    Rc::new(Catalog::new(subs, munis).unwrap())
}

#[test]
fn absent_key_loads_empty_without_writing() {
    let store = VisitedStore::load(catalog(), MemoryStorage::new(), KEY).unwrap();
    assert_eq!(store.count(), 0);
    assert_eq!(store.storage().writes(), 0);
    assert_eq!(store.storage().get(KEY), None);
}

#[test]
fn load_drops_unknown_ids_and_rewrites() {
    let storage = MemoryStorage::with_item(KEY, r#"["validId1","bogusId","validId2"]"#);
    let store = VisitedStore::load(catalog(), storage, KEY).unwrap();
    assert!(store.contains("validId1"));
    assert!(store.contains("validId2"));
    assert!(!store.contains("bogusId"));
    assert_eq!(store.count(), 2);
    assert_eq!(store.storage().get(KEY), Some(r#"["validId1","validId2"]"#));
    assert_eq!(store.storage().writes(), 1);
}

#[test]
fn clean_data_is_not_rewritten() {
    let storage = MemoryStorage::with_item(KEY, r#"["validId2"]"#);
    let store = VisitedStore::load(catalog(), storage, KEY).unwrap();
    assert_eq!(store.count(), 1);
    assert_eq!(store.storage().writes(), 0);
}

#[test]
fn non_array_or_corrupt_data_recovers_to_empty() {
    for raw in [r#"{"validId1":true}"#, r#""validId1""#, "[1,2,3]", "not json", "null"] {
        let storage = MemoryStorage::with_item(KEY, raw);
        let store = VisitedStore::load(catalog(), storage, KEY).unwrap();
        assert_eq!(store.count(), 0, "input {raw}");
        assert_eq!(store.storage().get(KEY), Some("[]"), "input {raw}");
    }
}

#[test]
fn duplicates_collapse_and_heal() {
    let storage = MemoryStorage::with_item(KEY, r#"["validId1","validId1"]"#);
    let store = VisitedStore::load(catalog(), storage, KEY).unwrap();
    assert_eq!(store.count(), 1);
    assert_eq!(store.storage().get(KEY), Some(r#"["validId1"]"#));
}

#[test]
fn toggle_persists_every_change() {
    let mut store = VisitedStore::load(catalog(), MemoryStorage::new(), KEY).unwrap();
    assert_eq!(store.toggle("validId3"), Ok(true));
    assert_eq!(store.storage().get(KEY), Some(r#"["validId3"]"#));
    assert_eq!(store.toggle("validId1"), Ok(true));
    assert_eq!(store.storage().get(KEY), Some(r#"["validId1","validId3"]"#));
    assert_eq!(store.toggle("validId3"), Ok(false));
    assert_eq!(store.storage().get(KEY), Some(r#"["validId1"]"#));
    assert_eq!(store.storage().writes(), 3);
}

#[test]
fn double_toggle_restores_membership_and_storage() {
    let storage = MemoryStorage::with_item(KEY, r#"["validId1","validId2"]"#);
    let mut store = VisitedStore::load(catalog(), storage, KEY).unwrap();
    for id in ["validId1", "validId3"] {
        let before = store.contains(id);
        let stored = store.storage().get(KEY).map(str::to_string);
        store.toggle(id).unwrap();
        assert_ne!(store.contains(id), before);
        store.toggle(id).unwrap();
        assert_eq!(store.contains(id), before);
        assert_eq!(store.storage().get(KEY).map(str::to_string), stored);
    }
}

#[test]
fn unknown_id_is_a_no_op() {
    let mut store = VisitedStore::load(catalog(), MemoryStorage::new(), KEY).unwrap();
    let err = store.toggle("nowhere").unwrap_err();
    assert_eq!(err, StoreError::UnknownMunicipality("nowhere".into()));
    assert_eq!(store.count(), 0);
    assert_eq!(store.storage().writes(), 0);
}

#[test]
fn failed_write_rolls_back() {
    let mut storage = MemoryStorage::new();
    storage.set_read_only(true);
    let mut store = VisitedStore::load(catalog(), storage, KEY).unwrap();
    let err = store.toggle("validId1").unwrap_err();
    assert!(matches!(err, StoreError::Storage(_)));
    assert!(!store.contains("validId1"));
}

#[test]
fn state_survives_reload() {
    let mut store = VisitedStore::load(catalog(), MemoryStorage::new(), KEY).unwrap();
    store.toggle("validId2").unwrap();
    let storage = store.into_storage();
    let reloaded = VisitedStore::load(catalog(), storage, KEY).unwrap();
    assert!(reloaded.contains("validId2"));
    assert_eq!(reloaded.ids().collect::<Vec<_>>(), vec!["validId2"]);
}

#[test]
fn clear_empties_and_persists() {
    let storage = MemoryStorage::with_item(KEY, r#"["validId1","validId2"]"#);
    let mut store = VisitedStore::load(catalog(), storage, KEY).unwrap();
    store.clear().unwrap();
    assert_eq!(store.count(), 0);
    assert_eq!(store.storage().get(KEY), Some("[]"));
}

#[test]
fn failed_clear_keeps_the_set() {
    let mut storage = MemoryStorage::with_item(KEY, r#"["validId1","validId2"]"#);
    storage.set_read_only(true);
    let mut store = VisitedStore::load(catalog(), storage, KEY).unwrap();
    assert!(matches!(store.clear(), Err(StoreError::Storage(_))));
    assert_eq!(store.ids().collect::<Vec<_>>(), vec!["validId1", "validId2"]);
    assert_eq!(store.storage().get(KEY), Some(r#"["validId1","validId2"]"#));
}

#[test]
fn failed_unvisit_keeps_membership() {
    let mut storage = MemoryStorage::with_item(KEY, r#"["validId1"]"#);
    storage.set_read_only(true);
    let mut store = VisitedStore::load(catalog(), storage, KEY).unwrap();
    assert!(matches!(store.toggle("validId1"), Err(StoreError::Storage(_))));
    assert!(store.contains("validId1"));
    assert_eq!(store.to_json(), r#"["validId1"]"#);
}

#[test]
fn load_fails_when_healing_cannot_be_written() {
    for raw in [r#"["validId1","bogusId"]"#, "not json"] {
        let mut storage = MemoryStorage::with_item(KEY, raw);
        storage.set_read_only(true);
        let err = VisitedStore::load(catalog(), storage, KEY).err();
        assert!(matches!(err, Some(StoreError::Storage(_))), "input {raw}");
    }
}

#[test]
fn clean_data_loads_from_read_only_storage() {
    let mut storage = MemoryStorage::with_item(KEY, r#"["validId3"]"#);
    storage.set_read_only(true);
    let store = VisitedStore::load(catalog(), storage, KEY).unwrap();
    assert!(store.contains("validId3"));
    assert_eq!(store.storage().writes(), 0);
}
