use visitmap::{App, AppError, Catalog, MapConfig, MemoryStorage, StoreError};

fn read_only(stored: &str) -> App<MemoryStorage> {
    let cfg = MapConfig::default();
    let mut storage = MemoryStorage::with_item(&cfg.storage_key, stored);
    storage.set_read_only(true);
    App::new(Catalog::builtin().unwrap(), storage, cfg).unwrap()
}

fn builtin(stored: Option<&str>) -> App<MemoryStorage> {
    let cfg = MapConfig::default();
    let storage = match stored {
        Some(v) => MemoryStorage::with_item(&cfg.storage_key, v),
        None => MemoryStorage::new(),
    };
    App::new(Catalog::builtin().unwrap(), storage, cfg).unwrap()
}

#[test]
fn builtin_catalog_shape() {
    let c = Catalog::builtin().unwrap();
    assert_eq!(c.subdivisions().len(), 7);
    assert_eq!(c.len(), 38);
    for m in c.municipalities() {
        assert!(c.subdivision(&m.subdivision_id).is_some(), "{} has no region", m.id);
        assert!(m.boundary.len() >= 3);
    }
    assert_eq!(c.subdivisions()[0].id, "Prishtina");
    assert!(c.contains("Pristina"));
    assert!(c.contains("Prizren"));
}

#[test]
fn resync_is_idempotent() {
    let app = builtin(Some(r#"["Pristina","Prizren"]"#));
    assert_eq!(app.view_state(), app.view_state());
    assert_eq!(app.to_svg(), app.to_svg());
    assert_eq!(app.scene(), app.scene());
}

#[test]
fn toggle_updates_every_projection() {
    let mut app = builtin(None);
    let before = app.view_state();
    assert_eq!(before.stats.visited, 0);

    let after = app.toggle("Peja").unwrap();
    assert_eq!(after.stats.visited, 1);
    assert_eq!(after.stats.percent, 3);
    let (_, style) = after.styles.iter().find(|(id, _)| id == "Peja").unwrap();
    assert_eq!(style.fill, "#16a34a");
    assert!(after.rows.iter().any(|r| r.id == "Peja" && r.visited));
    assert_eq!(app.store().storage().get(&app.config().storage_key), Some(r#"["Peja"]"#));

    let back = app.toggle("Peja").unwrap();
    assert_eq!(back, before);
}

#[test]
fn toggle_unknown_reports_and_changes_nothing() {
    let mut app = builtin(None);
    let before = app.view_state();
    assert!(matches!(app.toggle("Atlantis"), Err(StoreError::UnknownMunicipality(_))));
    assert_eq!(app.view_state(), before);
}

#[test]
fn panel_is_transient_and_detached_from_store() {
    let mut app = builtin(None);
    assert!(!app.panel_open());
    let writes = app.store().storage().writes();
    let view = app.view_state();
    assert!(app.toggle_panel());
    assert!(!app.toggle_panel());
    assert_eq!(app.store().storage().writes(), writes);
    assert_eq!(app.view_state(), view);
}

#[test]
fn reset_clears_everything() {
    let mut app = builtin(Some(r#"["Peja","Istog"]"#));
    let state = app.reset().unwrap();
    assert_eq!(state.stats.visited, 0);
    assert!(state.rows.iter().all(|r| !r.visited));
}

#[test]
fn list_groups_by_region_id() {
    let app = builtin(None);
    let regions: Vec<_> = app.view_state().rows.iter().map(|r| r.subdivision_id.clone()).collect();
    let mut sorted = regions.clone();
    sorted.sort();
    assert_eq!(regions, sorted);
    assert_eq!(regions.first().map(String::as_str), Some("Ferizaj"));
}

#[test]
fn failed_toggle_leaves_view_unchanged() {
    let mut app = read_only(r#"["Peja"]"#);
    let before = app.view_state();

    assert!(matches!(app.toggle("Peja"), Err(StoreError::Storage(_))));
    assert!(app.is_visited("Peja"));
    assert!(matches!(app.toggle("Istog"), Err(StoreError::Storage(_))));
    assert!(!app.is_visited("Istog"));

    assert_eq!(app.view_state(), before);
    assert_eq!(app.store().storage().get(&app.config().storage_key), Some(r#"["Peja"]"#));
}

#[test]
fn failed_reset_leaves_view_unchanged() {
    let mut app = read_only(r#"["Peja","Viti"]"#);
    let before = app.view_state();
    assert!(matches!(app.reset(), Err(StoreError::Storage(_))));
    assert_eq!(app.view_state(), before);
    assert_eq!(app.store().count(), 2);
}

#[test]
fn startup_fails_when_stale_state_cannot_be_healed() {
    let cfg = MapConfig::default();
    let mut storage = MemoryStorage::with_item(&cfg.storage_key, r#"["Peja","bogusId"]"#);
    storage.set_read_only(true);
    let err = App::new(Catalog::builtin().unwrap(), storage, cfg).err();
    assert!(matches!(err, Some(AppError::Store(StoreError::Storage(_)))));
}
