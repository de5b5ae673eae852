use visitmap::list::list_rows;
use visitmap::{App, Catalog, MapConfig, MemoryStorage, Municipality, Point, Stats, Subdivision};

fn tri() -> Vec<Point> {
    vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)]
}

fn build(munis: Vec<Municipality>, stored: &str) -> App<MemoryStorage> {
    let subs = vec![Subdivision::new("A", "#000001", "A"), Subdivision::new("B", "#000002", "B")];
    let cfg = MapConfig::default();
    let storage = MemoryStorage::with_item(&cfg.storage_key, stored);
    App::new(Catalog::new(subs, munis).unwrap(), storage, cfg).unwrap()
}

#[test]
fn region_sorts_before_name() {
    let app = build(
        vec![
            Municipality::new("a", "Zed", "B", tri()),
            Municipality::new("b", "Alpha", "A", tri()),
        ],
        "[]",
    );
    let rows = list_rows(app.store());
    assert_eq!(rows[0].id, "b");
    assert_eq!(rows[1].id, "a");

    // region order wins even when names point the other way
    let app = build(
        vec![
            Municipality::new("b", "Alpha", "B", tri()),
            Municipality::new("a", "Zed", "A", tri()),
        ],
        "[]",
    );
    let ids: Vec<_> = list_rows(app.store()).into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn names_sort_locale_aware_within_region() {
    let app = build(
        vec![
            Municipality::new("m1", "Deçan", "A", tri()),
            Municipality::new("m2", "çair", "A", tri()),
            Municipality::new("m3", "Bardh", "A", tri()),
        ],
        "[]",
    );
    let names: Vec<_> = list_rows(app.store()).into_iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["Bardh", "çair", "Deçan"]);
}

#[test]
fn rows_flag_visited() {
    let app = build(
        vec![Municipality::new("a", "A", "A", tri()), Municipality::new("b", "B", "B", tri())],
        r#"["b"]"#,
    );
    let rows = list_rows(app.store());
    assert!(!rows[0].visited);
    assert!(rows[1].visited);
    assert_eq!(rows[1].class_name(), "city-item visited");
}

fn seven(stored: &str) -> App<MemoryStorage> {
    let munis = (0..7).map(|i| Municipality::new(format!("m{i}"), format!("M{i}"), "A", tri())).collect();
    build(munis, stored)
}

#[test]
fn completion_math() {
    assert_eq!(Stats::of(seven("[]").store()), Stats { visited: 0, total: 7, percent: 0 });
    let all = r#"["m0","m1","m2","m3","m4","m5","m6"]"#;
    assert_eq!(Stats::of(seven(all).store()).percent, 100);
    let one = Stats::of(seven(r#"["m3"]"#).store());
    assert_eq!(one.percent, 14);
    assert_eq!(one.percent_text(), "14%");
}

#[test]
fn empty_catalog_has_zero_percent() {
    let app = build(Vec::new(), "[]");
    assert_eq!(Stats::of(app.store()), Stats { visited: 0, total: 0, percent: 0 });
    assert!(list_rows(app.store()).is_empty());
}
