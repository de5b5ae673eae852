use serde_json::json;
use visitmap::geometry::coords::parse_coords;
use visitmap::{Catalog, CatalogError, Municipality, Point, Subdivision};

#[test]
fn json_catalog_accepts_strings_and_pairs() {
    let v = json!({
        "subdivisions": [{"id": "R", "color": "#123456", "name": "Region"}],
        "municipalities": [
            {"id": "a", "name": "A", "region": "R", "coords": "0,0,10,0,10,10"},
            {"id": "b", "name": "B", "region": "R", "coords": [[20, 0], [30, 0], [30, 10]]}
        ]
    });
    let c = Catalog::from_json_value(v).unwrap();
    assert_eq!(c.len(), 2);
    assert_eq!(c.municipality("b").unwrap().boundary[1], Point::new(30.0, 0.0));
    assert_eq!(c.subdivision("R").unwrap().color, "#123456");
}

#[test]
fn json_catalog_tolerates_dangling_region() {
    let s = r#"{"subdivisions":[],"municipalities":[{"id":"a","name":"A","region":"Nope","coords":"0,0,1,0,0,1"}]}"#;
    let c = Catalog::from_json_str(s).unwrap();
    assert!(c.subdivision("Nope").is_none());
    assert!(c.contains("a"));
}

#[test]
fn json_catalog_rejects_bad_input() {
    assert!(matches!(Catalog::from_json_str("{"), Err(CatalogError::Json(_))));
    assert!(matches!(Catalog::from_json_str(r#"{"subdivisions":[]}"#), Err(CatalogError::Json(_))));
    let odd = json!({"subdivisions": [], "municipalities": [{"id": "a", "name": "A", "region": "R", "coords": "0,0,1"}]});
    assert_eq!(Catalog::from_json_value(odd).unwrap_err(), CatalogError::OddCoordinateCount(3));
}

#[test]
fn duplicate_ids_rejected() {
    let tri = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)];
    let err = Catalog::new(
        vec![Subdivision::new("R", "#000", "R")],
        vec![Municipality::new("a", "A", "R", tri.clone()), Municipality::new("a", "A2", "R", tri)],
    )
    .unwrap_err();
    assert_eq!(err, CatalogError::DuplicateId { kind: "municipality", id: "a".into() });

    let err = Catalog::new(
        vec![Subdivision::new("R", "#000", "R"), Subdivision::new("R", "#fff", "R2")],
        Vec::new(),
    )
    .unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateId { kind: "subdivision", .. }));
}

#[test]
fn degenerate_boundary_rejected() {
    let err = Catalog::new(
        vec![Subdivision::new("R", "#000", "R")],
        vec![Municipality::new("a", "A", "R", parse_coords("0,0,1,1").unwrap())],
    )
    .unwrap_err();
    assert_eq!(err, CatalogError::DegenerateBoundary("a".into()));
    assert_eq!(err.to_string(), "municipality 'a' has fewer than 3 boundary points");
}

#[test]
fn builtin_ids_are_unique_and_named() {
    let c = Catalog::builtin().unwrap();
    for m in c.municipalities() {
        assert!(!m.display_name.is_empty());
        assert_eq!(c.municipality(&m.id).unwrap().display_name, m.display_name);
    }
}
