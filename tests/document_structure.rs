use std::fs;

use serde_json::json;
use tempfile::TempDir;

use geoprops::{Document, ExtractError};

#[test]
fn parses_features_with_geometry_and_properties() {
    let raw = json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "geometry": {"type": "Polygon", "coordinates": [[[10.0, 36.0], [10.1, 36.0], [10.0, 36.1], [10.0, 36.0]]]},
            "properties": {"circo_na_1": "Tunis", "circo_id": 11},
        }],
    })
    .to_string();

    let document = Document::from_json_str(&raw).expect("parse");
    assert_eq!(document.feature_count(), 1);
    let feature = &document.features[0];
    assert!(feature.geometry.is_some());
    assert_eq!(feature.property("circo_na_1"), Some(&json!("Tunis")));
    assert_eq!(feature.property("circo_id"), Some(&json!(11)));
}

#[test]
fn document_label_tracks_origin() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("labeled.geojson");
    fs::write(&path, json!({"features": []}).to_string()).expect("fixture write");

    let from_file = Document::from_path(&path).expect("parse");
    assert_eq!(from_file.label(), path.display().to_string());

    let from_memory = Document::from_json_str("{\"features\": []}").expect("parse");
    assert_eq!(from_memory.label(), "<memory>");
}

#[test]
fn reader_parses_with_a_caller_supplied_label() {
    let raw = json!({"features": [{"properties": {"circo_na_1": "Sfax"}}]}).to_string();
    let document =
        Document::from_reader(raw.as_bytes(), "inline-fixture").expect("parse");
    assert_eq!(document.label(), "inline-fixture");
    assert_eq!(document.feature_count(), 1);
}

#[test]
fn structure_error_carries_the_document_label() {
    let err = Document::from_json_str("{\"type\": \"FeatureCollection\"}").unwrap_err();
    match err {
        ExtractError::Structure { label, details } => {
            assert_eq!(label, "<memory>");
            assert!(details.contains("features"));
        }
        other => panic!("expected structure error, got {other:?}"),
    }
}

#[test]
fn decode_error_surfaces_for_truncated_documents() {
    let err = Document::from_json_str("{\"features\": [{").unwrap_err();
    assert!(matches!(err, ExtractError::Decode { .. }));
}
