mod common;

use std::io::Write;

use tempfile::NamedTempFile;
use transpane_core::error::TranspaneError;
use transpane_core::region::{load_regions, parse_regions, NormalizedBox, Region};

#[test]
fn test_parse_array_preserves_order() {
    let regions = parse_regions(common::SAMPLE_REGIONS_JSON).unwrap();
    assert_eq!(regions.len(), 2);
    assert_eq!(regions[0].original_text, "出口");
    assert_eq!(regions[0].translated_text, "Exit");
    assert_eq!(regions[0].bbox, NormalizedBox::new(100, 200, 300, 600));
    assert_eq!(regions[1].translated_text, "Tokyo Station");
}

#[test]
fn test_parse_wrapped_object_and_aliases() {
    let json = r#"{ "regions": [
        { "original_text": "a", "translated_text": "b", "box_2d": [1, 2, 3, 4] }
    ] }"#;
    let regions = parse_regions(json).unwrap();
    assert_eq!(regions, vec![Region::new("a", "b", NormalizedBox::new(1, 2, 3, 4))]);
}

#[test]
fn test_parse_rounds_float_coordinates() {
    let json = r#"[{ "translatedText": "x", "box": [10.4, 20.6, 300.0, 999.5] }]"#;
    let regions = parse_regions(json).unwrap();
    assert_eq!(regions[0].bbox, NormalizedBox::new(10, 21, 300, 1000));
    assert_eq!(regions[0].original_text, "");
}

#[test]
fn test_parse_keeps_out_of_grid_boxes_for_clamping() {
    let json = r#"[{ "translatedText": "x", "box": [-20, 0, 1100, 500] }]"#;
    let regions = parse_regions(json).unwrap();
    let b = regions[0].bbox;
    assert!(!b.is_well_formed());
    assert_eq!(b.clamped(), NormalizedBox::new(0, 0, 1000, 500));
}

#[test]
fn test_parse_empty_list() {
    assert!(parse_regions("[]").unwrap().is_empty());
}

#[test]
fn test_parse_rejects_malformed_json() {
    let err = parse_regions(r#"[{ "translatedText": "x", "box": [1, 2, 3] }]"#).unwrap_err();
    assert!(matches!(err, TranspaneError::RegionParse(_)));
}

#[test]
fn test_box_serializes_as_grid_array() {
    let region = Region::new("出口", "Exit", NormalizedBox::new(100, 200, 300, 600));
    let value = serde_json::to_value(&region).unwrap();
    assert_eq!(value["box"], serde_json::json!([100, 200, 300, 600]));
    assert_eq!(value["translatedText"], "Exit");
}

#[test]
fn test_load_regions_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(common::SAMPLE_REGIONS_JSON.as_bytes()).unwrap();
    file.flush().unwrap();

    let regions = load_regions(file.path()).unwrap();
    assert_eq!(regions.len(), 2);
}

#[test]
fn test_load_regions_missing_file() {
    let err = load_regions(std::path::Path::new("/nonexistent/regions.json")).unwrap_err();
    assert!(matches!(err, TranspaneError::Io(_)));
}
