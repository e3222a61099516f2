use std::io::Cursor;

use gleam_chart::ChartError;
use gleam_chart::core::{ColorTermRecord, DataSet};

fn record(term: &str, gleam: f64, luminosity: f64) -> ColorTermRecord {
    ColorTermRecord::new(term, "translit", "gloss", "context", gleam, luminosity)
}

#[test]
fn homeric_data_set_has_fourteen_unique_terms() {
    let data = DataSet::homeric().expect("bundled data");
    assert_eq!(data.len(), 14);

    let melas = data.get("μέλας").expect("μέλας");
    assert_eq!(melas.gleam_score, 1.0);
    assert_eq!(melas.luminosity_score, 1.0);
    assert!(data.contains("λευκός"));
    assert!(data.contains("ἀργός"));
    assert!(!data.contains("unknown"));
}

#[test]
fn bare_array_and_wrapped_object_both_load() {
    let bare = r#"[
        {"Greek_Term": "μέλας", "Transliteration": "melas", "English": "black",
         "Context": "black ships", "Unique_gleam_score": 1, "Luminosity_Score": 1}
    ]"#;
    let wrapped = format!(r#"{{"colour_scales": {bare}}}"#);

    let from_bare = DataSet::from_json_str(bare).expect("bare");
    let from_wrapped = DataSet::from_reader(Cursor::new(wrapped)).expect("wrapped");
    assert_eq!(from_bare, from_wrapped);
    assert_eq!(from_bare.records()[0].transliteration, "melas");
}

#[test]
fn malformed_json_is_a_load_error() {
    let err = DataSet::from_json_str("{not json").expect_err("malformed");
    assert!(matches!(err, ChartError::DataLoad(_)));

    let err = DataSet::from_path("does/not/exist.json").expect_err("missing file");
    assert!(matches!(err, ChartError::DataLoad(_)));
}

#[test]
fn invalid_records_reject_the_whole_set() {
    let err = DataSet::new(Vec::new()).expect_err("empty");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = DataSet::new(vec![record("a", 1.0, 1.0), record("a", 2.0, 2.0)])
        .expect_err("duplicate");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = DataSet::new(vec![record("a", 10.5, 1.0)]).expect_err("out of range");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = DataSet::new(vec![record("a", 1.0, f64::NAN)]).expect_err("nan");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = DataSet::new(vec![record(" ", 1.0, 1.0)]).expect_err("empty term");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn scores_on_the_domain_bounds_are_valid() {
    let data = DataSet::new(vec![record("low", 0.0, 0.0), record("high", 10.0, 10.0)])
        .expect("bounds are inclusive");
    assert_eq!(data.len(), 2);
}
