use brewkit_interchange::{
    ExportOptions, Format, InterchangeError, export_records, import_records, json,
};
use brewkit_model::{Mash, MashStep, MashStepType};
use brewkit_schema::{Node, SchemaError};
use pretty_assertions::assert_eq;
use serde_json::Value;

fn export_value(mashes: &[Mash]) -> Value {
    let text = export_records(mashes, Format::Json, &ExportOptions::compact())
        .unwrap()
        .text;
    serde_json::from_str(&text).unwrap()
}

#[test]
fn root_object_holds_version_and_sections() {
    let value = export_value(&[Mash::new("m")]);
    let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["version", "mashes"]);
    assert_eq!(value["version"].as_f64(), Some(1.0));
}

#[test]
fn empty_steps_are_an_empty_array() {
    let value = export_value(&[Mash::new("Empty")]);
    assert_eq!(value["mashes"][0]["mash_steps"], Value::Array(Vec::new()));

    let text = value.to_string();
    let parsed: Vec<Mash> = import_records(&text, Format::Json).unwrap();
    assert!(parsed[0].steps().is_empty());
}

#[test]
fn measured_values_are_objects() {
    let mut mash = Mash::new("m");
    mash.add_step(MashStep::new("Rest", MashStepType::Infusion, 66.5, 45.0));
    let value = export_value(&[mash]);
    let step = &value["mashes"][0]["mash_steps"][0];
    assert_eq!(step["step_temp"], serde_json::json!({"value": 66.5, "unit": "C"}));
    assert_eq!(step["type"], Value::String("infusion".into()));
}

#[test]
fn keys_follow_field_table_order() {
    let mut mash = Mash::new("m");
    mash.ph = Some(5.4);
    mash.notes = "n".into();
    let value = export_value(&[mash]);
    let keys: Vec<&str> = value["mashes"][0]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, vec!["id", "name", "ph", "notes", "mash_steps"]);
}

#[test]
fn bare_numbers_use_the_canonical_unit() {
    let text = r#"{"mashes": [{"name": "bare", "mash_steps": [{"step_temp": 64, "step_time": {"value": 1.5, "unit": "hr"}}]}]}"#;
    let parsed: Vec<Mash> = import_records(text, Format::Json).unwrap();
    let step = &parsed[0].steps()[0];
    assert_eq!(step.step_temp_c, 64.0);
    assert_eq!(step.step_time_min, 90.0);
}

#[test]
fn null_collection_reads_as_empty() {
    let text = r#"{"mashes": [{"name": "n", "mash_steps": null}]}"#;
    let parsed: Vec<Mash> = import_records(text, Format::Json).unwrap();
    assert!(parsed[0].steps().is_empty());
}

#[test]
fn non_finite_amount_is_reported_with_path() {
    let mut mash = Mash::new("m");
    mash.ph = Some(f64::NAN);
    let err = export_records(&[mash], Format::Json, &ExportOptions::default()).unwrap_err();
    let InterchangeError::NonFinite { path, .. } = err else {
        panic!("expected non-finite error, got {err:?}");
    };
    assert_eq!(path, "mashes[0]/ph");
}

#[test]
fn top_level_array_is_rejected() {
    let err = json::from_json("[1, 2]").unwrap_err();
    assert!(matches!(err, InterchangeError::Structure(_)), "{err:?}");
}

#[test]
fn syntax_errors_surface_as_json_errors() {
    let err = json::from_json("{\"mashes\": [").unwrap_err();
    assert!(matches!(err, InterchangeError::Json(_)), "{err:?}");
}

#[test]
fn unknown_choice_is_malformed() {
    let text = r#"{"mashes": [{"mash_steps": [{"type": "infusion"}, {"type": "boil over"}]}]}"#;
    let err = import_records::<Mash>(text, Format::Json).unwrap_err();
    let InterchangeError::Schema(SchemaError::Malformed(errors)) = err else {
        panic!("expected malformed document, got {err:?}");
    };
    assert!(errors.contains_path("mashes[0]/mash_steps[1]/type"), "{errors}");
}

#[test]
fn objects_parse_to_records() {
    let root = json::from_json(r#"{"version": 1, "mashes": []}"#).unwrap();
    assert_eq!(root.tag, "brewkit");
    assert_eq!(root.get("version"), Some(&Node::number(1.0)));
    assert_eq!(root.get("mashes"), Some(&Node::Empty));
}

#[test]
fn pretty_output_uses_configured_indent() {
    let options = ExportOptions {
        pretty: true,
        indent: 3,
    };
    let text = export_records(&[Mash::new("m")], Format::Json, &options).unwrap().text;
    assert!(text.starts_with("{\n   \"version\""), "{text}");
}
