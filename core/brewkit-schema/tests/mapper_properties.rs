//! Property-based tests for the record mapper.
//!
//! - Empty collections survive a write/read cycle as present-but-empty
//! - N ordered children come back as N children in the same order

mod common;

use brewkit_schema::{ContainmentContext, ExportStatistics, Node, RecordReader, RecordWriter};
use common::{Batch, batch};
use proptest::prelude::*;

fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z][A-Za-z0-9 ]{0,20}").unwrap()
}

fn cycle(original: &Batch) -> (Node, Batch) {
    let mut statistics = ExportStatistics::new();
    let node = RecordWriter::new(&mut statistics)
        .write_record(original, ContainmentContext::standalone())
        .unwrap();
    let samples = node.get("samples").cloned().unwrap();
    let mut reader = RecordReader::new();
    let parsed = reader.read_record::<Batch>(&node, "batch").unwrap();
    (samples, parsed)
}

proptest! {
    #[test]
    fn child_order_is_preserved(names in prop::collection::vec(name_strategy(), 0..12)) {
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let original = batch("Prop", &refs);
        let (samples, parsed) = cycle(&original);

        prop_assert_eq!(samples.is_empty_marker(), names.is_empty());
        let parsed_names: Vec<String> = parsed.samples.iter().map(|s| s.name.clone()).collect();
        prop_assert_eq!(parsed_names, names);
    }

    #[test]
    fn measured_children_survive(temps in prop::collection::vec(-10.0f64..110.0, 1..6)) {
        let mut original = batch("Temps", &[]);
        original.samples = temps
            .iter()
            .enumerate()
            .map(|(i, t)| common::sample(&format!("s{i}"), *t))
            .collect();
        let (_, parsed) = cycle(&original);

        prop_assert_eq!(parsed.samples.len(), temps.len());
        for (sample, t) in parsed.samples.iter().zip(&temps) {
            prop_assert_eq!(sample.temperature, Some(*t));
        }
    }
}
