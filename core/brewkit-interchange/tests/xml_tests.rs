use brewkit_interchange::{
    ExportOptions, Format, InterchangeError, export_records, import_records, xml,
};
use brewkit_model::{Mash, MashStep, MashStepType};
use brewkit_schema::{Node, RecordNode, SchemaError};
use pretty_assertions::assert_eq;

fn compact(mashes: &[Mash]) -> String {
    export_records(mashes, Format::Xml, &ExportOptions::compact())
        .unwrap()
        .text
}

fn three_step_mash() -> Mash {
    let mut mash = Mash::new("Single Infusion");
    mash.add_step(MashStep::new("Dough In", MashStepType::Infusion, 40.0, 10.0))
        .add_step(MashStep::new("Saccharification", MashStepType::Temperature, 67.0, 60.0))
        .add_step(MashStep::new("Mash Out", MashStepType::Temperature, 76.0, 10.0));
    mash
}

// ── Writing ──────────────────────────────────────────────────────

#[test]
fn document_starts_with_declaration_and_root() {
    let text = compact(&[Mash::new("m")]);
    assert!(text.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?><BREWKIT><VERSION>1</VERSION><MASHES><MASH>"#));
    assert!(text.ends_with("</MASHES></BREWKIT>"));
}

#[test]
fn empty_step_collection_writes_none_marker() {
    let text = compact(&[Mash::new("Empty")]);
    assert!(text.contains("<MASH_STEPS><!-- None --></MASH_STEPS>"), "{text}");
}

#[test]
fn empty_section_writes_none_marker() {
    let text = compact(&[]);
    assert!(text.contains("<MASHES><!-- None --></MASHES>"), "{text}");
}

#[test]
fn steps_are_written_in_order() {
    let text = compact(&[three_step_mash()]);
    let positions: Vec<usize> = ["Dough In", "Saccharification", "Mash Out"]
        .iter()
        .map(|name| text.find(&format!("<NAME>{name}</NAME>")).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    assert_eq!(text.matches("<MASH_STEP>").count(), 3);
}

#[test]
fn measured_values_carry_unit_attribute() {
    let text = compact(&[three_step_mash()]);
    assert!(text.contains(r#"<STEP_TEMP unit="C">67</STEP_TEMP>"#), "{text}");
    assert!(text.contains(r#"<STEP_TIME unit="min">60</STEP_TIME>"#), "{text}");
    assert!(text.contains("<TYPE>temperature</TYPE>"), "{text}");
}

#[test]
fn text_is_escaped() {
    let mut mash = Mash::new("Rye & <Oats>");
    mash.notes = "stir \"well\"".into();
    let text = compact(std::slice::from_ref(&mash));
    assert!(text.contains("<NAME>Rye &amp; &lt;Oats&gt;</NAME>"), "{text}");

    let parsed: Vec<Mash> = import_records(&text, Format::Xml).unwrap();
    assert_eq!(parsed[0].name, "Rye & <Oats>");
    assert_eq!(parsed[0].notes, "stir \"well\"");
}

#[test]
fn pretty_output_is_indented() {
    let options = ExportOptions {
        pretty: true,
        indent: 4,
    };
    let text = export_records(&[Mash::new("m")], Format::Xml, &options).unwrap().text;
    assert!(text.contains("\n    <VERSION>1</VERSION>"), "{text}");
    assert!(text.ends_with("</BREWKIT>\n"));
}

// ── Reading ──────────────────────────────────────────────────────

#[test]
fn none_marker_reads_as_empty_collection() {
    for pretty in [false, true] {
        let options = ExportOptions {
            pretty,
            ..ExportOptions::default()
        };
        let text = export_records(&[Mash::new("Empty")], Format::Xml, &options).unwrap().text;
        let parsed: Vec<Mash> = import_records(&text, Format::Xml).unwrap();
        assert_eq!(parsed.len(), 1);
        assert!(parsed[0].steps().is_empty());
    }
}

#[test]
fn mash_round_trips_with_step_order() {
    let original = three_step_mash();
    let text = export_records(
        std::slice::from_ref(&original),
        Format::Xml,
        &ExportOptions::default(),
    )
    .unwrap()
    .text;
    let parsed: Vec<Mash> = import_records(&text, Format::Xml).unwrap();
    assert_eq!(parsed, vec![original]);
}

#[test]
fn surrounding_whitespace_is_kept() {
    let mut mash = Mash::new(" Dough In ");
    mash.notes = "  ".into();
    mash.add_step(MashStep::new("   ", MashStepType::Infusion, 40.0, 10.0));

    for options in [ExportOptions::compact(), ExportOptions::default()] {
        let text = export_records(std::slice::from_ref(&mash), Format::Xml, &options)
            .unwrap()
            .text;
        assert!(text.contains("<NAME> Dough In </NAME>"), "{text}");
        assert!(text.contains("<NOTES>  </NOTES>"), "{text}");

        let parsed: Vec<Mash> = import_records(&text, Format::Xml).unwrap();
        assert_eq!(parsed[0].name, " Dough In ");
        assert_eq!(parsed[0].notes, "  ");
        assert_eq!(parsed[0].steps()[0].name, "   ");
    }
}

#[test]
fn blank_and_whitespace_leaves_differ() {
    let root = xml::from_xml(
        "<BREWKIT>\n  <MASHES>\n    <MASH>\n      <NAME></NAME>\n      <NOTES>   </NOTES>\n      \
         <MASH_STEPS>\n        <!-- None -->\n      </MASH_STEPS>\n    </MASH>\n  </MASHES>\n</BREWKIT>\n",
    )
    .unwrap();
    let Some(Node::Record(mashes)) = root.get("mashes") else {
        panic!("expected mashes container, got {root:?}");
    };
    let Some(Node::Record(mash)) = mashes.get("mash") else {
        panic!("expected a mash record");
    };
    assert_eq!(mash.get("name"), Some(&Node::Empty));
    assert_eq!(mash.get("notes"), Some(&Node::text("   ")));
    assert_eq!(mash.get("mash_steps"), Some(&Node::Empty));
}

#[test]
fn leaves_parse_to_nodes() {
    let root = xml::from_xml(
        r#"<BREWKIT>
             <MASHES>
               <MASH>
                 <NAME>Decoction</NAME>
                 <GRAIN_TEMP unit="F">68</GRAIN_TEMP>
                 <MASH_STEPS/>
               </MASH>
             </MASHES>
           </BREWKIT>"#,
    )
    .unwrap();
    let mash = RecordNode::new("mash")
        .with("name", Node::text("Decoction"))
        .with(
            "grain_temp",
            Node::Measured {
                value: "68".into(),
                unit: "F".into(),
            },
        )
        .with("mash_steps", Node::Empty);
    let expected = RecordNode::new("brewkit").with(
        "mashes",
        Node::Record(RecordNode::new("mashes").with("mash", Node::Record(mash))),
    );
    assert_eq!(root, expected);
}

#[test]
fn lower_case_tags_are_accepted() {
    let text = r#"<?xml version="1.0"?>
        <brewkit><mashes><mash><name>lower</name>
        <mash_steps><mash_step><name>Rest</name><step_temp unit="c">65</step_temp></mash_step></mash_steps>
        </mash></mashes></brewkit>"#;
    let parsed: Vec<Mash> = import_records(text, Format::Xml).unwrap();
    assert_eq!(parsed[0].name, "lower");
    assert_eq!(parsed[0].steps()[0].step_temp_c, 65.0);
}

#[test]
fn bad_step_value_reports_path() {
    let text = "<BREWKIT><MASHES><MASH><MASH_STEPS>\
        <MASH_STEP><NAME>ok</NAME></MASH_STEP>\
        <MASH_STEP><STEP_TIME unit=\"fortnight\">2</STEP_TIME></MASH_STEP>\
        </MASH_STEPS></MASH></MASHES></BREWKIT>";
    let err = import_records::<Mash>(text, Format::Xml).unwrap_err();
    let InterchangeError::Schema(SchemaError::Malformed(errors)) = err else {
        panic!("expected malformed document, got {err:?}");
    };
    assert_eq!(errors.len(), 1);
    assert!(errors.contains_path("mashes[0]/mash_steps[1]/step_time"), "{errors}");
}

#[test]
fn wrong_root_is_rejected() {
    let err = xml::from_xml("<RECIPES></RECIPES>").unwrap_err();
    assert!(matches!(err, InterchangeError::Structure(_)), "{err:?}");
}

#[test]
fn mismatched_tags_are_rejected() {
    let err = xml::from_xml("<BREWKIT><MASHES></MASH></BREWKIT>").unwrap_err();
    assert!(matches!(err, InterchangeError::Xml(_)), "{err:?}");
}

#[test]
fn unclosed_root_is_rejected() {
    assert!(xml::from_xml("<BREWKIT><MASHES>").is_err());
}

#[test]
fn newer_version_is_rejected() {
    let err = import_records::<Mash>("<BREWKIT><VERSION>7</VERSION></BREWKIT>", Format::Xml).unwrap_err();
    assert!(
        matches!(
            err,
            InterchangeError::Schema(SchemaError::UnsupportedVersion { found: 7, .. })
        ),
        "{err:?}"
    );
}
