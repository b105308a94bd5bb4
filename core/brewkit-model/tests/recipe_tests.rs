use brewkit_model::{
    ADDITION, AdditionStage, IngredientAddition, IngredientKind, MASH, MASH_STEP, Mash, MashStep,
    MashStepType, RECIPE, Recipe, RecipeType, totals,
};
use brewkit_schema::{
    ContainmentContext, ExportStatistics, Node, RecordNode, RecordReader, RecordSetReader,
    RecordSetWriter, RecordWriter,
};
use pretty_assertions::assert_eq;

fn pale_ale() -> Recipe {
    let mut recipe = Recipe::new("Pale Ale", 20.0);
    recipe.brewer = "Sam".into();
    recipe.boil_time_min = Some(60.0);
    recipe.og = Some(1.050);

    let mut mash = Mash::new("Single Infusion");
    mash.add_step(MashStep::new("Saccharification", MashStepType::Infusion, 67.0, 60.0));
    recipe.set_mash(mash);

    recipe
        .add(IngredientAddition::new("Maris Otter", IngredientKind::Fermentable, 4.5, AdditionStage::Mash))
        .add(IngredientAddition::new("Cascade", IngredientKind::Hop, 0.028, AdditionStage::Boil).at(60.0))
        .add(IngredientAddition::new("Cascade", IngredientKind::Hop, 0.028, AdditionStage::Whirlpool).at(15.0));
    recipe
}

fn write(recipe: &Recipe) -> (RecordNode, ExportStatistics) {
    let mut statistics = ExportStatistics::new();
    let node = RecordWriter::new(&mut statistics)
        .write_record(recipe, ContainmentContext::standalone())
        .unwrap();
    (node, statistics)
}

#[test]
fn recipe_round_trips_through_node_tree() {
    let original = pale_ale();
    let (node, _) = write(&original);

    let mut reader = RecordReader::new();
    let parsed = reader.read_record::<Recipe>(&node, "recipe");
    reader.finish().unwrap();
    assert_eq!(parsed, Some(original));
}

#[test]
fn embedded_mash_is_excluded_from_statistics() {
    let (_, statistics) = write(&pale_ale());

    assert_eq!(statistics.included(RECIPE), 1);
    assert_eq!(statistics.included(MASH), 0);
    assert_eq!(statistics.excluded(MASH), 1);
    assert_eq!(statistics.excluded(MASH_STEP), 1);
    assert_eq!(statistics.excluded(ADDITION), 3);
    assert_eq!(statistics.total(totals::MASH_MINUTES), 0.0);
    assert!((statistics.total(totals::BATCH_LITERS) - 20.0).abs() < 1e-9);
}

#[test]
fn same_mash_counts_when_written_standalone() {
    let recipe = pale_ale();
    let mut writer = RecordSetWriter::new();
    writer.write_section(std::slice::from_ref(&recipe)).unwrap();
    writer.write_section(&[recipe.mash().cloned().unwrap()]).unwrap();
    let statistics = writer.finish().statistics;

    assert_eq!(statistics.included(MASH), 1);
    assert_eq!(statistics.excluded(MASH), 1);
    assert!((statistics.total(totals::MASH_MINUTES) - 60.0).abs() < 1e-9);
}

#[test]
fn recipe_without_mash_omits_field() {
    let mut recipe = pale_ale();
    let taken = recipe.take_mash();
    assert!(taken.is_some());

    let (node, _) = write(&recipe);
    assert!(node.get("mash").is_none());
    assert!(node.get("brewer").is_some());
}

#[test]
fn recipe_fields_use_external_names() {
    let (node, _) = write(&pale_ale());
    assert_eq!(node.tag, "recipe");
    assert_eq!(
        node.get("batch_size"),
        Some(&Node::Measured {
            value: 20.0.into(),
            unit: "l".into(),
        })
    );
    assert_eq!(node.get("type"), Some(&Node::text("all grain")));
    let Some(Node::List(items)) = node.get("ingredients") else {
        panic!("expected ingredient list");
    };
    assert_eq!(items.len(), 3);
}

#[test]
fn additions_filter_by_kind() {
    let recipe = pale_ale();
    let hops: Vec<AdditionStage> = recipe
        .additions_of(IngredientKind::Hop)
        .map(|a| a.stage)
        .collect();
    assert_eq!(hops, vec![AdditionStage::Boil, AdditionStage::Whirlpool]);
    assert_eq!(recipe.additions_of(IngredientKind::Yeast).count(), 0);
}

#[test]
fn set_mash_returns_previous() {
    let mut recipe = pale_ale();
    let previous = recipe.set_mash(Mash::new("Step Mash"));
    assert_eq!(previous.map(|m| m.name), Some("Single Infusion".to_string()));
    assert_eq!(recipe.mash().map(|m| m.name.as_str()), Some("Step Mash"));
}

#[test]
fn malformed_ingredient_fails_section_with_paths() {
    let root = RecordNode::new("brewkit").with(
        "recipes",
        Node::List(vec![Node::Record(
            RecordNode::new("recipe")
                .with("name", Node::text("Broken"))
                .with("type", Node::text("kit"))
                .with(
                    "ingredients",
                    Node::List(vec![Node::Record(
                        RecordNode::new("addition").with(
                            "amount",
                            Node::Measured {
                                value: 1.0.into(),
                                unit: "stone".into(),
                            },
                        ),
                    )]),
                ),
        )]),
    );
    let err = RecordSetReader::new(&root)
        .unwrap()
        .read_section::<Recipe>()
        .unwrap_err();
    let brewkit_schema::SchemaError::Malformed(errors) = err else {
        panic!("expected malformed, got {err:?}");
    };
    assert_eq!(errors.len(), 2);
    assert!(errors.contains_path("recipes[0]/type"));
    assert!(errors.contains_path("recipes[0]/ingredients[0]/amount"));
}

#[test]
fn recipe_type_reads_partial_mash() {
    let node = RecordNode::new("recipe").with("type", Node::text("Partial Mash"));
    let mut reader = RecordReader::new();
    let recipe = reader.read_record::<Recipe>(&node, "recipe").unwrap();
    assert_eq!(recipe.recipe_type, RecipeType::PartialMash);
}
