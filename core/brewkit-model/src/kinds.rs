use brewkit_schema::EntityKind;

pub const RECIPE: EntityKind = EntityKind::new("recipe");
pub const MASH: EntityKind = EntityKind::new("mash");
pub const MASH_STEP: EntityKind = EntityKind::new("mash_step");
pub const ADDITION: EntityKind = EntityKind::new("addition");
