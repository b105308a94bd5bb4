use crate::EntityKind;

/// Where a record sits during one write pass.
///
/// Computed when the writer attaches a record to its parent and read-only
/// for the rest of that record's pass. A record reached through a container
/// whose schema is aggregating (a recipe, for instance) is left out of the
/// export statistics, and so is everything below it; a standalone record,
/// or one held by a non-aggregating container, keeps its parent's decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainmentContext {
    container: Option<EntityKind>,
    include_statistics: bool,
}

impl ContainmentContext {
    /// A top-level record with no container.
    #[must_use]
    pub const fn standalone() -> Self {
        Self {
            container: None,
            include_statistics: true,
        }
    }

    /// The context of a child attached to `container` within this context.
    #[must_use]
    pub const fn attach(&self, container: EntityKind, aggregating: bool) -> Self {
        Self {
            container: Some(container),
            include_statistics: self.include_statistics && !aggregating,
        }
    }

    /// Kind of the immediately containing record, if any.
    #[must_use]
    pub const fn container(&self) -> Option<EntityKind> {
        self.container
    }

    #[must_use]
    pub const fn is_standalone(&self) -> bool {
        self.container.is_none()
    }

    #[must_use]
    pub const fn includes_statistics(&self) -> bool {
        self.include_statistics
    }
}

impl Default for ContainmentContext {
    fn default() -> Self {
        Self::standalone()
    }
}
