//! Record identity.
//!
//! Every entity carries an [`EntityId`] that is written with the record and
//! read back unchanged, so a recipe keeps its identity across any number of
//! XML and JSON conversions. Fresh ids are UUID v7: records created one after
//! another compare in creation order, and the creation time can be recovered
//! from the id alone.

use std::fmt;

use uuid::Uuid;

/// Identity of one brewing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(Uuid);

impl EntityId {
    /// A fresh id stamped with the current time.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Reads an id as written in a document.
    ///
    /// Surrounding whitespace is ignored, and the hyphenated, simple, braced
    /// and `urn:uuid:` spellings are all accepted. Ids written by other tools
    /// need not be v7.
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s.trim())?))
    }

    /// Milliseconds since the Unix epoch at which the id was minted, or
    /// `None` for ids that carry no timestamp.
    #[must_use]
    pub fn created_at_ms(&self) -> Option<u64> {
        self.0.get_timestamp().map(|ts| {
            let (secs, nanos) = ts.to_unix();
            secs * 1000 + u64::from(nanos / 1_000_000)
        })
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

/// The hyphenated lower-case form, which is what documents carry.
impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}
