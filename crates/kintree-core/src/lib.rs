#![forbid(unsafe_code)]

//! Family relationship graph resolution + generational layout (headless).
//!
//! Takes the flat person-record collection delivered by the family-network
//! backend and resolves it into a deterministic, de-duplicated,
//! generation-ordered structure ready for tree rendering.
//!
//! Design goals:
//! - behavior parity with the production mobile client's tree builder,
//!   including its asymmetric spouse-pairing rule and coarse age arithmetic
//! - deterministic, testable outputs (fixed input order in, fixed output out)
//! - pure transform: no I/O, no shared state across invocations

pub mod decode;
pub mod error;
pub mod model;
pub mod records;
pub mod tree;

pub use decode::decode_members;
pub use error::{Error, Result};
pub use model::{
    DisplayMember, FamilyTree, GenderClass, GenerationBlock, MaritalStatus, SpouseSummary,
};
pub use records::PersonRecord;

/// The tree-building engine.
///
/// Stateless apart from an optional fixed "today", which exists to make
/// age-dependent outputs reproducible in tests and snapshots. By default the
/// current local date is used, matching what the member cards display.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    fixed_today: Option<chrono::NaiveDate>,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the "today" used by the age calculation.
    ///
    /// This exists primarily to make fixtures deterministic. `None` restores
    /// the default (current local date).
    pub fn with_fixed_today(mut self, today: Option<chrono::NaiveDate>) -> Self {
        self.fixed_today = today;
        self
    }

    fn today(&self) -> chrono::NaiveDate {
        self.fixed_today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    /// Resolves a record collection into a generation-ordered tree.
    ///
    /// Infallible by design: any record collection, however malformed,
    /// produces a structurally valid (possibly empty) [`FamilyTree`]. All
    /// scan state is local to the call, so concurrent invocations on
    /// different snapshots need no coordination.
    pub fn build_tree(&self, records: &[PersonRecord]) -> FamilyTree {
        tree::build_tree(records, self.today())
    }
}

#[cfg(test)]
mod tests;
