//! Test filtering for testgroups.
//!
//! A filter decides which identifiers from a discovered list end up in the
//! selection. Identifiers that do not match are dropped and counted, they
//! cannot be pulled back in later.
//!
//! The usual flow is: a consumer discovers the test units it knows about (for
//! example the directories under `test/`), picks a group, and runs the list
//! through a [`GroupFilter`] built from that group.
//!
//! Implement [`TestFilter`] to define another selection strategy.

use crate::test::TestId;

mod group;
pub use group::*;

/// The result of applying a [`TestFilter`].
///
/// The iterator is required to be an [`ExactSizeIterator`], so the number of
/// selected tests is known upfront.
#[derive(Debug)]
pub struct FilteredTests<I> {
    /// The identifiers that are part of the selection.
    pub tests: I,

    /// The number of identifiers that were dropped.
    pub filtered_out: usize,
}

/// A strategy for selecting which identifiers are kept.
pub trait TestFilter {
    /// Filter the given slice of identifiers.
    ///
    /// The returned iterator must yield references into `tests` and keep
    /// their relative order.
    fn filter<'t>(
        &self,
        tests: &'t [TestId],
    ) -> FilteredTests<impl ExactSizeIterator<Item = &'t TestId>>;
}
