//! Grouping support for testgroups.
//!
//! Grouping splits a flat list of discovered identifiers by some key, for
//! example by the base group that declares them, so a consumer can report or
//! schedule them group by group. [`TestGrouper`] picks the key,
//! [`group_tests`] collects the identifiers per key.

mod grouper;
pub use grouper::*;

mod groups;
pub use groups::*;
