//! Named test groupings for picking which test suites run where.
//!
//! The crate declares a fixed set of groups over opaque test identifiers:
//! `core`, `safety`, `ui` and `system` as base groups, a hand picked `quick`
//! group for the dev loop, and `full`, which is always `core`, `safety`, `ui`
//! and `system` concatenated in that order.
//!
//! ```
//! let full = testgroups::get_group("full").unwrap();
//! assert_eq!(full.len(), 7);
//! assert!(testgroups::get_group("nightly").is_err());
//! ```
//!
//! Running the selected tests is up to the caller. The [`filter`] and
//! [`group`] strategies help narrow down and sort a list of discovered
//! identifiers, and [`selection`] reads the group to use from the
//! environment.

pub mod error;
pub mod name;
pub mod registry;
pub mod selection;

mod strategy;
pub use strategy::*;

pub use error::UnknownGroupError;
pub use name::GroupName;
pub use registry::{TestGroupRegistry, get_group, registry};
pub use selection::Selection;
pub use test::TestId;
