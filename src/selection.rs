//! Picking a group from the environment.
//!
//! | Variable            | Meaning                                            |
//! |---------------------|----------------------------------------------------|
//! | `TESTGROUPS_GROUP`  | group name to select                               |
//! | `TESTGROUPS_SKIP`   | comma separated skip patterns                      |
//! | `TESTGROUPS_EXACT`  | match skip patterns exactly instead of by substring |
//! | `CI`                | without `TESTGROUPS_GROUP`, selects `full` over `quick` |

use std::{env, ffi::OsString};

use tracing::debug;

use crate::{
    error::UnknownGroupError, filter::GroupFilter, name::GroupName,
    registry::TestGroupRegistry, test::TestId,
};

pub const GROUP_VAR: &str = "TESTGROUPS_GROUP";
pub const SKIP_VAR: &str = "TESTGROUPS_SKIP";
pub const EXACT_VAR: &str = "TESTGROUPS_EXACT";
pub const CI_VAR: &str = "CI";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub group: GroupName,
    pub skip: Vec<String>,
    pub exact: bool,
}

impl Selection {
    pub fn new(group: GroupName) -> Self {
        Self {
            group,
            skip: Vec::new(),
            exact: false,
        }
    }

    pub fn with_exact(self, exact: bool) -> Self {
        Self { exact, ..self }
    }

    pub fn extend_skip(mut self, skip: impl IntoIterator<Item = String>) -> Self {
        self.skip.extend(skip);
        self
    }

    /// Read the selection from the process environment.
    pub fn from_env() -> Result<Self, UnknownGroupError> {
        Self::from_vars(|key: &str| env::var_os(key))
    }

    /// Read the selection through `lookup` instead of the process environment.
    ///
    /// Variables that are not valid unicode are read lossily. Variables that
    /// are empty or only whitespace count as unset.
    pub fn from_vars<F>(lookup: F) -> Result<Self, UnknownGroupError>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|value| value.to_string_lossy().into_owned())
                .filter(|value| !value.trim().is_empty())
        };

        let group = match var(GROUP_VAR) {
            Some(name) => name.trim().parse()?,
            None if var(CI_VAR).is_some_and(|ci| truthy(&ci)) => GroupName::Full,
            None => GroupName::Quick,
        };

        let skip: Vec<String> = var(SKIP_VAR)
            .map(|skip| {
                skip.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        let exact = var(EXACT_VAR).is_some_and(|exact| truthy(&exact));

        let selection = Self { group, skip, exact };
        debug!(
            group = %selection.group,
            skip = ?selection.skip,
            exact = selection.exact,
            "resolved test selection"
        );
        Ok(selection)
    }

    /// The identifiers of the selected group, before skip patterns apply.
    pub fn resolve<'r>(&self, registry: &'r TestGroupRegistry) -> &'r [TestId] {
        registry.group(self.group)
    }

    pub fn filter(&self, registry: &TestGroupRegistry) -> GroupFilter {
        GroupFilter::new(registry, self.group)
            .extend_skip(self.skip.iter().cloned())
            .with_exact(self.exact)
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new(GroupName::Quick)
    }
}

fn truthy(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "" | "0" | "false" | "no" | "off"
    )
}
