//! The fixed set of test group names.
//!
//! There are four base groups (`core`, `safety`, `ui`, `system`), one curated
//! group (`quick`) and one derived group (`full`). The set is closed, so it is
//! an enum rather than a string key.

use std::{fmt::Display, str::FromStr};

use crate::error::UnknownGroupError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GroupName {
    Core,
    Safety,
    Ui,
    System,
    Quick,
    Full,
}

impl GroupName {
    /// Every group, in the order the registry reports them.
    pub const ALL: [GroupName; 6] = [
        GroupName::Core,
        GroupName::Safety,
        GroupName::Ui,
        GroupName::System,
        GroupName::Quick,
        GroupName::Full,
    ];

    /// The base groups, in the order they are concatenated into
    /// [`GroupName::Full`].
    pub const BASE: [GroupName; 4] = [
        GroupName::Core,
        GroupName::Safety,
        GroupName::Ui,
        GroupName::System,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            GroupName::Core => "core",
            GroupName::Safety => "safety",
            GroupName::Ui => "ui",
            GroupName::System => "system",
            GroupName::Quick => "quick",
            GroupName::Full => "full",
        }
    }

    /// What the group is meant for.
    pub const fn description(self) -> &'static str {
        match self {
            GroupName::Core => "core functionality tests, always run",
            GroupName::Safety => "safety tests, critical for flight systems",
            GroupName::Ui => "UI and display tests",
            GroupName::System => "system tests",
            GroupName::Quick => "quick suite for rapid development",
            GroupName::Full => "full suite for CI/CD and releases",
        }
    }

    pub const fn is_base(self) -> bool {
        matches!(
            self,
            GroupName::Core | GroupName::Safety | GroupName::Ui | GroupName::System
        )
    }

    /// Whether the group is computed from other groups instead of declared.
    pub const fn is_derived(self) -> bool {
        matches!(self, GroupName::Full)
    }
}

impl Display for GroupName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupName {
    type Err = UnknownGroupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GroupName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownGroupError::new(s))
    }
}
