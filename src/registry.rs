//! The test group registry.
//!
//! A registry holds the declared groups (`core`, `safety`, `ui`, `system` and
//! `quick`) and the derived `full` group. `full` is computed once when the
//! registry is built, as the ordered concatenation of the four base groups, so
//! editing a base group can never leave `full` stale. `quick` is declared on
//! its own and does not follow changes to `core` or `safety`.
//!
//! Registries are immutable after construction. The built-in table is
//! available through [`registry`] and is built lazily on first access.

use std::sync::LazyLock;

use tracing::{debug, warn};

use crate::{error::UnknownGroupError, name::GroupName, test::TestId};

pub const CORE_TESTS: &[TestId] = &[
    TestId::from_static("test_utilities"),
    TestId::from_static("test_lora"),
    TestId::from_static("test_ps5"),
];

pub const SAFETY_TESTS: &[TestId] = &[
    TestId::from_static("test_safety"),
    TestId::from_static("test_integration"),
];

pub const UI_TESTS: &[TestId] = &[TestId::from_static("test_display")];

pub const SYSTEM_TESTS: &[TestId] = &[TestId::from_static("test_main")];

pub const QUICK_TESTS: &[TestId] = &[
    TestId::from_static("test_utilities"),
    TestId::from_static("test_safety"),
];

static REGISTRY: LazyLock<TestGroupRegistry> = LazyLock::new(TestGroupRegistry::default);

/// The built-in registry, shared by the whole process.
pub fn registry() -> &'static TestGroupRegistry {
    &REGISTRY
}

/// Look up a group by name in the built-in registry.
pub fn get_group(name: &str) -> Result<&'static [TestId], UnknownGroupError> {
    registry().get_group(name)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestGroupRegistry {
    core: Vec<TestId>,
    safety: Vec<TestId>,
    ui: Vec<TestId>,
    system: Vec<TestId>,
    quick: Vec<TestId>,
    full: Vec<TestId>,
}

impl TestGroupRegistry {
    /// Build a registry from the five declared groups.
    ///
    /// `full` is derived here from `core`, `safety`, `ui` and `system`, in
    /// that order. Duplicates are kept as they are.
    pub fn new(
        core: impl IntoIterator<Item = TestId>,
        safety: impl IntoIterator<Item = TestId>,
        ui: impl IntoIterator<Item = TestId>,
        system: impl IntoIterator<Item = TestId>,
        quick: impl IntoIterator<Item = TestId>,
    ) -> Self {
        let core: Vec<_> = core.into_iter().collect();
        let safety: Vec<_> = safety.into_iter().collect();
        let ui: Vec<_> = ui.into_iter().collect();
        let system: Vec<_> = system.into_iter().collect();
        let quick: Vec<_> = quick.into_iter().collect();

        let full: Vec<_> = [&core, &safety, &ui, &system]
            .into_iter()
            .flatten()
            .cloned()
            .collect();

        debug!(
            core = core.len(),
            safety = safety.len(),
            ui = ui.len(),
            system = system.len(),
            quick = quick.len(),
            full = full.len(),
            "built test group registry"
        );

        Self {
            core,
            safety,
            ui,
            system,
            quick,
            full,
        }
    }

    /// Look up a group by its name.
    ///
    /// Only the six fixed names are known, matched exactly.
    pub fn get_group(&self, name: &str) -> Result<&[TestId], UnknownGroupError> {
        match name.parse::<GroupName>() {
            Ok(group) => Ok(self.group(group)),
            Err(err) => {
                warn!(name, "requested unknown test group");
                Err(err)
            }
        }
    }

    pub fn group(&self, group: GroupName) -> &[TestId] {
        match group {
            GroupName::Core => &self.core,
            GroupName::Safety => &self.safety,
            GroupName::Ui => &self.ui,
            GroupName::System => &self.system,
            GroupName::Quick => &self.quick,
            GroupName::Full => &self.full,
        }
    }

    /// All groups in [`GroupName::ALL`] order.
    pub fn groups(&self) -> impl ExactSizeIterator<Item = (GroupName, &[TestId])> {
        GroupName::ALL
            .into_iter()
            .map(|group| (group, self.group(group)))
    }

    pub fn contains(&self, group: GroupName, id: &str) -> bool {
        self.group(group).iter().any(|test| test == id)
    }

    /// The base groups that list `id`, in [`GroupName::BASE`] order.
    pub fn base_groups_of(&self, id: &str) -> Vec<GroupName> {
        GroupName::BASE
            .into_iter()
            .filter(|group| self.contains(*group, id))
            .collect()
    }
}

impl Default for TestGroupRegistry {
    fn default() -> Self {
        Self::new(
            CORE_TESTS.iter().cloned(),
            SAFETY_TESTS.iter().cloned(),
            UI_TESTS.iter().cloned(),
            SYSTEM_TESTS.iter().cloned(),
            QUICK_TESTS.iter().cloned(),
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn names(tests: &[TestId]) -> Vec<&str> {
        tests.iter().map(TestId::as_str).collect()
    }

    #[test]
    fn full_is_base_groups_in_order() {
        let registry = TestGroupRegistry::default();
        assert_eq!(
            names(registry.group(GroupName::Full)),
            [
                "test_utilities",
                "test_lora",
                "test_ps5",
                "test_safety",
                "test_integration",
                "test_display",
                "test_main",
            ]
        );

        let concatenated: Vec<_> = GroupName::BASE
            .into_iter()
            .flat_map(|group| registry.group(group))
            .cloned()
            .collect();
        assert_eq!(registry.group(GroupName::Full), concatenated.as_slice());
    }

    #[test]
    fn every_group_is_non_empty() {
        for (group, tests) in registry().groups() {
            assert!(!tests.is_empty(), "{group} is empty");
        }
    }

    #[test]
    fn quick_does_not_follow_core() {
        let registry = TestGroupRegistry::new(
            [TestId::from("test_other")],
            SAFETY_TESTS.iter().cloned(),
            UI_TESTS.iter().cloned(),
            SYSTEM_TESTS.iter().cloned(),
            QUICK_TESTS.iter().cloned(),
        );

        assert_eq!(
            names(registry.group(GroupName::Quick)),
            ["test_utilities", "test_safety"]
        );
        assert_eq!(names(registry.group(GroupName::Full))[0], "test_other");
        assert!(!registry.contains(GroupName::Full, "test_utilities"));
    }

    #[test]
    fn duplicates_across_groups_are_kept() {
        let registry = TestGroupRegistry::new(
            [TestId::from("test_a")],
            [TestId::from("test_a")],
            Vec::<TestId>::new(),
            [TestId::from("test_b")],
            [TestId::from("test_b")],
        );

        assert_eq!(
            names(registry.group(GroupName::Full)),
            ["test_a", "test_a", "test_b"]
        );
        assert!(registry.group(GroupName::Ui).is_empty());
    }

    #[test]
    fn unknown_group_is_an_error() {
        let err = registry().get_group("nonexistent").unwrap_err();
        assert_eq!(err, UnknownGroupError::new("nonexistent"));
    }

    #[test]
    fn base_groups_of_reports_membership() {
        let registry = registry();
        assert_eq!(registry.base_groups_of("test_safety"), [GroupName::Safety]);
        assert_eq!(registry.base_groups_of("test_display"), [GroupName::Ui]);
        assert!(registry.base_groups_of("test_unknown").is_empty());
    }

    #[test]
    fn groups_iterates_in_fixed_order() {
        let order: Vec<_> = registry().groups().map(|(group, _)| group).collect();
        assert_eq!(order, GroupName::ALL);
    }
}
