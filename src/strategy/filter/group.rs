use tracing::trace;

use crate::{
    filter::{FilteredTests, TestFilter},
    name::GroupName,
    registry::TestGroupRegistry,
    test::TestId,
};

/// Keeps the identifiers that belong to one group.
///
/// Membership is an exact match against the group's identifiers. On top of
/// that, skip patterns drop identifiers again: by substring by default, or
/// only on an exact match when [`with_exact`](Self::with_exact) is set.
///
/// Each input identifier is kept at most once, however often the group lists
/// it. Input order is preserved.
#[derive(Debug, Clone)]
pub struct GroupFilter {
    group: Option<GroupName>,
    members: Vec<TestId>,
    exact: bool,
    skip: Vec<String>,
}

impl GroupFilter {
    pub fn new(registry: &TestGroupRegistry, group: GroupName) -> Self {
        Self {
            group: Some(group),
            members: registry.group(group).to_vec(),
            exact: false,
            skip: Vec::new(),
        }
    }

    /// A filter over an ad hoc list of members that is not a registered group.
    pub fn from_members(members: impl IntoIterator<Item = TestId>) -> Self {
        Self {
            group: None,
            members: members.into_iter().collect(),
            exact: false,
            skip: Vec::new(),
        }
    }

    pub fn with_exact(self, exact: bool) -> Self {
        Self { exact, ..self }
    }

    pub fn extend_skip(mut self, skip: impl IntoIterator<Item = String>) -> Self {
        self.skip.extend(skip);
        self
    }

    pub fn group(&self) -> Option<GroupName> {
        self.group
    }

    fn skipped(&self, name: &str) -> bool {
        match self.exact {
            true => self.skip.iter().any(|skip| name == skip),
            false => self.skip.iter().any(|skip| name.contains(skip.as_str())),
        }
    }
}

impl TestFilter for GroupFilter {
    fn filter<'t>(
        &self,
        tests: &'t [TestId],
    ) -> FilteredTests<impl ExactSizeIterator<Item = &'t TestId>> {
        let mut remaining = Vec::new();
        let mut filtered = 0;
        for test in tests {
            let name = test.as_str();
            let in_group = self.members.iter().any(|member| member == name);
            let duplicate = remaining.iter().any(|kept: &&TestId| *kept == test);

            match in_group && !duplicate && !self.skipped(name) {
                true => remaining.push(test),
                false => filtered += 1,
            }
        }

        trace!(
            group = self.group.map(GroupName::as_str),
            kept = remaining.len(),
            filtered_out = filtered,
            "filtered tests"
        );

        FilteredTests {
            tests: remaining.into_iter(),
            filtered_out: filtered,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::registry::registry;

    fn discovered() -> Vec<TestId> {
        [
            "test_display",
            "test_integration",
            "test_lora",
            "test_main",
            "test_ps5",
            "test_safety",
            "test_utilities",
        ]
        .into_iter()
        .map(TestId::from)
        .collect()
    }

    fn kept<'t>(
        filtered: FilteredTests<impl ExactSizeIterator<Item = &'t TestId>>,
    ) -> Vec<&'t str> {
        filtered.tests.map(TestId::as_str).collect()
    }

    #[test]
    fn quick_keeps_input_order() {
        let tests = discovered();
        let filter = GroupFilter::new(registry(), GroupName::Quick);
        let filtered = filter.filter(&tests);

        assert_eq!(filtered.filtered_out, 5);
        assert_eq!(filtered.tests.len(), 2);
        assert_eq!(kept(filtered), ["test_safety", "test_utilities"]);
    }

    #[test]
    fn full_keeps_everything_known() {
        let mut tests = discovered();
        tests.push(TestId::from("test_sd_card"));

        let filter = GroupFilter::new(registry(), GroupName::Full);
        let filtered = filter.filter(&tests);
        assert_eq!(filtered.filtered_out, 1);
        assert_eq!(filtered.tests.len(), 7);
    }

    #[test]
    fn skip_matches_substrings() {
        let tests = discovered();
        let filter = GroupFilter::new(registry(), GroupName::Core).extend_skip(["ps".to_string()]);
        let filtered = filter.filter(&tests);

        assert_eq!(filtered.filtered_out, 5);
        assert_eq!(kept(filtered), ["test_lora", "test_utilities"]);
    }

    #[test]
    fn exact_skip_needs_full_name() {
        let tests = discovered();
        let filter = GroupFilter::new(registry(), GroupName::Core)
            .extend_skip(["ps".to_string(), "test_lora".to_string()])
            .with_exact(true);

        assert_eq!(kept(filter.filter(&tests)), ["test_ps5", "test_utilities"]);
    }

    #[test]
    fn repeated_input_is_kept_once() {
        let tests = [
            TestId::from("test_a"),
            TestId::from("test_b"),
            TestId::from("test_a"),
        ];
        let filter = GroupFilter::from_members([TestId::from("test_a"), TestId::from("test_a")]);

        assert_eq!(filter.group(), None);
        let filtered = filter.filter(&tests);
        assert_eq!(filtered.filtered_out, 2);
        assert_eq!(kept(filtered), ["test_a"]);
    }
}
