use std::collections::BTreeMap;

use crate::{
    group::{BaseGrouper, TestGrouper},
    name::GroupName,
    registry::TestGroupRegistry,
    test::TestId,
};

/// Identifiers collected per group key, keys in ascending order.
pub type GroupedTests<'t, GroupKey> = BTreeMap<GroupKey, Vec<&'t TestId>>;

/// Run every identifier through `grouper` and collect them per key.
///
/// Within a key, identifiers keep their input order.
pub fn group_tests<'t, GroupKey>(
    mut grouper: impl TestGrouper<GroupKey>,
    tests: impl IntoIterator<Item = &'t TestId>,
) -> GroupedTests<'t, GroupKey>
where
    GroupKey: Ord,
{
    tests.into_iter().fold(BTreeMap::new(), |mut groups, test| {
        groups
            .entry(grouper.group(test))
            .or_insert_with(Vec::new)
            .push(test);
        groups
    })
}

/// Split `tests` by the base group that declares them.
///
/// Identifiers no base group declares are collected under `None`, which
/// sorts first.
pub fn group_by_base<'t>(
    registry: &TestGroupRegistry,
    tests: impl IntoIterator<Item = &'t TestId>,
) -> GroupedTests<'t, Option<GroupName>> {
    group_tests(BaseGrouper::new(registry), tests)
}
