use crate::{name::GroupName, registry::TestGroupRegistry, test::TestId};

/// A strategy for assigning identifiers to groups.
///
/// A `GroupKey` is typically something small and cheap to clone, like a
/// string, an integer or a small enum.
///
/// `TestGrouper` is implemented for `Fn(&TestId) -> GroupKey`, so a closure
/// can act as a grouper.
pub trait TestGrouper<GroupKey> {
    /// Return the group key for an identifier.
    fn group(&mut self, test: &TestId) -> GroupKey;
}

impl<F, GroupKey> TestGrouper<GroupKey> for F
where
    F: Fn(&TestId) -> GroupKey,
{
    fn group(&mut self, test: &TestId) -> GroupKey {
        self(test)
    }
}

/// Groups identifiers by the first base group that declares them.
///
/// Base groups are checked in [`GroupName::BASE`] order. Identifiers no base
/// group declares land under `None`.
#[derive(Debug, Clone, Copy)]
pub struct BaseGrouper<'r> {
    registry: &'r TestGroupRegistry,
}

impl<'r> BaseGrouper<'r> {
    pub fn new(registry: &'r TestGroupRegistry) -> Self {
        Self { registry }
    }
}

impl TestGrouper<Option<GroupName>> for BaseGrouper<'_> {
    fn group(&mut self, test: &TestId) -> Option<GroupName> {
        GroupName::BASE
            .into_iter()
            .find(|group| self.registry.contains(*group, test))
    }
}
