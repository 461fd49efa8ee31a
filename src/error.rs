use thiserror::Error;

/// A group was requested by a name outside the fixed set of groups.
///
/// This is a configuration error on the caller's side. Nothing inside the
/// crate retries or falls back, the error is handed straight back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown test group `{name}`, expected one of: core, safety, ui, system, quick, full")]
pub struct UnknownGroupError {
    pub name: String,
}

impl UnknownGroupError {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
