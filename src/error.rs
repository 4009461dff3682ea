//! Error types returned by [`crate::ProviderTree`] operations.

use thiserror::Error;

/// The three kinds of failure a [`crate::ProviderTree`] operation can report.
///
/// Every mutation either fully applies or leaves the tree untouched; none of
/// these variants are raised mid-mutation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderTreeError {
    /// A name-or-identifier key did not resolve to any provider in the tree.
    #[error("no such provider {0}")]
    NotFound(String),

    /// A root was proposed with an identifier that already exists somewhere
    /// in the tree.
    #[error("provider {0} already exists as a root")]
    AlreadyExists(String),

    /// Bulk population was given a descriptor whose declared parent is
    /// neither already in the tree nor present in the same input batch.
    #[error("the following parents were not found: {0:?}")]
    OrphanInput(Vec<String>),

    /// Bulk population could not make progress on a pass through the
    /// remaining input, despite having validated that every parent exists.
    /// Unreachable in practice; guards against a logic error admitting a
    /// cycle.
    #[error(
        "unexpectedly failed to find parents already in the tree for any of the following: {0:?}"
    )]
    InternalInvariant(Vec<String>),
}
