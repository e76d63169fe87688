/// Errors reported by fallible tree operations.
///
/// Neither error leaves the tree partially modified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A value was required but none was supplied.
    #[error("a value is required but none was supplied")]
    InvalidArgument,
    /// No element in the tree compares equal to the given value.
    #[error("no element in the tree compares equal to the given value")]
    NotFound,
}
