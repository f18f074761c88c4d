/// Errors produced by the `hello-keith-core` crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// A name pool was built from an empty list.
    #[error("name pool must contain at least one name")]
    EmptyPool,

    /// A name pool listed the same name twice.
    #[error("duplicate name '{name}' in name pool")]
    DuplicateName { name: String },
}
