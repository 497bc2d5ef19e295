#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A field constraint failed. The message is already translated and is
    /// shown to the client verbatim.
    #[error("{0}")]
    Validation(String),

    /// A list/query parameter could not be interpreted.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}
