pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A shape was given geometry it cannot be drawn from (too few points, mismatched
    /// coordinate arrays, an unusable radius).
    #[error("Invalid geometry ({shape}): {message}")]
    InvalidGeometry { shape: &'static str, message: String },

    /// Only produced by the strict token parsers; the permissive conversions keep unknown
    /// tokens as `Custom` values.
    #[error("Unrecognized {dimension} token: {token:?}")]
    UnrecognizedToken {
        dimension: &'static str,
        token: String,
    },
}

impl Error {
    pub(crate) fn geometry(shape: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            shape,
            message: message.into(),
        }
    }
}
