//! Error type shared by every sequence operation.

/// Error type for sequence construction and evaluation.
///
/// Both variants are raised eagerly, by the call that receives the offending
/// argument, before any caller-supplied function has been invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SeqError {
    /// A numeric bound was zero.
    #[error("argument `{name}` must be greater than zero")]
    OutOfRange {
        /// Name of the offending parameter.
        name: &'static str,
    },

    /// A required function or collection was absent.
    #[error("required argument `{name}` is missing")]
    MissingArgument {
        /// Name of the offending parameter.
        name: &'static str,
    },
}

impl SeqError {
    /// Name of the parameter that failed validation.
    #[must_use]
    pub fn argument(&self) -> &'static str {
        match self {
            Self::OutOfRange { name } | Self::MissingArgument { name } => name,
        }
    }
}

/// Reject a zero bound.
pub(crate) fn ensure_positive(value: usize, name: &'static str) -> Result<usize, SeqError> {
    if value == 0 {
        tracing::debug!(argument = name, "rejected zero bound");
        return Err(SeqError::OutOfRange { name });
    }
    Ok(value)
}

/// Unwrap a required argument or report it as missing.
pub(crate) fn require<F>(value: Option<F>, name: &'static str) -> Result<F, SeqError> {
    value.ok_or_else(|| {
        tracing::debug!(argument = name, "required argument missing");
        SeqError::MissingArgument { name }
    })
}
