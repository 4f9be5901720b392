//! Error handling and exit codes.

use seqgen_core::SeqError;

/// Process exit codes.
pub mod exit_codes {
    /// Any failure not covered by a more specific code.
    pub const ERROR_GENERIC: i32 = 1;
    /// An operation rejected its arguments.
    pub const ERROR_ARGUMENT: i32 = 4;
}

/// Map an application error to the process exit code.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<SeqError>() {
        Some(seq_err) => {
            tracing::debug!(argument = seq_err.argument(), "operation rejected its arguments");
            exit_codes::ERROR_ARGUMENT
        }
        None => exit_codes::ERROR_GENERIC,
    }
}
