//! # seqgen-core
//!
//! Generic higher-order sequence utilities: lazy progressions, two-term
//! recurrences, direct element access and folds, plus predicate and
//! comparator combinators.
//!
//! Every operation validates its arguments eagerly and returns
//! [`SeqError`] on failure; sequence values are produced lazily and can be
//! iterated any number of times.

pub mod combinators;
pub mod element;
pub mod error;
pub mod progression;
pub mod recurrence;

// Re-exports
pub use combinators::{combine_predicates, find_max, Predicate};
pub use element::{calculate, get_element};
pub use error::SeqError;
pub use progression::{
    generate_progression, generate_progression_until, Progression, ProgressionIter,
    ProgressionUntil, ProgressionUntilIter,
};
pub use recurrence::{generate_sequence, Recurrence, RecurrenceIter};

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// First `count` Fibonacci numbers, F(0) through F(count - 1).
///
/// Convenience wrapper over [`generate_sequence`] with arbitrary-precision
/// elements, so any `count` is valid.
///
/// # Errors
///
/// [`SeqError::OutOfRange`] if `count` is zero.
///
/// # Example
/// ```
/// let fibs: Vec<String> = seqgen_core::fibonacci(7)
///     .unwrap()
///     .iter()
///     .map(ToString::to_string)
///     .collect();
/// assert_eq!(fibs, ["0", "1", "1", "2", "3", "5", "8"]);
/// ```
pub fn fibonacci(count: usize) -> Result<Vec<BigUint>, SeqError> {
    let seq = generate_sequence(
        BigUint::zero(),
        BigUint::one(),
        Some(|a: &BigUint, b: &BigUint| a + b),
        count,
    )?;
    Ok(seq.iter().collect())
}
