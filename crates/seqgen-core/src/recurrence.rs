//! Two-term recurrences such as the Fibonacci or Lucas sequences.

use std::fmt;
use std::iter::FusedIterator;

use crate::error::{ensure_positive, require, SeqError};

/// Build a sequence of exactly `count` elements where each element after
/// the first two is `formula(prev2, prev1)`.
///
/// `count == 1` yields only `first`; `count == 2` yields both seeds and
/// never calls `formula`. `second` is used as given.
///
/// # Errors
///
/// [`SeqError::OutOfRange`] if `count` is zero, [`SeqError::MissingArgument`]
/// if `formula` is `None`.
///
/// # Example
/// ```
/// use seqgen_core::recurrence::generate_sequence;
///
/// let fib = generate_sequence(0u64, 1, Some(|a: &u64, b: &u64| a + b), 10).unwrap();
/// assert_eq!(fib.iter().collect::<Vec<_>>(), [0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
/// ```
pub fn generate_sequence<T, F>(
    first: T,
    second: T,
    formula: Option<F>,
    count: usize,
) -> Result<Recurrence<T, F>, SeqError>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    let count = ensure_positive(count, "count")?;
    let formula = require(formula, "formula")?;
    tracing::trace!(count, "two-term recurrence created");
    Ok(Recurrence {
        first,
        second,
        formula,
        count,
    })
}

/// A validated, restartable two-term recurrence.
#[derive(Clone)]
pub struct Recurrence<T, F> {
    first: T,
    second: T,
    formula: F,
    count: usize,
}

impl<T, F> Recurrence<T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    /// Start a fresh pass over the sequence.
    #[must_use]
    pub fn iter(&self) -> RecurrenceIter<'_, T, F> {
        RecurrenceIter {
            window: None,
            recurrence: self,
            position: 0,
        }
    }

    /// Number of elements every pass yields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Always `false`; a recurrence holds at least its first seed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Recurrence<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Recurrence")
            .field("first", &self.first)
            .field("second", &self.second)
            .field("count", &self.count)
            .finish_non_exhaustive()
    }
}

impl<'a, T, F> IntoIterator for &'a Recurrence<T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    type Item = T;
    type IntoIter = RecurrenceIter<'a, T, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Cursor over a [`Recurrence`].
///
/// `window` holds `(prev2, prev1)` once both seeds have been yielded.
pub struct RecurrenceIter<'a, T, F> {
    window: Option<(T, T)>,
    recurrence: &'a Recurrence<T, F>,
    position: usize,
}

impl<T, F> Iterator for RecurrenceIter<'_, T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let rec = self.recurrence;
        if self.position >= rec.count {
            return None;
        }
        self.position += 1;
        match self.position {
            1 => Some(rec.first.clone()),
            2 => {
                self.window = Some((rec.first.clone(), rec.second.clone()));
                Some(rec.second.clone())
            }
            _ => {
                let (prev2, prev1) = self.window.take()?;
                let next = (rec.formula)(&prev2, &prev1);
                self.window = Some((prev1, next.clone()));
                Some(next)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.recurrence.count - self.position;
        (remaining, Some(remaining))
    }
}

impl<T, F> ExactSizeIterator for RecurrenceIter<'_, T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
}

impl<T, F> FusedIterator for RecurrenceIter<'_, T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
}
