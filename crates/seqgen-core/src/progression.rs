//! Lazy progressions driven by a single-step formula.
//!
//! A progression starts at a seed and repeatedly applies a step function to
//! the previous element. Two flavours exist: [`Progression`] stops after a
//! fixed number of elements, [`ProgressionUntil`] stops at the first element
//! that satisfies a caller predicate (that element is not yielded).
//!
//! Both are restartable: iterating a progression by reference creates a new
//! cursor that starts again from the seed.
//!
//! # Example
//! ```
//! use seqgen_core::progression::generate_progression;
//!
//! let powers = generate_progression(1u64, Some(|x: &u64| x * 2), 6).unwrap();
//! assert_eq!(powers.iter().collect::<Vec<_>>(), [1, 2, 4, 8, 16, 32]);
//! // A second pass re-runs the generation from the seed.
//! assert_eq!(powers.iter().sum::<u64>(), 63);
//! ```

use std::fmt;
use std::iter::FusedIterator;

use crate::error::{ensure_positive, require, SeqError};

/// Build a progression of exactly `count` elements.
///
/// The first element is `first`; each following element is `formula`
/// applied to its predecessor. Arguments are validated here, before any
/// element is produced.
///
/// # Errors
///
/// [`SeqError::OutOfRange`] if `count` is zero, [`SeqError::MissingArgument`]
/// if `formula` is `None`.
pub fn generate_progression<T, F>(
    first: T,
    formula: Option<F>,
    count: usize,
) -> Result<Progression<T, F>, SeqError>
where
    T: Clone,
    F: Fn(&T) -> T,
{
    let count = ensure_positive(count, "count")?;
    let formula = require(formula, "formula")?;
    tracing::trace!(count, "bounded progression created");
    Ok(Progression {
        first,
        formula,
        count,
    })
}

/// Build a progression that runs until `finished` holds.
///
/// The predicate is checked before every element; the first element for
/// which it returns `true` ends the sequence and is excluded. If it never
/// returns `true` the sequence is infinite.
///
/// # Errors
///
/// [`SeqError::MissingArgument`] if `formula` or `finished` is `None`.
pub fn generate_progression_until<T, F, P>(
    first: T,
    formula: Option<F>,
    finished: Option<P>,
) -> Result<ProgressionUntil<T, F, P>, SeqError>
where
    T: Clone,
    F: Fn(&T) -> T,
    P: Fn(&T) -> bool,
{
    let formula = require(formula, "formula")?;
    let finished = require(finished, "finished")?;
    tracing::trace!("predicate-terminated progression created");
    Ok(ProgressionUntil {
        first,
        formula,
        finished,
    })
}

/// A validated, restartable progression of fixed length.
#[derive(Clone)]
pub struct Progression<T, F> {
    first: T,
    formula: F,
    count: usize,
}

impl<T, F> Progression<T, F>
where
    T: Clone,
    F: Fn(&T) -> T,
{
    /// Start a fresh pass over the progression.
    #[must_use]
    pub fn iter(&self) -> ProgressionIter<'_, T, F> {
        ProgressionIter {
            current: None,
            first: &self.first,
            formula: &self.formula,
            remaining: self.count,
        }
    }

    /// Number of elements every pass yields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Always `false`; a progression holds at least its seed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Progression<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Progression")
            .field("first", &self.first)
            .field("count", &self.count)
            .finish_non_exhaustive()
    }
}

impl<'a, T, F> IntoIterator for &'a Progression<T, F>
where
    T: Clone,
    F: Fn(&T) -> T,
{
    type Item = T;
    type IntoIter = ProgressionIter<'a, T, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Cursor over a [`Progression`].
pub struct ProgressionIter<'a, T, F> {
    current: Option<T>,
    first: &'a T,
    formula: &'a F,
    remaining: usize,
}

impl<T, F> Iterator for ProgressionIter<'_, T, F>
where
    T: Clone,
    F: Fn(&T) -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let next = match self.current.take() {
            None => self.first.clone(),
            Some(prev) => (self.formula)(&prev),
        };
        self.current = Some(next.clone());
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, F> ExactSizeIterator for ProgressionIter<'_, T, F>
where
    T: Clone,
    F: Fn(&T) -> T,
{
}

impl<T, F> FusedIterator for ProgressionIter<'_, T, F>
where
    T: Clone,
    F: Fn(&T) -> T,
{
}

/// A validated, restartable progression bounded by a stop predicate.
#[derive(Clone)]
pub struct ProgressionUntil<T, F, P> {
    first: T,
    formula: F,
    finished: P,
}

impl<T, F, P> ProgressionUntil<T, F, P>
where
    T: Clone,
    F: Fn(&T) -> T,
    P: Fn(&T) -> bool,
{
    /// Start a fresh pass over the progression.
    #[must_use]
    pub fn iter(&self) -> ProgressionUntilIter<'_, T, F, P> {
        ProgressionUntilIter {
            last: None,
            done: false,
            first: &self.first,
            formula: &self.formula,
            finished: &self.finished,
        }
    }
}

impl<T: fmt::Debug, F, P> fmt::Debug for ProgressionUntil<T, F, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressionUntil")
            .field("first", &self.first)
            .finish_non_exhaustive()
    }
}

impl<'a, T, F, P> IntoIterator for &'a ProgressionUntil<T, F, P>
where
    T: Clone,
    F: Fn(&T) -> T,
    P: Fn(&T) -> bool,
{
    type Item = T;
    type IntoIter = ProgressionUntilIter<'a, T, F, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Cursor over a [`ProgressionUntil`].
///
/// `last` is the most recently yielded element; the step function runs only
/// when the consumer asks for the element after it. Once the predicate has
/// fired `done` is set and neither function is called again.
pub struct ProgressionUntilIter<'a, T, F, P> {
    last: Option<T>,
    done: bool,
    first: &'a T,
    formula: &'a F,
    finished: &'a P,
}

impl<T, F, P> Iterator for ProgressionUntilIter<'_, T, F, P>
where
    T: Clone,
    F: Fn(&T) -> T,
    P: Fn(&T) -> bool,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.done {
            return None;
        }
        let candidate = match self.last.take() {
            None => self.first.clone(),
            Some(prev) => (self.formula)(&prev),
        };
        if (self.finished)(&candidate) {
            self.done = true;
            return None;
        }
        self.last = Some(candidate.clone());
        Some(candidate)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, None)
        }
    }
}

impl<T, F, P> FusedIterator for ProgressionUntilIter<'_, T, F, P>
where
    T: Clone,
    F: Fn(&T) -> T,
    P: Fn(&T) -> bool,
{
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn yields_exactly_count_elements() {
        let seq = generate_progression(1, Some(|x: &i32| x + 1), 5).unwrap();
        assert_eq!(seq.iter().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
        assert_eq!(seq.len(), 5);
        assert!(!seq.is_empty());
    }

    #[test]
    fn count_one_yields_seed_only() {
        let calls = Cell::new(0);
        let seq = generate_progression(
            7,
            Some(|x: &i32| {
                calls.set(calls.get() + 1);
                x * 3
            }),
            1,
        )
        .unwrap();
        assert_eq!(seq.iter().collect::<Vec<_>>(), [7]);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn zero_count_is_rejected_eagerly() {
        let err = generate_progression(1, Some(|x: &i32| x + 1), 0).unwrap_err();
        assert_eq!(err, SeqError::OutOfRange { name: "count" });
    }

    #[test]
    fn missing_formula_is_rejected_eagerly() {
        let err = generate_progression::<i32, fn(&i32) -> i32>(1, None, 3).unwrap_err();
        assert_eq!(err, SeqError::MissingArgument { name: "formula" });
    }

    #[test]
    fn range_is_checked_before_formula() {
        let err = generate_progression::<i32, fn(&i32) -> i32>(1, None, 0).unwrap_err();
        assert_eq!(err, SeqError::OutOfRange { name: "count" });
    }

    #[test]
    fn formula_runs_only_on_demand() {
        let calls = Cell::new(0);
        let seq = generate_progression(
            0u32,
            Some(|x: &u32| {
                calls.set(calls.get() + 1);
                x + 10
            }),
            1_000,
        )
        .unwrap();
        assert_eq!(calls.get(), 0);
        let taken: Vec<_> = seq.iter().take(3).collect();
        assert_eq!(taken, [0, 10, 20]);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn restarts_from_seed() {
        let seq = generate_progression(2u64, Some(|x: &u64| x * x), 4).unwrap();
        let a: Vec<_> = seq.iter().collect();
        let b: Vec<_> = (&seq).into_iter().collect();
        assert_eq!(a, [2, 4, 16, 256]);
        assert_eq!(a, b);
    }

    #[test]
    fn independent_cursors() {
        let seq = generate_progression(0, Some(|x: &i32| x + 1), 4).unwrap();
        let mut left = seq.iter();
        let mut right = seq.iter();
        assert_eq!(left.next(), Some(0));
        assert_eq!(left.next(), Some(1));
        assert_eq!(right.next(), Some(0));
        assert_eq!(left.next(), Some(2));
    }

    #[test]
    fn exact_size_and_fused() {
        let seq = generate_progression('a', Some(|c: &char| *c), 3).unwrap();
        let mut it = seq.iter();
        assert_eq!(it.len(), 3);
        it.next();
        assert_eq!(it.len(), 2);
        it.by_ref().for_each(drop);
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn does_not_mutate_seed() {
        let seed = vec![1usize];
        let seq = generate_progression(
            seed.clone(),
            Some(|v: &Vec<usize>| {
                let mut next = v.clone();
                next.push(v.len() + 1);
                next
            }),
            3,
        )
        .unwrap();
        let last = seq.iter().last().unwrap();
        assert_eq!(last, [1, 2, 3]);
        assert_eq!(seq.iter().next(), Some(seed));
    }

    #[test]
    fn until_stops_before_terminating_element() {
        let seq =
            generate_progression_until(1, Some(|x: &i32| x * 2), Some(|x: &i32| *x > 20)).unwrap();
        assert_eq!(seq.iter().collect::<Vec<_>>(), [1, 2, 4, 8, 16]);
    }

    #[test]
    fn until_empty_when_seed_finishes() {
        let seq =
            generate_progression_until(100, Some(|x: &i32| x + 1), Some(|x: &i32| *x >= 100))
                .unwrap();
        assert_eq!(seq.iter().count(), 0);
    }

    #[test]
    fn until_missing_arguments() {
        let err = generate_progression_until::<i32, fn(&i32) -> i32, _>(
            0,
            None,
            Some(|_: &i32| true),
        )
        .unwrap_err();
        assert_eq!(err, SeqError::MissingArgument { name: "formula" });

        let err = generate_progression_until::<i32, _, fn(&i32) -> bool>(
            0,
            Some(|x: &i32| *x),
            None,
        )
        .unwrap_err();
        assert_eq!(err, SeqError::MissingArgument { name: "finished" });
    }

    #[test]
    fn until_is_fused_after_stop() {
        let checks = Cell::new(0);
        let seq = generate_progression_until(
            0,
            Some(|x: &i32| x + 1),
            Some(|x: &i32| {
                checks.set(checks.get() + 1);
                *x == 2
            }),
        )
        .unwrap();
        let mut it = seq.iter();
        assert_eq!(it.next(), Some(0));
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
        assert_eq!(checks.get(), 3);
        assert_eq!(it.size_hint(), (0, Some(0)));
    }

    #[test]
    fn until_steps_only_on_demand() {
        let steps = Cell::new(0);
        let seq = generate_progression_until(
            1,
            Some(|x: &i32| {
                steps.set(steps.get() + 1);
                x + 1
            }),
            Some(|x: &i32| *x > 100),
        )
        .unwrap();
        let mut it = seq.iter();
        assert_eq!(it.next(), Some(1));
        assert_eq!(steps.get(), 0);
        assert_eq!(it.next(), Some(2));
        assert_eq!(steps.get(), 1);
    }

    #[test]
    fn until_restarts_from_seed() {
        let seq =
            generate_progression_until(3, Some(|x: &i32| x * 3), Some(|x: &i32| *x > 200)).unwrap();
        let first_pass: Vec<_> = seq.iter().collect();
        let second_pass: Vec<_> = (&seq).into_iter().collect();
        assert_eq!(first_pass, [3, 9, 27, 81]);
        assert_eq!(first_pass, second_pass);
    }

    #[test]
    fn until_unbounded_can_be_truncated_by_consumer() {
        let seq =
            generate_progression_until(0u64, Some(|x: &u64| x + 1), Some(|_: &u64| false)).unwrap();
        assert_eq!(seq.iter().take(4).collect::<Vec<_>>(), [0, 1, 2, 3]);
    }
}
