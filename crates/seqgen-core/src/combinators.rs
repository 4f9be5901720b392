//! Predicate and comparator combinators.

use std::cmp::Ordering;

use crate::error::{require, SeqError};

/// A boxed, reusable predicate over `T`.
pub type Predicate<'a, T> = Box<dyn Fn(&T) -> bool + 'a>;

/// Combine predicates with logical AND.
///
/// The returned predicate holds for a value iff every present predicate
/// holds for it. Evaluation is left to right and stops at the first `false`.
/// `None` slots are skipped, so an empty or all-`None` collection yields a
/// predicate that is always `true`.
///
/// # Errors
///
/// [`SeqError::MissingArgument`] if `predicates` itself is `None`.
///
/// # Example
/// ```
/// use seqgen_core::combinators::{combine_predicates, Predicate};
///
/// let positive: Predicate<i32> = Box::new(|x| *x > 0);
/// let small: Predicate<i32> = Box::new(|x| *x < 10);
/// let in_range = combine_predicates(Some(vec![Some(positive), None, Some(small)])).unwrap();
/// assert!(in_range(&5));
/// assert!(!in_range(&15));
/// ```
pub fn combine_predicates<'a, T, I>(predicates: Option<I>) -> Result<Predicate<'a, T>, SeqError>
where
    T: 'a,
    I: IntoIterator<Item = Option<Predicate<'a, T>>>,
{
    let predicates: Vec<Predicate<'a, T>> = require(predicates, "predicates")?
        .into_iter()
        .flatten()
        .collect();
    tracing::trace!(count = predicates.len(), "predicates combined");
    Ok(Box::new(move |value: &T| {
        predicates.iter().all(|pred| pred(value))
    }))
}

/// Return the larger of two values according to `comparer`.
///
/// `lhs` wins unless `comparer(&lhs, &rhs)` is [`Ordering::Less`], so ties
/// return the left-hand value.
///
/// # Errors
///
/// [`SeqError::MissingArgument`] if `comparer` is `None`.
///
/// # Example
/// ```
/// use seqgen_core::combinators::find_max;
///
/// assert_eq!(find_max(3, 5, Some(i32::cmp)), Ok(5));
/// ```
pub fn find_max<T, F>(lhs: T, rhs: T, comparer: Option<F>) -> Result<T, SeqError>
where
    F: FnOnce(&T, &T) -> Ordering,
{
    let comparer = require(comparer, "comparer")?;
    if comparer(&lhs, &rhs) == Ordering::Less {
        Ok(rhs)
    } else {
        Ok(lhs)
    }
}
