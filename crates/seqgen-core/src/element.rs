//! Direct evaluation of a progression without materializing it.

use crate::error::{ensure_positive, require, SeqError};

/// Return the `number`-th element (1-indexed) of the progression starting
/// at `first`.
///
/// `number == 1` returns the seed untouched; otherwise `formula` is applied
/// `number - 1` times. Only the running value is kept.
///
/// # Errors
///
/// [`SeqError::OutOfRange`] if `number` is zero, [`SeqError::MissingArgument`]
/// if `formula` is `None`.
///
/// # Example
/// ```
/// use seqgen_core::element::get_element;
///
/// assert_eq!(get_element(3, Some(|x: &i32| x + 4), 5), Ok(19));
/// ```
pub fn get_element<T, F>(first: T, formula: Option<F>, number: usize) -> Result<T, SeqError>
where
    F: Fn(&T) -> T,
{
    let number = ensure_positive(number, "number")?;
    let formula = require(formula, "formula")?;

    let mut result = first;
    for _ in 1..number {
        result = formula(&result);
    }
    Ok(result)
}

/// Fold the first `count` elements of a progression with `operation`.
///
/// The accumulator starts at `first`; every subsequent element produced by
/// `formula` is combined into it as `operation(accumulator, element)`.
/// `count == 1` returns the seed without calling either function.
///
/// # Errors
///
/// [`SeqError::OutOfRange`] if `count` is zero, [`SeqError::MissingArgument`]
/// if `formula` or `operation` is `None`.
///
/// # Example
/// ```
/// use seqgen_core::element::calculate;
///
/// // 1 + 2 + 3 + 4 + 5
/// let sum = calculate(1, Some(|x: &i32| x + 1), Some(|a: i32, b: &i32| a + b), 5);
/// assert_eq!(sum, Ok(15));
/// ```
pub fn calculate<T, F, O>(
    first: T,
    formula: Option<F>,
    operation: Option<O>,
    count: usize,
) -> Result<T, SeqError>
where
    T: Clone,
    F: Fn(&T) -> T,
    O: Fn(T, &T) -> T,
{
    let count = ensure_positive(count, "count")?;
    let formula = require(formula, "formula")?;
    let operation = require(operation, "operation")?;

    let mut current = first.clone();
    let mut value = first;
    for _ in 1..count {
        current = formula(&current);
        value = operation(value, &current);
    }
    Ok(value)
}
