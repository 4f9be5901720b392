//! Textual step, condition and combine rules accepted on the command line.
//!
//! Rules are tiny expressions over a single `BigInt` operand:
//!
//! | kind        | syntax                              | example |
//! |-------------|-------------------------------------|---------|
//! | step        | `+K`, `-K`, `*K`, `^2`              | `*3`    |
//! | condition   | `>=K`, `>K`, `<=K`, `<K`, `==K`, `!=K` | `>=100` |
//!
//! Fold operations and recurrence formulas are closed sets and are exposed
//! as `clap::ValueEnum`s.

use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::Signed;

/// Error produced when a rule string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// Rule text was empty.
    #[error("empty rule")]
    Empty,

    /// The leading operator is not recognized.
    #[error("unknown operator in rule `{0}`")]
    UnknownOperator(String),

    /// The operand is not an integer.
    #[error("invalid operand in rule `{0}`")]
    InvalidOperand(String),
}

fn parse_operand(rule: &str, operand: &str) -> Result<BigInt, RuleError> {
    operand
        .trim()
        .parse()
        .map_err(|_| RuleError::InvalidOperand(rule.to_string()))
}

/// A single-step transformation `x -> x'`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepRule {
    Add(BigInt),
    Mul(BigInt),
    Square,
}

impl StepRule {
    /// Apply the rule to one value.
    #[must_use]
    pub fn apply(&self, x: &BigInt) -> BigInt {
        match self {
            Self::Add(k) => x + k,
            Self::Mul(k) => x * k,
            Self::Square => x * x,
        }
    }
}

impl FromStr for StepRule {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rule = s.trim();
        if rule.is_empty() {
            return Err(RuleError::Empty);
        }
        if rule == "^2" {
            return Ok(Self::Square);
        }
        if let Some(k) = rule.strip_prefix('+') {
            return parse_operand(rule, k).map(Self::Add);
        }
        if let Some(k) = rule.strip_prefix('-') {
            return parse_operand(rule, k).map(|k| Self::Add(-k));
        }
        if let Some(k) = rule.strip_prefix('*') {
            return parse_operand(rule, k).map(Self::Mul);
        }
        Err(RuleError::UnknownOperator(rule.to_string()))
    }
}

/// A comparison against a fixed operand, used as a stop condition or as a
/// filter predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    Ge(BigInt),
    Gt(BigInt),
    Le(BigInt),
    Lt(BigInt),
    Eq(BigInt),
    Ne(BigInt),
}

impl Condition {
    /// Whether the condition holds for `x`.
    #[must_use]
    pub fn holds(&self, x: &BigInt) -> bool {
        match self {
            Self::Ge(k) => x >= k,
            Self::Gt(k) => x > k,
            Self::Le(k) => x <= k,
            Self::Lt(k) => x < k,
            Self::Eq(k) => x == k,
            Self::Ne(k) => x != k,
        }
    }
}

impl FromStr for Condition {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rule = s.trim();
        if rule.is_empty() {
            return Err(RuleError::Empty);
        }
        // Two-character operators first so `>=` is not read as `>`.
        let table: [(&str, fn(BigInt) -> Self); 6] = [
            (">=", Self::Ge),
            ("<=", Self::Le),
            ("==", Self::Eq),
            ("!=", Self::Ne),
            (">", Self::Gt),
            ("<", Self::Lt),
        ];
        for (op, make) in table {
            if let Some(k) = rule.strip_prefix(op) {
                return parse_operand(rule, k).map(make);
            }
        }
        Err(RuleError::UnknownOperator(rule.to_string()))
    }
}

/// Binary operation used to fold a progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FoldOp {
    Sum,
    Product,
    Max,
    Min,
}

impl FoldOp {
    /// Combine the accumulator with the next element.
    #[must_use]
    pub fn apply(self, acc: BigInt, x: &BigInt) -> BigInt {
        match self {
            Self::Sum => acc + x,
            Self::Product => acc * x,
            Self::Max => {
                if *x > acc {
                    x.clone()
                } else {
                    acc
                }
            }
            Self::Min => {
                if *x < acc {
                    x.clone()
                } else {
                    acc
                }
            }
        }
    }
}

/// Recurrence combining the two most recent elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Formula {
    /// `prev2 + prev1` (Fibonacci, Lucas).
    Sum,
    /// `prev2 * prev1`.
    Product,
    /// `prev1 - prev2`.
    Difference,
}

impl Formula {
    /// Next element from `(prev2, prev1)`.
    #[must_use]
    pub fn apply(self, prev2: &BigInt, prev1: &BigInt) -> BigInt {
        match self {
            Self::Sum => prev2 + prev1,
            Self::Product => prev2 * prev1,
            Self::Difference => prev1 - prev2,
        }
    }
}

/// Order values by absolute value instead of signed value.
#[must_use]
pub fn compare_abs(a: &BigInt, b: &BigInt) -> std::cmp::Ordering {
    a.abs().cmp(&b.abs())
}
