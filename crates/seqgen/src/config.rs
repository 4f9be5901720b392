//! Application configuration from CLI flags and environment.

use clap::{Parser, Subcommand};
use num_bigint::BigInt;

use crate::rules::{Condition, FoldOp, Formula, StepRule};

/// Default cap on elements printed by `until`.
pub const DEFAULT_UNTIL_LIMIT: usize = 10_000;

/// seqgen — generate progressions, recurrences and folds over big integers.
#[derive(Parser, Debug)]
#[command(name = "seqgen", version, about)]
pub struct AppConfig {
    /// Verbose output (debug logging).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit results as JSON.
    #[arg(long, global = true, env = "SEQGEN_JSON")]
    pub json: bool,

    /// Quiet mode (only output the values, one per line).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// One subcommand per sequence operation.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fixed-length progression: seed, then repeated steps.
    Progression {
        /// Seed value.
        #[arg(long, allow_hyphen_values = true)]
        first: BigInt,
        /// Step rule, e.g. "+3", "*2", "^2".
        #[arg(long, allow_hyphen_values = true)]
        step: StepRule,
        /// Number of elements.
        #[arg(short = 'n', long)]
        count: usize,
    },

    /// Progression that stops before the first value matching a condition.
    Until {
        /// Seed value.
        #[arg(long, allow_hyphen_values = true)]
        first: BigInt,
        /// Step rule, e.g. "+3", "*2", "^2".
        #[arg(long, allow_hyphen_values = true)]
        step: StepRule,
        /// Stop condition, e.g. ">=100".
        #[arg(long)]
        until: Condition,
        /// Maximum number of elements to print.
        #[arg(long, default_value_t = DEFAULT_UNTIL_LIMIT)]
        limit: usize,
    },

    /// The n-th element (1-indexed) of a progression.
    Element {
        /// Seed value.
        #[arg(long, allow_hyphen_values = true)]
        first: BigInt,
        /// Step rule, e.g. "+3", "*2", "^2".
        #[arg(long, allow_hyphen_values = true)]
        step: StepRule,
        /// 1-based position.
        #[arg(short = 'n', long)]
        number: usize,
    },

    /// Fold the first `count` elements of a progression.
    Calculate {
        /// Seed value.
        #[arg(long, allow_hyphen_values = true)]
        first: BigInt,
        /// Step rule, e.g. "+3", "*2", "^2".
        #[arg(long, allow_hyphen_values = true)]
        step: StepRule,
        /// Combining operation.
        #[arg(long, value_enum, default_value = "sum")]
        op: FoldOp,
        /// Number of elements folded.
        #[arg(short = 'n', long)]
        count: usize,
    },

    /// Two-term recurrence (Fibonacci-like).
    Sequence {
        /// First seed.
        #[arg(long, allow_hyphen_values = true, default_value = "0")]
        first: BigInt,
        /// Second seed.
        #[arg(long, allow_hyphen_values = true, default_value = "1")]
        second: BigInt,
        /// Recurrence combining the two previous elements.
        #[arg(long, value_enum, default_value = "sum")]
        formula: Formula,
        /// Number of elements.
        #[arg(short = 'n', long)]
        count: usize,
    },

    /// Test a value against the conjunction of conditions.
    Check {
        /// Value to test.
        #[arg(allow_hyphen_values = true)]
        value: BigInt,
        /// Condition that must hold; repeat for AND.
        #[arg(long = "all")]
        conditions: Vec<Condition>,
    },

    /// The larger of two values (ties keep the first).
    Max {
        /// Left-hand value.
        #[arg(allow_hyphen_values = true)]
        lhs: BigInt,
        /// Right-hand value.
        #[arg(allow_hyphen_values = true)]
        rhs: BigInt,
        /// Compare absolute values.
        #[arg(long)]
        by_abs: bool,
    },
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
