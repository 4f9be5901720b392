//! Application entry point and dispatch.

use std::io::Write;

use anyhow::{Context, Result};
use num_bigint::BigInt;

use seqgen_core::{
    calculate, combine_predicates, find_max, generate_progression, generate_progression_until,
    generate_sequence, get_element, Predicate,
};

use crate::config::{AppConfig, Command};
use crate::output::{render, RenderOptions, Report};
use crate::rules::{compare_abs, Condition};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    let report = evaluate(&config.command)?;
    let opts = RenderOptions::from_config(config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render(&report, opts, &mut out).context("failed to write output")?;
    out.flush().context("failed to flush output")?;
    Ok(())
}

/// Evaluate one subcommand into a report.
pub fn evaluate(command: &Command) -> Result<Report> {
    tracing::debug!(?command, "evaluating");
    let report = match command {
        Command::Progression { first, step, count } => {
            let seq = generate_progression(first.clone(), Some(|x: &BigInt| step.apply(x)), *count)
                .context("invalid progression")?;
            Report::sequence("progression", &seq)
        }

        Command::Until {
            first,
            step,
            until,
            limit,
        } => {
            let seq = generate_progression_until(
                first.clone(),
                Some(|x: &BigInt| step.apply(x)),
                Some(|x: &BigInt| until.holds(x)),
            )
            .context("invalid progression")?;
            // One extra element tells whether the limit cut the sequence.
            let mut values: Vec<BigInt> = seq.iter().take(limit.saturating_add(1)).collect();
            let truncated = values.len() > *limit;
            if truncated {
                values.truncate(*limit);
                tracing::warn!(limit, "stop condition not reached, output truncated");
            }
            Report::sequence("until", values).with_truncated(truncated)
        }

        Command::Element {
            first,
            step,
            number,
        } => {
            let value = get_element(first.clone(), Some(|x: &BigInt| step.apply(x)), *number)
                .context("invalid element position")?;
            Report::scalar("element", value)
        }

        Command::Calculate {
            first,
            step,
            op,
            count,
        } => {
            let value = calculate(
                first.clone(),
                Some(|x: &BigInt| step.apply(x)),
                Some(|acc: BigInt, x: &BigInt| op.apply(acc, x)),
                *count,
            )
            .context("invalid fold")?;
            Report::scalar("calculate", value)
        }

        Command::Sequence {
            first,
            second,
            formula,
            count,
        } => {
            let seq = generate_sequence(
                first.clone(),
                second.clone(),
                Some(|a: &BigInt, b: &BigInt| formula.apply(a, b)),
                *count,
            )
            .context("invalid sequence")?;
            Report::sequence("sequence", &seq)
        }

        Command::Check { value, conditions } => {
            let all = combine_predicates(Some(conditions.iter().map(condition_predicate)))?;
            Report::scalar("check", all(value))
        }

        Command::Max { lhs, rhs, by_abs } => {
            let value = if *by_abs {
                find_max(lhs.clone(), rhs.clone(), Some(compare_abs))?
            } else {
                find_max(lhs.clone(), rhs.clone(), Some(BigInt::cmp))?
            };
            Report::scalar("max", value)
        }
    };
    Ok(report)
}

fn condition_predicate(cond: &Condition) -> Option<Predicate<'_, BigInt>> {
    Some(Box::new(move |x: &BigInt| cond.holds(x)))
}
