//! The three demo commands
//!
//! Each handler receives the arguments that follow the command word and
//! returns the line to print.

use crate::{
    core::number,
    error::{DemoError, Result},
};
use tracing::{debug, instrument};

/// `greet <name>`: only the first operand is used
#[instrument(skip_all, fields(operands = operands.len()))]
pub fn greet<S: AsRef<str>>(operands: &[S]) -> Result<String> {
    let name = operands
        .first()
        .ok_or(DemoError::missing_argument("greet", "a name"))?;
    Ok(format!("Hello, {}!", name.as_ref()))
}

/// `sum <numbers...>`
#[instrument(skip_all, fields(operands = operands.len()))]
pub fn sum<S: AsRef<str>>(operands: &[S]) -> Result<String> {
    if operands.is_empty() {
        return Err(DemoError::missing_argument("sum", "at least one number"));
    }
    let total = number::accumulate(operands)?;
    debug!("Sum total: {}", total);
    Ok(number::format_total(total))
}

/// `echo <text...>`: operands joined by single spaces
#[instrument(skip_all, fields(operands = operands.len()))]
pub fn echo<S: AsRef<str>>(operands: &[S]) -> Result<String> {
    if operands.is_empty() {
        return Err(DemoError::missing_argument("echo", "some text"));
    }
    let words: Vec<&str> = operands.iter().map(|s| s.as_ref()).collect();
    Ok(words.join(" "))
}
