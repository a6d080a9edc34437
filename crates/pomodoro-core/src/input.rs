//! Prompted integer input with default substitution.
//!
//! Every invalid answer (blank, not a number, negative) resolves to the
//! caller's default and is explained to the user. Nothing here fails.

use std::io::{BufRead, Write};

use crate::error::InputError;

/// Parse a raw answer as a non-negative integer.
///
/// Surrounding whitespace is ignored and a leading `+` is accepted.
/// `-0` is zero, not a negative value. Single underscores between digits are
/// separators, so `1_000` is a thousand.
pub fn parse_count(raw: &str) -> Result<u64, InputError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(InputError::Blank);
    }
    let value: i128 = strip_separators(raw)
        .and_then(|digits| digits.parse().ok())
        .ok_or_else(|| InputError::NotANumber(raw.to_string()))?;
    if value < 0 {
        return Err(InputError::Negative(value));
    }
    u64::try_from(value).map_err(|_| InputError::TooLarge(value))
}

/// Drop `_` separators. `None` if one is not flanked by ASCII digits.
fn strip_separators(raw: &str) -> Option<String> {
    let bytes = raw.as_bytes();
    let mut out = String::with_capacity(raw.len());
    for (i, c) in raw.char_indices() {
        if c != '_' {
            out.push(c);
            continue;
        }
        let before = i.checked_sub(1).and_then(|j| bytes.get(j));
        let after = bytes.get(i + 1);
        match (before, after) {
            (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit() => {}
            _ => return None,
        }
    }
    Some(out)
}

/// Show `"{prompt} (default {default}): "`, read one line and resolve it.
///
/// EOF and read failures count as a blank answer.
pub fn resolve_int<R, W>(input: &mut R, output: &mut W, prompt: &str, default: u64) -> u64
where
    R: BufRead,
    W: Write,
{
    if let Err(e) = write!(output, "{prompt} (default {default}): ").and_then(|_| output.flush()) {
        tracing::warn!(error = %e, "failed to write prompt");
    }

    let mut line = String::new();
    if let Err(e) = input.read_line(&mut line) {
        tracing::warn!(error = %e, "failed to read answer, treating as blank");
        line.clear();
    }

    match parse_count(&line) {
        Ok(value) => value,
        Err(reason) => {
            tracing::debug!(prompt, %reason, default, "substituting default");
            if let Err(e) = writeln!(output, "{}\n", reason.fallback_message(default)) {
                tracing::warn!(error = %e, "failed to write fallback notice");
            }
            default
        }
    }
}
