// Game version tokens and their display form
//
// Tokens come from load order file names (`loadorder154.txt` -> "154") and
// are used unmodified as lookup keys. Only the display form is reformatted.

use crate::constants::{LOAD_ORDER_PREFIX, LOAD_ORDER_SUFFIX};
use std::cmp::Ordering;

/// Format a raw version token for display
///
/// Examples:
/// - "154" -> "1.54"
/// - "1_50" -> "1.50"
/// - "02" -> "0.2"
/// - "1.49" -> "1.49"
///
/// Assumes the token encodes two decimal places when it has no separator.
pub fn format_version(token: &str) -> String {
    let value = token.replace('_', ".");

    if value.contains('.') {
        return value;
    }

    let all_digits = !value.is_empty() && value.chars().all(|c| c.is_ascii_digit());
    if !all_digits {
        return value;
    }

    match value.len() {
        len if len > 2 => format!("{}.{}", &value[..len - 2], &value[len - 2..]),
        2 => {
            // The leading zero of "02" is the integer part
            let fraction = value.strip_prefix('0').unwrap_or(&value);
            format!("0.{}", fraction)
        }
        _ => value,
    }
}

/// Extract the version token from a load order file name
///
/// Returns `None` for names that are not load order files.
pub fn version_token_from_filename(filename: &str) -> Option<String> {
    let token = filename
        .strip_prefix(LOAD_ORDER_PREFIX)?
        .strip_suffix(LOAD_ORDER_SUFFIX)?;

    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// File name holding the load order for a version token
pub fn load_order_filename(token: &str) -> String {
    format!("{}{}{}", LOAD_ORDER_PREFIX, token, LOAD_ORDER_SUFFIX)
}

/// Sort tokens by their leading numeric value, ascending
///
/// Tokens without a numeric prefix go last. Equal keys keep input order.
pub fn sort_version_tokens(tokens: &mut [String]) {
    tokens.sort_by(|a, b| match (numeric_prefix(a), numeric_prefix(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

/// Longest prefix that reads as a decimal number ("1_50" -> 1.0)
fn numeric_prefix(token: &str) -> Option<f64> {
    let token = token.trim_start();
    let mut end = 0;
    let mut seen_dot = false;

    for (i, c) in token.char_indices() {
        if c.is_ascii_digit() {
            end = i + 1;
        } else if c == '.' && !seen_dot {
            seen_dot = true;
        } else {
            break;
        }
    }

    token[..end].parse().ok()
}
