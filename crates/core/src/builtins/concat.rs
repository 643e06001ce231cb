//! Bounded variadic concatenation.

use crate::value::Value;

/// Concatenate up to `limit` leading entries of `values` into one string.
///
/// The effective count is `min(limit, values.len())`, clamped at zero, so
/// an oversized, zero or negative limit never fails. Present values are
/// appended in order via their display form; absent entries are skipped
/// without a separator or placeholder.
pub fn concat(limit: i64, values: &[Option<Value>]) -> String {
    let count = limit.clamp(0, values.len() as i64) as usize;
    let mut out = String::new();
    for value in values.iter().take(count).flatten() {
        out.push_str(&value.to_string());
    }
    out
}
