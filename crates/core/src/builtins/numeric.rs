//! Lenient numeric coercion and the fixed-arity arithmetic builtins.
//!
//! Numbers in emitted scripts never raise: anything that fails to coerce
//! becomes [`Num::NotANumber`] and propagates through arithmetic until it
//! is printed as `NaN`.

use std::fmt;
use std::ops::Add;

use crate::value::{Value, format_number};

/// A tagged lenient-numeric result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Num {
    Number(f64),
    NotANumber,
}

impl Num {
    fn from_f64(f: f64) -> Self {
        if f.is_nan() { Num::NotANumber } else { Num::Number(f) }
    }

    /// The underlying float, with `NotANumber` as an actual NaN.
    pub fn as_f64(self) -> f64 {
        match self {
            Num::Number(f) => f,
            Num::NotANumber => f64::NAN,
        }
    }
}

impl Add for Num {
    type Output = Num;

    fn add(self, rhs: Num) -> Num {
        match (self, rhs) {
            (Num::Number(a), Num::Number(b)) => Num::from_f64(a + b),
            _ => Num::NotANumber,
        }
    }
}

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Num::Number(n) => write!(f, "{}", format_number(*n)),
            Num::NotANumber => write!(f, "NaN"),
        }
    }
}

impl From<Num> for Value {
    fn from(n: Num) -> Self {
        Value::Float(n.as_f64())
    }
}

/// Coerce a script value to a number.
///
/// Follows the host convention of the emitted scripts: empty and
/// whitespace-only strings are 0, a `0x` prefix parses as hex, booleans
/// are 1 and 0, and anything unparseable is `NotANumber`.
pub fn coerce(value: &Value) -> Num {
    match value {
        Value::Int(i) => Num::Number(*i as f64),
        Value::Float(f) => Num::from_f64(*f),
        Value::Bool(b) => Num::Number(if *b { 1.0 } else { 0.0 }),
        Value::Str(s) => {
            let s = s.trim();
            if s.is_empty() {
                return Num::Number(0.0);
            }
            if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
                return match u64::from_str_radix(hex, 16) {
                    Ok(v) => Num::Number(v as f64),
                    Err(_) => Num::NotANumber,
                };
            }
            match s.parse::<f64>() {
                Ok(f) => Num::from_f64(f),
                Err(_) => Num::NotANumber,
            }
        }
    }
}

/// Sum exactly four values after coercing each, left to right.
pub fn sum4(a: &Value, b: &Value, c: &Value, d: &Value) -> Num {
    coerce(a) + coerce(b) + coerce(c) + coerce(d)
}

/// Parse an integer prefix of `s` in the given radix.
///
/// Longest-valid-prefix semantics: leading whitespace and an optional sign
/// are allowed, a `0x` prefix is skipped when the radix is 16, and input
/// with no leading digits is `NotANumber`.
pub fn parse_int(s: &str, radix: u32) -> Num {
    let s = s.trim();
    let (sign, rest) = match s.strip_prefix('-') {
        Some(r) => (-1.0, r),
        None => (1.0, s.strip_prefix('+').unwrap_or(s)),
    };
    let rest = if radix == 16 {
        rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")).unwrap_or(rest)
    } else {
        rest
    };

    let digits: String = rest.chars().take_while(|c| c.is_digit(radix)).collect();
    if digits.is_empty() {
        return Num::NotANumber;
    }
    match i64::from_str_radix(&digits, radix) {
        Ok(v) => Num::Number(sign * v as f64),
        Err(_) => Num::NotANumber,
    }
}

/// Strict greater-than comparison.
pub fn is_greater(a: i64, b: i64) -> bool {
    a > b
}
