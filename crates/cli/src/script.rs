//! The emitted demo program, replayed against a line-oriented sink.
//!
//! This is the fixed statement sequence the compiler generated: a flat
//! script with one bounded loop and no error paths. Every printed value
//! goes through `out` one line at a time, in order.

use std::io::{self, Write};

use gleblang_core::builtins::concat::concat;
use gleblang_core::builtins::datediff::diff_seconds;
use gleblang_core::builtins::numeric::{is_greater, parse_int, sum4};
use gleblang_core::value::Value;

/// 365.25 days. The year estimate below is a deliberate approximation,
/// not calendar arithmetic.
const SECONDS_PER_YEAR: f64 = 31_557_600.0;

pub fn run<W: Write>(out: &mut W) -> io::Result<()> {
    tracing::debug!("script start");

    writeln!(out, "Here everything begins!")?;

    let x = 5;
    let y = 10;
    let z = is_greater(x, y);
    writeln!(out, "{z}")?;
    let z_str = z.to_string();
    writeln!(out, "{z_str}")?;

    for i in 0..5 {
        writeln!(out, "This is {i}th iteration")?;
    }

    let curr = chrono::Local::now().timestamp();
    writeln!(out, "{curr}")?;
    let years = curr as f64 / SECONDS_PER_YEAR + 1970.0;
    writeln!(out, "the year is now")?;
    writeln!(out, "{years}")?;

    writeln!(out, "{}", diff_seconds("16112006", "17122025"))?;

    let a = ((2 + 3) * 4 - 12_i64).pow(2);
    writeln!(out, "{a}")?;

    let hex1 = parse_int("f", 16);
    let hex2 = parse_int("a", 16);
    writeln!(out, "{}", hex1 + hex2)?;

    let total = sum4(&Value::Int(19), &Value::from(hex2), &Value::Int(3), &Value::from(parse_int("f", 16)));
    writeln!(out, "{total}")?;

    // the source literals were written 04 and 07
    let oct1 = 4;
    let oct2 = 7;
    writeln!(out, "{}", oct1 + oct2)?;

    let parts = [Some(Value::from("n")), Some(Value::from("g")), Some(Value::from("s"))];
    writeln!(out, "{}", concat(3, &parts))?;

    say_hello(out)?;

    tracing::debug!("script finished");
    Ok(())
}

/// Two-line greeting.
pub fn say_hi<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Hi")?;
    writeln!(out, "Gleb")
}

/// One-line greeting, built up the way the script assembles strings.
pub fn say_hello<W: Write>(out: &mut W) -> io::Result<()> {
    let hello = "Hello ".to_string() + "Gleb" + " !";
    writeln!(out, "{hello}")
}
