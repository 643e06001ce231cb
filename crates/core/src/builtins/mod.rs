//! Runtime builtins the compiler emits calls to.
//!
//! Every builtin is stateless and reentrant, and none of them fail: bad
//! input degrades to a documented sentinel (current moment for dates,
//! [`numeric::Num::NotANumber`] for arithmetic, clamping for counts).

pub mod concat;
pub mod datediff;
pub mod numeric;
