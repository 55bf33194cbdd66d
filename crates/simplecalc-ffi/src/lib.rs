// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.


//! # SimpleCalc FFI
//!
//! C-compatible bindings for the SimpleCalc calculator, for hosts such as C,
//! C++, Swift, or the JVM through JNI/JNA.
//!
//! Every function takes and returns plain `double` values, so no handles or
//! pointers cross the boundary and nothing needs to be freed. Results follow
//! IEEE-754 exactly: dividing by zero returns an infinity (or NaN for `0/0`),
//! never an error code.
//!
//! Operators are identified by their stable numeric code:
//!
//! | Code | Operator |
//! |------|----------|
//! | 0    | add      |
//! | 1    | sub      |
//! | 2    | mul      |
//! | 3    | div      |
//!
//! Passing any other code is a contract violation. Following a fail-fast
//! strategy, the call panics; with `extern "C"` this aborts the process
//! instead of unwinding into foreign frames.
//!
//! ## Exported API
//!
//! * `simplecalc_add`
//! * `simplecalc_sub`
//! * `simplecalc_mul`
//! * `simplecalc_div`
//! * `simplecalc_compute`
//! * `simplecalc_operator_symbol`

use simplecalc_core::calculator::Calculator;
use simplecalc_core::operator::Operator;

const CALCULATOR: Calculator = Calculator::new();

#[inline]
fn operator_or_panic(fn_name: &str, op_code: u32) -> Operator {
    match Operator::from_code(op_code) {
        Some(op) => op,
        None => panic!("called `{}` with invalid operator code: {}", fn_name, op_code),
    }
}

/// Returns `a + b`.
#[no_mangle]
pub extern "C" fn simplecalc_add(a: f64, b: f64) -> f64 {
    CALCULATOR.add(a, b)
}

/// Returns `a - b`.
#[no_mangle]
pub extern "C" fn simplecalc_sub(a: f64, b: f64) -> f64 {
    CALCULATOR.sub(a, b)
}

/// Returns `a * b`.
#[no_mangle]
pub extern "C" fn simplecalc_mul(a: f64, b: f64) -> f64 {
    CALCULATOR.mul(a, b)
}

/// Returns `a / b`. A zero divisor yields a signed infinity, or NaN for `0/0`.
#[no_mangle]
pub extern "C" fn simplecalc_div(a: f64, b: f64) -> f64 {
    CALCULATOR.div(a, b)
}

/// Evaluates `a <op> b` for the operator identified by `op_code`.
///
/// # Panics
///
/// This function will panic if `op_code` is not in `0..=3`.
#[no_mangle]
pub extern "C" fn simplecalc_compute(op_code: u32, a: f64, b: f64) -> f64 {
    let op = operator_or_panic("simplecalc_compute", op_code);
    CALCULATOR.compute(op, a, b)
}

/// Returns the ASCII symbol (`+`, `-`, `*`, `/`) of the operator identified by `op_code`.
///
/// # Panics
///
/// This function will panic if `op_code` is not in `0..=3`.
#[no_mangle]
pub extern "C" fn simplecalc_operator_symbol(op_code: u32) -> u8 {
    let op = operator_or_panic("simplecalc_operator_symbol", op_code);
    // All canonical symbols are ASCII.
    op.symbol() as u8
}
