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


//! # SimpleCalc Core
//!
//! A stateless arithmetic calculator over IEEE-754 floating-point numbers.
//! The whole contract is four pure binary operations whose results are
//! exactly what the hardware produces: no validation, no rounding policy,
//! and no error paths. Division by zero returns a signed infinity.
//!
//! ## Modules
//!
//! - `calculator`: The zero-sized `Calculator` with `add`, `sub`, `mul`,
//!   `div` over `f64`, and `compute` for runtime operator dispatch.
//! - `operator`: The `Operator` enum naming each operation, with symbols,
//!   stable numeric codes, text parsing, and generic application to any
//!   `CalcFloat`.
//! - `num`: Float constant traits (`MinusOne`, `Zero`, `PlusOne`) and the
//!   `CalcFloat` trait alias over `num_traits::Float`.
//!
//! Refer to each module for detailed APIs and examples.

pub mod calculator;
pub mod num;
pub mod operator;
