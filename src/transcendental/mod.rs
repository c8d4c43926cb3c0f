//! Exponential and hyperbolic functions by truncated Taylor series.
//!
//! Each function sums its Maclaurin series with [`series_sum_from`](crate::series::series_sum_from)
//! and applies element-wise over any [`Elementwise`] input. The plain
//! functions use [`SeriesSettings::default`] (50 terms, early stop at
//! `|term| < 1e-15`); the `_with` variants take explicit settings.
//!
//! # Functions
//!
//! | Function | First term | Ratio `r(n)` |
//! |----------|------------|--------------|
//! | [`exp`] | `1` | `x / n` |
//! | [`sinh`] | `x` | `x² / ((2n+1)(2n))` |
//! | [`cosh`] | `1` | `x² / ((2n)(2n−1))` |
//! | [`tanh`] | — | `sinh(x) / cosh(x)` |
//!
//! With a fixed term count accuracy degrades as `|x|` grows; this is the
//! intended precision/cost trade-off. NaN arguments propagate through the
//! series; ±inf arguments return the IEEE limits (e^−∞ = 0, tanh(±∞) = ±1)
//! without summing.
//!
//! # Example
//!
//! ```
//! use numseries::transcendental::{exp, sinh, cosh, tanh};
//!
//! assert_eq!(exp(0.0_f64), 1.0);
//! assert!((exp(1.0_f64) - core::f64::consts::E).abs() < 1e-14);
//!
//! let x = [0.0_f64, 0.5, 1.0];
//! let t = tanh(x);
//! for i in 0..3 {
//!     assert_eq!(t[i], sinh(x[i]) / cosh(x[i]));
//! }
//! ```

mod exp_fn;
mod hyperbolic;

use crate::series::{SeriesStop, SeriesSum};


pub use exp_fn::{exp, exp_series, exp_with};
pub use hyperbolic::{
    cosh, cosh_series, cosh_with, sinh, sinh_series, sinh_with, tanh, tanh_with,
};

/// Limit value for an infinite argument; no terms are summed.
fn at_infinity<T>(value: T) -> SeriesSum<T> {
    SeriesSum {
        value,
        terms: 0,
        stop: SeriesStop::NotFinite,
    }
}
