//! # numseries
//!
//! Series-based exponential, hyperbolic, factorial, gamma, and Bessel
//! functions, no-std compatible. Each function is an explicit, truncated
//! numerical method whose precision/cost trade-off is controlled by the
//! caller through a settings struct.
//!
//! ## Quick start
//!
//! ```
//! use numseries::{exp, tanh, gamma, bessel, factorial};
//!
//! assert_eq!(exp(0.0_f64), 1.0);
//! assert!((exp(1.0_f64) - core::f64::consts::E).abs() < 1e-14);
//!
//! // Any element-wise container works; the shape is preserved.
//! let t = tanh([[0.0_f64, 0.5], [1.0, 2.0]]);
//! assert_eq!(t[0][0], 0.0);
//!
//! assert_eq!(factorial(5_u32), Ok(120));
//! assert_eq!(gamma(1.0_f64), Ok(1.0));
//! assert_eq!(bessel(0.0, 0.0_f64), Ok(1.0));
//! ```
//!
//! ## Modules
//!
//! - [`series`] — Truncated power-series engine. Sums `term_n = term_{n-1} · r(n)`
//!   with an absolute early stop (`|term| < 1e-15`) and an overflow guard
//!   (`|term| > 1e308`). Reports the number of terms and the stop reason.
//!
//! - [`transcendental`] — [`exp`], [`sinh`], [`cosh`], [`tanh`] by Maclaurin
//!   series (default 50 terms). `_with` variants take [`SeriesSettings`].
//!
//! - [`special`] — [`factorial`] (exact, checked), [`gamma`] (trapezoidal
//!   integration of Euler's integral, T = 100, M = 1000), [`bessel`]
//!   (power series for J_α, 20 terms, relative early stop 1e-10).
//!
//! - [`elementwise`] — The [`Elementwise`] trait every function maps through:
//!   scalars, `[A; N]` (nested for multi-dimensional stack arrays), `Vec<A>`,
//!   and the heap-allocated n-dimensional [`DynArray`].
//!
//! - [`traits`] — Element trait hierarchy:
//!   - [`Scalar`] — all numeric elements (`Copy + PartialEq + Debug + Num`)
//!   - [`FloatScalar`] — real floats, used by the series and integration kernels
//!   - [`IntScalar`] — primitive integers, used by [`factorial`]
//!
//! ## Errors
//!
//! Series truncation is not an error. Domain violations (negative factorial,
//! z ≤ 0 for gamma, Bessel order ≤ −1) return [`SpecialError`]; over a
//! container, the first failing element fails the whole call. Numeric
//! degeneracies such as a zero denominator propagate as inf/NaN.
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | Implies `alloc`. Hardware FPU via system libm |
//! | `alloc` | via std  | `Vec` and [`DynArray`] support |
//! | `all`   | no       | All features |
//!
//! Without `std`, float operations use the pure-Rust `libm` fallback that
//! `num-traits` always enables.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod elementwise;
pub mod series;
pub mod special;
pub mod traits;
pub mod transcendental;

pub use elementwise::Elementwise;
#[cfg(feature = "alloc")]
pub use elementwise::{DynArray, ShapeMismatch};
pub use series::{SeriesSettings, SeriesStop, SeriesSum};
pub use special::{
    bessel, bessel_with, factorial, gamma, gamma_with, BesselSettings, GammaSettings,
    SpecialError,
};
pub use traits::{FloatScalar, IntScalar, Scalar};
pub use transcendental::{cosh, cosh_with, exp, exp_with, sinh, sinh_with, tanh, tanh_with};
