//! Special functions: factorial, gamma, and Bessel J.
//!
//! All functions apply element-wise over any [`Elementwise`](crate::elementwise::Elementwise)
//! input and return `Result`: a domain violation in any element aborts the
//! whole call.
//!
//! # Functions
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`factorial`] | n! for non-negative integers, exact |
//! | [`gamma`] | Γ(z) for z > 0 by trapezoidal integration of ∫₀ᵀ t^{z−1} e^{−t} dt |
//! | [`bessel`] | J_α(x) by its power series, with Γ(α+1) from [`gamma`] |
//!
//! # Example
//!
//! ```
//! use numseries::special::{factorial, gamma, bessel, SpecialError};
//!
//! assert_eq!(factorial(5_u64), Ok(120));
//! assert_eq!(factorial(-1_i32), Err(SpecialError::DomainError));
//!
//! assert_eq!(gamma(1.0_f64), Ok(1.0));
//! assert!((gamma(5.0_f64).unwrap() - 24.0).abs() < 1e-3);
//!
//! assert_eq!(bessel(0.0, 0.0_f64), Ok(1.0));
//! ```

use core::fmt;

mod bessel_fn;
mod factorial_fn;
mod gamma_fn;

#[cfg(test)]
mod tests;

pub use bessel_fn::{bessel, bessel_with, BesselSettings};
pub use factorial_fn::factorial;
pub use gamma_fn::{gamma, gamma_with, GammaSettings};

/// Errors from special function evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialError {
    /// Input outside the function's domain (negative factorial argument,
    /// z ≤ 0 for gamma, Bessel order α ≤ −1).
    DomainError,
    /// Exact integer result does not fit the requested integer type.
    Overflow,
    /// Evaluation settings are unusable (e.g. zero integration intervals).
    InvalidParameter,
}

impl fmt::Display for SpecialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DomainError => write!(f, "input outside function domain"),
            Self::Overflow => write!(f, "result overflows the integer type"),
            Self::InvalidParameter => write!(f, "invalid evaluation settings"),
        }
    }
}

impl core::error::Error for SpecialError {}
