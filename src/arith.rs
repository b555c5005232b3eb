//! Small arithmetic helpers that evaluate in const contexts.

/// Error type for the fallible arithmetic helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ArithError {
    /// Factorial input was zero or negative.
    #[error("Invalid factorial input: {0} (must be positive)")]
    NonPositive(i64),

    /// Factorial result does not fit in an `i64`.
    #[error("Factorial of {0} overflows i64")]
    Overflow(i64),
}

/// Computes `n!` for positive `n`.
///
/// # Errors
/// Returns `ArithError::NonPositive` if `n < 1` and `ArithError::Overflow`
/// if the result exceeds `i64::MAX` (any `n > 20`).
pub const fn factorial(n: i64) -> Result<i64, ArithError> {
    if n < 1 {
        return Err(ArithError::NonPositive(n));
    }

    let mut acc: i64 = 1;
    let mut i: i64 = 2;
    while i <= n {
        acc = match acc.checked_mul(i) {
            Some(value) => value,
            None => return Err(ArithError::Overflow(n)),
        };
        i += 1;
    }
    Ok(acc)
}

/// Raises `base` to an integer `exponent` by repeated squaring.
///
/// Negative exponents return the reciprocal of the positive power.
pub const fn power(base: f64, exponent: i32) -> f64 {
    let mut result = 1.0;
    let mut factor = base;
    let mut remaining = exponent.unsigned_abs();
    while remaining > 0 {
        if remaining & 1 == 1 {
            result *= factor;
        }
        factor *= factor;
        remaining >>= 1;
    }

    if exponent < 0 { 1.0 / result } else { result }
}

/// Sums `values` left to right. An empty slice sums to `0.0`.
pub const fn sum(values: &[f64]) -> f64 {
    let mut total = 0.0;
    let mut i = 0;
    while i < values.len() {
        total += values[i];
        i += 1;
    }
    total
}

/// Variadic front end for [`sum`](fn@crate::sum).
///
/// Every argument is cast to `f64`, so integer and float arguments mix freely.
///
/// ```
/// const TOTAL: f64 = const_date::sum!(1, 2.5, 3);
/// assert_eq!(TOTAL, 6.5);
/// ```
#[macro_export]
macro_rules! sum {
    ($($value:expr),* $(,)?) => {
        $crate::sum(&[$(($value) as f64),*])
    };
}
