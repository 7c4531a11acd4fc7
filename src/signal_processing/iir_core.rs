use crate::error::{FilterError, Result};

/// Direct-form IIR recurrence shared by the fixed and runtime-order filters
///
/// Evaluates one step of
///
/// ```text
/// a[0]*y[n] = sum(b[i]*x[n-i], i = 0..M-1) - sum(a[i]*y[n-i], i = 1..N-1)
/// ```
///
/// which is the convention used by SciPy's `lfilter`. `a[0]` only normalizes
/// the result and is never applied as a feedback weight, so un-normalized
/// feedback coefficients are divided through on every sample.
///
/// Both histories are kept most-recent-first and shifted forward by one slot
/// per call. `x_history` must be as long as `b`, `y_history` as long as `a`,
/// and none of them may be empty.
#[inline]
pub(crate) fn direct_form_step(
    a: &[f32],
    b: &[f32],
    x_history: &mut [f32],
    y_history: &mut [f32],
    x: f32,
) -> f32 {
    debug_assert!(!a.is_empty() && !b.is_empty());
    debug_assert_eq!(a.len(), y_history.len());
    debug_assert_eq!(b.len(), x_history.len());

    let m = x_history.len();
    x_history.copy_within(0..m - 1, 1);
    x_history[0] = x;

    // y_history[0] still holds the previous output until overwritten below.
    let n = y_history.len();
    y_history.copy_within(0..n - 1, 1);

    let mut y = 0.0f32;
    for (coeff, past_x) in b.iter().zip(x_history.iter()) {
        y += coeff * past_x;
    }
    for (coeff, past_y) in a.iter().zip(y_history.iter()).skip(1) {
        y -= coeff * past_y;
    }
    y /= a[0];

    y_history[0] = y;
    y
}

/// Check coefficients before building a filter
///
/// Rejects empty coefficient lists, non-finite coefficients and a zero
/// normalization coefficient `a[0]`. None of these are checked on the
/// per-sample path.
///
/// # Errors
/// Returns the first problem found, feedback coefficients first.
pub fn validate_coefficients(a: &[f32], b: &[f32]) -> Result<()> {
    if a.is_empty() {
        return Err(FilterError::EmptyCoefficients("feedback"));
    }
    if b.is_empty() {
        return Err(FilterError::EmptyCoefficients("feedforward"));
    }

    for (which, coeffs) in [("feedback", a), ("feedforward", b)] {
        if let Some((index, &value)) = coeffs.iter().enumerate().find(|(_, c)| !c.is_finite()) {
            return Err(FilterError::NonFiniteCoefficient {
                which,
                index,
                value,
            });
        }
    }

    if a[0] == 0.0 {
        return Err(FilterError::ZeroNormalization);
    }

    Ok(())
}
