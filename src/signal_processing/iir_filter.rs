use std::fmt;

use super::filter::Filter;
use super::iir_core::{direct_form_step, validate_coefficients};
use crate::error::{FilterError, Result};

/// Fixed-order direct-form IIR filter
///
/// `M` is the number of feedforward coefficients `b` and `N` the number of
/// feedback coefficients `a`, with `a[0]` as the normalization divisor:
///
/// ```text
/// a[0]*y[n] = sum(b[i]*x[n-i], i = 0..M-1) - sum(a[i]*y[n-i], i = 1..N-1)
/// ```
///
/// Both orders are compile-time constants, so all state lives in fixed-size
/// arrays and `process` never allocates. Histories start at zero and are
/// advanced only by `process`; coefficients never change after construction.
///
/// # Example
/// ```
/// use iirfilter::signal_processing::IirFilter;
///
/// // Two-tap moving average
/// let mut filter = IirFilter::<2, 1>::new([1.0], [0.5, 0.5]);
/// assert_eq!(filter.process(1.0), 0.5);
/// assert_eq!(filter.process(1.0), 1.0);
/// ```
///
/// A filter without coefficients does not build:
/// ```compile_fail
/// use iirfilter::signal_processing::IirFilter;
///
/// let _filter = IirFilter::<0, 1>::new([1.0], []);
/// ```
///
/// The recurrence itself is only reachable through a constructed filter:
/// ```compile_fail
/// use iirfilter::signal_processing::iir_core::direct_form_step;
///
/// let y = direct_form_step(&[1.0], &[0.5, 0.5], &mut [0.0], &mut [0.0], 1.0);
/// ```
#[derive(Clone)]
pub struct IirFilter<const M: usize, const N: usize> {
    feedback: [f32; N],
    feedforward: [f32; M],
    x_history: [f32; M],
    y_history: [f32; N],
}

impl<const M: usize, const N: usize> IirFilter<M, N> {
    const HAS_TAPS: () = assert!(
        M >= 1 && N >= 1,
        "IIR filter needs at least one feedforward and one feedback coefficient"
    );

    /// Create a filter without checking the coefficients
    ///
    /// `feedback[0]` must be non-zero; otherwise every output is non-finite.
    /// Use [`IirFilter::try_new`] to have that checked.
    ///
    /// # Arguments
    /// * `feedback` - Denominator coefficients `a[0..N-1]`
    /// * `feedforward` - Numerator coefficients `b[0..M-1]`
    pub fn new(feedback: [f32; N], feedforward: [f32; M]) -> Self {
        let () = Self::HAS_TAPS;

        Self {
            feedback,
            feedforward,
            x_history: [0.0; M],
            y_history: [0.0; N],
        }
    }

    /// Create a filter after validating the coefficients
    ///
    /// # Errors
    /// Returns `FilterError::ZeroNormalization` if `feedback[0]` is zero and
    /// `FilterError::NonFiniteCoefficient` for NaN or infinite coefficients.
    pub fn try_new(feedback: [f32; N], feedforward: [f32; M]) -> Result<Self> {
        validate_coefficients(&feedback, &feedforward)?;
        Ok(Self::new(feedback, feedforward))
    }

    /// Create a validated filter from runtime coefficient slices
    ///
    /// # Errors
    /// Returns `FilterError::OrderMismatch` if a slice length differs from
    /// the filter's order, plus everything [`IirFilter::try_new`] reports.
    pub fn from_slices(feedback: &[f32], feedforward: &[f32]) -> Result<Self> {
        let feedback = to_array("feedback", feedback)?;
        let feedforward = to_array("feedforward", feedforward)?;
        Self::try_new(feedback, feedforward)
    }

    /// Filter one new sample and return the output for this time step
    ///
    /// Calls must be made once per sample in arrival order; the call order is
    /// the filter's time axis.
    #[inline]
    pub fn process(&mut self, sample: f32) -> f32 {
        direct_form_step(
            &self.feedback,
            &self.feedforward,
            &mut self.x_history,
            &mut self.y_history,
            sample,
        )
    }

    /// Number of feedforward coefficients (M)
    pub const fn feedforward_order(&self) -> usize {
        M
    }

    /// Number of feedback coefficients (N)
    pub const fn feedback_order(&self) -> usize {
        N
    }
}

// History is internal state; only the orders are shown.
impl<const M: usize, const N: usize> fmt::Debug for IirFilter<M, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IirFilter")
            .field("feedforward_order", &M)
            .field("feedback_order", &N)
            .finish_non_exhaustive()
    }
}

impl<const M: usize, const N: usize> Filter for IirFilter<M, N> {
    fn process(&mut self, sample: f32) -> f32 {
        IirFilter::process(self, sample)
    }
}

/// Copy a coefficient slice into an array of the filter's order
pub(crate) fn to_array<const K: usize>(which: &'static str, coeffs: &[f32]) -> Result<[f32; K]> {
    coeffs.try_into().map_err(|_| FilterError::OrderMismatch {
        which,
        expected: K,
        actual: coeffs.len(),
    })
}
