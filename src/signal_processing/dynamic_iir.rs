use std::fmt;

use super::filter::Filter;
use super::iir_core::{direct_form_step, validate_coefficients};
use crate::error::{FilterError, Result};

/// Direct-form IIR filter with orders chosen at run time
///
/// Same recurrence and history handling as
/// [`IirFilter`](super::IirFilter), for coefficients that are only known
/// once a configuration has been read. All buffers are allocated once at
/// construction and never resized, so `process` does not allocate.
#[derive(Clone)]
pub struct DynamicIirFilter {
    feedback: Box<[f32]>,
    feedforward: Box<[f32]>,
    x_history: Box<[f32]>,
    y_history: Box<[f32]>,
}

impl DynamicIirFilter {
    /// Create a filter, rejecting only empty coefficient lists
    ///
    /// `feedback[0]` is not checked; a zero value makes every output
    /// non-finite. Use [`DynamicIirFilter::try_new`] for full validation.
    ///
    /// # Errors
    /// Returns `FilterError::EmptyCoefficients` if either slice is empty.
    pub fn new(feedback: &[f32], feedforward: &[f32]) -> Result<Self> {
        if feedback.is_empty() {
            return Err(FilterError::EmptyCoefficients("feedback"));
        }
        if feedforward.is_empty() {
            return Err(FilterError::EmptyCoefficients("feedforward"));
        }

        Ok(Self {
            feedback: feedback.into(),
            feedforward: feedforward.into(),
            x_history: vec![0.0; feedforward.len()].into_boxed_slice(),
            y_history: vec![0.0; feedback.len()].into_boxed_slice(),
        })
    }

    /// Create a filter after validating the coefficients
    ///
    /// # Errors
    /// Returns `FilterError::EmptyCoefficients`, `FilterError::ZeroNormalization`
    /// or `FilterError::NonFiniteCoefficient`.
    pub fn try_new(feedback: &[f32], feedforward: &[f32]) -> Result<Self> {
        validate_coefficients(feedback, feedforward)?;
        Self::new(feedback, feedforward)
    }

    /// Filter one new sample and return the output for this time step
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
    pub fn feedforward_order(&self) -> usize {
        self.feedforward.len()
    }

    /// Number of feedback coefficients (N)
    pub fn feedback_order(&self) -> usize {
        self.feedback.len()
    }
}

impl fmt::Debug for DynamicIirFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicIirFilter")
            .field("feedforward_order", &self.feedforward.len())
            .field("feedback_order", &self.feedback.len())
            .finish_non_exhaustive()
    }
}

impl Filter for DynamicIirFilter {
    fn process(&mut self, sample: f32) -> f32 {
        DynamicIirFilter::process(self, sample)
    }
}
