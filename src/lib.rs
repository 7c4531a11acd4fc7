//! Fixed-order direct-form IIR filter evaluator.
//!
//! A filter is built once from feedback coefficients `a` and feedforward
//! coefficients `b`, then fed one sample at a time:
//!
//! ```
//! use iirfilter::IirFilter;
//!
//! // y[n] = 0.5*x[n] + 0.5*x[n-1]
//! let mut filter = IirFilter::<2, 2>::new([1.0, 0.0], [0.5, 0.5]);
//! assert_eq!(filter.process(1.0), 0.5);
//! assert_eq!(filter.process(1.0), 1.0);
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod signal_processing;
pub mod wav;

pub use config::FilterConfig;
pub use error::{FilterError, Result};
pub use signal_processing::{DynamicIirFilter, Filter, IirFilter};
pub use wav::{read_mono_wav, save_mono_wav};
