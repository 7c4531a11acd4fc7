//! Filter coefficient configuration.
//!
//! Coefficients are read from a TOML file:
//!
//! ```toml
//! feedback = [1.0, -0.5]     # a[0..N-1], a[0] normalizes the output
//! feedforward = [0.5, 0.5]   # b[0..M-1]
//! validate = true            # optional, defaults to true
//! ```
//!
//! The recurrence is `a[0]*y[n] = sum(b[i]*x[n-i]) - sum(a[i]*y[n-i], i >= 1)`,
//! the same convention as SciPy's `lfilter`. Coefficients written for a
//! convention that includes `a[0]` in the feedback sum, or that flips the sign
//! of the feedback terms, give different results without any error.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{FilterError, Result};
use crate::signal_processing::iir_filter::to_array;
use crate::signal_processing::{DynamicIirFilter, IirFilter};

/// Comma-separated coefficient list
///
/// # Example
/// ```
/// use iirfilter::config::Coefficients;
///
/// let a: Coefficients = "1.0, -0.5".parse().unwrap();
/// assert_eq!(a.as_slice(), &[1.0, -0.5]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Coefficients(Vec<f32>);

impl Coefficients {
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<f32> {
        self.0
    }
}

impl FromStr for Coefficients {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self> {
        parse_coefficients(s).map(Self)
    }
}

/// Parse a comma-separated list of coefficients
///
/// # Errors
/// Returns `FilterError::Config` for an empty list or an unparseable entry.
pub fn parse_coefficients(s: &str) -> Result<Vec<f32>> {
    let s = s.trim();
    if s.is_empty() {
        return Err(FilterError::Config("empty coefficient list".to_string()));
    }

    s.split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<f32>()
                .map_err(|_| FilterError::Config(format!("invalid coefficient: {:?}", part)))
        })
        .collect()
}

fn default_validate() -> bool {
    true
}

/// Filter configuration
///
/// Use `FilterConfig::default()` for an identity filter (`a = [1]`, `b = [1]`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterConfig {
    /// Feedback (denominator) coefficients `a[0..N-1]`
    pub feedback: Vec<f32>,
    /// Feedforward (numerator) coefficients `b[0..M-1]`
    pub feedforward: Vec<f32>,
    /// Validate coefficients before building the filter
    #[serde(default = "default_validate")]
    pub validate: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            feedback: vec![1.0],
            feedforward: vec![1.0],
            validate: true,
        }
    }
}

impl FilterConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| FilterError::Config(e.to_string()))
    }

    /// Load a configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| FilterError::Config(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_toml_str(&content)?;
        log::debug!("Loaded filter configuration from {}", path.display());
        Ok(config)
    }

    /// Apply command-line overrides
    ///
    /// Coefficient lists that are given replace the configured ones;
    /// `no_validate` turns validation off but never back on.
    pub fn with_overrides(
        mut self,
        feedback: Option<Coefficients>,
        feedforward: Option<Coefficients>,
        no_validate: bool,
    ) -> Self {
        if let Some(feedback) = feedback {
            self.feedback = feedback.into_inner();
        }
        if let Some(feedforward) = feedforward {
            self.feedforward = feedforward.into_inner();
        }
        if no_validate {
            self.validate = false;
        }
        self
    }

    /// Build a runtime-order filter from this configuration
    ///
    /// # Errors
    /// Returns `FilterError::EmptyCoefficients` for empty lists, and any
    /// validation error when `validate` is set.
    pub fn build(&self) -> Result<DynamicIirFilter> {
        self.log_convention();
        if self.validate {
            DynamicIirFilter::try_new(&self.feedback, &self.feedforward)
        } else {
            log::warn!("Coefficient validation disabled");
            DynamicIirFilter::new(&self.feedback, &self.feedforward)
        }
    }

    /// Build a fixed-order filter from this configuration
    ///
    /// # Errors
    /// Returns `FilterError::OrderMismatch` when the coefficient counts do not
    /// match `M` and `N`, and any validation error when `validate` is set.
    pub fn build_fixed<const M: usize, const N: usize>(&self) -> Result<IirFilter<M, N>> {
        let feedback = to_array::<N>("feedback", &self.feedback)?;
        let feedforward = to_array::<M>("feedforward", &self.feedforward)?;
        self.log_convention();
        if self.validate {
            IirFilter::try_new(feedback, feedforward)
        } else {
            log::warn!("Coefficient validation disabled");
            Ok(IirFilter::new(feedback, feedforward))
        }
    }

    fn log_convention(&self) {
        log::debug!(
            "Building IIR filter: {} feedforward, {} feedback coefficients",
            self.feedforward.len(),
            self.feedback.len()
        );
        if let Some(&a0) = self.feedback.first()
            && a0 != 1.0
            && a0 != 0.0
        {
            log::info!("Feedback coefficients are not normalized, outputs are divided by a[0] = {}", a0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coefficients() {
        assert_eq!(parse_coefficients("1").unwrap(), vec![1.0]);
        assert_eq!(
            parse_coefficients(" 1.0, -0.5 ,0.25").unwrap(),
            vec![1.0, -0.5, 0.25]
        );
        assert!(parse_coefficients("").is_err());
        assert!(parse_coefficients("1.0,,2.0").is_err());
        assert!(parse_coefficients("1.0,abc").is_err());
    }

    #[test]
    fn test_coefficients_from_str() {
        let c: Coefficients = "0.5,0.5".parse().unwrap();
        assert_eq!(c.into_inner(), vec![0.5, 0.5]);
        assert!("x".parse::<Coefficients>().is_err());
    }

    #[test]
    fn test_from_toml_str() {
        let config = FilterConfig::from_toml_str(
            r#"
            feedback = [1.0, -0.5]
            feedforward = [0.5, 0.5]
            "#,
        )
        .unwrap();

        assert_eq!(config.feedback, vec![1.0, -0.5]);
        assert_eq!(config.feedforward, vec![0.5, 0.5]);
        assert!(config.validate);
    }

    #[test]
    fn test_from_toml_str_validate_flag() {
        let config = FilterConfig::from_toml_str(
            "feedback = [0.0]\nfeedforward = [1.0]\nvalidate = false\n",
        )
        .unwrap();
        assert!(!config.validate);
        assert!(config.build().is_ok());
    }

    #[test]
    fn test_from_toml_str_rejects_unknown_and_missing_fields() {
        assert!(matches!(
            FilterConfig::from_toml_str("feedback = [1.0]\nfeedforward = [1.0]\ncutoff = 3.0\n"),
            Err(FilterError::Config(_))
        ));
        assert!(matches!(
            FilterConfig::from_toml_str("feedback = [1.0]\n"),
            Err(FilterError::Config(_))
        ));
    }

    #[test]
    fn test_with_overrides_replaces_given_lists() {
        let config = FilterConfig {
            feedback: vec![1.0, -0.5],
            feedforward: vec![0.5, 0.5],
            validate: true,
        };

        let overridden = config.clone().with_overrides(
            Some("2.0,-1.0,0.25".parse().unwrap()),
            None,
            false,
        );
        assert_eq!(overridden.feedback, vec![2.0, -1.0, 0.25]);
        assert_eq!(overridden.feedforward, vec![0.5, 0.5]);
        assert!(overridden.validate);

        let overridden = config
            .clone()
            .with_overrides(None, Some("1".parse().unwrap()), false);
        assert_eq!(overridden.feedback, vec![1.0, -0.5]);
        assert_eq!(overridden.feedforward, vec![1.0]);

        assert_eq!(config.clone().with_overrides(None, None, false), config);
    }

    #[test]
    fn test_with_overrides_no_validate() {
        let config = FilterConfig::default().with_overrides(
            Some("0.0".parse().unwrap()),
            None,
            true,
        );
        assert!(!config.validate);
        assert!(config.build().is_ok());

        let disabled = FilterConfig {
            validate: false,
            ..FilterConfig::default()
        };
        assert!(!disabled.with_overrides(None, None, false).validate);
    }

    #[test]
    fn test_build_validates() {
        let config = FilterConfig {
            feedback: vec![0.0, 0.5],
            feedforward: vec![1.0],
            validate: true,
        };
        assert!(matches!(config.build(), Err(FilterError::ZeroNormalization)));
    }

    #[test]
    fn test_build_rejects_empty_without_validation() {
        let config = FilterConfig {
            feedback: vec![],
            feedforward: vec![1.0],
            validate: false,
        };
        assert!(matches!(
            config.build(),
            Err(FilterError::EmptyCoefficients("feedback"))
        ));
    }

    #[test]
    fn test_build_fixed_checks_order() {
        let config = FilterConfig {
            feedback: vec![1.0, 0.0],
            feedforward: vec![0.5, 0.5],
            validate: true,
        };

        let mut filter = config.build_fixed::<2, 2>().unwrap();
        assert_eq!(filter.process(1.0), 0.5);

        assert!(matches!(
            config.build_fixed::<3, 2>(),
            Err(FilterError::OrderMismatch {
                which: "feedforward",
                expected: 3,
                actual: 2,
            })
        ));
    }

    #[test]
    fn test_default_is_identity() {
        let mut filter = FilterConfig::default().build().unwrap();
        for x in [1.0, -2.0, 0.5] {
            assert_eq!(filter.process(x), x);
        }
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("iirfilter_missing_config_does_not_exist.toml");
        assert!(matches!(FilterConfig::load(&path), Err(FilterError::Config(_))));
    }
}
