use std::io::{BufRead, Lines};

use crate::error::{FilterError, Result};

/// Samples read from text, one per line
///
/// Blank lines and lines starting with `#` are skipped. `NaN`, `inf` and
/// `-inf` are accepted so non-finite input can be fed to a filter.
///
/// # Example
/// ```
/// use iirfilter::input::TextSamples;
///
/// let samples: Vec<f32> = TextSamples::new("# header\n1.0\n\n-2.5\n".as_bytes())
///     .collect::<iirfilter::Result<_>>()
///     .unwrap();
/// assert_eq!(samples, vec![1.0, -2.5]);
/// ```
pub struct TextSamples<R> {
    lines: Lines<R>,
    line: usize,
}

impl<R: BufRead> TextSamples<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }
}

impl<R: BufRead> Iterator for TextSamples<R> {
    type Item = Result<f32>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line += 1;

            let value = line.trim();
            if value.is_empty() || value.starts_with('#') {
                continue;
            }

            return Some(value.parse::<f32>().map_err(|_| FilterError::InvalidSample {
                line: self.line,
                value: value.to_string(),
            }));
        }
    }
}
