use super::{FilteredSample, Formatter};

pub struct TextFormatter {
    verbose: bool,
}

impl TextFormatter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, sample: &FilteredSample) -> String {
        if self.verbose {
            format!(
                "{:>8}: {:>14} -> {}",
                sample.index, sample.input, sample.output
            )
        } else {
            sample.output.to_string()
        }
    }
}
