use super::{FilteredSample, Formatter};

/// One JSON object per line; non-finite values become `null`
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, sample: &FilteredSample) -> String {
        match serde_json::to_string(sample) {
            Ok(line) => line,
            Err(e) => {
                log::error!("Failed to serialize sample {}: {}", sample.index, e);
                String::new()
            }
        }
    }
}
