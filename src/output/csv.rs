use super::{FilteredSample, Formatter};

pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format(&self, sample: &FilteredSample) -> String {
        format!("{},{},{}", sample.index, sample.input, sample.output)
    }

    fn header(&self) -> Option<&'static str> {
        Some("index,input,output")
    }
}
