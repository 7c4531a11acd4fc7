mod csv;
mod json;
mod text;

pub use self::csv::CsvFormatter;
pub use self::json::JsonFormatter;
pub use self::text::TextFormatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Csv,
    Json,
}

/// One filtered sample, as emitted by the host loop
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct FilteredSample {
    /// Position of the sample in the input stream, starting at 0
    pub index: usize,
    pub input: f32,
    pub output: f32,
}

pub trait Formatter: Send {
    fn format(&self, sample: &FilteredSample) -> String;

    fn header(&self) -> Option<&'static str> {
        None
    }
}

pub fn create_formatter(format: OutputFormat, verbose: bool) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(verbose)),
        OutputFormat::Csv => Box::new(CsvFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
