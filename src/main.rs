use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use rolling_stats::Stats;

use iirfilter::config::{Coefficients, FilterConfig};
use iirfilter::input::TextSamples;
use iirfilter::output::{FilteredSample, Formatter, OutputFormat, create_formatter};
use iirfilter::{DynamicIirFilter, read_mono_wav, save_mono_wav};

#[derive(Parser, Debug)]
#[command(name = "iirfilter")]
#[command(about = "Filter a sample stream through a direct-form IIR filter", long_about = None)]
struct Args {
    /// TOML file with `feedback` and `feedforward` coefficient lists
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Feedback coefficients a[0..N-1], comma-separated (e.g., "1,-0.5")
    #[arg(short = 'a', long, allow_hyphen_values = true)]
    feedback: Option<Coefficients>,

    /// Feedforward coefficients b[0..M-1], comma-separated (e.g., "0.5,0.5")
    #[arg(short = 'b', long, allow_hyphen_values = true)]
    feedforward: Option<Coefficients>,

    /// Skip coefficient validation
    #[arg(long)]
    no_validate: bool,

    /// Text input, one sample per line (default: stdin)
    #[arg(short, long, conflicts_with = "wav")]
    input: Option<PathBuf>,

    /// Mono WAV input
    #[arg(long)]
    wav: Option<PathBuf>,

    /// Write filtered WAV input to this file
    #[arg(long, requires = "wav")]
    wav_out: Option<PathBuf>,

    /// Output format: text, csv, json
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Increase output verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Running statistics over the finite values of a stream
struct StreamStats {
    stats: Stats<f32>,
    non_finite: usize,
}

impl StreamStats {
    fn new() -> Self {
        Self {
            stats: Stats::new(),
            non_finite: 0,
        }
    }

    fn update(&mut self, value: f32) {
        if value.is_finite() {
            self.stats.update(value);
        } else {
            self.non_finite += 1;
        }
    }

    fn log(&self, name: &str) {
        if self.stats.count > 0 {
            log::info!(
                "{}: count={} mean={:.6} std_dev={:.6} min={:.6} max={:.6}",
                name,
                self.stats.count,
                self.stats.mean,
                self.stats.std_dev,
                self.stats.min,
                self.stats.max
            );
        }
        if self.non_finite > 0 {
            log::warn!("{}: {} non-finite samples", name, self.non_finite);
        }
    }
}

/// Input and output statistics for one run
struct Summary {
    input: StreamStats,
    output: StreamStats,
}

impl Summary {
    fn new() -> Self {
        Self {
            input: StreamStats::new(),
            output: StreamStats::new(),
        }
    }

    fn log(&self) {
        self.input.log("input");
        self.output.log("output");
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match args.config {
        Some(ref path) => FilterConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => FilterConfig::default(),
    }
    .with_overrides(
        args.feedback.clone(),
        args.feedforward.clone(),
        args.no_validate,
    );

    let mut filter = config.build().context("Invalid filter coefficients")?;
    let formatter = create_formatter(args.format, args.verbose > 0);
    let mut summary = Summary::new();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match (&args.wav, &args.wav_out) {
        (Some(wav_path), Some(wav_out)) => {
            let count = filter_wav(wav_path, wav_out, &mut filter, &mut summary)?;
            log::info!("Wrote {} samples to {}", count, wav_out.display());
        }
        (Some(wav_path), None) => {
            let (samples, _) = read_mono_wav(wav_path)
                .with_context(|| format!("Failed to read {}", wav_path.display()))?;
            run_stream(
                samples.into_iter().map(Ok),
                &mut filter,
                Some(formatter.as_ref()),
                &mut out,
                &mut summary,
                None,
            )?;
        }
        (None, _) => {
            let reader: Box<dyn BufRead> = match args.input {
                Some(ref path) => Box::new(BufReader::new(
                    File::open(path)
                        .with_context(|| format!("Failed to open {}", path.display()))?,
                )),
                None => Box::new(BufReader::new(io::stdin())),
            };
            run_stream(
                TextSamples::new(reader),
                &mut filter,
                Some(formatter.as_ref()),
                &mut out,
                &mut summary,
                None,
            )?;
        }
    }

    out.flush()?;
    summary.log();

    Ok(())
}

/// Feed samples to the filter one at a time, in arrival order
///
/// With a formatter, the header (if any) and then one line per output are
/// written as each output is produced. Outputs are also appended to
/// `filtered` when given.
fn run_stream<I, W>(
    samples: I,
    filter: &mut DynamicIirFilter,
    formatter: Option<&dyn Formatter>,
    out: &mut W,
    summary: &mut Summary,
    mut filtered: Option<&mut Vec<f32>>,
) -> Result<()>
where
    I: Iterator<Item = iirfilter::Result<f32>>,
    W: Write,
{
    if let Some(header) = formatter.and_then(|f| f.header()) {
        writeln!(out, "{}", header)?;
    }

    for (index, sample) in samples.enumerate() {
        let input = sample.context("Failed to read input sample")?;
        let output = filter.process(input);
        summary.input.update(input);
        summary.output.update(output);

        if let Some(ref mut filtered) = filtered {
            filtered.push(output);
        }
        if let Some(formatter) = formatter {
            emit(out, formatter, index, input, output)?;
        }
    }
    Ok(())
}

/// Filter a mono WAV file into another at the same sample rate
///
/// Returns the number of samples written.
fn filter_wav(
    input: &Path,
    output: &Path,
    filter: &mut DynamicIirFilter,
    summary: &mut Summary,
) -> Result<usize> {
    let (samples, sample_rate) =
        read_mono_wav(input).with_context(|| format!("Failed to read {}", input.display()))?;

    let mut filtered = Vec::with_capacity(samples.len());
    run_stream(
        samples.into_iter().map(Ok),
        filter,
        None,
        &mut io::sink(),
        summary,
        Some(&mut filtered),
    )?;

    save_mono_wav(output, &filtered, sample_rate)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(filtered.len())
}

fn emit<W: Write>(
    out: &mut W,
    formatter: &dyn Formatter,
    index: usize,
    input: f32,
    output: f32,
) -> io::Result<()> {
    let sample = FilteredSample {
        index,
        input,
        output,
    };
    writeln!(out, "{}", formatter.format(&sample))
}
