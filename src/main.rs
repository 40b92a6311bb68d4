use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use peakdetect::config::{FoldStrategy, PeakConfig};
use peakdetect::{Level, PeakDetector};

#[derive(Parser, Debug)]
#[command(name = "peakdetect")]
#[command(about = "Find peaks, and peaks of peaks, in a sequence of numbers", long_about = None)]
struct Args {
    /// File with samples separated by whitespace or commas (stdin if omitted)
    input: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Cluster merge strategy (overrides the configuration file)
    #[arg(long, value_enum)]
    fold: Option<FoldStrategy>,

    /// Maximum number of levels above the samples (default: until no peaks remain)
    #[arg(short = 'l', long)]
    max_levels: Option<usize>,

    /// Output format: text, json
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Increase output verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Serialize)]
struct LevelReport {
    depth: usize,
    samples: usize,
    peaks: Vec<usize>,
    root_peaks: Vec<usize>,
}

#[derive(Debug, Serialize)]
struct Report {
    samples: usize,
    peaks: Vec<usize>,
    levels: Vec<LevelReport>,
    fixed_point: bool,
}

impl LevelReport {
    fn from_level(level: &Level<'_, f64>) -> Self {
        Self {
            depth: level.depth(),
            samples: level.samples().len(),
            peaks: level.peaks().to_vec(),
            root_peaks: level.root_peaks(),
        }
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

    let mut config = match args.config {
        Some(ref path) => load_config(path)?,
        None => PeakConfig::default(),
    };
    if let Some(fold) = args.fold {
        config.detection.fold = fold;
    }
    if args.max_levels.is_some() {
        config.levels.max_iterations = args.max_levels;
    }

    let text = match args.input {
        Some(ref path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };
    let samples = parse_samples(&text)?;
    log::info!("Read {} samples", samples.len());

    let detector = PeakDetector::new(config);
    let root = detector.detect(&samples)?;
    let levels = detector.hierarchy_above(&root)?;
    let report = Report {
        samples: samples.len(),
        peaks: root.peaks().to_vec(),
        fixed_point: levels.last().is_some_and(|l| l.peak_count() == 0),
        levels: levels.iter().map(LevelReport::from_level).collect(),
    };

    match args.format {
        OutputFormat::Text => print_text(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

fn load_config(path: &PathBuf) -> Result<PeakConfig> {
    let content = fs::read_to_string(path).context("Failed to read config file")?;
    PeakConfig::from_toml_str(&content).context("Failed to parse config file")
}

fn parse_samples(text: &str) -> Result<Vec<f64>> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            let value: f64 = token
                .parse()
                .with_context(|| format!("Invalid sample: {}", token))?;
            if value.is_nan() {
                bail!("NaN is not a valid sample");
            }
            Ok(value)
        })
        .collect()
}

fn print_text(report: &Report) {
    println!("Samples: {}", report.samples);
    println!("Peaks:   {:?}", report.peaks);
    for level in &report.levels {
        println!(
            "Level {:>2}: {:>6} samples, peaks at {:?}",
            level.depth, level.samples, level.root_peaks
        );
    }
    if !report.fixed_point {
        println!("(level budget exhausted before the fixed point)");
    }
}
