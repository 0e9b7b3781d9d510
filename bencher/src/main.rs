use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use log::{debug, info};

use measure::Dimensions;
use structs::{CSV_HEADER, SCENARIOS};

mod demo;
mod measure;
mod structs;

/// Measures the run time of box blur of a random multi-channel image
/// stored in planar and interleaved layouts.
#[derive(Parser)]
#[clap(version, about, long_about = None)]
struct Cli {
    /// Height of the source image
    #[clap(value_parser, required_unless_present = "demo")]
    height: Option<NonZeroU32>,

    /// Width of the source image
    #[clap(value_parser, required_unless_present = "demo")]
    width: Option<NonZeroU32>,

    /// Number of channels of the source image
    #[clap(value_parser, required_unless_present = "demo")]
    channels: Option<NonZeroU32>,

    /// Number of trials; the minimal duration of every phase is reported
    #[clap(value_parser, required_unless_present = "demo")]
    iterations: Option<NonZeroU32>,

    /// Seed of the random generator used to fill the source image
    #[clap(short, long, default_value_t = 0)]
    seed: u64,

    /// Path to CSV file with results (stdout by default)
    #[clap(short, long, value_parser)]
    output: Option<PathBuf>,

    /// Print convolution results for a small sample image and exit
    #[clap(long, action)]
    demo: bool,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Usage is a part of error message.
            err.print().context("Failed to print usage")?;
            process::exit(parse_error_exit_code(err.kind()));
        }
    };
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    if cli.demo {
        let stdout = io::stdout();
        return demo::run_demo(&mut stdout.lock());
    }
    run_benchmark(&cli)
}

/// Help and version requests succeed, any malformed or zero-valued
/// argument exits with code 1.
fn parse_error_exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

fn run_benchmark(cli: &Cli) -> Result<()> {
    let dims = Dimensions {
        height: cli.height.context("HEIGHT is required")?.get(),
        width: cli.width.context("WIDTH is required")?.get(),
        channels: cli.channels.context("CHANNELS is required")?.get(),
    };
    let trials = cli.iterations.context("ITERATIONS is required")?.get();
    let count = dims.samples_count()?;

    debug!(
        "Fill {}x{}x{} source image with random samples (seed {})",
        dims.height, dims.width, dims.channels, cli.seed
    );
    let src = measure::random_samples(cli.seed, count);
    let mut dst = vec![0f32; count];

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("Failed to create output file {:?}", path))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    writeln!(out, "{}", CSV_HEADER)?;
    for scenario in SCENARIOS.iter() {
        info!("Measure {} in {} trials", scenario.name, trials);
        let runtime = measure::measure_scenario(scenario, &src, dims, trials, &mut dst)
            .with_context(|| format!("Failed to measure {}", scenario.name))?;
        info!("{}: total {:?}", scenario.name, runtime.total());
        writeln!(out, "{}", runtime.to_csv_row(scenario.name))?;
    }
    out.flush().context("Failed to write results")?;
    Ok(())
}
