mod tracing_args;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use poker_spinner::spinner::SpinnerBuilder;

#[derive(Parser, Debug)]
#[command(
    name = "poker_spinner",
    about = "Simulate the ROI distribution of spin poker tournaments",
    long_about = "Reads a payout table from a JSON config and runs a parallel Monte Carlo\n\
                  simulation of the ROI per run for the given win rate."
)]
struct Args {
    /// Tracing/logging options
    #[command(flatten)]
    tracing: tracing_args::TracingArgs,

    /// Path to the JSON configuration
    #[arg(short = 'c', long, default_value = "config.json")]
    config: PathBuf,

    /// The win rate (percent) to use, overriding the config
    #[arg(long)]
    winrate: Option<f64>,

    /// How often the simulation should be run, overriding the config
    #[arg(long)]
    runs: Option<usize>,

    /// Number of worker threads (defaults to the available parallelism)
    #[arg(long)]
    threads: Option<usize>,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    args.tracing.init_tracing();
    let start = Instant::now();

    let mut builder = match SpinnerBuilder::new().config_file(&args.config) {
        Ok(builder) => builder,
        Err(err) => {
            println!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    if let Some(win_rate) = args.winrate {
        builder = builder.win_rate(win_rate);
    }
    if let Some(runs) = args.runs {
        builder = builder.runs(runs);
    }
    if let Some(threads) = args.threads {
        builder = builder.workers(threads);
    }
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }

    let spinner = match builder.build() {
        Ok(spinner) => spinner,
        Err(err) => {
            println!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    println!("{}", spinner.configuration_summary());

    let result = match spinner.run() {
        Ok(result) => result,
        Err(err) => {
            println!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    print!("{}", result.to_report());
    println!("Runtime: {:.3}s", start.elapsed().as_secs_f64());

    ExitCode::SUCCESS
}
