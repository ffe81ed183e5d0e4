//! Logging setup for the spinner binary.

use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, prelude::*};

/// CLI arguments for controlling tracing/logging output.
#[derive(clap::Args, Debug, Clone)]
pub struct TracingArgs {
    /// Increase logging verbosity (can be repeated: -v, -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Suppress all logging except warnings and errors
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Log output format: compact, pretty, or json
    #[arg(long = "log-format", default_value = "compact", global = true)]
    pub log_format: LogFormat,
}

/// Available log output formats.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact single-line format (default)
    #[default]
    Compact,
    /// Pretty multi-line format with colors
    Pretty,
    /// JSON format for machine parsing
    Json,
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

impl LogFormat {
    /// A stderr layer in this format. Colors are only used when stderr is a
    /// terminal so redirected logs stay plain text.
    fn layer(self) -> BoxedLayer {
        let ansi = std::io::stderr().is_terminal();
        match self {
            LogFormat::Compact => fmt::layer()
                .compact()
                .with_ansi(ansi)
                .with_writer(std::io::stderr)
                .boxed(),
            LogFormat::Pretty => fmt::layer()
                .pretty()
                .with_ansi(ansi)
                .with_writer(std::io::stderr)
                .boxed(),
            LogFormat::Json => fmt::layer().json().with_writer(std::io::stderr).boxed(),
        }
    }
}

impl TracingArgs {
    /// Level used when `RUST_LOG` is unset: `-q` selects warn, the default is
    /// info, `-v` is debug and `-vv` is trace.
    fn level(&self) -> &'static str {
        if self.quiet {
            return "warn";
        }
        match self.verbosity {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }

    /// Initialize the tracing subscriber.
    ///
    /// `RUST_LOG` wins when set. Logs are written to stderr so the report on
    /// stdout stays clean.
    ///
    /// # Panics
    ///
    /// Panics if the subscriber has already been set.
    pub fn init_tracing(&self) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            let level = self.level();
            EnvFilter::new(format!("{level},poker_spinner={level}"))
        };

        tracing_subscriber::registry()
            .with(self.log_format.layer().with_filter(filter))
            .init();
    }
}
