//! amscope - Amplitude modulation scope
//!
//! Run with: cargo run -- view --carrier-freq 1000 --signal-freq 100

mod app;
mod output;
mod ui;

use app::AmScope;
use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Result as EyreResult, WrapErr};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use am_scope::form::{self, ModulationForm};

#[derive(Parser)]
#[command(name = "amscope")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive terminal plots of the three signals and their spectra
    View {
        #[command(flatten)]
        params: ParamArgs,
    },

    /// Print the analysis to stdout
    Dump {
        #[command(flatten)]
        params: ParamArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// The five modulation parameters, kept as text so the form layer can reject
/// anything non-numeric with a field-specific message.
#[derive(Args, Clone, Debug)]
struct ParamArgs {
    /// Carrier frequency (Hz)
    #[arg(long, visible_alias = "fc", default_value = "1000", allow_hyphen_values = true)]
    carrier_freq: String,

    /// Information signal frequency (Hz)
    #[arg(long, visible_alias = "fm", default_value = "100", allow_hyphen_values = true)]
    signal_freq: String,

    /// Modulation index
    #[arg(long, short = 'm', default_value = "0.5", allow_hyphen_values = true)]
    modulation_index: String,

    /// Duration (s)
    #[arg(long, short = 'T', default_value = "0.01", allow_hyphen_values = true)]
    duration: String,

    /// Sampling rate (Hz)
    #[arg(long, visible_alias = "fs", default_value = "8000", allow_hyphen_values = true)]
    sampling_rate: String,

    /// Refuse runs with more samples than this
    #[arg(long, default_value_t = form::DEFAULT_MAX_SAMPLES)]
    max_samples: usize,

    /// Remove the sample cap
    #[arg(long, conflicts_with = "max_samples")]
    no_limit: bool,
}

impl ParamArgs {
    fn fields(&self) -> [(&str, &str); 5] {
        [
            (form::CARRIER_FREQ, self.carrier_freq.as_str()),
            (form::SIGNAL_FREQ, self.signal_freq.as_str()),
            (form::MODULATION_INDEX, self.modulation_index.as_str()),
            (form::DURATION, self.duration.as_str()),
            (form::SAMPLING_RATE, self.sampling_rate.as_str()),
        ]
    }

    fn limit(&self) -> Option<usize> {
        (!self.no_limit).then_some(self.max_samples)
    }

    fn form(&self) -> ModulationForm {
        ModulationForm::new().max_samples(self.limit())
    }
}

impl Default for ParamArgs {
    fn default() -> Self {
        Self {
            carrier_freq: "1000".to_string(),
            signal_freq: "100".to_string(),
            modulation_index: "0.5".to_string(),
            duration: "0.01".to_string(),
            sampling_rate: "8000".to_string(),
            max_samples: form::DEFAULT_MAX_SAMPLES,
            no_limit: false,
        }
    }
}

fn init_logging(verbose: u8, interactive: bool) {
    // The scope owns the terminal, so stay quiet there unless asked
    let filter = match (verbose, interactive) {
        (0, true) => "off",
        (0, false) => "warn",
        (1, _) => "info",
        (2, _) => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Commands::View {
        params: ParamArgs::default(),
    });
    init_logging(cli.verbose, matches!(command, Commands::View { .. }));

    match command {
        Commands::View { params } => {
            let parsed = params
                .form()
                .parse(params.fields())
                .wrap_err("invalid parameters")?;
            AmScope::new()
                .params(parsed)
                .max_samples(params.limit())
                .run()
        }
        Commands::Dump { params, format } => {
            let analysis = params
                .form()
                .submit(params.fields())
                .wrap_err("invalid parameters")?;
            let stdout = std::io::stdout();
            output::write_analysis(&mut stdout.lock(), &analysis, format)
        }
    }
}
