use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use log::debug;
use std::path::PathBuf;

use t8_client::client::{MeasurementId, MeasurementKind, T8Client};

mod config;
mod fetch;
mod list;
#[cfg(feature = "plot")]
mod plot;

use config::{Config, ConnectionOverrides};

/// t8-client - List, fetch and plot T8 waveforms and spectra
#[derive(Parser)]
#[command(name = "t8-client")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Load connection and plot settings from a TOML config file
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Base URL of the T8 API
    #[arg(long, env = "T8_HOST", global = true)]
    host: Option<String>,

    /// User name for the T8 API
    #[arg(long, env = "T8_USER", global = true)]
    user: Option<String>,

    /// Password for the T8 API
    #[arg(long, env = "T8_PASSWORD", hide_env_values = true, global = true)]
    password: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

/// Tags selecting one measurement series.
#[derive(Args)]
struct PmodeArgs {
    /// Machine tag
    #[arg(short = 'M', long)]
    machine: String,

    /// Point tag
    #[arg(short = 'p', long)]
    point: String,

    /// Processing mode tag
    #[arg(short = 'm', long)]
    pmode: String,
}

impl From<PmodeArgs> for MeasurementId {
    fn from(args: PmodeArgs) -> Self {
        MeasurementId::new(args.machine, args.point, args.pmode)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List the available waveforms for a machine, point and processing mode
    ListWaves {
        #[command(flatten)]
        pmode: PmodeArgs,

        /// Write the listing to a CSV file instead of printing it
        #[arg(short = 'o', long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// List the available spectra for a machine, point and processing mode
    ListSpectra {
        #[command(flatten)]
        pmode: PmodeArgs,

        /// Write the listing to a CSV file instead of printing it
        #[arg(short = 'o', long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Get the waveform for a machine, point, processing mode and time
    GetWave {
        #[command(flatten)]
        pmode: PmodeArgs,

        /// Time of the wave (ISO format, UTC unless an offset is given)
        #[arg(short = 't', long)]
        time: String,

        /// Write the samples to a CSV file
        #[arg(short = 'o', long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Get the spectrum for a machine, point, processing mode and time
    GetSpectrum {
        #[command(flatten)]
        pmode: PmodeArgs,

        /// Time of the spectrum (ISO format, UTC unless an offset is given)
        #[arg(short = 't', long)]
        time: String,

        /// Write the bins to a CSV file
        #[arg(short = 'o', long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Plot the waveform for a machine, point, processing mode and time
    #[cfg(feature = "plot")]
    PlotWave {
        #[command(flatten)]
        pmode: PmodeArgs,

        /// Time of the wave (ISO format, UTC unless an offset is given)
        #[arg(short = 't', long)]
        time: String,

        /// PNG output path (defaults to a name built from the tags and time)
        #[arg(short = 'o', long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Plot the spectrum for a machine, point, processing mode and time
    #[cfg(feature = "plot")]
    PlotSpectrum {
        #[command(flatten)]
        pmode: PmodeArgs,

        /// Time of the spectrum (ISO format, UTC unless an offset is given)
        #[arg(short = 't', long)]
        time: String,

        /// PNG output path (defaults to a name built from the tags and time)
        #[arg(short = 'o', long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    #[cfg(feature = "plot")]
    let style = {
        let mut style = t8_client::plot::PlotStyle::default();
        style.width = config.plot.width.unwrap_or(style.width);
        style.height = config.plot.height.unwrap_or(style.height);
        style
    };

    let client_config = config.client_config(ConnectionOverrides {
        host: cli.host,
        user: cli.user,
        password: cli.password,
        timeout_secs: cli.timeout,
    })?;
    debug!("Using {:?}", client_config);
    let client = T8Client::new(client_config);

    match cli.command {
        Commands::ListWaves { pmode, output } => {
            list::run(&client, MeasurementKind::Wave, pmode.into(), output)
        }
        Commands::ListSpectra { pmode, output } => {
            list::run(&client, MeasurementKind::Spectrum, pmode.into(), output)
        }
        Commands::GetWave {
            pmode,
            time,
            output,
        } => fetch::run_wave(&client, pmode.into(), time, output),
        Commands::GetSpectrum {
            pmode,
            time,
            output,
        } => fetch::run_spectrum(&client, pmode.into(), time, output),
        #[cfg(feature = "plot")]
        Commands::PlotWave {
            pmode,
            time,
            output,
        } => plot::run_wave(&client, pmode.into(), time, output, style),
        #[cfg(feature = "plot")]
        Commands::PlotSpectrum {
            pmode,
            time,
            output,
        } => plot::run_spectrum(&client, pmode.into(), time, output, style),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_get_wave() {
        let cli = Cli::try_parse_from([
            "t8-client",
            "-vv",
            "--host",
            "http://t8",
            "get-wave",
            "-M",
            "LP_Turbine",
            "-p",
            "MAD31CY005",
            "-m",
            "AM1",
            "-t",
            "2019-04-10T14:43:13",
        ])
        .unwrap();

        assert_eq!(cli.verbosity(), 2);
        assert_eq!(cli.host.as_deref(), Some("http://t8"));
        match cli.command {
            Commands::GetWave { pmode, time, output } => {
                let id = MeasurementId::from(pmode);
                assert_eq!(id, MeasurementId::new("LP_Turbine", "MAD31CY005", "AM1"));
                assert_eq!(time, "2019-04-10T14:43:13");
                assert!(output.is_none());
            }
            _ => panic!("expected get-wave"),
        }
    }

    #[test]
    fn test_list_requires_tags() {
        assert!(Cli::try_parse_from(["t8-client", "list-spectra", "-M", "LP_Turbine"]).is_err());
    }
}
