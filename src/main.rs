//! # t8-client
//!
//! A command-line tool for browsing the waveforms and spectra stored on a T8
//! condition-monitoring server.
//!
//! ## Usage
//!
//! ```bash
//! export T8_HOST=https://t8.example.com/t8_api T8_USER=admin T8_PASSWORD=secret
//!
//! # List stored waveforms
//! t8-client list-waves -M LP_Turbine -p MAD31CY005 -m AM1
//!
//! # Dump one spectrum to CSV
//! t8-client get-spectrum -M LP_Turbine -p MAD31CY005 -m AM1 -t 2019-04-10T14:43:13 -o spectrum.csv
//!
//! # Plot one waveform
//! t8-client plot-wave -M LP_Turbine -p MAD31CY005 -m AM1 -t 2019-04-10T14:43:13
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
