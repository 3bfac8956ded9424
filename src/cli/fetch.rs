use anyhow::{Context, Result};
use std::path::PathBuf;

use t8_client::client::{MeasurementId, T8Client};
use t8_client::{export, timestamp};

/// Number of values shown when no output file is given
const PREVIEW_LEN: usize = 10;

/// Fetch one waveform and print it or dump it as CSV
pub fn run_wave(
    client: &T8Client,
    id: MeasurementId,
    time: String,
    output: Option<PathBuf>,
) -> Result<()> {
    let ts = timestamp::to_unix(&time)?;
    let waveform = client
        .get_wave(&id, ts)
        .with_context(|| format!("Failed to fetch waveform at {}", time))?;

    println!("Waveform {}/{}/{} at {}", id.machine, id.point, id.pmode, waveform.iso_timestamp()?);
    println!("  Sample rate: {} Hz", waveform.sample_rate);
    println!("  Samples: {} ({:.3} s)", waveform.len(), waveform.duration());

    match output {
        Some(output) => {
            export::write_waveform(&output, &waveform)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!("  Saved to {}", output.display());
        }
        None => println!("  Data: {}", preview(&waveform.samples)),
    }

    Ok(())
}

/// Fetch one spectrum and print it or dump it as CSV
pub fn run_spectrum(
    client: &T8Client,
    id: MeasurementId,
    time: String,
    output: Option<PathBuf>,
) -> Result<()> {
    let ts = timestamp::to_unix(&time)?;
    let spectrum = client
        .get_spectrum(&id, ts)
        .with_context(|| format!("Failed to fetch spectrum at {}", time))?;

    println!("Spectrum {}/{}/{} at {}", id.machine, id.point, id.pmode, spectrum.iso_timestamp()?);
    println!("  Frequency range: {} - {} Hz", spectrum.min_freq, spectrum.max_freq);
    println!("  Bins: {} ({:.4} Hz resolution)", spectrum.len(), spectrum.resolution());

    match output {
        Some(output) => {
            export::write_spectrum(&output, &spectrum)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!("  Saved to {}", output.display());
        }
        None => println!("  Data: {}", preview(&spectrum.bins)),
    }

    Ok(())
}

fn preview(values: &[f64]) -> String {
    let shown: Vec<String> = values
        .iter()
        .take(PREVIEW_LEN)
        .map(|v| format!("{:.6}", v))
        .collect();
    if values.len() > PREVIEW_LEN {
        format!("[{}, ...]", shown.join(", "))
    } else {
        format!("[{}]", shown.join(", "))
    }
}
