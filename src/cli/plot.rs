use anyhow::{Context, Result};
use std::path::PathBuf;

use t8_client::client::{MeasurementId, MeasurementKind, T8Client};
use t8_client::plot::{self, PlotStyle};
use t8_client::timestamp;

/// Fetch one waveform and render it as PNG
pub fn run_wave(
    client: &T8Client,
    id: MeasurementId,
    time: String,
    output: Option<PathBuf>,
    style: PlotStyle,
) -> Result<()> {
    let ts = timestamp::to_unix(&time)?;
    let waveform = client
        .get_wave(&id, ts)
        .with_context(|| format!("Failed to fetch waveform at {}", time))?;

    let output = output.unwrap_or_else(|| default_output(&id, MeasurementKind::Wave, ts));
    let title = format!(
        "Waveform - {} - {} - {} - {}",
        id.machine,
        id.point,
        id.pmode,
        waveform.iso_timestamp()?
    );
    plot::render_waveform(&output, &waveform, &title, &style)
        .with_context(|| format!("Failed to render {}", output.display()))?;

    println!("Saved waveform plot to {}", output.display());
    Ok(())
}

/// Fetch one spectrum and render it as PNG
pub fn run_spectrum(
    client: &T8Client,
    id: MeasurementId,
    time: String,
    output: Option<PathBuf>,
    style: PlotStyle,
) -> Result<()> {
    let ts = timestamp::to_unix(&time)?;
    let spectrum = client
        .get_spectrum(&id, ts)
        .with_context(|| format!("Failed to fetch spectrum at {}", time))?;

    let output = output.unwrap_or_else(|| default_output(&id, MeasurementKind::Spectrum, ts));
    let title = format!(
        "Spectrum - {} - {} - {} - {}",
        id.machine,
        id.point,
        id.pmode,
        spectrum.iso_timestamp()?
    );
    plot::render_spectrum(&output, &spectrum, &title, &style)
        .with_context(|| format!("Failed to render {}", output.display()))?;

    println!("Saved spectrum plot to {}", output.display());
    Ok(())
}

/// `{machine}_{point}_{pmode}_{ts}_{wave|spectrum}.png` in the working directory
fn default_output(id: &MeasurementId, kind: MeasurementKind, ts: i64) -> PathBuf {
    let suffix = match kind {
        MeasurementKind::Wave => "wave",
        MeasurementKind::Spectrum => "spectrum",
    };
    PathBuf::from(format!(
        "{}_{}_{}_{}_{}.png",
        id.machine, id.point, id.pmode, ts, suffix
    ))
}
