use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use t8_client::client::{MeasurementId, MeasurementKind, T8Client};
use t8_client::{export, timestamp};

/// List the stored waveforms or spectra of a measurement point
pub fn run(
    client: &T8Client,
    kind: MeasurementKind,
    id: MeasurementId,
    output: Option<PathBuf>,
) -> Result<()> {
    let timestamps = match kind {
        MeasurementKind::Wave => client.list_waves(&id),
        MeasurementKind::Spectrum => client.list_spectra(&id),
    }
    .with_context(|| format!("Failed to list {}", kind.collection()))?;

    if timestamps.is_empty() {
        println!(
            "No {} found for {}/{}/{}",
            kind.collection(),
            id.machine,
            id.point,
            id.pmode
        );
        return Ok(());
    }

    if let Some(output) = output {
        export::write_timestamps(&output, &timestamps)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        info!("Saved {} timestamps to {}", timestamps.len(), output.display());
        return Ok(());
    }

    for ts in timestamps {
        println!("{}", timestamp::to_iso(ts)?);
    }

    Ok(())
}
