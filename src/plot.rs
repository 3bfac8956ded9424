//! PNG line plots of waveforms and spectra
//!
//! Built on the `plotters` bitmap backend. Captions and axis labels need a
//! font backend and are only drawn with the `plot-labels` feature.

use std::path::Path;

use log::info;
use plotters::prelude::*;

use crate::signal::{Spectrum, Waveform};

/// Errors that can occur while rendering a plot
#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    /// The signal has no samples to draw
    #[error("Nothing to plot: {0} has no samples")]
    EmptySignal(&'static str),

    /// The drawing backend failed
    #[error("Failed to render plot: {0}")]
    RenderError(String),
}

impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for PlotError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        PlotError::RenderError(format!("{value:?}"))
    }
}

/// Image size and colours
#[derive(Clone, Debug)]
pub struct PlotStyle {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Background fill
    pub background: RGBColor,
    /// Signal line colour
    pub line: RGBColor,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            background: WHITE,
            line: BLUE,
        }
    }
}

impl PlotStyle {
    /// Default colours at the given size
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }
}

/// Render a waveform (amplitude against time in seconds)
pub fn render_waveform<P: AsRef<Path>>(
    path: P,
    waveform: &Waveform,
    title: &str,
    style: &PlotStyle,
) -> Result<(), PlotError> {
    if waveform.is_empty() {
        return Err(PlotError::EmptySignal("waveform"));
    }
    let points: Vec<(f64, f64)> = waveform
        .time_axis()
        .into_iter()
        .zip(waveform.samples.iter().copied())
        .collect();
    render_line(path.as_ref(), &points, title, "Time (s)", style)
}

/// Render a spectrum (amplitude against frequency in Hz)
pub fn render_spectrum<P: AsRef<Path>>(
    path: P,
    spectrum: &Spectrum,
    title: &str,
    style: &PlotStyle,
) -> Result<(), PlotError> {
    if spectrum.is_empty() {
        return Err(PlotError::EmptySignal("spectrum"));
    }
    let points: Vec<(f64, f64)> = spectrum
        .frequency_axis()
        .into_iter()
        .zip(spectrum.bins.iter().copied())
        .collect();
    render_line(path.as_ref(), &points, title, "Frequency (Hz)", style)
}

#[cfg_attr(not(feature = "plot-labels"), allow(unused_variables))]
fn render_line(
    path: &Path,
    points: &[(f64, f64)],
    title: &str,
    x_desc: &str,
    style: &PlotStyle,
) -> Result<(), PlotError> {
    let x_range = axis_range(points.iter().map(|p| p.0));
    let y_range = axis_range(points.iter().map(|p| p.1));

    {
        let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
        root.fill(&style.background)?;

        let mut builder = ChartBuilder::on(&root);
        builder.margin(15);
        #[cfg(feature = "plot-labels")]
        builder
            .caption(title, ("sans-serif", 22).into_font())
            .set_label_area_size(LabelAreaPosition::Left, 60)
            .set_label_area_size(LabelAreaPosition::Bottom, 45);

        let mut chart = builder.build_cartesian_2d(x_range.0..x_range.1, y_range.0..y_range.1)?;

        #[cfg(feature = "plot-labels")]
        chart
            .configure_mesh()
            .x_desc(x_desc)
            .y_desc("Amplitude")
            .light_line_style(&BLACK.mix(0.05))
            .draw()?;

        chart.draw_series(LineSeries::new(points.iter().copied(), &style.line))?;
        root.present()?;
    }

    info!("Wrote plot to {}", path.display());
    Ok(())
}

/// Data bounds, widened when every value is the same
fn axis_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !min.is_finite() || !max.is_finite() {
        return (-1.0, 1.0);
    }
    if (max - min).abs() < f64::EPSILON {
        let pad = if min == 0.0 { 1.0 } else { min.abs() * 0.1 };
        return (min - pad, max + pad);
    }
    (min, max)
}
