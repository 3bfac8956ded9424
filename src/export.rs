//! CSV export of listings and calibrated signals
//!
//! Two shapes of input are supported:
//!
//! - **Rows**: fixed-width sequences of values, with an optional header line
//!   written verbatim before the data.
//! - **Records**: `serde` structs, one per line. The header, when requested,
//!   is built from the field names in declaration order.
//!
//! Row order and field order are always preserved. Empty input is an error
//! rather than an empty file. Output is rendered in memory first, so a failed
//! export never leaves a partial file behind.

use std::fs;
use std::io::Write;
use std::path::Path;

use log::info;
use serde::Serialize;

use crate::signal::{Spectrum, Waveform};
use crate::timestamp::{self, TimestampError};

/// Errors that can occur while writing CSV output
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// I/O error creating or writing the file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV serialization error (including rows of unequal width)
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Nothing to write
    #[error("No data to export")]
    EmptyData,

    /// Row-mode header spans more than one line
    #[error("Header must be a single line: {0:?}")]
    InvalidHeader(String),

    /// A timestamp could not be formatted
    #[error("Timestamp error: {0}")]
    TimestampError(#[from] TimestampError),
}

/// One line of a timestamp listing export
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimestampRecord {
    /// Seconds since the Unix epoch
    pub timestamp: i64,
    /// Same instant as `YYYY-MM-DDTHH:MM:SS`
    pub iso: String,
}

/// Write fixed-width rows to a file
pub fn write_rows<P, R, T>(
    path: P,
    rows: &[R],
    header: Option<&str>,
) -> Result<(), ExportError>
where
    P: AsRef<Path>,
    R: AsRef<[T]>,
    T: ToString,
{
    let mut buffer = Vec::new();
    write_rows_to(&mut buffer, rows, header)?;
    fs::write(path.as_ref(), buffer)?;
    info!("Wrote {} rows to {}", rows.len(), path.as_ref().display());
    Ok(())
}

/// Write fixed-width rows to any writer
pub fn write_rows_to<W, R, T>(
    mut out: W,
    rows: &[R],
    header: Option<&str>,
) -> Result<(), ExportError>
where
    W: Write,
    R: AsRef<[T]>,
    T: ToString,
{
    if rows.is_empty() {
        return Err(ExportError::EmptyData);
    }
    if let Some(header) = header.filter(|h| h.contains(['\n', '\r'])) {
        return Err(ExportError::InvalidHeader(header.to_string()));
    }

    if let Some(header) = header {
        writeln!(out, "{}", header)?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(out);
    for row in rows {
        writer.write_record(row.as_ref().iter().map(|v| v.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}

/// Write serializable records to a file
pub fn write_records<P, S>(
    path: P,
    records: &[S],
    include_header: bool,
) -> Result<(), ExportError>
where
    P: AsRef<Path>,
    S: Serialize,
{
    let mut buffer = Vec::new();
    write_records_to(&mut buffer, records, include_header)?;
    fs::write(path.as_ref(), buffer)?;
    info!(
        "Wrote {} records to {}",
        records.len(),
        path.as_ref().display()
    );
    Ok(())
}

/// Write serializable records to any writer
pub fn write_records_to<W, S>(
    out: W,
    records: &[S],
    include_header: bool,
) -> Result<(), ExportError>
where
    W: Write,
    S: Serialize,
{
    if records.is_empty() {
        return Err(ExportError::EmptyData);
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(include_header)
        .from_writer(out);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Dump a waveform as `time,amplitude` rows
pub fn write_waveform<P: AsRef<Path>>(path: P, waveform: &Waveform) -> Result<(), ExportError> {
    let rows: Vec<[f64; 2]> = waveform
        .time_axis()
        .into_iter()
        .zip(waveform.samples.iter().copied())
        .map(|(t, v)| [t, v])
        .collect();
    write_rows(path, &rows, Some("time,amplitude"))
}

/// Dump a spectrum as `frequency,amplitude` rows
pub fn write_spectrum<P: AsRef<Path>>(path: P, spectrum: &Spectrum) -> Result<(), ExportError> {
    let rows: Vec<[f64; 2]> = spectrum
        .frequency_axis()
        .into_iter()
        .zip(spectrum.bins.iter().copied())
        .map(|(f, v)| [f, v])
        .collect();
    write_rows(path, &rows, Some("frequency,amplitude"))
}

/// Build listing records pairing each timestamp with its ISO form
pub fn timestamp_records(timestamps: &[i64]) -> Result<Vec<TimestampRecord>, ExportError> {
    timestamps
        .iter()
        .map(|&ts| {
            Ok(TimestampRecord {
                timestamp: ts,
                iso: timestamp::to_iso(ts)?,
            })
        })
        .collect()
}

/// Dump a listing as `timestamp,iso` records
pub fn write_timestamps<P: AsRef<Path>>(path: P, timestamps: &[i64]) -> Result<(), ExportError> {
    write_records(path, &timestamp_records(timestamps)?, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows_to_string(rows: &[Vec<i32>], header: Option<&str>) -> String {
        let mut out = Vec::new();
        write_rows_to(&mut out, rows, header).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_rows_with_header() {
        let rows = vec![vec![1, 2], vec![3, 4]];

        assert_eq!(rows_to_string(&rows, Some("a,b")), "a,b\n1,2\n3,4\n");
    }

    #[test]
    fn test_rows_without_header() {
        let rows = vec![vec![5], vec![6], vec![7]];

        assert_eq!(rows_to_string(&rows, None), "5\n6\n7\n");
    }

    #[test]
    fn test_rows_unequal_width() {
        let rows = vec![vec![1, 2], vec![3]];
        let mut out = Vec::new();

        assert!(matches!(
            write_rows_to(&mut out, &rows, None),
            Err(ExportError::CsvError(_))
        ));
    }

    #[test]
    fn test_empty_input_rejected() {
        let rows: Vec<Vec<i32>> = Vec::new();
        let records: Vec<TimestampRecord> = Vec::new();

        assert!(matches!(
            write_rows_to(Vec::new(), &rows, Some("a")),
            Err(ExportError::EmptyData)
        ));
        assert!(matches!(
            write_records_to(Vec::new(), &records, true),
            Err(ExportError::EmptyData)
        ));
    }

    #[test]
    fn test_multiline_header_rejected() {
        let rows = vec![vec![1]];

        for header in ["a\n1", "a\r\n", "a\rb"] {
            assert!(matches!(
                write_rows_to(Vec::new(), &rows, Some(header)),
                Err(ExportError::InvalidHeader(h)) if h == header
            ));
        }
    }

    #[test]
    fn test_records_preserve_field_order() {
        #[derive(Serialize)]
        struct Reading {
            point: &'static str,
            value: f64,
            unit: &'static str,
        }

        let records = [
            Reading { point: "P1", value: 1.5, unit: "g" },
            Reading { point: "P2", value: -0.25, unit: "mm/s" },
        ];
        let mut out = Vec::new();
        write_records_to(&mut out, &records, true).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "point,value,unit\nP1,1.5,g\nP2,-0.25,mm/s\n"
        );
    }

    #[test]
    fn test_records_without_header() {
        let records = timestamp_records(&[0]).unwrap();
        let mut out = Vec::new();
        write_records_to(&mut out, &records, false).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "0,1970-01-01T00:00:00\n");
    }
}
