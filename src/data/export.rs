//! Dataset Export Module
//! Writes the generated dataset to CSV and the stats summary to JSON.

use crate::data::generator::{VitalSample, VitalSign};
use crate::stats::SignalStats;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to write JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Nothing to export")]
    EmptyDataset,
}

/// Writes dataset and summary files.
pub struct DatasetExporter;

impl DatasetExporter {
    /// Build a DataFrame with one column per record field.
    pub fn to_dataframe(samples: &[VitalSample]) -> Result<DataFrame, ExportError> {
        let times: Vec<i64> = samples.iter().map(|s| s.time).collect();
        let mut columns = vec![Column::new("time".into(), times)];

        for sign in VitalSign::ALL {
            let values: Vec<f64> = samples.iter().map(|s| s.value(sign)).collect();
            columns.push(Column::new(sign.column_name().into(), values));
        }

        Ok(DataFrame::new(columns)?)
    }

    /// Write the dataset as CSV with a header row.
    pub fn write_csv(samples: &[VitalSample], path: &Path) -> Result<(), ExportError> {
        if samples.is_empty() {
            return Err(ExportError::EmptyDataset);
        }

        let mut df = Self::to_dataframe(samples)?;
        let mut file = File::create(path)?;
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut df)?;
        Ok(())
    }

    /// Write the per-signal summary as pretty-printed JSON.
    pub fn write_summary_json(stats: &[SignalStats], path: &Path) -> Result<(), ExportError> {
        if stats.is_empty() {
            return Err(ExportError::EmptyDataset);
        }

        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, stats)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::generator::VitalsGenerator;
    use crate::stats::StatsCalculator;

    #[test]
    fn dataframe_has_one_column_per_field() {
        let samples = VitalsGenerator::generate(5, 0);
        let df = DatasetExporter::to_dataframe(&samples).expect("dataframe");
        assert_eq!(df.height(), 5);
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(names, ["time", "oxygen", "glucose", "heart_rate", "temperature"]);
    }

    #[test]
    fn csv_export_writes_header_and_all_rows() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("vitals.csv");
        let samples = VitalsGenerator::generate(10, 1_676_678_577);

        DatasetExporter::write_csv(&samples, &path).expect("write csv");

        let contents = std::fs::read_to_string(&path).expect("read csv");
        let mut lines = contents.lines();
        assert_eq!(
            lines.next(),
            Some("time,oxygen,glucose,heart_rate,temperature")
        );
        assert_eq!(lines.count(), 10);
    }

    #[test]
    fn csv_first_row_starts_at_the_start_timestamp() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("vitals.csv");
        let samples = VitalsGenerator::generate(3, 1000);

        DatasetExporter::write_csv(&samples, &path).expect("write csv");

        let contents = std::fs::read_to_string(&path).expect("read csv");
        let first_row = contents.lines().nth(1).expect("data row");
        assert!(first_row.starts_with("1000,"));
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("vitals.csv");
        assert!(matches!(
            DatasetExporter::write_csv(&[], &path),
            Err(ExportError::EmptyDataset)
        ));
    }

    #[test]
    fn summary_json_lists_all_signals() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("summary.json");
        let samples = VitalsGenerator::generate(20, 0);
        let stats = StatsCalculator::compute_all_signal_stats(&samples);

        DatasetExporter::write_summary_json(&stats, &path).expect("write json");

        let contents = std::fs::read_to_string(&path).expect("read json");
        let parsed: serde_json::Value = serde_json::from_str(&contents).expect("valid json");
        let entries = parsed.as_array().expect("array");
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0]["signal"], "Oxygen");
        assert_eq!(entries[0]["count"], 20);
    }
}
