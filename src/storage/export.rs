use std::fs::OpenOptions;
use std::path::Path;

use crate::error::Result;
use crate::models::EmissionsBreakdown;

pub const CSV_HEADER: [&str; 6] = [
    "label",
    "transportation",
    "home_energy",
    "food",
    "consumption",
    "total",
];

fn breakdown_record(label: &str, b: &EmissionsBreakdown) -> [String; 6] {
    [
        label.to_string(),
        format!("{:.3}", b.transportation),
        format!("{:.3}", b.home_energy),
        format!("{:.3}", b.food),
        format!("{:.3}", b.consumption),
        format!("{:.3}", b.total),
    ]
}

/// Write labelled results to a new CSV file, replacing any existing one.
pub fn write_results_csv(results: &[(String, EmissionsBreakdown)], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(CSV_HEADER)?;

    for (label, breakdown) in results {
        wtr.write_record(breakdown_record(label, breakdown))?;
    }

    wtr.flush()?;
    tracing::info!(path = %path.display(), rows = results.len(), "wrote results CSV");
    Ok(())
}

/// Append one result row, writing the header first if the file is new or empty.
pub fn append_result_csv(label: &str, breakdown: &EmissionsBreakdown, path: &Path) -> Result<()> {
    let needs_header = path.metadata().map(|m| m.len() == 0).unwrap_or(true);

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(file);

    if needs_header {
        wtr.write_record(CSV_HEADER)?;
    }
    wtr.write_record(breakdown_record(label, breakdown))?;

    wtr.flush()?;
    tracing::info!(path = %path.display(), "appended result row");
    Ok(())
}
