use crate::app::pipeline::PipelineOutput;
use crate::model::impact::RegionSummary;
use crate::model::MapImpactCliError;
use geo::Point;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

#[derive(Serialize)]
struct PointRow {
    lat: f64,
    lon: f64,
}

fn serialize_summaries<W: Write>(
    writer: W,
    summaries: &[RegionSummary],
) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(writer);
    for summary in summaries {
        writer.serialize(summary)?;
    }
    writer.flush()?;
    Ok(())
}

/// writes the ordered region summaries as CSV, one row per region, columns
/// matching the on-screen table.
pub fn write_summary_csv(
    path: &Path,
    summaries: &[RegionSummary],
) -> Result<(), MapImpactCliError> {
    let file = std::fs::File::create(path).map_err(|e| MapImpactCliError::StdIoError {
        path: path.display().to_string(),
        source: e,
    })?;
    serialize_summaries(file, summaries)
        .map_err(|e| MapImpactCliError::CsvWriteError(path.display().to_string(), e))
}

/// writes the flat collection of segment start coordinates for external
/// map rendering, lat/lon columns.
pub fn write_points_csv(path: &Path, points: &[Point<f64>]) -> Result<(), MapImpactCliError> {
    let file = std::fs::File::create(path).map_err(|e| MapImpactCliError::StdIoError {
        path: path.display().to_string(),
        source: e,
    })?;
    let mut writer = csv::Writer::from_writer(file);
    for point in points {
        writer
            .serialize(PointRow {
                lat: point.y(),
                lon: point.x(),
            })
            .map_err(|e| MapImpactCliError::CsvWriteError(path.display().to_string(), e))?;
    }
    writer
        .flush()
        .map_err(|e| MapImpactCliError::StdIoError {
            path: path.display().to_string(),
            source: e,
        })
}

/// headline metrics for one run, logged after the summaries are written
pub fn log_headline_metrics(output: &PipelineOutput) {
    log::info!("total changed ways: {}", output.total_changed_ways());
    log::info!("total changed distance: {:.1} km", output.total_km());
    log::info!(
        "mean positive ETA impact ratio: {:.1}%",
        output.mean_positive_ratio()
    );
    log::info!(
        "mean negative ETA impact ratio: {:.1}%",
        output.mean_negative_ratio()
    );
}
