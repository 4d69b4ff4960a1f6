use anyhow::Result;
use clap::ValueEnum;
use common::DashboardSnapshot;
use compute::{dashboard, default_cache};
use std::fmt::Write;
use tracing::debug;

use crate::helpers::converters::dashboard_to_snapshot;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    Table,
    /// The same JSON the dashboard endpoint returns as `data`
    Json,
}

/// Renders one dashboard and prints it to stdout.
pub fn snapshot(seed: Option<u64>, format: OutputFormat) -> Result<()> {
    let output = render_snapshot(seed, format)?;
    println!("{output}");
    Ok(())
}

/// Renders one dashboard into the requested format.
pub fn render_snapshot(seed: Option<u64>, format: OutputFormat) -> Result<String> {
    let cache = default_cache(seed);
    let rendered = dashboard::render(&cache)?;
    let snapshot = dashboard_to_snapshot(&rendered);
    debug!(?format, samples = snapshot.series.len, "Snapshot rendered");

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&snapshot)?),
        OutputFormat::Table => Ok(format_table(&snapshot)?),
    }
}

fn format_table(snapshot: &DashboardSnapshot) -> std::result::Result<String, std::fmt::Error> {
    let mut out = String::new();

    writeln!(out, "Plant temperature monitor")?;
    writeln!(out)?;
    writeln!(out, "Recent readings")?;
    writeln!(out, "  {:<18} {:>16}", "Timestamp", "Temperature (°C)")?;
    for point in &snapshot.recent.points {
        writeln!(
            out,
            "  {:<18} {:>16.2}",
            point.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            point.value
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Statistics over {} readings", snapshot.series.len)?;
    writeln!(out, "  {:<18} {:>8.2}", "Maximum (°C)", snapshot.statistics.max)?;
    writeln!(out, "  {:<18} {:>8.2}", "Minimum (°C)", snapshot.statistics.min)?;
    writeln!(out, "  {:<18} {:>8.2}", "Mean (°C)", snapshot.statistics.mean)?;

    let forecast = &snapshot.forecast;
    writeln!(out)?;
    writeln!(
        out,
        "Forecast for the next {} minutes (trend {:+.4} °C per reading)",
        forecast.horizon as i64 * snapshot.series.interval_minutes,
        forecast.slope
    )?;
    writeln!(out, "  {:<18} {:>16}", "Timestamp", "Predicted (°C)")?;
    for point in &forecast.points {
        writeln!(
            out,
            "  {:<18} {:>16.2}",
            point.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            point.predicted_value
        )?;
    }

    Ok(out)
}
