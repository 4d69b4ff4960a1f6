//! Conversions from compute results to the transport types in `common`.
//!
//! Every value leaving the backend passes through here. Readings and
//! predictions are already rounded by compute; the mean is rounded here.

use common::{
    DashboardSnapshot, ForecastPoint, TemperatureForecast, TemperaturePoint, TemperatureSeries,
    TemperatureStatistics,
};
use compute::dashboard::{Dashboard, RECENT_READINGS};
use compute::forecast::ForecastSample;
use compute::regression::LinearModel;
use compute::rounding::round_dp2;
use compute::series::{Sample, SampleSeries};
use compute::statistics::SeriesStatistics;

/// Converts a run of samples spaced `interval_minutes` apart.
pub fn samples_to_series(samples: &[Sample], interval_minutes: i64) -> TemperatureSeries {
    let points = samples
        .iter()
        .map(|sample| TemperaturePoint::new(sample.timestamp, sample.value))
        .collect();
    TemperatureSeries::new(points, interval_minutes)
}

/// Converts a whole series.
pub fn series_to_dto(series: &SampleSeries) -> TemperatureSeries {
    samples_to_series(series.samples(), series.interval().num_minutes())
}

/// Converts the last `n` samples of a series.
pub fn recent_to_dto(series: &SampleSeries, n: usize) -> TemperatureSeries {
    samples_to_series(series.tail(n), series.interval().num_minutes())
}

pub fn statistics_to_dto(statistics: &SeriesStatistics) -> TemperatureStatistics {
    TemperatureStatistics {
        max: statistics.max,
        min: statistics.min,
        mean: round_dp2(statistics.mean),
    }
}

pub fn forecast_to_dto(model: &LinearModel, forecast: &[ForecastSample]) -> TemperatureForecast {
    TemperatureForecast {
        slope: model.slope,
        intercept: model.intercept,
        horizon: forecast.len(),
        points: forecast
            .iter()
            .map(|sample| ForecastPoint::new(sample.timestamp, sample.predicted_value))
            .collect(),
    }
}

pub fn dashboard_to_snapshot(dashboard: &Dashboard) -> DashboardSnapshot {
    DashboardSnapshot {
        recent: recent_to_dto(&dashboard.series, RECENT_READINGS),
        series: series_to_dto(&dashboard.series),
        statistics: statistics_to_dto(&dashboard.statistics),
        forecast: forecast_to_dto(&dashboard.model, &dashboard.forecast),
    }
}
