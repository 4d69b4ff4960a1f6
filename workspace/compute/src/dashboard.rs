use std::sync::Arc;
use tracing::{info, instrument};

use crate::cache::SeriesCache;
use crate::error::Result;
use crate::forecast::{FORECAST_HORIZON, ForecastSample, forecast};
use crate::regression::{LinearModel, fit};
use crate::series::{Sample, SampleSeries};
use crate::statistics::SeriesStatistics;

/// Number of readings shown in the "recent readings" table.
pub const RECENT_READINGS: usize = 10;

/// Everything one dashboard render displays.
///
/// The series is shared with the cache; statistics, model and forecast are
/// recomputed on every render.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub series: Arc<SampleSeries>,
    pub statistics: SeriesStatistics,
    pub model: LinearModel,
    pub forecast: Vec<ForecastSample>,
}

impl Dashboard {
    /// The last `n` historical readings.
    pub fn recent(&self, n: usize) -> &[Sample] {
        self.series.tail(n)
    }
}

/// Renders the dashboard from the memoized series.
#[instrument(skip(cache))]
pub fn render(cache: &SeriesCache) -> Result<Dashboard> {
    let series = cache.get_or_generate()?;
    let statistics = SeriesStatistics::compute(&series)?;
    let model = fit(&series)?;
    let forecast = forecast(&model, &series, FORECAST_HORIZON)?;

    info!(
        samples = series.len(),
        forecast = forecast.len(),
        slope = model.slope,
        "Dashboard rendered"
    );

    Ok(Dashboard {
        series,
        statistics,
        model,
        forecast,
    })
}
