use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

use crate::error::{InvalidSeriesError, Result};
use crate::regression::LinearModel;
use crate::rounding::round_dp2;
use crate::series::SampleSeries;

/// Number of future intervals the dashboard forecasts.
pub const FORECAST_HORIZON: usize = 5;

/// A predicted reading beyond the end of the historical series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastSample {
    pub timestamp: DateTime<Utc>,
    pub predicted_value: f64,
}

/// Extrapolates `model` over the next `horizon` intervals of `series`.
///
/// Offset `k` is evaluated at index `series.len() + k` and stamped
/// `interval * (k + 1)` after the last historical sample. Predictions are
/// rounded to two decimals.
#[instrument(skip(model, series), fields(len = series.len()))]
pub fn forecast(
    model: &LinearModel,
    series: &SampleSeries,
    horizon: usize,
) -> Result<Vec<ForecastSample>> {
    let last = series.last().ok_or(InvalidSeriesError::TooShort {
        required: 1,
        actual: 0,
    })?;
    let interval = series.interval();

    let predictions = (0..horizon)
        .map(|offset| {
            let value = model.predict(series.len() + offset);
            Ok(ForecastSample {
                timestamp: last.timestamp + interval * (offset as i32 + 1),
                predicted_value: round_dp2(InvalidSeriesError::ensure_finite("prediction", value)?),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(horizon, "Forecast {} future samples", predictions.len());
    Ok(predictions)
}
