use ndarray::Array1;
use tracing::trace;

use crate::error::DomainError;

/// Relative change between the rate of `day_index` and the rate one day before it.
/// Rates are ordered from most recent to oldest.
fn one_day_shift(rates: &[f64], day_index: usize) -> f64 {
    // kept as exp(ln(.)) - 1: reference pnl figures carry its rounding
    (rates[day_index] / rates[day_index + 1]).ln().exp() - 1.0
}

/// Historical simulation PnL of a position: the spot value shifted by every observed
/// one-day relative rate change. For `n` rates the vector has `n - 1` entries, entry 0 being
/// the most recent shift.
pub fn calculate_pnl_vector(
    spot_value: f64,
    historical_rates: &[f64],
) -> Result<Array1<f64>, DomainError> {
    if !(spot_value.is_finite() && spot_value > 0.0) {
        return Err(DomainError::NonPositiveSpot { value: spot_value });
    }
    if historical_rates.len() < 2 {
        return Err(DomainError::InsufficientHistory {
            len: historical_rates.len(),
        });
    }
    if let Some((index, &value)) = historical_rates
        .iter()
        .enumerate()
        .find(|(_, rate)| !(rate.is_finite() && **rate > 0.0))
    {
        return Err(DomainError::NonPositiveRate { index, value });
    }

    let pnl: Array1<f64> = (0..historical_rates.len() - 1)
        .map(|day_index| spot_value * one_day_shift(historical_rates, day_index))
        .collect();
    trace!(spot_value, shifts = pnl.len(), "pnl vector");
    Ok(pnl)
}
