use tracing::debug;

use crate::error::DomainError;

/// One-day 99% VaR.
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.99;

pub(crate) fn validate_confidence(confidence_level: f64) -> Result<(), DomainError> {
    if confidence_level > 0.0 && confidence_level < 1.0 {
        Ok(())
    } else {
        Err(DomainError::ConfidenceLevel(confidence_level))
    }
}

/// Quantile of an ascending sample by linear interpolation between the two order statistics
/// around the fractional rank `probability * (m - 1)`.
pub fn empirical_quantile(sorted: &[f64], probability: f64) -> Result<f64, DomainError> {
    if sorted.is_empty() {
        return Err(DomainError::EmptySample);
    }
    if !(0.0..=1.0).contains(&probability) {
        return Err(DomainError::QuantileProbability(probability));
    }
    let rank = probability * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    if lo == hi {
        return Ok(sorted[lo]);
    }
    Ok(sorted[lo] * (1.0 - frac) + sorted[hi] * frac)
}

/// Historical simulation VaR of a PnL sample, taken at the `1 - confidence_level` tail.
/// The result is the signed PnL at that quantile, losses being negative.
pub fn historical_var(pnl: &[f64], confidence_level: f64) -> Result<f64, DomainError> {
    sample_var(pnl.to_vec(), confidence_level)
}

pub(crate) fn sample_var(mut sample: Vec<f64>, confidence_level: f64) -> Result<f64, DomainError> {
    validate_confidence(confidence_level)?;
    if let Some((index, &value)) = sample.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(DomainError::NonFinitePnl { index, value });
    }
    sample.sort_by(|a, b| a.total_cmp(b));

    let var = empirical_quantile(&sample, 1.0 - confidence_level)?;
    debug!(
        observations = sample.len(),
        confidence_level,
        var,
        "historical var"
    );
    Ok(var)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn four_observations() {
        let (a, b, c, d) = (-3.0, -1.0, 2.0, 5.0);
        // rank 0.01 * 3 = 0.03
        let var = historical_var(&[c, a, d, b], 0.99).unwrap();
        assert_approx_eq!(var, 0.97 * a + 0.03 * b, 1e-12);

        // rank 0.4 * 3 = 1.2
        let var = historical_var(&[d, c, b, a], 0.6).unwrap();
        assert_approx_eq!(var, 0.8 * b + 0.2 * c, 1e-12);
    }

    #[test]
    fn reference_weights_at_161_observations() {
        let pnl: Vec<f64> = (0..161).map(|i| ((i * 37) % 161) as f64 - 80.0).collect();
        let mut sorted = pnl.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let var = historical_var(&pnl, 0.99).unwrap();
        assert_approx_eq!(var, 0.4 * sorted[1] + 0.6 * sorted[2], 1e-9);
    }

    #[test]
    fn hundred_evenly_spaced_observations() {
        let pnl: Vec<f64> = (0..100).rev().map(|i| i as f64 - 49.5).collect();
        let var = historical_var(&pnl, 0.99).unwrap();
        assert_approx_eq!(var, -49.5 * 0.01 - 48.5 * 0.99, 1e-9);

        // mirrored rank 0.99 * 99 = 98.01 in the upper tail
        let mut sorted = pnl.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let upper = sorted[98] * (1.0 - 0.01) + sorted[99] * 0.01;
        assert_approx_eq!(var, -upper, 1e-9);
        assert_approx_eq!(empirical_quantile(&sorted, 0.99).unwrap(), upper, 1e-9);
    }

    #[test]
    fn exact_rank_hits_order_statistic() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(empirical_quantile(&sorted, 0.0).unwrap(), 1.0);
        assert_eq!(empirical_quantile(&sorted, 0.5).unwrap(), 3.0);
        assert_eq!(empirical_quantile(&sorted, 1.0).unwrap(), 5.0);
        assert_eq!(historical_var(&[7.5], 0.95).unwrap(), 7.5);
        assert!(empirical_quantile(&sorted, 1.01).is_err());
    }

    #[test]
    fn confidence_level_bounds() {
        let pnl = [-1.0, 0.5, 2.0];
        for confidence_level in [0.0, 1.0, 1.5, -0.1] {
            assert_eq!(
                historical_var(&pnl, confidence_level),
                Err(DomainError::ConfidenceLevel(confidence_level))
            );
        }
        assert!(historical_var(&pnl, f64::NAN).is_err());
    }

    #[test]
    fn degenerate_samples() {
        assert_eq!(historical_var(&[], 0.99), Err(DomainError::EmptySample));
        assert!(matches!(
            historical_var(&[1.0, f64::INFINITY], 0.99),
            Err(DomainError::NonFinitePnl { index: 1, .. })
        ));
    }
}
