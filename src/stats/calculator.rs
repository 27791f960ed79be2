//! Statistics Calculator Module
//! Descriptive statistics over the projected signal values.

use crate::data::{SignalProjector, VitalSample, VitalSign};
use rayon::prelude::*;
use serde::Serialize;
use statrs::statistics::Statistics;

/// Summary statistics for one signal.
#[derive(Debug, Clone, Serialize)]
pub struct SignalStats {
    pub signal: String,
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
    pub p95: f64,
    pub p05: f64,
}

impl Default for SignalStats {
    fn default() -> Self {
        Self {
            signal: String::new(),
            count: 0,
            mean: f64::NAN,
            median: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            max: f64::NAN,
            p95: f64::NAN,
            p05: f64::NAN,
        }
    }
}

/// Handles statistical calculations with multi-threading support.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Compute descriptive statistics for an array of values.
    pub fn compute_descriptive_stats(values: &[f64]) -> SignalStats {
        let n = values.len();
        if n == 0 {
            return SignalStats::default();
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let mean = values.iter().mean();
        let std = if n > 1 { values.iter().std_dev() } else { 0.0 };

        let median = if n % 2 == 0 {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        } else {
            sorted[n / 2]
        };

        let p95 = Self::percentile(&sorted, 95.0);
        let p05 = Self::percentile(&sorted, 5.0);

        SignalStats {
            signal: String::new(),
            count: n,
            mean,
            median,
            std,
            min: sorted[0],
            max: sorted[n - 1],
            p95,
            p05,
        }
    }

    /// Calculate percentile using linear interpolation (NumPy compatible).
    fn percentile(sorted_values: &[f64], p: f64) -> f64 {
        let n = sorted_values.len();
        if n == 0 {
            return f64::NAN;
        }
        if n == 1 {
            return sorted_values[0];
        }

        let rank = (p / 100.0) * (n - 1) as f64;
        let lower = rank.floor() as usize;
        let upper = (rank.ceil() as usize).min(n - 1);
        let frac = rank - lower as f64;

        if lower == upper {
            sorted_values[lower]
        } else {
            sorted_values[lower] * (1.0 - frac) + sorted_values[upper] * frac
        }
    }

    /// Compute statistics for one signal of the dataset.
    pub fn compute_signal_stats(samples: &[VitalSample], sign: VitalSign) -> SignalStats {
        let values = SignalProjector::project(samples, sign);
        let mut stats = Self::compute_descriptive_stats(&values);
        stats.signal = sign.label().to_string();
        stats
    }

    /// Compute statistics for all four signals in parallel.
    pub fn compute_all_signal_stats(samples: &[VitalSample]) -> Vec<SignalStats> {
        VitalSign::ALL
            .par_iter()
            .map(|&sign| Self::compute_signal_stats(samples, sign))
            .collect()
    }
}
