//! Synthetic Vitals Generator Module
//! Produces the fixed demo dataset of sinusoidal vital-sign samples.

use std::f64::consts::PI;

/// Number of samples in the demo dataset
pub const SAMPLE_COUNT: usize = 100;

/// Epoch second of the first sample
pub const START_TIMESTAMP: i64 = 1_676_678_577;

/// Seconds between consecutive samples
pub const SAMPLE_INTERVAL_SECS: i64 = 60;

/// One synthetic measurement: epoch timestamp plus four signal values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VitalSample {
    pub time: i64,
    pub oxygen: f64,
    pub glucose: f64,
    pub heart_rate: f64,
    pub temperature: f64,
}

impl VitalSample {
    /// Value of one signal field.
    pub fn value(&self, sign: VitalSign) -> f64 {
        match sign {
            VitalSign::Oxygen => self.oxygen,
            VitalSign::Glucose => self.glucose,
            VitalSign::HeartRate => self.heart_rate,
            VitalSign::Temperature => self.temperature,
        }
    }
}

/// The four generated vital signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VitalSign {
    Oxygen,
    Glucose,
    HeartRate,
    Temperature,
}

impl VitalSign {
    pub const ALL: [VitalSign; 4] = [
        VitalSign::Oxygen,
        VitalSign::Glucose,
        VitalSign::HeartRate,
        VitalSign::Temperature,
    ];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            VitalSign::Oxygen => "Oxygen",
            VitalSign::Glucose => "Glucose",
            VitalSign::HeartRate => "Heart Rate",
            VitalSign::Temperature => "Temperature",
        }
    }

    /// Column name used in the CSV export.
    pub fn column_name(&self) -> &'static str {
        match self {
            VitalSign::Oxygen => "oxygen",
            VitalSign::Glucose => "glucose",
            VitalSign::HeartRate => "heart_rate",
            VitalSign::Temperature => "temperature",
        }
    }

    /// Amplitude and frequency (cycles per sample) of the signal's sinusoid.
    pub fn waveform(&self) -> (f64, f64) {
        match self {
            VitalSign::Oxygen => (2.0, 0.01),
            VitalSign::Glucose => (10.0, 0.1),
            VitalSign::HeartRate => (1.0, 20.0),
            VitalSign::Temperature => (1.0, 15.0),
        }
    }

    /// Signal value at sample index i: amplitude * sin(2π * frequency * i).
    pub fn value_at(&self, i: usize) -> f64 {
        let (amplitude, frequency) = self.waveform();
        amplitude * (2.0 * PI * frequency * i as f64).sin()
    }
}

/// Produces the deterministic demo dataset.
pub struct VitalsGenerator;

impl VitalsGenerator {
    /// Generate `count` samples starting at `start_timestamp`, one per minute.
    pub fn generate(count: usize, start_timestamp: i64) -> Vec<VitalSample> {
        (0..count)
            .map(|i| VitalSample {
                time: start_timestamp + i as i64 * SAMPLE_INTERVAL_SECS,
                oxygen: VitalSign::Oxygen.value_at(i),
                glucose: VitalSign::Glucose.value_at(i),
                heart_rate: VitalSign::HeartRate.value_at(i),
                temperature: VitalSign::Temperature.value_at(i),
            })
            .collect()
    }

    /// The fixed dataset shown by the app.
    pub fn demo_dataset() -> Vec<VitalSample> {
        Self::generate(SAMPLE_COUNT, START_TIMESTAMP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn timestamps_advance_by_one_minute() {
        let samples = VitalsGenerator::generate(100, START_TIMESTAMP);
        assert_eq!(samples.len(), 100);
        for (i, sample) in samples.iter().enumerate() {
            assert_eq!(sample.time, START_TIMESTAMP + i as i64 * 60);
        }
    }

    #[test]
    fn first_sample_is_all_zero() {
        let samples = VitalsGenerator::generate(1, START_TIMESTAMP);
        let first = samples[0];
        assert_eq!(first.time, 1_676_678_577);
        assert!(first.oxygen.abs() < TOL);
        assert!(first.glucose.abs() < TOL);
        assert!(first.heart_rate.abs() < TOL);
        assert!(first.temperature.abs() < TOL);
    }

    #[test]
    fn oxygen_peaks_at_quarter_period() {
        // 0.01 cycles/sample puts the first crest at i = 25
        let samples = VitalsGenerator::demo_dataset();
        assert!((samples[25].oxygen - 2.0).abs() < 1e-6);
    }

    #[test]
    fn signals_follow_their_waveforms() {
        let samples = VitalsGenerator::demo_dataset();
        for (i, sample) in samples.iter().enumerate() {
            let x = i as f64;
            assert!((sample.oxygen - 2.0 * (2.0 * PI * 0.01 * x).sin()).abs() < TOL);
            assert!((sample.glucose - 10.0 * (2.0 * PI * 0.1 * x).sin()).abs() < TOL);
            assert!((sample.heart_rate - (2.0 * PI * 20.0 * x).sin()).abs() < TOL);
            assert!((sample.temperature - (2.0 * PI * 15.0 * x).sin()).abs() < TOL);
        }
    }

    #[test]
    fn field_accessor_matches_struct_fields() {
        let samples = VitalsGenerator::generate(10, 0);
        for sample in &samples {
            assert_eq!(sample.value(VitalSign::Oxygen), sample.oxygen);
            assert_eq!(sample.value(VitalSign::Glucose), sample.glucose);
            assert_eq!(sample.value(VitalSign::HeartRate), sample.heart_rate);
            assert_eq!(sample.value(VitalSign::Temperature), sample.temperature);
        }
    }

    #[test]
    fn empty_request_yields_empty_dataset() {
        assert!(VitalsGenerator::generate(0, START_TIMESTAMP).is_empty());
    }

    #[test]
    fn demo_dataset_is_deterministic() {
        assert_eq!(
            VitalsGenerator::demo_dataset(),
            VitalsGenerator::demo_dataset()
        );
    }
}
