//! Signal Projection Module
//! Extracts a single signal's values from the sample sequence.

use crate::data::generator::{VitalSample, VitalSign};

/// Projects sample records onto flat per-signal value sequences.
pub struct SignalProjector;

impl SignalProjector {
    /// One value per sample, in sample order.
    pub fn project(samples: &[VitalSample], sign: VitalSign) -> Vec<f64> {
        samples.iter().map(|s| s.value(sign)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::generator::VitalsGenerator;

    #[test]
    fn projection_preserves_length_and_order() {
        let samples = VitalsGenerator::demo_dataset();
        for sign in VitalSign::ALL {
            let values = SignalProjector::project(&samples, sign);
            assert_eq!(values.len(), samples.len());
            for (sample, value) in samples.iter().zip(&values) {
                assert_eq!(sample.value(sign), *value);
            }
        }
    }

    #[test]
    fn oxygen_projection_matches_field() {
        let samples = VitalsGenerator::generate(10, 0);
        let values = SignalProjector::project(&samples, VitalSign::Oxygen);
        assert_eq!(values[3], samples[3].oxygen);
    }

    #[test]
    fn empty_input_projects_to_empty() {
        assert!(SignalProjector::project(&[], VitalSign::Glucose).is_empty());
    }
}
