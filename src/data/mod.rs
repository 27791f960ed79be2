//! Data module - synthetic dataset generation, projection, and export

mod export;
mod generator;
mod projector;

pub use export::DatasetExporter;
pub use generator::{
    VitalSample, VitalSign, VitalsGenerator, SAMPLE_COUNT, SAMPLE_INTERVAL_SECS, START_TIMESTAMP,
};
pub use projector::SignalProjector;
