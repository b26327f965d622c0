pub mod archetypes;
pub mod axes;
pub mod confidence;
pub mod thresholds;
