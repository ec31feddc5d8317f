//! Lap dataset loading.

pub mod reader;

pub use reader::{LapDataset, load_laps, read_laps};
