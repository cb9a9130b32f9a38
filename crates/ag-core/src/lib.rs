//! Configuration, types, and shared structures for asciigen.
//!
//! This crate contains the data model of the quantization pipeline, the
//! collaborator traits and the configuration logic used across the workspace.

pub mod charset;
pub mod config;
pub mod error;
pub mod frame;
pub mod preset;
pub mod traits;

pub use charset::Palette;
pub use config::{AppConfig, QuantizationConfig, ResampleFilter, TextConfig};
pub use error::CoreError;
pub use frame::{CharacterGrid, LumaFrame, RasterImage};
pub use preset::ConfigPreset;
