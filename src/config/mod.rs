//! Configuration management for the Life board

pub mod settings;

pub use settings::{
    AnimationConfig, BoardConfig, CliOverrides, InputConfig, OutputConfig, OutputFormat, Settings,
};
