//! JSON configuration for the command-line tool.
pub mod skew;

pub use skew::{load_config, SkewToolConfig};
