pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod utils;

pub use commands::generate::{GenerateReport, generate};
pub use config::{GeneratorConfig, SourceCandidates};
pub use error::GenerateError;
pub use utils::resolve::resolve_source;
