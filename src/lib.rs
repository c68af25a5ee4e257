pub mod analyzer;
pub mod config;
pub mod indicators;
pub mod lists;
pub mod registry;
pub mod report;

pub use analyzer::UrlAnalyzer;
pub use config::Config;
pub use registry::{RegistryDataProvider, SimulatedRegistry, TechnicalDetails};
pub use report::{Findings, UrlReport, Verdict};
