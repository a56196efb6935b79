pub mod config;
pub mod error;
pub mod graph;
pub mod result;

pub use config::AnalysisConfig;
pub use error::GraphError;
pub use result::GraphResult;
