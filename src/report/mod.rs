//! Report orchestration and output

pub mod config;
pub mod model;
pub mod pipeline;
pub mod writer;

pub use config::ReportConfig;
pub use model::CoachingReport;
pub use pipeline::ReportPipeline;
pub use writer::ReportWriter;
