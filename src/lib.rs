//! Driving behavior scoring: Tukey-fence outlier removal, min-max
//! normalization to [0, 100] and weighted aggregation across parameters.

pub mod analyze;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod types;

pub use analyze::analyze;
pub use error::{Result, ScoreError};
pub use types::config::{AlignmentPolicy, PipelineConfig, ScoringConfig};
pub use types::dataset::Dataset;
pub use types::parameter::Parameter;
pub use types::report::{DriverScore, ParameterScore, ScoreReport, Warning};
pub use types::scoring::Weights;
