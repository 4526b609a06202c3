pub mod config;
pub mod dataset;
pub mod parameter;
pub mod report;
pub mod scoring;
