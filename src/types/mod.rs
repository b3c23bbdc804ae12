pub mod config;
pub mod formulation;
pub mod report;
pub mod scoring;
