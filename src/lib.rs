//! brfss - Schema validation for the BRFSS 2015 diabetes health indicators dataset
//!
//! The data dictionary lists 22 survey variables. Every respondent row must carry
//! all of them, each inside its documented domain.

pub mod batch;
pub mod cli;
pub mod config;
pub mod observability;
pub mod schema;
pub mod stats;
pub mod table;
