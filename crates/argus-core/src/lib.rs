//! Core types, errors, configuration, and tracing for the Argus radar
//! schema bootstrap.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;
