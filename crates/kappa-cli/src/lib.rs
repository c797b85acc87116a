#[macro_use]
mod log_macros;

pub mod app;
pub mod chart;
pub mod cli;
pub mod error;
pub mod pipeline;
pub mod tracing_init;
