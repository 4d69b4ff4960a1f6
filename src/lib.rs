//! Plant-monitoring dashboard backend: simulated temperature readings,
//! summary statistics and a short-horizon linear forecast, served over HTTP.

pub mod cli;
pub mod config;
pub mod handlers;
pub mod helpers;
pub mod router;
pub mod schemas;
pub mod session;

mod openapi_tests;
