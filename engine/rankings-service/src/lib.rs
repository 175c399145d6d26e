//! # Rankings Service
//!
//! Serves MFL power rankings over HTTP and from the command line.
//!
//! Each request gathers the league roster, standings and all-play report
//! concurrently, ranks them with `power-rankings` and renders a text table or
//! the JSON payload consumed by the static web page.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod render;
pub mod rest_api;

pub use config::{load_config, LoggingConfig, RenderConfig, ServerConfig, ServiceConfig};
pub use error::{ServiceError, ServiceResult};
pub use logging::initialize_logging;
pub use pipeline::{compute_rankings, LeagueSnapshot, LeagueSource, MflSource, StaticSource};
pub use render::{render, render_json, render_table, OutputFormat, TeamView};
pub use rest_api::create_routes;
