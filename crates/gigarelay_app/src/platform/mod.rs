//! Terminal shell: configuration, logging, effect execution and rendering
//! around the pure core.
mod app;
mod commands;
mod config;
mod effects;
mod logging;
mod persistence;
mod ui;

pub use app::run_app;
