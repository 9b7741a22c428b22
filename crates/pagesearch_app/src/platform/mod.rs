//! Terminal front end: wires the pure core to the fetch engine.
mod app;
mod config;
mod effects;
mod logging;
mod ui;

pub use app::run_app;
