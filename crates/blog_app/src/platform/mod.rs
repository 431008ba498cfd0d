mod app;
pub mod cli;
mod config;
mod effects;
mod logging;
mod persist;
mod persistence;
mod store;
mod ui;

pub use app::run_app;
