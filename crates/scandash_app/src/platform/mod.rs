mod app;
mod constants;
mod effects;
mod input;
mod logging;
mod ui;

pub use app::run_app;
