// Library surface for the binary and for headless/integration tests.
pub mod app;
pub mod app_dirs;
pub mod config;
pub mod history;
pub mod language;
pub mod logging;
pub mod runtime;
pub mod scoring;
pub mod session;
pub mod ui;
pub mod word_generator;
