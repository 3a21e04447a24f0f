pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod schema;
pub mod seed;

/// Installs `env_logger`, defaulting to `info` when `RUST_LOG` is unset.
pub fn init_logging() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();
}
