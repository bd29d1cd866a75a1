rust_i18n::i18n!("locales", fallback = "en");

pub mod assets;
pub mod cli;
pub mod config;
pub mod language;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod template;
pub mod visit;

pub use config::Config;
pub use routes::{AppState, router};
pub use visit::Visits;
