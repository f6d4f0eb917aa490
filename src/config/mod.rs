#[cfg(feature = "cli")]
pub mod cli;
pub mod web;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use web::WebConfig;
