//! Core of the WorkForce hiring-assessment app: the "create assessment" form model,
//! the company directory it pulls company names from, and the thin API clients behind
//! the login, company-context, settings and gallery screens.

pub mod api;
pub mod assessment;
pub mod auth;
pub mod config;
pub mod directory;
pub mod error;
pub mod gallery;
pub mod logging;
pub mod preferences;
pub mod prompts;

#[cfg(feature = "desktop")]
pub mod commands;

pub use assessment::{CategoryId, Configurator, ConfiguratorHandle, WeightStrategy};
pub use config::AppConfig;
pub use error::{ApiError, ConfiguratorError, NetworkError};

#[cfg(feature = "desktop")]
pub use commands::run;
