//! Core library for the `skycast` terminal weather lookup.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Abstraction over the weather provider
//! - Shared domain models (snapshots, fetch errors)
//! - The debounce utility and the condition→backdrop table
//!
//! It is used by `skycast-tui`, but can also be reused by other binaries or services.

pub mod backdrop;
pub mod config;
pub mod debounce;
pub mod error;
pub mod model;
pub mod provider;

pub use backdrop::{Backdrop, DEFAULT_BACKDROP, backdrop_for};
pub use config::Config;
pub use debounce::Debouncer;
pub use error::FetchError;
pub use model::WeatherSnapshot;
pub use provider::WeatherProvider;
