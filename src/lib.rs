//! Account Registrar - account registration HTTP service
//!
//! Registers accounts over `POST /accounts`: validate the payload, reject
//! an email that is already taken, hash the password with Argon2id and
//! persist the record.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Account entity and credential hashing
//! - **services**: Registration use case
//! - **infra**: Database, migrations and account stores
//! - **api**: HTTP handlers, extractors and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Account, Password, PasswordHasher};
pub use errors::{AppError, AppResult};
