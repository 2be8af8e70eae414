//! Domain layer - Core business entities and logic
//!
//! This module contains the account model and credential handling,
//! independent of HTTP and persistence concerns.

pub mod account;
pub mod password;

pub use account::{Account, NewAccount};
pub use password::{Password, PasswordHasher};
