//! Core types and configuration for playdock.
//!
//! This crate defines the supported base operating systems ([`OsFamily`],
//! [`OsProfile`]), the application being containerized ([`AppSpec`]),
//! the `playdock.toml` schema ([`PlaydockConfig`]), and shared error types.

pub mod app;
pub mod config;
pub mod error;
pub mod os;

pub use app::{AppSpec, derive_app_name};
pub use config::{GenerateOptions, PlaydockConfig};
pub use error::{Error, Result};
pub use os::{OsFamily, OsProfile, PackageCommands};
