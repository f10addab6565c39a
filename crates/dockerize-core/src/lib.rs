//! Core types and configuration for dockerize.
//!
//! This crate defines the `dockerize.toml` schema ([`DockerizeConfig`]),
//! build metadata derivation from the working directory ([`BuildMetadata`]),
//! and shared error types.

pub mod config;
pub mod error;
pub mod metadata;

pub use config::{BuildConfig, DockerizeConfig, ProjectConfig};
pub use error::{Error, Result};
pub use metadata::BuildMetadata;
