//! # oryza-cli
//!
//! Terminal front end for the Oryza catalogue.
//!
//! This crate provides:
//! - The `oryza` command tree (variants, orders, contact, config)
//! - TOML configuration with platform-default locations
//! - A stdin/stdout implementation of the controller's UI capabilities

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod error;
pub mod logging;
pub mod terminal;

pub use error::{Error, Result};
