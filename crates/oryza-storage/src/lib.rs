//! # oryza-storage
//!
//! Local store adapter for the Oryza catalogue.
//!
//! This crate provides:
//! - The [`KeyValueStore`] abstraction (string keys, string values)
//! - An in-memory store (tests, throwaway sessions)
//! - A single-file JSON store with atomic whole-file replacement
//! - [`LocalStore`], typed JSON access with fallback on corrupt data

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod filesystem;
pub mod local;
pub mod memory;
pub mod traits;

pub use error::{Error, Result};
pub use filesystem::FileStore;
pub use local::LocalStore;
pub use memory::MemoryStore;
pub use traits::KeyValueStore;
