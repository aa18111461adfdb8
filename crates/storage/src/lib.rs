//! Storage abstraction and implementations for the BibleQuest profile.
//!
//! This crate provides a trait-based persistence interface with a JSON-file
//! reference implementation and an in-memory store for tests.

#![warn(missing_docs)]

pub mod trait_;
pub mod json_store;
pub mod memory;
pub mod migrate;

pub use trait_::{ProfileStore, StorageError, Result};
pub use json_store::JsonProfileStore;
pub use memory::MemoryProfileStore;
pub use migrate::migrate;
