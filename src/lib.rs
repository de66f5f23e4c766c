//! taskmaster - Task Tracking Library
//!
//! This library provides the core functionality for the taskmaster CLI
//! tool: a JSON-backed task store, a collection manager for mutations,
//! and statistics derived from the collection.
//!
//! # Core Concepts
//!
//! - **Tasks**: Titled units of work with a due date, priority, and
//!   completion flag
//! - **Store**: One JSON file holding the whole collection, replaced
//!   atomically on every save
//! - **Manager**: Owns the in-memory collection and routes create and
//!   edit intents through validation before anything persists
//! - **Statistics**: Pure functions over the collection for the
//!   dashboard and report views
//!
//! # Module Organization
//!
//! - `cli`: Command-line interface using clap
//! - `config`: Configuration loading from `taskmaster.toml`
//! - `error`: Error types and result aliases
//! - `filter`: Display-only filters for listings
//! - `lock`: File locking and atomic writes for concurrency safety
//! - `manager`: The canonical collection and its mutation operations
//! - `output`: Human and JSON output envelopes
//! - `stats`: Derived dashboard statistics
//! - `store`: JSON persistence for the collection
//! - `task`: Task entity, priorities, and intents

pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod lock;
pub mod manager;
pub mod output;
pub mod stats;
pub mod store;
pub mod task;

pub use error::{Error, Result};
