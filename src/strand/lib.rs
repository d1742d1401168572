//! # Strand Architecture
//!
//! Strand is a **UI-agnostic string analysis library**: it analyzes input
//! strings into a fixed set of deterministic properties, stores each result
//! in a content-addressed record store, and answers queries over those
//! properties — through structured filters or a small natural-language
//! translator. The CLI binary is just one client of the library.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, renders tables/JSON, exit codes        │
//! │  - The ONLY place that knows about stdout/stderr            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Request-boundary validation (missing/mistyped payloads)  │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic: analyze, filter, interpret          │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract RecordStore trait                               │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Content Addressing
//!
//! A record's id is the SHA-256 hash of its value, so identity is fully
//! determined by content: the same value always maps to the same record,
//! and storing it twice is a conflict rather than a second copy. See
//! [`analyzer`] for the property computation and [`store`] for the
//! atomicity contract on inserts.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular
//! Rust types, and never writes to stdout or assumes a terminal. The same
//! core can sit behind a CLI, an HTTP handler, or a test harness.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`analyzer`]: Pure string → properties computation
//! - [`filter`]: Structured filter parsing and matching
//! - [`interpret`]: Natural-language → filter translation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`StringRecord`, `Properties`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod analyzer;
pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod interpret;
pub mod model;
pub mod store;
