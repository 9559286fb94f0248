//! # Stockpile Architecture
//!
//! Stockpile is a **UI-agnostic inventory library**. The interactive menu the
//! operator sees is one client of it; the same core could serve a TUI or a
//! batch importer without change.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session Layer (main.rs + args.rs)                          │
//! │  - Login prompt, menu loop, operator input, rendering       │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic per menu operation                   │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract InventoryStore trait                            │
//! │  - FileStore (CSV, production), InMemoryStore (testing)     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//!
//! ## Persistence Model
//!
//! The whole record set is the unit of persistence: every mutating command
//! loads the full set from the store, applies one change, and writes the
//! full set back. The write is a plain whole-file overwrite with no
//! temp-file/rename step, so a crash mid-write can truncate the file. That
//! fragility is a known limitation of the format, kept on purpose.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each menu operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Product`, `Role`)
//! - [`config`]: Store location and display thresholds
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
