//! # Core Application Logic
//!
//! This module contains Menagerie's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (animals)    │
//!                    │  • App (selection)      │
//!                    │  • Action + update()    │
//!                    │                         │
//!                    │  No UI. No terminal.    │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: The fixed set of `AnimalRecord`s
//! - [`state`]: The `App` struct, the list, query and navigation in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: Settings file, env and CLI resolution

pub mod action;
pub mod catalog;
pub mod config;
pub mod state;

pub use action::{Action, Effect, update};
pub use catalog::{AnimalRecord, Catalog, Tint};
pub use state::{App, SessionMode};
