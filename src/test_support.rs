//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::backend::TestBackend;

use crate::core::catalog::{AnimalRecord, Catalog};
use crate::core::state::{App, DEFAULT_INITIAL_IDS};

/// Creates a test App with the default list and no detail view pushed.
pub fn test_app() -> App {
    App::with_initial_ids(&DEFAULT_INITIAL_IDS, false)
}

/// Looks up a catalog record by id. Panics on unknown ids.
pub fn animal(id: u32) -> AnimalRecord {
    Catalog::builtin()
        .get(id)
        .unwrap_or_else(|| panic!("no animal with id {id}"))
}

pub fn ids(records: &[AnimalRecord]) -> Vec<u32> {
    records.iter().map(|a| a.id).collect()
}

/// Flattens a TestBackend buffer into one string for `contains` checks.
pub fn buffer_text(backend: &TestBackend) -> String {
    backend
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}
