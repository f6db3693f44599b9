//! # Application State
//!
//! Core selection state for Menagerie. Domain logic only, no TUI types.
//! Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: &'static Catalog           // every animal, read-only
//! ├── displayed: Vec<AnimalRecord>        // the user's list, no duplicate ids
//! ├── query: String                       // search field text
//! ├── selection: Option<AnimalRecord>     // focused record for detail
//! ├── path: Vec<AnimalRecord>             // detail views pushed by select
//! └── status_message: String              // last add/remove, until next edit or navigation
//! ```
//!
//! Every operation is total. Unknown ids and duplicate adds are no-ops,
//! and each mutator reports whether anything changed so the caller knows
//! when to re-render.

use log::{debug, info};

use crate::core::catalog::{AnimalRecord, Catalog};

/// Ids shown in the list when a session starts.
pub const DEFAULT_INITIAL_IDS: [u32; 3] = [1, 2, 3];

/// Whether the search field currently holds text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    Browsing,
    Searching,
}

pub struct App {
    pub catalog: &'static Catalog,
    displayed: Vec<AnimalRecord>,
    query: String,
    selection: Option<AnimalRecord>,
    path: Vec<AnimalRecord>,
    pub status_message: String,
}

impl App {
    /// Fresh session with the default starting list, opened on the first
    /// record's detail view.
    pub fn new() -> Self {
        Self::with_initial_ids(&DEFAULT_INITIAL_IDS, true)
    }

    /// Fresh session whose list holds the catalog records in `ids`, in
    /// catalog order. Ids the catalog does not know are ignored.
    pub fn with_initial_ids(ids: &[u32], open_detail: bool) -> Self {
        let catalog = Catalog::builtin();
        let displayed: Vec<AnimalRecord> = catalog
            .all()
            .iter()
            .filter(|a| ids.contains(&a.id))
            .copied()
            .collect();
        let selection = displayed.first().copied();
        let path = match selection {
            Some(first) if open_detail => vec![first],
            _ => Vec::new(),
        };

        info!(
            "Session initialized with {} animals, selection: {:?}",
            displayed.len(),
            selection.map(|a| a.name)
        );

        Self {
            catalog,
            displayed,
            query: String::new(),
            selection,
            path,
            status_message: String::new(),
        }
    }

    pub fn displayed(&self) -> &[AnimalRecord] {
        &self.displayed
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selection(&self) -> Option<AnimalRecord> {
        self.selection
    }

    /// The detail view on top of the navigation stack, if any.
    pub fn current_detail(&self) -> Option<AnimalRecord> {
        self.path.last().copied()
    }

    pub fn path_depth(&self) -> usize {
        self.path.len()
    }

    pub fn mode(&self) -> SessionMode {
        if self.query.is_empty() {
            SessionMode::Browsing
        } else {
            SessionMode::Searching
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.displayed.iter().any(|a| a.id == id)
    }

    /// Replace the search text. Any string is accepted.
    ///
    /// Also dismisses the last "Added"/"Removed" status.
    pub fn set_query(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        let dismissed = self.clear_status();
        if text == self.query {
            return dismissed;
        }
        debug!("Query changed: {:?} -> {:?}", self.query, text);
        self.query = text;
        true
    }

    /// Returns whether there was a status to clear.
    fn clear_status(&mut self) -> bool {
        let had_status = !self.status_message.is_empty();
        self.status_message.clear();
        had_status
    }

    /// Catalog records matching the current query. Empty when the query is.
    pub fn search_results(&self) -> Vec<AnimalRecord> {
        self.catalog.search(&self.query)
    }

    /// What the suggestion panel offers: the whole catalog while browsing,
    /// the filtered matches while searching.
    pub fn suggestions(&self) -> Vec<AnimalRecord> {
        match self.mode() {
            SessionMode::Browsing => self.catalog.all().to_vec(),
            SessionMode::Searching => self.search_results(),
        }
    }

    /// Append `record` unless its id is already listed, then clear the query.
    ///
    /// A duplicate leaves both the list and the query untouched.
    pub fn add_from_suggestion(&mut self, record: AnimalRecord) -> bool {
        if self.contains(record.id) {
            debug!("{} already listed, ignoring suggestion", record);
            return false;
        }
        info!("Adding {}", record);
        self.displayed.push(record);
        self.query.clear();
        self.status_message = format!("Added {}", record.name);
        true
    }

    /// Drop the listed record with `id`. Selection and query are untouched.
    pub fn remove(&mut self, id: u32) -> bool {
        match self.displayed.iter().position(|a| a.id == id) {
            Some(index) => {
                let removed = self.displayed.remove(index);
                info!("Removed {}", removed);
                self.status_message = format!("Removed {}", removed.name);
                true
            }
            None => {
                debug!("Remove ignored, id {} not listed", id);
                false
            }
        }
    }

    /// Focus a listed record and push its detail view.
    pub fn select(&mut self, id: u32) -> bool {
        let Some(record) = self.displayed.iter().find(|a| a.id == id).copied() else {
            debug!("Select ignored, id {} not listed", id);
            return false;
        };
        debug!("Selected {}", record);
        self.clear_status();
        self.selection = Some(record);
        self.path.push(record);
        true
    }

    /// Pop one detail view off the navigation stack.
    pub fn back(&mut self) -> bool {
        let popped = self.path.pop().is_some();
        if popped {
            self.clear_status();
        }
        popped
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
