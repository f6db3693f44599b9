//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: Top status bar with the list count and session mode
//! - `DetailView`: One animal, full panel
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `SearchBar`: Text field bound to the search query
//! - `AnimalList`: The user's list, with select and remove gestures
//! - `Suggestions`: Catalog or search matches offered for adding
//!
//! The list-style components use a persistent state struct that lives in
//! `TuiState` plus a transient wrapper built each frame with borrowed data.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file, plus tint → color mapping)
//! ├── title_bar.rs
//! ├── search_bar.rs
//! ├── animal_list.rs
//! ├── suggestions.rs
//! └── detail.rs
//! ```

use ratatui::style::Color;

use crate::core::catalog::Tint;

pub mod animal_list;
pub mod detail;
pub mod search_bar;
pub mod suggestions;
mod title_bar;

pub use animal_list::{AnimalList, AnimalListState, ListEvent};
pub use detail::DetailView;
pub use search_bar::{SearchBar, SearchEvent};
pub use suggestions::{SuggestionEvent, Suggestions, SuggestionsState};
pub use title_bar::TitleBar;

/// Terminal color for an animal's tint.
pub fn tint_color(tint: Tint) -> Color {
    match tint {
        Tint::Red => Color::Red,
        Tint::Green => Color::Green,
        Tint::Purple => Color::Magenta,
        Tint::Orange => Color::Indexed(208),
        // Pure black disappears on dark terminals
        Tint::Black => Color::DarkGray,
        Tint::Blue => Color::Blue,
        Tint::Brown => Color::Indexed(130),
        Tint::Gray => Color::Gray,
    }
}
