//! # Actions
//!
//! Everything that can happen in Menagerie becomes an `Action`.
//! User types in the search field? That's `Action::SetQuery(text)`.
//! User taps a suggestion? That's `Action::AddFromSuggestion(record)`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` telling the caller what to do next. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  Effect (Changed | None | Quit)
//! ```
//!
//! `Effect::Changed` is the "state changed" notification: the TUI redraws
//! on it and skips the redraw on `Effect::None`.

use log::debug;

use crate::core::catalog::AnimalRecord;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetQuery(String),
    AddFromSuggestion(AnimalRecord),
    Remove(u32),
    Select(u32),
    Back,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Changed,
    Quit,
}

impl From<bool> for Effect {
    fn from(changed: bool) -> Self {
        if changed { Effect::Changed } else { Effect::None }
    }
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("Dispatching {:?}", action);
    match action {
        Action::SetQuery(text) => app.set_query(text).into(),
        Action::AddFromSuggestion(record) => app.add_from_suggestion(record).into(),
        Action::Remove(id) => app.remove(id).into(),
        Action::Select(id) => app.select(id).into(),
        Action::Back => app.back().into(),
        Action::Quit => Effect::Quit,
    }
}
