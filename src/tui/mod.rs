//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Routing
//!
//! ```text
//! crossterm event → TuiEvent → component handle_event → Action → update() → Effect
//! ```
//!
//! `Effect::Changed` is the cue to bring presentation state back in line
//! with the core (search field text, list and suggestion cursors).
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms waiting for input and
//! only redraws after an event or a terminal resize. All pending events are
//! drained before the next draw.

mod component;
pub mod components;
pub mod event;
mod ui;

use log::{debug, info};
use std::io::{self, stdout};
use std::time::Duration;

use crossterm::cursor::SetCursorStyle;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    AnimalListState, ListEvent, SearchBar, SearchEvent, SuggestionEvent, SuggestionsState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Where keystrokes go when no detail view is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrow keys move through the list; `/` or Tab jumps to search.
    List,
    /// Typing edits the query; arrows move through suggestions.
    Search,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub focus: Focus,
    pub search_bar: SearchBar,
    pub list: AnimalListState,
    pub suggestions: SuggestionsState,
}

impl TuiState {
    pub fn new(app: &App, search_prompt: String) -> Self {
        // Start the list cursor on the focused record
        let initial = app
            .selection()
            .and_then(|s| app.displayed().iter().position(|a| a.id == s.id))
            .unwrap_or(0);
        Self {
            focus: Focus::List,
            search_bar: SearchBar::new(search_prompt),
            list: AnimalListState::new(app.displayed().len(), initial),
            suggestions: SuggestionsState::new(),
        }
    }

    /// Bring presentation state in line with the core after a change.
    fn sync(&mut self, app: &App) {
        self.search_bar.sync(app.query());
        self.list.clamp(app.displayed().len());
        self.suggestions.clamp(app.suggestions().len());
    }
}

/// Route one event through the focused component and into the core.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    let effect = match event {
        TuiEvent::ForceQuit => update(app, Action::Quit),
        TuiEvent::Resize => Effect::None,
        _ if app.current_detail().is_some() => handle_detail_event(app, event),
        _ => match tui.focus {
            Focus::Search => handle_search_event(app, tui, event),
            Focus::List => handle_list_event(app, tui, event),
        },
    };
    if effect == Effect::Changed {
        tui.sync(app);
    }
    effect
}

fn handle_detail_event(app: &mut App, event: TuiEvent) -> Effect {
    match event {
        TuiEvent::Escape | TuiEvent::Backspace | TuiEvent::CursorLeft => {
            update(app, Action::Back)
        }
        TuiEvent::InputChar('q') => update(app, Action::Quit),
        _ => Effect::None,
    }
}

fn handle_search_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        TuiEvent::CursorUp | TuiEvent::CursorDown | TuiEvent::Submit => {
            let suggestions = app.suggestions();
            match tui.suggestions.handle_event(&event, &suggestions) {
                Some(SuggestionEvent::Add(record)) => {
                    let effect = update(app, Action::AddFromSuggestion(record));
                    if effect == Effect::Changed {
                        tui.suggestions.reset();
                    }
                    effect
                }
                None => Effect::None,
            }
        }
        TuiEvent::FocusNext => {
            debug!("Focus: list");
            tui.focus = Focus::List;
            Effect::None
        }
        _ => match tui.search_bar.handle_event(&event) {
            Some(SearchEvent::QueryChanged(text)) => {
                tui.suggestions.reset();
                update(app, Action::SetQuery(text))
            }
            Some(SearchEvent::Cancel) => {
                debug!("Search cancelled");
                tui.focus = Focus::List;
                tui.suggestions.reset();
                update(app, Action::SetQuery(String::new()))
            }
            None => Effect::None,
        },
    }
}

fn handle_list_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        TuiEvent::InputChar('/') | TuiEvent::FocusNext => {
            debug!("Focus: search");
            tui.focus = Focus::Search;
            tui.suggestions.clamp(app.suggestions().len());
            Effect::None
        }
        TuiEvent::InputChar('q') => update(app, Action::Quit),
        _ => match tui.list.handle_event(&event, app.displayed()) {
            Some(ListEvent::Select(id)) => update(app, Action::Select(id)),
            Some(ListEvent::Remove(id)) => update(app, Action::Remove(id)),
            None => Effect::None,
        },
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            SetCursorStyle::SteadyBar // Cursor only shows in the search field
        )?;
        info!("Terminal modes enabled (bracketed paste, steady bar cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let mut app = App::with_initial_ids(&config.initial_ids, config.open_detail_on_launch);
    let mut tui = TuiState::new(&app, config.search_prompt);

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new()
        .and_then(|_guard| event_loop(&mut terminal, &mut app, &mut tui));
    ratatui::restore();

    info!("Session ended with {} animals listed", app.displayed().len());
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App, tui: &mut TuiState) -> io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let Some(first_event) = poll_event_timeout(Duration::from_millis(500))? else {
            continue;
        };
        needs_redraw = true;

        // Process first event + drain ALL pending events before next draw
        let mut next = Some(first_event);
        while let Some(event) = next {
            if handle_event(app, tui, event) == Effect::Quit {
                info!("Quit requested");
                return Ok(());
            }
            next = poll_event_immediate()?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::SessionMode;
    use crate::test_support::{ids, test_app};

    fn setup() -> (App, TuiState) {
        let app = test_app();
        let tui = TuiState::new(&app, "Search Animals".to_string());
        (app, tui)
    }

    fn send(app: &mut App, tui: &mut TuiState, events: &[TuiEvent]) -> Vec<Effect> {
        events
            .iter()
            .cloned()
            .map(|e| handle_event(app, tui, e))
            .collect()
    }

    fn type_text(app: &mut App, tui: &mut TuiState, text: &str) {
        for c in text.chars() {
            handle_event(app, tui, TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_force_quit_from_anywhere() {
        let (mut app, mut tui) = setup();
        tui.focus = Focus::Search;
        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::ForceQuit), Effect::Quit);
    }

    #[test]
    fn test_q_quits_from_list_but_types_in_search() {
        let (mut app, mut tui) = setup();
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('/'));
        assert_eq!(
            handle_event(&mut app, &mut tui, TuiEvent::InputChar('q')),
            Effect::Changed
        );
        assert_eq!(app.query(), "q");

        tui.focus = Focus::List;
        assert_eq!(
            handle_event(&mut app, &mut tui, TuiEvent::InputChar('q')),
            Effect::Quit
        );
    }

    #[test]
    fn test_search_and_add_flow() {
        let (mut app, mut tui) = setup();
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('/'));
        type_text(&mut app, &mut tui, "ca");
        assert_eq!(app.mode(), SessionMode::Searching);
        assert_eq!(ids(&app.suggestions()), vec![4]);

        let effect = handle_event(&mut app, &mut tui, TuiEvent::Submit);
        assert_eq!(effect, Effect::Changed);
        assert_eq!(ids(app.displayed()), vec![1, 2, 3, 4]);
        assert_eq!(app.query(), "");
        assert_eq!(tui.search_bar.text(), "");
        assert_eq!(tui.focus, Focus::Search);
    }

    #[test]
    fn test_add_listed_suggestion_keeps_query() {
        let (mut app, mut tui) = setup();
        handle_event(&mut app, &mut tui, TuiEvent::FocusNext);
        type_text(&mut app, &mut tui, "bird");
        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::Submit), Effect::None);
        assert_eq!(app.query(), "bird");
        assert_eq!(tui.search_bar.text(), "bird");
    }

    #[test]
    fn test_browse_all_add() {
        let (mut app, mut tui) = setup();
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('/'));
        // Empty query offers the full catalog; row 8 is Hare
        for _ in 0..8 {
            handle_event(&mut app, &mut tui, TuiEvent::CursorDown);
        }
        handle_event(&mut app, &mut tui, TuiEvent::Submit);
        assert_eq!(ids(app.displayed()), vec![1, 2, 3, 9]);
    }

    #[test]
    fn test_escape_clears_query_and_returns_to_list() {
        let (mut app, mut tui) = setup();
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('/'));
        type_text(&mut app, &mut tui, "fi");
        let effect = handle_event(&mut app, &mut tui, TuiEvent::Escape);
        assert_eq!(effect, Effect::Changed);
        assert_eq!(app.query(), "");
        assert_eq!(tui.search_bar.text(), "");
        assert_eq!(tui.focus, Focus::List);
    }

    #[test]
    fn test_remove_from_list() {
        let (mut app, mut tui) = setup();
        let effects = send(
            &mut app,
            &mut tui,
            &[TuiEvent::CursorDown, TuiEvent::InputChar('d')],
        );
        assert_eq!(effects, vec![Effect::None, Effect::Changed]);
        assert_eq!(ids(app.displayed()), vec![1, 3]);
        assert_eq!(app.selection().map(|a| a.id), Some(1));
    }

    #[test]
    fn test_remove_last_row_clamps_cursor() {
        let (mut app, mut tui) = setup();
        send(
            &mut app,
            &mut tui,
            &[TuiEvent::End, TuiEvent::Delete],
        );
        assert_eq!(ids(app.displayed()), vec![1, 2]);
        assert_eq!(tui.list.cursor(), Some(1));
    }

    #[test]
    fn test_select_opens_detail_and_escape_returns() {
        let (mut app, mut tui) = setup();
        send(&mut app, &mut tui, &[TuiEvent::CursorDown, TuiEvent::Submit]);
        assert_eq!(app.current_detail().map(|a| a.id), Some(2));

        // List gestures are inert while the detail view is up
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('d'));
        assert_eq!(ids(app.displayed()), vec![1, 2, 3]);

        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::Escape), Effect::Changed);
        assert!(app.current_detail().is_none());
        assert_eq!(app.selection().map(|a| a.id), Some(2));
    }

    #[test]
    fn test_launch_detail_pops_to_list() {
        let mut app = App::new();
        let mut tui = TuiState::new(&app, String::new());
        assert_eq!(app.current_detail().map(|a| a.name), Some("Ladybug"));
        handle_event(&mut app, &mut tui, TuiEvent::Backspace);
        assert!(app.current_detail().is_none());
    }

    #[test]
    fn test_list_cursor_starts_on_selection() {
        let app = App::with_initial_ids(&[1, 2, 3], false);
        let tui = TuiState::new(&app, String::new());
        assert_eq!(tui.list.cursor(), Some(0));

        let empty = App::with_initial_ids(&[], false);
        let tui = TuiState::new(&empty, String::new());
        assert_eq!(tui.list.cursor(), None);
    }
}
