use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{AnimalList, DetailView, Suggestions, TitleBar};
use crate::tui::{Focus, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

/// Draw one frame from the current state snapshot.
///
/// ```text
/// ┌ title bar (1) ───────────────────┐
/// │ search bar (3, hidden on detail) │
/// │ main: detail | suggestions | list│
/// └──────────────────────────────────┘
/// ```
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    // Search belongs to the list screen, not the detail screen
    let detail = app.current_detail();
    let search_height = if detail.is_some() { 0 } else { 3 };
    let layout = Layout::vertical([Length(1), Length(search_height), Min(0)]);
    let [title_area, search_area, main_area] = layout.areas(frame.area());

    TitleBar::new(app.displayed().len(), app.mode(), app.status_message.clone())
        .render(frame, title_area);

    if detail.is_none() {
        tui.search_bar.focused = tui.focus == Focus::Search;
        tui.search_bar.render(frame, search_area);
    }

    if let Some(record) = detail {
        DetailView::new(record).render(frame, main_area);
    } else if tui.focus == Focus::Search {
        let suggestions = app.suggestions();
        Suggestions::new(
            &mut tui.suggestions,
            &suggestions,
            app.mode(),
            app.displayed(),
        )
        .render(frame, main_area);
    } else {
        AnimalList::new(
            &mut tui.list,
            app.displayed(),
            app.selection().map(|a| a.id),
        )
        .render(frame, main_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::{buffer_text, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        buffer_text(terminal.backend())
    }

    #[test]
    fn test_draw_list() {
        let app = test_app();
        let mut tui = TuiState::new(&app, "Search Animals".to_string());
        let text = render(&app, &mut tui);
        assert!(text.contains("Menagerie | 3 animals | Browsing"));
        assert!(text.contains("Search Animals"));
        assert!(text.contains("Ladybug"));
        assert!(!text.contains("All Animals"));
    }

    #[test]
    fn test_draw_detail_on_top() {
        let app = App::new();
        let mut tui = TuiState::new(&app, "Search Animals".to_string());
        let text = render(&app, &mut tui);
        assert!(text.contains("ladybug.fill"));
        assert!(!text.contains("Animals (3)"));
        // No search field on the detail screen
        assert!(!text.contains("Search Animals"));
        assert!(!text.contains(" Search "));
    }

    #[test]
    fn test_draw_suggestions_when_searching() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app, "Search Animals".to_string());
        tui.focus = Focus::Search;
        let text = render(&app, &mut tui);
        assert!(text.contains("All Animals"));
        assert!(text.contains("Hare"));

        update(&mut app, Action::SetQuery("do".into()));
        let text = render(&app, &mut tui);
        assert!(text.contains("Results (1)"));
        assert!(text.contains("Dog"));
        assert!(!text.contains("Hare"));
    }

    #[test]
    fn test_draw_empty_list() {
        let app = App::with_initial_ids(&[], false);
        let mut tui = TuiState::new(&app, "Search Animals".to_string());
        let text = render(&app, &mut tui);
        assert!(text.contains("No Animals"));
    }
}
