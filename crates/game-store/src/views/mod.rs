//! Views
//!
//! Pure rendering of `AppState`: header with the route tabs, one body per
//! route and the status bar. Nothing here changes state.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::routes::{Access, Route};
use crate::state::AppState;
use crate::view_models::item_count;

pub mod account_view;
pub mod admin_view;
pub mod form_view;
pub mod order_view;
pub mod pages_view;
pub mod products_view;
pub mod search_view;
pub mod status_bar;
pub mod theme;

use status_bar::StatusBarWidget;

/// Render the whole screen
pub fn render(state: &AppState, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    if state.route == Route::Entrance {
        pages_view::render_entrance(state, chunks[0].union(chunks[1]), f);
    } else {
        render_header(state, chunks[0], f);
        render_body(state, chunks[1], f);
    }
    f.render_widget(StatusBarWidget(state), chunks[2]);
}

fn tab_title(route: Route, state: &AppState) -> Line<'static> {
    match route {
        Route::Order => {
            let count = item_count(&state.store.cart);
            if count > 0 {
                Line::from(format!("{} ({})", route, count))
            } else {
                Line::from(route.to_string())
            }
        }
        Route::Login => match &state.store.user {
            Some(user) => Line::from(format!("Hi, {}", user.name)),
            None => Line::from("Login"),
        },
        _ => Line::from(route.to_string()),
    }
}

fn render_header(state: &AppState, area: Rect, f: &mut Frame) {
    let tabs = Route::tabs();
    let titles: Vec<Line> = tabs.iter().map(|r| tab_title(*r, state)).collect();
    let selected = tabs.iter().position(|r| *r == state.route).unwrap_or(0);

    let widget = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::panel_border())
                .title(Span::styled(" GameStore ", theme::panel_title())),
        )
        .select(selected)
        .highlight_style(theme::active_tab())
        .divider("|");

    f.render_widget(widget, area);
}

fn render_body(state: &AppState, area: Rect, f: &mut Frame) {
    match state.route.access(state.store.user.as_ref()) {
        Access::LoginRequired => return account_view::render_login_required(area, f),
        Access::Denied => return admin_view::render_denied(area, f),
        Access::Granted => {}
    }

    match state.route {
        Route::Entrance => pages_view::render_entrance(state, area, f),
        Route::Home => pages_view::render_home(state, area, f),
        Route::Products => products_view::render(state, area, f),
        Route::Search => search_view::render(state, area, f),
        Route::Order => order_view::render(state, area, f),
        Route::About => pages_view::render_about(area, f),
        Route::Contact => pages_view::render_contact(state, area, f),
        Route::Links => pages_view::render_links(area, f),
        Route::Login => account_view::render_login(state, area, f),
        Route::Register => account_view::render_register(state, area, f),
        Route::Profile => account_view::render_profile(state, area, f),
        Route::Admin => admin_view::render(state, area, f),
    }
}

/// A bordered panel with the usual title style
pub(crate) fn panel(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border())
        .title(Span::styled(format!(" {} ", title), theme::panel_title()))
}

/// Centered message box, used for access notices
pub(crate) fn render_notice(title: &str, lines: Vec<Line<'static>>, area: Rect, f: &mut Frame) {
    let paragraph = Paragraph::new(lines)
        .block(panel(title))
        .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(paragraph, centered(area, 60, 9));
}

/// Rectangle of at most `width` x `height` in the middle of `area`
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
