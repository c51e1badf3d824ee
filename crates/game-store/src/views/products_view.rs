//! Games listing with sort and filter controls

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::domain_models::Game;
use crate::state::AppState;
use crate::view_models::{format_price, product_listing};

use super::{panel, theme};

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(4)])
        .split(area);

    let products = &state.products;
    let catalog = &state.store.catalog;
    let listing = product_listing(catalog, &products.filter(), products.sort);

    let controls = Line::from(vec![
        Span::styled(" Sort: ", theme::muted()),
        Span::styled(products.sort.to_string(), theme::key_hint()),
        Span::styled("   Genre: ", theme::muted()),
        Span::styled(products.genre.as_deref().unwrap_or("All Genres").to_string(), theme::key_hint()),
        Span::styled("   Platform: ", theme::muted()),
        Span::styled(
            products.platform.as_deref().unwrap_or("All Platforms").to_string(),
            theme::key_hint(),
        ),
        Span::styled(
            format!("   Showing {} of {} games", listing.len(), catalog.len()),
            theme::muted(),
        ),
    ]);
    f.render_widget(Paragraph::new(controls).block(panel("Game Library")), chunks[0]);

    let rows: Vec<Row> = listing
        .iter()
        .map(|game| game_row(game, &state.config.currency_symbol))
        .collect();
    let table = Table::new(
        rows,
        [
            Constraint::Min(28),
            Constraint::Length(12),
            Constraint::Length(24),
            Constraint::Length(7),
            Constraint::Length(10),
            Constraint::Length(13),
        ],
    )
    .header(
        Row::new(["Title", "Genre", "Platform", "Rating", "Price", "Stock"])
            .style(theme::section_header()),
    )
    .block(panel("Games"))
    .row_highlight_style(theme::selected_row())
    .highlight_symbol("▶ ");

    let mut table_state = TableState::default().with_selected(Some(products.selected));
    f.render_stateful_widget(table, chunks[1], &mut table_state);

    let detail = match listing.get(products.selected) {
        Some(game) => vec![
            Line::from(vec![
                Span::styled(game.developer.clone(), theme::key_hint()),
                Span::styled(format!("  released {}", game.release_date), theme::muted()),
            ]),
            Line::from(Span::styled(game.description.clone(), theme::text())),
        ],
        None => vec![Line::from(Span::styled(
            "No games found matching your criteria.",
            theme::muted(),
        ))],
    };
    f.render_widget(Paragraph::new(detail).block(panel("Details")), chunks[2]);
}

pub(crate) fn game_row(game: &Game, symbol: &str) -> Row<'static> {
    Row::new(vec![
        Cell::from(game.title.clone()),
        Cell::from(game.genre.clone()),
        Cell::from(Span::styled(game.platform.clone(), theme::muted())),
        Cell::from(Span::styled(format!("★ {:.1}", game.rating), theme::rating())),
        Cell::from(Span::styled(format_price(symbol, game.price), theme::price())),
        Cell::from(Span::styled(game.stock_label(), theme::stock(game.in_stock))),
    ])
}
