//! Search page: query and filter fields above the result table

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Row, Table, TableState},
    Frame,
};

use crate::state::{AppState, SearchField};

use super::products_view::game_row;
use super::{panel, theme};

fn field_line(label: &str, value: String, field: SearchField, focus: SearchField) -> Span<'static> {
    let focused = field == focus;
    let style = if focused {
        theme::focused_field()
    } else {
        theme::text()
    };
    let cursor = if focused && field.is_text() { "▏" } else { "" };
    Span::styled(format!(" {}: [{}{}] ", label, value, cursor), style)
}

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    let search = &state.search;
    let input = &search.input;
    let focus = search.focus;

    let fields = vec![
        Line::from(vec![field_line(
            "Search",
            input.query.clone(),
            SearchField::Query,
            focus,
        )]),
        Line::from(vec![
            field_line(
                "Genre",
                input.genre.clone().unwrap_or_else(|| "All".to_string()),
                SearchField::Genre,
                focus,
            ),
            field_line(
                "Platform",
                input.platform.clone().unwrap_or_else(|| "All".to_string()),
                SearchField::Platform,
                focus,
            ),
            field_line("Min $", input.min_price.clone(), SearchField::MinPrice, focus),
            field_line("Max $", input.max_price.clone(), SearchField::MaxPrice, focus),
            field_line(
                "Rating",
                input
                    .min_rating
                    .map(|r| format!("{}+", r))
                    .unwrap_or_else(|| "Any".to_string()),
                SearchField::MinRating,
                focus,
            ),
        ]),
    ];
    f.render_widget(Paragraph::new(fields).block(panel("Search Games")), chunks[0]);

    let results = &state.store.search_results;
    let title = if search.searching {
        "Searching...".to_string()
    } else {
        format!("Search Results ({})", results.len())
    };

    if results.is_empty() {
        let hint = if input.is_empty() {
            "Start searching: type a query or choose filters."
        } else if search.searching {
            "Searching..."
        } else {
            "No games found. Try adjusting your search criteria."
        };
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(hint, theme::muted()))).block(panel(&title)),
            chunks[1],
        );
        return;
    }

    let rows: Vec<Row> = results
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
    .block(panel(&title))
    .row_highlight_style(theme::selected_row())
    .highlight_symbol("▶ ");

    let mut table_state = TableState::default().with_selected(Some(search.selected));
    f.render_stateful_widget(table, chunks[1], &mut table_state);
}
