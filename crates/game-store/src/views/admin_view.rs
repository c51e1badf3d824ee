//! Admin dashboard: stats, catalog management and all orders

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState, Tabs},
    Frame,
};

use crate::state::{AdminTab, AppState};
use crate::view_models::{admin_stats, format_price};

use super::{panel, render_notice, theme};

pub fn render_denied(area: Rect, f: &mut Frame) {
    render_notice(
        "Access Denied",
        vec![
            Line::from(""),
            Line::from("You need admin privileges to access this page."),
        ],
        area,
        f,
    );
}

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let symbol = &state.config.currency_symbol;
    let stats = admin_stats(&state.store);
    let stats_line = Line::from(vec![
        Span::styled(" Total Games: ", theme::muted()),
        Span::styled(stats.total_games.to_string(), theme::key_hint()),
        Span::styled("   Total Orders: ", theme::muted()),
        Span::styled(stats.total_orders.to_string(), theme::key_hint()),
        Span::styled("   Revenue: ", theme::muted()),
        Span::styled(format_price(symbol, stats.total_revenue), theme::price()),
    ]);
    f.render_widget(Paragraph::new(stats_line).block(panel("Admin Dashboard")), chunks[0]);

    let tabs = Tabs::new(vec![AdminTab::Games.to_string(), AdminTab::Orders.to_string()])
        .block(panel("View"))
        .select(match state.admin.tab {
            AdminTab::Games => 0,
            AdminTab::Orders => 1,
        })
        .highlight_style(theme::active_tab());
    f.render_widget(tabs, chunks[1]);

    let mut table_state = TableState::default().with_selected(Some(state.admin.selected));
    match state.admin.tab {
        AdminTab::Games => {
            let rows: Vec<Row> = state
                .store
                .catalog
                .iter()
                .map(|game| {
                    Row::new(vec![
                        Cell::from(game.id.to_string()),
                        Cell::from(game.title.clone()),
                        Cell::from(game.genre.clone()),
                        Cell::from(Span::styled(format_price(symbol, game.price), theme::price())),
                        Cell::from(Span::styled(game.stock_label(), theme::stock(game.in_stock))),
                    ])
                })
                .collect();
            let table = Table::new(
                rows,
                [
                    Constraint::Length(4),
                    Constraint::Min(28),
                    Constraint::Length(12),
                    Constraint::Length(10),
                    Constraint::Length(13),
                ],
            )
            .header(Row::new(["ID", "Title", "Genre", "Price", "Stock"]).style(theme::section_header()))
            .block(panel(&games_title(state)))
            .row_highlight_style(theme::selected_row())
            .highlight_symbol("▶ ");
            f.render_stateful_widget(table, chunks[2], &mut table_state);
        }
        AdminTab::Orders => {
            if state.store.orders.is_empty() {
                f.render_widget(
                    Paragraph::new(Line::from(Span::styled("No orders yet", theme::muted())))
                        .block(panel("Orders")),
                    chunks[2],
                );
                return;
            }
            let rows: Vec<Row> = state
                .store
                .orders
                .iter()
                .map(|order| {
                    Row::new(vec![
                        format!("#{}", order.id),
                        order.user_id.to_string(),
                        order.placed_at.format("%Y-%m-%d %H:%M").to_string(),
                        order.unit_count().to_string(),
                        format_price(symbol, order.total),
                        order.status.to_string(),
                    ])
                })
                .collect();
            let table = Table::new(
                rows,
                [
                    Constraint::Length(16),
                    Constraint::Length(15),
                    Constraint::Length(18),
                    Constraint::Length(6),
                    Constraint::Length(11),
                    Constraint::Min(10),
                ],
            )
            .header(
                Row::new(["Order", "User", "Placed", "Items", "Total", "Status"])
                    .style(theme::section_header()),
            )
            .block(panel("Orders"))
            .row_highlight_style(theme::selected_row())
            .highlight_symbol("▶ ");
            f.render_stateful_widget(table, chunks[2], &mut table_state);
        }
    }
}

fn games_title(state: &AppState) -> String {
    let pending = state
        .admin
        .pending_delete
        .and_then(|id| state.store.game(id));
    match pending {
        Some(game) => format!(
            "Games - Are you sure you want to delete \"{}\"? Press x again",
            game.title
        ),
        None => "Games".to_string(),
    }
}
