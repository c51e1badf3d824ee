//! Cart lines, totals and checkout progress

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::state::{AppState, StatusKind};
use crate::view_models::{cart_totals, format_price};

use super::{panel, theme};

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let symbol = &state.config.currency_symbol;
    let cart = &state.store.cart;

    if cart.is_empty() {
        let mut lines = vec![Line::from(""), Line::from("Your cart is empty")];
        if let Some(id) = state.checkout.last_placed {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("Order #{} placed successfully! Check your email for details.", id),
                theme::status(StatusKind::Success),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Add some games to get started!",
                theme::muted(),
            )));
        }
        f.render_widget(Paragraph::new(lines).block(panel("Shopping Cart")), chunks[0]);
    } else {
        let rows: Vec<Row> = cart
            .iter()
            .map(|line| {
                Row::new(vec![
                    Cell::from(line.game.title.clone()),
                    Cell::from(Span::styled(line.game.platform.clone(), theme::muted())),
                    Cell::from(Span::styled(format_price(symbol, line.game.price), theme::price())),
                    Cell::from(format!("x{}", line.quantity)),
                    Cell::from(Span::styled(format_price(symbol, line.line_total()), theme::price())),
                ])
            })
            .collect();
        let table = Table::new(
            rows,
            [
                Constraint::Min(26),
                Constraint::Length(22),
                Constraint::Length(10),
                Constraint::Length(5),
                Constraint::Length(11),
            ],
        )
        .header(
            Row::new(["Game", "Platform", "Price", "Qty", "Total"]).style(theme::section_header()),
        )
        .block(panel("Shopping Cart"))
        .row_highlight_style(theme::selected_row())
        .highlight_symbol("▶ ");
        let mut table_state = TableState::default().with_selected(Some(state.checkout.selected));
        f.render_stateful_widget(table, chunks[0], &mut table_state);
    }

    let totals = cart_totals(cart, state.tax_rate());
    let mut summary = vec![
        Line::from(""),
        amount_line("Subtotal", format_price(symbol, totals.subtotal)),
        amount_line(
            &format!("Tax ({}%)", state.config.tax_percent),
            format_price(symbol, totals.tax),
        ),
        amount_line("Total", format_price(symbol, totals.total)),
        Line::from(""),
    ];

    if state.checkout.is_processing() {
        summary.push(Line::from(Span::styled(
            "Processing...",
            theme::status(StatusKind::Running),
        )));
    } else if !state.store.is_logged_in() {
        summary.push(Line::from(Span::styled(
            "Please log in to complete your order.",
            theme::status(StatusKind::Info),
        )));
    } else if !cart.is_empty() {
        summary.push(Line::from(vec![
            Span::styled("c", theme::key_hint()),
            Span::styled(" place order", theme::key_description()),
        ]));
    }
    f.render_widget(Paragraph::new(summary).block(panel("Order Summary")), chunks[1]);
}

fn amount_line(label: &str, amount: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {:<14}", label), theme::muted()),
        Span::styled(amount, theme::price()),
    ])
}
