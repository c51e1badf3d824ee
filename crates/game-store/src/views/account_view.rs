//! Login, registration and profile

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Row, Table},
    Frame,
};

use crate::state::AppState;
use crate::view_models::{format_price, orders_for_user};

use super::{centered, form_view, panel, render_notice, theme};

pub fn render_login(state: &AppState, area: Rect, f: &mut Frame) {
    let footer = vec![
        Line::from(Span::styled(
            format!("  Admin: use {} with any password", state.config.admin_email),
            theme::muted(),
        )),
        Line::from(vec![
            Span::styled("  Ctrl+R", theme::key_hint()),
            Span::styled(" create an account", theme::key_description()),
        ]),
    ];
    form_view::render_form(&state.login_form, "Welcome Back", footer, centered(area, 64, 11), f);
}

pub fn render_register(state: &AppState, area: Rect, f: &mut Frame) {
    let footer = vec![Line::from(vec![
        Span::styled("  Ctrl+L", theme::key_hint()),
        Span::styled(" already have an account?", theme::key_description()),
    ])];
    form_view::render_form(
        &state.register_form,
        "Create Account",
        footer,
        centered(area, 64, 12),
        f,
    );
}

pub fn render_login_required(area: Rect, f: &mut Frame) {
    render_notice(
        "Please Log In",
        vec![
            Line::from(""),
            Line::from("You need to be logged in to view this page."),
            Line::from(""),
            Line::from(vec![
                Span::styled("Enter", theme::key_hint()),
                Span::styled(" go to login", theme::key_description()),
            ]),
        ],
        area,
        f,
    );
}

pub fn render_profile(state: &AppState, area: Rect, f: &mut Frame) {
    let Some(user) = &state.store.user else {
        return render_login_required(area, f);
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(0)])
        .split(area);

    let orders = orders_for_user(&state.store.orders, user.id);
    let account_type = if user.is_admin { "Administrator" } else { "Gamer" };
    let info = vec![
        Line::from(vec![
            Span::styled(" Name:    ", theme::muted()),
            Span::styled(user.name.clone(), theme::text()),
        ]),
        Line::from(vec![
            Span::styled(" Email:   ", theme::muted()),
            Span::styled(user.email.clone(), theme::text()),
        ]),
        Line::from(vec![
            Span::styled(" Account: ", theme::muted()),
            Span::styled(account_type, theme::key_hint()),
        ]),
        Line::from(vec![
            Span::styled(" Orders:  ", theme::muted()),
            Span::styled(orders.len().to_string(), theme::text()),
        ]),
        Line::from(vec![
            Span::styled(" O", theme::key_hint()),
            Span::styled(" log out", theme::key_description()),
        ]),
    ];
    f.render_widget(Paragraph::new(info).block(panel("My Profile")), chunks[0]);

    if orders.is_empty() {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "No orders yet. Start shopping to see your order history here!",
                theme::muted(),
            )))
            .block(panel("Order History")),
            chunks[1],
        );
        return;
    }

    let symbol = &state.config.currency_symbol;
    let rows: Vec<Row> = orders
        .iter()
        .rev()
        .map(|order| {
            Row::new(vec![
                format!("#{}", order.id),
                order.placed_at.format("%Y-%m-%d %H:%M").to_string(),
                format!("{} item(s)", order.unit_count()),
                format_price(symbol, order.total),
                order.status.to_string(),
            ])
        })
        .collect();
    let table = Table::new(
        rows,
        [
            Constraint::Length(16),
            Constraint::Length(18),
            Constraint::Length(12),
            Constraint::Length(11),
            Constraint::Min(10),
        ],
    )
    .header(
        Row::new(["Order", "Placed", "Items", "Total", "Status"]).style(theme::section_header()),
    )
    .block(panel("Order History"));
    f.render_widget(table, chunks[1]);
}
