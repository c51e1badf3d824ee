//! Colors and styles shared by all views

use ratatui::style::{Color, Modifier, Style};

use crate::state::StatusKind;

pub const ACCENT: Color = Color::Cyan;
pub const PRICE: Color = Color::Green;
pub const RATING: Color = Color::Yellow;
pub const MUTED: Color = Color::DarkGray;
pub const ERROR: Color = Color::Red;

pub fn panel_border() -> Style {
    Style::default().fg(MUTED)
}

pub fn panel_title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn section_header() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn text() -> Style {
    Style::default()
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn price() -> Style {
    Style::default().fg(PRICE).add_modifier(Modifier::BOLD)
}

pub fn rating() -> Style {
    Style::default().fg(RATING)
}

pub fn selected_row() -> Style {
    Style::default().bg(Color::Rgb(40, 44, 52)).add_modifier(Modifier::BOLD)
}

pub fn active_tab() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn focused_field() -> Style {
    Style::default().fg(ACCENT)
}

pub fn key_hint() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn key_description() -> Style {
    muted()
}

pub fn stock(in_stock: bool) -> Style {
    if in_stock {
        Style::default().fg(PRICE)
    } else {
        Style::default().fg(ERROR)
    }
}

pub fn status(kind: StatusKind) -> Style {
    let fg = match kind {
        StatusKind::Running => Color::Yellow,
        StatusKind::Success => Color::Green,
        StatusKind::Error => ERROR,
        StatusKind::Info => Color::Blue,
    };
    Style::default().fg(fg).add_modifier(Modifier::BOLD)
}
