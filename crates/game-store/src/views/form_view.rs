//! Text form rendering shared by login, registration and contact

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::state::FormState;

use super::{panel, theme};

/// Render the fields of a form, the focused one gets a cursor
pub fn render_form(form: &FormState, title: &str, footer: Vec<Line<'static>>, area: Rect, f: &mut Frame) {
    let mut lines = vec![Line::from("")];

    for (idx, field) in form.fields.iter().enumerate() {
        let focused = idx == form.focused;
        let value = if field.secret {
            "•".repeat(field.value.chars().count())
        } else {
            field.value.clone()
        };
        let cursor = if focused { "▏" } else { "" };
        let marker = if focused { "▶ " } else { "  " };
        let style = if focused {
            theme::focused_field()
        } else {
            theme::text()
        };

        lines.push(Line::from(vec![
            Span::styled(marker, theme::focused_field()),
            Span::styled(format!("{:<10}", field.label), theme::muted()),
            Span::styled(format!("{}{}", value, cursor), style),
        ]));
        lines.push(Line::from(""));
    }

    lines.extend(footer);
    f.render_widget(Paragraph::new(lines).block(panel(title)), area);
}
