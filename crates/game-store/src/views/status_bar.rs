//! Status Bar Widget
//!
//! Renders the footer: latest notice on the left, key hints on the right.
//! Format: `emoji message                     hints`

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::routes::Route;
use crate::state::AppState;

use super::theme;

/// Widget for rendering the status bar
pub struct StatusBarWidget<'a>(pub &'a AppState);

impl StatusBarWidget<'_> {
    fn hints(route: Route) -> &'static str {
        match route {
            Route::Entrance => "Enter: shop  q: quit",
            Route::Products => "j/k: select  a: add  s: sort  g: genre  p: platform",
            Route::Search => "Tab: field  Space: cycle  ↑/↓: select  Enter: add  Del: clear",
            Route::Order => "+/-: quantity  d: remove  x: clear  c: checkout",
            Route::Login => "Tab: field  Enter: sign in  Ctrl+R: register",
            Route::Register => "Tab: field  Enter: create account  Ctrl+L: sign in",
            Route::Contact => "Tab: field  Enter: send",
            Route::Admin => "Tab: switch  x x: delete  t: stock  n: new/duplicate",
            _ => "PgUp/PgDn: views  /: search  C: cart  q: quit",
        }
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.0;

        if area.height < 1 {
            return;
        }

        // Fill entire row with background
        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_char(' ');
        }

        let hints = Self::hints(state.route);
        let hints_width = hints.chars().count() as u16;
        let hints_x = area.x + area.width.saturating_sub(hints_width + 1);
        buf.set_string(hints_x, area.y, hints, theme::muted());

        let Some(msg) = state.status_bar.latest() else {
            return;
        };

        // Emoji (estimate 2 chars width for most emoji)
        let x = area.x + 1;
        buf.set_string(x, area.y, msg.kind.icon(), theme::status(msg.kind));
        let x = x + 3;

        let available = hints_x.saturating_sub(x + 1) as usize;
        let message: String = if msg.message.chars().count() > available {
            let truncated: String = msg.message.chars().take(available.saturating_sub(1)).collect();
            format!("{}…", truncated)
        } else {
            msg.message.clone()
        };
        buf.set_string(x, area.y, &message, theme::status(msg.kind));
    }
}
