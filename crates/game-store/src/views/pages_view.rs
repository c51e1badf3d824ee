//! Static pages: entrance banner, home, about, links and contact

use figlet_rs::FIGfont;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::state::AppState;
use crate::view_models::format_price;

use super::{form_view, panel, theme};

/// Render the entrance screen with the FIGlet banner and disclaimer
pub fn render_entrance(_state: &AppState, area: Rect, f: &mut Frame) {
    let mut lines = generate_figlet_title();
    lines.extend([
        Line::from(""),
        Line::from(Span::styled(
            "Your Ultimate Gaming Destination",
            theme::section_header(),
        )),
        Line::from(""),
        Line::from(Span::styled("⚠️ DISCLAIMER", theme::status(crate::state::StatusKind::Running))),
        Line::from(Span::styled(
            "This is a demonstration storefront, not a commercial site offering merchandise for sale.",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "No actual transactions will be processed, and no payments will be collected.",
            theme::muted(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", theme::key_hint()),
            Span::styled(" to enter the store", theme::key_description()),
        ]),
    ]);

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

/// Generate FIGlet title for the entrance screen
fn generate_figlet_title() -> Vec<Line<'static>> {
    let rendered = FIGfont::standard()
        .ok()
        .and_then(|font| font.convert("GameStore").map(|figure| figure.to_string()));

    match rendered {
        Some(text) => text
            .lines()
            .map(|line| Line::from(Span::styled(line.to_string(), theme::panel_title())))
            .collect(),
        None => vec![Line::from(Span::styled("GameStore", theme::panel_title()))],
    }
}

pub fn render_home(state: &AppState, area: Rect, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(0)])
        .split(area);

    let intro = vec![
        Line::from(""),
        Line::from("Welcome to GameStore".bold()),
        Line::from(""),
        Line::from(Span::styled(
            "Discover the latest and greatest games across all platforms.",
            theme::text(),
        )),
        Line::from(Span::styled(
            "From indie gems to AAA blockbusters, we have everything you need to fuel your gaming passion.",
            theme::muted(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", theme::key_hint()),
            Span::styled(" browse games   ", theme::key_description()),
            Span::styled("/", theme::key_hint()),
            Span::styled(" search library", theme::key_description()),
        ]),
    ];
    f.render_widget(
        Paragraph::new(intro)
            .block(panel("Home"))
            .alignment(Alignment::Center),
        chunks[0],
    );

    let symbol = &state.config.currency_symbol;
    let mut featured = vec![Line::from("")];
    for game in state.store.catalog.iter().take(3) {
        featured.push(Line::from(vec![
            Span::styled(format!("  {:<36}", game.title), theme::text().bold()),
            Span::styled(format!("{:<12}", game.genre), theme::muted()),
            Span::styled(format!("★ {:.1}  ", game.rating), theme::rating()),
            Span::styled(format_price(symbol, game.price), theme::price()),
        ]));
        featured.push(Line::from(Span::styled(
            format!("  {}", game.description),
            theme::muted(),
        )));
        featured.push(Line::from(""));
    }
    f.render_widget(
        Paragraph::new(featured)
            .block(panel("Featured Games"))
            .wrap(Wrap { trim: false }),
        chunks[1],
    );
}

pub fn render_about(area: Rect, f: &mut Frame) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled("Our Story", theme::section_header())),
        Line::from("GameStore was born from a simple idea: create a platform where gamers can discover,"),
        Line::from("purchase, and enjoy the best games across all platforms."),
        Line::from(""),
        Line::from("From indie darlings to AAA blockbusters, we believe every game has its place and"),
        Line::from("every gamer deserves to find their perfect match."),
        Line::from(""),
        Line::from(Span::styled("Our Values", theme::section_header())),
        value_line("Community", "A welcoming place where gamers connect, share and discover together."),
        value_line("Quality", "Every game in the catalog is carefully selected and reviewed."),
        value_line("Accessibility", "Gaming for everyone, regardless of platform, budget, or location."),
        value_line("Passion", "We're gamers first, and that drives everything we do."),
    ];
    f.render_widget(
        Paragraph::new(text)
            .block(panel("About GameStore"))
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn value_line(name: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<15}", name), theme::key_hint()),
        Span::styled(description, theme::muted()),
    ])
}

const LINK_SECTIONS: [(&str, &[(&str, &str)]); 3] = [
    (
        "Development Resources",
        &[
            ("The Rust Book", "https://doc.rust-lang.org/book/"),
            ("Ratatui", "https://ratatui.rs/"),
        ],
    ),
    (
        "Design & UI",
        &[
            ("Pexels", "https://www.pexels.com/"),
            ("FIGlet fonts", "http://www.figlet.org/"),
        ],
    ),
    (
        "Gaming Industry",
        &[
            ("Steam", "https://store.steampowered.com/"),
            ("Epic Games Store", "https://www.epicgames.com/store/"),
            ("GameDev.net", "https://www.gamedev.net/"),
        ],
    ),
];

pub fn render_links(area: Rect, f: &mut Frame) {
    let mut lines = vec![Line::from("")];
    for (section, links) in LINK_SECTIONS {
        lines.push(Line::from(Span::styled(section, theme::section_header())));
        for (name, url) in links {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<20}", name), theme::text()),
                Span::styled(*url, theme::muted().underlined()),
            ]));
        }
        lines.push(Line::from(""));
    }
    f.render_widget(Paragraph::new(lines).block(panel("Useful Links")), area);
}

pub fn render_contact(state: &AppState, area: Rect, f: &mut Frame) {
    let footer = if state.contact_submitted {
        vec![Line::from(Span::styled(
            "  Thank you for your message! We'll get back to you soon.",
            theme::status(crate::state::StatusKind::Success),
        ))]
    } else {
        vec![Line::from(Span::styled(
            "  All fields are required.",
            theme::muted(),
        ))]
    };
    form_view::render_form(&state.contact_form, "Contact Us", footer, area, f);
}
