//! Help overlay widget.
//!
//! Lists every key binding from [`KEY_BINDINGS`] when the user presses `h`
//! or `?`.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::event::KEY_BINDINGS;
use crate::layout::centered_rect;

/// The width of the help overlay panel.
const HELP_WIDTH: u16 = 34;

/// Lines around the bindings: top blank, header, blank, footer hint.
const HELP_EXTRA_LINES: u16 = 4;

/// The height of the help overlay panel, borders included.
#[allow(clippy::cast_possible_truncation)]
const HELP_HEIGHT: u16 = KEY_BINDINGS.len() as u16 + HELP_EXTRA_LINES + 2;

/// Renders a centered help overlay displaying all keybindings.
///
/// The area behind the overlay is cleared first.
///
/// # Layout
///
/// ```text
/// ╭ Help ──────────────────────────╮
/// │                                │
/// │  Keys                          │
/// │  j / ↓      Select next        │
/// │  ...                           │
/// │  q          Quit               │
/// │                                │
/// │  Press any key to close        │
/// ╰────────────────────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use jot_tui::widgets::render_help_overlay;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_help_overlay(area, &mut buf);
/// ```
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let popup_area = centered_rect(HELP_WIDTH, HELP_HEIGHT, area);

    Clear.render(popup_area, buf);

    let help_block = Block::default()
        .title(Span::styled(
            " Help ",
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightYellow));

    Paragraph::new(build_help_lines())
        .block(help_block)
        .alignment(Alignment::Left)
        .render(popup_area, buf);
}

/// Builds the lines of help content.
fn build_help_lines() -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Green);
    let text_style = Style::default().fg(Color::White);
    let hint_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("  Keys", header_style)),
    ];
    lines.extend(KEY_BINDINGS.iter().map(|(key, description)| {
        Line::from(vec![
            Span::styled(format!("  {key:<10} "), key_style),
            Span::styled(*description, text_style),
        ])
    }));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  Press any key to close", hint_style)));
    lines
}
