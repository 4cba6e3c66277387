//! Status bar rendering widget.
//!
//! A single line below the panel: keybinding hints, or the latest notice
//! when there is one, and the time of the last reload on the right.

use chrono::{DateTime, Local};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::notice::{Notice, NoticeLevel};

/// Renders the status bar.
///
/// # Layout
///
/// ```text
/// q Quit  j/k Move  Space Check  n New  ? Help          reloaded 10:30:00
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use jot_tui::widgets::render_status_bar;
///
/// let area = Rect::new(0, 0, 80, 1);
/// let mut buf = Buffer::empty(area);
///
/// render_status_bar(None, None, area, &mut buf);
/// ```
pub fn render_status_bar(
    notice: Option<&Notice>,
    reloaded_at: Option<DateTime<Local>>,
    area: Rect,
    buf: &mut Buffer,
) {
    let clock = reloaded_at.map(|at| format!(" reloaded {} ", at.format("%H:%M:%S")));
    let clock_width = clock
        .as_deref()
        .map_or(0, |text| u16::try_from(text.len()).unwrap_or(u16::MAX));

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(clock_width)])
        .split(area);

    let left = match notice {
        Some(notice) => notice_line(notice),
        None => hints_line(),
    };
    Paragraph::new(left).render(chunks[0], buf);

    if let Some(clock) = clock {
        Paragraph::new(Span::styled(clock, Style::default().fg(Color::DarkGray)))
            .render(chunks[1], buf);
    }
}

fn hints_line() -> Line<'static> {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::White);

    let hints: [(&str, &str); 6] = [
        ("q", "Quit"),
        ("j/k", "Move"),
        ("Space", "Check"),
        ("n", "New"),
        ("e", "Edit"),
        ("?", "Help"),
    ];

    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, text) in hints {
        spans.push(Span::styled(format!(" {key}"), key_style));
        spans.push(Span::styled(format!(" {text} "), text_style));
    }
    Line::from(spans)
}

fn notice_line(notice: &Notice) -> Line<'_> {
    let (label, color) = match notice.level {
        NoticeLevel::Info => ("", Color::Cyan),
        NoticeLevel::Warning => ("warning: ", Color::Yellow),
        NoticeLevel::Error => ("error: ", Color::Red),
    };
    Line::from(vec![
        Span::styled(
            format!(" {label}"),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(notice.text.as_str(), Style::default().fg(color)),
    ])
}
