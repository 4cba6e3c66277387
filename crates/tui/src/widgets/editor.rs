//! Item editor overlay.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::editor::{EditTarget, EditorState};
use crate::layout::{EDITOR_HEIGHT, EDITOR_WIDTH, centered_rect};

/// Renders the single-line editor centered in `area`.
///
/// Text longer than the box scrolls so the cursor stays visible. Returns the
/// screen position of the cursor, or `None` if the box has no room for text.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use jot_tui::editor::EditorState;
/// use jot_tui::widgets::render_editor;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// let cursor = render_editor(&EditorState::new_item(), area, &mut buf);
/// assert!(cursor.is_some());
/// ```
pub fn render_editor(editor: &EditorState, area: Rect, buf: &mut Buffer) -> Option<Position> {
    let popup_area = centered_rect(EDITOR_WIDTH, EDITOR_HEIGHT, area);
    Clear.render(popup_area, buf);

    let title = match editor.target() {
        EditTarget::Rename { .. } => " Edit item ",
        EditTarget::New => " New item ",
    };
    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Span::styled(
            " Enter save · Esc cancel ",
            Style::default().fg(Color::DarkGray),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightCyan));

    let inner = block.inner(popup_area);
    block.render(popup_area, buf);
    if inner.width == 0 || inner.height == 0 {
        return None;
    }

    let before_cursor = u16::try_from(Span::raw(&editor.value()[..editor.cursor()]).width())
        .unwrap_or(u16::MAX);
    // Keep one column free for the cursor itself
    let scroll = before_cursor.saturating_sub(inner.width - 1);

    Paragraph::new(editor.value())
        .scroll((0, scroll))
        .render(inner, buf);

    Some(Position::new(inner.x + before_cursor - scroll, inner.y))
}
