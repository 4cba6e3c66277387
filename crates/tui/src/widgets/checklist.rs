//! The checklist panel.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget,
        Wrap,
    },
};

use crate::view::{PanelRow, PanelView};

/// Checkbox drawn for a checked item.
const CHECKED: &str = "[x]";

/// Checkbox drawn for an unchecked item.
const UNCHECKED: &str = "[ ]";

/// Builds the panel title, e.g. ` Todo 1/3 `.
#[must_use]
pub fn panel_title(title: &str, view: &PanelView) -> String {
    format!(" {title} {}/{} ", view.done_count(), view.len())
}

/// Renders the checklist inside a bordered panel.
///
/// `state` carries the scroll offset between frames; its selection is
/// synced from `view` so the highlighted row always stays on screen.
///
/// # Layout
///
/// ```text
/// ╭ Todo 1/2 ──────────────╮
/// │[ ] Buy milk            │
/// │[x] Call the bank       │
/// ╰────────────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use ratatui::widgets::ListState;
/// use jot_tui::view::PanelView;
/// use jot_tui::widgets::render_checklist;
///
/// let area = Rect::new(0, 0, 40, 10);
/// let mut buf = Buffer::empty(area);
/// let mut state = ListState::default();
///
/// render_checklist(&PanelView::default(), "Todo", &mut state, area, &mut buf);
/// ```
pub fn render_checklist(
    view: &PanelView,
    title: &str,
    state: &mut ListState,
    area: Rect,
    buf: &mut Buffer,
) {
    let block = panel_block(panel_title(title, view), Color::Cyan);

    if view.is_empty() {
        *state = ListState::default();
        Paragraph::new(Line::from(Span::styled(
            "No items. Press n to add one.",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )))
        .block(block)
        .wrap(Wrap { trim: true })
        .render(area, buf);
        return;
    }

    state.select(view.selected());

    let items: Vec<ListItem> = view.rows().iter().map(row_item).collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    StatefulWidget::render(list, area, buf, state);
}

/// Renders the panel in its disabled state, showing why.
pub fn render_disabled_panel(title: &str, reason: &str, area: Rect, buf: &mut Buffer) {
    Paragraph::new(vec![
        Line::from(Span::styled(
            "Todo list unavailable",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(reason, Style::default().fg(Color::Gray))),
    ])
    .block(panel_block(format!(" {title} "), Color::DarkGray))
    .wrap(Wrap { trim: true })
    .render(area, buf);
}

fn panel_block<'a>(title: String, color: Color) -> Block<'a> {
    Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

fn row_item(row: &PanelRow) -> ListItem<'_> {
    let (checkbox, checkbox_style, text_style) = if row.done {
        (
            CHECKED,
            Style::default().fg(Color::Green),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
        )
    } else {
        (UNCHECKED, Style::default().fg(Color::Gray), Style::default())
    };

    ListItem::new(Line::from(vec![
        Span::styled(checkbox, checkbox_style),
        Span::raw(" "),
        Span::styled(row.text.as_str(), text_style),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use jot_core::{Renderer, RowView};

    fn view_of(rows: &[(&str, bool)], selected: Option<usize>) -> PanelView {
        let rows: Vec<RowView<'_>> = rows
            .iter()
            .enumerate()
            .map(|(idx, (text, done))| RowView {
                text: *text,
                done: *done,
                selected: selected == Some(idx),
            })
            .collect();
        let mut view = PanelView::default();
        view.render(&rows);
        view
    }

    #[test]
    fn title_counts_done_items() {
        let view = view_of(&[("a", true), ("b", false), ("c", true)], None);
        assert_eq!(panel_title("Todo", &view), " Todo 2/3 ");
    }

    #[test]
    fn selected_row_is_reversed() {
        let view = view_of(&[("first", false), ("second", false)], Some(1));
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        let mut state = ListState::default();

        render_checklist(&view, "Todo", &mut state, area, &mut buf);

        let selected = buf.cell((1, 2)).unwrap();
        assert!(selected.modifier.contains(Modifier::REVERSED));
        let other = buf.cell((1, 1)).unwrap();
        assert!(!other.modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn done_rows_are_crossed_out() {
        let view = view_of(&[("done", true)], None);
        let area = Rect::new(0, 0, 20, 4);
        let mut buf = Buffer::empty(area);

        render_checklist(&view, "Todo", &mut ListState::default(), area, &mut buf);

        // Column 5 is the first character of the text after "[x] "
        let cell = buf.cell((5, 1)).unwrap();
        assert_eq!(cell.symbol(), "d");
        assert!(cell.modifier.contains(Modifier::CROSSED_OUT));
    }

    #[test]
    fn selection_below_the_fold_scrolls_into_view() {
        let rows: Vec<(String, bool)> = (0..10).map(|i| (format!("item {i}"), false)).collect();
        let rows: Vec<(&str, bool)> = rows.iter().map(|(t, d)| (t.as_str(), *d)).collect();
        let view = view_of(&rows, Some(8));
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        let mut state = ListState::default();

        render_checklist(&view, "Todo", &mut state, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("item 8"));
        assert!(!content.contains("item 0"));
        assert!(state.offset() > 0);
    }

    #[test]
    fn empty_list_shows_hint_and_resets_scroll() {
        let area = Rect::new(0, 0, 40, 5);
        let mut buf = Buffer::empty(area);
        let mut state = ListState::default().with_offset(4);

        render_checklist(&PanelView::default(), "Todo", &mut state, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Todo 0/0"));
        assert!(content.contains("Press n to add one"));
        assert_eq!(state.offset(), 0);
    }

    #[test]
    fn disabled_panel_shows_reason() {
        let area = Rect::new(0, 0, 60, 5);
        let mut buf = Buffer::empty(area);

        render_disabled_panel("Todo", "failed to create todo file", area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("unavailable"));
        assert!(content.contains("failed to create todo file"));
    }
}
