//! Snapshot tests for widget rendering.
//!
//! These tests use insta to capture and verify the visual output of widgets.

use jot_core::{Renderer, RowView};
use ratatui::{buffer::Buffer, layout::Rect, widgets::ListState};

use super::{render_checklist, render_help_overlay};
use crate::test_utils::buffer_to_string;
use crate::view::PanelView;

/// Creates a panel view with one open and one finished item.
fn sample_view(selected: Option<usize>) -> PanelView {
    let mut view = PanelView::default();
    view.render(&[
        RowView {
            text: "Buy milk",
            done: false,
            selected: selected == Some(0),
        },
        RowView {
            text: "Call the bank",
            done: true,
            selected: selected == Some(1),
        },
    ]);
    view
}

#[test]
fn checklist_panel() {
    let area = Rect::new(0, 0, 24, 5);
    let mut buf = Buffer::empty(area);

    render_checklist(&sample_view(None), "Todo", &mut ListState::default(), area, &mut buf);

    insta::assert_snapshot!(buffer_to_string(&buf), @r"
    ╭ Todo 1/2 ────────────╮
    │[ ] Buy milk          │
    │[x] Call the bank     │
    │                      │
    ╰──────────────────────╯
    ");
}

#[test]
fn checklist_panel_empty() {
    let area = Rect::new(0, 0, 34, 4);
    let mut buf = Buffer::empty(area);

    render_checklist(&PanelView::default(), "Todo", &mut ListState::default(), area, &mut buf);

    insta::assert_snapshot!(buffer_to_string(&buf), @r"
    ╭ Todo 0/0 ──────────────────────╮
    │No items. Press n to add one.   │
    │                                │
    ╰────────────────────────────────╯
    ");
}

#[test]
fn selection_does_not_change_text() {
    let area = Rect::new(0, 0, 24, 5);

    let mut plain = Buffer::empty(area);
    render_checklist(&sample_view(None), "Todo", &mut ListState::default(), area, &mut plain);

    let mut selected = Buffer::empty(area);
    render_checklist(&sample_view(Some(1)), "Todo", &mut ListState::default(), area, &mut selected);

    assert_eq!(buffer_to_string(&plain), buffer_to_string(&selected));
}

#[test]
fn help_overlay_over_panel() {
    let area = Rect::new(0, 0, 60, 24);
    let mut buf = Buffer::empty(area);

    render_checklist(&sample_view(Some(0)), "Todo", &mut ListState::default(), area, &mut buf);
    render_help_overlay(area, &mut buf);

    let content = buffer_to_string(&buf);
    // The title sits outside the overlay and stays visible
    assert!(content.contains("Todo 1/2"));
    assert!(content.contains("Show help"));
}
