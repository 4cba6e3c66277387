//! Centralized layout measurements for the TUI.

use ratatui::layout::Rect;

/// Height of the status bar in rows.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Minimum terminal height for useful rendering.
///
/// Below this height, we display a "terminal too small" message. The panel
/// needs its two border rows plus at least one item, and the status bar
/// takes one more.
pub const MIN_HEIGHT: u16 = 4;

/// Minimum terminal width for useful rendering.
///
/// Enough for the borders, a checkbox and a few characters of text.
pub const MIN_WIDTH: u16 = 24;

/// Width of the item editor overlay.
pub const EDITOR_WIDTH: u16 = 50;

/// Height of the item editor overlay (borders plus one input row).
pub const EDITOR_HEIGHT: u16 = 3;

/// Creates a centered rectangle within a given area.
///
/// If the requested dimensions exceed the available area, the rectangle
/// will be clamped to fit.
#[must_use]
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    Rect::new(x, y, popup_width, popup_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_positions_correctly() {
        let area = Rect::new(0, 0, 80, 24);
        let centered = centered_rect(20, 10, area);

        assert_eq!(centered.x, 30); // (80 - 20) / 2
        assert_eq!(centered.y, 7); // (24 - 10) / 2
        assert_eq!(centered.width, 20);
        assert_eq!(centered.height, 10);
    }

    #[test]
    fn centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 40, 12);
        let centered = centered_rect(100, 50, area);

        assert_eq!(centered, area);
    }

    #[test]
    fn centered_rect_respects_area_offset() {
        let area = Rect::new(10, 5, 40, 12);
        let centered = centered_rect(20, 4, area);

        assert_eq!(centered, Rect::new(20, 9, 20, 4));
    }
}
