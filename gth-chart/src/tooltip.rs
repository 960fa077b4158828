//! Floating tooltip shown while the pointer is over a cell.

use crate::layout::Cell;
use serde::Serialize;

/// Opacity of a visible tooltip.
pub const TOOLTIP_OPACITY: f64 = 0.9;
/// Horizontal offset from the pointer, in page pixels.
pub const TOOLTIP_OFFSET_X: f64 = 5.0;
/// Vertical offset from the pointer, in page pixels.
pub const TOOLTIP_OFFSET_Y: f64 = -28.0;

/// Tooltip contents and placement. Last event wins.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipState {
    pub opacity: f64,
    pub html: String,
    pub data_year: Option<i32>,
    pub left: f64,
    pub top: f64,
}

impl Default for TooltipState {
    fn default() -> Self {
        Self::hidden()
    }
}

impl TooltipState {
    pub fn hidden() -> Self {
        Self {
            opacity: 0.0,
            html: String::new(),
            data_year: None,
            left: 0.0,
            top: 0.0,
        }
    }

    /// Pointer entered `cell` at page coordinates `(page_x, page_y)`.
    pub fn show(&mut self, cell: &Cell, page_x: f64, page_y: f64) {
        self.opacity = TOOLTIP_OPACITY;
        self.html = cell.tooltip_html();
        self.data_year = Some(cell.year);
        self.left = page_x + TOOLTIP_OFFSET_X;
        self.top = page_y + TOOLTIP_OFFSET_Y;
    }

    /// Pointer left a cell. Content stays so the fade has something to show.
    pub fn hide(&mut self) {
        self.opacity = 0.0;
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }

    /// Inline style for the tooltip element.
    pub fn style(&self) -> String {
        format!(
            "opacity: {}; position: absolute; pointer-events: none; left: {}px; top: {}px; \
             background-color: white; border: solid; border-width: 1px; border-radius: 5px; padding: 5px;",
            self.opacity, self.left, self.top
        )
    }
}
