//! Terminal output for menu screens.
//!
//! Builds on the grid encoder: the stored layout is drawn first, then the
//! input prompt is placed on the bottom row.

use crate::ansi::{
    encode_to_string, push_clear_screen, push_color, push_hide_cursor, push_move_cursor,
    push_reset, push_show_cursor,
};
use crate::color::Color;
use crate::grid::GridDocument;

use super::item::{Action, MenuItem};

/// Compose the full screen for a menu.
///
/// Without a stored layout only the prompt is written, on row `height`.
pub fn render_menu(layout: Option<&GridDocument>, height: usize, prompt: &str) -> String {
    let mut out = layout.map(encode_to_string).unwrap_or_default();
    let prompt_row = layout.map_or(height, GridDocument::height).max(1);

    push_hide_cursor(&mut out);
    push_move_cursor(&mut out, 1, prompt_row);
    push_color(&mut out, Color::White, Some(Color::Black));
    out.push_str(prompt);
    push_show_cursor(&mut out);
    out
}

/// Draw an item's `[H] Label` at its position, in its normal or
/// highlight colors.
pub fn render_item_label(item: &MenuItem, highlighted: bool) -> String {
    let (fg, bg) = if highlighted {
        (item.colors.highlight_fg, item.colors.highlight_bg)
    } else {
        (item.colors.fg, item.colors.bg)
    };

    let mut out = String::new();
    push_move_cursor(&mut out, usize::from(item.x) + 1, usize::from(item.y) + 1);
    push_color(&mut out, fg, Some(bg));
    out.push_str(&item.display_label());
    push_reset(&mut out);
    out
}

/// Shown when a hotkey matched nothing.
pub fn invalid_selection() -> String {
    let mut out = String::new();
    push_color(&mut out, Color::BrightRed, None);
    out.push_str("Invalid selection. Please try again.");
    push_reset(&mut out);
    out
}

/// Acknowledge a selected item before the caller acts on it.
pub fn selection_feedback(item: &MenuItem) -> String {
    let mut out = String::new();
    let (color, verb) = match item.action {
        Action::Submenu { .. } => {
            push_clear_screen(&mut out);
            out.push_str("Loading menu...");
            return out;
        }
        Action::Command { .. } => (Color::BrightGreen, "Executing"),
        Action::Script { .. } => (Color::BrightYellow, "Running script"),
        Action::External { .. } => (Color::BrightBlue, "Launching"),
    };
    push_color(&mut out, color, None);
    out.push_str(verb);
    out.push_str(": ");
    out.push_str(&item.label);
    push_reset(&mut out);
    out
}
