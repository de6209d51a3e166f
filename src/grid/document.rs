//! The grid document: a fixed-size array of cells.

use serde::{Deserialize, Serialize};

use super::cell::{Cell, Pen};
use super::draw::BoxStyle;
use super::error::GridError;

/// Largest width or height a grid may have.
pub const MAX_DIMENSION: usize = u16::MAX as usize;

/// Largest number of cells a grid may hold.
pub const MAX_CELLS: usize = 1 << 22;

/// A menu screen as a `width` x `height` array of [`Cell`]s.
///
/// Authoring operations take signed coordinates and silently ignore
/// anything that falls outside the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredGrid", into = "StoredGrid")]
pub struct GridDocument {
    width: usize,
    height: usize,
    /// Row-major.
    cells: Vec<Cell>,
}

impl GridDocument {
    /// Create a grid of default cells.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(GridError::TooLarge { width, height });
        }
        let len = width
            .checked_mul(height)
            .filter(|&len| len <= MAX_CELLS)
            .ok_or(GridError::TooLarge { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.offset(x, y).map(|i| &self.cells[i])
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width)
    }

    /// Row `y` as text, trailing blanks included.
    pub fn row_text(&self, y: usize) -> Option<String> {
        self.rows().nth(y).map(|row| row.iter().map(|c| c.ch).collect())
    }

    /// Overwrite one cell. Out-of-bounds coordinates are a no-op.
    pub fn set_cell(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(i) = self.signed_offset(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Unsigned variant of [`set_cell`](Self::set_cell).
    pub fn put(&mut self, x: usize, y: usize, cell: Cell) {
        if let Some(i) = self.offset(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Set every cell to `cell`.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Replace the 4-connected region of cells identical to the one at
    /// `(x, y)` with `cell`.
    ///
    /// Cells match on the exact (character, foreground, background)
    /// triple. Filling a region with its own value is a no-op.
    pub fn flood_fill(&mut self, x: i32, y: i32, cell: Cell) {
        let Some(start) = self.signed_offset(x, y) else {
            return;
        };
        let target = self.cells[start];
        if target == cell {
            return;
        }

        let mut stack = vec![(x, y)];
        while let Some((cx, cy)) = stack.pop() {
            let Some(i) = self.signed_offset(cx, cy) else {
                continue;
            };
            if self.cells[i] != target {
                continue;
            }
            self.cells[i] = cell;
            stack.extend([(cx + 1, cy), (cx - 1, cy), (cx, cy + 1), (cx, cy - 1)]);
        }
    }

    /// Draw a rectangle outline with corners at the two given points.
    ///
    /// Either corner may come first. Parts of the box outside the grid
    /// are clipped.
    pub fn draw_box(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, style: BoxStyle, pen: Pen) {
        let glyphs = style.glyphs();
        let (left, right) = (x1.min(x2), x1.max(x2));
        let (top, bottom) = (y1.min(y2), y1.max(y2));

        // Edges are walked only where they cross the grid.
        let (width, height) = (self.width as i32, self.height as i32);
        for x in left.saturating_add(1).max(0)..right.min(width) {
            self.set_cell(x, top, pen.cell(glyphs.horizontal));
            self.set_cell(x, bottom, pen.cell(glyphs.horizontal));
        }
        for y in top.saturating_add(1).max(0)..bottom.min(height) {
            self.set_cell(left, y, pen.cell(glyphs.vertical));
            self.set_cell(right, y, pen.cell(glyphs.vertical));
        }

        self.set_cell(left, top, pen.cell(glyphs.top_left));
        self.set_cell(right, top, pen.cell(glyphs.top_right));
        self.set_cell(left, bottom, pen.cell(glyphs.bottom_left));
        self.set_cell(right, bottom, pen.cell(glyphs.bottom_right));
    }

    /// Write `text` left to right from `(x, y)`, clipped at the row's end.
    pub fn place_text(&mut self, x: i32, y: i32, text: &str, pen: Pen) {
        for (i, ch) in text.chars().enumerate() {
            let Ok(offset) = i32::try_from(i) else {
                break;
            };
            let cx = x.saturating_add(offset);
            if cx >= self.width as i32 {
                break;
            }
            self.set_cell(cx, y, pen.cell(ch));
        }
    }

    fn offset(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    fn signed_offset(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        self.offset(x, y)
    }
}

/// Persisted shape: rows of cells, as the authoring surface stores them.
#[derive(Debug, Serialize, Deserialize)]
struct StoredGrid {
    width: usize,
    height: usize,
    cells: Vec<Vec<Cell>>,
}

impl TryFrom<StoredGrid> for GridDocument {
    type Error = GridError;

    /// Ragged rows are padded with default cells or truncated.
    fn try_from(stored: StoredGrid) -> Result<Self, Self::Error> {
        let mut doc = GridDocument::new(stored.width, stored.height)?;
        for (y, row) in stored.cells.iter().take(doc.height).enumerate() {
            for (x, cell) in row.iter().take(doc.width).enumerate() {
                doc.put(x, y, *cell);
            }
        }
        Ok(doc)
    }
}

impl From<GridDocument> for StoredGrid {
    fn from(doc: GridDocument) -> Self {
        Self {
            width: doc.width,
            height: doc.height,
            cells: doc.rows().map(<[Cell]>::to_vec).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn grid(width: usize, height: usize) -> GridDocument {
        GridDocument::new(width, height).unwrap()
    }

    fn chars(doc: &GridDocument) -> Vec<String> {
        (0..doc.height()).filter_map(|y| doc.row_text(y)).collect()
    }

    #[test]
    fn new_grid_is_all_default() {
        let doc = grid(80, 25);
        assert_eq!(doc.rows().count(), 25);
        assert!(doc.rows().flatten().all(|c| *c == Cell::default()));
        assert_eq!(Cell::default(), Cell::new(' ', Color::White, Color::Black));
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            GridDocument::new(0, 25),
            Err(GridError::InvalidDimensions { width: 0, height: 25 })
        );
        assert!(GridDocument::new(80, 0).is_err());
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        assert_eq!(
            GridDocument::new(usize::MAX, 2),
            Err(GridError::TooLarge { width: usize::MAX, height: 2 })
        );
        assert!(GridDocument::new(MAX_DIMENSION, MAX_DIMENSION).is_err());
        assert!(GridDocument::new(MAX_DIMENSION, 1).is_ok());
    }

    #[test]
    fn set_cell_ignores_out_of_bounds() {
        let mut doc = grid(3, 3);
        let before = doc.clone();
        for (x, y) in [(-1, 0), (0, -1), (3, 0), (0, 3), (i32::MAX, i32::MIN)] {
            doc.set_cell(x, y, Cell::new('X', Color::Red, Color::Red));
        }
        assert_eq!(doc, before);
    }

    #[test]
    fn flood_fill_covers_whole_blank_grid() {
        let mut doc = grid(10, 10);
        let fill = Cell::new('X', Color::BrightRed, Color::Blue);
        doc.flood_fill(0, 0, fill);
        assert!(doc.rows().flatten().all(|c| *c == fill));
    }

    #[test]
    fn flood_fill_terminates_when_start_already_matches_fill() {
        let mut doc = grid(10, 10);
        let x = Cell::new('X', Color::White, Color::Black);
        for i in 0..10 {
            doc.set_cell(i, 0, x);
            doc.set_cell(i, 9, x);
            doc.set_cell(0, i, x);
            doc.set_cell(9, i, x);
        }
        let before = doc.clone();
        doc.flood_fill(0, 0, x);
        assert_eq!(doc, before);

        let red_x = Cell::new('X', Color::Red, Color::Black);
        doc.flood_fill(0, 0, red_x);
        // The border ring changes, the enclosed blanks do not.
        assert_eq!(doc.cell(5, 0), Some(&red_x));
        assert_eq!(doc.cell(9, 9), Some(&red_x));
        assert_eq!(doc.cell(5, 5), Some(&Cell::default()));
    }

    #[test]
    fn flood_fill_matches_exact_triple() {
        let mut doc = grid(5, 1);
        doc.set_cell(2, 0, Cell::new(' ', Color::White, Color::Blue));
        doc.flood_fill(0, 0, Cell::new('#', Color::White, Color::Black));
        assert_eq!(chars(&doc), vec!["##   "]);
    }

    #[test]
    fn flood_fill_out_of_bounds_is_noop() {
        let mut doc = grid(2, 2);
        doc.flood_fill(-1, 5, Cell::new('#', Color::White, Color::Black));
        assert_eq!(doc, grid(2, 2));
    }

    #[test]
    fn draw_box_single() {
        let mut doc = grid(4, 3);
        doc.draw_box(0, 0, 3, 2, BoxStyle::Single, Pen::default());
        assert_eq!(chars(&doc), vec!["┌──┐", "│  │", "└──┘"]);
    }

    #[test]
    fn draw_box_reversed_corners_match() {
        let pen = Pen::new(Color::Yellow, Color::Blue);
        let mut forward = grid(8, 8);
        forward.draw_box(1, 1, 5, 5, BoxStyle::Double, pen);
        let mut reversed = grid(8, 8);
        reversed.draw_box(5, 5, 1, 1, BoxStyle::Double, pen);
        assert_eq!(forward, reversed);

        let mut mixed = grid(8, 8);
        mixed.draw_box(5, 1, 1, 5, BoxStyle::Double, pen);
        assert_eq!(forward, mixed);
        assert_eq!(forward.cell(1, 1).map(|c| c.ch), Some('╔'));
        assert_eq!(forward.cell(5, 5).map(|c| c.ch), Some('╝'));
    }

    #[test]
    fn draw_box_is_clipped() {
        let mut doc = grid(3, 3);
        doc.draw_box(-2, 1, 1, 9, BoxStyle::Single, Pen::default());
        assert_eq!(chars(&doc), vec!["   ", "─┐ ", " │ "]);
    }

    #[test]
    fn draw_box_at_coordinate_extremes_is_clipped() {
        let mut doc = grid(4, 4);
        doc.draw_box(i32::MAX, 0, i32::MAX, 2, BoxStyle::Single, Pen::default());
        assert_eq!(doc, grid(4, 4));

        doc.draw_box(i32::MIN, i32::MIN, i32::MAX, i32::MAX, BoxStyle::Single, Pen::default());
        assert_eq!(doc, grid(4, 4));

        doc.draw_box(i32::MIN, 1, i32::MAX, 2, BoxStyle::Double, Pen::default());
        assert_eq!(chars(&doc), vec!["    ", "════", "════", "    "]);
    }

    #[test]
    fn place_text_clips_at_row_end() {
        let mut doc = grid(5, 2);
        doc.place_text(2, 0, "hello", Pen::new(Color::Green, Color::Black));
        assert_eq!(chars(&doc), vec!["  hel", "     "]);
        assert_eq!(doc.cell(2, 0).unwrap().fg, Color::Green);
    }

    #[test]
    fn place_text_with_negative_start_keeps_visible_part() {
        let mut doc = grid(5, 1);
        doc.place_text(-2, 0, "abcd", Pen::default());
        assert_eq!(chars(&doc), vec!["cd   "]);
    }

    #[test]
    fn stored_form_is_rows_of_cells() {
        let mut doc = grid(2, 1);
        doc.set_cell(1, 0, Cell::new('A', Color::Red, Color::Black));
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "width": 2,
                "height": 1,
                "cells": [[{"char": " ", "fg": 7, "bg": 0}, {"char": "A", "fg": 1, "bg": 0}]]
            })
        );
        let back: GridDocument = serde_json::from_value(json).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn ragged_stored_rows_are_normalized() {
        let json = r#"{"width":3,"height":2,"cells":[[{"char":"a","fg":1,"bg":0}]]}"#;
        let doc: GridDocument = serde_json::from_str(json).unwrap();
        assert_eq!(chars(&doc), vec!["a  ", "   "]);
        let zero = r#"{"width":0,"height":2,"cells":[]}"#;
        assert!(serde_json::from_str::<GridDocument>(zero).is_err());
    }

    #[test]
    fn huge_stored_grid_is_rejected() {
        let json = r#"{"width":9223372036854775808,"height":2,"cells":[]}"#;
        assert!(serde_json::from_str::<GridDocument>(json).is_err());
    }
}
