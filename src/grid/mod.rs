//! Menu screen documents.
//!
//! A [`GridDocument`] is the canonical form of one menu screen: built and
//! edited cell by cell by an authoring surface, persisted as the latest
//! layout of its menu, and encoded to ANSI for display.

mod cell;
mod document;
mod draw;
mod error;

pub use cell::{Cell, Pen};
pub use document::{GridDocument, MAX_CELLS, MAX_DIMENSION};
pub use draw::{BoxGlyphs, BoxStyle};
pub use error::GridError;

/// Standard text-mode screen width.
pub const DEFAULT_WIDTH: usize = 80;
/// Standard text-mode screen height.
pub const DEFAULT_HEIGHT: usize = 25;
