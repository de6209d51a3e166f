//! Decoded output model.
//!
//! The decoder produces a flat sequence of [`Segment`]s: styled runs of
//! text separated by explicit line breaks. Nothing here is persisted.

use crate::color::Color;

/// A maximal stretch of characters sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRun {
    pub text: String,
    /// Effective foreground, with bold already promoted to bright.
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
    pub blink: bool,
}

impl StyledRun {
    pub(crate) fn empty(style: RunStyle) -> Self {
        Self {
            text: String::new(),
            fg: style.fg,
            bg: style.bg,
            bold: style.bold,
            blink: style.blink,
        }
    }

    pub fn style(&self) -> RunStyle {
        RunStyle {
            fg: self.fg,
            bg: self.bg,
            bold: self.bold,
            blink: self.blink,
        }
    }

    /// Number of display cells the run covers.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// The style tuple a run is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStyle {
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
    pub blink: bool,
}

/// One element of decoded output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Run(StyledRun),
    LineBreak,
}

impl Segment {
    pub fn as_run(&self) -> Option<&StyledRun> {
        match self {
            Segment::Run(run) => Some(run),
            Segment::LineBreak => None,
        }
    }
}

/// Concatenate decoded output into plain text, one `\n` per line break.
pub fn plain_text(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Run(run) => out.push_str(&run.text),
            Segment::LineBreak => out.push('\n'),
        }
    }
    out
}
