//! Single-cursor selections and the line spans they cover.
//!
//! A [`Selection`] has two positions: `anchor` and `head`. The `head` is where
//! the cursor visually appears (the "active" end), the `anchor` is the other
//! end. When `anchor == head` the selection is a point.
//!
//! ```text
//! anchor=(0,0), head=(1,3): "[abc\ndef]"  (forward)
//! anchor=(1,3), head=(0,0): "]abc\ndef["  (backward)
//! ```
//!
//! # Equality
//!
//! Selections compare by the region they cover: two selections are equal when
//! their starts and their ends are equal, whichever end the head is on. Block
//! selection relies on this to recognise its own previous result.
//!
//! # Line spans
//!
//! A [`LineSpan`] is an inclusive `[start, end]` range of line indices. It is
//! what the block locator produces; [`LineSpan::to_selection`] turns it into a
//! selection from column 0 of `start` to the end of the text on `end`.

use std::{
  fmt,
  hash::{
    Hash,
    Hasher,
  },
  ops::RangeInclusive,
};

use the_blocks_core::text::LineSource;

use crate::{
  movement::Direction,
  position::Position,
};

/// Inclusive range of 0-indexed lines, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineSpan {
  pub start: usize,
  pub end:   usize,
}

impl LineSpan {
  pub fn new(start: usize, end: usize) -> Self {
    debug_assert!(start <= end, "line span {start}..={end} is inverted");
    Self { start, end }
  }

  pub const fn point(line: usize) -> Self {
    Self {
      start: line,
      end:   line,
    }
  }

  /// Number of lines covered. Never zero.
  pub const fn line_count(&self) -> usize {
    self.end - self.start + 1
  }

  pub const fn contains(&self, line: usize) -> bool {
    self.start <= line && line <= self.end
  }

  pub fn lines(&self) -> RangeInclusive<usize> {
    self.start..=self.end
  }

  /// Selection from `(start, 0)` to the end of the text on `end`, with the
  /// head on the `end` side.
  pub fn to_selection<S: LineSource + ?Sized>(self, source: &S) -> Selection {
    Selection::new(
      Position::new(self.start, 0),
      Position::new(self.end, source.line_len_chars(self.end)),
    )
  }
}

impl fmt::Display for LineSpan {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "[{}, {}]", self.start, self.end)
  }
}

#[derive(Debug, Clone, Copy)]
pub struct Selection {
  pub anchor: Position,
  pub head:   Position,
}

impl Selection {
  pub const fn new(anchor: Position, head: Position) -> Self {
    Self { anchor, head }
  }

  pub const fn point(pos: Position) -> Self {
    Self::new(pos, pos)
  }

  /// Start of the selection regardless of direction.
  #[inline]
  pub fn start(&self) -> Position {
    std::cmp::min(self.anchor, self.head)
  }

  /// End of the selection regardless of direction.
  #[inline]
  pub fn end(&self) -> Position {
    std::cmp::max(self.anchor, self.head)
  }

  /// The cursor side of the selection.
  #[inline]
  pub const fn active(&self) -> Position {
    self.head
  }

  #[inline]
  pub fn is_point(&self) -> bool {
    self.anchor == self.head
  }

  #[inline]
  pub fn direction(&self) -> Direction {
    if self.head < self.anchor {
      Direction::Backward
    } else {
      Direction::Forward
    }
  }

  /// Lines touched by the selection.
  pub fn line_span(&self) -> LineSpan {
    LineSpan::new(self.start().row, self.end().row)
  }

  /// Same region with the head moved to the other end.
  pub fn flip(self) -> Self {
    Self::new(self.head, self.anchor)
  }
}

impl PartialEq for Selection {
  fn eq(&self, other: &Self) -> bool {
    self.start() == other.start() && self.end() == other.end()
  }
}

impl Eq for Selection {}

impl Hash for Selection {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.start().hash(state);
    self.end().hash(state);
  }
}

impl fmt::Display for Selection {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}-{}", self.start(), self.end())
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn equality_ignores_direction() {
    let forward = Selection::new(Position::new(0, 0), Position::new(2, 3));
    let backward = forward.flip();

    assert_eq!(backward.direction(), Direction::Backward);
    assert_eq!(forward.direction(), Direction::Forward);
    assert_eq!(forward, backward);
    assert_ne!(
      forward,
      Selection::new(Position::new(0, 0), Position::new(2, 2))
    );
  }

  #[test]
  fn start_end_active() {
    let selection = Selection::new(Position::new(4, 1), Position::new(1, 5));

    assert_eq!(selection.start(), Position::new(1, 5));
    assert_eq!(selection.end(), Position::new(4, 1));
    assert_eq!(selection.active(), Position::new(1, 5));
    assert_eq!(selection.line_span(), LineSpan::new(1, 4));
    assert!(!selection.is_point());
    assert!(Selection::point(Position::new(3, 3)).is_point());
  }

  #[test]
  fn span_to_selection_ends_at_text_end() {
    let doc = vec!["alpha", "bé", ""];

    let selection = LineSpan::new(0, 1).to_selection(&doc);
    assert_eq!(selection.anchor, Position::new(0, 0));
    // Columns count chars, not bytes.
    assert_eq!(selection.head, Position::new(1, 2));

    let selection = LineSpan::point(2).to_selection(&doc);
    assert_eq!(selection.anchor, Position::new(2, 0));
    assert_eq!(selection.head, Position::new(2, 0));
  }

  #[test]
  fn span_helpers() {
    let span = LineSpan::new(2, 4);

    assert_eq!(span.line_count(), 3);
    assert!(span.contains(2));
    assert!(span.contains(4));
    assert!(!span.contains(5));
    assert_eq!(span.lines().collect::<Vec<_>>(), vec![2, 3, 4]);
    assert_eq!(span.to_string(), "[2, 4]");
  }

  #[test]
  fn display_uses_start_and_end() {
    let selection = Selection::new(Position::new(3, 0), Position::new(1, 2));
    assert_eq!(selection.to_string(), "1:2-3:0");
  }
}
