//! Locating contiguous blocks of non-blank lines.
//!
//! A block is a maximal run of consecutive lines that are not blank (see
//! [`Blank`] for what blank means). Given any line, [`Blocks::locate`]
//! returns the block containing it, optionally followed by the single blank
//! line after the block.
//!
//! ```text
//! 0 fn a() {}       locate(1, Forward, false) -> [0, 1]
//! 1 fn b() {}       locate(1, Forward, true)  -> [0, 2]
//! 2                 locate(2, Forward, true)  -> [2, 2]
//! 3 fn c() {}       locate(3, Backward, _)    -> [3, 3]
//! ```
//!
//! All walks are bounds-checked against the document, so none of the
//! functions here fail. A line index past the end is clamped to the last line.

use the_blocks_core::text::{
  Blank,
  LineSource,
};

use crate::{
  movement::Direction,
  selection::LineSpan,
};

/// Block queries over one document snapshot.
#[derive(Debug)]
pub struct Blocks<'a, S: ?Sized> {
  source: &'a S,
  blank:  Blank,
}

impl<'a, S: LineSource + ?Sized> Blocks<'a, S> {
  pub fn new(source: &'a S, blank: Blank) -> Self {
    Self { source, blank }
  }

  #[inline]
  pub fn is_blank(&self, line: usize) -> bool {
    self.source.is_blank(line, self.blank)
  }

  /// Span of the block containing `line`.
  ///
  /// Both directions first walk up to the top of the block. `Forward` then
  /// walks down from `line` to the bottom of the block and, when
  /// `include_trailing_empty` is set and the block is not at the end of the
  /// document, takes the blank line after it as well. `Backward` walks down
  /// from the top of the block instead and never takes a trailing line, so
  /// `include_trailing_empty` is ignored.
  ///
  /// A blank `line` is a block of its own: the result is `[line, line]`.
  pub fn locate(&self, line: usize, direction: Direction, include_trailing_empty: bool) -> LineSpan {
    let last = self.source.last_line();
    let line = line.min(last);

    if self.is_blank(line) {
      return LineSpan::point(line);
    }

    let mut start = line;
    while start > 0 && !self.is_blank(start - 1) {
      start -= 1;
    }

    let mut end = match direction {
      Direction::Forward => line,
      Direction::Backward => start,
    };
    while end < last && !self.is_blank(end + 1) {
      end += 1;
    }

    if direction == Direction::Forward && include_trailing_empty && end < last {
      end += 1;
    }

    LineSpan::new(start, end)
  }

  /// First non-blank line at or after `from`.
  pub fn next_non_blank(&self, from: usize) -> Option<usize> {
    (from..self.source.line_count()).find(|&line| !self.is_blank(line))
  }

  /// First non-blank line at or above `from`. `from` is clamped to the last
  /// line.
  pub fn prev_non_blank(&self, from: usize) -> Option<usize> {
    let from = from.min(self.source.last_line());
    (0..=from).rev().find(|&line| !self.is_blank(line))
  }
}

/// [`Blocks::locate`] with the default [`Blank`] policy.
pub fn locate<S: LineSource + ?Sized>(
  source: &S,
  line: usize,
  direction: Direction,
  include_trailing_empty: bool,
) -> LineSpan {
  Blocks::new(source, Blank::default()).locate(line, direction, include_trailing_empty)
}

#[cfg(test)]
pub(crate) mod test {
  use quickcheck::quickcheck;

  use super::*;

  const DOC: &[&str] = &["a", "b", "", "c", "d", "", ""];

  /// Empty, whitespace-only or text line for each byte of `shape`.
  pub(crate) fn doc_from_shape(shape: &[u8]) -> Vec<&'static str> {
    shape
      .iter()
      .map(|kind| {
        match kind % 3 {
          0 => "",
          1 => " \t\u{00A0}",
          _ => "text",
        }
      })
      .collect()
  }

  #[test]
  fn forward_finds_whole_block() {
    assert_eq!(locate(DOC, 0, Direction::Forward, false), LineSpan::new(0, 1));
    assert_eq!(locate(DOC, 1, Direction::Forward, false), LineSpan::new(0, 1));
    assert_eq!(locate(DOC, 4, Direction::Forward, false), LineSpan::new(3, 4));
  }

  #[test]
  fn forward_takes_one_trailing_empty_line() {
    assert_eq!(locate(DOC, 1, Direction::Forward, true), LineSpan::new(0, 2));
    // Two blank lines follow, only one is taken.
    assert_eq!(locate(DOC, 3, Direction::Forward, true), LineSpan::new(3, 5));
  }

  #[test]
  fn no_trailing_line_at_end_of_document() {
    let doc = ["x", "", "y", "z"];
    assert_eq!(locate(&doc[..], 2, Direction::Forward, true), LineSpan::new(2, 3));
  }

  #[test]
  fn backward_finds_block_without_trailing_line() {
    assert_eq!(locate(DOC, 1, Direction::Backward, true), LineSpan::new(0, 1));
    assert_eq!(locate(DOC, 4, Direction::Backward, false), LineSpan::new(3, 4));
    assert_eq!(locate(DOC, 3, Direction::Backward, true), LineSpan::new(3, 4));
  }

  #[test]
  fn blank_line_is_its_own_block() {
    assert_eq!(locate(DOC, 2, Direction::Forward, true), LineSpan::point(2));
    assert_eq!(locate(DOC, 2, Direction::Backward, false), LineSpan::point(2));
    assert_eq!(locate(DOC, 6, Direction::Forward, true), LineSpan::point(6));
  }

  #[test]
  fn whitespace_only_lines_split_blocks() {
    let doc = ["one", "  ", "two", "\t", "three"];
    assert_eq!(locate(&doc[..], 2, Direction::Forward, false), LineSpan::point(2));
    assert_eq!(locate(&doc[..], 2, Direction::Forward, true), LineSpan::new(2, 3));
  }

  #[test]
  fn unicode_policy_treats_nbsp_as_blank() {
    let doc = ["one", "\u{00A0}", "two"];

    let spaces = Blocks::new(&doc[..], Blank::SpacesAndTabs);
    assert_eq!(spaces.locate(0, Direction::Forward, false), LineSpan::new(0, 2));

    let unicode = Blocks::new(&doc[..], Blank::Unicode);
    assert_eq!(unicode.locate(0, Direction::Forward, false), LineSpan::point(0));
  }

  #[test]
  fn unicode_spaces_are_blank_by_default() {
    let doc = ropey::Rope::from("one\n\u{00A0}\u{3000}\ntwo\n");
    assert_eq!(locate(&doc, 0, Direction::Forward, false), LineSpan::point(0));
    assert_eq!(locate(&doc, 2, Direction::Backward, false), LineSpan::point(2));
    assert_eq!(locate(&doc, 0, Direction::Forward, true), LineSpan::new(0, 1));
  }

  #[test]
  fn out_of_range_line_is_clamped() {
    assert_eq!(locate(DOC, 100, Direction::Forward, true), LineSpan::point(6));
  }

  #[test]
  fn single_line_document() {
    let doc = ["only"];
    assert_eq!(locate(&doc[..], 0, Direction::Forward, true), LineSpan::point(0));
    assert_eq!(locate(&doc[..], 0, Direction::Backward, false), LineSpan::point(0));
  }

  #[test]
  fn non_blank_searches() {
    let blocks = Blocks::new(DOC, Blank::default());

    assert_eq!(blocks.next_non_blank(2), Some(3));
    assert_eq!(blocks.next_non_blank(3), Some(3));
    assert_eq!(blocks.next_non_blank(5), None);
    assert_eq!(blocks.next_non_blank(7), None);
    assert_eq!(blocks.prev_non_blank(2), Some(1));
    assert_eq!(blocks.prev_non_blank(0), Some(0));
    assert_eq!(blocks.prev_non_blank(50), Some(4));

    let doc = ["", " ", "x"];
    let blocks = Blocks::new(&doc[..], Blank::default());
    assert_eq!(blocks.prev_non_blank(1), None);
  }

  quickcheck! {
    fn located_block_is_maximal(shape: Vec<u8>, line: usize) -> bool {
      let doc = doc_from_shape(&shape);
      let blocks = Blocks::new(&doc, Blank::default());
      let line = line % doc.line_count();
      if blocks.is_blank(line) {
        return true;
      }

      let span = blocks.locate(line, Direction::Forward, false);
      span.contains(line)
        && span.lines().all(|l| !blocks.is_blank(l))
        && (span.start == 0 || blocks.is_blank(span.start - 1))
        && (span.end == doc.line_count() - 1 || blocks.is_blank(span.end + 1))
    }

    fn directions_agree_without_trailing_line(shape: Vec<u8>, line: usize) -> bool {
      let doc = doc_from_shape(&shape);
      let blocks = Blocks::new(&doc, Blank::default());
      let line = line % doc.line_count();

      blocks.locate(line, Direction::Forward, false) == blocks.locate(line, Direction::Backward, false)
    }

    fn at_most_one_trailing_blank_line(shape: Vec<u8>, line: usize) -> bool {
      let doc = doc_from_shape(&shape);
      let blocks = Blocks::new(&doc, Blank::default());
      let line = line % doc.line_count();
      if blocks.is_blank(line) {
        return true;
      }

      let span = blocks.locate(line, Direction::Forward, true);
      let blank_lines: Vec<usize> = span.lines().filter(|&l| blocks.is_blank(l)).collect();
      !blocks.is_blank(span.start) && (blank_lines.is_empty() || blank_lines == [span.end])
    }
  }
}
