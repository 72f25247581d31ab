//! Read-only access to a document's lines.
//!
//! [`LineSource`] is the only view of a document the block selection code
//! needs: how many lines there are, what each line says, and whether a line
//! is blank. Anything that can answer those questions (a [`Rope`], a slice of
//! strings, a host editor's buffer snapshot) can be searched for blocks.
//!
//! Line contents never include the line ending. Columns are counted in
//! `char`s.
//!
//! # Blank lines
//!
//! What counts as blank is decided by [`Blank`]:
//!
//! - [`Blank::Unicode`] (default) - the line is empty or holds only chars
//!   accepted by [`char_is_whitespace`]
//! - [`Blank::SpacesAndTabs`] - the line is empty or holds only U+0020 and
//!   U+0009
//!
//! ```ignore
//! use ropey::Rope;
//! use the_blocks_core::text::{Blank, LineSource};
//!
//! let doc = Rope::from("fn main() {\n  \n}\n");
//! assert!(!doc.is_blank(0, Blank::SpacesAndTabs));
//! assert!(doc.is_blank(1, Blank::SpacesAndTabs));
//! ```

use std::borrow::Cow;

use ropey::{
  Rope,
  RopeSlice,
};
use serde::{
  Deserialize,
  Serialize,
};

use crate::{
  chars::{
    char_is_space_or_tab,
    char_is_whitespace,
  },
  line_ending::{
    line_without_line_ending,
    str_without_line_ending,
  },
};

/// Which characters a line may consist of and still count as blank.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Blank {
  #[default]
  Unicode,
  SpacesAndTabs,
}

impl Blank {
  #[inline]
  pub fn accepts(self, ch: char) -> bool {
    match self {
      Self::SpacesAndTabs => char_is_space_or_tab(ch),
      Self::Unicode => char_is_whitespace(ch),
    }
  }

  pub fn is_blank_str(self, line: &str) -> bool {
    line.chars().all(|ch| self.accepts(ch))
  }

  pub fn is_blank_slice(self, line: RopeSlice) -> bool {
    line.chars().all(|ch| self.accepts(ch))
  }
}

/// A document seen as an indexed sequence of lines.
///
/// Implementors must have at least one line; an empty document is a single
/// empty line, the way ropey counts it.
pub trait LineSource {
  fn line_count(&self) -> usize;

  /// Contents of `line` without its line ending.
  ///
  /// Panics if `line >= self.line_count()`.
  fn line_text(&self, line: usize) -> Cow<'_, str>;

  /// Length of `line` in chars, excluding its line ending.
  fn line_len_chars(&self, line: usize) -> usize {
    self.line_text(line).chars().count()
  }

  fn is_blank(&self, line: usize, blank: Blank) -> bool {
    blank.is_blank_str(&self.line_text(line))
  }

  #[inline]
  fn last_line(&self) -> usize {
    self.line_count().saturating_sub(1)
  }
}

impl LineSource for RopeSlice<'_> {
  fn line_count(&self) -> usize {
    self.len_lines()
  }

  fn line_text(&self, line: usize) -> Cow<'_, str> {
    line_without_line_ending(self, line).into()
  }

  fn line_len_chars(&self, line: usize) -> usize {
    line_without_line_ending(self, line).len_chars()
  }

  fn is_blank(&self, line: usize, blank: Blank) -> bool {
    blank.is_blank_slice(line_without_line_ending(self, line))
  }
}

impl LineSource for Rope {
  fn line_count(&self) -> usize {
    self.len_lines()
  }

  fn line_text(&self, line: usize) -> Cow<'_, str> {
    line_without_line_ending(&self.slice(..), line).into()
  }

  fn line_len_chars(&self, line: usize) -> usize {
    line_without_line_ending(&self.slice(..), line).len_chars()
  }

  fn is_blank(&self, line: usize, blank: Blank) -> bool {
    blank.is_blank_slice(line_without_line_ending(&self.slice(..), line))
  }
}

/// Each element is one line. A trailing line ending on an element is ignored,
/// so the output of `str::split_inclusive('\n')` works as well as
/// `str::lines`.
impl<S: AsRef<str>> LineSource for [S] {
  fn line_count(&self) -> usize {
    self.len().max(1)
  }

  fn line_text(&self, line: usize) -> Cow<'_, str> {
    if self.is_empty() && line == 0 {
      return Cow::Borrowed("");
    }
    Cow::Borrowed(str_without_line_ending(self[line].as_ref()))
  }
}

impl<S: AsRef<str>> LineSource for Vec<S> {
  fn line_count(&self) -> usize {
    self.as_slice().line_count()
  }

  fn line_text(&self, line: usize) -> Cow<'_, str> {
    self.as_slice().line_text(line)
  }
}

impl<T: LineSource + ?Sized> LineSource for &T {
  fn line_count(&self) -> usize {
    (**self).line_count()
  }

  fn line_text(&self, line: usize) -> Cow<'_, str> {
    (**self).line_text(line)
  }

  fn line_len_chars(&self, line: usize) -> usize {
    (**self).line_len_chars(line)
  }

  fn is_blank(&self, line: usize, blank: Blank) -> bool {
    (**self).is_blank(line, blank)
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn rope_lines() {
    let doc = Rope::from("alpha\r\n \t\nbeta\n");

    // The trailing newline opens an empty last line.
    assert_eq!(doc.line_count(), 4);
    assert_eq!(doc.line_text(0), "alpha");
    assert_eq!(doc.line_len_chars(0), 5);
    assert!(!doc.is_blank(0, Blank::SpacesAndTabs));
    assert!(doc.is_blank(1, Blank::SpacesAndTabs));
    assert!(!doc.is_blank(2, Blank::SpacesAndTabs));
    assert!(doc.is_blank(3, Blank::SpacesAndTabs));
    assert_eq!(doc.last_line(), 3);
  }

  #[test]
  fn rope_slice_matches_rope() {
    let doc = Rope::from("x\n\ny");
    let slice = doc.slice(..);

    assert_eq!(slice.line_count(), doc.line_count());
    for line in 0..doc.line_count() {
      assert_eq!(slice.line_text(line), doc.line_text(line));
      assert_eq!(
        slice.is_blank(line, Blank::SpacesAndTabs),
        doc.is_blank(line, Blank::SpacesAndTabs)
      );
    }
  }

  #[test]
  fn blank_policies_differ_on_unicode_spaces() {
    let doc = vec!["\u{00A0}\u{3000}", "  ", ""];

    assert!(!doc.is_blank(0, Blank::SpacesAndTabs));
    assert!(doc.is_blank(0, Blank::Unicode));
    assert!(doc.is_blank(1, Blank::SpacesAndTabs));
    assert!(doc.is_blank(2, Blank::SpacesAndTabs));
    assert!(doc.is_blank(2, Blank::Unicode));
    assert_eq!(Blank::default(), Blank::Unicode);
  }

  #[test]
  fn string_slices_ignore_line_endings() {
    let text = "one\r\ntwo\n";
    let lines: Vec<&str> = text.split_inclusive('\n').collect();

    assert_eq!(lines.line_count(), 2);
    assert_eq!(lines.line_text(0), "one");
    assert_eq!(lines.line_len_chars(1), 3);
  }

  #[test]
  fn empty_slice_is_one_empty_line() {
    let lines: Vec<String> = Vec::new();

    assert_eq!(lines.line_count(), 1);
    assert_eq!(lines.line_text(0), "");
    assert!(lines.is_blank(0, Blank::SpacesAndTabs));
  }

  #[test]
  fn blank_deserializes_kebab_case() {
    #[derive(Deserialize)]
    struct Wrapper {
      blank: Blank,
    }

    let parsed: Wrapper = toml::from_str("blank = \"unicode\"").unwrap();
    assert_eq!(parsed.blank, Blank::Unicode);
    let parsed: Wrapper = toml::from_str("blank = \"spaces-and-tabs\"").unwrap();
    assert_eq!(parsed.blank, Blank::SpacesAndTabs);
  }
}
