use ropey::RopeSlice;

/// Line breaks recognized by ropey with its default `unicode_lines` feature.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum LineEnding {
  /// CarriageReturn followed by LineFeed.
  Crlf,
  /// U+000A -- LineFeed
  LF,
  /// U+000B -- VerticalTab
  VT,
  /// U+000C -- FormFeed
  FF,
  /// U+000D -- CarriageReturn
  CR,
  /// U+0085 -- NextLine
  Nel,
  /// U+2028 -- Line Separator
  LS,
  /// U+2029 -- ParagraphSeparator
  PS,
}

impl LineEnding {
  #[inline]
  pub const fn len_chars(&self) -> usize {
    match self {
      Self::Crlf => 2,
      _ => 1,
    }
  }

  #[inline]
  pub const fn from_char(ch: char) -> Option<LineEnding> {
    match ch {
      '\u{000A}' => Some(LineEnding::LF),
      '\u{000B}' => Some(LineEnding::VT),
      '\u{000C}' => Some(LineEnding::FF),
      '\u{000D}' => Some(LineEnding::CR),
      '\u{0085}' => Some(LineEnding::Nel),
      '\u{2028}' => Some(LineEnding::LS),
      '\u{2029}' => Some(LineEnding::PS),
      _ => None,
    }
  }
}

/// Returns the passed line's line ending, if any.
pub fn get_line_ending(line: &RopeSlice) -> Option<LineEnding> {
  let len = line.len_chars();
  let last = line.get_char(len.checked_sub(1)?)?;

  // Ropey guarantees CRLF is never split across lines, so checking the
  // preceding char is enough.
  if last == '\n' && len >= 2 && line.get_char(len - 2) == Some('\r') {
    return Some(LineEnding::Crlf);
  }
  LineEnding::from_char(last)
}

/// Returns the passed line's line ending, if any.
pub fn get_line_ending_of_str(line: &str) -> Option<LineEnding> {
  if line.ends_with("\u{000D}\u{000A}") {
    return Some(LineEnding::Crlf);
  }
  line.chars().next_back().and_then(LineEnding::from_char)
}

/// Strips one trailing line ending from `line`.
pub fn str_without_line_ending(line: &str) -> &str {
  match get_line_ending_of_str(line) {
    Some(LineEnding::Crlf) => &line[..line.len() - 2],
    // NEL, LS and PS are multi-byte, so cut at the last char boundary.
    Some(_) => {
      let cut = line.char_indices().next_back().map_or(0, |(idx, _)| idx);
      &line[..cut]
    },
    None => line,
  }
}

/// Returns the char index of the end of the given line, not including its line
/// ending.
pub fn line_end_char_index(slice: &RopeSlice, line: usize) -> usize {
  slice.line_to_char(line + 1)
    - get_line_ending(&slice.line(line))
      .map(|le| le.len_chars())
      .unwrap_or(0)
}

/// Get line `line_idx` from the passed rope slice, sans any line ending.
pub fn line_without_line_ending<'a>(slice: &RopeSlice<'a>, line_idx: usize) -> RopeSlice<'a> {
  let start = slice.line_to_char(line_idx);
  let end = line_end_char_index(slice, line_idx);
  slice.slice(start..end)
}
