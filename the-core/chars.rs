//! Character classification used to decide whether a line has content.

use crate::line_ending::LineEnding;

#[inline]
pub fn char_is_line_ending(ch: char) -> bool {
  LineEnding::from_char(ch).is_some()
}

/// The two characters classic editors treat as indentation: U+0020 and U+0009.
#[inline]
pub fn char_is_space_or_tab(ch: char) -> bool {
  matches!(ch, ' ' | '\t')
}

/// Whitespace that can appear inside a line: the Unicode space separators
/// plus tab, vertical tab, form feed and the byte order mark. Line endings
/// are excluded since they end the line.
#[inline]
pub fn char_is_whitespace(ch: char) -> bool {
  match ch {
      '\u{0009}' | // Character Tabulation
      '\u{000B}' | // Line Tabulation
      '\u{000C}' | // Form Feed
      '\u{0020}' | // Space
      '\u{00A0}' | // No-break Space
      '\u{1680}' | // Ogham Space Mark
      '\u{202F}' | // Narrow No-break Space
      '\u{205F}' | // Medium Mathematical Space
      '\u{3000}' | // Ideographic Space
      '\u{FEFF}'   // Zero Width No-break Space
      => true,

      // En Quad through Hair Space.
      ch if ('\u{2000}' ..= '\u{200A}').contains(&ch) => true,

      _ => false,
    }
}
