//! A file opened into a rope, with a single cursor.

use std::{
  fs::File,
  io::BufReader,
  path::{
    Path,
    PathBuf,
  },
};

use anyhow::{
  Context,
  Result,
};
use ropey::Rope;
use the_blocks_core::text::LineSource;
use the_blocks_lib::{
  command::BlockEditor,
  position::Position,
  selection::Selection,
};

#[derive(Debug)]
pub struct Buffer {
  path:      PathBuf,
  text:      Rope,
  selection: Selection,
  /// Last position scrolled into view.
  revealed:  Option<Position>,
}

impl Buffer {
  pub fn open(path: &Path, cursor: Position) -> Result<Self> {
    let file =
      File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let text = Rope::from_reader(BufReader::new(file))
      .with_context(|| format!("failed to read {}", path.display()))?;
    Self::from_rope(path.to_path_buf(), text, cursor)
  }

  pub fn from_rope(path: PathBuf, text: Rope, cursor: Position) -> Result<Self> {
    let line_count = text.line_count();
    if cursor.row >= line_count {
      anyhow::bail!(
        "line {} is past the end of {} ({line_count} lines)",
        cursor.row + 1,
        path.display()
      );
    }

    // Columns past the end of the line land on the line end.
    let col = cursor.col.min(text.line_len_chars(cursor.row));
    log::debug!(
      "opened {} with {line_count} lines, cursor at {}:{col}",
      path.display(),
      cursor.row
    );

    Ok(Self {
      path,
      text,
      selection: Selection::point(Position::new(cursor.row, col)),
      revealed: None,
    })
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  pub fn revealed(&self) -> Option<Position> {
    self.revealed
  }

  fn char_idx(&self, pos: Position) -> usize {
    self.text.line_to_char(pos.row) + pos.col
  }

  /// The selection as `LINE:COL-LINE:COL`, both 1-based.
  pub fn selection_label(&self) -> String {
    let start = self.selection.start();
    let end = self.selection.end();
    format!(
      "{}:{}-{}:{}",
      start.row + 1,
      start.col + 1,
      end.row + 1,
      end.col + 1
    )
  }

  pub fn selected_text(&self) -> String {
    let start = self.char_idx(self.selection.start());
    let end = self.char_idx(self.selection.end());
    self.text.slice(start..end).to_string()
  }
}

impl BlockEditor for Buffer {
  type Document = Rope;

  fn document(&self) -> &Rope {
    &self.text
  }

  fn selection(&self) -> Selection {
    self.selection
  }

  fn set_selection(&mut self, selection: Selection) {
    self.selection = selection;
  }

  fn reveal(&mut self, pos: Position) {
    self.revealed = Some(pos);
  }
}
