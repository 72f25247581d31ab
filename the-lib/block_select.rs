//! Repeatable block selection.
//!
//! Each [`BlockMode`] remembers the last selection it produced. When it is
//! invoked again and the live selection still equals that remembered one, the
//! call is a *repeat* and builds on it: ExpandForward grows the selection over
//! the next block, MoveForward jumps to the next block, MoveBackward jumps to
//! the previous block. Otherwise the call is *fresh* and selects the block
//! under the cursor, ignoring whatever was remembered.
//!
//! ```text
//!   line  text    ExpandForward      MoveBackward (cursor on 4)
//!   0     a       ┐ fresh  ┐ repeat  ┐ repeat
//!   1     b       ┘        │         ┘
//!   2                      │
//!   3     c                │         ┐ fresh
//!   4     d                │         ┘
//!   5                      ┘
//!   6
//! ```
//!
//! Remembered selections live in a [`BlockSelectState`] owned by the caller,
//! one per editor session. The modes never share a slot.
//!
//! Reaching the edge of the document is not an error: a repeat with no
//! non-blank line left in its direction returns the remembered selection
//! unchanged and leaves the state alone.

use serde::{
  Deserialize,
  Serialize,
};
use the_blocks_core::text::{
  Blank,
  LineSource,
};

use crate::{
  block::Blocks,
  movement::Direction,
  selection::{
    LineSpan,
    Selection,
  },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockMode {
  ExpandForward,
  MoveForward,
  MoveBackward,
}

impl BlockMode {
  pub const ALL: [BlockMode; 3] = [Self::ExpandForward, Self::MoveForward, Self::MoveBackward];

  pub const fn direction(self) -> Direction {
    match self {
      Self::ExpandForward | Self::MoveForward => Direction::Forward,
      Self::MoveBackward => Direction::Backward,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct BlockSelectConfig {
  /// Which lines separate blocks.
  pub blank_lines:         Blank,
  /// Whether forward modes also take the blank line right after a block.
  pub trailing_empty_line: bool,
}

impl Default for BlockSelectConfig {
  fn default() -> Self {
    Self {
      blank_lines:         Blank::default(),
      trailing_empty_line: true,
    }
  }
}

impl BlockSelectConfig {
  fn includes_trailing_empty(&self, mode: BlockMode) -> bool {
    self.trailing_empty_line && mode.direction() == Direction::Forward
  }
}

/// Last selection produced by each mode.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BlockSelectState {
  expand_forward: Option<Selection>,
  move_forward:   Option<Selection>,
  move_backward:  Option<Selection>,
}

impl BlockSelectState {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn get(&self, mode: BlockMode) -> Option<Selection> {
    match mode {
      BlockMode::ExpandForward => self.expand_forward,
      BlockMode::MoveForward => self.move_forward,
      BlockMode::MoveBackward => self.move_backward,
    }
  }

  pub fn set(&mut self, mode: BlockMode, selection: Selection) {
    *self.slot_mut(mode) = Some(selection);
  }

  pub fn clear(&mut self) {
    *self = Self::default();
  }

  fn slot_mut(&mut self, mode: BlockMode) -> &mut Option<Selection> {
    match mode {
      BlockMode::ExpandForward => &mut self.expand_forward,
      BlockMode::MoveForward => &mut self.move_forward,
      BlockMode::MoveBackward => &mut self.move_backward,
    }
  }
}

/// Compute the selection `mode` produces from `current` and remember it.
///
/// `current` is the live selection in the editor. If it equals what `mode`
/// remembered, the call is a repeat; otherwise the block under the cursor
/// (the head's line) is selected.
pub fn select_block<S: LineSource + ?Sized>(
  source: &S,
  mode: BlockMode,
  current: Selection,
  state: &mut BlockSelectState,
  config: &BlockSelectConfig,
) -> Selection {
  let blocks = Blocks::new(source, config.blank_lines);

  let span = match state.get(mode) {
    Some(remembered) if remembered == current => {
      let Some(span) = repeat_span(&blocks, mode, remembered.line_span(), config) else {
        tracing::debug!("{mode:?}: no block beyond {remembered}, keeping selection");
        return remembered;
      };
      tracing::trace!("{mode:?}: repeat from {remembered} -> {span}");
      span
    },
    _ => {
      let line = current.active().row;
      let span = blocks.locate(line, mode.direction(), config.includes_trailing_empty(mode));
      tracing::trace!("{mode:?}: fresh at line {line} -> {span}");
      span
    },
  };

  let selection = span.to_selection(source);
  state.set(mode, selection);
  selection
}

fn repeat_span<S: LineSource + ?Sized>(
  blocks: &Blocks<'_, S>,
  mode: BlockMode,
  previous: LineSpan,
  config: &BlockSelectConfig,
) -> Option<LineSpan> {
  let trailing = config.includes_trailing_empty(mode);

  match mode {
    BlockMode::ExpandForward => {
      let next = blocks.next_non_blank(previous.end + 1)?;
      let found = blocks.locate(next, Direction::Forward, trailing);
      Some(LineSpan::new(previous.start, found.end))
    },
    BlockMode::MoveForward => {
      let next = blocks.next_non_blank(previous.end + 1)?;
      Some(blocks.locate(next, Direction::Forward, trailing))
    },
    BlockMode::MoveBackward => {
      let above = previous.start.checked_sub(1)?;
      let prev = blocks.prev_non_blank(above)?;
      Some(blocks.locate(prev, Direction::Backward, false))
    },
  }
}
