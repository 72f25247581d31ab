//! Host-editor commands for block selection.
//!
//! A host registers the three [`BlockCommand`]s under their [`id`]s and runs
//! them through a [`BlockSelectSession`], one session per editor window. The
//! host only has to expose its active editor through [`Host`] and
//! [`BlockEditor`].
//!
//! [`id`]: BlockCommand::id

use std::{
  fmt,
  str::FromStr,
};

use the_blocks_core::text::LineSource;
use thiserror::Error;

use crate::{
  block_select::{
    BlockMode,
    BlockSelectConfig,
    BlockSelectState,
    select_block,
  },
  position::Position,
  selection::Selection,
};

pub type Result<T> = std::result::Result<T, CommandError>;

#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum CommandError {
  #[error("unknown command: {name}")]
  Unknown { name: String },
}

/// The active editor as seen by block selection.
pub trait BlockEditor {
  type Document: LineSource + ?Sized;

  /// Snapshot of the document; it must not change during one command.
  fn document(&self) -> &Self::Document;
  fn selection(&self) -> Selection;
  fn set_selection(&mut self, selection: Selection);
  /// Scroll so that `pos` is visible.
  fn reveal(&mut self, pos: Position);
}

pub trait Host {
  type Editor: BlockEditor;

  fn active_editor(&mut self) -> Option<&mut Self::Editor>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockCommand {
  ExpandForward,
  MoveForward,
  MoveBackward,
}

impl BlockCommand {
  pub const ALL: [BlockCommand; 3] = [Self::ExpandForward, Self::MoveForward, Self::MoveBackward];

  /// Identifier the command is registered under.
  pub const fn id(self) -> &'static str {
    match self {
      Self::ExpandForward => "selectContiguousNonEmptyLinesExpandForward",
      Self::MoveForward => "selectContiguousNonEmptyLinesMoveForward",
      Self::MoveBackward => "selectContiguousNonEmptyLinesMoveBackward",
    }
  }

  pub const fn alias(self) -> &'static str {
    match self {
      Self::ExpandForward => "select_block_expand_forward",
      Self::MoveForward => "select_block_move_forward",
      Self::MoveBackward => "select_block_move_backward",
    }
  }

  /// Short spelling used on the command line.
  pub const fn short_name(self) -> &'static str {
    match self {
      Self::ExpandForward => "expand-forward",
      Self::MoveForward => "move-forward",
      Self::MoveBackward => "move-backward",
    }
  }

  pub const fn doc(self) -> &'static str {
    match self {
      Self::ExpandForward => "Extend the selection over the next block of non-empty lines",
      Self::MoveForward => "Select the next block of non-empty lines",
      Self::MoveBackward => "Select the previous block of non-empty lines",
    }
  }

  pub const fn mode(self) -> BlockMode {
    match self {
      Self::ExpandForward => BlockMode::ExpandForward,
      Self::MoveForward => BlockMode::MoveForward,
      Self::MoveBackward => BlockMode::MoveBackward,
    }
  }

  /// Position to scroll into view after the command: the end of the
  /// selection for forward commands, its start for backward ones.
  pub fn reveal_target(self, selection: &Selection) -> Position {
    match self {
      Self::ExpandForward | Self::MoveForward => selection.end(),
      Self::MoveBackward => selection.start(),
    }
  }
}

impl fmt::Display for BlockCommand {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.id())
  }
}

impl FromStr for BlockCommand {
  type Err = CommandError;

  fn from_str(name: &str) -> Result<Self> {
    let trimmed = name.trim();
    let trimmed = trimmed.strip_prefix("extension.").unwrap_or(trimmed);

    Self::ALL
      .into_iter()
      .find(|command| {
        command.id() == trimmed || command.alias() == trimmed || command.short_name() == trimmed
      })
      .ok_or_else(|| {
        CommandError::Unknown {
          name: name.to_string(),
        }
      })
  }
}

/// Remembered selections and settings for one editor session.
#[derive(Debug, Default, Clone)]
pub struct BlockSelectSession {
  state:  BlockSelectState,
  config: BlockSelectConfig,
}

impl BlockSelectSession {
  pub fn new(config: BlockSelectConfig) -> Self {
    Self {
      state: BlockSelectState::new(),
      config,
    }
  }

  pub fn config(&self) -> &BlockSelectConfig {
    &self.config
  }

  pub fn set_config(&mut self, config: BlockSelectConfig) {
    self.config = config;
  }

  pub fn state(&self) -> &BlockSelectState {
    &self.state
  }

  /// Forget every remembered selection, e.g. when the active document changes.
  pub fn reset(&mut self) {
    self.state.clear();
  }

  /// Run `command` on the host's active editor.
  ///
  /// Returns `false` without doing anything when there is no active editor.
  pub fn execute<H: Host>(&mut self, command: BlockCommand, host: &mut H) -> bool {
    let Some(editor) = host.active_editor() else {
      tracing::debug!("{command}: no active editor");
      return false;
    };
    self.run(command, editor);
    true
  }

  /// Run `command` on `editor`, select the result and reveal it.
  pub fn run<E: BlockEditor + ?Sized>(&mut self, command: BlockCommand, editor: &mut E) -> Selection {
    let selection = select_block(
      editor.document(),
      command.mode(),
      editor.selection(),
      &mut self.state,
      &self.config,
    );

    editor.set_selection(selection);
    editor.reveal(command.reveal_target(&selection));
    selection
  }
}
