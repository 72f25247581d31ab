//! Selecting contiguous blocks of non-empty lines.
//!
//! [`block`] finds the block around a line, [`block_select`] decides whether a
//! call repeats the previous one and computes the next selection, and
//! [`command`] wraps both as host-editor commands.

pub mod block;
pub mod block_select;
pub mod command;
pub mod movement;
pub mod position;
pub mod selection;

pub use the_blocks_core::text::{
  Blank,
  LineSource,
};
