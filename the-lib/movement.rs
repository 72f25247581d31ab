//! Search direction for block location and selection movement.
//!
//! ```ignore
//! use the_blocks_lib::{movement::Direction, selection::Selection};
//!
//! let selection = Selection::new((4, 0).into(), (1, 0).into());
//! assert_eq!(selection.direction(), Direction::Backward);
//! ```

/// The direction of a block search or of a selection's head.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
  /// Toward the end of the document (increasing lines).
  Forward,
  /// Toward the start of the document (decreasing lines).
  Backward,
}
