use std::fmt;

/// This is a single point in a text buffer.
/// 0-indexed as all things should be. `col` counts chars.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
  pub row: usize,
  pub col: usize,
}

impl Position {
  pub const fn new(row: usize, col: usize) -> Self {
    Self { row, col }
  }

  pub const fn zero() -> Self {
    Self { row: 0, col: 0 }
  }
}

impl From<(usize, usize)> for Position {
  fn from(value: (usize, usize)) -> Self {
    Position::new(value.0, value.1)
  }
}

impl fmt::Display for Position {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}:{}", self.row, self.col)
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn ordering_is_row_major() {
    assert!(Position::new(0, 10) < Position::new(1, 0));
    assert!(Position::new(2, 1) > Position::new(2, 0));
    assert_eq!(Position::from((3, 4)), Position::new(3, 4));
    assert_eq!(Position::zero(), Position::default());
    assert_eq!(Position::new(5, 2).to_string(), "5:2");
  }
}
