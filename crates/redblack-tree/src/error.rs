use core::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TreeError {
  /// `find_min`/`find_max` on a tree without a real root.
  Empty,
  /// Deletion is not implemented.
  Unsupported,
  RedRoot,
  RedSentinel,
  RedViolation,
  BlackHeightMismatch { left: usize, right: usize },
  OrderViolation,
}

pub type TreeResult<T> = Result<T, TreeError>;

impl fmt::Display for TreeError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Empty => f.write_str("red black tree is empty"),
      Self::Unsupported => f.write_str("operation not supported"),
      Self::RedRoot => f.write_str("root node is red"),
      Self::RedSentinel => f.write_str("nil sentinel is red"),
      Self::RedViolation => f.write_str("red node has a red child"),
      Self::BlackHeightMismatch { left, right } => {
        write!(f, "black height mismatch: left {left}, right {right}")
      }
      Self::OrderViolation => f.write_str("in-order sequence is not strictly increasing"),
    }
  }
}

impl core::error::Error for TreeError {}
