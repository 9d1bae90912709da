use core::fmt;

use getset::CopyGetters;

/// Arena slot of the shared nil sentinel. Its links point back at itself.
pub(crate) const NIL: usize = 0;
/// Arena slot of the header. `header.right` is the real root.
pub(crate) const HEADER: usize = 1;
/// First slot holding a real element.
pub(crate) const FIRST: usize = 2;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Color {
  Red,
  #[default]
  Black,
}

impl fmt::Display for Color {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Red => f.write_str("Red"),
      Self::Black => f.write_str("Black"),
    }
  }
}

/// Downward links and color of one arena slot. There are no parent links;
/// insertion threads its ancestors through a [`Path`] instead.
#[derive(Debug, PartialEq, Eq, Clone, Copy, CopyGetters)]
pub struct RbLink {
  #[getset(get_copy = "pub")]
  pub(crate) left: usize,
  #[getset(get_copy = "pub")]
  pub(crate) right: usize,
  #[getset(get_copy = "pub")]
  pub(crate) color: Color,
}

impl RbLink {
  pub(crate) const fn sentinel() -> Self {
    Self {
      left: NIL,
      right: NIL,
      color: Color::Black,
    }
  }

  pub(crate) const fn leaf() -> Self {
    Self {
      left: NIL,
      right: NIL,
      color: Color::Red,
    }
  }

  #[inline(always)]
  pub(crate) fn is_red(&self) -> bool {
    self.color == Color::Red
  }
}

/// Ancestor chain tracked while descending during insertion.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Path {
  pub(crate) current: usize,
  pub(crate) parent: usize,
  pub(crate) grand: usize,
  pub(crate) great: usize,
}

impl Path {
  pub(crate) const fn new() -> Self {
    Self {
      current: HEADER,
      parent: HEADER,
      grand: HEADER,
      great: HEADER,
    }
  }

  #[inline(always)]
  pub(crate) fn step(&mut self, next: usize) {
    self.great = self.grand;
    self.grand = self.parent;
    self.parent = self.current;
    self.current = next;
  }
}
