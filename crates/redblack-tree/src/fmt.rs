use core::fmt;

use crate::tree::BalancedTree;

/// Renders every node in order as `[Color: Black] 10 - `.
pub struct Dump<'tree, T> {
  tree: &'tree BalancedTree<T>,
}

impl<'tree, T> Dump<'tree, T> {
  pub(crate) fn new(tree: &'tree BalancedTree<T>) -> Self {
    Self { tree }
  }
}

impl<T> fmt::Display for Dump<'_, T>
where
  T: fmt::Display,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (color, element) in self.tree.colored() {
      write!(f, "[Color: {color}] {element} - ")?;
    }
    Ok(())
  }
}
