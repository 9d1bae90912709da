use alloc::vec::Vec;

use crate::{
  node::{
    Color,
    NIL,
  },
  tree::BalancedTree,
};

/// Explicit-stack in-order walk over arena slots, skipping sentinels.
struct InOrder<'tree, T> {
  tree: &'tree BalancedTree<T>,
  stack: Vec<usize>,
  remaining: usize,
}

impl<'tree, T> InOrder<'tree, T> {
  fn new(tree: &'tree BalancedTree<T>) -> Self {
    let mut walk = Self {
      tree,
      stack: Vec::new(),
      remaining: tree.len(),
    };
    walk.push_left_spine(tree.root());
    walk
  }

  fn push_left_spine(&mut self, mut id: usize) {
    while id != NIL {
      self.stack.push(id);
      id = self.tree.links[id].left;
    }
  }

  fn next_id(&mut self) -> Option<usize> {
    let id = self.stack.pop()?;
    self.push_left_spine(self.tree.links[id].right);
    self.remaining -= 1;
    Some(id)
  }
}

/// Ascending iterator over the elements of a [`BalancedTree`].
pub struct Iter<'tree, T> {
  walk: InOrder<'tree, T>,
}

impl<'tree, T> Iter<'tree, T> {
  pub(crate) fn new(tree: &'tree BalancedTree<T>) -> Self {
    Self {
      walk: InOrder::new(tree),
    }
  }
}

impl<'tree, T> Iterator for Iter<'tree, T> {
  type Item = &'tree T;

  fn next(&mut self) -> Option<Self::Item> {
    let id = self.walk.next_id()?;
    Some(self.walk.tree.element(id))
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.walk.remaining, Some(self.walk.remaining))
  }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Ascending iterator yielding each element with its node color.
pub struct Colored<'tree, T> {
  walk: InOrder<'tree, T>,
}

impl<'tree, T> Colored<'tree, T> {
  pub(crate) fn new(tree: &'tree BalancedTree<T>) -> Self {
    Self {
      walk: InOrder::new(tree),
    }
  }
}

impl<'tree, T> Iterator for Colored<'tree, T> {
  type Item = (Color, &'tree T);

  fn next(&mut self) -> Option<Self::Item> {
    let id = self.walk.next_id()?;
    let tree = self.walk.tree;
    Some((tree.links[id].color(), tree.element(id)))
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.walk.remaining, Some(self.walk.remaining))
  }
}

impl<T> ExactSizeIterator for Colored<'_, T> {}
