use alloc::vec::Vec;

use log::trace;
use redblack_tree::{
  BalancedTree,
  TreeResult,
};
use spin::RwLock;

/// [`BalancedTree`] behind a spin `RwLock`.
///
/// Lookups never write to the tree (the nil sentinel is matched by slot, not
/// by a scratch key), so readers share the lock and only writers exclude.
pub struct SharedTree<T> {
  inner: RwLock<BalancedTree<T>>,
}

impl<T> SharedTree<T> {
  pub fn new() -> Self {
    Self::from_tree(BalancedTree::new())
  }

  pub fn with_capacity(capacity: usize) -> Self {
    Self::from_tree(BalancedTree::with_capacity(capacity))
  }

  pub const fn from_tree(tree: BalancedTree<T>) -> Self {
    Self {
      inner: RwLock::new(tree),
    }
  }

  pub fn into_inner(self) -> BalancedTree<T> {
    self.inner.into_inner()
  }

  pub fn read<R>(&self, f: impl FnOnce(&BalancedTree<T>) -> R) -> R {
    let guard = self.inner.read();
    f(&*guard)
  }

  pub fn write<R>(&self, f: impl FnOnce(&mut BalancedTree<T>) -> R) -> R {
    let mut guard = self.inner.write();
    f(&mut *guard)
  }

  pub fn len(&self) -> usize {
    self.read(BalancedTree::len)
  }

  pub fn is_empty(&self) -> bool {
    self.read(BalancedTree::is_empty)
  }

  pub fn make_empty(&self) {
    trace!("shared make_empty");
    self.write(BalancedTree::make_empty)
  }
}

impl<T> SharedTree<T>
where
  T: Ord,
{
  pub fn insert(&self, item: T) -> bool {
    self.write(|tree| tree.insert(item))
  }

  pub fn remove(&self, item: &T) -> TreeResult<()> {
    self.write(|tree| tree.remove(item))
  }

  pub fn contains(&self, item: &T) -> bool {
    self.read(|tree| tree.contains(item))
  }
}

impl<T> SharedTree<T>
where
  T: Ord + Clone,
{
  pub fn find_min(&self) -> TreeResult<T> {
    self.read(|tree| tree.find_min().cloned())
  }

  pub fn find_max(&self) -> TreeResult<T> {
    self.read(|tree| tree.find_max().cloned())
  }

  /// Ascending copy of the elements taken under one read lock.
  pub fn snapshot(&self) -> Vec<T> {
    self.read(|tree| tree.iter().cloned().collect())
  }
}

impl<T> Default for SharedTree<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> From<BalancedTree<T>> for SharedTree<T> {
  fn from(tree: BalancedTree<T>) -> Self {
    Self::from_tree(tree)
  }
}
