use core::{
  cmp::Ordering,
  fmt,
};

use alloc::vec::Vec;
use log::debug;

use crate::{
  balance::{
    Balancer,
    compare,
  },
  error::{
    TreeError,
    TreeResult,
  },
  fmt::Dump,
  iter::{
    Colored,
    Iter,
  },
  node::{
    Color,
    FIRST,
    HEADER,
    NIL,
    Path,
    RbLink,
  },
};

/// Red-black tree holding unique elements, balanced top-down on insertion.
///
/// Slot `NIL` of the link arena is the shared sentinel standing in for every
/// missing child, slot `HEADER` sits above the root. Element `i` belongs to
/// link slot `i + FIRST`.
#[derive(Clone)]
pub struct BalancedTree<T> {
  pub(crate) links: Vec<RbLink>,
  pub(crate) elements: Vec<T>,
}

impl<T> BalancedTree<T> {
  pub fn new() -> Self {
    Self::with_capacity(0)
  }

  /// Pre-sizes the arena for `capacity` elements.
  pub fn with_capacity(capacity: usize) -> Self {
    let mut links = Vec::with_capacity(FIRST + capacity);
    links.push(RbLink::sentinel());
    links.push(RbLink::sentinel());

    Self {
      links,
      elements: Vec::with_capacity(capacity),
    }
  }

  #[inline(always)]
  pub(crate) fn root(&self) -> usize {
    self.links[HEADER].right
  }

  #[inline(always)]
  pub(crate) fn element(&self, id: usize) -> &T {
    &self.elements[id - FIRST]
  }

  pub fn len(&self) -> usize {
    self.elements.len()
  }

  pub fn is_empty(&self) -> bool {
    self.root() == NIL
  }

  /// Drops every element and resets the arena to the sentinel and header.
  pub fn make_empty(&mut self) {
    debug!("make_empty: releasing {} nodes", self.elements.len());
    self.links.truncate(FIRST);
    self.links[NIL] = RbLink::sentinel();
    self.links[HEADER] = RbLink::sentinel();
    self.elements.clear();
  }

  pub fn find_min(&self) -> TreeResult<&T> {
    if self.is_empty() {
      return Err(TreeError::Empty);
    }

    let mut itr = self.root();
    while self.links[itr].left != NIL {
      itr = self.links[itr].left;
    }
    Ok(self.element(itr))
  }

  pub fn find_max(&self) -> TreeResult<&T> {
    if self.is_empty() {
      return Err(TreeError::Empty);
    }

    let mut itr = self.root();
    while self.links[itr].right != NIL {
      itr = self.links[itr].right;
    }
    Ok(self.element(itr))
  }

  /// Nodes on the longest path from the root down to a sentinel.
  pub fn height(&self) -> usize {
    self.height_at(self.root())
  }

  fn height_at(&self, id: usize) -> usize {
    if id == NIL {
      return 0;
    }
    let link = self.links[id];
    1 + self.height_at(link.left).max(self.height_at(link.right))
  }

  /// Black real nodes on the leftmost path.
  pub fn black_height(&self) -> usize {
    let mut count = 0;
    let mut itr = self.root();
    while itr != NIL {
      if self.links[itr].color == Color::Black {
        count += 1;
      }
      itr = self.links[itr].left;
    }
    count
  }

  pub fn root_node(&self) -> Option<NodeRef<'_, T>> {
    NodeRef::new(self, self.root())
  }

  pub fn iter(&self) -> Iter<'_, T> {
    Iter::new(self)
  }

  /// In-order walk that also reports each node's color.
  pub fn colored(&self) -> Colored<'_, T> {
    Colored::new(self)
  }

  pub fn dump(&self) -> Dump<'_, T> {
    Dump::new(self)
  }
}

impl<T> BalancedTree<T>
where
  T: Ord,
{
  /// Inserts `item` unless an equal element is already stored. Returns
  /// whether the tree changed; a duplicate leaves it untouched.
  pub fn insert(&mut self, item: T) -> bool {
    if self.contains(&item) {
      return false;
    }

    let mut path = Path::new();
    Balancer::new(&mut self.links, &self.elements).descend(&item, &mut path);
    if path.current != NIL {
      return false;
    }

    let id = self.links.len();
    self.links.push(RbLink::leaf());
    self.elements.push(item);

    let item = &self.elements[id - FIRST];
    Balancer::new(&mut self.links, &self.elements).attach(item, id, &mut path);
    true
  }

  /// Deletion is not implemented; always fails and leaves the tree as is.
  pub fn remove(&mut self, item: &T) -> TreeResult<()> {
    _ = item;
    debug!("remove: rejected, deletion is unsupported");
    Err(TreeError::Unsupported)
  }

  pub fn contains(&self, item: &T) -> bool {
    self.get(item).is_some()
  }

  /// Returns the stored element equal to `item`.
  pub fn get(&self, item: &T) -> Option<&T> {
    let mut current = self.root();
    loop {
      match compare(&self.elements, item, current) {
        Ordering::Less => current = self.links[current].left,
        Ordering::Greater => current = self.links[current].right,
        Ordering::Equal if current != NIL => return Some(self.element(current)),
        Ordering::Equal => return None,
      }
    }
  }

  /// Checks the red-black and ordering invariants, returning the black
  /// height of the root on success.
  pub fn validate(&self) -> TreeResult<usize> {
    if self.links[NIL].color != Color::Black {
      return Err(TreeError::RedSentinel);
    }
    if self.links[self.root()].color != Color::Black {
      return Err(TreeError::RedRoot);
    }
    self.validate_at(self.root(), None, None)
  }

  fn validate_at(&self, id: usize, lower: Option<&T>, upper: Option<&T>) -> TreeResult<usize> {
    if id == NIL {
      return Ok(0);
    }

    let link = self.links[id];
    let element = self.element(id);
    if lower.is_some_and(|low| low >= element) || upper.is_some_and(|high| high <= element) {
      return Err(TreeError::OrderViolation);
    }
    if link.is_red() && (self.links[link.left].is_red() || self.links[link.right].is_red()) {
      return Err(TreeError::RedViolation);
    }

    let left = self.validate_at(link.left, lower, Some(element))?;
    let right = self.validate_at(link.right, Some(element), upper)?;
    if left != right {
      return Err(TreeError::BlackHeightMismatch { left, right });
    }

    Ok(left + usize::from(link.color == Color::Black))
  }
}

impl<T> Default for BalancedTree<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> fmt::Debug for BalancedTree<T>
where
  T: fmt::Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_set().entries(self.iter()).finish()
  }
}

impl<T> Extend<T> for BalancedTree<T>
where
  T: Ord,
{
  fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
    for item in iter {
      self.insert(item);
    }
  }
}

impl<T> FromIterator<T> for BalancedTree<T>
where
  T: Ord,
{
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    let iter = iter.into_iter();
    let mut tree = Self::with_capacity(iter.size_hint().0);
    tree.extend(iter);
    tree
  }
}

impl<'tree, T> IntoIterator for &'tree BalancedTree<T> {
  type Item = &'tree T;
  type IntoIter = Iter<'tree, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

/// Read-only handle on one real node, for inspecting the tree's shape.
pub struct NodeRef<'tree, T> {
  tree: &'tree BalancedTree<T>,
  id: usize,
}

impl<'tree, T> NodeRef<'tree, T> {
  fn new(tree: &'tree BalancedTree<T>, id: usize) -> Option<Self> {
    (id != NIL).then_some(Self { tree, id })
  }

  pub fn link(&self) -> RbLink {
    self.tree.links[self.id]
  }

  pub fn color(&self) -> Color {
    self.link().color()
  }

  pub fn element(&self) -> &'tree T {
    self.tree.element(self.id)
  }

  pub fn left(&self) -> Option<Self> {
    Self::new(self.tree, self.link().left())
  }

  pub fn right(&self) -> Option<Self> {
    Self::new(self.tree, self.link().right())
  }
}

impl<T> Clone for NodeRef<'_, T> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<T> Copy for NodeRef<'_, T> {}
