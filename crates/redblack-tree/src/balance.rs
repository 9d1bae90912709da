use core::cmp::Ordering;

use log::trace;

use crate::node::{
  Color,
  FIRST,
  HEADER,
  NIL,
  Path,
  RbLink,
};

/// Three-way comparison of `item` against the element held by slot `id`.
///
/// The header always compares as greater so the first step descends into
/// `header.right`. The nil sentinel always compares as equal, which stops
/// every descent at the first missing child.
#[inline(always)]
pub(crate) fn compare<T: Ord>(elements: &[T], item: &T, id: usize) -> Ordering {
  match id {
    HEADER => Ordering::Greater,
    NIL => Ordering::Equal,
    _ => item.cmp(&elements[id - FIRST]),
  }
}

/// Mutable view over the link arena with read access to the elements.
pub(crate) struct Balancer<'tree, T> {
  links: &'tree mut [RbLink],
  elements: &'tree [T],
}

impl<'tree, T> Balancer<'tree, T>
where
  T: Ord,
{
  pub(crate) fn new(links: &'tree mut [RbLink], elements: &'tree [T]) -> Self {
    Self { links, elements }
  }

  #[inline(always)]
  fn compare(&self, item: &T, id: usize) -> Ordering {
    compare(self.elements, item, id)
  }

  #[inline(always)]
  fn child_toward(&self, item: &T, id: usize) -> usize {
    if self.compare(item, id) == Ordering::Less {
      self.links[id].left
    } else {
      self.links[id].right
    }
  }

  /// Walks from the header toward the slot `item` belongs in, splitting every
  /// node with two red children on the way down. Leaves `path.current` at the
  /// nil sentinel or at the slot holding an equal element.
  pub(crate) fn descend(&mut self, item: &T, path: &mut Path) {
    while self.compare(item, path.current) != Ordering::Equal {
      let next = self.child_toward(item, path.current);
      path.step(next);

      let link = self.links[path.current];
      if self.links[link.left].is_red() && self.links[link.right].is_red() {
        self.reorient(item, path);
      }
    }
  }

  /// Hangs the fresh slot `id` under `path.parent` and rebalances around it.
  pub(crate) fn attach(&mut self, item: &T, id: usize, path: &mut Path) {
    path.current = id;
    if self.compare(item, path.parent) == Ordering::Less {
      self.links[path.parent].left = id;
    } else {
      self.links[path.parent].right = id;
    }
    self.reorient(item, path);
  }

  /// Color flip on `path.current`, followed by a single or double rotation
  /// when the flip leaves two reds in a row.
  fn reorient(&mut self, item: &T, path: &mut Path) {
    let current = path.current;
    let RbLink { left, right, .. } = self.links[current];
    self.links[current].color = Color::Red;
    self.links[left].color = Color::Black;
    self.links[right].color = Color::Black;

    if self.links[path.parent].is_red() {
      trace!("reorient: red parent {} under grand {}", path.parent, path.grand);
      self.links[path.grand].color = Color::Red;

      let left_of_grand = self.compare(item, path.grand) == Ordering::Less;
      let left_of_parent = self.compare(item, path.parent) == Ordering::Less;
      if left_of_grand != left_of_parent {
        path.parent = self.rotate(item, path.grand);
      }

      path.current = self.rotate(item, path.great);
      self.links[path.current].color = Color::Black;
    }

    let root = self.links[HEADER].right;
    self.links[root].color = Color::Black;
  }

  /// Rotates the child of `parent` on `item`'s side with its own child on
  /// `item`'s side, rewires `parent` to the new subtree root and returns it.
  fn rotate(&mut self, item: &T, parent: usize) -> usize {
    let goes_left = self.compare(item, parent) == Ordering::Less;
    let child = if goes_left {
      self.links[parent].left
    } else {
      self.links[parent].right
    };

    let top = if self.compare(item, child) == Ordering::Less {
      self.rotate_with_left_child(child)
    } else {
      self.rotate_with_right_child(child)
    };

    if goes_left {
      self.links[parent].left = top;
    } else {
      self.links[parent].right = top;
    }
    top
  }

  fn rotate_with_left_child(&mut self, k2: usize) -> usize {
    let k1 = self.links[k2].left;
    trace!("rotate {k2} with left child {k1}");
    self.links[k2].left = self.links[k1].right;
    self.links[k1].right = k2;
    k1
  }

  fn rotate_with_right_child(&mut self, k1: usize) -> usize {
    let k2 = self.links[k1].right;
    trace!("rotate {k1} with right child {k2}");
    self.links[k1].right = self.links[k2].left;
    self.links[k2].left = k1;
    k2
  }
}
