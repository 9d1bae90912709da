use std::{
  sync::Arc,
  thread,
};

use redblack_tree::TreeError;
use spin::Lazy;

use super::*;

static GLOBAL: Lazy<SharedTree<u64>> = Lazy::new(SharedTree::new);

#[test]
fn basic_operations_round_trip_through_lock() {
  let tree = SharedTree::new();
  assert!(tree.is_empty());
  assert_eq!(tree.find_min(), Err(TreeError::Empty));

  for value in [1, 2, 40, 50, 10, 61, 41, 86, 89, 9] {
    assert!(tree.insert(value));
  }
  assert!(!tree.insert(40));

  assert_eq!(tree.len(), 10);
  assert_eq!(tree.find_min(), Ok(1));
  assert_eq!(tree.find_max(), Ok(89));
  assert!(tree.contains(&61));
  assert!(!tree.contains(&62));
  assert_eq!(tree.remove(&61), Err(TreeError::Unsupported));
  assert!(tree.contains(&61));

  tree.make_empty();
  assert!(tree.is_empty());
}

#[test]
fn concurrent_inserts_are_serialized() {
  const THREADS: u32 = 4;
  const PER_THREAD: u32 = 500;

  let tree = Arc::new(SharedTree::with_capacity((THREADS * PER_THREAD) as usize));
  let handles: Vec<_> = (0..THREADS)
    .map(|t| {
      let tree = Arc::clone(&tree);
      thread::spawn(move || {
        for i in 0..PER_THREAD {
          tree.insert(i * THREADS + t);
          // each thread owns one residue class
          assert!(tree.contains(&(i * THREADS + t)));
        }
      })
    })
    .collect();

  for handle in handles {
    handle.join().expect("worker thread panicked");
  }

  assert_eq!(tree.len(), (THREADS * PER_THREAD) as usize);
  tree.read(|inner| inner.validate()).expect("invariants hold");
  let snapshot = tree.snapshot();
  assert!(snapshot.iter().copied().eq(0..THREADS * PER_THREAD));
}

#[test]
fn readers_share_the_lock() {
  let tree = Arc::new(SharedTree::from_tree((0..256u32).collect()));
  let handles: Vec<_> = (0..4)
    .map(|_| {
      let tree = Arc::clone(&tree);
      thread::spawn(move || (0..512u32).filter(|v| tree.contains(v)).count())
    })
    .collect();

  for handle in handles {
    assert_eq!(handle.join().expect("reader panicked"), 256);
  }
}

#[test]
fn static_tree_backs_global_state() {
  GLOBAL.insert(7);
  GLOBAL.insert(3);
  assert!(GLOBAL.contains(&7));
  assert_eq!(GLOBAL.find_min(), Ok(3));

  let tree = SharedTree::from(GLOBAL.read(|inner| inner.clone()));
  assert_eq!(tree.into_inner().len(), 2);
}
