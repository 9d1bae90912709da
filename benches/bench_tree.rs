use criterion::{criterion_group, criterion_main, Criterion};
use core::hint::black_box;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use redblack::prelude::*;

const N: u64 = 1024;

fn shuffled() -> Vec<u64> {
  let mut values: Vec<u64> = (0..N).collect();
  values.shuffle(&mut StdRng::seed_from_u64(42));
  values
}

fn bench_tree_operations(c: &mut Criterion) {
  let values = shuffled();

  c.bench_function("tree_insert_random", |b| {
    b.iter_batched(
      || BalancedTree::with_capacity(N as usize),
      |mut tree| {
        for &v in &values {
          tree.insert(v);
        }
        black_box(&tree);
      },
      criterion::BatchSize::SmallInput,
    );
  });

  c.bench_function("tree_insert_ascending", |b| {
    b.iter_batched(
      || BalancedTree::with_capacity(N as usize),
      |mut tree| {
        for v in 0..N {
          tree.insert(v);
        }
        black_box(&tree);
      },
      criterion::BatchSize::SmallInput,
    );
  });

  c.bench_function("tree_contains", |b| {
    let tree: BalancedTree<u64> = values.iter().copied().collect();
    b.iter(|| {
      let hits = (0..2 * N).filter(|v| tree.contains(v)).count();
      black_box(hits);
    });
  });

  c.bench_function("tree_traverse", |b| {
    let tree: BalancedTree<u64> = values.iter().copied().collect();
    b.iter(|| {
      let sum: u64 = tree.iter().sum();
      black_box(sum);
    });
  });

  c.bench_function("shared_insert", |b| {
    b.iter_batched(
      SharedTree::new,
      |tree| {
        for &v in &values {
          tree.insert(v);
        }
        black_box(tree.len());
      },
      criterion::BatchSize::SmallInput,
    );
  });
}

criterion_group!(tree_benches, bench_tree_operations);
criterion_main!(tree_benches);
