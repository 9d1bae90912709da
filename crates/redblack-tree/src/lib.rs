#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod balance;
pub mod error;
pub mod fmt;
pub mod iter;
pub mod node;
pub mod tree;

pub use error::{
  TreeError,
  TreeResult,
};
pub use node::{
  Color,
  RbLink,
};
pub use tree::{
  BalancedTree,
  NodeRef,
};

pub mod prelude {
  pub use super::{
    BalancedTree,
    Color,
    NodeRef,
    TreeError,
    TreeResult,
    iter::{
      Colored,
      Iter,
    },
  };
}
