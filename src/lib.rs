#![no_std]

pub use redblack_sync::SharedTree;
pub use redblack_tree::{
  BalancedTree,
  Color,
  NodeRef,
  TreeError,
  TreeResult,
};

pub mod prelude {
  pub use redblack_sync::SharedTree;
  pub use redblack_tree::prelude::*;
}
