#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod shared;

pub use shared::SharedTree;

#[cfg(test)]
mod tests;
