//! Topic modules: one module per interview topic, each a flat collection of
//! self-contained algorithm functions with their fixtures.

use thiserror::Error;

pub mod arrays;
pub mod hashing;
pub mod heaps;
pub mod linked_list;
pub mod recursion;
pub mod stacks;
pub mod strings;
pub mod tree;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TopicError {
    #[error("invalid ternary expression at position {pos}: {reason}")]
    InvalidTernary { pos: usize, reason: String },
}

pub type TopicResult<T> = Result<T, TopicError>;
