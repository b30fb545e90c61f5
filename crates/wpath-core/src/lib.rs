#![warn(missing_docs)]
//! Core types and utilities for `wpath`.
//!
//! This crate provides the per-search node table, the indexed min-heap used as the open list,
//! and the validated adjacency graph the search runs over.

mod error;
mod graph;
mod node;
mod pqueue;

pub use crate::error::*;
pub use crate::graph::*;
pub use crate::node::*;
pub use crate::pqueue::*;
