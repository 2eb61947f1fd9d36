//! BST-backed in-memory course catalog.
//!
//! Course records (number, title, prerequisite list) are parsed from a
//! delimited text source and stored in a binary search tree keyed by
//! course number, supporting ordered listing and exact-match lookup.
//!
//! The tree is deliberately plain: no balancing, no deletion, no
//! internal synchronization. Single-threaded use is assumed; wrap the
//! whole [`Catalog`] in one external lock if shared across threads.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod course;
pub mod errors;
pub mod tree;
pub mod util;

pub use catalog::Catalog;
pub use course::Course;
pub use errors::{CatalogError, CatalogResult};
