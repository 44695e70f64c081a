//! Property tests run against the public API of the tree.

mod tree;
