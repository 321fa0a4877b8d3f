//! Inputs and outputs of a comparison
//!
//! - `comparison`: Resolving the two command-line paths into files or trees
//! - `viewer`: The output sink commands render into
//! - `workspace`: A directory tree on one side of a comparison

pub mod comparison;
pub mod viewer;
pub mod workspace;
