//! Query planner module.

mod access_path;

pub use access_path::{plan, AccessPath};
