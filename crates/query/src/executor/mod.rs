//! Query executor module.

mod filter;
mod scan;

pub use filter::{count, explain, find, find_one, find_rows};
pub use scan::Candidates;
