//! Directory tree walking logic
//!
//! `TreeWalker` lists each directory once, applies exclusion, ordering and
//! grouping, and hands entries to a `TreeOutput` in display order. Rendering
//! is left to the sink (see `crate::output`).

mod config;
mod entry;
mod filter;
mod walker;

pub use config::{Grouping, Order, WalkerConfig};
pub use entry::{Entry, Position, Summary};
pub use filter::ExcludeFilter;
pub use walker::{TreeOutput, TreeWalker, child_prefix};
