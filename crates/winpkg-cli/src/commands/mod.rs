//! Command implementations

mod blocks;
mod scan;
mod summary;

pub use blocks::cmd_blocks;
pub use scan::cmd_scan;
pub use summary::cmd_summary;
