//! CLI command handlers. Each command is in its own file.

mod checksum;
mod resolve;
mod update;

pub use checksum::run_checksum;
pub use resolve::run_resolve;
pub use update::run_update;
