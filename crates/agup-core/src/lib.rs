pub mod config;
pub mod logging;

pub mod checksum;
pub mod descriptor;
pub mod page;
pub mod probe;
pub mod resolve;
pub mod srcinfo;
pub mod update;
