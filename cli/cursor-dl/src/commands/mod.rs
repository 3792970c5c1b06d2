//! CLI command implementations.

pub mod generate;
pub mod init;
pub mod links;
pub mod list;
pub mod render;
pub mod targets;
