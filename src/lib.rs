//! Generate cryptographically secure strings.

pub mod config;
pub mod generate;
pub mod sets;
pub mod utils;

pub static VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DEFAULT_LENGTH: usize = 16;
