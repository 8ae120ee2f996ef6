pub mod config;
pub mod logger;
pub mod protocol;

pub use protocol::*;
