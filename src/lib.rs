pub mod billing;
pub mod cli;
pub mod config;
pub mod core;
pub mod session;
pub mod utils;
