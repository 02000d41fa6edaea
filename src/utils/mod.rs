pub mod debug;
pub mod parse;

pub use parse::{parse_usage, parse_usage_pair};
