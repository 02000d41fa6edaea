pub mod modes;
pub mod report;
pub mod shell;

pub use modes::{compare, estimate_multiple, estimate_single, Comparison, ModeError};
pub use shell::Shell;
