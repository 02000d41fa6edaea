use once_cell::sync::Lazy;

/// Global debug mode flag, initialized once at startup
pub static DEBUG_MODE: Lazy<bool> = Lazy::new(|| std::env::var("CLOUDCALC_DEBUG").is_ok());

/// Conditional debug output macro
///
/// Prints to stderr only when `CLOUDCALC_DEBUG` is set. The variable is read
/// once, not on every call.
///
/// # Examples
///
/// ```
/// use cloudcalc::debug_println;
///
/// let path = "config.toml";
/// debug_println!("Loading config from {}", path);
/// ```
#[macro_export]
macro_rules! debug_println {
    ($($arg:tt)*) => {
        if *$crate::utils::debug::DEBUG_MODE {
            eprintln!("[cloudcalc] {}", format_args!($($arg)*));
        }
    };
}

/// Re-export for internal use
pub use debug_println;
