use super::types::Config;
use crate::billing::pricing::builtin_entries;

pub const DEFAULT_CURRENCY: &str = "₹";

impl Default for Config {
    fn default() -> Self {
        Config {
            currency: DEFAULT_CURRENCY.to_string(),
            resources: builtin_entries(),
        }
    }
}
