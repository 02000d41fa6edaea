use super::defaults::DEFAULT_CURRENCY;
use crate::billing::pricing::builtin_entries;
use crate::billing::RateEntry;
use serde::{Deserialize, Serialize};

/// Calculator configuration: currency symbol and the resource rate table
///
/// Keys left out of the file fall back to the builtin values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Symbol prefixed to every displayed amount
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "builtin_entries")]
    pub resources: Vec<RateEntry>,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}
