pub mod calculator;
pub mod error;
pub mod pricing;
pub mod tips;
pub mod types;

pub use calculator::{aggregate, compute_cost, totals};
pub use error::{BillingError, CatalogError};
pub use pricing::RateCatalog;
pub use tips::optimization_tips;
pub use types::{
    CalculationRecord, CostSummary, CostTotals, ItemShare, LineItem, RateEntry,
};
