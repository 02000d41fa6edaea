use rust_decimal::Decimal;
use thiserror::Error;

/// Errors surfaced by catalog lookups and the cost engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BillingError {
    #[error("Unknown resource id: {0}")]
    UnknownResourceId(String),
    /// Total cost is zero, so shares cannot be computed
    #[error("Percentage undefined: total cost is zero")]
    DivisionUndefined,
    #[error("No line items to aggregate")]
    EmptyLineItems,
    #[error("Cost total is out of range")]
    Overflow,
}

/// Errors raised while building a rate catalog
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("Catalog has no resources")]
    Empty,
    #[error("Resource with empty id")]
    EmptyId,
    #[error("Duplicate resource id: {0}")]
    DuplicateId(String),
    #[error("Resource {0} has an empty name")]
    EmptyName(String),
    #[error("Resource {id} has a negative rate: {rate}")]
    NegativeRate { id: String, rate: Decimal },
}
