use crate::billing::{
    aggregate, optimization_tips, totals, BillingError, CostTotals, ItemShare, LineItem,
    RateCatalog, RateEntry,
};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

/// Minimum number of resources in a comparison
pub const MIN_COMPARED: usize = 2;

/// Scenario label used when none is given
pub const DEFAULT_SCENARIO: &str = "Production Workload";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModeError {
    #[error(transparent)]
    Billing(#[from] BillingError),
    #[error("No resource has a usage above zero")]
    NoPositiveUsage,
    #[error("Select at least 2 resources to compare (got {0})")]
    TooFewResources(usize),
}

/// Cost of one resource with its rate and tips
#[derive(Debug, Clone, Serialize)]
pub struct SingleEstimate {
    pub entry: RateEntry,
    pub item: LineItem,
    pub tips: Vec<&'static str>,
}

/// Costs of several resources and how they add up
#[derive(Debug, Clone, Serialize)]
pub struct MultiEstimate {
    pub items: Vec<LineItem>,
    pub totals: CostTotals,
    /// Absent when every priced cost rounds to zero
    pub shares: Option<Vec<ItemShare>>,
}

/// Side-by-side costs of resources under one scenario
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub scenario: String,
    pub items: Vec<LineItem>,
    pub totals: CostTotals,
    /// Absent when every compared cost is zero
    pub shares: Option<Vec<ItemShare>>,
}

impl Comparison {
    pub fn most_expensive(&self) -> &LineItem {
        &self.totals.max
    }

    pub fn most_economical(&self) -> &LineItem {
        &self.totals.min
    }
}

/// Per-item shares, or `None` when the costs add up to zero
fn shares_of(items: &[LineItem]) -> Result<Option<Vec<ItemShare>>, ModeError> {
    match aggregate(items) {
        Ok(summary) => Ok(Some(summary.shares)),
        Err(BillingError::DivisionUndefined) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Price a single resource
pub fn estimate_single(
    catalog: &RateCatalog,
    resource_id: &str,
    usage: Decimal,
) -> Result<SingleEstimate, ModeError> {
    let entry = catalog.get(resource_id)?.clone();
    let item = catalog.line_item(resource_id, usage)?;
    Ok(SingleEstimate {
        tips: optimization_tips(&entry.id),
        entry,
        item,
    })
}

/// Price several resources, skipping those without usage
pub fn estimate_multiple(
    catalog: &RateCatalog,
    usages: &[(String, Decimal)],
) -> Result<MultiEstimate, ModeError> {
    let items = usages
        .iter()
        .filter(|(_, usage)| *usage > Decimal::ZERO)
        .map(|(id, usage)| catalog.line_item(id, *usage))
        .collect::<Result<Vec<_>, _>>()?;

    if items.is_empty() {
        // surface unknown ids before complaining about usage
        for (id, _) in usages {
            catalog.get(id)?;
        }
        return Err(ModeError::NoPositiveUsage);
    }

    let totals = totals(&items)?;
    let shares = shares_of(&items)?;
    Ok(MultiEstimate {
        items,
        totals,
        shares,
    })
}

/// Compare resources under a named scenario; zero usage is allowed
pub fn compare(
    catalog: &RateCatalog,
    scenario: &str,
    usages: &[(String, Decimal)],
) -> Result<Comparison, ModeError> {
    if usages.len() < MIN_COMPARED {
        return Err(ModeError::TooFewResources(usages.len()));
    }

    let items = usages
        .iter()
        .map(|(id, usage)| catalog.line_item(id, *usage))
        .collect::<Result<Vec<_>, _>>()?;

    let totals = totals(&items)?;
    let shares = shares_of(&items)?;

    Ok(Comparison {
        scenario: scenario.to_string(),
        items,
        totals,
        shares,
    })
}
