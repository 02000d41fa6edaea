use crate::billing::{BillingError, CostSummary, CostTotals, ItemShare, LineItem};
use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept on every computed cost
pub const COST_DECIMALS: u32 = 2;

/// Calculate the cost of `usage` at `rate`, rounded to cents
///
/// Rounds half to even. Negative input is priced as given; validation belongs
/// to the caller. Overflow saturates instead of panicking.
pub fn compute_cost(usage: Decimal, rate: Decimal) -> Decimal {
    usage
        .saturating_mul(rate)
        .round_dp_with_strategy(COST_DECIMALS, RoundingStrategy::MidpointNearestEven)
}

/// Sum of costs, or `Overflow` when it leaves the decimal range
///
/// Charges and credits are summed apart so the outcome does not depend on
/// item order.
fn sum_costs(items: &[LineItem]) -> Result<Decimal, BillingError> {
    let mut charges = Decimal::ZERO;
    let mut credits = Decimal::ZERO;

    for item in items {
        let side = if item.cost.is_sign_negative() {
            &mut credits
        } else {
            &mut charges
        };
        *side = side
            .checked_add(item.cost)
            .ok_or(BillingError::Overflow)?;
    }

    charges.checked_add(credits).ok_or(BillingError::Overflow)
}

/// Total, average and extremes of a list of line items
///
/// Max and min keep the first item on ties.
pub fn totals(items: &[LineItem]) -> Result<CostTotals, BillingError> {
    let (first, rest) = items.split_first().ok_or(BillingError::EmptyLineItems)?;

    let mut max = first;
    let mut min = first;
    for item in rest {
        if item.cost > max.cost {
            max = item;
        }
        if item.cost < min.cost {
            min = item;
        }
    }

    let total = sum_costs(items)?;
    let average = total
        .checked_div(Decimal::from(items.len()))
        .ok_or(BillingError::Overflow)?;

    Ok(CostTotals {
        total,
        average,
        count: items.len(),
        max: max.clone(),
        min: min.clone(),
    })
}

/// Aggregate line items into totals and per-item shares of the total
///
/// Fails with `DivisionUndefined` when the costs add up to zero; callers that
/// can live without shares should fall back to [`totals`]. A share too large
/// for the decimal range fails with `Overflow`.
pub fn aggregate(items: &[LineItem]) -> Result<CostSummary, BillingError> {
    let totals = totals(items)?;
    if totals.total.is_zero() {
        return Err(BillingError::DivisionUndefined);
    }

    let shares = items
        .iter()
        .map(|item| {
            let percentage = item
                .cost
                .checked_div(totals.total)
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                .ok_or(BillingError::Overflow)?;
            Ok(ItemShare {
                resource_id: item.resource_id.clone(),
                cost: item.cost,
                percentage,
            })
        })
        .collect::<Result<Vec<_>, BillingError>>()?;

    Ok(CostSummary {
        total: totals.total,
        average: totals.average,
        max: totals.max,
        min: totals.min,
        shares,
    })
}
