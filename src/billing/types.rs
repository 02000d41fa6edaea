use chrono::{DateTime, Local};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Rate definition for one billable resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateEntry {
    pub id: String,
    pub name: String,
    #[serde(rename = "rate")]
    pub unit_price: Decimal,
    pub unit: String,
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

impl RateEntry {
    /// Name prefixed with the icon, when one is set
    pub fn label(&self) -> String {
        if self.icon.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.icon, self.name)
        }
    }
}

/// One resource's usage priced against its rate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    pub resource_id: String,
    pub usage: Decimal,
    pub cost: Decimal,
}

/// Aggregation of line items that needs no division by the total
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostTotals {
    pub total: Decimal,
    pub average: Decimal,
    pub count: usize,
    pub max: LineItem,
    pub min: LineItem,
}

/// A line item's part of the total cost
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemShare {
    pub resource_id: String,
    pub cost: Decimal,
    /// Percentage of the total, 0-100
    pub percentage: Decimal,
}

/// Full aggregation of line items, shares kept in input order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostSummary {
    pub total: Decimal,
    pub average: Decimal,
    pub max: LineItem,
    pub min: LineItem,
    pub shares: Vec<ItemShare>,
}

impl CostSummary {
    /// Percentage for the first share matching `resource_id`
    pub fn percentage(&self, resource_id: &str) -> Option<Decimal> {
        self.shares
            .iter()
            .find(|s| s.resource_id == resource_id)
            .map(|s| s.percentage)
    }

    pub fn count(&self) -> usize {
        self.shares.len()
    }
}

/// A saved calculation in the session history
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationRecord {
    pub timestamp: DateTime<Local>,
    pub resource_name: String,
    pub usage: Decimal,
    pub unit: String,
    pub unit_price: Decimal,
    pub cost: Decimal,
}

impl CalculationRecord {
    /// Snapshot a priced line item, stamped with the current local time
    pub fn from_line_item(entry: &RateEntry, item: &LineItem) -> Self {
        Self {
            timestamp: Local::now(),
            resource_name: entry.name.clone(),
            usage: item.usage,
            unit: entry.unit.clone(),
            unit_price: entry.unit_price,
            cost: item.cost,
        }
    }
}
