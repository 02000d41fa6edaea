use super::modes::{Comparison, MultiEstimate, SingleEstimate};
use crate::billing::{RateCatalog, RateEntry};
use crate::session::SessionHistory;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt::Write;

/// Width of the text share bar at 100%
const BAR_WIDTH: usize = 20;

/// Format an amount with the currency symbol and two decimals
pub fn money(currency: &str, amount: Decimal) -> String {
    format!("{}{:.2}", currency, amount.round_dp(2))
}

#[cfg(feature = "color")]
fn alert(text: &str) -> String {
    ansi_term::Colour::Red.bold().paint(text).to_string()
}

#[cfg(feature = "color")]
fn success(text: &str) -> String {
    ansi_term::Colour::Green.bold().paint(text).to_string()
}

#[cfg(not(feature = "color"))]
fn alert(text: &str) -> String {
    text.to_string()
}

#[cfg(not(feature = "color"))]
fn success(text: &str) -> String {
    text.to_string()
}

/// Horizontal bar proportional to `percentage`
pub fn share_bar(percentage: Decimal) -> String {
    let clamped = percentage.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
    let filled = (clamped * Decimal::from(BAR_WIDTH) / Decimal::ONE_HUNDRED)
        .round()
        .to_usize()
        .unwrap_or(0)
        .min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn label_for(catalog: &RateCatalog, resource_id: &str) -> String {
    catalog
        .get(resource_id)
        .map(RateEntry::label)
        .unwrap_or_else(|_| resource_id.to_string())
}

fn unit_for<'a>(catalog: &'a RateCatalog, resource_id: &str) -> &'a str {
    catalog.get(resource_id).map(|e| e.unit.as_str()).unwrap_or("")
}

/// List every resource with its rate
pub fn render_catalog(catalog: &RateCatalog, currency: &str) -> String {
    let mut out = String::from("Available resources:\n");
    for entry in catalog.iter() {
        let _ = writeln!(
            out,
            "  {:<14} {:<24} {}{} per {} - {}",
            entry.id,
            entry.label(),
            currency,
            entry.unit_price,
            entry.unit,
            entry.description
        );
    }
    out
}

/// Optimization tips, one per line
pub fn render_tips(tips: &[&str]) -> String {
    let mut out = String::from("Optimization tips:\n");
    for tip in tips {
        let _ = writeln!(out, "  {}", tip);
    }
    out
}

pub fn render_single(estimate: &SingleEstimate, currency: &str) -> String {
    let entry = &estimate.entry;
    let item = &estimate.item;

    let mut out = String::new();
    let _ = writeln!(out, "{} - {}", entry.label(), entry.description);
    let _ = writeln!(out, "  Usage:      {} {}", item.usage, entry.unit);
    let _ = writeln!(out, "  Rate:       {}{}", currency, entry.unit_price);
    let _ = writeln!(out, "  Total Cost: {}", money(currency, item.cost));
    let _ = writeln!(
        out,
        "  Calculation: {} × {}{} = {}",
        item.usage,
        currency,
        entry.unit_price,
        money(currency, item.cost)
    );
    out.push('\n');
    out.push_str(&render_tips(&estimate.tips));
    out
}

pub fn render_multi(catalog: &RateCatalog, estimate: &MultiEstimate, currency: &str) -> String {
    let totals = &estimate.totals;

    let mut out = String::from("Cost Summary\n");
    let _ = writeln!(out, "  Resources Used:       {}", totals.count);
    let _ = writeln!(out, "  Total Cost:           {}", money(currency, totals.total));
    let _ = writeln!(
        out,
        "  Average per Resource: {}",
        money(currency, totals.average)
    );
    out.push('\n');

    for (i, item) in estimate.items.iter().enumerate() {
        // a zero total has no shares; show every item at 0%
        let percentage = estimate
            .shares
            .as_ref()
            .and_then(|s| s.get(i))
            .map(|share| share.percentage)
            .unwrap_or_default();
        let rate = catalog
            .get(&item.resource_id)
            .map(|e| e.unit_price)
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "  {:<26} {:>12} {:<16} {}{:<10} {:>12} {:>5.1}% {}",
            label_for(catalog, &item.resource_id),
            item.usage,
            unit_for(catalog, &item.resource_id),
            currency,
            rate,
            money(currency, item.cost),
            percentage.round_dp(1),
            share_bar(percentage)
        );
    }
    out
}

pub fn render_comparison(catalog: &RateCatalog, comparison: &Comparison, currency: &str) -> String {
    let mut out = format!("Cost Comparison - {}\n", comparison.scenario);

    for (i, item) in comparison.items.iter().enumerate() {
        let rate = catalog
            .get(&item.resource_id)
            .map(|e| e.unit_price)
            .unwrap_or_default();
        let _ = write!(
            out,
            "  {:<26} {:>12} {:<16} {}{:<10} {:>12}",
            label_for(catalog, &item.resource_id),
            item.usage,
            unit_for(catalog, &item.resource_id),
            currency,
            rate,
            money(currency, item.cost)
        );
        if let Some(share) = comparison.shares.as_ref().and_then(|s| s.get(i)) {
            let _ = write!(out, " {}", share_bar(share.percentage));
        }
        out.push('\n');
    }

    let most = comparison.most_expensive();
    let least = comparison.most_economical();
    out.push('\n');
    let _ = writeln!(
        out,
        "  {}",
        alert(&format!(
            "Most Expensive: {} - {}",
            label_for(catalog, &most.resource_id),
            money(currency, most.cost)
        ))
    );
    let _ = writeln!(
        out,
        "  {}",
        success(&format!(
            "Most Economical: {} - {}",
            label_for(catalog, &least.resource_id),
            money(currency, least.cost)
        ))
    );
    out
}

/// Recent saved calculations, newest first
pub fn render_history(history: &SessionHistory, currency: &str) -> String {
    if history.is_empty() {
        return "No saved calculations\n".to_string();
    }

    let mut out = String::from("Recent Calculations:\n");
    for record in history.recent() {
        let _ = writeln!(
            out,
            "  [{}] {}: {}",
            record.timestamp.format("%Y-%m-%d %H:%M:%S"),
            record.resource_name,
            money(currency, record.cost)
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::billing::CalculationRecord;
    use crate::core::modes::{compare, estimate_multiple, estimate_single};
    use rust_decimal_macros::dec;

    #[test]
    fn test_money() {
        assert_eq!(money("₹", dec!(85.75)), "₹85.75");
        assert_eq!(money("$", dec!(1)), "$1.00");
        assert_eq!(money("$", dec!(0)), "$0.00");
    }

    #[test]
    fn test_share_bar() {
        assert_eq!(share_bar(dec!(0)), "░".repeat(BAR_WIDTH));
        assert_eq!(share_bar(dec!(100)), "█".repeat(BAR_WIDTH));
        assert_eq!(share_bar(dec!(50)).chars().filter(|c| *c == '█').count(), 10);
        assert_eq!(share_bar(dec!(150)), "█".repeat(BAR_WIDTH));
        assert_eq!(share_bar(dec!(-3)), "░".repeat(BAR_WIDTH));
    }

    #[test]
    fn test_render_single() {
        let catalog = RateCatalog::builtin();
        let estimate = estimate_single(&catalog, "vm", dec!(24.5)).unwrap();
        let out = render_single(&estimate, "₹");

        assert!(out.contains("Total Cost: ₹85.75"));
        assert!(out.contains("24.5 × ₹3.50 = ₹85.75"));
        assert!(out.contains("spot instances"));
    }

    #[test]
    fn test_render_multi() {
        let catalog = RateCatalog::builtin();
        let usages = vec![
            ("vm".to_string(), dec!(10)),
            ("storage".to_string(), dec!(100)),
        ];
        let estimate = estimate_multiple(&catalog, &usages).unwrap();
        let out = render_multi(&catalog, &estimate, "$");

        assert!(out.contains("Resources Used:       2"));
        assert!(out.contains("Total Cost:           $43.00"));
        assert!(out.contains("Average per Resource: $21.50"));
        assert!(out.contains("81.4%"));
        assert!(out.contains("18.6%"));
    }

    #[test]
    fn test_render_multi_zero_total() {
        let catalog = RateCatalog::builtin();
        let usages = vec![("lambda".to_string(), dec!(1))];
        let estimate = estimate_multiple(&catalog, &usages).unwrap();
        let out = render_multi(&catalog, &estimate, "$");

        assert!(out.contains("Total Cost:           $0.00"));
        assert!(out.contains("0.0%"));
        assert!(out.contains(&"░".repeat(BAR_WIDTH)));
    }

    #[test]
    fn test_render_comparison() {
        let catalog = RateCatalog::builtin();
        let usages = vec![
            ("vm".to_string(), dec!(1)),
            ("cdn".to_string(), dec!(1)),
        ];
        let comparison = compare(&catalog, "Staging", &usages).unwrap();
        let out = render_comparison(&catalog, &comparison, "₹");

        assert!(out.starts_with("Cost Comparison - Staging"));
        assert!(out.contains("Most Expensive: 🖥️ Virtual Machine - ₹3.50"));
        assert!(out.contains("Most Economical: 🌐 CDN - ₹0.12"));
    }

    #[test]
    fn test_render_history() {
        let catalog = RateCatalog::builtin();
        let mut history = SessionHistory::new();
        assert_eq!(render_history(&history, "₹"), "No saved calculations\n");

        for usage in [dec!(1), dec!(2)] {
            let entry = catalog.get("vm").unwrap();
            let item = catalog.line_item("vm", usage).unwrap();
            history.record(CalculationRecord::from_line_item(entry, &item));
        }

        let out = render_history(&history, "₹");
        let first = out.find("₹7.00").unwrap();
        let second = out.find("₹3.50").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_render_catalog_lists_everything() {
        let catalog = RateCatalog::builtin();
        let out = render_catalog(&catalog, "₹");
        for id in catalog.ids() {
            assert!(out.contains(id));
        }
        assert!(out.contains("₹0.000021 per requests"));
    }
}
