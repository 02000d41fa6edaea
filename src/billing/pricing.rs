use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

use super::calculator::compute_cost;
use super::{BillingError, CatalogError, LineItem, RateEntry};

/// Immutable, ordered table of resource rates
///
/// Built once at startup and passed by reference to every caller. Entries keep
/// the order they were defined in.
#[derive(Debug, Clone, PartialEq)]
pub struct RateCatalog {
    entries: Vec<RateEntry>,
    index: HashMap<String, usize>,
}

impl RateCatalog {
    /// Build a catalog, rejecting malformed entries
    pub fn new(entries: Vec<RateEntry>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut index = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            if entry.id.trim().is_empty() {
                return Err(CatalogError::EmptyId);
            }
            if entry.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(entry.id.clone()));
            }
            if entry.unit_price < Decimal::ZERO {
                return Err(CatalogError::NegativeRate {
                    id: entry.id.clone(),
                    rate: entry.unit_price,
                });
            }
            if index.insert(entry.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateId(entry.id.clone()));
            }
        }

        Ok(Self { entries, index })
    }

    /// Catalog with the default resource rates
    pub fn builtin() -> Self {
        let entries = builtin_entries();
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.id.clone(), i))
            .collect();
        Self { entries, index }
    }

    /// Look up a resource by id
    pub fn get(&self, id: &str) -> Result<&RateEntry, BillingError> {
        self.index
            .get(id)
            .map(|&i| &self.entries[i])
            .ok_or_else(|| BillingError::UnknownResourceId(id.to_string()))
    }

    /// Price `usage` of the resource `id`
    pub fn line_item(&self, id: &str, usage: Decimal) -> Result<LineItem, BillingError> {
        let entry = self.get(id)?;
        Ok(LineItem {
            resource_id: entry.id.clone(),
            usage,
            cost: compute_cost(usage, entry.unit_price),
        })
    }

    pub fn entries(&self) -> &[RateEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &RateEntry> {
        self.entries.iter()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RateCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn entry(id: &str, name: &str, rate: Decimal, unit: &str, description: &str, icon: &str) -> RateEntry {
    RateEntry {
        id: id.to_string(),
        name: name.to_string(),
        unit_price: rate,
        unit: unit.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
    }
}

/// Default resource rates
pub fn builtin_entries() -> Vec<RateEntry> {
    vec![
        entry("vm", "Virtual Machine", dec!(3.50), "hours", "Standard VM instance", "🖥️"),
        entry("database", "Database", dec!(5.25), "hours", "Managed database service", "🗄️"),
        entry("storage", "Storage", dec!(0.08), "GB-hours", "Block storage", "💾"),
        entry("cdn", "CDN", dec!(0.12), "GB transferred", "Content Delivery Network", "🌐"),
        entry(
            "load_balancer",
            "Load Balancer",
            dec!(2.80),
            "hours",
            "Application load balancer",
            "⚖️",
        ),
        entry(
            "lambda",
            "Serverless Functions",
            dec!(0.000021),
            "requests",
            "Pay per request",
            "⚡",
        ),
        entry(
            "api_gateway",
            "API Gateway",
            dec!(0.0035),
            "API calls",
            "API management service",
            "🔌",
        ),
        entry("monitoring", "Monitoring", dec!(1.20), "hours", "Infrastructure monitoring", "📊"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synthetic(id: &str, rate: Decimal) -> RateEntry {
        entry(id, "Synthetic", rate, "units", "test rate", "")
    }

    #[test]
    fn test_builtin_catalog_is_stable() {
        let first = RateCatalog::builtin();
        let second = RateCatalog::builtin();

        assert_eq!(first, second);
        assert_eq!(first.len(), 8);
        assert_eq!(
            first.ids(),
            vec![
                "vm",
                "database",
                "storage",
                "cdn",
                "load_balancer",
                "lambda",
                "api_gateway",
                "monitoring"
            ]
        );
    }

    #[test]
    fn test_builtin_rates_are_valid() {
        let catalog = RateCatalog::builtin();
        assert!(RateCatalog::new(catalog.entries().to_vec()).is_ok());

        for entry in catalog.iter() {
            assert!(entry.unit_price > Decimal::ZERO, "{} has no rate", entry.id);
            assert!(!entry.unit.is_empty());
            assert!(!entry.description.is_empty());
        }
    }

    #[test]
    fn test_get_unknown_resource() {
        let catalog = RateCatalog::builtin();
        assert_eq!(
            catalog.get("mainframe"),
            Err(BillingError::UnknownResourceId("mainframe".to_string()))
        );
        assert_eq!(catalog.get("vm").unwrap().unit_price, dec!(3.50));
    }

    #[test]
    fn test_vm_line_item() {
        let catalog = RateCatalog::builtin();
        let item = catalog.line_item("vm", dec!(24.5)).unwrap();

        assert_eq!(item.resource_id, "vm");
        assert_eq!(item.cost, dec!(85.75));
    }

    #[test]
    fn test_synthetic_catalog() {
        let catalog = RateCatalog::new(vec![
            synthetic("a", dec!(1.5)),
            synthetic("b", dec!(0)),
        ])
        .unwrap();

        assert_eq!(catalog.ids(), vec!["a", "b"]);
        assert_eq!(catalog.line_item("a", dec!(4)).unwrap().cost, dec!(6.00));
        assert_eq!(catalog.line_item("b", dec!(4)).unwrap().cost, dec!(0));
        assert!(matches!(
            catalog.line_item("vm", dec!(1)),
            Err(BillingError::UnknownResourceId(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_entries() {
        assert_eq!(RateCatalog::new(Vec::new()), Err(CatalogError::Empty));
        assert_eq!(
            RateCatalog::new(vec![synthetic("a", dec!(1)), synthetic("a", dec!(2))]),
            Err(CatalogError::DuplicateId("a".to_string()))
        );
        assert_eq!(
            RateCatalog::new(vec![synthetic(" ", dec!(1))]),
            Err(CatalogError::EmptyId)
        );
        assert!(matches!(
            RateCatalog::new(vec![synthetic("a", dec!(-0.01))]),
            Err(CatalogError::NegativeRate { .. })
        ));

        let mut nameless = synthetic("a", dec!(1));
        nameless.name.clear();
        assert_eq!(
            RateCatalog::new(vec![nameless]),
            Err(CatalogError::EmptyName("a".to_string()))
        );
    }
}
