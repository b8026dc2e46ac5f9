use std::collections::HashMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// Kind of stock the system tracks
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Eq, PartialEq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Medicine,
    Device,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Medicine => write!(f, "medicine"),
            ItemKind::Device => write!(f, "device"),
        }
    }
}

/// Location a catalog item is held at
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Scope {
    /// The central warehouse
    Warehouse,
    /// Exactly one branch
    Branch(String),
}

/// Catalog item as the remote system returns it. The local copy is a
/// read-mostly mirror; only confirmed dispensing mutates it in place.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub kind: ItemKind,
    /// Absent for warehouse stock
    #[serde(default)]
    pub branch_id: Option<String>,
    pub quantity: u32,
    pub purchase_price: Decimal,
    pub sell_price: Decimal,
}

impl CatalogItem {
    pub fn scope(&self) -> Scope {
        match &self.branch_id {
            Some(branch) => Scope::Branch(branch.clone()),
            None => Scope::Warehouse,
        }
    }
}

/// In-memory mirror of remote stock quantities for one location.
///
/// Not authoritative. Refreshed wholesale after remote mutations, except
/// for confirmed dispensing which adjusts it in place.
#[derive(Clone, Debug, Default)]
pub struct StockSnapshot {
    items: HashMap<String, CatalogItem>,
}

impl StockSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wholesale refresh from an authoritative read.
    pub fn replace_all(&mut self, items: Vec<CatalogItem>) {
        self.items = items.into_iter().map(|item| (item.id.clone(), item)).collect();
    }

    pub fn get(&self, item_id: &str) -> Option<&CatalogItem> {
        self.items.get(item_id)
    }

    pub fn quantity(&self, item_id: &str) -> Option<u32> {
        self.items.get(item_id).map(|item| item.quantity)
    }

    pub fn items(&self) -> impl Iterator<Item = &CatalogItem> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adjusts a quantity by `delta`, positive for intake and returns,
    /// negative for dispensing. A would-be-negative result is an error,
    /// never a silent floor.
    pub fn apply_delta(&mut self, item_id: &str, delta: i64) -> Result<(), Error> {
        let item = self.items.get_mut(item_id).ok_or_else(|| Error::NotFound {
            entity: format!("catalog item {item_id}"),
        })?;

        let next = i64::from(item.quantity) + delta;
        if next < 0 {
            return Err(Error::StockConflict {
                item_id: item_id.to_string(),
                have: item.quantity,
                take: u32::try_from(delta.unsigned_abs()).unwrap_or(u32::MAX),
            });
        }

        item.quantity = u32::try_from(next).map_err(|_| Error::Validation {
            message: format!("quantity overflow for {item_id}"),
        })?;
        Ok(())
    }

    /// Removes an item from the available-for-selection view once it hits
    /// zero. The authoritative remote record still exists.
    pub fn drop_if_zero(&mut self, item_id: &str) {
        if self.quantity(item_id) == Some(0) {
            self.items.remove(item_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, quantity: u32) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            name: format!("item {id}"),
            kind: ItemKind::Medicine,
            branch_id: Some("branch-1".to_string()),
            quantity,
            purchase_price: Decimal::from(10),
            sell_price: Decimal::from(15),
        }
    }

    #[test]
    fn replace_all_swaps_the_mirror() {
        let mut snapshot = StockSnapshot::new();
        snapshot.replace_all(vec![item("a", 5)]);
        snapshot.replace_all(vec![item("b", 2), item("c", 3)]);

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.quantity("a"), None);
        assert_eq!(snapshot.quantity("b"), Some(2));
    }

    #[test]
    fn apply_delta_adjusts_in_both_directions() {
        let mut snapshot = StockSnapshot::new();
        snapshot.replace_all(vec![item("a", 5)]);

        snapshot.apply_delta("a", -3).unwrap();
        assert_eq!(snapshot.quantity("a"), Some(2));

        snapshot.apply_delta("a", 4).unwrap();
        assert_eq!(snapshot.quantity("a"), Some(6));
    }

    #[test]
    fn apply_delta_never_goes_below_zero() {
        let mut snapshot = StockSnapshot::new();
        snapshot.replace_all(vec![item("a", 5)]);

        let err = snapshot.apply_delta("a", -6).unwrap_err();
        assert!(matches!(err, Error::StockConflict { have: 5, take: 6, .. }));
        assert_eq!(snapshot.quantity("a"), Some(5));
    }

    #[test]
    fn apply_delta_on_unknown_item_is_not_found() {
        let mut snapshot = StockSnapshot::new();
        let err = snapshot.apply_delta("ghost", 1).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn drop_if_zero_only_removes_exhausted_items() {
        let mut snapshot = StockSnapshot::new();
        snapshot.replace_all(vec![item("a", 1), item("b", 2)]);

        snapshot.drop_if_zero("a");
        assert_eq!(snapshot.quantity("a"), Some(1));

        snapshot.apply_delta("a", -1).unwrap();
        snapshot.drop_if_zero("a");
        assert_eq!(snapshot.quantity("a"), None);
        assert_eq!(snapshot.quantity("b"), Some(2));
    }

    #[test]
    fn scope_distinguishes_warehouse_from_branch() {
        let branch_item = item("a", 1);
        assert_eq!(branch_item.scope(), Scope::Branch("branch-1".to_string()));

        let warehouse_item = CatalogItem {
            branch_id: None,
            ..item("b", 1)
        };
        assert_eq!(warehouse_item.scope(), Scope::Warehouse);
    }
}
