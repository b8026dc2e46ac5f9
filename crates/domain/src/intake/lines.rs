use derive_new::new;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::ItemKind;

/// One editable row of an intake form. Never persisted; destroyed on
/// submission or removal.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq, new)]
#[serde(rename_all = "camelCase")]
pub struct DraftLine {
    pub kind: ItemKind,
    /// None until the user picks an item
    #[serde(default)]
    pub item_id: Option<String>,
    pub quantity: u32,
    #[serde(default)]
    pub purchase_price: Option<Decimal>,
    #[serde(default)]
    pub sell_price: Option<Decimal>,
}

impl DraftLine {
    /// Identity deciding whether two rows are the same receipt line.
    /// Rows with no item chosen have no identity.
    pub fn key(&self) -> Option<AggregationKey> {
        self.item_id.as_ref().map(|item_id| AggregationKey {
            kind: self.kind,
            item_id: item_id.clone(),
            purchase_price: self.purchase_price,
            sell_price: self.sell_price,
        })
    }
}

/// Two draft lines with an equal key are the same receipt line and must
/// be merged before submission.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct AggregationKey {
    pub kind: ItemKind,
    pub item_id: String,
    pub purchase_price: Option<Decimal>,
    pub sell_price: Option<Decimal>,
}
