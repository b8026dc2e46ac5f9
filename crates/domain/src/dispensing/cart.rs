use std::fmt;

use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::catalog::ItemKind;

/// One row of the dispensing form. A row with no item chosen or a zero
/// quantity is blank and dispenses nothing.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Eq, PartialEq, new)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    #[serde(default)]
    pub item_id: Option<String>,
    pub quantity: u32,
}

impl CartLine {
    pub fn is_blank(&self) -> bool {
        self.item_id.is_none() || self.quantity == 0
    }

    /// Returns the row to the state the form starts from.
    pub fn clear(&mut self) {
        self.item_id = None;
        self.quantity = 0;
    }
}

/// Requested-vs-available figure for one item that cannot be served.
/// Also the shape the remote system reports per offending item.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq, new)]
pub struct Shortage {
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub requested: u32,
    pub available: u32,
}

impl fmt::Display for Shortage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: requested {}, available {}",
            self.kind, self.requested, self.available
        )
    }
}
