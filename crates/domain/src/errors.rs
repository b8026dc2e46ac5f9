use thiserror::Error;

use crate::dispensing::Shortage;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Entity not found: {entity}")]
    NotFound { entity: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Stock cannot cover the request, locally or as reported by the
    /// remote system. Display renders one line per offending item.
    #[error("{}", render_shortages(.shortages))]
    InsufficientStock { shortages: Vec<Shortage> },

    #[error("Remote call failed: {message}")]
    Remote { message: String },

    #[error("Session expired")]
    SessionExpired,

    /// Caller tried to take more than the mirror holds. The caller must
    /// pre-validate sufficiency, so this is a contract violation.
    #[error("Stock conflict for {item_id}: have {have}, tried to take {take}")]
    StockConflict {
        item_id: String,
        have: u32,
        take: u32,
    },
}

fn render_shortages(shortages: &[Shortage]) -> String {
    shortages
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ItemKind;

    #[test]
    fn insufficient_stock_renders_one_line_per_item() {
        let err = Error::InsufficientStock {
            shortages: vec![
                Shortage::new(ItemKind::Medicine, 3, 1),
                Shortage::new(ItemKind::Device, 2, 0),
            ],
        };

        assert_eq!(
            err.to_string(),
            "medicine: requested 3, available 1\ndevice: requested 2, available 0"
        );
    }
}
