use crate::catalog::StockSnapshot;
use crate::errors::Error;

use super::cart::{CartLine, Shortage};

/// Where a submission attempt currently stands.
///
/// Rejected attempts leave the snapshot untouched; Applied is the only
/// state that mutates it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    Idle,
    Validating,
    Submitting,
    Applied,
    Rejected,
}

/// True when no row of the cart would dispense anything.
pub fn is_empty_cart(cart: &[CartLine]) -> bool {
    cart.iter().all(CartLine::is_blank)
}

/// Per-item totals across the cart, first-seen order. Duplicate rows for
/// one item count against the same stock.
fn line_totals(cart: &[CartLine]) -> Vec<(String, u32)> {
    let mut totals: Vec<(String, u32)> = Vec::new();
    for line in cart {
        let Some(item_id) = line.item_id.as_deref() else {
            continue;
        };
        if line.quantity == 0 {
            continue;
        }
        match totals.iter_mut().find(|(id, _)| id.as_str() == item_id) {
            Some((_, total)) => *total += line.quantity,
            None => totals.push((item_id.to_string(), line.quantity)),
        }
    }
    totals
}

/// Advisory pre-check of a cart against the local mirror.
///
/// Collects every item whose requested total exceeds the mirrored
/// quantity so all violations are reported at once.
pub fn validate_cart(cart: &[CartLine], snapshot: &StockSnapshot) -> Result<(), Error> {
    let mut shortages = Vec::new();

    for (item_id, requested) in line_totals(cart) {
        let Some(item) = snapshot.get(&item_id) else {
            return Err(Error::NotFound {
                entity: format!("catalog item {item_id}"),
            });
        };
        if requested > item.quantity {
            shortages.push(Shortage::new(item.kind, requested, item.quantity));
        }
    }

    if !shortages.is_empty() {
        return Err(Error::InsufficientStock { shortages });
    }
    Ok(())
}

/// Applies a confirmed cart to the local mirror in one pass.
///
/// Every total is re-checked before any is applied, so the snapshot is
/// either fully updated or untouched.
pub fn apply_confirmed(cart: &[CartLine], snapshot: &mut StockSnapshot) -> Result<(), Error> {
    let totals = line_totals(cart);

    for (item_id, requested) in &totals {
        let have = snapshot.quantity(item_id).ok_or_else(|| Error::NotFound {
            entity: format!("catalog item {item_id}"),
        })?;
        if *requested > have {
            return Err(Error::StockConflict {
                item_id: item_id.clone(),
                have,
                take: *requested,
            });
        }
    }

    for (item_id, requested) in totals {
        snapshot.apply_delta(&item_id, -i64::from(requested))?;
        snapshot.drop_if_zero(&item_id);
    }
    Ok(())
}

/// Resets every row so the form is ready for the next transaction
/// without re-fetching the catalog.
pub fn reset_cart(cart: &mut [CartLine]) {
    for line in cart.iter_mut() {
        line.clear();
    }
}
