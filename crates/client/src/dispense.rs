use ulid::Ulid;

use domain::catalog::{ItemKind, StockSnapshot};
use domain::dispensing::{
    apply_confirmed, is_empty_cart, reset_cart, validate_cart, CartLine, Phase,
};
use domain::Error;

use crate::remote::{DispenseLine, DispenseSubmission, RemoteStore};

/// Who, where, and for whom a cart is dispensed.
#[derive(Clone, Debug)]
pub struct DispenseContext {
    pub patient_id: String,
    pub employee_id: String,
    pub branch_id: String,
}

/// Drives one dispensing transaction end to end.
///
/// The snapshot is mutated only after the remote confirms, within the
/// same synchronous continuation as the confirmation, so a rejection of
/// any kind leaves it byte-for-byte unchanged.
pub struct Dispenser<'a> {
    remote: &'a dyn RemoteStore,
    phase: Phase,
}

impl<'a> Dispenser<'a> {
    pub fn new(remote: &'a dyn RemoteStore) -> Self {
        Self {
            remote,
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Validates the cart against the local mirror, submits it as one
    /// transaction, and rolls the mirror forward on success.
    pub async fn submit(
        &mut self,
        cart: &mut [CartLine],
        snapshot: &mut StockSnapshot,
        ctx: &DispenseContext,
    ) -> Result<(), Error> {
        self.phase = Phase::Validating;

        if is_empty_cart(cart) {
            self.phase = Phase::Rejected;
            return Err(Error::Validation {
                message: "nothing to dispense".to_string(),
            });
        }

        if let Err(err) = validate_cart(cart, snapshot) {
            self.phase = Phase::Rejected;
            tracing::warn!("dispense rejected locally: {err}");
            return Err(err);
        }

        let submission = build_submission(cart, snapshot, ctx);

        self.phase = Phase::Submitting;
        if let Err(err) = self.remote.submit_dispense(&submission).await {
            self.phase = Phase::Rejected;
            let err = err.into_domain();
            tracing::warn!("dispense rejected by remote: {err}");
            return Err(err);
        }

        // Confirmed. Apply and reset in the same continuation, no await
        // between the response and the mutation.
        apply_confirmed(cart, snapshot)?;
        reset_cart(cart);
        self.phase = Phase::Applied;
        tracing::info!(command_id = %submission.command_id, "dispense applied");
        Ok(())
    }
}

fn build_submission(
    cart: &[CartLine],
    snapshot: &StockSnapshot,
    ctx: &DispenseContext,
) -> DispenseSubmission {
    let mut medicine_lines = Vec::new();
    let mut device_lines = Vec::new();

    for line in cart {
        let Some(item_id) = line.item_id.as_deref() else {
            continue;
        };
        if line.quantity == 0 {
            continue;
        }
        let Some(item) = snapshot.get(item_id) else {
            continue;
        };

        let out = DispenseLine {
            item_id: item_id.to_string(),
            quantity: line.quantity,
        };
        match item.kind {
            ItemKind::Medicine => medicine_lines.push(out),
            ItemKind::Device => device_lines.push(out),
        }
    }

    DispenseSubmission {
        command_id: Ulid::new().to_string(),
        patient_id: ctx.patient_id.clone(),
        employee_id: ctx.employee_id.clone(),
        branch_id: ctx.branch_id.clone(),
        medicine_lines,
        device_lines,
    }
}
