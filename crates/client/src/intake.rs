use domain::catalog::ItemKind;
use domain::intake::{aggregate, split_by_kind, BatchSummary, DraftLine};
use domain::Error;

use crate::remote::{IntakeSubmission, RemoteStore};

/// What was recorded in one intake round, per submission.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IntakeReceipt {
    pub batches: Vec<(ItemKind, BatchSummary)>,
}

/// Aggregates draft rows and records them with the remote system, one
/// submission per item kind.
///
/// Refuses to proceed when nothing survives aggregation; an empty
/// submission is not a successful no-op.
pub async fn submit_intake(
    remote: &dyn RemoteStore,
    lines: &[DraftLine],
) -> Result<IntakeReceipt, Error> {
    let merged = aggregate(lines)?;
    if merged.is_empty() {
        return Err(Error::Validation {
            message: "nothing to submit".to_string(),
        });
    }

    let mut batches = Vec::new();
    for kind in [ItemKind::Medicine, ItemKind::Device] {
        let batch = split_by_kind(&merged, kind);
        if batch.is_empty() {
            continue;
        }

        let submission = IntakeSubmission {
            kind,
            lines: batch.clone(),
        };
        remote
            .record_intake(&submission)
            .await
            .map_err(|e| e.into_domain())?;

        let summary = BatchSummary::of(&batch);
        tracing::info!("recorded {kind} intake: {summary}");
        batches.push((kind, summary));
    }

    Ok(IntakeReceipt { batches })
}
