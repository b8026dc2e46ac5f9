/// Merge of duplicate receipt lines
pub mod aggregate;

/// Draft rows and the identity used for merging
pub mod lines;

pub use aggregate::{aggregate, split_by_kind, BatchSummary};
pub use lines::{AggregationKey, DraftLine};
