/// Validity and remaining-time derivation
pub mod clock;

/// Principal and session records
pub mod record;

pub use record::{session_duration, Principal, SessionRecord};
