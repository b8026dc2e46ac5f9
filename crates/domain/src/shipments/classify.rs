use chrono::{DateTime, Utc};

use super::record::Shipment;

/// Canonical status derived from whatever shape the remote sent.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ShipmentStatus {
    Accepted,
    Declined,
    /// Awaiting a decision at the destination branch
    Pending,
    /// An explicit status the client does not act on, e.g. cancelled
    Other,
}

const DECLINED_TOKENS: &[&str] = &["declined", "rejected"];

impl Shipment {
    /// True when any decline signal is present: a declined/rejected
    /// status token, a true decline flag, or a non-empty rejection
    /// reason. Presence of a reason is the most reliable signal.
    pub fn is_declined(&self) -> bool {
        if let Some(status) = &self.status {
            if DECLINED_TOKENS.contains(&status.trim().to_ascii_lowercase().as_str()) {
                return true;
            }
        }
        if self.rejected == Some(true) {
            return true;
        }
        self.rejection_reason
            .as_deref()
            .is_some_and(|reason| !reason.trim().is_empty())
    }

    /// True when an accepted status token or a true acceptance flag is
    /// present. Not mutually exclusive with [`Self::is_declined`] on
    /// malformed input; [`Self::classification`] resolves the tie.
    pub fn is_accepted(&self) -> bool {
        if let Some(status) = &self.status {
            if status.trim().eq_ignore_ascii_case("accepted") {
                return true;
            }
        }
        self.accepted == Some(true)
    }

    /// Ordered predicate chain; decline signals outrank acceptance.
    pub fn classification(&self) -> ShipmentStatus {
        if self.is_declined() {
            return ShipmentStatus::Declined;
        }
        if self.is_accepted() {
            return ShipmentStatus::Accepted;
        }
        match self.status.as_deref().map(str::trim) {
            None | Some("") => ShipmentStatus::Pending,
            Some(status) if status.eq_ignore_ascii_case("pending") => ShipmentStatus::Pending,
            Some(_) => ShipmentStatus::Other,
        }
    }

    /// First present timestamp out of the candidate fields, used only
    /// for sorting. Records with no date sort as the epoch.
    pub fn effective_date(&self) -> DateTime<Utc> {
        self.created_at
            .or(self.sent_at)
            .or(self.updated_at)
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }
}
