/// Canonical status derivation
pub mod classify;

/// Shipment records as the remote returns them
pub mod record;

/// Sorted and filtered read-side projection
pub mod view;

pub use classify::ShipmentStatus;
pub use record::{Shipment, ShipmentLine};
pub use view::{view, SortOrder, StatusFilter};
