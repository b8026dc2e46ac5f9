/// Cart rows and shortage figures
pub mod cart;

/// Validation against the mirror and post-confirmation application
pub mod reconcile;

pub use cart::{CartLine, Shortage};
pub use reconcile::{apply_confirmed, is_empty_cart, reset_cart, validate_cart, Phase};
