//! Client-side reconciliation against the remote dispensary backend.

/// Environment-driven configuration
pub mod config;

/// Dispensing submission flow
pub mod dispense;

/// Transport errors and remote failure interpretation
pub mod error;

/// HTTP+JSON implementation of the remote contract
pub mod http;

/// Intake submission flow
pub mod intake;

/// Remote collaborator contract and payloads
pub mod remote;

/// Login, logout and the session heartbeat
pub mod session;

/// In-memory remote for tests and demos
pub mod testing;

pub use config::Config;
pub use error::ClientError;
pub use http::HttpRemote;
pub use remote::RemoteStore;
