use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::Utc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use domain::session::{clock, SessionRecord};
use domain::Error;

use crate::error::ClientError;
use crate::remote::{Credentials, RemoteStore};

/// Process-wide session slot shared between callers and the heartbeat.
pub type SharedSession = Arc<Mutex<Option<SessionRecord>>>;

/// How often the heartbeat re-checks validity.
pub const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(30);

fn lock_slot(slot: &SharedSession) -> MutexGuard<'_, Option<SessionRecord>> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Authenticates against the remote system and seeds the shared slot.
pub async fn login(
    remote: &dyn RemoteStore,
    credentials: &Credentials,
    slot: &SharedSession,
) -> Result<SessionRecord, ClientError> {
    let principal = remote.login(credentials).await?;
    let record = SessionRecord::started(principal, Utc::now());
    *lock_slot(slot) = Some(record.clone());
    tracing::info!(login = %record.principal.login, "session started");
    Ok(record)
}

/// Clears the slot. The supervisor, if any, should be shut down too.
pub fn logout(slot: &SharedSession) {
    *lock_slot(slot) = None;
    tracing::info!("session ended");
}

/// Returns the current record while it is still valid; everything that
/// touches the remote system should be gated on this.
pub fn require_valid(slot: &SharedSession) -> Result<SessionRecord, Error> {
    let guard = lock_slot(slot);
    match guard.as_ref() {
        Some(record) if clock::is_valid(record, Utc::now()) => Ok(record.clone()),
        _ => Err(Error::SessionExpired),
    }
}

/// Background expiry watchdog for the shared session.
///
/// Each tick checks validity: while valid the window is re-stamped so
/// continued presence extends it; once invalid the slot is cleared, the
/// expiry signal is published and the task stops. Aborted on teardown
/// so no stale timer fires after the principal is gone.
pub struct SessionSupervisor {
    task: JoinHandle<()>,
    expired: watch::Receiver<bool>,
}

impl SessionSupervisor {
    pub fn spawn(slot: SharedSession) -> Self {
        Self::spawn_with_interval(slot, HEARTBEAT_INTERVAL)
    }

    pub fn spawn_with_interval(slot: SharedSession, every: Duration) -> Self {
        let (tx, rx) = watch::channel(false);
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            loop {
                interval.tick().await;
                let now = Utc::now();
                let mut guard = lock_slot(&slot);
                match guard.as_ref().cloned() {
                    None => continue,
                    Some(record) if clock::is_valid(&record, now) => {
                        *guard = Some(clock::refresh(&record, now));
                    }
                    Some(_) => {
                        *guard = None;
                        drop(guard);
                        tracing::warn!("session expired, tearing down");
                        let _ = tx.send(true);
                        break;
                    }
                }
            }
        });

        Self { task, expired: rx }
    }

    /// Resolves to true once the session has been torn down for expiry.
    pub fn expiry_signal(&self) -> watch::Receiver<bool> {
        self.expired.clone()
    }

    /// Cancels the heartbeat. Call on logout or component teardown.
    pub fn shutdown(&self) {
        self.task.abort();
    }
}

impl Drop for SessionSupervisor {
    fn drop(&mut self) {
        self.task.abort();
    }
}
