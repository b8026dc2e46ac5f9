use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Principal record returned by the login endpoint.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    pub id: String,
    pub login: String,
    pub role: String,
    /// Role-specific display name chosen by the remote system
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Fixed validity window granted at login and on every heartbeat.
pub fn session_duration() -> Duration {
    Duration::hours(8)
}

/// Authenticated principal plus the login stamp the clock runs on.
/// Created on login, re-stamped while valid, destroyed on logout or
/// detected expiry.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    #[serde(flatten)]
    pub principal: Principal,
    /// Absent for principals authenticated before stamping existed
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub login_time: Option<DateTime<Utc>>,
}

impl SessionRecord {
    pub fn started(principal: Principal, now: DateTime<Utc>) -> Self {
        Self {
            principal,
            login_time: Some(now),
        }
    }
}
