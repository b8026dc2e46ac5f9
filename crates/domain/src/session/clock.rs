use chrono::{DateTime, Duration, Utc};

use super::record::{session_duration, SessionRecord};

/// True while the record's validity window covers `now`.
///
/// Records with no login stamp predate stamping and are treated as
/// valid until their next explicit logout.
pub fn is_valid(record: &SessionRecord, now: DateTime<Utc>) -> bool {
    match record.login_time {
        None => true,
        Some(login) => now - login < session_duration(),
    }
}

/// Re-stamps the window so continued activity extends it. Call only
/// while `is_valid` holds.
pub fn refresh(record: &SessionRecord, now: DateTime<Utc>) -> SessionRecord {
    SessionRecord {
        login_time: Some(now),
        ..record.clone()
    }
}

/// Time remaining before expiry, floored at zero.
pub fn time_left(record: &SessionRecord, now: DateTime<Utc>) -> Duration {
    match record.login_time {
        None => session_duration(),
        Some(login) => (session_duration() - (now - login)).max(Duration::zero()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::record::Principal;
    use chrono::TimeZone;

    fn record_at(login: DateTime<Utc>) -> SessionRecord {
        SessionRecord::started(
            Principal {
                id: "u1".to_string(),
                login: "anna".to_string(),
                role: "branch".to_string(),
                display_name: Some("Anna".to_string()),
            },
            login,
        )
    }

    fn t0() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn valid_strictly_inside_the_window() {
        let record = record_at(t0());

        let just_inside = t0() + session_duration() - Duration::milliseconds(1);
        let boundary = t0() + session_duration();
        let just_outside = t0() + session_duration() + Duration::milliseconds(1);

        assert!(is_valid(&record, just_inside));
        assert!(!is_valid(&record, boundary));
        assert!(!is_valid(&record, just_outside));
    }

    #[test]
    fn unstamped_records_stay_valid() {
        let mut record = record_at(t0());
        record.login_time = None;

        assert!(is_valid(&record, t0() + Duration::days(365)));
        assert_eq!(time_left(&record, t0()), session_duration());
    }

    #[test]
    fn time_left_decreases_without_refresh() {
        let record = record_at(t0());

        let early = time_left(&record, t0() + Duration::minutes(10));
        let late = time_left(&record, t0() + Duration::minutes(20));

        assert!(early > late);
        assert_eq!(early - late, Duration::minutes(10));
    }

    #[test]
    fn time_left_floors_at_zero() {
        let record = record_at(t0());
        assert_eq!(
            time_left(&record, t0() + Duration::hours(9)),
            Duration::zero()
        );
    }

    #[test]
    fn refresh_slides_the_window() {
        let record = record_at(t0());
        let later = t0() + Duration::hours(7);

        let refreshed = refresh(&record, later);

        assert_eq!(refreshed.login_time, Some(later));
        assert_eq!(refreshed.principal, record.principal);
        assert!(is_valid(&refreshed, t0() + Duration::hours(14)));
        assert!(!is_valid(&record, t0() + Duration::hours(14)));
    }
}
