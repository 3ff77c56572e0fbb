#[macro_export]
macro_rules! t {
    (now) => {{
        $crate::core::time::DateTime::now()
    }};

    ($amount:literal seconds) => {{
        $crate::core::time::Duration::seconds($amount)
    }};
    ($amount:literal minutes) => {{
        $crate::core::time::Duration::minutes($amount)
    }};
    ($amount:literal hours) => {{
        $crate::core::time::Duration::hours($amount)
    }};
    ($amount:literal days) => {{
        $crate::core::time::Duration::days($amount)
    }};

    ($amount:literal seconds ago) => {{
        t!(now) - t!($amount seconds)
    }};
    ($amount:literal minutes ago) => {{
        t!(now) - t!($amount minutes)
    }};
    ($amount:literal hours ago) => {{
        t!(now) - t!($amount hours)
    }};
    ($amount:literal days ago) => {{
        t!(now) - t!($amount days)
    }};
}

#[cfg(test)]
mod tests {
    use crate::core::time::*;

    #[test]
    fn test_now() {
        let now = t!(now);
        assert!(DateTime::now().elapsed_since(now) < Duration::seconds(1));
    }

    #[test]
    fn test_duration_seconds() {
        let duration = t!(10 seconds);

        assert_eq!(duration.as_secs(), 10);
    }

    #[test]
    fn test_duration_minutes() {
        let duration = t!(10 minutes);

        assert_eq!(duration.as_minutes(), 10);
    }

    #[test]
    fn test_duration_hours() {
        let duration = t!(10 hours);

        assert_eq!(duration.as_hours(), 10);
    }

    #[test]
    fn test_duration_hours_ago() {
        let now = DateTime::now();
        let dt = t!(10 hours ago);

        assert!(now >= dt);
        assert!(now - Duration::hours(10) <= dt);
    }

    #[tokio::test]
    async fn test_fixed_now() {
        let fixed = DateTime::from_iso("2025-06-10T12:00:00+09:00").unwrap();

        let now = FIXED_NOW.scope(fixed, async { t!(now) }).await;

        assert_eq!(now, fixed);
    }
}
