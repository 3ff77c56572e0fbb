use super::{DateTime, Duration};

/// Time scopes the dashboard aggregates over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregationWindow {
    RollingHour,
    RollingDay,
    PreviousDay,
}

/// Concrete bounds of a window, anchored to a reference instant.
///
/// Rolling windows are open at the start and closed at the reference;
/// calendar windows are closed on both ends.
#[derive(Debug, Clone)]
pub struct WindowBounds {
    pub start: DateTime,
    pub end: DateTime,
    pub includes_start: bool,
}

impl AggregationWindow {
    pub fn bounds_at(&self, reference: DateTime) -> anyhow::Result<WindowBounds> {
        let bounds = match self {
            AggregationWindow::RollingHour => WindowBounds {
                start: reference - Duration::hours(1),
                end: reference,
                includes_start: false,
            },
            AggregationWindow::RollingDay => WindowBounds {
                start: reference - Duration::hours(24),
                end: reference,
                includes_start: false,
            },
            AggregationWindow::PreviousDay => WindowBounds {
                start: reference.on_prev_day().start_of_day()?,
                end: reference.start_of_day()?,
                includes_start: true,
            },
        };

        Ok(bounds)
    }
}

impl WindowBounds {
    pub fn contains(&self, at: DateTime) -> bool {
        let after_start = if self.includes_start {
            at >= self.start
        } else {
            at > self.start
        };

        after_start && at <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> DateTime {
        DateTime::from_iso("2025-06-11T10:15:00+09:00").unwrap()
    }

    #[test]
    fn test_rolling_hour_excludes_start_includes_end() {
        let now = reference();

        let bounds = AggregationWindow::RollingHour.bounds_at(now).unwrap();

        assert_eq!(bounds.start, now - Duration::hours(1));
        assert_eq!(bounds.end, now);
        assert!(!bounds.contains(now - Duration::hours(1)));
        assert!(bounds.contains(now - Duration::minutes(59)));
        assert!(bounds.contains(now));
        assert!(!bounds.contains(now + Duration::seconds(1)));
    }

    #[test]
    fn test_rolling_day_spans_24_hours() {
        let now = reference();

        let bounds = AggregationWindow::RollingDay.bounds_at(now).unwrap();

        assert_eq!(bounds.start, now - Duration::hours(24));
        assert_eq!(bounds.end, now);
        assert!(!bounds.contains(now - Duration::hours(24)));
        assert!(bounds.contains(now - Duration::hours(23)));
    }

    #[test]
    fn test_previous_day_is_closed_midnight_to_midnight() {
        let now = reference();

        let bounds = AggregationWindow::PreviousDay.bounds_at(now).unwrap();

        assert_eq!(bounds.end, now.start_of_day().unwrap());
        assert_eq!(bounds.start, now.on_prev_day().start_of_day().unwrap());
        assert!(bounds.contains(bounds.start));
        assert!(bounds.contains(bounds.end));
        assert!(!bounds.contains(now));
    }
}
