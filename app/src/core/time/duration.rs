#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Duration {
    pub(super) delegate: chrono::Duration,
}

impl Duration {
    pub(super) fn new(delegate: chrono::Duration) -> Self {
        Self { delegate }
    }

    pub fn zero() -> Self {
        Self::new(chrono::Duration::zero())
    }

    pub fn days(days: i64) -> Self {
        Self::new(chrono::Duration::days(days))
    }

    pub fn hours(hours: i64) -> Self {
        Self::new(chrono::Duration::hours(hours))
    }

    pub fn minutes(minutes: i64) -> Self {
        Self::new(chrono::Duration::minutes(minutes))
    }

    pub fn seconds(seconds: i64) -> Self {
        Self::new(chrono::Duration::seconds(seconds))
    }

    pub fn as_secs(&self) -> i64 {
        self.delegate.num_seconds()
    }

    pub fn as_minutes(&self) -> i64 {
        self.delegate.num_minutes()
    }

    pub fn as_hours(&self) -> i64 {
        self.delegate.num_hours()
    }
}

impl std::ops::Add<Duration> for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Self::Output {
        Self {
            delegate: self.delegate + rhs.delegate,
        }
    }
}
