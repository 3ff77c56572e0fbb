use std::{
    fmt::Display,
    ops::{Add, Sub},
};

use tokio::task_local;

use super::Duration;

task_local! {
    pub static FIXED_NOW: DateTime;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct DateTime {
    delegate: chrono::DateTime<chrono::Local>,
}

impl DateTime {
    fn new<T: chrono::TimeZone>(delegate: chrono::DateTime<T>) -> Self {
        Self {
            delegate: delegate.with_timezone(&chrono::Local),
        }
    }

    pub fn now() -> Self {
        FIXED_NOW
            .try_with(|t| *t)
            .unwrap_or_else(|_| chrono::Local::now().into())
    }

    pub fn from_iso(iso8601: &str) -> anyhow::Result<Self> {
        Ok(chrono::DateTime::parse_from_rfc3339(iso8601)?.into())
    }

    pub fn to_iso_string(&self) -> String {
        self.delegate.to_rfc3339()
    }

    pub fn to_human_readable(&self) -> String {
        chrono_humanize::HumanTime::from(self.delegate).to_string()
    }

    pub fn start_of_day(&self) -> anyhow::Result<Self> {
        //an absent local midnight (DST gap) resolves to the earliest valid instant
        let dt = self
            .delegate
            .with_time(chrono::NaiveTime::MIN)
            .earliest()
            .ok_or_else(|| anyhow::anyhow!("Error resolving local midnight for {:?}", self))?;

        Ok(dt.into())
    }

    pub fn on_prev_day(&self) -> Self {
        //failing only at the edges of what can be stored in a date-time
        self.delegate
            .checked_sub_signed(chrono::Duration::days(1))
            .unwrap()
            .into()
    }

    pub fn elapsed_since(&self, since: Self) -> Duration {
        Duration::new(self.delegate - since.delegate)
    }

    pub fn into_db(&self) -> chrono::DateTime<chrono::Local> {
        self.delegate
    }
}

impl Display for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.delegate)
    }
}

impl Add<Duration> for DateTime {
    type Output = DateTime;

    fn add(self, rhs: Duration) -> Self::Output {
        Self::new(self.delegate + rhs.delegate)
    }
}

impl Sub<Duration> for DateTime {
    type Output = DateTime;

    fn sub(self, rhs: Duration) -> Self::Output {
        Self::new(self.delegate - rhs.delegate)
    }
}

impl<T: chrono::TimeZone> From<chrono::DateTime<T>> for DateTime {
    fn from(val: chrono::DateTime<T>) -> Self {
        DateTime::new(val)
    }
}
