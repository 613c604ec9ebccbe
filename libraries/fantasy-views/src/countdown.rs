//! Deadline countdowns
//!
//! The screens show the time left before a matchweek deadline in a few
//! slightly different phrasings; all of them read "Deadline passed" once no
//! time is left.

use chrono::{DateTime, Duration, Utc};

pub const DEADLINE_PASSED: &str = "Deadline passed";

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Phrasing used by a particular screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownStyle {
    /// Admin table: `2d 3h left`, `3h 15m left`, `15m left`
    Short,
    /// Matchweek list: like `Short`, but `10 days left` beyond a week
    List,
    /// Matchweek detail: `10 days remaining`, `2d 3h remaining`, `15 minutes remaining`
    Detail,
    /// Dashboard card: `2d 3h` or `3h`
    Dashboard,
}

/// Time left broken into whole units. All zero once the deadline passed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Countdown {
    pub total_ms: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    pub fn from_duration(time_left: Duration) -> Self {
        let total = time_left.num_milliseconds();
        if total <= 0 {
            return Self::default();
        }

        Self {
            total_ms: total,
            days: total / MS_PER_DAY,
            hours: (total % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (total % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (total % MS_PER_MINUTE) / MS_PER_SECOND,
        }
    }

    /// Countdown to `deadline`; zero when there is none.
    pub fn until(deadline: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Self {
        deadline.map_or_else(Self::default, |d| Self::from_duration(d - now))
    }

    pub fn is_over(&self) -> bool {
        self.total_ms <= 0
    }
}

/// Render the time left in the given style.
pub fn countdown_text(time_left: Duration, style: CountdownStyle) -> String {
    let c = Countdown::from_duration(time_left);
    if c.is_over() {
        return DEADLINE_PASSED.to_string();
    }

    match style {
        CountdownStyle::Short => short_text(&c, "left"),
        CountdownStyle::List if c.days > 7 => format!("{} days left", c.days),
        CountdownStyle::List => short_text(&c, "left"),
        CountdownStyle::Detail if c.days > 7 => format!("{} days remaining", c.days),
        CountdownStyle::Detail if c.days > 0 => format!("{}d {}h remaining", c.days, c.hours),
        CountdownStyle::Detail if c.hours > 0 => format!("{}h {}m remaining", c.hours, c.minutes),
        CountdownStyle::Detail => format!("{} minutes remaining", c.minutes),
        CountdownStyle::Dashboard if c.days > 0 => format!("{}d {}h", c.days, c.hours),
        CountdownStyle::Dashboard => format!("{}h", c.hours),
    }
}

pub fn deadline_text(deadline: DateTime<Utc>, now: DateTime<Utc>, style: CountdownStyle) -> String {
    countdown_text(deadline - now, style)
}

fn short_text(c: &Countdown, suffix: &str) -> String {
    if c.days > 0 {
        format!("{}d {}h {}", c.days, c.hours, suffix)
    } else if c.hours > 0 {
        format!("{}h {}m {}", c.hours, c.minutes, suffix)
    } else {
        format!("{}m {}", c.minutes, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn left(days: i64, hours: i64, minutes: i64) -> Duration {
        Duration::days(days) + Duration::hours(hours) + Duration::minutes(minutes)
    }

    #[test]
    fn test_passed_deadline() {
        for style in [
            CountdownStyle::Short,
            CountdownStyle::List,
            CountdownStyle::Detail,
            CountdownStyle::Dashboard,
        ] {
            assert_eq!(countdown_text(Duration::zero(), style), DEADLINE_PASSED);
            assert_eq!(countdown_text(Duration::minutes(-5), style), DEADLINE_PASSED);
        }
    }

    #[test]
    fn test_short_style() {
        assert_eq!(countdown_text(left(2, 3, 10), CountdownStyle::Short), "2d 3h left");
        assert_eq!(countdown_text(left(0, 3, 15), CountdownStyle::Short), "3h 15m left");
        assert_eq!(countdown_text(left(0, 0, 15), CountdownStyle::Short), "15m left");
        assert_eq!(countdown_text(left(10, 0, 0), CountdownStyle::Short), "10d 0h left");
    }

    #[test]
    fn test_list_style() {
        assert_eq!(countdown_text(left(10, 4, 0), CountdownStyle::List), "10 days left");
        assert_eq!(countdown_text(left(7, 4, 0), CountdownStyle::List), "7d 4h left");
        assert_eq!(countdown_text(left(0, 0, 1), CountdownStyle::List), "1m left");
    }

    #[test]
    fn test_detail_style() {
        assert_eq!(countdown_text(left(8, 1, 0), CountdownStyle::Detail), "8 days remaining");
        assert_eq!(countdown_text(left(2, 3, 0), CountdownStyle::Detail), "2d 3h remaining");
        assert_eq!(countdown_text(left(0, 3, 15), CountdownStyle::Detail), "3h 15m remaining");
        assert_eq!(countdown_text(left(0, 0, 15), CountdownStyle::Detail), "15 minutes remaining");
    }

    #[test]
    fn test_dashboard_style() {
        assert_eq!(countdown_text(left(2, 3, 30), CountdownStyle::Dashboard), "2d 3h");
        assert_eq!(countdown_text(left(0, 5, 30), CountdownStyle::Dashboard), "5h");
    }

    #[test]
    fn test_countdown_breakdown() {
        let now = Utc::now();
        let c = Countdown::until(Some(now + left(1, 2, 3) + Duration::seconds(4)), now);
        assert_eq!((c.days, c.hours, c.minutes, c.seconds), (1, 2, 3, 4));

        assert_eq!(Countdown::until(None, now), Countdown::default());
        assert_eq!(Countdown::until(Some(now - Duration::hours(1)), now), Countdown::default());
        assert!(Countdown::default().is_over());
    }
}
