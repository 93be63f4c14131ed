use crate::{Error, Result};
use chrono::{NaiveTime, TimeDelta, Timelike};
use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

/// Format accepted for tee time labels, e.g. `9:00 AM`
const CLOCK_FORMAT: &str = "%I:%M %p";

/// Wall-clock time of day with minute precision.
///
/// There is no date or timezone attached, so differences between two values
/// only make sense for slots listed on the same booking page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Parse a 12-hour clock label with an AM/PM designator
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        NaiveTime::parse_from_str(trimmed, CLOCK_FORMAT)
            .map(Self)
            .map_err(|_| Error::Format(text.to_string()))
    }

    /// Build a time from a 24-hour hour and minute
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }
}

impl Sub for TimeOfDay {
    type Output = TimeDelta;

    fn sub(self, rhs: Self) -> TimeDelta {
        self.0.signed_duration_since(rhs.0)
    }
}

impl FromStr for TimeOfDay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%-I:%M %p"))
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_orders_by_minute() {
        let nine = TimeOfDay::parse("9:00 AM").unwrap();
        let nine_oh_one = TimeOfDay::parse("9:01 AM").unwrap();
        assert!(nine < nine_oh_one);
    }

    #[test]
    fn test_noon_is_after_late_morning() {
        let noon = TimeOfDay::parse("12:00 PM").unwrap();
        let before_noon = TimeOfDay::parse("11:59 AM").unwrap();
        assert!(noon > before_noon);
        assert_eq!(noon.hour(), 12);
    }

    #[test]
    fn test_midnight_is_start_of_day() {
        let midnight = TimeOfDay::parse("12:00 AM").unwrap();
        assert_eq!(midnight, TimeOfDay::from_hm(0, 0).unwrap());
    }

    #[test]
    fn test_parse_accepts_padding_and_case() {
        let padded = TimeOfDay::parse("09:05 AM").unwrap();
        let lower = TimeOfDay::parse(" 9:05 am ").unwrap();
        assert_eq!(padded, lower);
        assert_eq!(padded.minute(), 5);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            TimeOfDay::parse("bad"),
            Err(Error::Format("bad".to_string()))
        );
        assert!(TimeOfDay::parse("13:00").is_err());
        assert!(TimeOfDay::parse("").is_err());
    }

    #[test]
    fn test_subtraction_is_signed() {
        let eight = TimeOfDay::parse("8:00 AM").unwrap();
        let nine_fifteen = TimeOfDay::parse("9:15 AM").unwrap();
        assert_eq!(nine_fifteen - eight, TimeDelta::minutes(75));
        assert_eq!(eight - nine_fifteen, TimeDelta::minutes(-75));
    }

    #[test]
    fn test_display_uses_twelve_hour_clock() {
        let time = TimeOfDay::from_hm(14, 7).unwrap();
        assert_eq!(time.to_string(), "2:07 PM");
        assert_eq!(serde_json::to_string(&time).unwrap(), "\"2:07 PM\"");
    }
}
