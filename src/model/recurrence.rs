// File: ./src/model/recurrence.rs
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    /// RFC 5545 `FREQ` value.
    pub fn rrule_freq(self) -> &'static str {
        match self {
            Frequency::Daily => "DAILY",
            Frequency::Weekly => "WEEKLY",
            Frequency::Monthly => "MONTHLY",
            Frequency::Yearly => "YEARLY",
        }
    }

    fn unit(self, plural: bool) -> &'static str {
        match (self, plural) {
            (Frequency::Daily, false) => "day",
            (Frequency::Daily, true) => "days",
            (Frequency::Weekly, false) => "week",
            (Frequency::Weekly, true) => "weeks",
            (Frequency::Monthly, false) => "month",
            (Frequency::Monthly, true) => "months",
            (Frequency::Yearly, false) => "year",
            (Frequency::Yearly, true) => "years",
        }
    }
}

/// A recurrence rule recognized in the input.
///
/// `week_of_month` is only ever set together with `Frequency::Monthly` and a
/// single weekday ("first monday", "last friday"). `-1` means "last" for both
/// `day_of_month` and `week_of_month`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringPattern {
    pub frequency: Frequency,
    pub interval: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub days_of_week: Vec<Weekday>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_month: Option<i8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_of_month: Option<i8>,
}

impl RecurringPattern {
    pub fn new(frequency: Frequency) -> Self {
        Self {
            frequency,
            interval: 1,
            days_of_week: Vec::new(),
            day_of_month: None,
            week_of_month: None,
        }
    }

    pub fn is_positional(&self) -> bool {
        self.week_of_month.is_some()
    }

    /// Appends a weekday, keeping first-seen order and dropping repeats.
    pub fn add_weekday(&mut self, day: Weekday) {
        if !self.days_of_week.contains(&day) {
            self.days_of_week.push(day);
        }
    }

    /// Two patterns merge when neither is tied to a day of the month and
    /// they share a frequency, and either both are weekly weekday lists with
    /// the same interval ("every monday" + "every friday"), or one only
    /// carries the interval and the other only the weekdays ("every 2 weeks"
    /// + "on fridays").
    pub fn can_merge(&self, other: &RecurringPattern) -> bool {
        let simple = |p: &RecurringPattern| p.day_of_month.is_none() && p.week_of_month.is_none();
        if self.frequency != other.frequency || !simple(self) || !simple(other) {
            return false;
        }
        match (self.days_of_week.is_empty(), other.days_of_week.is_empty()) {
            (false, false) => self.frequency == Frequency::Weekly && self.interval == other.interval,
            (true, false) => self.interval > 1 && other.interval == 1,
            (false, true) => self.interval == 1 && other.interval > 1,
            (true, true) => false,
        }
    }

    pub fn merge(&mut self, other: RecurringPattern) {
        self.interval = self.interval.max(other.interval);
        for day in other.days_of_week {
            self.add_weekday(day);
        }
    }

    /// Renders the pattern as an RRULE value (without the `RRULE:` prefix).
    pub fn to_rrule(&self) -> String {
        let mut parts = vec![format!("FREQ={}", self.frequency.rrule_freq())];
        if self.interval > 1 {
            parts.push(format!("INTERVAL={}", self.interval));
        }
        if !self.days_of_week.is_empty() {
            let prefix = self.week_of_month.map(|n| n.to_string()).unwrap_or_default();
            let days: Vec<String> = self
                .days_of_week
                .iter()
                .map(|d| format!("{}{}", prefix, weekday_code(*d)))
                .collect();
            parts.push(format!("BYDAY={}", days.join(",")));
        }
        if let Some(day) = self.day_of_month {
            parts.push(format!("BYMONTHDAY={}", day));
        }
        parts.join(";")
    }
}

impl fmt::Display for RecurringPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(week) = self.week_of_month
            && let Some(day) = self.days_of_week.first()
        {
            return write!(
                f,
                "{} {} of every month",
                ordinal_word(week),
                weekday_name(*day)
            );
        }
        if let Some(day) = self.day_of_month {
            return if day == -1 {
                write!(f, "last day of every month")
            } else {
                write!(f, "day {} of every month", day)
            };
        }

        let every = if self.interval > 1 {
            format!(
                "every {} {}",
                self.interval,
                self.frequency.unit(true)
            )
        } else {
            format!("every {}", self.frequency.unit(false))
        };
        if self.days_of_week.is_empty() {
            return write!(f, "{}", every);
        }
        let days: Vec<&str> = self.days_of_week.iter().map(|d| weekday_name(*d)).collect();
        if self.interval > 1 {
            write!(f, "{} on {}", every, days.join(", "))
        } else {
            write!(f, "every {}", days.join(", "))
        }
    }
}

pub fn weekday_code(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "MO",
        Weekday::Tue => "TU",
        Weekday::Wed => "WE",
        Weekday::Thu => "TH",
        Weekday::Fri => "FR",
        Weekday::Sat => "SA",
        Weekday::Sun => "SU",
    }
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

fn ordinal_word(n: i8) -> String {
    match n {
        -1 => "last".to_string(),
        1 => "first".to_string(),
        2 => "second".to_string(),
        3 => "third".to_string(),
        4 => "fourth".to_string(),
        5 => "fifth".to_string(),
        other => format!("{}th", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_rrule_rendering() {
        assert_eq!(RecurringPattern::new(Frequency::Daily).to_rrule(), "FREQ=DAILY");

        let mut weekly = RecurringPattern::new(Frequency::Weekly);
        weekly.add_weekday(Weekday::Mon);
        weekly.add_weekday(Weekday::Fri);
        weekly.add_weekday(Weekday::Mon);
        assert_eq!(weekly.to_rrule(), "FREQ=WEEKLY;BYDAY=MO,FR");

        let mut positional = RecurringPattern::new(Frequency::Monthly);
        positional.add_weekday(Weekday::Fri);
        positional.week_of_month = Some(-1);
        assert_eq!(positional.to_rrule(), "FREQ=MONTHLY;BYDAY=-1FR");

        let mut every_other = RecurringPattern::new(Frequency::Weekly);
        every_other.interval = 2;
        assert_eq!(every_other.to_rrule(), "FREQ=WEEKLY;INTERVAL=2");

        let mut mid_month = RecurringPattern::new(Frequency::Monthly);
        mid_month.day_of_month = Some(15);
        assert_eq!(mid_month.to_rrule(), "FREQ=MONTHLY;BYMONTHDAY=15");
    }

    #[test]
    fn test_merge_rules() {
        let mut monday = RecurringPattern::new(Frequency::Weekly);
        monday.add_weekday(Weekday::Mon);
        let mut friday = RecurringPattern::new(Frequency::Weekly);
        friday.add_weekday(Weekday::Fri);
        assert!(monday.can_merge(&friday));

        let daily = RecurringPattern::new(Frequency::Daily);
        assert!(!monday.can_merge(&daily));

        let mut biweekly = friday.clone();
        biweekly.interval = 2;
        assert!(!monday.can_merge(&biweekly));

        monday.merge(friday);
        assert_eq!(monday.days_of_week, vec![Weekday::Mon, Weekday::Fri]);
    }

    #[test]
    fn test_interval_merges_with_weekdays() {
        let mut every_two_weeks = RecurringPattern::new(Frequency::Weekly);
        every_two_weeks.interval = 2;
        let mut friday = RecurringPattern::new(Frequency::Weekly);
        friday.add_weekday(Weekday::Fri);
        assert!(every_two_weeks.can_merge(&friday));
        assert!(friday.can_merge(&every_two_weeks));

        // A plain "weekly" carries nothing to merge.
        assert!(!RecurringPattern::new(Frequency::Weekly).can_merge(&friday));
        let mut every_two_months = RecurringPattern::new(Frequency::Monthly);
        every_two_months.interval = 2;
        assert!(!every_two_months.can_merge(&friday));

        friday.merge(every_two_weeks);
        assert_eq!(friday.interval, 2);
        assert_eq!(friday.to_rrule(), "FREQ=WEEKLY;INTERVAL=2;BYDAY=FR");
    }

    #[test]
    fn test_display() {
        let mut p = RecurringPattern::new(Frequency::Monthly);
        p.add_weekday(Weekday::Mon);
        p.week_of_month = Some(1);
        assert_eq!(p.to_string(), "first monday of every month");

        let mut q = RecurringPattern::new(Frequency::Daily);
        q.interval = 3;
        assert_eq!(q.to_string(), "every 3 days");

        let mut r = RecurringPattern::new(Frequency::Monthly);
        r.day_of_month = Some(-1);
        assert_eq!(r.to_string(), "last day of every month");
    }

    #[test]
    fn test_every_frequency_has_rrule_name() {
        for freq in Frequency::iter() {
            let rule = RecurringPattern::new(freq).to_rrule();
            assert!(rule.starts_with("FREQ="));
            assert_eq!(freq.to_string().parse::<Frequency>().ok(), Some(freq));
        }
    }
}
