// File: ./src/model/language/en.rs
use super::{
    DateOrder, LanguageTable, RecurringKeyword, RelativeDateModifier, offset, owned,
    per_ordinal_weekday, per_weekday, strings, weekday_names,
};
use crate::model::recurrence::Frequency;
use std::collections::BTreeMap;

const DAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

const DAYS_PLURAL: [&str; 7] = [
    "mondays",
    "tuesdays",
    "wednesdays",
    "thursdays",
    "fridays",
    "saturdays",
    "sundays",
];

pub(super) fn table() -> LanguageTable {
    use RelativeDateModifier::*;

    let mut relative_dates = owned(&[
        ("today", Today),
        ("tonight", Today),
        ("tomorrow", Tomorrow),
        ("day after tomorrow", DayAfterTomorrow),
        ("the day after tomorrow", DayAfterTomorrow),
        ("next week", NextWeek),
        ("in a week", DaysOffset(7)),
        ("next month", NextMonth),
        ("next year", NextYear),
    ]);
    relative_dates.extend(per_weekday(
        &["{day}", "next {day}", "this {day}", "this coming {day}"],
        &DAYS,
        NextWeekday,
    ));

    let mut recurring_keywords: BTreeMap<String, RecurringKeyword> = owned(&[
        ("daily", RecurringKeyword::every(Frequency::Daily)),
        ("every day", RecurringKeyword::every(Frequency::Daily)),
        ("everyday", RecurringKeyword::every(Frequency::Daily)),
        ("each day", RecurringKeyword::every(Frequency::Daily)),
        ("weekly", RecurringKeyword::every(Frequency::Weekly)),
        ("every week", RecurringKeyword::every(Frequency::Weekly)),
        ("monthly", RecurringKeyword::every(Frequency::Monthly)),
        ("every month", RecurringKeyword::every(Frequency::Monthly)),
        ("yearly", RecurringKeyword::every(Frequency::Yearly)),
        ("annually", RecurringKeyword::every(Frequency::Yearly)),
        ("every year", RecurringKeyword::every(Frequency::Yearly)),
        (
            "every other day",
            RecurringKeyword::every(Frequency::Daily).with_interval(2),
        ),
        (
            "every other week",
            RecurringKeyword::every(Frequency::Weekly).with_interval(2),
        ),
        (
            "biweekly",
            RecurringKeyword::every(Frequency::Weekly).with_interval(2),
        ),
        (
            "every other month",
            RecurringKeyword::every(Frequency::Monthly).with_interval(2),
        ),
        ("last day of the month", RecurringKeyword::monthly_on_day(-1)),
        ("last day of month", RecurringKeyword::monthly_on_day(-1)),
        ("last day of every month", RecurringKeyword::monthly_on_day(-1)),
        ("every last day of the month", RecurringKeyword::monthly_on_day(-1)),
    ]);
    recurring_keywords.extend(per_weekday(
        &["every {day}", "each {day}"],
        &DAYS,
        RecurringKeyword::weekly_on,
    ));
    recurring_keywords.extend(per_weekday(
        &["{day}", "on {day}"],
        &DAYS_PLURAL,
        RecurringKeyword::weekly_on,
    ));
    recurring_keywords.extend(per_weekday(&["every other {day}"], &DAYS, |day| {
        RecurringKeyword::weekly_on(day).with_interval(2)
    }));
    recurring_keywords.extend(per_ordinal_weekday(
        &[
            "{ord} {day}",
            "every {ord} {day}",
            "{ord} {day} of the month",
            "{ord} {day} of month",
            "{ord} {day} of every month",
            "{ord} {day} of each month",
            "every {ord} {day} of the month",
        ],
        &[
            ("first", 1),
            ("1st", 1),
            ("second", 2),
            ("2nd", 2),
            ("third", 3),
            ("3rd", 3),
            ("fourth", 4),
            ("4th", 4),
            ("fifth", 5),
            ("5th", 5),
            ("last", -1),
        ],
        &DAYS,
    ));

    let mut weekdays = weekday_names(&DAYS);
    weekdays.extend(weekday_names(&DAYS_PLURAL));

    LanguageTable {
        code: "en".to_string(),
        deadline_keywords: strings(&["by", "due", "due by", "until", "till", "before", "no later than"]),
        urgent_keywords: strings(&["urgent", "urgently", "asap"]),
        date_prepositions: strings(&["on", "from", "starting"]),
        relative_dates,
        recurring_keywords,
        weekdays,
        conjunctions: strings(&["and", "&"]),
        time_patterns: strings(&[
            r"(?:\bat\s+)?\b(?P<hour>\d{1,2})(?::(?P<minute>\d{2}))?\s*(?P<meridiem>[ap]m\b|[ap]\.m\.)",
            r"(?:\bat\s+)?\b(?P<hour>\d{1,2}):(?P<minute>\d{2})\b",
        ]),
        offset_patterns: vec![
            offset(r"\bin\s+(?P<n>\d{1,3})\s+days?\b", 1),
            offset(r"\bin\s+(?P<n>\d{1,3})\s+weeks?\b", 7),
        ],
        interval_pattern: Some(
            r"\bevery\s+(?P<n>\d{1,3})\s+(?P<unit>days?|weeks?|months?|years?)\b".to_string(),
        ),
        interval_units: owned(&[
            ("day", Frequency::Daily),
            ("days", Frequency::Daily),
            ("week", Frequency::Weekly),
            ("weeks", Frequency::Weekly),
            ("month", Frequency::Monthly),
            ("months", Frequency::Monthly),
            ("year", Frequency::Yearly),
            ("years", Frequency::Yearly),
        ]),
        day_of_month_pattern: Some(
            r"\b(?:every|each)\s+(?P<day>\d{1,2})(?:st|nd|rd|th)\b(?:\s+of\s+(?:the|each|every)\s+month\b)?"
                .to_string(),
        ),
        date_order: DateOrder::MonthDayYear,
        date_separator: '/',
    }
}
