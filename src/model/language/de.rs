// File: ./src/model/language/de.rs
use super::{
    DateOrder, LanguageTable, RecurringKeyword, RelativeDateModifier, offset, owned,
    per_ordinal_weekday, per_weekday, strings, weekday_names,
};
use crate::model::recurrence::Frequency;
use std::collections::BTreeMap;

const DAYS: [&str; 7] = [
    "montag",
    "dienstag",
    "mittwoch",
    "donnerstag",
    "freitag",
    "samstag",
    "sonntag",
];

const DAYS_ADVERB: [&str; 7] = [
    "montags",
    "dienstags",
    "mittwochs",
    "donnerstags",
    "freitags",
    "samstags",
    "sonntags",
];

pub(super) fn table() -> LanguageTable {
    use RelativeDateModifier::*;

    let mut relative_dates = owned(&[
        ("heute", Today),
        ("heute abend", Today),
        ("morgen", Tomorrow),
        ("übermorgen", DayAfterTomorrow),
        ("nächste woche", NextWeek),
        ("nächster woche", NextWeek),
        ("kommende woche", NextWeek),
        ("in einer woche", DaysOffset(7)),
        ("nächsten monat", NextMonth),
        ("nächster monat", NextMonth),
        ("kommenden monat", NextMonth),
        ("nächstes jahr", NextYear),
        ("nächsten jahres", NextYear),
    ]);
    relative_dates.extend(per_weekday(
        &["{day}", "nächsten {day}", "nächster {day}", "kommenden {day}"],
        &DAYS,
        NextWeekday,
    ));

    let mut recurring_keywords: BTreeMap<String, RecurringKeyword> = owned(&[
        ("täglich", RecurringKeyword::every(Frequency::Daily)),
        ("jeden tag", RecurringKeyword::every(Frequency::Daily)),
        ("wöchentlich", RecurringKeyword::every(Frequency::Weekly)),
        ("jede woche", RecurringKeyword::every(Frequency::Weekly)),
        ("monatlich", RecurringKeyword::every(Frequency::Monthly)),
        ("jeden monat", RecurringKeyword::every(Frequency::Monthly)),
        ("jährlich", RecurringKeyword::every(Frequency::Yearly)),
        ("jedes jahr", RecurringKeyword::every(Frequency::Yearly)),
        (
            "jeden zweiten tag",
            RecurringKeyword::every(Frequency::Daily).with_interval(2),
        ),
        (
            "alle zwei tage",
            RecurringKeyword::every(Frequency::Daily).with_interval(2),
        ),
        (
            "alle zwei wochen",
            RecurringKeyword::every(Frequency::Weekly).with_interval(2),
        ),
        (
            "zweiwöchentlich",
            RecurringKeyword::every(Frequency::Weekly).with_interval(2),
        ),
        (
            "alle zwei monate",
            RecurringKeyword::every(Frequency::Monthly).with_interval(2),
        ),
        ("letzter tag im monat", RecurringKeyword::monthly_on_day(-1)),
        ("letzten tag im monat", RecurringKeyword::monthly_on_day(-1)),
        ("am letzten tag des monats", RecurringKeyword::monthly_on_day(-1)),
        ("jeden letzten tag im monat", RecurringKeyword::monthly_on_day(-1)),
    ]);
    recurring_keywords.extend(per_weekday(&["jeden {day}"], &DAYS, RecurringKeyword::weekly_on));
    recurring_keywords.extend(per_weekday(&["{day}"], &DAYS_ADVERB, RecurringKeyword::weekly_on));
    recurring_keywords.extend(per_weekday(&["jeden zweiten {day}"], &DAYS, |day| {
        RecurringKeyword::weekly_on(day).with_interval(2)
    }));
    // "Letzten Montag" alone reads as a past date in German, so positional
    // rules need "jeden" or a month reference.
    recurring_keywords.extend(per_ordinal_weekday(
        &[
            "jeden {ord} {day}",
            "jeden {ord} {day} im monat",
            "{ord} {day} im monat",
            "am {ord} {day} im monat",
            "{ord} {day} des monats",
            "am {ord} {day} des monats",
        ],
        &[
            ("ersten", 1),
            ("erster", 1),
            ("zweiten", 2),
            ("zweiter", 2),
            ("dritten", 3),
            ("dritter", 3),
            ("vierten", 4),
            ("vierter", 4),
            ("fünften", 5),
            ("letzten", -1),
            ("letzter", -1),
        ],
        &DAYS,
    ));

    let mut weekdays = weekday_names(&DAYS);
    weekdays.extend(weekday_names(&DAYS_ADVERB));

    LanguageTable {
        code: "de".to_string(),
        deadline_keywords: strings(&[
            "bis",
            "bis zum",
            "bis zur",
            "bis spätestens",
            "spätestens",
            "spätestens am",
            "fällig",
            "fällig am",
        ]),
        urgent_keywords: strings(&["dringend", "eilig", "sofort"]),
        date_prepositions: strings(&["am", "ab"]),
        relative_dates,
        recurring_keywords,
        weekdays,
        conjunctions: strings(&["und"]),
        time_patterns: strings(&[
            r"(?:\bum\s+)?\b(?P<hour>\d{1,2})(?:[:.](?P<minute>\d{2}))?\s*uhr\b",
            r"(?:\bum\s+)?\b(?P<hour>\d{1,2}):(?P<minute>\d{2})\b",
        ]),
        offset_patterns: vec![
            offset(r"\bin\s+(?P<n>\d{1,3})\s+tagen\b", 1),
            offset(r"\bin\s+(?P<n>\d{1,3})\s+wochen\b", 7),
        ],
        interval_pattern: Some(
            r"\balle\s+(?P<n>\d{1,3})\s+(?P<unit>tage|wochen|monate|jahre)\b".to_string(),
        ),
        interval_units: owned(&[
            ("tage", Frequency::Daily),
            ("wochen", Frequency::Weekly),
            ("monate", Frequency::Monthly),
            ("jahre", Frequency::Yearly),
        ]),
        day_of_month_pattern: Some(
            r"\bjeden\s+(?P<day>\d{1,2})\.(?:\s+(?:des\s+monats|im\s+monat)\b)?".to_string(),
        ),
        date_order: DateOrder::DayMonthYear,
        date_separator: '.',
    }
}
