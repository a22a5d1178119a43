// File: ./src/model/language/fr.rs
use super::{
    DateOrder, LanguageTable, RecurringKeyword, RelativeDateModifier, offset, owned,
    per_ordinal_weekday, per_weekday, strings, weekday_names,
};
use crate::model::recurrence::Frequency;
use std::collections::BTreeMap;

const DAYS: [&str; 7] = [
    "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche",
];

const DAYS_PLURAL: [&str; 7] = [
    "lundis",
    "mardis",
    "mercredis",
    "jeudis",
    "vendredis",
    "samedis",
    "dimanches",
];

pub(super) fn table() -> LanguageTable {
    use RelativeDateModifier::*;

    let mut relative_dates = owned(&[
        ("aujourd'hui", Today),
        ("aujourd’hui", Today),
        ("ce soir", Today),
        ("demain", Tomorrow),
        ("après-demain", DayAfterTomorrow),
        ("après demain", DayAfterTomorrow),
        ("la semaine prochaine", NextWeek),
        ("semaine prochaine", NextWeek),
        ("dans une semaine", DaysOffset(7)),
        ("le mois prochain", NextMonth),
        ("mois prochain", NextMonth),
        ("l'année prochaine", NextYear),
        ("année prochaine", NextYear),
        ("l'an prochain", NextYear),
    ]);
    relative_dates.extend(per_weekday(
        &["{day}", "{day} prochain", "prochain {day}"],
        &DAYS,
        NextWeekday,
    ));

    let mut recurring_keywords: BTreeMap<String, RecurringKeyword> = owned(&[
        ("quotidien", RecurringKeyword::every(Frequency::Daily)),
        ("quotidiennement", RecurringKeyword::every(Frequency::Daily)),
        ("tous les jours", RecurringKeyword::every(Frequency::Daily)),
        ("chaque jour", RecurringKeyword::every(Frequency::Daily)),
        ("hebdomadaire", RecurringKeyword::every(Frequency::Weekly)),
        ("chaque semaine", RecurringKeyword::every(Frequency::Weekly)),
        ("toutes les semaines", RecurringKeyword::every(Frequency::Weekly)),
        ("mensuel", RecurringKeyword::every(Frequency::Monthly)),
        ("mensuellement", RecurringKeyword::every(Frequency::Monthly)),
        ("chaque mois", RecurringKeyword::every(Frequency::Monthly)),
        ("tous les mois", RecurringKeyword::every(Frequency::Monthly)),
        ("annuel", RecurringKeyword::every(Frequency::Yearly)),
        ("annuellement", RecurringKeyword::every(Frequency::Yearly)),
        ("chaque année", RecurringKeyword::every(Frequency::Yearly)),
        ("tous les ans", RecurringKeyword::every(Frequency::Yearly)),
        (
            "tous les deux jours",
            RecurringKeyword::every(Frequency::Daily).with_interval(2),
        ),
        (
            "toutes les deux semaines",
            RecurringKeyword::every(Frequency::Weekly).with_interval(2),
        ),
        (
            "tous les deux mois",
            RecurringKeyword::every(Frequency::Monthly).with_interval(2),
        ),
        ("dernier jour du mois", RecurringKeyword::monthly_on_day(-1)),
        ("le dernier jour du mois", RecurringKeyword::monthly_on_day(-1)),
        ("chaque dernier jour du mois", RecurringKeyword::monthly_on_day(-1)),
    ]);
    recurring_keywords.extend(per_weekday(&["chaque {day}"], &DAYS, RecurringKeyword::weekly_on));
    recurring_keywords.extend(per_weekday(
        &["tous les {day}"],
        &DAYS_PLURAL,
        RecurringKeyword::weekly_on,
    ));
    recurring_keywords.extend(per_ordinal_weekday(
        &[
            "chaque {ord} {day}",
            "chaque {ord} {day} du mois",
            "le {ord} {day} du mois",
            "{ord} {day} du mois",
            "le {ord} {day} de chaque mois",
            "{ord} {day} de chaque mois",
        ],
        &[
            ("premier", 1),
            ("1er", 1),
            ("deuxième", 2),
            ("second", 2),
            ("troisième", 3),
            ("quatrième", 4),
            ("cinquième", 5),
            ("dernier", -1),
        ],
        &DAYS,
    ));

    let mut weekdays = weekday_names(&DAYS);
    weekdays.extend(weekday_names(&DAYS_PLURAL));

    LanguageTable {
        code: "fr".to_string(),
        deadline_keywords: strings(&[
            "avant",
            "avant le",
            "d'ici",
            "d'ici le",
            "jusqu'à",
            "jusqu'au",
            "au plus tard",
            "au plus tard le",
            "pour",
            "pour le",
        ]),
        urgent_keywords: strings(&["urgent", "urgente", "immédiatement"]),
        date_prepositions: strings(&["le", "à partir de", "dès"]),
        relative_dates,
        recurring_keywords,
        weekdays,
        conjunctions: strings(&["et"]),
        time_patterns: strings(&[
            r"(?:\bà\s+)?\b(?P<hour>\d{1,2})\s?(?:h|heures?)(?:\s?(?P<minute>\d{2}))?\b",
            r"(?:\bà\s+)?\b(?P<hour>\d{1,2}):(?P<minute>\d{2})\b",
        ]),
        offset_patterns: vec![
            offset(r"\bdans\s+(?P<n>\d{1,3})\s+jours\b", 1),
            offset(r"\bdans\s+(?P<n>\d{1,3})\s+semaines\b", 7),
        ],
        interval_pattern: Some(
            r"\btou(?:s|tes)\s+les\s+(?P<n>\d{1,3})\s+(?P<unit>jours|semaines|mois|ans)\b"
                .to_string(),
        ),
        interval_units: owned(&[
            ("jours", Frequency::Daily),
            ("semaines", Frequency::Weekly),
            ("mois", Frequency::Monthly),
            ("ans", Frequency::Yearly),
        ]),
        day_of_month_pattern: Some(
            r"\b(?:(?:tous\s+les|chaque)\s+|le\s+)(?P<day>\d{1,2})(?:er)?\s+(?:du|de\s+chaque)\s+mois\b"
                .to_string(),
        ),
        date_order: DateOrder::DayMonthYear,
        date_separator: '/',
    }
}
