// File: ./src/model/language/es.rs
use super::{
    DateOrder, LanguageTable, RecurringKeyword, RelativeDateModifier, offset, owned,
    per_ordinal_weekday, per_weekday, strings, weekday_names,
};
use crate::model::recurrence::Frequency;
use std::collections::BTreeMap;

const DAYS: [&str; 7] = [
    "lunes",
    "martes",
    "miércoles",
    "jueves",
    "viernes",
    "sábado",
    "domingo",
];

// Written without accents, as often typed on a phone.
const DAYS_PLAIN: [&str; 7] = [
    "lunes",
    "martes",
    "miercoles",
    "jueves",
    "viernes",
    "sabado",
    "domingo",
];

const DAYS_PLURAL: [&str; 7] = [
    "lunes",
    "martes",
    "miércoles",
    "jueves",
    "viernes",
    "sábados",
    "domingos",
];

pub(super) fn table() -> LanguageTable {
    use RelativeDateModifier::*;

    let mut relative_dates = owned(&[
        ("hoy", Today),
        ("esta noche", Today),
        ("mañana", Tomorrow),
        ("manana", Tomorrow),
        ("pasado mañana", DayAfterTomorrow),
        ("pasado manana", DayAfterTomorrow),
        ("la próxima semana", NextWeek),
        ("próxima semana", NextWeek),
        ("la semana que viene", NextWeek),
        ("dentro de una semana", DaysOffset(7)),
        ("el próximo mes", NextMonth),
        ("próximo mes", NextMonth),
        ("el mes que viene", NextMonth),
        ("el próximo año", NextYear),
        ("próximo año", NextYear),
        ("el año que viene", NextYear),
    ]);
    for names in [&DAYS, &DAYS_PLAIN] {
        relative_dates.extend(per_weekday(
            &["{day}", "próximo {day}", "proximo {day}", "{day} que viene"],
            names,
            NextWeekday,
        ));
    }

    let mut recurring_keywords: BTreeMap<String, RecurringKeyword> = owned(&[
        ("diario", RecurringKeyword::every(Frequency::Daily)),
        ("diariamente", RecurringKeyword::every(Frequency::Daily)),
        ("todos los días", RecurringKeyword::every(Frequency::Daily)),
        ("todos los dias", RecurringKeyword::every(Frequency::Daily)),
        ("cada día", RecurringKeyword::every(Frequency::Daily)),
        ("cada dia", RecurringKeyword::every(Frequency::Daily)),
        ("semanal", RecurringKeyword::every(Frequency::Weekly)),
        ("semanalmente", RecurringKeyword::every(Frequency::Weekly)),
        ("cada semana", RecurringKeyword::every(Frequency::Weekly)),
        ("todas las semanas", RecurringKeyword::every(Frequency::Weekly)),
        ("mensual", RecurringKeyword::every(Frequency::Monthly)),
        ("mensualmente", RecurringKeyword::every(Frequency::Monthly)),
        ("cada mes", RecurringKeyword::every(Frequency::Monthly)),
        ("todos los meses", RecurringKeyword::every(Frequency::Monthly)),
        ("anual", RecurringKeyword::every(Frequency::Yearly)),
        ("anualmente", RecurringKeyword::every(Frequency::Yearly)),
        ("cada año", RecurringKeyword::every(Frequency::Yearly)),
        ("todos los años", RecurringKeyword::every(Frequency::Yearly)),
        (
            "cada dos días",
            RecurringKeyword::every(Frequency::Daily).with_interval(2),
        ),
        (
            "cada dos semanas",
            RecurringKeyword::every(Frequency::Weekly).with_interval(2),
        ),
        (
            "quincenal",
            RecurringKeyword::every(Frequency::Weekly).with_interval(2),
        ),
        (
            "cada dos meses",
            RecurringKeyword::every(Frequency::Monthly).with_interval(2),
        ),
        ("último día del mes", RecurringKeyword::monthly_on_day(-1)),
        ("ultimo dia del mes", RecurringKeyword::monthly_on_day(-1)),
        ("el último día de cada mes", RecurringKeyword::monthly_on_day(-1)),
        ("el último día del mes", RecurringKeyword::monthly_on_day(-1)),
    ]);
    for names in [&DAYS, &DAYS_PLAIN] {
        recurring_keywords.extend(per_weekday(&["cada {day}"], names, RecurringKeyword::weekly_on));
    }
    recurring_keywords.extend(per_weekday(
        &["todos los {day}", "los {day}"],
        &DAYS_PLURAL,
        RecurringKeyword::weekly_on,
    ));
    recurring_keywords.extend(per_ordinal_weekday(
        &[
            "cada {ord} {day}",
            "el {ord} {day} de cada mes",
            "{ord} {day} de cada mes",
            "el {ord} {day} del mes",
            "{ord} {day} del mes",
        ],
        &[
            ("primer", 1),
            ("segundo", 2),
            ("tercer", 3),
            ("cuarto", 4),
            ("quinto", 5),
            ("último", -1),
            ("ultimo", -1),
        ],
        &DAYS,
    ));

    let mut weekdays = weekday_names(&DAYS);
    weekdays.extend(weekday_names(&DAYS_PLAIN));
    weekdays.extend(weekday_names(&DAYS_PLURAL));

    LanguageTable {
        code: "es".to_string(),
        deadline_keywords: strings(&[
            "para",
            "para el",
            "antes de",
            "antes del",
            "hasta",
            "hasta el",
            "a más tardar",
            "a más tardar el",
        ]),
        urgent_keywords: strings(&["urgente", "urgentemente"]),
        date_prepositions: strings(&["el", "desde el", "a partir del"]),
        relative_dates,
        recurring_keywords,
        weekdays,
        conjunctions: strings(&["y"]),
        time_patterns: strings(&[
            r"(?:\ba\s+las?\s+)?\b(?P<hour>\d{1,2})(?::(?P<minute>\d{2}))?\s*(?P<meridiem>[ap]m\b|[ap]\.m\.)",
            r"(?:\ba\s+las?\s+)?\b(?P<hour>\d{1,2}):(?P<minute>\d{2})\b",
            r"\ba\s+las?\s+(?P<hour>\d{1,2})\b",
        ]),
        offset_patterns: vec![
            offset(r"\b(?:en|dentro\s+de)\s+(?P<n>\d{1,3})\s+d[ií]as\b", 1),
            offset(r"\b(?:en|dentro\s+de)\s+(?P<n>\d{1,3})\s+semanas\b", 7),
        ],
        interval_pattern: Some(
            r"\bcada\s+(?P<n>\d{1,3})\s+(?P<unit>días|dias|semanas|meses|años|anos)\b".to_string(),
        ),
        interval_units: owned(&[
            ("días", Frequency::Daily),
            ("dias", Frequency::Daily),
            ("semanas", Frequency::Weekly),
            ("meses", Frequency::Monthly),
            ("años", Frequency::Yearly),
            ("anos", Frequency::Yearly),
        ]),
        day_of_month_pattern: Some(
            r"\b(?:el\s+)?(?:d[ií]a\s+)?(?P<day>\d{1,2})\s+de\s+cada\s+mes\b".to_string(),
        ),
        date_order: DateOrder::DayMonthYear,
        date_separator: '/',
    }
}
