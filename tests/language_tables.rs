// Each built-in language end to end.
use chrono::{NaiveDate, NaiveTime, Weekday};
use strum::IntoEnumIterator;
use tasklex::model::{
    Frequency, Language, LanguageConfig, ParsedTask, Priority, RelativeDateModifier, TaskParser,
    TimeAnchor,
};

// 2026-10-19 is a Monday.
fn reference() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn day(m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2026, m, d)
}

fn hm(h: u32, m: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(h, m, 0)
}

fn parse(language: Language, input: &str) -> ParsedTask {
    TaskParser::for_language(language).parse(input, Some(reference()))
}

#[test]
fn test_every_table_resolves_its_own_phrases() {
    for language in Language::iter() {
        let config = LanguageConfig::builtin(language);
        for (phrase, modifier) in config.relative_dates() {
            let task = parse(language, phrase);
            let expected = modifier.resolve(reference());
            assert_eq!(task.scheduled_date, expected, "{:?}: '{}'", language, phrase);
        }
    }
}

#[test]
fn test_every_recurring_keyword_expands() {
    for language in Language::iter() {
        let config = LanguageConfig::builtin(language);
        for (phrase, keyword) in config.recurring_keywords() {
            let task = parse(language, phrase);
            assert_eq!(task.recurring, Some(keyword.expand()), "{:?}: '{}'", language, phrase);
            assert_eq!(task.title, "", "{:?}: '{}'", language, phrase);
        }
    }
}

#[test]
fn test_relative_modifiers_cover_every_variant() {
    // Every variant appears in at least one built-in table.
    let all: Vec<RelativeDateModifier> = Language::iter()
        .flat_map(|l| LanguageConfig::builtin(l).relative_dates().values().copied())
        .collect();
    let has = |f: fn(&RelativeDateModifier) -> bool| all.iter().any(f);
    assert!(has(|m| matches!(m, RelativeDateModifier::Today)));
    assert!(has(|m| matches!(m, RelativeDateModifier::Tomorrow)));
    assert!(has(|m| matches!(m, RelativeDateModifier::DayAfterTomorrow)));
    assert!(has(|m| matches!(m, RelativeDateModifier::NextWeekday(_))));
    assert!(has(|m| matches!(m, RelativeDateModifier::NextWeek)));
    assert!(has(|m| matches!(m, RelativeDateModifier::NextMonth)));
    assert!(has(|m| matches!(m, RelativeDateModifier::NextYear)));
    assert!(has(|m| matches!(m, RelativeDateModifier::DaysOffset(_))));
}

#[test]
fn test_german() {
    let task = parse(Language::German, "Zahnarzt übermorgen um 14 Uhr dringend");
    assert_eq!(task.title, "Zahnarzt");
    assert_eq!(task.scheduled_date, day(10, 21));
    assert_eq!(task.time, hm(14, 0));
    assert_eq!(task.time_anchor, Some(TimeAnchor::Scheduled));
    assert_eq!(task.priority, Some(Priority::High));

    let task = parse(Language::German, "Steuererklärung bis zum 31.12. abgeben");
    assert_eq!(task.deadline, day(12, 31));
    assert_eq!(task.scheduled_date, None);
    assert_eq!(task.title, "Steuererklärung abgeben");

    let task = parse(Language::German, "Meeting nächsten Montag");
    assert_eq!(task.scheduled_date, day(10, 26));

    let task = parse(Language::German, "Miete zahlen jeden 1. des Monats");
    assert_eq!(task.recurring.map(|r| r.day_of_month), Some(Some(1)));
    assert_eq!(task.title, "Miete zahlen");

    let task = parse(Language::German, "Laufen montags und donnerstags");
    assert_eq!(
        task.recurring.map(|r| r.days_of_week),
        Some(vec![Weekday::Mon, Weekday::Thu])
    );
}

#[test]
fn test_english() {
    let task = parse(Language::English, "Dentist next friday at 3pm");
    assert_eq!(task.scheduled_date, day(10, 23));
    assert_eq!(task.time, hm(15, 0));
    assert_eq!(task.title, "Dentist");

    let task = parse(Language::English, "Renew passport in 2 weeks");
    assert_eq!(task.scheduled_date, day(11, 2));

    let task = parse(Language::English, "Backup every 2 weeks on fridays");
    let rule = task.recurring.unwrap();
    assert_eq!(rule.frequency, Frequency::Weekly);
    assert_eq!(rule.interval, 2);
    assert_eq!(rule.days_of_week, vec![Weekday::Fri]);
    assert_eq!(rule.to_rrule(), "FREQ=WEEKLY;INTERVAL=2;BYDAY=FR");

    let task = parse(Language::English, "Pay rent on the last day of the month");
    assert_eq!(task.recurring.unwrap().day_of_month, Some(-1));
}

#[test]
fn test_french() {
    let task = parse(Language::French, "Réunion lundi prochain à 14h30");
    assert_eq!(task.scheduled_date, day(10, 26));
    assert_eq!(task.time, hm(14, 30));
    assert_eq!(task.title, "Réunion");

    let task = parse(Language::French, "Rendre le rapport avant vendredi");
    assert_eq!(task.deadline, day(10, 23));
    assert_eq!(task.title, "Rendre le rapport");

    let task = parse(Language::French, "Yoga tous les mardis et jeudis");
    assert_eq!(
        task.recurring.map(|r| r.days_of_week),
        Some(vec![Weekday::Tue, Weekday::Thu])
    );

    let task = parse(Language::French, "Payer le loyer le 5 de chaque mois");
    assert_eq!(task.recurring.unwrap().day_of_month, Some(5));
    assert_eq!(task.title, "Payer le loyer");
}

#[test]
fn test_spanish() {
    let task = parse(Language::Spanish, "Llamar al médico mañana a las 10");
    assert_eq!(task.scheduled_date, day(10, 20));
    assert_eq!(task.time, hm(10, 0));
    assert_eq!(task.title, "Llamar al médico");

    let task = parse(Language::Spanish, "Entregar informe para el viernes");
    assert_eq!(task.deadline, day(10, 23));
    assert_eq!(task.scheduled_date, None);
    assert_eq!(task.title, "Entregar informe");

    let task = parse(Language::Spanish, "Gimnasio todos los lunes y miércoles");
    assert_eq!(
        task.recurring.map(|r| r.days_of_week),
        Some(vec![Weekday::Mon, Weekday::Wed])
    );

    let task = parse(Language::Spanish, "Pagar alquiler el 1 de cada mes");
    assert_eq!(task.recurring.unwrap().day_of_month, Some(1));
    assert_eq!(task.title, "Pagar alquiler");
}

#[test]
fn test_same_text_differs_by_language() {
    // "3/4" is March 4th in English and April 3rd elsewhere.
    assert_eq!(parse(Language::English, "x 3/4").scheduled_date, NaiveDate::from_ymd_opt(2027, 3, 4));
    assert_eq!(parse(Language::French, "x 3/4").scheduled_date, NaiveDate::from_ymd_opt(2027, 4, 3));
}
