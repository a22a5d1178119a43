// Regression tests for structural guarantees of the parser output.
use chrono::{Local, NaiveDate};
use strum::IntoEnumIterator;
use tasklex::model::{Language, ParsedTask, TaskParser};

const CORPUS: &[(Language, &str)] = &[
    (Language::English, "!! Pay rent @home #bills every 1st by tomorrow at 9am"),
    (Language::English, "Gym every Monday, Wednesday and Friday at 6:30am #health"),
    (Language::English, "Dentist next friday 3pm or tomorrow, whichever"),
    (Language::English, "Submit report by 5pm Friday #prod-urgent"),
    (Language::English, "Backup every 2 weeks on fridays at 22:00"),
    (Language::German, "Bericht bis 17 Uhr Freitag"),
    (Language::English, "Renew passport in 2 weeks before 12/24 urgent"),
    (Language::German, "Zahnarzt übermorgen um 14 Uhr dringend @privat"),
    (Language::German, "Steuererklärung bis zum 31.12. abgeben !!!"),
    (Language::German, "Müll rausbringen jeden Dienstag und Freitag"),
    (Language::French, "Réunion lundi prochain à 14h30 #travail"),
    (Language::French, "Rendre le rapport avant vendredi ! urgent"),
    (Language::Spanish, "Llamar al médico mañana a las 10 #salud"),
    (Language::Spanish, "Entregar informe para el viernes urgente"),
    (Language::Spanish, "Gimnasio todos los lunes y miércoles a las 7pm"),
];

fn reference() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn parse(language: Language, input: &str) -> ParsedTask {
    TaskParser::for_language(language).parse(input, Some(reference()))
}

fn without_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Puts every removed span back between the title words it was cut from.
fn splice_removed_spans(task: &ParsedTask) -> String {
    let input = task.original_input.as_str();
    let mut title_words = task.title.split_whitespace();
    let mut rebuilt = String::new();
    let mut cursor = 0;
    for a in task.annotations.iter().filter(|a| a.kind.removes_from_title()) {
        let kept = input[cursor..a.range.start].split_whitespace().count();
        for word in title_words.by_ref().take(kept) {
            rebuilt.push_str(word);
            rebuilt.push(' ');
        }
        rebuilt.push_str(&a.text);
        rebuilt.push(' ');
        cursor = a.range.end;
    }
    for word in title_words {
        rebuilt.push_str(word);
        rebuilt.push(' ');
    }
    rebuilt
}

#[test]
fn test_parsing_is_deterministic() {
    for (language, input) in CORPUS {
        assert_eq!(parse(*language, input), parse(*language, input), "{}", input);
    }
}

#[test]
fn test_annotations_are_sorted_and_disjoint() {
    for (language, input) in CORPUS {
        let task = parse(*language, input);
        for pair in task.annotations.windows(2) {
            assert!(
                pair[0].range.end <= pair[1].range.start,
                "{}: {:?} overlaps {:?}",
                input,
                pair[0],
                pair[1]
            );
        }
        for a in &task.annotations {
            assert_eq!(&input[a.range.clone()], a.text, "{}", input);
        }
    }
}

#[test]
fn test_title_and_removed_spans_rebuild_the_input() {
    for (language, input) in CORPUS {
        let task = parse(*language, input);
        assert_eq!(
            without_whitespace(&splice_removed_spans(&task)),
            without_whitespace(input),
            "{}",
            input
        );
        assert!(!task.title.contains("  "), "{}", task.title);
    }
}

#[test]
fn test_splice_notices_reordered_titles() {
    let mut task = parse(Language::English, "Call mom tomorrow about dinner");
    assert_eq!(without_whitespace(&splice_removed_spans(&task)), "Callmomtomorrowaboutdinner");
    task.title = "Call about mom dinner".to_string();
    assert_ne!(without_whitespace(&splice_removed_spans(&task)), "Callmomtomorrowaboutdinner");
}

#[test]
fn test_malformed_input_degrades_to_title() {
    let garbage = [
        "",
        "   ",
        "#",
        "@",
        "#@#@",
        "!!!!",
        "!!!!! !!!!",
        "25:99",
        "32/13/2026",
        "every 0 days",
        "in 999 weeks",
        "🎉 ✨ ñ 日本",
        "by",
        "at pm",
    ];
    for language in Language::iter() {
        let parser = TaskParser::for_language(language);
        for input in garbage {
            let task = parser.parse(input, Some(reference()));
            assert_eq!(task.original_input, input);
            assert_eq!(task.priority, None, "{:?} {}", language, input);
            assert_eq!(task.recurring, None, "{:?} {}", language, input);
            assert!(task.labels.is_empty());
            assert_eq!(task.project, None);
        }
    }
}

#[test]
fn test_large_offsets_still_resolve() {
    let task = parse(Language::English, "Check in 999 weeks");
    assert_eq!(
        task.scheduled_date,
        reference().checked_add_days(chrono::Days::new(6993))
    );
}

#[test]
fn test_month_arithmetic_clamps() {
    let end_of_january = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
    let task = TaskParser::for_language(Language::English).parse("Invoice next month", Some(end_of_january));
    assert_eq!(task.scheduled_date, NaiveDate::from_ymd_opt(2026, 2, 28));

    let leap_day = NaiveDate::from_ymd_opt(2028, 2, 29).unwrap();
    let task = TaskParser::for_language(Language::German).parse("Feiern nächstes Jahr", Some(leap_day));
    assert_eq!(task.scheduled_date, NaiveDate::from_ymd_opt(2029, 2, 28));
}

#[test]
fn test_missing_year_rolls_into_next_year() {
    let task = parse(Language::English, "Taxes due 4/15");
    assert_eq!(task.deadline, NaiveDate::from_ymd_opt(2027, 4, 15));

    let task = parse(Language::English, "Party on 12/31");
    assert_eq!(task.scheduled_date, NaiveDate::from_ymd_opt(2026, 12, 31));
    assert_eq!(task.title, "Party");
}

#[test]
fn test_reference_defaults_to_today() {
    let task = TaskParser::for_language(Language::English).parse("Water plants today", None);
    assert_eq!(task.scheduled_date, Some(Local::now().date_naive()));
}

#[test]
fn test_long_input_is_handled() {
    let mut input = "!! ".to_string();
    input.push_str(&"word ".repeat(20_000));
    input.push_str("tomorrow");
    let task = parse(Language::English, &input);
    assert_eq!(task.scheduled_date, NaiveDate::from_ymd_opt(2026, 10, 20));
    assert!(task.priority.is_some());
    assert_eq!(task.title.split(' ').count(), 20_000);
}

#[test]
fn test_unclaimed_second_date_stays_in_title() {
    let task = parse(Language::English, "Dentist next friday 3pm or tomorrow, whichever");
    assert_eq!(task.scheduled_date, NaiveDate::from_ymd_opt(2026, 10, 23));
    assert_eq!(task.title, "Dentist or tomorrow, whichever");
}
