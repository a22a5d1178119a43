// File: ./src/model/parser/recurrence.rs
//! Recurrence phrases: keyword table entries ("daily", "every first monday"),
//! numeric intervals ("every 3 weeks") and days of the month ("every 15th").
use crate::model::item::AnnotationKind;
use crate::model::language::{LanguageConfig, RecurringKeyword};
use crate::model::recurrence::{Frequency, RecurringPattern};
use crate::model::span::{SpanTracker, resolve_overlaps};
use std::ops::Range;

#[derive(Debug, Clone)]
struct Candidate {
    pattern: RecurringPattern,
    // "every monday" may continue with ", wednesday and friday".
    takes_weekday_list: bool,
}

impl Candidate {
    fn plain(pattern: RecurringPattern) -> Self {
        Self {
            pattern,
            takes_weekday_list: false,
        }
    }

    fn from_keyword(keyword: RecurringKeyword) -> Self {
        let pattern = keyword.expand();
        let takes_weekday_list = pattern.frequency == Frequency::Weekly
            && !pattern.days_of_week.is_empty()
            && !pattern.is_positional();
        Self {
            pattern,
            takes_weekday_list,
        }
    }
}

fn collect_candidates(spans: &SpanTracker, config: &LanguageConfig) -> Vec<(Range<usize>, Candidate)> {
    let mut found = Vec::new();

    if let Some(re) = config.recurring_matcher() {
        for (offset, caps) in spans.captures_unclaimed(re) {
            if let Some(m) = caps.get(0)
                && let Some(keyword) = config.recurring_keyword(m.as_str())
            {
                found.push((
                    offset + m.start()..offset + m.end(),
                    Candidate::from_keyword(keyword),
                ));
            }
        }
    }

    if let Some(re) = config.interval_pattern() {
        for (offset, caps) in spans.captures_unclaimed(re) {
            if let Some(m) = caps.get(0)
                && let Some(n) = caps.name("n").and_then(|n| n.as_str().parse::<u32>().ok())
                && n >= 1
                && let Some(frequency) = caps.name("unit").and_then(|u| config.interval_unit(u.as_str()))
            {
                let mut pattern = RecurringPattern::new(frequency);
                pattern.interval = n;
                found.push((offset + m.start()..offset + m.end(), Candidate::plain(pattern)));
            }
        }
    }

    if let Some(re) = config.day_of_month_pattern() {
        for (offset, caps) in spans.captures_unclaimed(re) {
            if let Some(m) = caps.get(0)
                && let Some(day) = caps.name("day").and_then(|d| d.as_str().parse::<i8>().ok())
                && (1..=31).contains(&day)
            {
                let pattern = RecurringKeyword::monthly_on_day(day).expand();
                found.push((offset + m.start()..offset + m.end(), Candidate::plain(pattern)));
            }
        }
    }

    found
}

/// Extends a weekday rule over a following list of weekdays, returning the
/// new end of the span.
fn absorb_weekday_list(
    spans: &SpanTracker,
    config: &LanguageConfig,
    pattern: &mut RecurringPattern,
    mut end: usize,
) -> usize {
    let Some(re) = config.weekday_continuation() else {
        return end;
    };
    let input = spans.input();
    while let Some(caps) = re.captures(&input[end..]) {
        let (Some(m), Some(name)) = (caps.get(0), caps.name("day")) else {
            break;
        };
        let next = end..end + m.end();
        let Some(day) = config.weekday(name.as_str()) else {
            break;
        };
        if !spans.is_free(&next) {
            break;
        }
        pattern.add_weekday(day);
        end = next.end;
    }
    end
}

pub fn extract(spans: &mut SpanTracker, config: &LanguageConfig) -> Option<RecurringPattern> {
    let candidates = resolve_overlaps(collect_candidates(spans, config));
    let mut result: Option<RecurringPattern> = None;

    for (range, candidate) in candidates {
        let Candidate {
            mut pattern,
            takes_weekday_list,
        } = candidate;
        let end = if takes_weekday_list {
            absorb_weekday_list(spans, config, &mut pattern, range.end)
        } else {
            range.end
        };
        if !spans.claim(AnnotationKind::Recurrence, range.start..end) {
            continue;
        }
        log::debug!("recurrence '{}' -> {}", &spans.input()[range.start..end], pattern);

        result = match result {
            Some(mut current) if current.can_merge(&pattern) => {
                current.merge(pattern);
                Some(current)
            }
            Some(previous) => {
                log::debug!("recurrence {} replaces {}", pattern, previous);
                Some(pattern)
            }
            None => Some(pattern),
        };
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::language::Language;
    use chrono::Weekday;

    fn run(language: Language, input: &str) -> (Option<RecurringPattern>, String) {
        let mut spans = SpanTracker::new(input);
        let pattern = extract(&mut spans, LanguageConfig::builtin(language));
        (pattern, spans.finish().0)
    }

    #[test]
    fn test_weekday_list_becomes_one_pattern() {
        let (pattern, title) = run(Language::English, "Gym every Monday, Wednesday and Friday");
        let pattern = pattern.unwrap();
        assert_eq!(pattern.frequency, Frequency::Weekly);
        assert_eq!(
            pattern.days_of_week,
            vec![Weekday::Mon, Weekday::Wed, Weekday::Fri]
        );
        assert_eq!(title, "Gym");
    }

    #[test]
    fn test_compound_phrase_beats_shorter_ones() {
        let (pattern, title) = run(Language::English, "Team meeting every first Monday of the month");
        let pattern = pattern.unwrap();
        assert_eq!(pattern.frequency, Frequency::Monthly);
        assert_eq!(pattern.week_of_month, Some(1));
        assert_eq!(pattern.days_of_week, vec![Weekday::Mon]);
        assert_eq!(title, "Team meeting");
    }

    #[test]
    fn test_positional_rule_does_not_take_a_list() {
        let (pattern, title) = run(Language::English, "Review last friday of month and monday");
        let pattern = pattern.unwrap();
        assert_eq!(pattern.week_of_month, Some(-1));
        assert_eq!(pattern.days_of_week, vec![Weekday::Fri]);
        assert_eq!(title, "Review and monday");
    }

    #[test]
    fn test_intervals_and_days_of_month() {
        let (every_three, _) = run(Language::English, "Water plants every 3 days");
        let every_three = every_three.unwrap();
        assert_eq!(every_three.frequency, Frequency::Daily);
        assert_eq!(every_three.interval, 3);

        let (rent, title) = run(Language::English, "Pay rent every 15th");
        assert_eq!(rent.unwrap().day_of_month, Some(15));
        assert_eq!(title, "Pay rent");

        let (zero, _) = run(Language::English, "Nonsense every 0 days");
        assert!(zero.is_none());
    }

    #[test]
    fn test_conflicting_keywords_last_wins() {
        let (pattern, _) = run(Language::English, "Stretch daily weekly");
        assert_eq!(pattern.unwrap().frequency, Frequency::Weekly);
    }

    #[test]
    fn test_separate_weekday_rules_merge() {
        let (pattern, _) = run(Language::German, "Laufen jeden Montag und jeden Donnerstag");
        assert_eq!(
            pattern.unwrap().days_of_week,
            vec![Weekday::Mon, Weekday::Thu]
        );
    }

    #[test]
    fn test_interval_and_weekday_combine() {
        for input in ["Backup every 2 weeks on fridays", "Backup every other week on fridays"] {
            let (pattern, title) = run(Language::English, input);
            let pattern = pattern.unwrap();
            assert_eq!(
                (pattern.frequency, pattern.interval, pattern.days_of_week),
                (Frequency::Weekly, 2, vec![Weekday::Fri]),
                "{}",
                input
            );
            assert_eq!(title, "Backup");
        }

        let (pattern, _) = run(Language::German, "Joggen dienstags alle 2 Wochen");
        let pattern = pattern.unwrap();
        assert_eq!((pattern.interval, pattern.days_of_week), (2, vec![Weekday::Tue]));
    }

    #[test]
    fn test_other_languages() {
        let (de, _) = run(Language::German, "Müll rausbringen alle 2 Wochen");
        let de = de.unwrap();
        assert_eq!((de.frequency, de.interval), (Frequency::Weekly, 2));

        let (fr, _) = run(Language::French, "Yoga tous les mardis et jeudis");
        assert_eq!(fr.unwrap().days_of_week, vec![Weekday::Tue, Weekday::Thu]);

        let (es, title) = run(Language::Spanish, "Reunión el último viernes del mes");
        let es = es.unwrap();
        assert_eq!(es.week_of_month, Some(-1));
        assert_eq!(title, "Reunión");
    }
}
