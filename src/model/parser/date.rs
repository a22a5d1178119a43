// File: ./src/model/parser/date.rs
//! Scheduled dates and deadlines.
//!
//! Candidates come from relative phrases ("tomorrow", "next friday"), day
//! offsets ("in 3 days") and numeric dates. A candidate right after a
//! deadline keyword is a deadline; anything else is a scheduled date.
use crate::model::item::AnnotationKind;
use crate::model::language::{LanguageConfig, RelativeDateModifier};
use crate::model::span::{SpanTracker, normalize_phrase, resolve_overlaps, trailing_keyword};
use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use regex::Captures;
use std::ops::Range;

impl RelativeDateModifier {
    /// Resolves the modifier against `reference`. `None` only when the
    /// result falls outside chrono's calendar.
    pub fn resolve(self, reference: NaiveDate) -> Option<NaiveDate> {
        match self {
            RelativeDateModifier::Today => Some(reference),
            RelativeDateModifier::Tomorrow => reference.checked_add_days(Days::new(1)),
            RelativeDateModifier::DayAfterTomorrow => reference.checked_add_days(Days::new(2)),
            RelativeDateModifier::NextWeekday(day) => next_weekday(reference, day),
            RelativeDateModifier::NextWeek => reference.checked_add_days(Days::new(7)),
            // chrono clamps to the last day of a shorter month.
            RelativeDateModifier::NextMonth => reference.checked_add_months(Months::new(1)),
            RelativeDateModifier::NextYear => reference.checked_add_months(Months::new(12)),
            RelativeDateModifier::DaysOffset(n) => add_days(reference, n),
        }
    }
}

/// The next occurrence of `target` strictly after `from`; the same weekday
/// is a full week ahead.
pub fn next_weekday(from: NaiveDate, target: Weekday) -> Option<NaiveDate> {
    let ahead = (target.num_days_from_monday() + 7 - from.weekday().num_days_from_monday()) % 7;
    let ahead = if ahead == 0 { 7 } else { ahead };
    from.checked_add_days(Days::new(u64::from(ahead)))
}

fn add_days(from: NaiveDate, n: i64) -> Option<NaiveDate> {
    if n >= 0 {
        from.checked_add_days(Days::new(n.unsigned_abs()))
    } else {
        from.checked_sub_days(Days::new(n.unsigned_abs()))
    }
}

/// Builds a date from `day`/`month`/`year` groups. Two-digit years are in
/// the 2000s. Without a year, the date is the next one on or after
/// `reference`.
fn absolute_date(caps: &Captures, reference: NaiveDate) -> Option<NaiveDate> {
    let day: u32 = caps.name("day")?.as_str().parse().ok()?;
    let month: u32 = caps.name("month")?.as_str().parse().ok()?;
    match caps.name("year") {
        Some(year) => {
            let raw = year.as_str();
            let mut year: i32 = raw.parse().ok()?;
            if raw.len() == 2 {
                year += 2000;
            }
            NaiveDate::from_ymd_opt(year, month, day)
        }
        None => match NaiveDate::from_ymd_opt(reference.year(), month, day) {
            Some(date) if date >= reference => Some(date),
            _ => NaiveDate::from_ymd_opt(reference.year() + 1, month, day),
        },
    }
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    date: NaiveDate,
    // Start of the unclaimed segment the candidate was found in; keywords
    // are only looked for between here and the candidate.
    segment_start: usize,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DateFields {
    pub scheduled: Option<NaiveDate>,
    pub deadline: Option<NaiveDate>,
}

fn collect_candidates(
    spans: &SpanTracker,
    config: &LanguageConfig,
    reference: NaiveDate,
) -> Vec<(Range<usize>, Candidate)> {
    let mut found = Vec::new();
    let mut push = |offset: usize, caps: &Captures, date: Option<NaiveDate>| {
        if let (Some(m), Some(date)) = (caps.get(0), date) {
            found.push((
                offset + m.start()..offset + m.end(),
                Candidate {
                    date,
                    segment_start: offset,
                },
            ));
        }
    };

    if let Some(re) = config.relative_matcher() {
        for (offset, caps) in spans.captures_unclaimed(re) {
            let date = caps
                .get(0)
                .and_then(|m| config.relative_date(m.as_str()))
                .and_then(|modifier| modifier.resolve(reference));
            push(offset, &caps, date);
        }
    }

    for pattern in config.offset_patterns() {
        for (offset, caps) in spans.captures_unclaimed(&pattern.regex) {
            let date = caps
                .name("n")
                .and_then(|n| n.as_str().parse::<i64>().ok())
                .and_then(|n| n.checked_mul(pattern.days_per_unit))
                .and_then(|days| RelativeDateModifier::DaysOffset(days).resolve(reference));
            push(offset, &caps, date);
        }
    }

    for re in config.absolute_date_patterns() {
        for (offset, caps) in spans.captures_unclaimed(re) {
            let date = absolute_date(&caps, reference);
            push(offset, &caps, date);
        }
    }

    found
}

fn starts_with_keyword(text: &str, keywords: &[String]) -> bool {
    let text = normalize_phrase(text);
    keywords.iter().any(|k| {
        text.strip_prefix(k.as_str())
            .is_some_and(|rest| rest.starts_with(' '))
    })
}

/// Claims `preferred`, falling back to `bare` when the extension collides
/// with an earlier claim.
fn claim_date(spans: &mut SpanTracker, preferred: Range<usize>, bare: Range<usize>) -> bool {
    spans.claim(AnnotationKind::Date, preferred) || spans.claim(AnnotationKind::Date, bare)
}

/// A deadline keyword cut off from its date by a time, as in "by 5pm
/// friday". Returns the keyword's range.
fn keyword_before_time(
    spans: &SpanTracker,
    config: &LanguageConfig,
    segment_start: usize,
    date_start: usize,
) -> Option<Range<usize>> {
    let input = spans.input();
    if !input[segment_start..date_start].trim().is_empty() {
        return None;
    }
    let claims = spans.annotations();
    let time = claims
        .iter()
        .find(|a| a.kind == AnnotationKind::Time && a.range.end == segment_start)?;
    let from = claims
        .iter()
        .map(|a| a.range.end)
        .filter(|&end| end <= time.range.start)
        .max()
        .unwrap_or(0);
    let before = &input[from..time.range.start];
    let start = trailing_keyword(before, config.deadline_keywords())?;
    Some(from + start..from + before.trim_end().len())
}

pub fn extract(
    spans: &mut SpanTracker,
    config: &LanguageConfig,
    reference: NaiveDate,
) -> DateFields {
    let input = spans.input();
    let candidates = resolve_overlaps(collect_candidates(spans, config, reference));
    let mut fields = DateFields::default();

    for (range, candidate) in candidates {
        let before = &input[candidate.segment_start..range.start];
        let keyword = trailing_keyword(before, config.deadline_keywords())
            .map(|k| candidate.segment_start + k);
        let split_keyword = match keyword {
            Some(_) => None,
            None => keyword_before_time(spans, config, candidate.segment_start, range.start),
        };
        let is_deadline = keyword.is_some()
            || split_keyword.is_some()
            || starts_with_keyword(&input[range.clone()], config.deadline_keywords());

        if is_deadline {
            if fields.deadline.is_some() {
                continue;
            }
            let start = keyword.unwrap_or(range.start);
            if claim_date(spans, start..range.end, range.clone()) {
                log::debug!("deadline {} from '{}'", candidate.date, &input[range]);
                fields.deadline = Some(candidate.date);
                if let Some(split) = split_keyword {
                    spans.claim(AnnotationKind::Date, split);
                }
            }
        } else {
            if fields.scheduled.is_some() {
                continue;
            }
            let start = trailing_keyword(before, config.date_prepositions())
                .map_or(range.start, |p| candidate.segment_start + p);
            if claim_date(spans, start..range.end, range.clone()) {
                log::debug!("scheduled {} from '{}'", candidate.date, &input[range]);
                fields.scheduled = Some(candidate.date);
            }
        }
    }

    fields
}
