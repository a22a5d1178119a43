// File: ./src/model/parser/time.rs
use crate::model::item::AnnotationKind;
use crate::model::language::LanguageConfig;
use crate::model::span::SpanTracker;
use chrono::NaiveTime;
use regex::Captures;

/// Turns the named groups of a time match into a 24h time.
fn time_from_captures(caps: &Captures) -> Option<NaiveTime> {
    let hour: u32 = caps.name("hour")?.as_str().parse().ok()?;
    let minute: u32 = match caps.name("minute") {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    if minute > 59 {
        return None;
    }

    let hour = match caps.name("meridiem") {
        Some(meridiem) => {
            if !(1..=12).contains(&hour) {
                return None;
            }
            let is_pm = meridiem.as_str().to_lowercase().starts_with('p');
            match (hour, is_pm) {
                (12, false) => 0,
                (12, true) => 12,
                (h, false) => h,
                (h, true) => h + 12,
            }
        }
        None => hour,
    };
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Patterns are tried in table order; within a pattern, left to right. The
/// first match that forms a valid time is claimed.
pub fn extract(spans: &mut SpanTracker, config: &LanguageConfig) -> Option<NaiveTime> {
    for re in config.time_patterns() {
        for (offset, caps) in spans.captures_unclaimed(re) {
            let (Some(m), Some(time)) = (caps.get(0), time_from_captures(&caps)) else {
                continue;
            };
            let range = offset + m.start()..offset + m.end();
            if spans.claim(AnnotationKind::Time, range) {
                log::debug!("time {} from '{}'", time, m.as_str());
                return Some(time);
            }
        }
    }
    None
}
