// File: ./src/model/parser/mod.rs
//! Turns free-form task text into a [`ParsedTask`].
//!
//! Extractors run in a fixed order: priority, tags and project, recurrence,
//! time, date. Recurrence goes before dates so that "every monday" is never
//! read as the date "monday". Each extractor only sees text that earlier
//! ones left unclaimed.
pub mod date;
pub mod priority;
pub mod recurrence;
pub mod tags;
pub mod time;

use crate::model::item::{ParsedTask, TimeAnchor};
use crate::model::language::{Language, LanguageConfig};
use crate::model::span::SpanTracker;
use chrono::{Local, NaiveDate};

#[derive(Debug, Clone, Copy)]
pub struct TaskParser<'c> {
    config: &'c LanguageConfig,
}

impl<'c> TaskParser<'c> {
    pub fn new(config: &'c LanguageConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &'c LanguageConfig {
        self.config
    }

    /// Parses `input`. Relative dates resolve against `reference`, or today
    /// in the local timezone when `None`.
    ///
    /// Never fails: text nothing recognizes ends up in the title.
    pub fn parse(&self, input: &str, reference: Option<NaiveDate>) -> ParsedTask {
        let reference = reference.unwrap_or_else(|| Local::now().date_naive());
        let config = self.config;
        log::trace!("parsing '{}' as '{}' relative to {}", input, config.code(), reference);

        let mut spans = SpanTracker::new(input);

        // 1. Priority
        let priority = priority::extract(&mut spans, config);

        // 2. Labels and project
        let tags = tags::extract(&mut spans);

        // 3. Recurrence
        let recurring = recurrence::extract(&mut spans, config);

        // 4. Time, anchored to the deadline when the text talks about one.
        // Keywords inside labels and projects ("#due") do not count.
        let time = time::extract(&mut spans, config);
        let time_anchor = time.map(|_| {
            let mentions_deadline = spans
                .unclaimed_segments()
                .iter()
                .any(|(_, text)| config.mentions_deadline(text));
            if mentions_deadline {
                TimeAnchor::Deadline
            } else {
                TimeAnchor::Scheduled
            }
        });

        // 5. Dates
        let dates = date::extract(&mut spans, config, reference);

        let (title, annotations) = spans.finish();
        ParsedTask {
            original_input: input.to_string(),
            title,
            scheduled_date: dates.scheduled,
            deadline: dates.deadline,
            time,
            time_anchor,
            priority,
            project: tags.project,
            labels: tags.labels,
            recurring,
            annotations,
        }
    }
}

impl TaskParser<'static> {
    pub fn for_language(language: Language) -> Self {
        Self::new(LanguageConfig::builtin(language))
    }
}
