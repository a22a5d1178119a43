// File: ./src/model/item.rs
use crate::model::recurrence::RecurringPattern;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use strum::{Display, EnumIter};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Priority {
    Low = 1,
    Medium = 2,
    High = 3,
}

impl Priority {
    /// `!` is low, `!!` medium, `!!!` high. Anything else is not a priority.
    pub fn from_exclamations(count: usize) -> Option<Self> {
        match count {
            1 => Some(Priority::Low),
            2 => Some(Priority::Medium),
            3 => Some(Priority::High),
            _ => None,
        }
    }

    pub fn level(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AnnotationKind {
    Date,
    Time,
    Priority,
    Tag,
    Project,
    Recurrence,
}

impl AnnotationKind {
    /// Tags and projects stay visible in the title; everything else is cut out.
    pub fn removes_from_title(self) -> bool {
        match self {
            AnnotationKind::Date
            | AnnotationKind::Time
            | AnnotationKind::Priority
            | AnnotationKind::Recurrence => true,
            AnnotationKind::Tag | AnnotationKind::Project => false,
        }
    }
}

/// One recognized span of the input. `range` holds byte offsets into
/// `ParsedTask::original_input` and always falls on char boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub kind: AnnotationKind,
    pub range: Range<usize>,
    pub text: String,
}

impl Annotation {
    pub fn overlaps(&self, other: &Range<usize>) -> bool {
        self.range.start < other.end && other.start < self.range.end
    }

    /// Character offsets, for consumers that index text by `char`.
    pub fn char_range(&self, input: &str) -> Range<usize> {
        let start = input[..self.range.start].chars().count();
        let len = input[self.range.clone()].chars().count();
        start..start + len
    }
}

/// Which date a parsed time of day belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TimeAnchor {
    Scheduled,
    Deadline,
}

// --- DATE TYPES ---

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum DateType {
    AllDay(NaiveDate),
    Specific(NaiveDateTime),
}

impl DateType {
    fn combine(date: NaiveDate, time: Option<NaiveTime>) -> Self {
        match time {
            Some(t) => DateType::Specific(date.and_time(t)),
            None => DateType::AllDay(date),
        }
    }

    pub fn to_date_naive(&self) -> NaiveDate {
        match self {
            DateType::AllDay(d) => *d,
            DateType::Specific(dt) => dt.date(),
        }
    }

    pub fn format_smart(&self) -> String {
        match self {
            DateType::AllDay(d) => d.format("%Y-%m-%d").to_string(),
            DateType::Specific(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedTask {
    pub original_input: String,
    pub title: String,
    pub scheduled_date: Option<NaiveDate>,
    pub deadline: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub time_anchor: Option<TimeAnchor>,
    pub priority: Option<Priority>,
    pub project: Option<String>,
    pub labels: Vec<String>,
    pub recurring: Option<RecurringPattern>,
    pub annotations: Vec<Annotation>,
}

impl ParsedTask {
    /// A result carrying nothing but the title.
    pub fn untouched(input: &str) -> Self {
        Self {
            original_input: input.to_string(),
            title: input.split_whitespace().collect::<Vec<_>>().join(" "),
            scheduled_date: None,
            deadline: None,
            time: None,
            time_anchor: None,
            priority: None,
            project: None,
            labels: Vec::new(),
            recurring: None,
            annotations: Vec::new(),
        }
    }

    fn time_for(&self, anchor: TimeAnchor) -> Option<NaiveTime> {
        self.time.filter(|_| self.time_anchor == Some(anchor))
    }

    pub fn scheduled_at(&self) -> Option<DateType> {
        self.scheduled_date
            .map(|d| DateType::combine(d, self.time_for(TimeAnchor::Scheduled)))
    }

    pub fn deadline_at(&self) -> Option<DateType> {
        self.deadline
            .map(|d| DateType::combine(d, self.time_for(TimeAnchor::Deadline)))
    }

    /// The date a reminder store would use as "due": the deadline when there
    /// is one, the scheduled date otherwise.
    pub fn due(&self) -> Option<DateType> {
        self.deadline_at().or_else(|| self.scheduled_at())
    }

    pub fn annotations_of(&self, kind: AnnotationKind) -> impl Iterator<Item = &Annotation> {
        self.annotations.iter().filter(move |a| a.kind == kind)
    }
}
