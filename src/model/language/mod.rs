// File: ./src/model/language/mod.rs
//! Per-language keyword tables.
//!
//! A language is described by a plain, serializable [`LanguageTable`] and
//! compiled once into a [`LanguageConfig`], which holds the regular
//! expressions the extractors run. Built-in tables and caller-supplied ones
//! go through the same compilation step.
mod de;
mod en;
mod es;
mod fr;

use crate::model::recurrence::{Frequency, RecurringPattern};
use crate::model::span::normalize_phrase;
use anyhow::{Context, Result, bail};
use chrono::Weekday;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, Display,
)]
pub enum Language {
    #[strum(serialize = "de", to_string = "German")]
    #[serde(rename = "de")]
    German,
    #[strum(serialize = "en", to_string = "English")]
    #[serde(rename = "en")]
    English,
    #[strum(serialize = "fr", to_string = "French")]
    #[serde(rename = "fr")]
    French,
    #[strum(serialize = "es", to_string = "Spanish")]
    #[serde(rename = "es")]
    Spanish,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::German => "de",
            Language::English => "en",
            Language::French => "fr",
            Language::Spanish => "es",
        }
    }

    /// Looks a language up by its two-letter code, ignoring case.
    pub fn from_code(code: &str) -> Option<Self> {
        code.trim().to_lowercase().parse().ok()
    }

    fn table(self) -> LanguageTable {
        match self {
            Language::German => de::table(),
            Language::English => en::table(),
            Language::French => fr::table(),
            Language::Spanish => es::table(),
        }
    }
}

/// How a relative-date phrase turns into a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RelativeDateModifier {
    Today,
    Tomorrow,
    DayAfterTomorrow,
    NextWeekday(Weekday),
    NextWeek,
    NextMonth,
    NextYear,
    DaysOffset(i64),
}

/// Template attached to a recurrence phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringKeyword {
    pub frequency: Frequency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekday: Option<Weekday>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_month: Option<i8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_of_month: Option<i8>,
}

impl RecurringKeyword {
    pub fn every(frequency: Frequency) -> Self {
        Self {
            frequency,
            interval: None,
            weekday: None,
            day_of_month: None,
            week_of_month: None,
        }
    }

    pub fn weekly_on(day: Weekday) -> Self {
        Self {
            weekday: Some(day),
            ..Self::every(Frequency::Weekly)
        }
    }

    /// "first monday" (`week = 1`) or "last friday" (`week = -1`).
    pub fn positional(week: i8, day: Weekday) -> Self {
        Self {
            weekday: Some(day),
            week_of_month: Some(week),
            ..Self::every(Frequency::Monthly)
        }
    }

    pub fn monthly_on_day(day: i8) -> Self {
        Self {
            day_of_month: Some(day),
            ..Self::every(Frequency::Monthly)
        }
    }

    pub fn with_interval(self, interval: u32) -> Self {
        Self {
            interval: Some(interval),
            ..self
        }
    }

    pub fn expand(&self) -> RecurringPattern {
        let mut pattern = RecurringPattern::new(self.frequency);
        pattern.interval = self.interval.unwrap_or(1).max(1);
        if let Some(day) = self.weekday {
            pattern.add_weekday(day);
        }
        pattern.day_of_month = self.day_of_month;
        // A positional rule only makes sense for a single weekday in a month.
        if self.frequency == Frequency::Monthly && self.weekday.is_some() {
            pattern.week_of_month = self.week_of_month;
        }
        pattern
    }
}

/// Field order of numeric dates without a year-first layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateOrder {
    #[default]
    DayMonthYear,
    MonthDayYear,
}

/// A pattern like "in 3 days" with a named group `n`, counted in units of
/// `days_per_unit` days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetPatternDef {
    pub pattern: String,
    #[serde(default = "default_days_per_unit")]
    pub days_per_unit: i64,
}

fn default_days_per_unit() -> i64 {
    1
}

fn default_date_separator() -> char {
    '/'
}

/// Raw, serializable description of a language.
///
/// Phrases are matched case-insensitively and tolerate repeated whitespace.
/// Time patterns must define a `hour` group and may define `minute` and
/// `meridiem`; the interval pattern needs `n` and `unit`; the day-of-month
/// pattern needs `day`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageTable {
    pub code: String,
    #[serde(default)]
    pub deadline_keywords: Vec<String>,
    #[serde(default)]
    pub urgent_keywords: Vec<String>,
    #[serde(default)]
    pub date_prepositions: Vec<String>,
    #[serde(default)]
    pub relative_dates: BTreeMap<String, RelativeDateModifier>,
    #[serde(default)]
    pub recurring_keywords: BTreeMap<String, RecurringKeyword>,
    #[serde(default)]
    pub weekdays: BTreeMap<String, Weekday>,
    #[serde(default)]
    pub conjunctions: Vec<String>,
    #[serde(default)]
    pub time_patterns: Vec<String>,
    #[serde(default)]
    pub offset_patterns: Vec<OffsetPatternDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_pattern: Option<String>,
    #[serde(default)]
    pub interval_units: BTreeMap<String, Frequency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_month_pattern: Option<String>,
    #[serde(default)]
    pub date_order: DateOrder,
    #[serde(default = "default_date_separator")]
    pub date_separator: char,
}

#[derive(Debug, Clone)]
pub struct OffsetPattern {
    pub regex: Regex,
    pub days_per_unit: i64,
}

/// A compiled, immutable language table.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    code: String,
    deadline_keywords: Vec<String>,
    urgent_keywords: Vec<String>,
    date_prepositions: Vec<String>,
    relative_dates: BTreeMap<String, RelativeDateModifier>,
    recurring_keywords: BTreeMap<String, RecurringKeyword>,
    weekdays: BTreeMap<String, Weekday>,
    interval_units: BTreeMap<String, Frequency>,
    time_patterns: Vec<Regex>,
    offset_patterns: Vec<OffsetPattern>,
    interval_pattern: Option<Regex>,
    day_of_month_pattern: Option<Regex>,
    absolute_dates: Vec<Regex>,
    relative_matcher: Option<Regex>,
    recurring_matcher: Option<Regex>,
    urgent_matcher: Option<Regex>,
    deadline_matcher: Option<Regex>,
    weekday_continuation: Option<Regex>,
}

static GERMAN: Lazy<LanguageConfig> = Lazy::new(|| compile_builtin(Language::German));
static ENGLISH: Lazy<LanguageConfig> = Lazy::new(|| compile_builtin(Language::English));
static FRENCH: Lazy<LanguageConfig> = Lazy::new(|| compile_builtin(Language::French));
static SPANISH: Lazy<LanguageConfig> = Lazy::new(|| compile_builtin(Language::Spanish));

fn compile_builtin(language: Language) -> LanguageConfig {
    LanguageConfig::from_table(language.table())
        .expect("built-in language table must compile")
}

impl LanguageConfig {
    pub fn builtin(language: Language) -> &'static LanguageConfig {
        match language {
            Language::German => Lazy::force(&GERMAN),
            Language::English => Lazy::force(&ENGLISH),
            Language::French => Lazy::force(&FRENCH),
            Language::Spanish => Lazy::force(&SPANISH),
        }
    }

    /// Built-in table for a language code. Unknown codes yield `None`; the
    /// caller decides the fallback.
    pub fn for_code(code: &str) -> Option<&'static LanguageConfig> {
        Language::from_code(code).map(Self::builtin)
    }

    /// The raw table of a built-in language, e.g. as a starting point for a
    /// custom one.
    pub fn builtin_table(language: Language) -> LanguageTable {
        language.table()
    }

    pub fn from_table(table: LanguageTable) -> Result<Self> {
        let code = table.code.trim().to_lowercase();
        if code.is_empty() {
            bail!("Language table has an empty code");
        }

        let deadline_keywords = normalize_list(&table.deadline_keywords);
        let urgent_keywords = normalize_list(&table.urgent_keywords);
        let date_prepositions = normalize_list(&table.date_prepositions);
        let conjunctions = normalize_list(&table.conjunctions);
        let relative_dates = normalize_keys(table.relative_dates);
        let recurring_keywords = normalize_keys(table.recurring_keywords);
        let weekdays = normalize_keys(table.weekdays);
        let interval_units = normalize_keys(table.interval_units);

        let time_patterns = table
            .time_patterns
            .iter()
            .map(|p| compile_with_groups(p, &["hour"]))
            .collect::<Result<Vec<_>>>()
            .with_context(|| format!("Invalid time pattern in language '{}'", code))?;

        let offset_patterns = table
            .offset_patterns
            .iter()
            .map(|def| {
                Ok(OffsetPattern {
                    regex: compile_with_groups(&def.pattern, &["n"])?,
                    days_per_unit: def.days_per_unit,
                })
            })
            .collect::<Result<Vec<_>>>()
            .with_context(|| format!("Invalid offset pattern in language '{}'", code))?;

        let interval_pattern = table
            .interval_pattern
            .as_deref()
            .map(|p| compile_with_groups(p, &["n", "unit"]))
            .transpose()
            .with_context(|| format!("Invalid interval pattern in language '{}'", code))?;

        let day_of_month_pattern = table
            .day_of_month_pattern
            .as_deref()
            .map(|p| compile_with_groups(p, &["day"]))
            .transpose()
            .with_context(|| format!("Invalid day-of-month pattern in language '{}'", code))?;

        let absolute_dates = absolute_date_patterns(table.date_order, table.date_separator)?;

        let relative_matcher = phrase_matcher(relative_dates.keys())?;
        let recurring_matcher = phrase_matcher(recurring_keywords.keys())?;
        let urgent_matcher = phrase_matcher(urgent_keywords.iter())?;
        let deadline_matcher = phrase_matcher(deadline_keywords.iter())?;
        let weekday_continuation = continuation_matcher(&weekdays, &conjunctions)?;

        Ok(Self {
            code,
            deadline_keywords,
            urgent_keywords,
            date_prepositions,
            relative_dates,
            recurring_keywords,
            weekdays,
            interval_units,
            time_patterns,
            offset_patterns,
            interval_pattern,
            day_of_month_pattern,
            absolute_dates,
            relative_matcher,
            recurring_matcher,
            urgent_matcher,
            deadline_matcher,
            weekday_continuation,
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn deadline_keywords(&self) -> &[String] {
        &self.deadline_keywords
    }

    pub fn urgent_keywords(&self) -> &[String] {
        &self.urgent_keywords
    }

    pub fn date_prepositions(&self) -> &[String] {
        &self.date_prepositions
    }

    pub fn relative_dates(&self) -> &BTreeMap<String, RelativeDateModifier> {
        &self.relative_dates
    }

    pub fn recurring_keywords(&self) -> &BTreeMap<String, RecurringKeyword> {
        &self.recurring_keywords
    }

    pub fn time_patterns(&self) -> &[Regex] {
        &self.time_patterns
    }

    pub fn offset_patterns(&self) -> &[OffsetPattern] {
        &self.offset_patterns
    }

    pub fn interval_pattern(&self) -> Option<&Regex> {
        self.interval_pattern.as_ref()
    }

    pub fn day_of_month_pattern(&self) -> Option<&Regex> {
        self.day_of_month_pattern.as_ref()
    }

    pub fn absolute_date_patterns(&self) -> &[Regex] {
        &self.absolute_dates
    }

    pub fn relative_matcher(&self) -> Option<&Regex> {
        self.relative_matcher.as_ref()
    }

    pub fn recurring_matcher(&self) -> Option<&Regex> {
        self.recurring_matcher.as_ref()
    }

    pub fn urgent_matcher(&self) -> Option<&Regex> {
        self.urgent_matcher.as_ref()
    }

    pub fn weekday_continuation(&self) -> Option<&Regex> {
        self.weekday_continuation.as_ref()
    }

    pub fn relative_date(&self, phrase: &str) -> Option<RelativeDateModifier> {
        self.relative_dates.get(&normalize_phrase(phrase)).copied()
    }

    pub fn recurring_keyword(&self, phrase: &str) -> Option<RecurringKeyword> {
        self.recurring_keywords.get(&normalize_phrase(phrase)).copied()
    }

    pub fn weekday(&self, name: &str) -> Option<Weekday> {
        self.weekdays.get(&normalize_phrase(name)).copied()
    }

    pub fn interval_unit(&self, unit: &str) -> Option<Frequency> {
        self.interval_units.get(&normalize_phrase(unit)).copied()
    }

    /// True if any deadline keyword occurs as a whole word in `input`.
    pub fn mentions_deadline(&self, input: &str) -> bool {
        self.deadline_matcher
            .as_ref()
            .is_some_and(|re| re.is_match(input))
    }
}

fn normalize_list(items: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in items.iter().map(|s| normalize_phrase(s)) {
        if !item.is_empty() && !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

fn normalize_keys<V>(map: BTreeMap<String, V>) -> BTreeMap<String, V> {
    map.into_iter()
        .map(|(k, v)| (normalize_phrase(&k), v))
        .filter(|(k, _)| !k.is_empty())
        .collect()
}

fn compile_with_groups(pattern: &str, groups: &[&str]) -> Result<Regex> {
    let re = Regex::new(&format!("(?i){}", pattern))
        .with_context(|| format!("Could not compile pattern '{}'", pattern))?;
    for group in groups {
        if !re.capture_names().flatten().any(|name| name == *group) {
            bail!("Pattern '{}' lacks the named group '{}'", pattern, group);
        }
    }
    Ok(re)
}

/// Escapes a phrase for use inside a pattern; inner spaces match any run of
/// whitespace.
fn phrase_pattern(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+")
}

/// One alternation over all phrases, longest first, so a compound phrase
/// always beats a shorter phrase starting at the same position.
fn phrase_matcher<'a>(phrases: impl Iterator<Item = &'a String>) -> Result<Option<Regex>> {
    let mut sorted: Vec<&String> = phrases.collect();
    if sorted.is_empty() {
        return Ok(None);
    }
    sorted.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    sorted.dedup();
    let alternation = sorted
        .iter()
        .map(|p| phrase_pattern(p))
        .collect::<Vec<_>>()
        .join("|");
    let re = Regex::new(&format!(r"(?i)\b(?:{})\b", alternation))
        .context("Could not compile keyword table")?;
    Ok(Some(re))
}

/// Matches a list continuation such as ", wednesday" or " and friday" right
/// at the start of the haystack.
fn continuation_matcher(
    weekdays: &BTreeMap<String, Weekday>,
    conjunctions: &[String],
) -> Result<Option<Regex>> {
    if weekdays.is_empty() {
        return Ok(None);
    }
    let mut names: Vec<&String> = weekdays.keys().collect();
    names.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    let days = names
        .iter()
        .map(|n| phrase_pattern(n))
        .collect::<Vec<_>>()
        .join("|");
    let separator = if conjunctions.is_empty() {
        r"\s*,\s*".to_string()
    } else {
        let conj = conjunctions
            .iter()
            .map(|c| phrase_pattern(c))
            .collect::<Vec<_>>()
            .join("|");
        format!(r"\s*,\s*(?:(?:{conj})\s+)?|\s+(?:{conj})\s+")
    };
    let re = Regex::new(&format!(r"(?i)^(?:{separator})(?P<day>{days})\b"))
        .context("Could not compile weekday list pattern")?;
    Ok(Some(re))
}

/// ISO dates for every language, plus the two-field local layout with an
/// optional year.
fn absolute_date_patterns(order: DateOrder, separator: char) -> Result<Vec<Regex>> {
    let iso = r"\b(?P<year>\d{4})-(?P<month>\d{1,2})-(?P<day>\d{1,2})\b".to_string();
    let (first, second) = match order {
        DateOrder::DayMonthYear => ("day", "month"),
        DateOrder::MonthDayYear => ("month", "day"),
    };
    let sep = regex::escape(&separator.to_string());
    // "15.3." is a complete German date; a trailing separator is allowed.
    let tail = if separator == '.' {
        format!(r"(?:{sep}|\b)")
    } else {
        r"\b".to_string()
    };
    let local = format!(
        r"\b(?P<{first}>\d{{1,2}}){sep}(?P<{second}>\d{{1,2}})(?:{sep}(?P<year>\d{{4}}|\d{{2}})\b|{tail})"
    );
    [iso, local]
        .iter()
        .map(|p| Regex::new(p).with_context(|| format!("Could not compile date pattern '{}'", p)))
        .collect()
}

// --- TABLE BUILDING HELPERS ---

pub(crate) const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub(crate) fn owned<V: Copy>(entries: &[(&str, V)]) -> BTreeMap<String, V> {
    entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Name → weekday, from names listed Monday first.
pub(crate) fn weekday_names(names: &[&str; 7]) -> BTreeMap<String, Weekday> {
    names
        .iter()
        .zip(WEEK)
        .map(|(name, day)| (name.to_string(), day))
        .collect()
}

/// Expands `{day}` in every template for the seven weekday names.
pub(crate) fn per_weekday<V>(
    templates: &[&str],
    names: &[&str; 7],
    make: impl Fn(Weekday) -> V,
) -> Vec<(String, V)> {
    let mut out = Vec::new();
    for template in templates {
        for (name, day) in names.iter().zip(WEEK) {
            out.push((template.replace("{day}", name), make(day)));
        }
    }
    out
}

/// Expands `{ord}` and `{day}` into positional monthly rules.
pub(crate) fn per_ordinal_weekday(
    templates: &[&str],
    ordinals: &[(&str, i8)],
    names: &[&str; 7],
) -> Vec<(String, RecurringKeyword)> {
    let mut out = Vec::new();
    for (ordinal, week) in ordinals {
        let with_ordinal: Vec<String> = templates
            .iter()
            .map(|t| t.replace("{ord}", ordinal))
            .collect();
        let refs: Vec<&str> = with_ordinal.iter().map(String::as_str).collect();
        out.extend(per_weekday(&refs, names, |day| {
            RecurringKeyword::positional(*week, day)
        }));
    }
    out
}

pub(crate) fn offset(pattern: &str, days_per_unit: i64) -> OffsetPatternDef {
    OffsetPatternDef {
        pattern: pattern.to_string(),
        days_per_unit,
    }
}
