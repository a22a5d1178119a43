// File: ./src/model/span.rs
//! Bookkeeping for which parts of the input an extractor has already taken.
//!
//! Every extractor reads only the unclaimed segments of the input and claims
//! what it recognizes. Once all extractors ran, the tracker yields the
//! ordered annotation list and the title (the input minus every span whose
//! kind removes it from the title).
use crate::model::item::{Annotation, AnnotationKind};
use regex::{Captures, Regex};
use std::ops::Range;

#[derive(Debug)]
pub struct SpanTracker<'a> {
    input: &'a str,
    // Kept sorted by start offset; never overlapping.
    claims: Vec<Annotation>,
}

impl<'a> SpanTracker<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            claims: Vec::new(),
        }
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    pub fn is_free(&self, range: &Range<usize>) -> bool {
        range.start < range.end
            && range.end <= self.input.len()
            && !self.claims.iter().any(|c| c.overlaps(range))
    }

    /// Claims `range` for `kind`. Returns false (and records nothing) if the
    /// range is empty or touches an existing claim.
    pub fn claim(&mut self, kind: AnnotationKind, range: Range<usize>) -> bool {
        if !self.is_free(&range) {
            return false;
        }
        let Some(text) = self.input.get(range.clone()) else {
            return false;
        };
        log::trace!("claim {} {:?} '{}'", kind, range, text);
        let at = self
            .claims
            .partition_point(|c| c.range.start < range.start);
        self.claims.insert(
            at,
            Annotation {
                kind,
                range,
                text: text.to_string(),
            },
        );
        true
    }

    /// The stretches of input between claims, with their byte offset.
    pub fn unclaimed_segments(&self) -> Vec<(usize, &'a str)> {
        let mut segments = Vec::new();
        let mut cursor = 0;
        for claim in &self.claims {
            if claim.range.start > cursor {
                segments.push((cursor, &self.input[cursor..claim.range.start]));
            }
            cursor = claim.range.end;
        }
        if cursor < self.input.len() {
            segments.push((cursor, &self.input[cursor..]));
        }
        segments
    }

    /// Runs `re` over every unclaimed segment. Matches never cross a claim.
    pub fn captures_unclaimed(&self, re: &Regex) -> Vec<(usize, Captures<'a>)> {
        let mut found = Vec::new();
        for (offset, segment) in self.unclaimed_segments() {
            for caps in re.captures_iter(segment) {
                found.push((offset, caps));
            }
        }
        found
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.claims
    }

    /// The input minus every removed span, whitespace collapsed.
    pub fn title(&self) -> String {
        let mut kept = String::with_capacity(self.input.len());
        let mut cursor = 0;
        for claim in self.claims.iter().filter(|c| c.kind.removes_from_title()) {
            kept.push_str(&self.input[cursor..claim.range.start]);
            // Keep words on either side of a removed span apart.
            kept.push(' ');
            cursor = claim.range.end;
        }
        kept.push_str(&self.input[cursor..]);
        collapse_whitespace(&kept)
    }

    /// Consumes the tracker, returning `(title, annotations)`.
    pub fn finish(self) -> (String, Vec<Annotation>) {
        (self.title(), self.claims)
    }
}

pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lowercases and collapses whitespace, the form every table key is stored in.
pub fn normalize_phrase(s: &str) -> String {
    collapse_whitespace(s).to_lowercase()
}

/// Whitespace-delimited words of `text` as `(start, end, word)`.
pub fn split_words(text: &str) -> Vec<(usize, usize, &str)> {
    let mut parts = Vec::new();
    let mut start = None;
    for (idx, c) in text.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                parts.push((s, idx, &text[s..idx]));
                start = None;
            }
            (false, None) => start = Some(idx),
            _ => {}
        }
    }
    if let Some(s) = start {
        parts.push((s, text.len(), &text[s..]));
    }
    parts
}

/// Keeps the longest of any overlapping candidates (ties go to the earlier
/// one) and returns the survivors ordered by start.
pub fn resolve_overlaps<T>(mut candidates: Vec<(Range<usize>, T)>) -> Vec<(Range<usize>, T)> {
    candidates.sort_by(|(a, _), (b, _)| {
        b.len()
            .cmp(&a.len())
            .then_with(|| a.start.cmp(&b.start))
    });
    let mut kept: Vec<(Range<usize>, T)> = Vec::new();
    for (range, value) in candidates {
        if kept
            .iter()
            .all(|(r, _)| range.end <= r.start || r.end <= range.start)
        {
            kept.push((range, value));
        }
    }
    kept.sort_by_key(|(r, _)| r.start);
    kept
}

/// If `text` (ignoring trailing whitespace) ends with one of `keywords` as
/// whole words, returns the byte offset where that keyword starts.
///
/// `keywords` must already be normalized; the longest one that fits wins.
/// Only the last few words of `text` are inspected.
pub fn trailing_keyword(text: &str, keywords: &[String]) -> Option<usize> {
    let max_words = keywords
        .iter()
        .map(|k| k.split(' ').count())
        .max()
        .unwrap_or(0);
    let words = last_words(text, max_words);
    let mut best: Option<(usize, usize)> = None;
    for keyword in keywords {
        let wanted: Vec<&str> = keyword.split(' ').collect();
        if keyword.is_empty() || wanted.len() > words.len() {
            continue;
        }
        let tail = &words[words.len() - wanted.len()..];
        if tail
            .iter()
            .zip(&wanted)
            .all(|((_, word), k)| word.to_lowercase() == *k)
            && best.is_none_or(|(_, n)| wanted.len() > n)
        {
            best = Some((tail[0].0, wanted.len()));
        }
    }
    best.map(|(start, _)| start)
}

/// Up to `count` trailing whitespace-delimited words of `text`, in order.
fn last_words(text: &str, count: usize) -> Vec<(usize, &str)> {
    let mut words = Vec::new();
    let mut end = None;
    for (idx, c) in text.char_indices().rev() {
        if words.len() == count {
            break;
        }
        let after = idx + c.len_utf8();
        match (c.is_whitespace(), end) {
            (true, Some(e)) => {
                words.push((after, &text[after..e]));
                end = None;
            }
            (false, None) => end = Some(after),
            _ => {}
        }
    }
    if words.len() < count
        && let Some(e) = end
    {
        words.push((0, &text[..e]));
    }
    words.reverse();
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_stay_sorted_and_disjoint() {
        let mut spans = SpanTracker::new("buy milk tomorrow !!");
        assert!(spans.claim(AnnotationKind::Priority, 18..20));
        assert!(spans.claim(AnnotationKind::Date, 9..17));
        assert!(!spans.claim(AnnotationKind::Time, 15..19));
        assert!(!spans.claim(AnnotationKind::Time, 3..3));

        let starts: Vec<usize> = spans.annotations().iter().map(|a| a.range.start).collect();
        assert_eq!(starts, vec![9, 18]);
        assert_eq!(
            spans.unclaimed_segments(),
            vec![(0, "buy milk "), (17, " ")]
        );
    }

    #[test]
    fn test_title_keeps_tags_and_drops_removed_spans() {
        let input = "Buy#x milk #shop tomorrow";
        let mut spans = SpanTracker::new(input);
        spans.claim(AnnotationKind::Tag, 11..16);
        spans.claim(AnnotationKind::Date, 17..25);
        let (title, annotations) = spans.finish();
        assert_eq!(title, "Buy#x milk #shop");
        assert_eq!(annotations.len(), 2);
    }

    #[test]
    fn test_removed_span_between_words_leaves_a_gap() {
        let mut spans = SpanTracker::new("a!!b");
        spans.claim(AnnotationKind::Priority, 1..3);
        assert_eq!(spans.finish().0, "a b");
    }

    #[test]
    fn test_split_words_offsets() {
        let words = split_words("  hi  there\tyou ");
        assert_eq!(words, vec![(2, 4, "hi"), (6, 11, "there"), (12, 15, "you")]);
    }

    #[test]
    fn test_resolve_overlaps_prefers_longest() {
        let picked = resolve_overlaps(vec![(0..6, "every"), (0..13, "every monday"), (14..20, "friday")]);
        let names: Vec<&str> = picked.iter().map(|(_, v)| *v).collect();
        assert_eq!(names, vec!["every monday", "friday"]);
    }

    #[test]
    fn test_trailing_keyword() {
        let keywords = vec!["by".to_string(), "avant le".to_string(), "avant".to_string()];
        assert_eq!(trailing_keyword("Submit report by ", &keywords), Some(14));
        assert_eq!(trailing_keyword("Rendre AVANT  LE ", &keywords), Some(7));
        assert_eq!(trailing_keyword("standby ", &keywords), None);
        assert_eq!(trailing_keyword("", &keywords), None);
    }
}
