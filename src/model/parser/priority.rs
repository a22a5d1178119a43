// File: ./src/model/parser/priority.rs
use crate::model::item::{AnnotationKind, Priority};
use crate::model::language::LanguageConfig;
use crate::model::span::{SpanTracker, split_words};

/// `!`, `!!` or `!!!` as the first word of the input wins over an urgent
/// keyword. Only the first priority found is claimed.
pub fn extract(spans: &mut SpanTracker, config: &LanguageConfig) -> Option<Priority> {
    if let Some(&(start, end, word)) = split_words(spans.input()).first()
        && word.bytes().all(|b| b == b'!')
        && let Some(priority) = Priority::from_exclamations(word.len())
        && spans.claim(AnnotationKind::Priority, start..end)
    {
        log::debug!("priority {} from '{}'", priority, word);
        return Some(priority);
    }

    let re = config.urgent_matcher()?;
    let input = spans.input();
    for (offset, caps) in spans.captures_unclaimed(re) {
        let Some(m) = caps.get(0) else { continue };
        let range = offset + m.start()..offset + m.end();
        if in_sigil_token(input, range.start) {
            continue;
        }
        if spans.claim(AnnotationKind::Priority, range) {
            log::debug!("priority high from keyword '{}'", m.as_str());
            return Some(Priority::High);
        }
    }
    None
}

/// True if the word around `at` is a `#label` or `@project` ("#prod-urgent").
fn in_sigil_token(input: &str, at: usize) -> bool {
    let word = input[..at].rsplit(char::is_whitespace).next().unwrap_or_default();
    word.starts_with(['#', '@']) || word.ends_with(['#', '@'])
}
