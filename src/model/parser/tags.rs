// File: ./src/model/parser/tags.rs
use crate::model::item::AnnotationKind;
use crate::model::span::SpanTracker;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TagFields {
    pub labels: Vec<String>,
    pub project: Option<String>,
}

fn is_sigil(c: char) -> bool {
    c == '#' || c == '@'
}

/// Collects `#label` and `@project` tokens. A sigil counts only at the start
/// of the input or after whitespace, so "mail@example" stays text.
pub fn extract(spans: &mut SpanTracker) -> TagFields {
    let input = spans.input();
    let mut fields = TagFields::default();

    for (idx, sigil) in input.char_indices().filter(|(_, c)| is_sigil(*c)) {
        if !input[..idx].chars().next_back().is_none_or(char::is_whitespace) {
            continue;
        }
        let body_start = idx + sigil.len_utf8();
        let body_len = input[body_start..]
            .find(|c: char| c.is_whitespace() || is_sigil(c))
            .unwrap_or(input.len() - body_start);
        if body_len == 0 {
            continue;
        }
        let token = &input[body_start..body_start + body_len];
        let kind = if sigil == '#' {
            AnnotationKind::Tag
        } else {
            AnnotationKind::Project
        };
        if !spans.claim(kind, idx..body_start + body_len) {
            continue;
        }
        log::debug!("{} '{}'", kind, token);
        match kind {
            AnnotationKind::Tag => fields.labels.push(token.to_string()),
            _ => fields.project = Some(token.to_string()),
        }
    }

    fields
}
